use crate::bank::Bank;
use crate::entry::{LedgerEntry, LedgerEntryType};
use crate::error::{BankError, LedgerError};

use std::io::{Read, Write};
use std::iter::Iterator;

use csv::{ReaderBuilder, Trim};
use tracing::warn;

/// Replays a CSV ledger against `bank`, writing every receipt, rejection and
/// report to `out`. Rows that fail to parse are skipped.
#[inline]
pub fn process_csv_stream(
    bank: &mut Bank,
    reader: impl Read,
    out: &mut impl Write,
) -> Result<(), LedgerError> {
    let mut binding = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let stream = binding
        .deserialize()
        .inspect(|result: &Result<LedgerEntry, csv::Error>| {
            if let Err(e) = result {
                warn!(error = %e, "skipping unparsable ledger row");
            }
        })
        .filter_map(Result::ok);

    process_stream(bank, stream, out)
}

#[inline]
pub fn process_stream(
    bank: &mut Bank,
    stream: impl Iterator<Item = LedgerEntry>,
    out: &mut impl Write,
) -> Result<(), LedgerError> {
    for entry in stream {
        match process_entry(bank, &entry) {
            Ok(Some(line)) => writeln!(out, "{}", line)?,
            Ok(None) => {}
            Err(e) => {
                warn!(
                    entry_type = ?entry.entry_type,
                    account_number = entry.account_number,
                    error = %e,
                    "ledger entry rejected"
                );
                writeln!(out, "{}", e)?;
            }
        }
    }
    Ok(())
}

#[inline]
fn process_entry(bank: &mut Bank, entry: &LedgerEntry) -> Result<Option<String>, BankError> {
    let line = match entry.entry_type {
        LedgerEntryType::Open => {
            bank.open_account(entry.holder()?, entry.account_number, entry.amount()?)?;
            return Ok(None);
        }
        LedgerEntryType::Deposit => bank
            .deposit(entry.account_number, entry.amount()?)?
            .to_string(),
        LedgerEntryType::Withdraw => bank
            .withdraw(entry.account_number, entry.amount()?)?
            .to_string(),
        LedgerEntryType::Display => bank.report(entry.account_number)?.to_string(),
    };
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::{Decimal, dec};

    fn run(bank: &mut Bank, data: &str) -> String {
        let mut out = Vec::new();
        process_csv_stream(bank, data.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_process_csv_stream() {
        let mut bank = Bank::new();
        let data = "type, account, holder, amount\n\
                    open, 1001, John Doe, 500.0\n\
                    open, 1002, Jane Smith, 1000.0\n\
                    deposit, 1001, , 200.0\n\
                    withdraw, 1002, , 300.0\n\
                    display, 1001, ,";

        let output = run(&mut bank, data);

        assert_eq!(
            output,
            "Deposited $200.0. New balance: $700.0\n\
             Withdrew $300.0. New balance: $700.0\n\
             Account Holder: John Doe\n\
             Account Number: 1001\n\
             Balance: $700.0\n\n"
        );
        assert_eq!(bank.accounts.len(), 2);
        assert_eq!(bank.account(1002).unwrap().balance(), dec!(700.0));
    }

    #[test]
    fn test_rejections_are_reported_and_skipped() {
        let mut bank = Bank::new();
        let data = "type, account, holder, amount\n\
                    open, 1, A, 100.0\n\
                    withdraw, 1, , 150.0\n\
                    deposit, 1, , -5.0\n\
                    withdraw, 1, , 0\n\
                    deposit, 2, , 10.0\n\
                    deposit, 1, , 1.5";

        let output = run(&mut bank, data);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Invalid withdrawal amount or insufficient funds.",
                "Invalid deposit amount.",
                "Invalid withdrawal amount or insufficient funds.",
                "Account not found: 2",
                "Deposited $1.5. New balance: $101.5",
            ]
        );
        assert_eq!(bank.account(1).unwrap().balance(), dec!(101.5));
    }

    #[test]
    fn test_incomplete_entries() {
        let mut bank = Bank::new();
        let data = "type, account, holder, amount\n\
                    open, 1, , 100.0\n\
                    open, 2, B, abc\n\
                    open, 3, C, 10\n\
                    deposit, 3, ,";

        let output = run(&mut bank, data);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Invalid entry: Missing holder name for entry",
                "Invalid entry: Invalid amount for entry: abc",
                "Invalid entry: Missing amount for entry",
            ]
        );
        assert_eq!(bank.accounts.len(), 1);
        assert_eq!(bank.account(3).unwrap().balance(), dec!(10));
    }

    #[test]
    fn test_unparsable_rows_are_skipped() {
        let mut bank = Bank::new();
        let data = "type, account, holder, amount\n\
                    open, 1, A, 5\n\
                    transfer, 1, , 5\n\
                    deposit, not-a-number, , 5\n\
                    deposit, 1, , 5";

        let output = run(&mut bank, data);

        assert_eq!(output, "Deposited $5.0. New balance: $10.0\n");
    }

    #[test]
    fn test_overflowing_deposit_is_rejected() {
        let mut bank = Bank::new();
        let data = "type, account, holder, amount\n\
                    open, 1, A, 79228162514264337593543950335\n\
                    deposit, 1, , 1\n\
                    withdraw, 1, , 5";

        let output = run(&mut bank, data);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Invalid deposit amount.",
                "Withdrew $5.0. New balance: $79228162514264337593543950330.0",
            ]
        );
        assert_eq!(
            bank.account(1).unwrap().balance(),
            Decimal::MAX - Decimal::from(5)
        );
    }

    #[test]
    fn test_ledger_amounts_keep_one_fractional_digit() {
        let mut bank = Bank::new();
        let data = "type, account, holder, amount\n\
                    open, 1, A, 100.00\n\
                    withdraw, 1, , 0.5\n\
                    display, 1, ,";

        let output = run(&mut bank, data);

        assert_eq!(
            output,
            "Withdrew $0.5. New balance: $99.5\n\
             Account Holder: A\n\
             Account Number: 1\n\
             Balance: $99.5\n\n"
        );
    }

    #[test]
    fn test_process_stream() {
        let mut bank = Bank::new();
        let entries = vec![
            LedgerEntry {
                entry_type: LedgerEntryType::Open,
                account_number: 1,
                holder: Some("A".to_string()),
                amount: Some("50.0".to_string()),
            },
            LedgerEntry {
                entry_type: LedgerEntryType::Open,
                account_number: 1,
                holder: Some("B".to_string()),
                amount: Some("10.0".to_string()),
            },
            LedgerEntry {
                entry_type: LedgerEntryType::Withdraw,
                account_number: 1,
                holder: None,
                amount: Some("50.0".to_string()),
            },
        ];
        let mut out = Vec::new();

        process_stream(&mut bank, entries.into_iter(), &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Account already exists: 1\nWithdrew $50.0. New balance: $0.0\n"
        );
        assert_eq!(bank.account(1).unwrap().holder_name(), "A");
    }
}
