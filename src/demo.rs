use std::io::Write;

use rust_decimal::dec;

use crate::bank::Bank;
use crate::error::LedgerError;

/// The fixed sample session: two accounts, one deposit, one withdrawal, with
/// balances printed before and after.
pub fn run_sample_session(out: &mut impl Write) -> Result<Bank, LedgerError> {
    let mut bank = Bank::new();
    bank.open_account("John Doe", 1001, dec!(500.0))?;
    bank.open_account("Jane Smith", 1002, dec!(1000.0))?;

    writeln!(out, "Initial Balances:")?;
    write!(out, "{}", bank)?;

    for outcome in [
        bank.deposit(1001, dec!(200.0)).map(|r| r.to_string()),
        bank.withdraw(1002, dec!(300.0)).map(|r| r.to_string()),
    ] {
        match outcome {
            Ok(line) => writeln!(out, "{}", line)?,
            Err(e) => writeln!(out, "{}", e)?,
        }
    }

    writeln!(out, "\nUpdated Balances:")?;
    write!(out, "{}", bank)?;
    Ok(bank)
}
