use std::collections::BTreeMap;
use std::fmt;
use std::fmt::Display;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::account::{Account, AccountReport, Receipt};
use crate::error::{AccountError, BankError, Operation};

pub type Accounts = BTreeMap<u32, Account>;

/// Accounts keyed by account number, iterated in ascending order.
pub struct Bank {
    pub accounts: Accounts,
}

impl Default for Bank {
    fn default() -> Self {
        Self::new()
    }
}

impl Bank {
    pub fn new() -> Self {
        Bank {
            accounts: Accounts::new(),
        }
    }

    pub fn open_account(
        &mut self,
        holder_name: &str,
        account_number: u32,
        initial_balance: Decimal,
    ) -> Result<&Account, BankError> {
        if self.accounts.contains_key(&account_number) {
            warn!(account_number, "account number already in use");
            return Err(BankError::DuplicateAccount(account_number));
        }
        if initial_balance < Decimal::ZERO {
            warn!(account_number, %initial_balance, "negative opening balance");
            return Err(AccountError::InvalidAmount {
                operation: Operation::Open,
                amount: initial_balance,
            }
            .into());
        }

        debug!(account_number, holder_name, %initial_balance, "account opened");
        Ok(self
            .accounts
            .entry(account_number)
            .or_insert(Account::new(holder_name, account_number, initial_balance)))
    }

    #[inline]
    pub fn account(&self, account_number: u32) -> Result<&Account, BankError> {
        self.accounts
            .get(&account_number)
            .ok_or(BankError::AccountNotFound(account_number))
    }

    #[inline]
    fn account_mut(&mut self, account_number: u32) -> Result<&mut Account, BankError> {
        self.accounts
            .get_mut(&account_number)
            .ok_or(BankError::AccountNotFound(account_number))
    }

    pub fn deposit(&mut self, account_number: u32, amount: Decimal) -> Result<Receipt, BankError> {
        let receipt = self.account_mut(account_number)?.deposit(amount);
        Ok(log_outcome(account_number, Operation::Deposit, receipt)?)
    }

    pub fn withdraw(&mut self, account_number: u32, amount: Decimal) -> Result<Receipt, BankError> {
        let receipt = self.account_mut(account_number)?.withdraw(amount);
        Ok(log_outcome(account_number, Operation::Withdrawal, receipt)?)
    }

    #[inline]
    pub fn report(&self, account_number: u32) -> Result<AccountReport<'_>, BankError> {
        Ok(self.account(account_number)?.report())
    }
}

fn log_outcome(
    account_number: u32,
    operation: Operation,
    outcome: Result<Receipt, AccountError>,
) -> Result<Receipt, AccountError> {
    match &outcome {
        Ok(receipt) => {
            debug!(
                account_number,
                %operation,
                amount = %receipt.amount,
                balance = %receipt.balance,
                "applied"
            );
        }
        Err(e) => {
            warn!(account_number, %operation, error = ?e, "rejected");
        }
    }
    outcome
}

impl Display for Bank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for account in self.accounts.values() {
            writeln!(f, "{}", account.report())?;
        }
        Ok(())
    }
}
