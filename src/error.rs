use std::fmt;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::entry::ConversionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Open,
    Deposit,
    Withdrawal,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Operation::Open => write!(f, "opening balance"),
            Operation::Deposit => write!(f, "deposit"),
            Operation::Withdrawal => write!(f, "withdrawal"),
        }
    }
}

/// Rejection of a single account operation. The account is left untouched.
///
/// A rejected withdrawal prints the same text whether the amount was
/// non-positive or larger than the balance; the variant still tells them
/// apart.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AccountError {
    #[error("{}", invalid_amount_message(.operation))]
    InvalidAmount { operation: Operation, amount: Decimal },
    #[error("Invalid withdrawal amount or insufficient funds.")]
    InsufficientFunds { amount: Decimal, balance: Decimal },
}

fn invalid_amount_message(operation: &Operation) -> &'static str {
    match operation {
        Operation::Withdrawal => "Invalid withdrawal amount or insufficient funds.",
        Operation::Deposit => "Invalid deposit amount.",
        Operation::Open => "Invalid opening balance.",
    }
}

#[derive(Error, Debug)]
pub enum BankError {
    #[error(transparent)]
    Account(#[from] AccountError),
    #[error("Account not found: {0}")]
    AccountNotFound(u32),
    #[error("Account already exists: {0}")]
    DuplicateAccount(u32),
    #[error("Invalid entry: {0}")]
    InvalidEntry(#[from] ConversionError),
}

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error(transparent)]
    Bank(#[from] BankError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
