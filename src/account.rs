use std::fmt;
use std::fmt::Display;

use rust_decimal::Decimal;

use crate::error::{AccountError, Operation};

#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    holder_name: String,
    account_number: u32,
    balance: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    Deposit,
    Withdrawal,
}

/// Confirmation of an applied deposit or withdrawal.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub movement: Movement,
    pub amount: Decimal,
    pub balance: Decimal,
}

impl Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let verb = match self.movement {
            Movement::Deposit => "Deposited",
            Movement::Withdrawal => "Withdrew",
        };
        let amount = Money(self.amount);
        let balance = Money(self.balance);
        write!(f, "{} ${}. New balance: ${}", verb, amount, balance)
    }
}

/// Renders an amount with trailing zeros dropped but at least one fractional
/// digit: `10` as `10.0`, `99.50` as `99.5`.
struct Money(Decimal);

impl Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let amount = self.0.normalize();
        if amount.scale() == 0 {
            write!(f, "{}.0", amount)
        } else {
            write!(f, "{}", amount)
        }
    }
}

/// Read-only view of an account, printed as three lines.
pub struct AccountReport<'a> {
    account: &'a Account,
}

impl Display for AccountReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Account Holder: {}", self.account.holder_name)?;
        writeln!(f, "Account Number: {}", self.account.account_number)?;
        writeln!(f, "Balance: ${}", Money(self.account.balance))
    }
}

impl Account {
    pub fn new(
        holder_name: impl Into<String>,
        account_number: u32,
        initial_balance: Decimal,
    ) -> Self {
        Account {
            holder_name: holder_name.into(),
            account_number,
            balance: initial_balance,
        }
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn account_number(&self) -> u32 {
        self.account_number
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// A deposit that would overflow the balance is rejected as an invalid
    /// amount.
    pub fn deposit(&mut self, amount: Decimal) -> Result<Receipt, AccountError> {
        let invalid = AccountError::InvalidAmount {
            operation: Operation::Deposit,
            amount,
        };
        if amount <= Decimal::ZERO {
            return Err(invalid);
        }

        self.balance = self.balance.checked_add(amount).ok_or(invalid)?;
        Ok(Receipt {
            movement: Movement::Deposit,
            amount,
            balance: self.balance,
        })
    }

    pub fn withdraw(&mut self, amount: Decimal) -> Result<Receipt, AccountError> {
        if amount <= Decimal::ZERO {
            return Err(AccountError::InvalidAmount {
                operation: Operation::Withdrawal,
                amount,
            });
        }
        if amount > self.balance {
            return Err(AccountError::InsufficientFunds {
                amount,
                balance: self.balance,
            });
        }

        self.balance -= amount;
        Ok(Receipt {
            movement: Movement::Withdrawal,
            amount,
            balance: self.balance,
        })
    }

    #[inline]
    pub fn report(&self) -> AccountReport<'_> {
        AccountReport { account: self }
    }
}
