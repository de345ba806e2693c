use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LedgerEntry {
    #[serde(rename = "type")]
    pub entry_type: LedgerEntryType,
    #[serde(rename = "account")]
    pub account_number: u32,
    #[serde(default)]
    pub holder: Option<String>,
    #[serde(default)]
    pub amount: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LedgerEntryType {
    Open,
    Deposit,
    Withdraw,
    Display,
}

impl LedgerEntry {
    pub fn holder(&self) -> Result<&str, ConversionError> {
        self.holder
            .as_deref()
            .filter(|holder| !holder.is_empty())
            .ok_or(ConversionError::MissingHolder)
    }

    /// Parsed from the raw field so the written scale survives (`200.0`
    /// stays `200.0`).
    pub fn amount(&self) -> Result<Decimal, ConversionError> {
        let raw = self
            .amount
            .as_deref()
            .filter(|amount| !amount.is_empty())
            .ok_or(ConversionError::MissingAmount)?;
        Decimal::from_str(raw).map_err(|_| ConversionError::InvalidAmount(raw.to_string()))
    }
}

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Missing holder name for entry")]
    MissingHolder,
    #[error("Missing amount for entry")]
    MissingAmount,
    #[error("Invalid amount for entry: {0}")]
    InvalidAmount(String),
}
