use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::stores::{EntityId, LedgerEntry};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    Open,
    Deposit,
    Withdraw,
}

/// One row of the operations input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Operation {
    #[serde(rename = "type")]
    pub op_type: OperationType,
    pub account: EntityId,
    #[serde(deserialize_with = "deserialize_non_empty")]
    pub owner: Option<String>,
    #[serde(deserialize_with = "deserialize_decimal_4dp")]
    pub amount: Option<Decimal>,
}

/// One row of the balances output.
#[derive(Debug, Serialize, PartialEq)]
pub struct AccountRow {
    pub account: EntityId,
    pub owner: String,
    pub balance: Decimal,
}

impl From<&LedgerEntry> for AccountRow {
    fn from(entry: &LedgerEntry) -> Self {
        Self {
            account: entry.id,
            owner: entry.account.owner().to_string(),
            balance: entry.account.balance().normalize(),
        }
    }
}

fn deserialize_non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|opt| opt.filter(|s| !s.is_empty()))
}

fn deserialize_decimal_4dp<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    // Parsed from the raw text so integers wider than u64 are still read as decimals.
    Option::<String>::deserialize(deserializer)?
        .filter(|raw| !raw.is_empty())
        .map(|raw| {
            Decimal::from_str(&raw)
                .map(|dec| dec.round_dp_with_strategy(4, RoundingStrategy::ToZero))
                .map_err(de::Error::custom)
        })
        .transpose()
}
