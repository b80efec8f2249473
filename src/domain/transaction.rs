use super::bills::BillCounts;
use crate::error::{Result, TillError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The price of an item, in whole dollars. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Cost(u32);

impl Cost {
    pub fn new(value: u32) -> Result<Self> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(TillError::ValidationError(
                "Cost must be positive".to_string(),
            ))
        }
    }

    pub fn value(&self) -> u64 {
        u64::from(self.0)
    }
}

impl TryFrom<u32> for Cost {
    type Error = TillError;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Cost> for u32 {
    fn from(cost: Cost) -> Self {
        cost.0
    }
}

/// Bills a customer hands over for one purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentOffer(BillCounts);

impl PaymentOffer {
    pub const fn new(bills: BillCounts) -> Self {
        Self(bills)
    }

    pub fn bills(&self) -> &BillCounts {
        &self.0
    }

    pub fn amount(&self) -> u64 {
        self.0.total_value()
    }
}

impl From<BillCounts> for PaymentOffer {
    fn from(bills: BillCounts) -> Self {
        Self(bills)
    }
}

/// One item rung up at the register together with the customer's payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purchase {
    pub cost: Cost,
    pub offer: PaymentOffer,
}

impl Purchase {
    pub fn new(cost: Cost, offer: PaymentOffer) -> Self {
        Self { cost, offer }
    }
}

/// A purchase as it appears in a CSV file: `cost,twenties,tens,fives,ones`.
///
/// Bill columns left empty count as zero.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct PurchaseRecord {
    pub cost: u32,
    #[serde(default)]
    pub twenties: Option<u32>,
    #[serde(default)]
    pub tens: Option<u32>,
    #[serde(default)]
    pub fives: Option<u32>,
    #[serde(default)]
    pub ones: Option<u32>,
}

impl TryFrom<PurchaseRecord> for Purchase {
    type Error = TillError;

    fn try_from(record: PurchaseRecord) -> Result<Self> {
        let bills = BillCounts::new(
            record.twenties.unwrap_or_default(),
            record.tens.unwrap_or_default(),
            record.fives.unwrap_or_default(),
            record.ones.unwrap_or_default(),
        );
        Ok(Purchase::new(Cost::new(record.cost)?, bills.into()))
    }
}

/// Why a transaction was turned down. The till is untouched in both cases.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailureKind {
    #[error("Not enough money provided: paid {paid}, cost {cost}")]
    InsufficientPayment { paid: u64, cost: u64 },
    #[error("Can't make change. Do you have anything smaller? ({remaining} of {change_due} short)")]
    CannotMakeChange { change_due: u64, remaining: u64 },
}

/// Outcome of settling one transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TransactionResult {
    /// The till took the payment and handed back `change`.
    Success { change: BillCounts },
    /// Nothing happened as far as the till is concerned.
    Failure { kind: FailureKind },
}

impl TransactionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, TransactionResult::Success { .. })
    }

    pub fn change(&self) -> Option<&BillCounts> {
        match self {
            TransactionResult::Success { change } => Some(change),
            TransactionResult::Failure { .. } => None,
        }
    }

    pub fn failure(&self) -> Option<FailureKind> {
        match self {
            TransactionResult::Success { .. } => None,
            TransactionResult::Failure { kind } => Some(*kind),
        }
    }
}
