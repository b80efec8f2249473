use super::transaction::{Purchase, TransactionResult};
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One line of the register's journal: what was rung up and how it ended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// 1-based position in the day.
    pub seq: u64,
    pub purchase: Purchase,
    pub result: TransactionResult,
    /// Till value right after the transaction.
    pub till_total: u64,
}

#[async_trait]
pub trait TransactionJournal: Send + Sync {
    async fn record(&self, entry: JournalEntry) -> Result<()>;
    async fn entries(&self) -> Result<Vec<JournalEntry>>;
}

pub type TransactionJournalBox = Box<dyn TransactionJournal>;
