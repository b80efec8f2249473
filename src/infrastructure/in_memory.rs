use crate::domain::ports::{JournalEntry, TransactionJournal};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory transaction journal.
///
/// Uses `Arc<RwLock<Vec<JournalEntry>>>` so clones share the same log.
/// Entries are kept in the order they were recorded.
#[derive(Default, Clone)]
pub struct InMemoryJournal {
    entries: Arc<RwLock<Vec<JournalEntry>>>,
}

impl InMemoryJournal {
    /// Creates a new, empty in-memory journal.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TransactionJournal for InMemoryJournal {
    async fn record(&self, entry: JournalEntry) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.push(entry);
        Ok(())
    }

    async fn entries(&self) -> Result<Vec<JournalEntry>> {
        let entries = self.entries.read().await;
        Ok(entries.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::bills::BillCounts;
    use crate::domain::transaction::{Cost, FailureKind, Purchase, TransactionResult};

    fn entry(seq: u64, result: TransactionResult) -> JournalEntry {
        JournalEntry {
            seq,
            purchase: Purchase::new(Cost::new(6).unwrap(), BillCounts::new(0, 0, 1, 1).into()),
            result,
            till_total: 356,
        }
    }

    #[tokio::test]
    async fn test_in_memory_journal_record_and_read_back() {
        let journal = InMemoryJournal::new();
        let settled = entry(
            1,
            TransactionResult::Success {
                change: BillCounts::EMPTY,
            },
        );

        journal.record(settled.clone()).await.unwrap();
        let entries = journal.entries().await.unwrap();
        assert_eq!(entries, vec![settled]);
    }

    #[tokio::test]
    async fn test_in_memory_journal_keeps_order() {
        let journal = InMemoryJournal::new();
        let rejected = TransactionResult::Failure {
            kind: FailureKind::InsufficientPayment { paid: 5, cost: 6 },
        };
        for seq in 1..=3 {
            journal.record(entry(seq, rejected)).await.unwrap();
        }

        let seqs: Vec<u64> = journal
            .entries()
            .await
            .unwrap()
            .iter()
            .map(|e| e.seq)
            .collect();
        assert_eq!(seqs, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_clones_share_the_log() {
        let journal = InMemoryJournal::new();
        let handle = journal.clone();
        journal
            .record(entry(
                1,
                TransactionResult::Success {
                    change: BillCounts::EMPTY,
                },
            ))
            .await
            .unwrap();

        assert_eq!(handle.entries().await.unwrap().len(), 1);
    }
}
