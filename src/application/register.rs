use crate::domain::bills::BillCounts;
use crate::domain::ports::{JournalEntry, TransactionJournalBox};
use crate::domain::till::{Till, TillSnapshot};
use crate::domain::transaction::{FailureKind, Purchase, TransactionResult};
use crate::error::{Result, TillError};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// The till plus the register's own running tally of what it should hold.
struct Drawer {
    till: Till,
    expected_total: u64,
    seq: u64,
}

/// End-of-day summary produced by [`CashRegister::close`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayReport {
    pub starting_total: u64,
    pub till: TillSnapshot,
    pub expected_total: u64,
    pub settled: u64,
    pub insufficient_payment: u64,
    pub cannot_make_change: u64,
}

impl DayReport {
    pub fn transactions(&self) -> u64 {
        self.settled + self.insufficient_payment + self.cannot_make_change
    }

    pub fn takings(&self) -> u64 {
        self.expected_total - self.starting_total
    }
}

/// The check-out register.
///
/// Owns the till and rings up purchases one at a time. Alongside the till it
/// keeps an independent expected total, bumped by the item cost on every
/// successful sale, and checks after each transaction that the till agrees.
pub struct CashRegister {
    drawer: Mutex<Drawer>,
    starting_total: u64,
    journal: TransactionJournalBox,
}

impl CashRegister {
    /// Opens the register with the morning's starting cash.
    ///
    /// # Arguments
    ///
    /// * `starting_cash` - Bills loaded into the till.
    /// * `journal` - Where every transaction outcome is recorded.
    pub fn open(starting_cash: BillCounts, journal: TransactionJournalBox) -> Self {
        let starting_total = starting_cash.total_value();
        info!(
            starting_total,
            twenties = starting_cash.twenties,
            tens = starting_cash.tens,
            fives = starting_cash.fives,
            ones = starting_cash.ones,
            "Till loaded"
        );
        Self {
            drawer: Mutex::new(Drawer {
                till: Till::load(starting_cash),
                expected_total: starting_total,
                seq: 0,
            }),
            starting_total,
            journal,
        }
    }

    /// Rings up one purchase.
    ///
    /// Underpayment and unbreakable change come back as
    /// [`TransactionResult::Failure`]; they are logged and the day goes on.
    /// `Err(CountOverflow)` rejects a purchase whose offer would overflow a
    /// bill count; the till is untouched and nothing is journaled.
    /// `Err(BalanceMismatch)` means the till total drifted from the expected
    /// total and the till can no longer be trusted.
    pub async fn ring_up(&self, purchase: Purchase) -> Result<TransactionResult> {
        let mut drawer = self.drawer.lock().await;
        let seq = drawer.seq + 1;
        let cost = purchase.cost.value();

        debug!(
            seq,
            cost,
            paid = purchase.offer.amount(),
            offer = %purchase.offer.bills(),
            "Customer is making a purchase"
        );

        let result = drawer.till.settle_transaction(purchase.cost, &purchase.offer)?;
        drawer.seq = seq;

        match &result {
            TransactionResult::Success { change } => {
                drawer.expected_total += cost;
                info!(seq, cost, change = %change, "Cashier returns change");
            }
            TransactionResult::Failure { kind } => {
                warn!(seq, cost, reason = %kind, "Could not make transaction");
            }
        }

        let till_total = drawer.till.total_value();
        if till_total != drawer.expected_total {
            return Err(TillError::BalanceMismatch {
                expected: drawer.expected_total,
                actual: till_total,
            });
        }
        debug!(seq, till_total, "Till balanced");

        self.journal
            .record(JournalEntry {
                seq,
                purchase,
                result,
                till_total,
            })
            .await?;

        Ok(result)
    }

    pub async fn snapshot(&self) -> TillSnapshot {
        self.drawer.lock().await.till.snapshot()
    }

    pub async fn expected_total(&self) -> u64 {
        self.drawer.lock().await.expected_total
    }

    /// Closes the register and tallies the day from the journal.
    pub async fn close(self) -> Result<DayReport> {
        let drawer = self.drawer.into_inner();
        let mut report = DayReport {
            starting_total: self.starting_total,
            till: drawer.till.snapshot(),
            expected_total: drawer.expected_total,
            settled: 0,
            insufficient_payment: 0,
            cannot_make_change: 0,
        };

        for entry in self.journal.entries().await? {
            match entry.result {
                TransactionResult::Success { .. } => report.settled += 1,
                TransactionResult::Failure {
                    kind: FailureKind::InsufficientPayment { .. },
                } => report.insufficient_payment += 1,
                TransactionResult::Failure {
                    kind: FailureKind::CannotMakeChange { .. },
                } => report.cannot_make_change += 1,
            }
        }

        info!(
            transactions = report.transactions(),
            settled = report.settled,
            takings = report.takings(),
            till_total = report.till.total_value,
            "Register closed"
        );
        Ok(report)
    }
}
