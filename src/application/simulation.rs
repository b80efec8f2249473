use super::register::CashRegister;
use crate::domain::bills::BillCounts;
use crate::domain::transaction::{Cost, PaymentOffer, Purchase};
use crate::error::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

/// Item costs for the fixed test day.
pub const SAMPLE_COSTS: [u32; 8] = [6, 10, 17, 20, 31, 36, 40, 41];

pub const MIN_ITEM_COST: u32 = 2;
pub const MAX_ITEM_COST: u32 = 49;

/// A full day at the thrift store.
pub const DEFAULT_TRANSACTIONS: usize = 500;

/// Which purchases a simulated day is made of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayPlan {
    /// The costs in [`SAMPLE_COSTS`], in order.
    Sample,
    /// `transactions` costs drawn uniformly from `MIN_ITEM_COST..=MAX_ITEM_COST`.
    /// A fixed `seed` replays the same day.
    Random {
        transactions: usize,
        seed: Option<u64>,
    },
}

impl Default for DayPlan {
    fn default() -> Self {
        DayPlan::Random {
            transactions: DEFAULT_TRANSACTIONS,
            seed: None,
        }
    }
}

/// How a customer pays for an item costing `cost`.
///
/// One $1 when the cost is odd, one $5 when it ends in 8 or 9, one $10 when
/// `cost % 20` is above 13, and one $20 under $20 or two otherwise. Some
/// costs end up underpaid, e.g. $45 gets $41.
pub fn customer_offer(cost: u32) -> PaymentOffer {
    let ones = cost % 2;
    let fives = u32::from(cost % 10 > 7);
    let tens = u32::from(cost % 20 > 13);
    let twenties = if cost < 20 { 1 } else { 2 };
    BillCounts::new(twenties, tens, fives, ones).into()
}

/// Builds the day's purchases for `plan`.
pub fn purchases(plan: &DayPlan) -> Result<Vec<Purchase>> {
    let costs: Vec<u32> = match plan {
        DayPlan::Sample => SAMPLE_COSTS.to_vec(),
        DayPlan::Random { transactions, seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(*seed),
                None => StdRng::from_entropy(),
            };
            (0..*transactions)
                .map(|_| rng.gen_range(MIN_ITEM_COST..=MAX_ITEM_COST))
                .collect()
        }
    };

    costs
        .into_iter()
        .map(|cost| Cost::new(cost).map(|c| Purchase::new(c, customer_offer(cost))))
        .collect()
}

/// Rings up every purchase in order, stopping at the first till error.
pub async fn run_day<I>(register: &CashRegister, purchases: I) -> Result<()>
where
    I: IntoIterator<Item = Purchase>,
{
    let mut rung_up = 0usize;
    for purchase in purchases {
        register.ring_up(purchase).await?;
        rung_up += 1;
    }
    info!(rung_up, "Simulated day finished");
    Ok(())
}
