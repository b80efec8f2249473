use super::bills::{BillCounts, Denomination};
use super::transaction::{Cost, FailureKind, PaymentOffer, TransactionResult};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Read-only view of the till at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TillSnapshot {
    pub bills: BillCounts,
    pub total_value: u64,
}

/// The cash drawer.
///
/// Bill counts only ever change through [`Till::settle_transaction`], and
/// only when the whole transaction goes through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Till {
    bills: BillCounts,
}

/// What the simulate phase decided, before anything is written back.
#[derive(Debug, PartialEq, Eq)]
enum Settlement {
    Commit { drawer: BillCounts, change: BillCounts },
    Reject(FailureKind),
}

impl Till {
    /// Loads the drawer for the day.
    pub fn load(bills: BillCounts) -> Self {
        Self { bills }
    }

    pub fn snapshot(&self) -> TillSnapshot {
        TillSnapshot {
            bills: self.bills,
            total_value: self.bills.total_value(),
        }
    }

    pub fn bills(&self) -> &BillCounts {
        &self.bills
    }

    pub fn total_value(&self) -> u64 {
        self.bills.total_value()
    }

    /// Takes the customer's payment for an item and hands back change.
    ///
    /// Either the payment goes in and the change comes out, or the till is
    /// left exactly as it was and a [`FailureKind`] is returned inside
    /// [`TransactionResult::Failure`]. `Err` is only returned when a bill
    /// count would overflow, which is a caller bug rather than a business
    /// outcome; the till is untouched then too.
    pub fn settle_transaction(
        &mut self,
        cost: Cost,
        offer: &PaymentOffer,
    ) -> Result<TransactionResult> {
        match simulate(&self.bills, cost, offer)? {
            Settlement::Commit { drawer, change } => {
                self.bills = drawer;
                Ok(TransactionResult::Success { change })
            }
            Settlement::Reject(kind) => Ok(TransactionResult::Failure { kind }),
        }
    }
}

/// Works out the transaction against a copy of the drawer.
fn simulate(bills: &BillCounts, cost: Cost, offer: &PaymentOffer) -> Result<Settlement> {
    let paid = offer.amount();
    let Some(change_due) = paid.checked_sub(cost.value()) else {
        return Ok(Settlement::Reject(FailureKind::InsufficientPayment {
            paid,
            cost: cost.value(),
        }));
    };

    let mut drawer = *bills;
    drawer.deposit_all(offer.bills())?;

    let (change, remaining) = make_change(&mut drawer, change_due)?;
    if remaining > 0 {
        return Ok(Settlement::Reject(FailureKind::CannotMakeChange {
            change_due,
            remaining,
        }));
    }

    Ok(Settlement::Commit { drawer, change })
}

/// Greedy, largest bill first, no backtracking.
///
/// Removes the change from `drawer` and returns it with whatever amount
/// could not be covered.
fn make_change(drawer: &mut BillCounts, mut due: u64) -> Result<(BillCounts, u64)> {
    let mut change = BillCounts::EMPTY;
    for denomination in Denomination::DESCENDING {
        let wanted = u32::try_from(due / denomination.value()).unwrap_or(u32::MAX);
        let taken = drawer.withdraw_up_to(denomination, wanted);
        if taken == 0 {
            continue;
        }
        due -= u64::from(taken) * denomination.value();
        change.deposit(denomination, taken)?;
    }
    Ok((change, due))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn morning_till() -> Till {
        Till::load(BillCounts::new(5, 10, 20, 50))
    }

    fn cost(value: u32) -> Cost {
        Cost::new(value).unwrap()
    }

    fn offer(twenties: u32, tens: u32, fives: u32, ones: u32) -> PaymentOffer {
        BillCounts::new(twenties, tens, fives, ones).into()
    }

    #[test]
    fn test_exact_payment_needs_no_change() {
        let mut till = morning_till();
        let result = till.settle_transaction(cost(6), &offer(0, 0, 1, 1)).unwrap();

        assert_eq!(
            result,
            TransactionResult::Success {
                change: BillCounts::EMPTY
            }
        );
        assert_eq!(till.total_value(), 356);
        assert_eq!(*till.bills(), BillCounts::new(5, 10, 21, 51));
    }

    #[test]
    fn test_underpayment_leaves_till_untouched() {
        let mut till = morning_till();
        till.settle_transaction(cost(6), &offer(0, 0, 1, 1)).unwrap();
        let before = till.clone();

        let result = till.settle_transaction(cost(41), &offer(2, 0, 0, 0)).unwrap();

        assert_eq!(
            result.failure(),
            Some(FailureKind::InsufficientPayment { paid: 40, cost: 41 })
        );
        assert_eq!(till, before);
        assert_eq!(till.total_value(), 356);
    }

    #[test]
    fn test_change_uses_offered_bills() {
        let mut till = morning_till();
        till.settle_transaction(cost(6), &offer(0, 0, 1, 1)).unwrap();

        let result = till.settle_transaction(cost(17), &offer(2, 0, 0, 1)).unwrap();

        assert_eq!(result.change(), Some(&BillCounts::new(1, 0, 0, 4)));
        assert_eq!(till.total_value(), 373);
        // 5 + 2 offered - 1 returned
        assert_eq!(till.bills().twenties, 6);
        // 51 + 1 offered - 4 returned
        assert_eq!(till.bills().ones, 48);
    }

    #[test]
    fn test_short_on_ones_cannot_make_change() {
        let mut till = Till::load(BillCounts::new(5, 10, 20, 2));
        let before = till.clone();

        let result = till.settle_transaction(cost(17), &offer(2, 0, 0, 1)).unwrap();

        assert_eq!(
            result.failure(),
            Some(FailureKind::CannotMakeChange {
                change_due: 24,
                remaining: 1
            })
        );
        assert_eq!(till, before);
    }

    #[test]
    fn test_offered_bills_are_not_kept_on_failure() {
        let mut till = Till::load(BillCounts::EMPTY);

        let result = till.settle_transaction(cost(3), &offer(0, 0, 1, 0)).unwrap();

        assert!(!result.is_success());
        assert_eq!(*till.bills(), BillCounts::EMPTY);
    }

    #[test]
    fn test_greedy_takes_largest_first() {
        let mut till = Till::load(BillCounts::new(2, 2, 2, 10));

        let result = till.settle_transaction(cost(2), &offer(2, 0, 0, 0)).unwrap();

        // 38 = 20 + 10 + 5 + 1 + 1 + 1
        assert_eq!(result.change(), Some(&BillCounts::new(1, 1, 1, 3)));
    }

    #[test]
    fn test_greedy_skips_missing_denominations() {
        let mut till = Till::load(BillCounts::new(0, 0, 0, 30));

        let result = till.settle_transaction(cost(1), &offer(1, 0, 0, 0)).unwrap();

        assert_eq!(result.change(), Some(&BillCounts::new(0, 0, 0, 19)));
        assert_eq!(*till.bills(), BillCounts::new(1, 0, 0, 11));
    }

    #[test]
    fn test_commit_retains_exactly_the_cost() {
        let mut till = morning_till();
        for value in [2, 13, 19, 27, 38, 49] {
            let before = till.total_value();
            let result = till.settle_transaction(cost(value), &offer(3, 0, 0, 0)).unwrap();
            assert!(result.is_success());
            assert_eq!(till.total_value(), before + u64::from(value));
        }
    }

    #[test]
    fn test_same_state_same_change() {
        let till = morning_till();
        let mut first = till.clone();
        let mut second = till.clone();

        let a = first.settle_transaction(cost(23), &offer(2, 1, 0, 0)).unwrap();
        let b = second.settle_transaction(cost(23), &offer(2, 1, 0, 0)).unwrap();

        assert_eq!(a, b);
        assert_eq!(first, second);
    }

    #[test]
    fn test_snapshot_does_not_mutate() {
        let till = morning_till();
        let first = till.snapshot();
        let second = till.snapshot();

        assert_eq!(first, second);
        assert_eq!(first.total_value, 350);
        assert_eq!(first.bills.count(Denomination::One), 50);
    }

    #[test]
    fn test_overflow_is_an_error_not_a_failure() {
        let mut till = Till::load(BillCounts::new(u32::MAX, 0, 0, 0));
        let before = till.clone();

        let result = till.settle_transaction(cost(20), &offer(1, 0, 0, 0));

        assert!(result.is_err());
        assert_eq!(till, before);
    }
}
