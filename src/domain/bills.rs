use crate::error::{Result, TillError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A bill value the till recognises.
///
/// Each value divides the next larger one, so greedy change-making finds
/// exact change whenever any exists, even with a limited supply of bills.
/// New variants must keep that property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Denomination {
    One,
    Five,
    Ten,
    Twenty,
}

impl Denomination {
    /// Largest first, the order change is made in.
    pub const DESCENDING: [Denomination; 4] = [
        Denomination::Twenty,
        Denomination::Ten,
        Denomination::Five,
        Denomination::One,
    ];

    pub const fn value(self) -> u64 {
        match self {
            Denomination::One => 1,
            Denomination::Five => 5,
            Denomination::Ten => 10,
            Denomination::Twenty => 20,
        }
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.value())
    }
}

/// Number of bills held per denomination.
///
/// Used for the till drawer, for what a customer hands over, and for the
/// change handed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BillCounts {
    pub twenties: u32,
    pub tens: u32,
    pub fives: u32,
    pub ones: u32,
}

impl BillCounts {
    pub const EMPTY: Self = Self {
        twenties: 0,
        tens: 0,
        fives: 0,
        ones: 0,
    };

    pub const fn new(twenties: u32, tens: u32, fives: u32, ones: u32) -> Self {
        Self {
            twenties,
            tens,
            fives,
            ones,
        }
    }

    pub fn count(&self, denomination: Denomination) -> u32 {
        match denomination {
            Denomination::One => self.ones,
            Denomination::Five => self.fives,
            Denomination::Ten => self.tens,
            Denomination::Twenty => self.twenties,
        }
    }

    fn count_mut(&mut self, denomination: Denomination) -> &mut u32 {
        match denomination {
            Denomination::One => &mut self.ones,
            Denomination::Five => &mut self.fives,
            Denomination::Ten => &mut self.tens,
            Denomination::Twenty => &mut self.twenties,
        }
    }

    /// Sum of `count × value` over every denomination.
    pub fn total_value(&self) -> u64 {
        Denomination::DESCENDING
            .iter()
            .map(|&d| u64::from(self.count(d)) * d.value())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// Iterates `(denomination, count)` from the largest bill down.
    pub fn iter(&self) -> impl Iterator<Item = (Denomination, u32)> + '_ {
        Denomination::DESCENDING
            .into_iter()
            .map(move |d| (d, self.count(d)))
    }

    /// Adds `count` bills of `denomination`.
    pub fn deposit(&mut self, denomination: Denomination, count: u32) -> Result<()> {
        let slot = self.count_mut(denomination);
        *slot = slot
            .checked_add(count)
            .ok_or(TillError::CountOverflow { denomination })?;
        Ok(())
    }

    /// Adds every bill in `other`.
    pub fn deposit_all(&mut self, other: &BillCounts) -> Result<()> {
        for (denomination, count) in other.iter() {
            self.deposit(denomination, count)?;
        }
        Ok(())
    }

    /// Removes up to `wanted` bills of `denomination` and returns how many were removed.
    pub fn withdraw_up_to(&mut self, denomination: Denomination, wanted: u32) -> u32 {
        let slot = self.count_mut(denomination);
        let taken = wanted.min(*slot);
        *slot -= taken;
        taken
    }
}

impl fmt::Display for BillCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "nothing");
        }
        let parts: Vec<String> = self
            .iter()
            .filter(|(_, count)| *count > 0)
            .map(|(d, count)| format!("{count} x {d}"))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}
