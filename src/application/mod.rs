//! Application layer: the register that drives the till.
//!
//! [`register::CashRegister`] owns the till, cross-checks its value after
//! every sale, and journals outcomes. [`simulation`] generates the day's
//! purchases the way customers at the store pay.

pub mod register;
pub mod simulation;
