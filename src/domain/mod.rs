//! Domain layer: bills, the till and its transaction types.
//!
//! Nothing in here performs I/O. The till is mutated only by
//! [`till::Till::settle_transaction`].

pub mod bills;
pub mod ports;
pub mod till;
pub mod transaction;
