//! Input and output formats around the register.

pub mod csv;
