//! Journal backends.

pub mod in_memory;
