//! Domain types and validation rules for a mortgage calculation.

pub mod input;
pub mod loan;
pub mod ports;
