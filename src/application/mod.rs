//! Application layer: the payment computation and the prompt session that
//! feeds it.
//!
//! `session::run` is the entry point used by the binary. It collects the
//! loan terms, computes the quote and writes the report.

pub mod calculator;
pub mod session;
