//! Core domain types for Hit and Blow
//!
//! This module contains the fundamental value types: digit sequences and the
//! Hit/Blow feedback between them. Everything here is pure and deterministic,
//! except `Code::random`, which draws from a caller-supplied RNG.

mod code;
mod outcome;

pub use code::{Code, CodeError, MAX_DIGITS};
pub use outcome::{Outcome, OutcomeError, bucket_counts};
