//! Polish Types
//!
//! This crate defines the value types shared by the Polish-notation calculator
//! crates (currently `polish-calculator` and `polish-cli`). Keeping `Number` here
//! lets the CLI format and serialize results without depending on evaluator
//! internals.

#![deny(warnings)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
#![deny(clippy::cargo)]
#![deny(missing_docs)]

mod types;
pub use types::Number;
