// SPDX-License-Identifier: MIT

//! fx-eval: a small embeddable condition evaluator
//!
//! Values are dynamically typed and their kind is only resolved when an
//! expression tree is evaluated. See [`fx`] for the value model, the operator
//! registry and the built-in operator families.

pub mod error;
pub mod fx;
pub mod report;

pub use error::{FxError, FxResult};
