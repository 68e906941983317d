//! Evaluators for the expression sub-languages. All of them are free
//! functions over an explicit [`Storage`](crate::storage::Storage) and the
//! namespace `self` resolves to.

mod cast;
mod equation;
mod interpolate;
mod logical;

pub use cast::{cast_value, convert_text, detect_type};
pub use equation::evaluate_equation;
pub use interpolate::interpolate;
pub use logical::evaluate_logical;
