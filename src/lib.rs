pub mod errors;
pub mod context;
pub mod condition;
pub mod engine;
pub mod cases;
mod parser;
mod comparison;

pub use condition::{ComparisonOperator, Condition, LogicalOperator};
pub use context::Context;
pub use errors::{EvalError, Result};
pub use engine::{evaluate, evaluate_json, evaluate_value, from_json_str, Evaluator};
pub use parser::parse_condition;
pub use comparison::lookup_key;
