use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, trace};

use crate::comparison::compare;
use crate::condition::{Condition, LogicalOperator};
use crate::context::Context;
use crate::errors::Result;
use crate::parser::parse_condition;

/// =========================
/// Public API
/// =========================

/// Evaluate an already classified condition tree.
///
/// `AND` short-circuits on the first false operand and is `true` with no
/// operands; `OR` short-circuits on the first true operand and is `false`
/// with no operands. Recursion depth follows the tree; there is no limit.
pub fn evaluate(condition: &Condition, context: &Context) -> bool {
    let result = eval_node(condition, context, 0);
    debug!(%condition, result, "evaluated condition");
    result
}

/// Classify a raw JSON tree and evaluate it. A malformed node anywhere in
/// the tree aborts before anything is evaluated.
pub fn evaluate_value(condition: &Value, context: &Context) -> Result<bool> {
    let condition = parse_condition(condition)?;
    Ok(evaluate(&condition, context))
}

/// Convenience: both inputs as JSON text.
pub fn evaluate_json(condition_json: &str, context_json: &str) -> Result<bool> {
    let condition: Value = from_json_str(condition_json)?;
    let context: Context = from_json_str(context_json)?;
    evaluate_value(&condition, &context)
}

/// Deserialize JSON text without serde_json's nesting limit, so condition
/// trees of any depth are accepted.
pub fn from_json_str<T: DeserializeOwned>(text: &str) -> Result<T> {
    let mut de = serde_json::Deserializer::from_str(text);
    de.disable_recursion_limit();
    let value = T::deserialize(&mut de)?;
    de.end()?;
    Ok(value)
}

/// Binds a context so several conditions can be checked against it.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    context: &'a Context,
}

impl<'a> Evaluator<'a> {
    pub fn new(context: &'a Context) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &'a Context {
        self.context
    }

    pub fn eval(&self, condition: &Condition) -> bool {
        evaluate(condition, self.context)
    }

    pub fn eval_value(&self, condition: &Value) -> Result<bool> {
        evaluate_value(condition, self.context)
    }
}

/// =========================
/// Internal
/// =========================

fn eval_node(condition: &Condition, ctx: &Context, depth: usize) -> bool {
    match condition {
        Condition::Comparison {
            operator,
            variable,
            literal,
        } => {
            let matched = compare(*operator, variable.as_deref(), literal, ctx);
            trace!(depth, variable = ?variable, literal = %literal, matched, "comparison");
            matched
        }
        Condition::Logical { operator, operands } => {
            let result = match operator {
                LogicalOperator::And => operands.iter().all(|op| eval_node(op, ctx, depth + 1)),
                LogicalOperator::Or => operands.iter().any(|op| eval_node(op, ctx, depth + 1)),
            };
            trace!(depth, operator = operator.as_str(), operands = operands.len(), result, "logical");
            result
        }
    }
}
