// src/parser.rs
//
// Classifies a raw JSON tree into `Condition`. Input is already structured;
// there is no text syntax here.
use itertools::Itertools;
use serde_json::Value;
use tracing::debug;

use crate::condition::{ComparisonOperator, Condition, LogicalOperator};
use crate::errors::{EvalError, Result};

const LOGICAL_TAGS: [&str; 2] = ["AND", "OR"];
const COMPARISON_TAGS: [&str; 1] = ["=="];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Logical,
    Comparison,
}

// Logical membership is checked first, then comparison.
fn classify(tag: &str) -> Option<Kind> {
    if LOGICAL_TAGS.contains(&tag) {
        Some(Kind::Logical)
    } else if COMPARISON_TAGS.contains(&tag) {
        Some(Kind::Comparison)
    } else {
        None
    }
}

/// Parse a whole condition tree. Errors carry the JSON path of the offending
/// node, rooted at `$`.
pub fn parse_condition(value: &Value) -> Result<Condition> {
    parse_node(value, "$")
}

fn parse_node(value: &Value, path: &str) -> Result<Condition> {
    let items = match value {
        Value::Array(a) if !a.is_empty() => a,
        _ => return Err(EvalError::NotAList { path: path.to_string() }),
    };
    let tag = match &items[0] {
        Value::String(s) => s.as_str(),
        _ => return Err(EvalError::OperatorNotString { path: path.to_string() }),
    };

    match classify(tag) {
        Some(Kind::Logical) => parse_logical(tag, &items[1..], path),
        Some(Kind::Comparison) => parse_comparison(tag, &items[1..], path),
        None => {
            debug!(tag, path, "unrecognized operator");
            Err(EvalError::UnrecognizedOperator {
                tag: tag.to_string(),
                path: path.to_string(),
            })
        }
    }
}

fn parse_logical(tag: &str, rest: &[Value], path: &str) -> Result<Condition> {
    let operator = tag
        .parse::<LogicalOperator>()
        .map_err(|_| EvalError::InvalidLogicalOperator {
            tag: tag.to_string(),
            path: path.to_string(),
        })?;
    let operands = rest
        .iter()
        .enumerate()
        .map(|(i, v)| parse_node(v, &format!("{path}[{}]", i + 1)))
        .collect::<Result<Vec<_>>>()?;
    Ok(Condition::Logical { operator, operands })
}

fn parse_comparison(tag: &str, rest: &[Value], path: &str) -> Result<Condition> {
    // Only `==` exists; an unknown tag here means the tag tables drifted.
    let operator = tag
        .parse::<ComparisonOperator>()
        .map_err(|_| EvalError::UnrecognizedOperator {
            tag: tag.to_string(),
            path: path.to_string(),
        })?;
    let Some((variable, literal)) = rest.iter().collect_tuple() else {
        return Err(EvalError::ComparisonArity {
            path: path.to_string(),
            found: rest.len(),
        });
    };
    let variable = match variable {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        _ => return Err(EvalError::OperandNotString { path: format!("{path}[1]") }),
    };
    let literal = match literal {
        Value::String(s) => s.clone(),
        _ => return Err(EvalError::OperandNotString { path: format!("{path}[2]") }),
    };
    Ok(Condition::Comparison {
        operator,
        variable,
        literal,
    })
}
