use serde::ser::{Serialize, SerializeSeq, Serializer};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::errors::EvalError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalOperator {
    And,
    Or,
}

impl LogicalOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalOperator::And => "AND",
            LogicalOperator::Or => "OR",
        }
    }
}

impl FromStr for LogicalOperator {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AND" => Ok(LogicalOperator::And),
            "OR" => Ok(LogicalOperator::Or),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOperator {
    Eq,
}

impl ComparisonOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonOperator::Eq => "==",
        }
    }
}

impl FromStr for ComparisonOperator {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "==" => Ok(ComparisonOperator::Eq),
            _ => Err(()),
        }
    }
}

/// A node of the condition tree.
///
/// On the wire a condition is a nested JSON array whose first element is the
/// operator tag, e.g. `["AND", ["==", "$State", "Texas"]]`. Deserializing
/// classifies every node once, so evaluation never re-inspects tags.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Value")]
pub enum Condition {
    /// `[AND|OR, condition...]`; zero operands is allowed.
    Logical {
        operator: LogicalOperator,
        operands: Vec<Condition>,
    },
    /// `[==, $variable, literal]`. `variable` is `None` when the tree carried
    /// `null` in that position.
    Comparison {
        operator: ComparisonOperator,
        variable: Option<String>,
        literal: String,
    },
}

impl Condition {
    pub fn and(operands: impl IntoIterator<Item = Condition>) -> Self {
        Condition::Logical {
            operator: LogicalOperator::And,
            operands: operands.into_iter().collect(),
        }
    }

    pub fn or(operands: impl IntoIterator<Item = Condition>) -> Self {
        Condition::Logical {
            operator: LogicalOperator::Or,
            operands: operands.into_iter().collect(),
        }
    }

    /// `["==", variable, literal]`. The variable keeps its sigil, e.g. `"$State"`.
    pub fn equals(variable: impl Into<String>, literal: impl Into<String>) -> Self {
        Condition::Comparison {
            operator: ComparisonOperator::Eq,
            variable: Some(variable.into()),
            literal: literal.into(),
        }
    }

    /// Nesting depth; a single comparison is depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Condition::Logical { operands, .. } => {
                1 + operands.iter().map(Condition::depth).max().unwrap_or(0)
            }
            Condition::Comparison { .. } => 1,
        }
    }
}

impl TryFrom<Value> for Condition {
    type Error = EvalError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        crate::parser::parse_condition(&value)
    }
}

impl Serialize for Condition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Condition::Logical { operator, operands } => {
                let mut seq = serializer.serialize_seq(Some(operands.len() + 1))?;
                seq.serialize_element(operator.as_str())?;
                for operand in operands {
                    seq.serialize_element(operand)?;
                }
                seq.end()
            }
            Condition::Comparison {
                operator,
                variable,
                literal,
            } => {
                let mut seq = serializer.serialize_seq(Some(3))?;
                seq.serialize_element(operator.as_str())?;
                seq.serialize_element(variable)?;
                seq.serialize_element(literal)?;
                seq.end()
            }
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn serializes_to_nested_arrays() {
        let c = Condition::or([
            Condition::and([Condition::equals("$State", "Texas")]),
            Condition::equals("$Undefined", ""),
        ]);
        assert_eq!(
            serde_json::to_value(&c).unwrap(),
            json!(["OR", ["AND", ["==", "$State", "Texas"]], ["==", "$Undefined", ""]])
        );
    }

    #[test]
    fn display_is_compact_json() {
        let c = Condition::and([]);
        assert_eq!(c.to_string(), r#"["AND"]"#);
    }

    #[test]
    fn depth_counts_levels() {
        let c = Condition::or([Condition::or([Condition::equals("$P", "x")])]);
        assert_eq!(c.depth(), 3);
        assert_eq!(Condition::or([]).depth(), 1);
    }

    #[test]
    fn operator_tags_parse_back() {
        for op in [LogicalOperator::And, LogicalOperator::Or] {
            assert_eq!(op.as_str().parse::<LogicalOperator>(), Ok(op));
        }
        assert_eq!("==".parse::<ComparisonOperator>(), Ok(ComparisonOperator::Eq));
        assert!("and".parse::<LogicalOperator>().is_err());
    }
}
