use thiserror::Error;

// Every variant is fatal: evaluation aborts and no boolean is produced.
#[derive(Debug, Error)]
pub enum EvalError {
    // First element of a node is neither a logical nor a comparison operator.
    #[error("unrecognized operator `{tag}` at {path}: the first element must be a logical or comparison operator")]
    UnrecognizedOperator { tag: String, path: String },

    // Passed the logical membership check but is not AND/OR.
    #[error("invalid logical operator `{tag}` at {path}: a logical operator must be AND or OR")]
    InvalidLogicalOperator { tag: String, path: String },

    // A node is not an array, or is an empty one.
    #[error("condition at {path} must be a non-empty array")]
    NotAList { path: String },

    // First element of a node is not a string.
    #[error("operator at {path} must be a string")]
    OperatorNotString { path: String },

    // Comparison without exactly a variable and a literal.
    #[error("comparison at {path} expects 2 operands, found {found}")]
    ComparisonArity { path: String, found: usize },

    // Variable or literal is not a string (`null` is allowed for the variable).
    #[error("comparison operand at {path} must be a string")]
    OperandNotString { path: String },

    // JSON text could not be read.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EvalError>;
