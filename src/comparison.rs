use crate::condition::ComparisonOperator;
use crate::context::Context;

/// Context key for a variable reference: the first character is dropped
/// whether or not it is the `$` sigil.
pub fn lookup_key(variable: &str) -> &str {
    let mut chars = variable.chars();
    chars.next();
    chars.as_str()
}

/// Leaf predicate. A missing or empty variable reference never matches, and
/// neither does a key absent from `ctx`.
pub fn compare(
    operator: ComparisonOperator,
    variable: Option<&str>,
    literal: &str,
    ctx: &Context,
) -> bool {
    let variable = match variable {
        Some(v) if !v.is_empty() => v,
        _ => return false,
    };
    match operator {
        ComparisonOperator::Eq => ctx.get(lookup_key(variable)) == Some(literal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn strips_first_char_only() {
        assert_eq!(lookup_key("$State"), "State");
        assert_eq!(lookup_key("State"), "tate");
        assert_eq!(lookup_key("$"), "");
        assert_eq!(lookup_key("éa"), "a");
    }

    #[test]
    fn absent_key_never_equals_empty_string() {
        let ctx = Context::new();
        assert!(!compare(ComparisonOperator::Eq, Some("$Undefined"), "", &ctx));
    }

    #[test]
    fn present_empty_string_matches_empty_literal() {
        let ctx = Context::from_iter([("Blank", "")]);
        assert!(compare(ComparisonOperator::Eq, Some("$Blank"), "", &ctx));
    }

    #[test]
    fn case_sensitive() {
        let ctx = Context::from_iter([("State", "Texas")]);
        assert!(compare(ComparisonOperator::Eq, Some("$State"), "Texas", &ctx));
        assert!(!compare(ComparisonOperator::Eq, Some("$State"), "texas", &ctx));
    }

    #[test]
    fn falsy_variable_is_false() {
        let ctx = Context::from_iter([("", "x")]);
        assert!(!compare(ComparisonOperator::Eq, None, "x", &ctx));
        assert!(!compare(ComparisonOperator::Eq, Some(""), "x", &ctx));
    }

    #[test]
    fn missing_sigil_drops_real_character() {
        let ctx = Context::from_iter([("tate", "Utah"), ("State", "Texas")]);
        assert!(compare(ComparisonOperator::Eq, Some("State"), "Utah", &ctx));
        assert!(!compare(ComparisonOperator::Eq, Some("State"), "Texas", &ctx));
    }
}
