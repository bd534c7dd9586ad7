use itertools::Itertools;
use serde::Deserialize;
use std::fmt;

use crate::condition::Condition;
use crate::context::Context;
use crate::engine::evaluate;

/// One row of a case table: `[context, expected]`.
#[derive(Debug, Clone, Deserialize)]
pub struct Case(pub Context, pub bool);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseOutcome {
    pub index: usize,
    pub expected: bool,
    pub actual: bool,
}

impl CaseOutcome {
    pub fn passed(&self) -> bool {
        self.expected == self.actual
    }
}

impl fmt::Display for CaseOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.passed() { "ok" } else { "FAIL" };
        write!(f, "{} {}", self.index, verdict)
    }
}

/// Evaluate `condition` against every case, in order.
pub fn run_cases(condition: &Condition, cases: &[Case]) -> Vec<CaseOutcome> {
    cases
        .iter()
        .enumerate()
        .map(|(index, Case(ctx, expected))| CaseOutcome {
            index,
            expected: *expected,
            actual: evaluate(condition, ctx),
        })
        .collect()
}

/// One line per outcome, e.g. `"0 ok\n1 FAIL"`.
pub fn report(outcomes: &[CaseOutcome]) -> String {
    outcomes.iter().join("\n")
}
