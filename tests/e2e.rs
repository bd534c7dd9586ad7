use condition_eval as ce;
use serde_json::json;

fn sample_condition() -> serde_json::Value {
    json!([
        "OR",
        ["AND", ["==", "$State", "Alabama"], ["==", "$Profession", "Software development"]],
        ["==", "$Undefined", ""],
        ["AND", ["==", "$State", "Texas"]],
        ["OR", ["OR", ["==", "$Profession", "Tradesperson"]]]
    ])
}

fn check(context: serde_json::Value, expected: bool) {
    let ctx: ce::Context = serde_json::from_value(context.clone()).unwrap();
    let out = ce::evaluate_value(&sample_condition(), &ctx).unwrap();
    assert_eq!(out, expected, "context: {context}");
}

#[test]
fn test_example_first_and_branch() {
    check(json!({"State": "Alabama", "Profession": "Software development"}), true);
}

#[test]
fn test_example_third_and_branch() {
    check(json!({"State": "Texas"}), true);
}

#[test]
fn test_example_partial_and_is_false() {
    check(json!({"State": "Alabama", "Profession": "Gaming"}), false);
}

#[test]
fn test_example_no_branch() {
    check(json!({"State": "Utah"}), false);
    check(json!({"Profession": "Town crier"}), false);
}

#[test]
fn test_example_nested_or_branch() {
    check(json!({"Profession": "Tradesperson"}), true);
}

#[test]
fn test_example_empty_context() {
    check(json!({}), false);
}

#[test]
fn test_example_case_table() {
    let condition: ce::Condition = serde_json::from_value(sample_condition()).unwrap();
    let cases: Vec<ce::cases::Case> = serde_json::from_value(json!([
        [{"State": "Alabama", "Profession": "Software development"}, true],
        [{"State": "Texas"}, true],
        [{"State": "Alabama", "Profession": "Gaming"}, false],
        [{"State": "Utah"}, false],
        [{"Profession": "Town crier"}, false],
        [{"Profession": "Tradesperson"}, true],
        [{}, false]
    ]))
    .unwrap();
    let outcomes = ce::cases::run_cases(&condition, &cases);
    assert!(outcomes.iter().all(|o| o.passed()));
    assert_eq!(
        ce::cases::report(&outcomes),
        "0 ok\n1 ok\n2 ok\n3 ok\n4 ok\n5 ok\n6 ok"
    );
}

#[test]
fn test_condition_serde_round_trip() {
    let condition: ce::Condition = serde_json::from_value(sample_condition()).unwrap();
    assert_eq!(serde_json::to_value(&condition).unwrap(), sample_condition());
    assert_eq!(condition.depth(), 4);
}

#[test]
fn test_evaluate_json_text() {
    let out = ce::evaluate_json(
        r#"["OR", ["==", "$Undefined", ""]]"#,
        r#"{"Undefined": null}"#,
    )
    .unwrap();
    assert!(!out);
}
