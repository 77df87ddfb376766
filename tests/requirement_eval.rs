use reqwhen::{
    evaluate_predicates, Context, EvalError, Relation, RelationOp, Requirement, TargetSpec, Value,
};

#[test]
fn age_and_country_scenario() {
    let requirement = Requirement::builder()
        .relation("Age", RelationOp::Ge, 18_i64)
        .relation_eq("Country", "US")
        .formula("{0} && {1}")
        .build()
        .unwrap();

    let ctx = Context::new().set("Age", 20_i64).set("Country", "US");
    assert!(requirement.is_met(&ctx).unwrap());

    let ctx = Context::new().set("Age", 16_i64).set("Country", "US");
    assert!(!requirement.is_met(&ctx).unwrap());
}

#[test]
fn wildcard_matches_any_value() {
    let relations = vec![Relation::new("A", RelationOp::Eq, TargetSpec::Wildcard)];

    for value in [
        Value::Int(0),
        Value::Float(-1.5),
        Value::Bool(false),
        Value::String("anything".into()),
        Value::Null,
    ] {
        let mut ctx = Context::new();
        ctx.insert("A", value);
        assert_eq!(evaluate_predicates(&relations, true, &ctx).unwrap(), [true]);
    }
}

#[test]
fn wildcard_under_ordering_operator_still_matches() {
    // Deliberate oddity reproduced from the source system: wildcard wins
    // regardless of the operator.
    let relations = vec![Relation::new("A", RelationOp::Gt, TargetSpec::Wildcard)];
    let ctx = Context::new().set("A", false);
    assert_eq!(evaluate_predicates(&relations, true, &ctx).unwrap(), [true]);
}

#[test]
fn case_sensitivity_controls_string_equality() {
    let sensitive = Requirement::builder()
        .relation_eq("Country", "Foo")
        .build()
        .unwrap();
    let insensitive = Requirement::builder()
        .relation_eq("Country", "Foo")
        .case_insensitive()
        .build()
        .unwrap();

    let ctx = Context::new().set("Country", "foo");
    assert!(!sensitive.is_met(&ctx).unwrap());
    assert!(insensitive.is_met(&ctx).unwrap());
}

#[test]
fn cross_field_reference_compares_runtime_values() {
    let requirement = Requirement::builder()
        .relation(
            "A",
            RelationOp::Eq,
            TargetSpec::FieldRef("B".to_owned()),
        )
        .build()
        .unwrap();

    // Matches B's runtime value, not the literal string "B".
    let ctx = Context::new().set("A", "match").set("B", "match");
    assert!(requirement.is_met(&ctx).unwrap());

    let ctx = Context::new().set("A", "B").set("B", "other");
    assert!(!requirement.is_met(&ctx).unwrap());
}

#[test]
fn cross_field_reference_with_ordering() {
    let requirement = Requirement::builder()
        .relation(
            "End",
            RelationOp::Ge,
            TargetSpec::FieldRef("Start".to_owned()),
        )
        .build()
        .unwrap();

    let ctx = Context::new().set("End", 10_i64).set("Start", 5_i64);
    assert!(requirement.is_met(&ctx).unwrap());

    let ctx = Context::new().set("End", 3_i64).set("Start", 5_i64);
    assert!(!requirement.is_met(&ctx).unwrap());
}

#[test]
fn target_spec_parse_convention() {
    assert_eq!(TargetSpec::parse("*"), TargetSpec::Wildcard);
    assert_eq!(
        TargetSpec::parse("[Other]"),
        TargetSpec::FieldRef("Other".to_owned())
    );
    assert_eq!(
        TargetSpec::parse("plain"),
        TargetSpec::Literal(Value::String("plain".to_owned()))
    );
}

#[test]
fn unresolved_field_is_an_error_not_a_false() {
    let requirement = Requirement::builder()
        .relation_eq("Nope", 1_i64)
        .build()
        .unwrap();
    assert!(matches!(
        requirement.is_met(&Context::new()),
        Err(EvalError::FieldNotFound { field }) if field == "Nope"
    ));
}

#[test]
fn null_runtime_value_equals_only_null_target() {
    let ctx = Context::new().set("Spouse", None::<&str>);

    let against_null = Requirement::builder()
        .relation_eq("Spouse", Value::Null)
        .build()
        .unwrap();
    assert!(against_null.is_met(&ctx).unwrap());

    let against_literal = Requirement::builder()
        .relation_eq("Spouse", "someone")
        .build()
        .unwrap();
    assert!(!against_literal.is_met(&ctx).unwrap());
}

#[test]
fn numeric_widening_across_int_and_float() {
    let requirement = Requirement::builder()
        .relation("Price", RelationOp::Gt, 9.5_f64)
        .build()
        .unwrap();

    let ctx = Context::new().set("Price", 10_i64);
    assert!(requirement.is_met(&ctx).unwrap());
}

#[test]
fn ordering_on_booleans_is_reported() {
    let requirement = Requirement::builder()
        .relation("Active", RelationOp::Lt, true)
        .build()
        .unwrap();
    let ctx = Context::new().set("Active", false);
    assert!(matches!(
        requirement.is_met(&ctx),
        Err(EvalError::IncompatibleComparison { .. })
    ));
}

#[test]
fn formula_over_wildcard_and_literal_slots() {
    // Wildcard slots participate in the combinatorics; only slot 1 varies.
    let requirement = Requirement::builder()
        .relation("Kind", RelationOp::Eq, TargetSpec::Wildcard)
        .relation_eq("State", "ready")
        .formula("{0} && {1}")
        .build()
        .unwrap();

    let ctx = Context::new().set("Kind", "any").set("State", "ready");
    assert!(requirement.is_met(&ctx).unwrap());

    let ctx = Context::new().set("Kind", "any").set("State", "draft");
    assert!(!requirement.is_met(&ctx).unwrap());
}

#[test]
fn negated_slot_in_formula() {
    let requirement = Requirement::builder()
        .relation_eq("HasOther", true)
        .relation_eq("Detail", Value::Null)
        .formula("{0} && !{1}")
        .build()
        .unwrap();

    // Requirement holds when HasOther is true and Detail is not null.
    let ctx = Context::new().set("HasOther", true).set("Detail", "text");
    assert!(requirement.is_met(&ctx).unwrap());

    let ctx = Context::new()
        .set("HasOther", true)
        .set("Detail", None::<&str>);
    assert!(!requirement.is_met(&ctx).unwrap());
}

#[test]
fn hashmap_as_resolver() {
    use std::collections::HashMap;

    let requirement = Requirement::builder()
        .relation("Age", RelationOp::Ge, 18_i64)
        .build()
        .unwrap();

    let mut fields: HashMap<String, Value> = HashMap::new();
    fields.insert("Age".to_owned(), Value::Int(21));
    assert!(requirement.is_met(&fields).unwrap());
}

#[test]
fn closure_as_resolver() {
    let requirement = Requirement::builder()
        .relation_eq("Role", "admin")
        .build()
        .unwrap();

    let resolver = |name: &str| match name {
        "Role" => Some(Value::String("admin".to_owned())),
        _ => None,
    };
    assert!(requirement.is_met(&resolver).unwrap());
}

#[test]
fn express_round_trip_for_error_messages() {
    let requirement = Requirement::builder()
        .relation_eq("Country", "US")
        .relation("Age", RelationOp::Ge, 18_i64)
        .relation("Region", RelationOp::Ne, TargetSpec::Wildcard)
        .formula("{0} && {1} || {2}")
        .build()
        .unwrap();
    assert_eq!(
        requirement.express(),
        "{Country} == 'US' && {Age} >= 18 || {Region} != *"
    );
}
