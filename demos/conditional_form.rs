use reqwhen::{Context, RelationOp, Requirement, TargetSpec, Value};

/// A form where several fields become required depending on others:
/// the kind of walkthrough a host validation layer would run per field.
fn main() {
    // Spouse name is required when marital status says married, whatever
    // the spelling case the client sent.
    let spouse_name = Requirement::builder()
        .relation_eq("marital_status", "married")
        .case_insensitive()
        .build()
        .expect("spouse_name rule");

    // A shipping address is required when the order is physical or the
    // customer asked for a paper invoice.
    let shipping_address = Requirement::builder()
        .relation_eq("order.kind", "physical")
        .relation_eq("invoice.paper", true)
        .formula("{0} || {1}")
        .build()
        .expect("shipping_address rule");

    // A reason is required when the declared total differs from the
    // computed one (cross-field comparison).
    let discrepancy_reason = Requirement::builder()
        .relation(
            "declared_total",
            RelationOp::Ne,
            TargetSpec::FieldRef("computed_total".to_owned()),
        )
        .build()
        .expect("discrepancy_reason rule");

    let form = Context::new()
        .set("marital_status", "Married")
        .set("order.kind", "digital")
        .set("invoice.paper", true)
        .set("declared_total", 100_i64)
        .set("computed_total", 95_i64)
        .set("spouse_name", None::<&str>);

    let rules = [
        ("spouse_name", &spouse_name),
        ("shipping_address", &shipping_address),
        ("discrepancy_reason", &discrepancy_reason),
    ];

    for (field, requirement) in rules {
        match requirement.is_met(&form) {
            Ok(true) => println!("{field}: required ({})", requirement.express()),
            Ok(false) => println!("{field}: optional"),
            Err(err) => println!("{field}: cannot evaluate: {err}"),
        }
    }

    // The host decides what "required but missing" means; here we just show
    // the check it would run.
    if spouse_name.is_met(&form).unwrap_or(false) {
        let missing = matches!(form.get("spouse_name"), None | Some(Value::Null));
        if missing {
            println!("validation error: spouse_name is required");
        }
    }
}
