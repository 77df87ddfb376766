use reqwhen::{Context, RelationOp, Requirement};

fn main() {
    // "Parental consent is required when the applicant is under 18 and
    // applying from the US."
    let requirement = Requirement::builder()
        .relation("applicant.age", RelationOp::Lt, 18_i64)
        .relation_eq("applicant.country", "US")
        .formula("{0} && {1}")
        .build()
        .expect("failed to build requirement");

    println!("consent required when: {requirement}");

    let ctx = Context::new()
        .set("applicant.age", 16_i64)
        .set("applicant.country", "US");

    match requirement.is_met(&ctx) {
        Ok(true) => println!("consent field is required"),
        Ok(false) => println!("consent field is optional"),
        Err(err) => println!("evaluation failed: {err}"),
    }
}
