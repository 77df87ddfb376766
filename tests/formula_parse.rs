use reqwhen::{compile, evaluate, slot, Location, ParseError};

#[test]
fn compile_and_evaluate() {
    let formula = compile("{0} && {1} || !{2}").unwrap();
    assert_eq!(evaluate(&formula, &[true, true, true]).unwrap(), true);
    assert_eq!(evaluate(&formula, &[true, false, true]).unwrap(), false);
    assert_eq!(evaluate(&formula, &[false, false, false]).unwrap(), true);
}

#[test]
fn and_binds_tighter_than_or() {
    let formula = compile("{0} || {1} && {2}").unwrap();
    assert_eq!(formula, slot(0).or(slot(1).and(slot(2))));

    // With slot 0 false, the result depends entirely on the AND pair.
    assert_eq!(evaluate(&formula, &[false, true, false]).unwrap(), false);
    assert_eq!(evaluate(&formula, &[false, true, true]).unwrap(), true);
    assert_eq!(evaluate(&formula, &[true, false, false]).unwrap(), true);
}

#[test]
fn double_negation_matches_identity() {
    let plain = compile("{0}").unwrap();
    let doubled = compile("!!{0}").unwrap();
    for value in [false, true] {
        assert_eq!(
            evaluate(&plain, &[value]).unwrap(),
            evaluate(&doubled, &[value]).unwrap(),
        );
    }
}

#[test]
fn compiled_formula_is_reusable() {
    let formula = compile("{0} && {1}").unwrap();
    for _ in 0..3 {
        assert_eq!(evaluate(&formula, &[true, true]).unwrap(), true);
        assert_eq!(evaluate(&formula, &[true, false]).unwrap(), false);
    }
}

#[test]
fn dangling_operator_error_location() {
    let err = compile("{0} &&").unwrap_err();
    assert_eq!(
        err,
        ParseError::UnexpectedEnd {
            expected: "`{`",
            location: Location { line: 1, column: 7 },
        }
    );
}

#[test]
fn single_ampersand_is_lexical_not_syntax() {
    let err = compile("{0} & {1}").unwrap_err();
    assert_eq!(
        err,
        ParseError::UnexpectedCharacter {
            found: '&',
            location: Location { line: 1, column: 5 },
        }
    );
}

#[test]
fn diagnostic_rendering_quotes_the_source_line() {
    let source = "{0} & {1}";
    let rendered = compile(source).unwrap_err().render(source);
    assert_eq!(
        rendered,
        "{0} & {1}\n    ^ unexpected character `&` at line 1, column 5"
    );
}

#[test]
fn diagnostic_rendering_at_end_of_input() {
    let source = "{0} &&";
    let rendered = compile(source).unwrap_err().render(source);
    let mut lines = rendered.lines();
    assert_eq!(lines.next(), Some("{0} &&"));
    assert!(lines.next().unwrap().starts_with("      ^"));
}

#[test]
fn multiline_formula_error_quotes_second_line() {
    let source = "{0} &&\n{1} ||";
    let err = compile(source).unwrap_err();
    assert_eq!(err.location(), Location { line: 2, column: 7 });
    assert!(err.render(source).starts_with("{1} ||\n"));
}

#[test]
fn empty_and_blank_formulas_are_rejected() {
    assert!(matches!(
        compile("").unwrap_err(),
        ParseError::EmptyFormula { .. }
    ));
    assert!(matches!(
        compile(" \t\n ").unwrap_err(),
        ParseError::EmptyFormula { .. }
    ));
}

#[test]
fn trailing_garbage_is_rejected() {
    assert!(matches!(
        compile("{0} && {1} {2}").unwrap_err(),
        ParseError::TrailingTokens { .. }
    ));
}

#[test]
fn error_display_is_descriptive() {
    let msg = compile("{0} &&").unwrap_err().to_string();
    assert!(msg.contains("unexpected end of expression"), "got: {msg}");
    assert!(msg.contains("line 1, column 7"), "got: {msg}");

    let msg = compile("{]").unwrap_err().to_string();
    assert!(msg.contains("unexpected character"), "got: {msg}");
}
