use std::fmt::Write;

use crate::types::{Formula, Relation};

/// Render a requirement's condition as a human-readable string, e.g.
/// `{Country} == 'US' && {Age} >= 18`, for inclusion in host error
/// messages.
///
/// Purely presentational: the evaluator never consumes this output. Total
/// for any input the predicate engine accepts — a formula slot with no
/// matching relation renders as the bare `{i}` placeholder, and a missing
/// formula renders the first relation (the single-relation rule shape).
#[must_use]
pub fn compose(relations: &[Relation], formula: Option<&Formula>) -> String {
    match formula {
        Some(formula) => {
            let mut out = String::new();
            render(formula, relations, &mut out);
            out
        }
        None => relations.first().map(ToString::to_string).unwrap_or_default(),
    }
}

fn render(node: &Formula, relations: &[Relation], out: &mut String) {
    match node {
        Formula::Slot(index) => match relations.get(*index) {
            Some(relation) => {
                let _ = write!(out, "{relation}");
            }
            None => {
                let _ = write!(out, "{{{index}}}");
            }
        },
        Formula::Not(inner) => {
            out.push('!');
            if matches!(**inner, Formula::Not(_)) {
                render(inner, relations, out);
            } else {
                out.push('(');
                render(inner, relations, out);
                out.push(')');
            }
        }
        Formula::And(a, b) => {
            render_and_operand(a, relations, out);
            out.push_str(" && ");
            render_and_operand(b, relations, out);
        }
        Formula::Or(a, b) => {
            render(a, relations, out);
            out.push_str(" || ");
            render(b, relations, out);
        }
    }
}

/// Substituted relation text never contains `&&`/`||`, so only a nested
/// `||` needs parentheses under `&&`.
fn render_and_operand(node: &Formula, relations: &[Relation], out: &mut String) {
    if matches!(node, Formula::Or(..)) {
        out.push('(');
        render(node, relations, out);
        out.push(')');
    } else {
        render(node, relations, out);
    }
}
