//! CPLEX-style LP rendering of an assembled model.
//!
//! The export is a diagnostic side artifact written before solving; it is
//! never read back.

use std::fs;
use std::io;
use std::path::Path;

use asgn_model::frame::format_numeric;

use crate::model::{ConstraintOp, Model, VarId};

/// Write the model to an LP file, overwriting any previous export.
pub fn write_lp(model: &Model, path: &Path) -> io::Result<()> {
    fs::write(path, lp_string(model))
}

/// Render the model as LP-format text.
pub fn lp_string(model: &Model) -> String {
    let mut out = String::new();
    out.push_str(&format!("\\ Model {}\n", model.name()));
    out.push_str("Minimize\n obj: ");
    out.push_str(&expression(model, model.objective()));
    out.push_str("\nSubject To\n");
    for constraint in model.constraints() {
        let op = match constraint.op {
            ConstraintOp::Le => "<=",
            ConstraintOp::Ge => ">=",
            ConstraintOp::Eq => "=",
        };
        out.push_str(&format!(
            " {}: {} {} {}\n",
            constraint.name,
            expression(model, &constraint.terms),
            op,
            format_numeric(constraint.rhs)
        ));
    }
    out.push_str("Binaries\n");
    for name in model.variables() {
        out.push_str(&format!(" {name}\n"));
    }
    out.push_str("End\n");
    out
}

fn expression(model: &Model, terms: &[(VarId, f64)]) -> String {
    let mut out = String::new();
    for (idx, (id, coeff)) in terms.iter().enumerate() {
        let magnitude = coeff.abs();
        if idx == 0 {
            if *coeff < 0.0 {
                out.push_str("- ");
            }
        } else if *coeff < 0.0 {
            out.push_str(" - ");
        } else {
            out.push_str(" + ");
        }
        if magnitude != 1.0 {
            out.push_str(&format_numeric(magnitude));
            out.push(' ');
        }
        out.push_str(model.variable_name(*id));
    }
    if terms.is_empty() {
        out.push('0');
    }
    out
}
