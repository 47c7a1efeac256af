//! Typed column extraction helpers for the assignment tables.

use polars::prelude::{ChunkAgg, DataFrame};

use crate::error::{AsgnError, Result};

/// Extract a key column as owned strings, trimming each cell.
pub fn column_str_values(df: &DataFrame, name: &str) -> Result<Vec<String>> {
    let ca = df.column(name)?.str()?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..ca.len() {
        let value = ca.get(idx).ok_or_else(|| {
            AsgnError::Message(format!("null key in column {name} at row {idx}"))
        })?;
        values.push(value.trim().to_string());
    }
    Ok(values)
}

/// Extract a numeric column as `f64` values, rejecting nulls.
pub fn column_f64_values(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let ca = df.column(name)?.f64()?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..ca.len() {
        let value = ca.get(idx).ok_or_else(|| {
            AsgnError::Message(format!("null value in column {name} at row {idx}"))
        })?;
        values.push(value);
    }
    Ok(values)
}

/// Sum a numeric column, skipping nulls.
pub fn column_sum(df: &DataFrame, name: &str) -> Result<f64> {
    Ok(df.column(name)?.f64()?.sum().unwrap_or(0.0))
}

/// Format a floating-point number without trailing zeros.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}
