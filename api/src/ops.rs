//! Arithmetic core
//!
//! Pure arithmetic over loosely-typed JSON operands. Each operation coerces
//! both operands to `f64` before touching them; coercion failures and
//! division by zero come back as typed errors so the HTTP layer can map them
//! to status codes without any knowledge of the math.

use serde_json::Value;

use crate::error::CalcError;

/// Coerce an arbitrary JSON value to an `f64`.
///
/// Numbers pass through, numeric strings are trimmed and parsed, booleans
/// map to 1.0/0.0. Everything else (null, objects, arrays, non-numeric
/// strings) is a coercion error. A missing request key is folded to null by
/// the handler before this runs, so "absent" and "explicitly null" report
/// the same error.
pub fn coerce(value: &Value) -> Result<f64, CalcError> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| CalcError::Coercion(value.to_string())),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| CalcError::Coercion(value.to_string())),
        Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        Value::Null | Value::Object(_) | Value::Array(_) => {
            Err(CalcError::Coercion(value.to_string()))
        }
    }
}

/// Return the sum of two operands.
pub fn add(a: &Value, b: &Value) -> Result<f64, CalcError> {
    Ok(coerce(a)? + coerce(b)?)
}

/// Return the difference of two operands.
pub fn subtract(a: &Value, b: &Value) -> Result<f64, CalcError> {
    Ok(coerce(a)? - coerce(b)?)
}

/// Return the product of two operands.
pub fn multiply(a: &Value, b: &Value) -> Result<f64, CalcError> {
    Ok(coerce(a)? * coerce(b)?)
}

/// Return the quotient of two operands.
///
/// The divisor is checked against exactly zero before dividing; the check is
/// deliberately not an epsilon comparison, so `1e-300` divides fine.
pub fn divide(a: &Value, b: &Value) -> Result<f64, CalcError> {
    let a = coerce(a)?;
    let b = coerce(b)?;
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(a / b)
}
