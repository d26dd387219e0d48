//! Calculator endpoint handlers
//!
//! One handler per arithmetic operation. All four share the same shape:
//! extract the raw `a`/`b` operands from the JSON body, run the core
//! operation, sanitize the result for JSON safety, and wrap the outcome in
//! the fixed `{"result": ...}` / `{"error": ...}` envelope.

use std::fmt;

use axum::{extract::rejection::JsonRejection, Json};
use serde::Serialize;
use serde_json::Value;

use crate::error::{AppError, CalcError};
use crate::ops;

/// Placeholder shown instead of a raw non-finite float, which JSON cannot
/// represent.
const NON_FINITE_MESSAGE: &str = "Infinity or NaN (result too large)";

static NULL: Value = Value::Null;

/// Success response body, `{"result": <number or sanitized string>}`
#[derive(Serialize)]
pub struct CalcResponse {
    pub result: CalcValue,
}

/// A sanitized operation result: a finite number, or a descriptive string
/// when the true result overflowed to infinity or was NaN.
#[derive(Serialize)]
#[serde(untagged)]
pub enum CalcValue {
    Number(f64),
    Text(&'static str),
}

impl fmt::Display for CalcValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcValue::Number(n) => write!(f, "{}", n),
            CalcValue::Text(s) => f.write_str(s),
        }
    }
}

/// Ensure a result is JSON-safe (finite numbers only).
fn sanitize_result(value: f64) -> CalcValue {
    if value.is_finite() {
        CalcValue::Number(value)
    } else {
        CalcValue::Text(NON_FINITE_MESSAGE)
    }
}

/// Pull the `a`/`b` operands out of the request body.
///
/// A missing key is treated as null rather than rejected here; it falls
/// through to the coercion check inside the core operation, same as a body
/// that is valid JSON but not an object.
fn operands(payload: &Value) -> (&Value, &Value) {
    (
        payload.get("a").unwrap_or(&NULL),
        payload.get("b").unwrap_or(&NULL),
    )
}

fn extract_body(payload: Result<Json<Value>, JsonRejection>) -> Result<Value, AppError> {
    let Json(payload) = payload.map_err(|e| AppError::MalformedBody(e.body_text()))?;
    Ok(payload)
}

/// POST /add
pub async fn perform_addition(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<CalcResponse>, AppError> {
    let payload = extract_body(payload)?;
    let (a, b) = operands(&payload);
    match ops::add(a, b) {
        Ok(value) => {
            let result = sanitize_result(value);
            tracing::info!("Addition: {} + {} = {}", a, b, result);
            Ok(Json(CalcResponse { result }))
        }
        Err(e) => {
            tracing::error!("Error in addition: {}", e);
            Err(e.into())
        }
    }
}

/// POST /subtract
pub async fn perform_subtraction(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<CalcResponse>, AppError> {
    let payload = extract_body(payload)?;
    let (a, b) = operands(&payload);
    match ops::subtract(a, b) {
        Ok(value) => {
            let result = sanitize_result(value);
            tracing::info!("Subtraction: {} - {} = {}", a, b, result);
            Ok(Json(CalcResponse { result }))
        }
        Err(e) => {
            tracing::error!("Error in subtraction: {}", e);
            Err(e.into())
        }
    }
}

/// POST /multiply
pub async fn perform_multiplication(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<CalcResponse>, AppError> {
    let payload = extract_body(payload)?;
    let (a, b) = operands(&payload);
    match ops::multiply(a, b) {
        Ok(value) => {
            let result = sanitize_result(value);
            tracing::info!("Multiplication: {} * {} = {}", a, b, result);
            Ok(Json(CalcResponse { result }))
        }
        Err(e) => {
            tracing::error!("Error in multiplication: {}", e);
            Err(e.into())
        }
    }
}

/// POST /divide
pub async fn perform_division(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<CalcResponse>, AppError> {
    let payload = extract_body(payload)?;
    let (a, b) = operands(&payload);
    match ops::divide(a, b) {
        Ok(value) => {
            let result = sanitize_result(value);
            tracing::info!("Division: {} / {} = {}", a, b, result);
            Ok(Json(CalcResponse { result }))
        }
        Err(e @ CalcError::DivisionByZero) => {
            tracing::warn!("Division by zero attempted: {} / {}", a, b);
            Err(e.into())
        }
        Err(e) => {
            tracing::error!("Error in division: {}", e);
            Err(e.into())
        }
    }
}
