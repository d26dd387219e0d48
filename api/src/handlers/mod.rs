//! HTTP handlers
//!
//! Axum request handlers for the calculator endpoints and the UI page.

pub mod calc;
pub mod pages;

pub use calc::{perform_addition, perform_division, perform_multiplication, perform_subtraction};
pub use pages::index;
