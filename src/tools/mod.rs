//! Calculator formulas behind the "convert/generate/check" widgets.
//!
//! Everything in here is pure: input in, output out. HTTP wiring lives in
//! `handlers::tools`.

pub mod age;
pub mod bmi;
pub mod color;
pub mod emi;
pub mod hash;
pub mod password;
pub mod percentage;
pub mod text;
pub mod units;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ToolError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("unknown unit: {0}")]
    UnknownUnit(String),
    #[error("cannot convert {from} to {to}")]
    IncompatibleUnits { from: String, to: String },
    #[error("division by zero")]
    DivisionByZero,
}

impl ToolError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        ToolError::InvalidInput(msg.into())
    }
}

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
