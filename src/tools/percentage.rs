use serde::{Deserialize, Serialize};

use super::{ToolError, round_to};

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PercentageQuery {
    /// `percent`% of `value`
    PercentOf { percent: f64, value: f64 },
    /// `part` is what percent of `whole`
    WhatPercent { part: f64, whole: f64 },
    /// relative change from `from` to `to`, in percent
    Change { from: f64, to: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PercentageResult {
    pub result: f64,
}

pub fn percent_of(percent: f64, value: f64) -> f64 {
    percent * value / 100.0
}

pub fn what_percent(part: f64, whole: f64) -> Result<f64, ToolError> {
    if whole == 0.0 {
        return Err(ToolError::DivisionByZero);
    }
    Ok(part / whole * 100.0)
}

pub fn percent_change(from: f64, to: f64) -> Result<f64, ToolError> {
    if from == 0.0 {
        return Err(ToolError::DivisionByZero);
    }
    Ok((to - from) / from.abs() * 100.0)
}

pub fn evaluate(query: PercentageQuery) -> Result<PercentageResult, ToolError> {
    let raw = match query {
        PercentageQuery::PercentOf { percent, value } => percent_of(percent, value),
        PercentageQuery::WhatPercent { part, whole } => what_percent(part, whole)?,
        PercentageQuery::Change { from, to } => percent_change(from, to)?,
    };
    if !raw.is_finite() {
        return Err(ToolError::invalid("result is not a finite number"));
    }
    Ok(PercentageResult {
        result: round_to(raw, 4),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_operations() {
        assert_eq!(percent_of(15.0, 200.0), 30.0);
        assert_eq!(what_percent(30.0, 120.0).unwrap(), 25.0);
        assert_eq!(percent_change(80.0, 100.0).unwrap(), 25.0);
        assert_eq!(percent_change(-50.0, -25.0).unwrap(), 50.0);
    }

    #[test]
    fn division_by_zero() {
        assert_eq!(what_percent(1.0, 0.0), Err(ToolError::DivisionByZero));
        assert_eq!(percent_change(0.0, 5.0), Err(ToolError::DivisionByZero));
    }

    #[test]
    fn tagged_queries_round_result() {
        let q: PercentageQuery = serde_json::from_str(r#"{"op":"what_percent","part":1,"whole":3}"#).unwrap();
        assert_eq!(evaluate(q).unwrap().result, 33.3333);
    }
}
