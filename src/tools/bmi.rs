use serde::Serialize;

use super::{ToolError, round_to};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bmi {
    pub value: f64,
    pub category: &'static str,
}

pub fn bmi(weight_kg: f64, height_cm: f64) -> Result<Bmi, ToolError> {
    if !(weight_kg.is_finite() && height_cm.is_finite()) || weight_kg <= 0.0 || height_cm <= 0.0 {
        return Err(ToolError::invalid("weight and height must be positive numbers"));
    }

    let meters = height_cm / 100.0;
    let value = round_to(weight_kg / (meters * meters), 1);
    let category = match value {
        v if v < 18.5 => "underweight",
        v if v < 25.0 => "normal",
        v if v < 30.0 => "overweight",
        _ => "obese",
    };
    Ok(Bmi { value, category })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values_and_categories() {
        assert_eq!(bmi(70.0, 175.0).unwrap(), Bmi { value: 22.9, category: "normal" });
        assert_eq!(bmi(50.0, 180.0).unwrap().category, "underweight");
        assert_eq!(bmi(85.0, 175.0).unwrap().category, "overweight");
        assert_eq!(bmi(120.0, 170.0).unwrap().category, "obese");
    }

    #[test]
    fn boundary_uses_rounded_value() {
        // 24.98 rounds to 25.0
        assert_eq!(bmi(76.5, 175.0).unwrap(), Bmi { value: 25.0, category: "overweight" });
    }

    #[test]
    fn rejects_non_positive_and_nan() {
        assert!(bmi(0.0, 170.0).is_err());
        assert!(bmi(70.0, -1.0).is_err());
        assert!(bmi(f64::NAN, 170.0).is_err());
    }
}
