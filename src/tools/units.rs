use serde::{Deserialize, Serialize};

use super::ToolError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Length,
    Mass,
    Temperature,
    Data,
    Time,
}

// (symbol, category, size in the category's base unit)
// bases: metre, gram, byte, second. Temperature is handled separately.
const UNITS: &[(&str, Category, f64)] = &[
    ("mm", Category::Length, 0.001),
    ("cm", Category::Length, 0.01),
    ("m", Category::Length, 1.0),
    ("km", Category::Length, 1000.0),
    ("in", Category::Length, 0.0254),
    ("ft", Category::Length, 0.3048),
    ("yd", Category::Length, 0.9144),
    ("mi", Category::Length, 1609.344),
    ("mg", Category::Mass, 0.001),
    ("g", Category::Mass, 1.0),
    ("kg", Category::Mass, 1000.0),
    ("t", Category::Mass, 1_000_000.0),
    ("oz", Category::Mass, 28.349_523_125),
    ("lb", Category::Mass, 453.592_37),
    ("b", Category::Data, 1.0),
    ("kb", Category::Data, 1024.0),
    ("mb", Category::Data, 1_048_576.0),
    ("gb", Category::Data, 1_073_741_824.0),
    ("tb", Category::Data, 1_099_511_627_776.0),
    ("ms", Category::Time, 0.001),
    ("s", Category::Time, 1.0),
    ("min", Category::Time, 60.0),
    ("h", Category::Time, 3600.0),
    ("d", Category::Time, 86_400.0),
    ("wk", Category::Time, 604_800.0),
    ("c", Category::Temperature, 1.0),
    ("f", Category::Temperature, 1.0),
    ("k", Category::Temperature, 1.0),
];

#[derive(Debug, Clone, Deserialize)]
pub struct ConversionRequest {
    pub value: f64,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    pub category: Category,
    pub value: f64,
    pub from: String,
    pub to: String,
    pub result: f64,
}

fn lookup(symbol: &str) -> Result<(&'static str, Category, f64), ToolError> {
    let wanted = symbol.trim().to_ascii_lowercase();
    UNITS
        .iter()
        .copied()
        .find(|(name, _, _)| *name == wanted)
        .ok_or_else(|| ToolError::UnknownUnit(symbol.to_string()))
}

fn to_kelvin(value: f64, unit: &str) -> f64 {
    match unit {
        "c" => value + 273.15,
        "f" => (value - 32.0) * 5.0 / 9.0 + 273.15,
        _ => value,
    }
}

fn from_kelvin(kelvin: f64, unit: &str) -> f64 {
    match unit {
        "c" => kelvin - 273.15,
        "f" => (kelvin - 273.15) * 9.0 / 5.0 + 32.0,
        _ => kelvin,
    }
}

pub fn convert(value: f64, from: &str, to: &str) -> Result<Conversion, ToolError> {
    if !value.is_finite() {
        return Err(ToolError::invalid("value must be a finite number"));
    }
    let (from_name, from_cat, from_size) = lookup(from)?;
    let (to_name, to_cat, to_size) = lookup(to)?;
    if from_cat != to_cat {
        return Err(ToolError::IncompatibleUnits {
            from: from_name.to_string(),
            to: to_name.to_string(),
        });
    }

    let result = if from_cat == Category::Temperature {
        from_kelvin(to_kelvin(value, from_name), to_name)
    } else {
        value * from_size / to_size
    };

    Ok(Conversion {
        category: from_cat,
        value,
        from: from_name.to_string(),
        to: to_name.to_string(),
        result,
    })
}
