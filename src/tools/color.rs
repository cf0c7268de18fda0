use serde::{Deserialize, Serialize};

use super::ToolError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue in degrees, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ColorInput {
    Hex { hex: String },
    Rgb { r: u8, g: u8, b: u8 },
    Hsl { h: u16, s: u8, l: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorSet {
    pub hex: String,
    pub rgb: Rgb,
    pub hsl: Hsl,
    pub rgb_css: String,
    pub hsl_css: String,
}

pub fn parse_hex(input: &str) -> Result<Rgb, ToolError> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    let bad = || ToolError::invalid(format!("invalid hex color: {input}"));
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(bad());
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| bad());
    match digits.len() {
        3 => {
            let expand = |i: usize| channel(&digits[i..=i].repeat(2));
            Ok(Rgb { r: expand(0)?, g: expand(1)?, b: expand(2)? })
        }
        6 => Ok(Rgb {
            r: channel(&digits[0..2])?,
            g: channel(&digits[2..4])?,
            b: channel(&digits[4..6])?,
        }),
        _ => Err(bad()),
    }
}

pub fn to_hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let d = max - min;

    let (h, s) = if d == 0.0 {
        (0.0, 0.0)
    } else {
        let s = d / (1.0 - (2.0 * l - 1.0).abs());
        let h = if max == r {
            60.0 * ((g - b) / d).rem_euclid(6.0)
        } else if max == g {
            60.0 * ((b - r) / d + 2.0)
        } else {
            60.0 * ((r - g) / d + 4.0)
        };
        (h, s)
    };

    Hsl {
        h: (h.round() as u16) % 360,
        s: (s * 100.0).round() as u8,
        l: (l * 100.0).round() as u8,
    }
}

pub fn hsl_to_rgb(hsl: Hsl) -> Result<Rgb, ToolError> {
    if hsl.h > 360 || hsl.s > 100 || hsl.l > 100 {
        return Err(ToolError::invalid("hsl out of range (h 0-360, s and l 0-100)"));
    }

    let h = f64::from(hsl.h % 360) / 60.0;
    let s = f64::from(hsl.s) / 100.0;
    let l = f64::from(hsl.l) / 100.0;
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match h as u8 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let scale = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Ok(Rgb { r: scale(r), g: scale(g), b: scale(b) })
}

pub fn convert(input: &ColorInput) -> Result<ColorSet, ToolError> {
    let rgb = match input {
        ColorInput::Hex { hex } => parse_hex(hex)?,
        ColorInput::Rgb { r, g, b } => Rgb { r: *r, g: *g, b: *b },
        ColorInput::Hsl { h, s, l } => hsl_to_rgb(Hsl { h: *h, s: *s, l: *l })?,
    };
    let hsl = match input {
        ColorInput::Hsl { h, s, l } => Hsl { h: *h % 360, s: *s, l: *l },
        _ => rgb_to_hsl(rgb),
    };

    Ok(ColorSet {
        hex: to_hex(rgb),
        rgb,
        hsl,
        rgb_css: format!("rgb({}, {}, {})", rgb.r, rgb.g, rgb.b),
        hsl_css: format!("hsl({}, {}%, {}%)", hsl.h, hsl.s, hsl.l),
    })
}

#[cfg(test)]
#[path = "color_test.rs"]
mod tests;
