use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use serde::{Deserialize, Serialize};

use super::{ToolError, round_to};

const LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()-_=+[]{};:,.<>?";

const MIN_LENGTH: usize = 4;
const MAX_LENGTH: usize = 128;

fn default_length() -> usize {
    16
}

fn yes() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct PasswordOptions {
    #[serde(default = "default_length")]
    pub length: usize,
    #[serde(default = "yes")]
    pub lowercase: bool,
    #[serde(default = "yes")]
    pub uppercase: bool,
    #[serde(default = "yes")]
    pub digits: bool,
    #[serde(default)]
    pub symbols: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: default_length(),
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: false,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedPassword {
    pub password: String,
    pub entropy_bits: f64,
    pub strength: &'static str,
}

pub fn strength_label(bits: f64) -> &'static str {
    match bits {
        b if b < 40.0 => "weak",
        b if b < 60.0 => "fair",
        b if b < 80.0 => "strong",
        _ => "very strong",
    }
}

pub fn generate<R: Rng + ?Sized>(
    options: &PasswordOptions,
    rng: &mut R,
) -> Result<GeneratedPassword, ToolError> {
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&options.length) {
        return Err(ToolError::invalid(format!(
            "length must be between {MIN_LENGTH} and {MAX_LENGTH}"
        )));
    }

    let classes: Vec<&[u8]> = [
        (options.lowercase, LOWER),
        (options.uppercase, UPPER),
        (options.digits, DIGITS),
        (options.symbols, SYMBOLS),
    ]
    .into_iter()
    .filter_map(|(on, set)| on.then_some(set))
    .collect();
    if classes.is_empty() {
        return Err(ToolError::invalid("select at least one character class"));
    }

    let pool: Vec<u8> = classes.concat();
    // one from every selected class, the rest from the whole pool
    let mut chars: Vec<u8> = classes
        .iter()
        .filter_map(|set| set.choose(rng).copied())
        .collect();
    while chars.len() < options.length {
        if let Some(&c) = pool.choose(rng) {
            chars.push(c);
        }
    }
    chars.shuffle(rng);

    let entropy = options.length as f64 * (pool.len() as f64).log2();
    Ok(GeneratedPassword {
        password: String::from_utf8_lossy(&chars).into_owned(),
        entropy_bits: round_to(entropy, 1),
        strength: strength_label(entropy),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn honours_length_and_classes() {
        let mut rng = StdRng::seed_from_u64(11);
        let options = PasswordOptions {
            length: 12,
            symbols: true,
            ..PasswordOptions::default()
        };
        for _ in 0..50 {
            let p = generate(&options, &mut rng).unwrap().password;
            assert_eq!(p.len(), 12);
            assert!(p.bytes().any(|c| LOWER.contains(&c)));
            assert!(p.bytes().any(|c| UPPER.contains(&c)));
            assert!(p.bytes().any(|c| DIGITS.contains(&c)));
            assert!(p.bytes().any(|c| SYMBOLS.contains(&c)));
        }
    }

    #[test]
    fn digits_only() {
        let options = PasswordOptions {
            length: 6,
            lowercase: false,
            uppercase: false,
            digits: true,
            symbols: false,
        };
        let generated = generate(&options, &mut StdRng::seed_from_u64(1)).unwrap();
        assert!(generated.password.bytes().all(|c| c.is_ascii_digit()));
        assert_eq!(generated.strength, "weak");
    }

    #[test]
    fn entropy_and_strength() {
        // 16 chars over 62 symbols ~ 95.3 bits
        let generated = generate(&PasswordOptions::default(), &mut StdRng::seed_from_u64(2)).unwrap();
        assert_eq!(generated.entropy_bits, 95.3);
        assert_eq!(generated.strength, "very strong");
        assert_eq!(strength_label(45.0), "fair");
        assert_eq!(strength_label(70.0), "strong");
    }

    #[test]
    fn rejects_bad_options() {
        let mut rng = StdRng::seed_from_u64(3);
        let too_short = PasswordOptions { length: 3, ..PasswordOptions::default() };
        assert!(generate(&too_short, &mut rng).is_err());
        let none = PasswordOptions {
            length: 10,
            lowercase: false,
            uppercase: false,
            digits: false,
            symbols: false,
        };
        assert!(generate(&none, &mut rng).is_err());
    }
}
