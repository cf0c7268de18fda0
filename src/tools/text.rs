use serde::{Deserialize, Serialize};

const WORDS_PER_MINUTE: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextStats {
    pub characters: usize,
    pub characters_no_spaces: usize,
    pub words: usize,
    pub sentences: usize,
    pub paragraphs: usize,
    pub reading_minutes: usize,
}

pub fn stats(text: &str) -> TextStats {
    let words = text.split_whitespace().count();

    let sentences = text
        .split(['.', '!', '?'])
        .filter(|s| s.chars().any(char::is_alphanumeric))
        .count();

    // paragraphs are runs of non-blank lines
    let mut paragraphs = 0;
    let mut in_paragraph = false;
    for line in text.lines() {
        let blank = line.trim().is_empty();
        if !blank && !in_paragraph {
            paragraphs += 1;
        }
        in_paragraph = !blank;
    }

    TextStats {
        characters: text.chars().count(),
        characters_no_spaces: text.chars().filter(|c| !c.is_whitespace()).count(),
        words,
        sentences,
        paragraphs,
        reading_minutes: words.div_ceil(WORDS_PER_MINUTE),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    Upper,
    Lower,
    Title,
    Sentence,
    Snake,
    Kebab,
    Camel,
    Pascal,
}

// Split on non-alphanumerics and lower-to-upper boundaries ("fooBar baz" -> foo, Bar, baz)
fn split_words(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;
    for c in text.chars() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = c.is_lowercase() || c.is_numeric();
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

pub fn convert_case(text: &str, case: Case) -> String {
    match case {
        Case::Upper => text.to_uppercase(),
        Case::Lower => text.to_lowercase(),
        Case::Title => {
            let mut out = String::with_capacity(text.len());
            let mut at_word_start = true;
            for c in text.chars() {
                if at_word_start {
                    out.extend(c.to_uppercase());
                } else {
                    out.extend(c.to_lowercase());
                }
                at_word_start = c.is_whitespace();
            }
            out
        }
        Case::Sentence => {
            let mut out = String::with_capacity(text.len());
            let mut capitalize_next = true;
            for c in text.chars() {
                if capitalize_next && c.is_alphabetic() {
                    out.extend(c.to_uppercase());
                    capitalize_next = false;
                } else {
                    out.extend(c.to_lowercase());
                }
                if matches!(c, '.' | '!' | '?') {
                    capitalize_next = true;
                }
            }
            out
        }
        Case::Snake | Case::Kebab => {
            let sep = if case == Case::Snake { "_" } else { "-" };
            split_words(text)
                .iter()
                .map(|w| w.to_lowercase())
                .collect::<Vec<_>>()
                .join(sep)
        }
        Case::Camel | Case::Pascal => {
            let words = split_words(text);
            words
                .iter()
                .enumerate()
                .map(|(i, w)| {
                    if i == 0 && case == Case::Camel {
                        w.to_lowercase()
                    } else {
                        capitalize(w)
                    }
                })
                .collect()
        }
    }
}

#[cfg(test)]
#[path = "text_test.rs"]
mod tests;
