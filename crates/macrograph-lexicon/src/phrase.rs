//! Phrase matchers for keyword-style vocabularies.
//!
//! A phrase list compiles into one case-insensitive alternation. Each phrase
//! gets a word boundary on every side whose edge character is a word
//! character, and an optional inflection suffix.

use regex::Regex;

/// Which suffixes a phrase tolerates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhraseStyle {
    /// Verb/noun inflections: `jump` matches `jumps`, `jumped`, `jumping`.
    Inflected,
    /// Plural and possessive: `dollar` matches `dollars`, `dollar's`.
    Nominal,
}

impl PhraseStyle {
    fn suffix(&self) -> &'static str {
        match self {
            Self::Inflected => "(?:s|es|ed|d|ing)?",
            Self::Nominal => "(?:'s|\u{2019}s|s)?",
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Regex source for a single phrase. Inner whitespace matches any run of whitespace.
pub fn phrase_pattern(phrase: &str, style: PhraseStyle) -> Option<String> {
    let phrase = phrase.trim();
    let first = phrase.chars().next()?;
    let last = phrase.chars().last()?;

    let body = phrase
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+");

    let mut out = String::with_capacity(body.len() + 32);
    if is_word_char(first) {
        out.push_str(r"\b");
    }
    out.push_str(&body);
    out.push_str(style.suffix());
    if is_word_char(last) {
        out.push_str(r"\b");
    }
    Some(out)
}

/// Compile a phrase list into one matcher. Blank phrases are skipped; a list
/// with no usable phrase yields `Ok(None)`.
pub fn compile_phrases<S: AsRef<str>>(
    phrases: &[S],
    style: PhraseStyle,
) -> Result<Option<Regex>, regex::Error> {
    let alternatives: Vec<String> = phrases
        .iter()
        .filter_map(|p| phrase_pattern(p.as_ref(), style))
        .collect();
    if alternatives.is_empty() {
        return Ok(None);
    }
    Regex::new(&format!("(?i)(?:{})", alternatives.join("|"))).map(Some)
}

/// Compile a raw regex with case-insensitive matching.
pub fn compile_raw(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("(?i){pattern}"))
}
