use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::gloss_txt::tokenizer::{tokenize_entry, EntryToken};

// One word of the original language paired with its gloss
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlossedPart {
    pub orig: Vec<EntryToken>,
    pub gloss: Vec<EntryToken>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sentence {
    pub parts: Vec<GlossedPart>,

    // Free translation, empty when the input has none
    pub meaning: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedGlossTxt {
    pub sentences: Vec<Sentence>,
    pub warnings: Vec<GlossWarning>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "type")]
pub enum GlossWarning {
    // An original-language line with no gloss line after it
    UnpairedLine { line: String },

    // Original line and gloss line split into different word counts
    UnequalPartCount { orig: usize, gloss: usize },
}

impl fmt::Display for GlossWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlossWarning::UnpairedLine { line } => {
                write!(f, "uneven number of non-quoted lines: {:?} has no gloss", line)
            }
            GlossWarning::UnequalPartCount { orig, gloss } => {
                write!(
                    f,
                    "text and gloss have unequal number of parts ({} vs {})",
                    orig, gloss
                )
            }
        }
    }
}

// Never fails: malformed input degrades to warnings and a partial document
pub fn parse_gloss_txt(txt: &str) -> ParsedGlossTxt {
    // A free-translation line starts with a quote
    static REGEX_MEANING_CHECKER: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^['"]"#).unwrap());

    let lines: Vec<&str> = txt
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();
    let mut lines = &lines[..];

    let mut sentences = Vec::new();
    let mut warnings = Vec::new();

    while !lines.is_empty() {
        let orig = lines[0];

        let gloss = match lines.get(1) {
            Some(&gloss) => gloss,
            None => {
                warnings.push(GlossWarning::UnpairedLine {
                    line: orig.to_string(),
                });
                break;
            }
        };
        lines = &lines[2..];

        let meaning = match lines.first() {
            Some(&line) if REGEX_MEANING_CHECKER.is_match(line) => {
                lines = &lines[1..];
                line
            }
            _ => "",
        };

        let orig_words: Vec<&str> = orig.split(' ').filter(|w| !w.is_empty()).collect();
        let gloss_words: Vec<&str> = gloss.split(' ').filter(|w| !w.is_empty()).collect();

        if orig_words.len() != gloss_words.len() {
            warnings.push(GlossWarning::UnequalPartCount {
                orig: orig_words.len(),
                gloss: gloss_words.len(),
            });
        }

        // On a count mismatch the surplus words of the longer line are
        // dropped; the warning above already points at the sentence
        let parts = orig_words
            .iter()
            .zip(gloss_words.iter())
            .map(|(&orig_word, &gloss_word)| GlossedPart {
                orig: tokenize_entry(orig_word),
                gloss: tokenize_entry(gloss_word),
            })
            .collect();

        sentences.push(Sentence {
            parts,
            meaning: meaning.to_string(),
        });
    }

    ParsedGlossTxt {
        sentences,
        warnings,
    }
}
