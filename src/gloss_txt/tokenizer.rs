use serde::{Deserialize, Serialize};

// Morpheme boundaries in glossing notation
static DELIMITERS: &[char] = &['-', '=', '.'];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "type", content = "content")]
pub enum EntryToken {
    Morpheme(String),
    Delimiter(char),
}

// Splits one word (or its gloss) into morphemes and delimiters
// "dog-ACC-PL" -> [Morpheme("dog"), Delimiter('-'), Morpheme("ACC"), Delimiter('-'), Morpheme("PL")]
pub fn tokenize_entry(entry: &str) -> Vec<EntryToken> {
    let mut tokens = Vec::new();

    let mut morpheme = String::new();

    for c in entry.chars() {
        if DELIMITERS.contains(&c) {
            // The accumulated morpheme is pushed even when empty so that
            // adjacent delimiters keep their positions
            tokens.push(EntryToken::Morpheme(morpheme));
            morpheme = String::new();

            tokens.push(EntryToken::Delimiter(c));
        } else {
            morpheme.push(c);
        }
    }

    if !morpheme.is_empty() {
        tokens.push(EntryToken::Morpheme(morpheme));
    }

    tokens
}

// Lossless inverse of tokenize_entry
pub fn entry_to_string(entry: &[EntryToken]) -> String {
    let mut string = String::new();
    for token in entry {
        match token {
            EntryToken::Morpheme(value) => string.push_str(value),
            EntryToken::Delimiter(value) => string.push(*value),
        }
    }
    string
}
