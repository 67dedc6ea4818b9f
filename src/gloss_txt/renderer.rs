use crate::gloss_txt::small_caps::to_small_caps;
use crate::gloss_txt::tokenizer::{entry_to_string, EntryToken};

// Every renderer accumulates one sentence at a time:
// - add_part is called once per word pair
// - end_line closes the sentence with its free translation
// - finish consumes the renderer and hands back the whole output
pub trait GlossRenderer {
    fn add_part(&mut self, orig: &[EntryToken], gloss: &[EntryToken]);
    fn end_line(&mut self, meaning: &str);
    fn finish(self) -> String;
}

// Grammatical abbreviations are written in all caps, e.g. ACC, 1SG
fn is_abbreviation(morpheme: &str) -> bool {
    morpheme.chars().count() > 1 && morpheme == morpheme.to_uppercase()
}

// Markdown table, one column per word. The original row is the table body
// rather than the header so the emphasis markers survive forum renderers.
pub struct MarkdownRenderer {
    small_caps: bool,

    header: String,
    center: String,
    orig: String,
    gloss: String,

    lines: String,
}

impl MarkdownRenderer {
    pub fn new(small_caps: bool) -> Self {
        MarkdownRenderer {
            small_caps,

            header: String::from("|"),
            center: String::from("|"),
            orig: String::from("|"),
            gloss: String::from("|"),

            lines: String::new(),
        }
    }
}

impl GlossRenderer for MarkdownRenderer {
    fn add_part(&mut self, orig: &[EntryToken], gloss: &[EntryToken]) {
        self.header.push_str(" |");
        self.center.push_str("-|");

        self.orig.push_str("***");
        self.orig.push_str(&entry_to_string(orig));
        self.orig.push_str("***|");

        for token in gloss {
            match token {
                EntryToken::Morpheme(value) => {
                    if self.small_caps && is_abbreviation(value) {
                        self.gloss.push_str("*_");
                        self.gloss.push_str(&value.to_lowercase());
                        self.gloss.push_str("_*");
                    } else {
                        self.gloss.push_str(value);
                    }
                }
                EntryToken::Delimiter(value) => self.gloss.push(*value),
            }
        }
        self.gloss.push('|');
    }

    fn end_line(&mut self, meaning: &str) {
        // Horizontal rule between sentences only
        if !self.lines.is_empty() {
            self.lines.push_str("\n---\n\n");
        }

        self.lines.push_str(&self.header);
        self.lines.push('\n');
        self.lines.push_str(&self.center);
        self.lines.push('\n');
        self.lines.push_str(&self.orig);
        self.lines.push('\n');
        self.lines.push_str(&self.gloss);
        self.lines.push('\n');

        if !meaning.is_empty() {
            self.lines.push('\n');
            self.lines.push('*');
            self.lines.push_str(meaning);
            self.lines.push_str("*\n");
        }

        self.header = String::from("|");
        self.center = String::from("|");
        self.orig = String::from("|");
        self.gloss = String::from("|");
    }

    fn finish(self) -> String {
        self.lines
    }
}

// Monospaced text, original and gloss aligned column by column
pub struct PlainTextRenderer {
    small_caps: bool,

    orig: String,
    gloss: String,

    lines: String,
}

impl PlainTextRenderer {
    pub fn new(small_caps: bool) -> Self {
        PlainTextRenderer {
            small_caps,

            orig: String::new(),
            gloss: String::new(),

            lines: String::new(),
        }
    }

    fn gloss_to_string(&self, gloss: &[EntryToken]) -> String {
        let mut string = String::new();
        for token in gloss {
            match token {
                EntryToken::Morpheme(value) => {
                    if self.small_caps && is_abbreviation(value) {
                        string.push_str(&to_small_caps(value));
                    } else {
                        string.push_str(value);
                    }
                }
                EntryToken::Delimiter(value) => string.push(*value),
            }
        }
        string
    }
}

impl GlossRenderer for PlainTextRenderer {
    fn add_part(&mut self, orig: &[EntryToken], gloss: &[EntryToken]) {
        self.orig.push_str(&entry_to_string(orig));
        self.orig.push(' ');

        let gloss_text = self.gloss_to_string(gloss);
        self.gloss.push_str(&gloss_text);
        self.gloss.push(' ');

        // Pad the shorter line so both columns stay aligned. Small-caps
        // substitution is one char per char, so char counts are comparable.
        let orig_len = self.orig.chars().count();
        let gloss_len = self.gloss.chars().count();
        if orig_len < gloss_len {
            self.orig.push_str(&" ".repeat(gloss_len - orig_len));
        } else {
            self.gloss.push_str(&" ".repeat(orig_len - gloss_len));
        }
    }

    fn end_line(&mut self, meaning: &str) {
        self.lines.push_str(self.orig.trim_end());
        self.lines.push('\n');
        self.lines.push_str(self.gloss.trim_end());
        self.lines.push('\n');

        if !meaning.is_empty() {
            self.lines.push_str(meaning);
            self.lines.push('\n');
        }

        self.lines.push('\n');

        self.orig = String::new();
        self.gloss = String::new();
    }

    fn finish(self) -> String {
        self.lines
    }
}
