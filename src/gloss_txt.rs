// Interlinear glossing text: sentences written as a pair of lines — an
// original-language line and a word-aligned gloss line — optionally followed
// by a free-translation line starting with ' or "
//
// Words decompose into morphemes at the conventional glossing delimiters:
// - "-" affix boundary (dog-ACC-PL)
// - "=" clitic boundary
// - "." fused category (go.1SG)
//
// Grammatical abbreviations are written in all caps and are rendered in
// small caps when styling is enabled.

pub mod converter;
pub mod parser;
pub mod renderer;
pub mod small_caps;
pub mod tokenizer;
