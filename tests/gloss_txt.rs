use serde_json::json;

use interlinear_fmt::gloss_txt::{
    converter::{convert_gloss_txt, OutputFormat},
    parser::{parse_gloss_txt, GlossWarning},
    tokenizer::{entry_to_string, tokenize_entry},
};

static SAMPLE: &str = "dog-ACC-PL run-PST\ndog-ACC-PL run-PST\n'the dogs ran'\n";

#[test]
fn test_parse_sample() {
    let parsed = parse_gloss_txt(SAMPLE);

    assert!(parsed.warnings.is_empty());
    assert_eq!(parsed.sentences.len(), 1);

    let sentence = &parsed.sentences[0];
    assert_eq!(sentence.parts.len(), 2);
    assert_eq!(sentence.meaning, "'the dogs ran'");

    assert_eq!(entry_to_string(&sentence.parts[0].orig), "dog-ACC-PL");
    assert_eq!(entry_to_string(&sentence.parts[1].gloss), "run-PST");
}

#[test]
fn test_render_sample_markdown() {
    let converted = convert_gloss_txt(SAMPLE, OutputFormat::Markdown, true);

    assert!(converted.warnings.is_empty());
    assert_eq!(
        converted.output,
        "| | |\n\
         |-|-|\n\
         |***dog-ACC-PL***|***run-PST***|\n\
         |dog-*_acc_*-*_pl_*|run-*_pst_*|\n\
         \n\
         *'the dogs ran'*\n"
    );

    let converted = convert_gloss_txt(SAMPLE, OutputFormat::Markdown, false);
    assert!(converted.output.contains("|dog-ACC-PL|run-PST|"));
    assert!(!converted.output.contains("*_"));
}

#[test]
fn test_render_sample_plain_text() {
    let converted = convert_gloss_txt(SAMPLE, OutputFormat::PlainText, false);

    assert_eq!(
        converted.output,
        "dog-ACC-PL run-PST\ndog-ACC-PL run-PST\n'the dogs ran'\n\n"
    );

    let converted = convert_gloss_txt(SAMPLE, OutputFormat::PlainText, true);
    assert_eq!(
        converted.output,
        "dog-ACC-PL run-PST\ndog-ᴀᴄᴄ-ᴘʟ run-ᴘꜱᴛ\n'the dogs ran'\n\n"
    );
}

#[test]
fn test_plain_text_columns_are_padded() {
    let txt = "taloissani juoksen\nhouse-PL-INE-1SG run-PRS.1SG\n";
    let converted = convert_gloss_txt(txt, OutputFormat::PlainText, false);

    assert_eq!(
        converted.output,
        "taloissani       juoksen\nhouse-PL-INE-1SG run-PRS.1SG\n\n"
    );
}

#[test]
fn test_markdown_separates_sentences() {
    let txt = "a\nb\nc\nd\n";
    let converted = convert_gloss_txt(txt, OutputFormat::Markdown, true);

    assert_eq!(
        converted.output,
        "| |\n|-|\n|***a***|\n|b|\n\n---\n\n| |\n|-|\n|***c***|\n|d|\n"
    );
}

#[test]
fn test_unequal_part_count() {
    let parsed = parse_gloss_txt("a b c\nX Y\n");

    assert_eq!(
        parsed.warnings,
        vec![GlossWarning::UnequalPartCount { orig: 3, gloss: 2 }]
    );

    // The document survives; pairing stops at the shorter line
    assert_eq!(parsed.sentences.len(), 1);
    assert_eq!(parsed.sentences[0].parts.len(), 2);

    let converted = convert_gloss_txt("a b c\nX Y\n", OutputFormat::Markdown, true);
    assert_eq!(converted.warnings.len(), 1);
    assert!(converted.warnings[0].contains("unequal number of parts"));
}

#[test]
fn test_unpaired_line() {
    let parsed = parse_gloss_txt("first second\nfirst-GL second-GL\n'done'\ndangling line\n");

    assert_eq!(
        parsed.warnings,
        vec![GlossWarning::UnpairedLine {
            line: "dangling line".to_string(),
        }]
    );

    // The sentences before the dangling line are kept
    assert_eq!(parsed.sentences.len(), 1);
    assert_eq!(parsed.sentences[0].meaning, "'done'");
}

#[test]
fn test_empty_input() {
    for txt in ["", "\n\n", "   \n\t\n"] {
        let parsed = parse_gloss_txt(txt);
        assert!(parsed.sentences.is_empty());
        assert!(parsed.warnings.is_empty());

        let converted = convert_gloss_txt(txt, OutputFormat::Markdown, true);
        assert_eq!(converted.output, "");
        let converted = convert_gloss_txt(txt, OutputFormat::PlainText, true);
        assert_eq!(converted.output, "");
    }
}

#[test]
fn test_convert_is_idempotent() {
    for format in [OutputFormat::Markdown, OutputFormat::PlainText] {
        let first = convert_gloss_txt(SAMPLE, format, true);
        let second = convert_gloss_txt(SAMPLE, format, true);
        assert_eq!(first.output, second.output);
        assert_eq!(first.warnings, second.warnings);
    }
}

#[test]
fn test_tokenize_entry_is_lossless_over_parsed_words() {
    let parsed = parse_gloss_txt("ta-lo=ssa.ni juos..len\nhouse-PL=INE.1SG run-PRS\n");

    for sentence in &parsed.sentences {
        for part in &sentence.parts {
            assert_eq!(tokenize_entry(&entry_to_string(&part.orig)), part.orig);
            assert_eq!(tokenize_entry(&entry_to_string(&part.gloss)), part.gloss);
        }
    }
}

#[test]
fn test_parsed_document_as_json() -> anyhow::Result<()> {
    let parsed = parse_gloss_txt("dog-ACC run\ndog-ACC run\n");
    let value = serde_json::to_value(&parsed)?;

    assert_eq!(
        value["sentences"][0]["parts"][0]["orig"],
        json!([
            { "type": "morpheme", "content": "dog" },
            { "type": "delimiter", "content": "-" },
            { "type": "morpheme", "content": "ACC" },
        ])
    );
    assert_eq!(value["sentences"][0]["meaning"], json!(""));
    assert_eq!(value["warnings"], json!([]));

    Ok(())
}
