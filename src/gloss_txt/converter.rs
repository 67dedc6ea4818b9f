use serde::{Deserialize, Serialize};

use crate::gloss_txt::{
    parser::{parse_gloss_txt, Sentence},
    renderer::{GlossRenderer, MarkdownRenderer, PlainTextRenderer},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Markdown,
    PlainText,
}

#[derive(Debug)]
pub struct Converted {
    pub output: String,
    pub warnings: Vec<String>,
}

// Parses the input and runs the whole document through the chosen renderer.
// Pure: identical input and settings give byte-identical output.
pub fn convert_gloss_txt(txt: &str, format: OutputFormat, small_caps: bool) -> Converted {
    let parsed = parse_gloss_txt(txt);

    let output = match format {
        OutputFormat::Markdown => run_renderer(MarkdownRenderer::new(small_caps), &parsed.sentences),
        OutputFormat::PlainText => {
            run_renderer(PlainTextRenderer::new(small_caps), &parsed.sentences)
        }
    };

    Converted {
        output,
        warnings: parsed.warnings.iter().map(|w| w.to_string()).collect(),
    }
}

fn run_renderer<R: GlossRenderer>(mut renderer: R, sentences: &[Sentence]) -> String {
    for sentence in sentences {
        for part in &sentence.parts {
            renderer.add_part(&part.orig, &part.gloss);
        }
        renderer.end_line(&sentence.meaning);
    }
    renderer.finish()
}
