use anyhow::{bail, ensure, Context, Result};
use std::{
    env,
    fs,
    io::{self, Read},
    path::PathBuf,
};

use interlinear_fmt::gloss_txt::{
    converter::{convert_gloss_txt, OutputFormat},
    parser::parse_gloss_txt,
};

struct Args {
    input_path: Option<String>,
    output_path: Option<String>,
    format: OutputFormat,
    small_caps: bool,
    json: bool,
}

fn get_args() -> Result<Args> {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut opts = getopts::Options::new();
    opts.optflag("p", "plain", "write aligned plaintext instead of markdown");
    opts.optflag("n", "no-small-caps", "leave abbreviations in plain caps");
    opts.optflag("", "json", "dump the parsed document as JSON");
    opts.optopt("o", "output", "write the result to FILE", "FILE");
    opts.optflag("h", "help", "print this help");

    let matches = match opts.parse(&args) {
        Ok(m) => m,
        Err(f) => bail!(f),
    };

    if matches.opt_present("h") {
        bail!(opts.usage("Usage: interlinear-fmt [options] [INPUT]"));
    }

    let input_path = matches.free.first().cloned();
    let output_path = matches.opt_str("o");

    let format = if matches.opt_present("p") {
        OutputFormat::PlainText
    } else {
        OutputFormat::Markdown
    };

    Ok(Args {
        input_path,
        output_path,
        format,
        small_caps: !matches.opt_present("n"),
        json: matches.opt_present("json"),
    })
}

fn main() -> Result<()> {
    let args = get_args()?;

    let txt = match &args.input_path {
        Some(input_path) => {
            let input_path = PathBuf::from(input_path);
            ensure!(
                input_path.exists(),
                "File not found: {}",
                input_path.display()
            );
            fs::read_to_string(&input_path)
                .with_context(|| format!("Failed to read {}", input_path.display()))?
        }
        None => {
            let mut txt = String::new();
            io::stdin()
                .read_to_string(&mut txt)
                .context("Failed to read stdin")?;
            txt
        }
    };

    let (output, warnings) = if args.json {
        let parsed = parse_gloss_txt(&txt);
        let warnings = parsed.warnings.iter().map(|w| w.to_string()).collect();
        (serde_json::to_string_pretty(&parsed)?, warnings)
    } else {
        let converted = convert_gloss_txt(&txt, args.format, args.small_caps);
        (converted.output, converted.warnings)
    };

    for warning in &warnings {
        eprintln!("Warning: {}", warning);
    }

    match &args.output_path {
        Some(output_path) => fs::write(output_path, output)
            .with_context(|| format!("Failed to write {}", output_path))?,
        None => print!("{}", output),
    }

    Ok(())
}
