use abbrex::abbrev::{Classifier, LexiconSet, WordList};
use abbrex::cli::CliArgs;
use abbrex::engine::{self, AbbrexError, Config};
use abbrex::output;
use abbrex::resolve::OpenAiClient;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    // Logs go to stderr; stdout carries only the JSON result.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version print to stdout and succeed
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    match run(&args) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, file = %args.file.display(), "processing failed");
            eprintln!("Error during processing: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> Result<String, AbbrexError> {
    // Credentials are checked before any file is touched.
    let config = Config::from_env()?;
    let classifier = build_classifier(args)?;
    let client = OpenAiClient::new(&config)?;

    let meanings = engine::run(&args.file, &config, &client, &classifier)?;
    if let Some(path) = &args.docx_out {
        output::write_report(&meanings, path)?;
    }
    Ok(output::to_json(&meanings)?)
}

fn build_classifier(args: &CliArgs) -> Result<Classifier, AbbrexError> {
    if args.exclude_words.is_empty() {
        return Ok(Classifier::default());
    }

    let mut lexicons = LexiconSet::new();
    for path in &args.exclude_words {
        lexicons.push(Box::new(WordList::from_file(path)?));
    }
    tracing::info!(lists = args.exclude_words.len(), "dictionary exclusion enabled");
    Ok(Classifier::with_lexicon(Box::new(lexicons)))
}
