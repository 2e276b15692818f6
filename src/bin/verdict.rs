//! verdict - one-shot fake news prediction from the command line.

use std::io::{self, IsTerminal, Read};

use clap::Parser;

use newsverdict::present::render_text;
use newsverdict::{Config, Language, Pipeline, Secrets, Submission};

/// Classify one news item and look up related fact-checks.
#[derive(Parser)]
#[command(name = "verdict")]
#[command(version = newsverdict::version::version_str())]
#[command(about = "Fake news prediction for a single article")]
struct Args {
    /// Headline of the article.
    #[arg(short, long, default_value = "")]
    title: String,

    /// Article body (or omit to read from stdin).
    #[arg(long)]
    text: Option<String>,

    /// Input language: English or Other.
    #[arg(short, long, default_value = "English")]
    language: Language,

    /// Print the report as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Path to configuration file.
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Default: warn for CLI; override with RUST_LOG.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let body = match args.text {
        Some(text) => text,
        None => read_stdin()?,
    };

    let config = Config::load(args.config.as_deref())?;
    let secrets = Secrets::load()?;

    let pipeline = Pipeline::builder()
        .remote_services(&config, &secrets)?
        .local_classifier(&config)?
        .build()?;

    let report = pipeline
        .run(Submission::new(args.title, body, args.language))
        .await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_text(&report));
    }

    Ok(())
}

fn read_stdin() -> io::Result<String> {
    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(String::new());
    }
    let mut buffer = String::new();
    stdin.read_to_string(&mut buffer)?;
    Ok(buffer.trim_end().to_string())
}
