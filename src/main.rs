use std::{
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use clap::{Parser, ValueEnum};
use tokenscan::{
    config::FrontendConfig,
    errors::errors::InputError,
    frontend::{render_table, Failure, Frontend, Report},
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Json,
    Table,
}

/// Classifies source text into keywords, identifiers, literals, operators,
/// delimiters and comments.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Source file to tokenize. Reads stdin when neither a file nor --code is given
    file: Option<PathBuf>,

    /// Tokenize this text instead of a file
    #[arg(short, long, conflicts_with = "file")]
    code: Option<String>,

    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Path to a JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: &Cli) -> Result<(Report, String), InputError> {
    let config = FrontendConfig::load_or_default(cli.config.as_deref())?;
    let frontend = Frontend::new(config);

    if let Some(code) = &cli.code {
        return Ok((frontend.tokenize_code(code)?, code.clone()));
    }

    if let Some(path) = &cli.file {
        debug!("reading {:?}", path);
        return frontend.tokenize_path(path);
    }

    let mut code = String::new();
    io::stdin()
        .read_to_string(&mut code)
        .map_err(|source| InputError::Io {
            path: String::from("<stdin>"),
            source,
        })?;
    Ok((frontend.tokenize_code(&code)?, code))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let start = Instant::now();
    let outcome = run(&cli);
    debug!("finished in {:?}", start.elapsed());

    match (outcome, cli.format) {
        (Ok((report, _)), Format::Json) => match serde_json::to_string_pretty(&report) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        },
        (Ok((report, source)), Format::Table) => {
            print!("{}", render_table(&report, &source));
            ExitCode::SUCCESS
        }
        (Err(error), Format::Json) => {
            let failure = Failure::from(&error);
            match serde_json::to_string_pretty(&failure) {
                Ok(json) => println!("{}", json),
                Err(_) => eprintln!("Error: {}", error),
            }
            ExitCode::FAILURE
        }
        (Err(error), Format::Table) => {
            eprintln!("Error: {}", error);
            ExitCode::FAILURE
        }
    }
}
