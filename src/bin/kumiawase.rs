use clap::Parser;
use kumiawase::{
    config::KumiawaseConfig, parse_expression, Error as KumiawaseError, Formatter,
};
use std::{path::PathBuf, process::ExitCode};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const DEMO_EXPRESSIONS: [&str; 2] = ["(1--2)", "((1+2)*(3+4))"];

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Expressions to parse (runs the demo inputs when empty)
    #[arg(allow_negative_numbers = true)]
    expressions: Vec<String>,

    /// Path to config file
    #[arg(short, long, default_value = "kumiawase.json")]
    config: PathBuf,

    /// Enable debug mode
    #[arg(short, long)]
    verbose: bool,
}

/// Returns whether every expression was accepted.
fn run(cli: &Cli) -> Result<bool, KumiawaseError> {
    let config = KumiawaseConfig::load_or_default(&cli.config)?;
    info!("config loaded.");
    debug!("config: {:?}", config);

    let formatter = Formatter::new(config.formatter.clone());
    let inputs: Vec<&str> = if cli.expressions.is_empty() {
        DEMO_EXPRESSIONS.to_vec()
    } else {
        cli.expressions.iter().map(String::as_str).collect()
    };

    let mut all_accepted = true;
    for input in inputs {
        match parse_expression(input).into_parts() {
            (Some(node), _) => {
                let rendered = formatter.format(&node).ok_or_else(|| {
                    KumiawaseError::render(format!("no readable form for {:?}", node))
                })?;
                println!("{}", rendered);
            }
            (None, leftover) => {
                all_accepted = false;
                if config.show_leftover {
                    eprintln!("error: {} rejected, leftover {:?}", input, leftover);
                } else {
                    eprintln!("error: {} rejected", input);
                }
            }
        }
    }
    Ok(all_accepted)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
