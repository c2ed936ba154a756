use clap::Parser;
use miette::{IntoDiagnostic, Result, WrapErr};
use mortgage_calc::application::session;
use mortgage_calc::interfaces::console::OutputFormat;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Compute periodic mortgage payments", long_about = None)]
struct Cli {
    /// Read answers from a file instead of standard input
    #[arg(long)]
    input: Option<PathBuf>,

    /// Output format for the computed quote. In JSON mode the prompts are
    /// written to stderr so that stdout carries only the JSON document.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let input: Box<dyn BufRead> = match cli.input {
        Some(path) => {
            let file = File::open(&path)
                .into_diagnostic()
                .wrap_err_with(|| format!("cannot open input file {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let prompts: Box<dyn Write> = match cli.format {
        OutputFormat::Text => Box::new(io::stdout()),
        OutputFormat::Json => Box::new(io::stderr()),
    };

    session::run(input, prompts, io::stdout(), cli.format)?;

    Ok(())
}
