mod commands;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "unl-align")]
#[command(about = "Align parallel texts at the word level")]
#[command(version)]
pub struct Cli {
    #[arg(long, short, global = true, help = "Log alignment progress to stderr")]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(
        about = "Align two texts and write one tab-separated line per segment",
        after_help = "Input texts should be UTF-8 encoded. Output file will also be UTF-8.\n\n\
                      Example:\n  unl-align align en.txt pt.txt enpt.txt 3 .6 10"
    )]
    Align {
        #[arg(help = "Path to the first text (X side)")]
        text_x: String,
        #[arg(help = "Path to the second text (Y side)")]
        text_y: String,
        #[arg(help = "Path to the output file")]
        output: String,
        #[arg(help = "Minimum common prefix length (0 disables the prefix filter)")]
        mincpl: usize,
        #[arg(
            value_parser = parse_unit_interval,
            help = "Minimum spelling similarity between 0.0 and 1.0 (1.0 = exact match only)"
        )]
        minsim: f64,
        #[arg(allow_negative_numbers = true, help = "Maximum recursion depth")]
        maxrec: i64,
        #[arg(long, short, value_enum, default_value = "tsv", help = "Output format")]
        format: OutputFormat,
        #[arg(long, value_name = "PATH", help = "Write alignment metrics JSON to this path")]
        metrics_json: Option<String>,
    },
    #[command(about = "Render a tab-separated file as an HTML table")]
    Html {
        #[arg(help = "Path to the input TSV file")]
        input: String,
        #[arg(help = "Path to the output HTML file")]
        output: String,
    },
}

#[derive(Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Tsv,
    Jsonl,
}

fn parse_unit_interval(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .parse()
        .map_err(|_| format!("`{raw}` is not a decimal number"))?;
    if !(0.0..=1.0).contains(&value) {
        return Err("minsim must be a value between 0.0 and 1.0".to_string());
    }
    Ok(value)
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Align {
            text_x,
            text_y,
            output,
            mincpl,
            minsim,
            maxrec,
            format,
            metrics_json,
        } => commands::align::run(
            &text_x,
            &text_y,
            &output,
            mincpl,
            minsim,
            maxrec,
            format,
            metrics_json,
        ),
        Commands::Html { input, output } => commands::html::run(&input, &output),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}
