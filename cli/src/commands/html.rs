use crate::output::html::write_html_table;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::process::ExitCode;

pub fn run(input_path: &str, output_path: &str) -> Result<ExitCode> {
    let input =
        File::open(input_path).with_context(|| format!("Failed to open input: {}", input_path))?;
    let output = File::create(output_path)
        .with_context(|| format!("Failed to create output file: {}", output_path))?;

    write_html_table(BufReader::new(input), BufWriter::new(output))
        .with_context(|| format!("Failed to convert {} to HTML", input_path))?;

    Ok(ExitCode::SUCCESS)
}
