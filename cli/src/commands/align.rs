use crate::OutputFormat;
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::BufWriter;
use std::process::ExitCode;
use tracing::info;
use unl_align::{AlignConfig, AlignMetrics, JsonLinesSink, TsvSink, align_to_sink, tokenize_bytes};

#[allow(clippy::too_many_arguments)]
pub fn run(
    text_x_path: &str,
    text_y_path: &str,
    output_path: &str,
    mincpl: usize,
    minsim: f64,
    maxrec: i64,
    format: OutputFormat,
    metrics_json: Option<String>,
) -> Result<ExitCode> {
    let config = AlignConfig::builder()
        .min_common_prefix(mincpl)
        .min_similarity(minsim)
        .max_recursion(maxrec)
        .build()
        .context("Invalid alignment parameters")?;

    let text_x = read_tokens(text_x_path)?;
    let text_y = read_tokens(text_y_path)?;
    info!(
        tokens_x = text_x.len(),
        tokens_y = text_y.len(),
        mincpl,
        minsim,
        maxrec,
        "aligning texts"
    );

    let file = File::create(output_path)
        .with_context(|| format!("Failed to create output file: {}", output_path))?;
    let writer = BufWriter::new(file);

    let metrics = match format {
        OutputFormat::Tsv => {
            let mut sink = TsvSink::new(writer);
            align_to_sink(&text_x, &text_y, &config, &mut sink)
        }
        OutputFormat::Jsonl => {
            let mut sink = JsonLinesSink::new(writer);
            align_to_sink(&text_x, &text_y, &config, &mut sink)
        }
    }
    .with_context(|| format!("Failed to write alignment to {}", output_path))?;

    info!(
        segments = metrics.segments,
        anchors = metrics.anchor_segments,
        elapsed_ms = metrics.alignment_time_ms,
        "wrote {}",
        output_path
    );

    if let Some(path) = metrics_json {
        write_metrics(&path, &metrics)?;
    }

    Ok(ExitCode::SUCCESS)
}

fn read_tokens(path: &str) -> Result<Vec<String>> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read text: {}", path))?;
    Ok(tokenize_bytes(&bytes))
}

fn write_metrics(path: &str, metrics: &AlignMetrics) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create metrics file: {}", path))?;
    serde_json::to_writer_pretty(BufWriter::new(file), metrics)
        .with_context(|| format!("Failed to write metrics JSON: {}", path))?;
    Ok(())
}
