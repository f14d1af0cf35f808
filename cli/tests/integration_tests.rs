use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn unl_align_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_unl-align"))
}

fn write_text(dir: &Path, name: &str, contents: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write input text");
    path.to_string_lossy().into_owned()
}

fn run_align(dir: &Path, x: &str, y: &str, params: &[&str]) -> (Output, String) {
    let x_path = write_text(dir, "x.txt", x);
    let y_path = write_text(dir, "y.txt", y);
    let out_path = dir.join("out.txt").to_string_lossy().into_owned();

    let mut args = vec!["align", x_path.as_str(), y_path.as_str(), out_path.as_str()];
    args.extend_from_slice(params);
    let output = unl_align_cmd()
        .args(&args)
        .output()
        .expect("failed to run unl-align");
    (output, out_path)
}

#[test]
fn identical_texts_align_every_token() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (output, out_path) = run_align(dir.path(), "a b c\n", "a b c\n", &["0", "1", "10"]);

    assert!(
        output.status.success(),
        "align should succeed: stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );
    let written = fs::read_to_string(out_path).expect("read output");
    assert_eq!(written, "a\ta\t0\nb\tb\t0\nc\tc\t0\n\\n\t\\n\t0\n");
}

#[test]
fn similarity_filter_pairs_cognates() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (output, out_path) = run_align(
        dir.path(),
        "the national assembly\n",
        "a assembleia nacional\n",
        &["3", ".6", "10"],
    );

    assert!(output.status.success());
    let written = fs::read_to_string(out_path).expect("read output");
    assert!(
        written.lines().any(|line| line == "assembly\tassembleia\t0"),
        "expected cognate anchor in:\n{written}"
    );
}

#[test]
fn negative_recursion_bound_writes_single_truncated_line() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (output, out_path) = run_align(dir.path(), "a b\n", "a b\n", &["0", "1", "-1"]);

    assert!(
        output.status.success(),
        "negative maxrec is accepted: stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );
    let written = fs::read_to_string(out_path).expect("read output");
    assert_eq!(written, "a b \\n\ta b \\n\t!\n");
}

#[test]
fn out_of_range_similarity_exits_2() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (output, _) = run_align(dir.path(), "a\n", "a\n", &["0", "1.5", "10"]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("between 0.0 and 1.0"),
        "stderr should explain the range: {stderr}"
    );
}

#[test]
fn non_numeric_parameter_exits_2() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (output, _) = run_align(dir.path(), "a\n", "a\n", &["three", "1", "10"]);

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn missing_input_exits_2_with_message() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("missing.txt").to_string_lossy().into_owned();
    let out_path = dir.path().join("out.txt").to_string_lossy().into_owned();

    let output = unl_align_cmd()
        .args(["align", &missing, &missing, &out_path, "0", "1", "10"])
        .output()
        .expect("failed to run unl-align");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"), "stderr: {stderr}");
    assert!(stderr.contains("Failed to read text"), "stderr: {stderr}");
}

#[test]
fn jsonl_format_writes_header_then_segments() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (output, out_path) = run_align(
        dir.path(),
        "a b\n",
        "a b\n",
        &["0", "1", "10", "--format", "jsonl"],
    );

    assert!(output.status.success());
    let written = fs::read_to_string(out_path).expect("read output");
    let lines: Vec<serde_json::Value> = written
        .lines()
        .map(|line| serde_json::from_str(line).expect("each line is JSON"))
        .collect();

    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0]["kind"], "Header");
    assert_eq!(lines[1]["x"], serde_json::json!(["a"]));
    assert_eq!(lines[1]["tag"]["kind"], "anchor");
    assert_eq!(lines[1]["tag"]["depth"], 0);
}

#[test]
fn metrics_json_is_written_on_request() {
    let dir = tempfile::tempdir().expect("tempdir");
    let metrics_path = dir.path().join("metrics.json").to_string_lossy().into_owned();
    let (output, _) = run_align(
        dir.path(),
        "a b c\n",
        "a c\n",
        &["0", "1", "10", "--metrics-json", metrics_path.as_str()],
    );

    assert!(output.status.success());
    let metrics: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(metrics_path).expect("read metrics"))
            .expect("metrics JSON");
    assert_eq!(metrics["tokens_x"], 4);
    assert_eq!(metrics["tokens_y"], 3);
    assert_eq!(metrics["anchor_segments"], 3);
    assert_eq!(metrics["no_candidate_segments"], 1);
}

#[test]
fn html_renders_escaped_table() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_text(dir.path(), "aligned.txt", "a<b\tc&d\t0\n\te\t?\n");
    let out_path = dir.path().join("aligned.html").to_string_lossy().into_owned();

    let output = unl_align_cmd()
        .args(["html", &input, &out_path])
        .output()
        .expect("failed to run unl-align");

    assert!(output.status.success());
    let html = fs::read_to_string(out_path).expect("read html");
    assert!(html.starts_with("<html>\n"));
    assert!(html.contains("<tr><td>a&lt;b</td><td>c&amp;d</td><td>0</td></tr>\n"));
    assert!(html.contains("<tr><td></td><td>e</td><td>?</td></tr>\n"));
    assert!(html.ends_with("</html>\n"));
}

#[test]
fn invalid_utf8_bytes_are_dropped_from_inputs() {
    let dir = tempfile::tempdir().expect("tempdir");
    let x_path = dir.path().join("x.txt");
    let y_path = dir.path().join("y.txt");
    fs::write(&x_path, b"caf\xe9 ok \xff\n").expect("write x");
    fs::write(&y_path, b"caf ok\n").expect("write y");
    let out_path = dir.path().join("out.txt").to_string_lossy().into_owned();

    let output = unl_align_cmd()
        .arg("align")
        .arg(&x_path)
        .arg(&y_path)
        .args([out_path.as_str(), "0", "1", "10"])
        .output()
        .expect("failed to run unl-align");

    assert!(output.status.success());
    let written = fs::read_to_string(out_path).expect("read output");
    assert_eq!(written, "caf\tcaf\t0\nok\tok\t0\n\\n\t\\n\t0\n");
}
