pub mod json_lines;
pub mod tsv;
