//! Command implementations for the `wavebake` binary.

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use wavebake_tables::{generate, GenerateResult, TableConfig};

use crate::manifest::Manifest;

/// Runs the pipeline and writes the generated source file.
///
/// The write is whole-file replace: generation failures leave any previous
/// artifact untouched.
pub fn run_generate(output: &Path, json: bool) -> Result<ExitCode> {
    let result = generate(&TableConfig::default()).context("table generation failed")?;
    let source = result.set.emit_to_string();

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).context("failed to create output directory")?;
        }
    }
    fs::write(output, source)
        .with_context(|| format!("failed to write {}", output.display()))?;

    if json {
        print_json(&result)?;
    } else {
        println!("{}", "Generating wavetables...".cyan().bold());
        print_summary(&result);
        println!(
            "  {} Wrote {}",
            "SUCCESS".green().bold(),
            output.display()
        );
    }
    Ok(ExitCode::SUCCESS)
}

/// Runs the pipeline and reports the manifest without writing anything.
pub fn run_manifest(json: bool) -> Result<ExitCode> {
    let result = generate(&TableConfig::default()).context("table generation failed")?;

    if json {
        print_json(&result)?;
    } else {
        println!("{}", "Wavetable manifest".cyan().bold());
        print_summary(&result);
    }
    Ok(ExitCode::SUCCESS)
}

fn print_json(result: &GenerateResult) -> Result<()> {
    let manifest = Manifest::from_result(result);
    println!("{}", serde_json::to_string_pretty(&manifest)?);
    Ok(())
}

fn print_summary(result: &GenerateResult) {
    for table in &result.set.tables {
        println!(
            "  {}: {} samples",
            table.name.dimmed(),
            table.samples.len()
        );
    }
    println!(
        "  {}: {}",
        "Octave bands".dimmed(),
        result.num_octaves
    );
    println!(
        "  {}: {}",
        "Content hash".dimmed(),
        result.set.content_hash()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_generate_writes_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("generated").join("data.rs");
        run_generate(&path, true).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written.lines().next().unwrap(),
            "// Generated by wavebake. Do not edit by hand."
        );
        assert!(written.contains("pub static SAW_TABLE"));
        assert!(written.contains("pub static FREQ_FROM_PITCH: [f64; 128]"));
    }

    #[test]
    fn test_manifest_does_not_require_output_path() {
        assert!(run_manifest(true).is_ok());
    }
}
