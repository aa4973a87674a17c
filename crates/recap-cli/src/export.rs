//! The export command: read a summary, run the transform, hand off the file.

use std::io::Read;
use std::path::Path;

use recap_core::artifact::CsvArtifact;
use recap_core::export::{ExportOptions, SummaryExporter};
use recap_core::summary::MeetingSummary;

use crate::cli::Cli;
use crate::error::CliResult;

/// Runs the export command.
///
/// A `null` document or an unrecognized meeting type is a benign no-op:
/// nothing is written and the command still succeeds.
pub fn run(cli: &Cli) -> CliResult<()> {
    let raw = read_input(&cli.input)?;
    let Some(summary) = parse_summary(&raw)? else {
        tracing::warn!("no meeting data in input; nothing to export");
        return Ok(());
    };

    let exporter = SummaryExporter::new(ExportOptions {
        product: cli.product.clone(),
        ..ExportOptions::default()
    });
    let Some(export) = exporter.export(&summary) else {
        // The exporter already logged why.
        return Ok(());
    };

    if cli.stdout {
        print!("{}", export.to_csv());
        return Ok(());
    }

    let artifact = CsvArtifact::from_export(&export);
    let out_dir = match cli.out_dir {
        Some(ref dir) => dir.clone(),
        None => std::env::current_dir()?,
    };
    let path = artifact.save_to(&out_dir)?;
    println!("wrote {}", path.display());
    Ok(())
}

/// Reads the input document from a file, or stdin when the path is `-`.
fn read_input(path: &Path) -> CliResult<String> {
    if path == Path::new("-") {
        let mut raw = String::new();
        std::io::stdin().read_to_string(&mut raw)?;
        return Ok(raw);
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Parses the summary document; `null` parses to `None`.
fn parse_summary(raw: &str) -> CliResult<Option<MeetingSummary>> {
    Ok(serde_json::from_str(raw)?)
}
