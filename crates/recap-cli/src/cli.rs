//! Command-line interface definition.

use std::path::PathBuf;

use clap::Parser;

/// recap - export a meeting summary as a CSV artifact
#[derive(Debug, Parser)]
#[command(name = "recap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the fetched meeting summary JSON, or "-" for stdin
    pub input: PathBuf,

    /// Directory to write the artifact into (defaults to the current directory)
    #[arg(long, short)]
    pub out_dir: Option<PathBuf>,

    /// Print the CSV document to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// Product prefix for the artifact name
    #[arg(long, env = "RECAP_PRODUCT", default_value = "Recap")]
    pub product: String,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_invocation() {
        let cli = Cli::parse_from(["recap", "summary.json"]);
        assert_eq!(cli.input, PathBuf::from("summary.json"));
        assert_eq!(cli.product, "Recap");
        assert!(cli.out_dir.is_none());
        assert!(!cli.stdout);
        assert!(!cli.debug);
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::parse_from([
            "recap",
            "-",
            "--out-dir",
            "exports",
            "--product",
            "Standup",
            "--stdout",
            "-v",
        ]);
        assert_eq!(cli.input, PathBuf::from("-"));
        assert_eq!(cli.out_dir, Some(PathBuf::from("exports")));
        assert_eq!(cli.product, "Standup");
        assert!(cli.stdout);
        assert!(cli.debug);
    }
}
