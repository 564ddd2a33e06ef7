//! Command line argument parsing for Opine CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Opine - a subjectivity sentence classifier
#[derive(Parser, Debug, Clone)]
#[command(name = "opine")]
#[command(about = "Classify sentences as subjective or objective")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Opine Contributors")]
#[command(long_about = None)]
pub struct OpineArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl OpineArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Train on two labeled corpus files and report held-out accuracy
    #[command(name = "train-eval")]
    TrainEval(TrainEvalArgs),
}

/// Arguments for training and evaluating a classifier
#[derive(Parser, Debug, Clone)]
pub struct TrainEvalArgs {
    /// Corpus file of subjective sentences (one per line)
    #[arg(value_name = "SUBJ_FILE")]
    pub subj_file: PathBuf,

    /// Corpus file of objective sentences (one per line)
    #[arg(value_name = "OBJ_FILE")]
    pub obj_file: PathBuf,

    /// Number of examples held out for evaluation
    #[arg(short, long, default_value = "1000")]
    pub test_size: usize,

    /// Seed for the shuffle; random when omitted
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// How many of the most informative features to report
    #[arg(long, default_value = "30")]
    pub top_n: usize,

    /// Comma-separated extra stop words
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub stop_words: Vec<String>,

    /// Start from an empty stop word set instead of the default English list
    #[arg(long)]
    pub no_default_stop_words: bool,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_train_eval_args() {
        let args = OpineArgs::try_parse_from([
            "opine",
            "train-eval",
            "subj.txt",
            "obj.txt",
            "--test-size",
            "500",
            "--seed",
            "42",
            "--top-n",
            "10",
            "--stop-words",
            "--,i,'",
        ])
        .unwrap();

        let Command::TrainEval(train_args) = args.command;
        assert_eq!(train_args.subj_file, PathBuf::from("subj.txt"));
        assert_eq!(train_args.obj_file, PathBuf::from("obj.txt"));
        assert_eq!(train_args.test_size, 500);
        assert_eq!(train_args.seed, Some(42));
        assert_eq!(train_args.top_n, 10);
        assert_eq!(train_args.stop_words, vec!["--", "i", "'"]);
        assert!(!train_args.no_default_stop_words);
    }

    #[test]
    fn test_train_eval_defaults() {
        let args = OpineArgs::try_parse_from(["opine", "train-eval", "s.txt", "o.txt"]).unwrap();

        let Command::TrainEval(train_args) = args.command;
        assert_eq!(train_args.test_size, 1000);
        assert_eq!(train_args.seed, None);
        assert_eq!(train_args.top_n, 30);
        assert!(train_args.stop_words.is_empty());
    }

    #[test]
    fn test_verbosity_levels() {
        // Default verbosity
        let args = OpineArgs::try_parse_from(["opine", "train-eval", "s", "o"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        // Multiple verbose flags
        let args = OpineArgs::try_parse_from(["opine", "-vv", "train-eval", "s", "o"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        // Quiet flag
        let args = OpineArgs::try_parse_from(["opine", "--quiet", "train-eval", "s", "o"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            OpineArgs::try_parse_from(["opine", "--format", "json", "train-eval", "s", "o"])
                .unwrap();
        assert!(matches!(args.output_format, OutputFormat::Json));
    }
}
