//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::classifier::model::RankedFeature;
use crate::cli::args::{OpineArgs, OutputFormat};
use crate::error::Result;

/// Result structure for the train-eval command.
#[derive(Debug, Serialize, Deserialize)]
pub struct TrainEvalResult {
    pub subj_sentences: usize,
    pub obj_sentences: usize,
    pub training_examples: usize,
    pub testing_examples: usize,
    pub seed: u64,
    pub correct: usize,
    pub accuracy_percent: f64,
    pub duration_ms: u64,
    pub top_features: Vec<RankedFeature>,
}

/// Output a result in the specified format.
pub fn output_result(message: &str, result: &TrainEvalResult, args: &OpineArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human(message: &str, result: &TrainEvalResult, args: &OpineArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    if args.verbosity() > 1 {
        println!(
            "Corpus: {} subjective / {} objective sentences",
            result.subj_sentences, result.obj_sentences
        );
        println!(
            "Split: {} training / {} testing (seed {})",
            result.training_examples, result.testing_examples, result.seed
        );
        println!("Duration: {} ms", result.duration_ms);
        println!();
    }

    println!("Accuracy: {:.2}%", result.accuracy_percent);

    if !result.top_features.is_empty() {
        println!();
        println!("Most informative features:");
        for ranked in &result.top_features {
            println!(
                "{}: {} = {:.2}:1",
                ranked.feature.name, ranked.dominant, ranked.ratio
            );
        }
    }

    Ok(())
}

/// Output in JSON format.
fn output_json(result: &TrainEvalResult, args: &OpineArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}
