//! Command implementations for Opine CLI.

use std::time::Instant;

use log::{debug, info};

use crate::analysis::stop_words::StopWordSet;
use crate::classifier::extractor::{ExtractorConfig, FeatureExtractor};
use crate::classifier::feature::Label;
use crate::classifier::model::SubjectivityClassifier;
use crate::cli::args::{Command, OpineArgs, TrainEvalArgs};
use crate::cli::output::{TrainEvalResult, output_result};
use crate::corpus::load_labeled;
use crate::error::{OpineError, Result};
use crate::evaluate::{evaluate, shuffle_split};

/// Execute a CLI command.
pub fn execute_command(args: OpineArgs) -> Result<()> {
    match &args.command {
        Command::TrainEval(train_args) => train_eval(train_args.clone(), &args),
    }
}

/// Build the stop word set requested on the command line.
fn build_stop_words(args: &TrainEvalArgs) -> StopWordSet {
    let mut stop_words = if args.no_default_stop_words {
        StopWordSet::empty()
    } else {
        StopWordSet::new()
    };
    for word in &args.stop_words {
        stop_words = stop_words.with_word(word.clone());
    }
    stop_words
}

/// Train a classifier on the two corpus files and evaluate it.
fn train_eval(args: TrainEvalArgs, cli_args: &OpineArgs) -> Result<()> {
    let start = Instant::now();

    let stop_words = build_stop_words(&args);
    debug!("using {} stop words", stop_words.len());
    let extractor = FeatureExtractor::new(ExtractorConfig::new().with_stop_words(stop_words));

    if cli_args.verbosity() > 1 {
        println!(
            "Loading corpora: {} / {}",
            args.subj_file.display(),
            args.obj_file.display()
        );
    }

    let subj_sets = load_labeled(&args.subj_file, Label::Subj, &extractor)?;
    let obj_sets = load_labeled(&args.obj_file, Label::Obj, &extractor)?;
    let subj_sentences = subj_sets.len();
    let obj_sentences = obj_sets.len();

    let mut all_sets = obj_sets;
    all_sets.extend(subj_sets);
    if all_sets.is_empty() {
        return Err(OpineError::corpus("both corpus files are empty"));
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    let (training_set, testing_set) = shuffle_split(all_sets, args.test_size, seed);
    if training_set.is_empty() {
        return Err(OpineError::invalid_operation(
            "test size leaves no training examples; lower --test-size",
        ));
    }

    info!(
        "training on {} examples, evaluating on {}",
        training_set.len(),
        testing_set.len()
    );

    let classifier = SubjectivityClassifier::train(&training_set)?;
    let evaluation = evaluate(&classifier, &testing_set)?;
    let top_features = classifier.rank_features(args.top_n);

    let result = TrainEvalResult {
        subj_sentences,
        obj_sentences,
        training_examples: training_set.len(),
        testing_examples: testing_set.len(),
        seed,
        correct: evaluation.correct,
        accuracy_percent: evaluation.accuracy() * 100.0,
        duration_ms: start.elapsed().as_millis() as u64,
        top_features,
    };

    output_result("Training and evaluation complete", &result, cli_args)
}
