// ============================================================
// Layer 1 - CLI / Presentation Layer
// ============================================================
// Parses arguments with clap, hands a config to the matching
// use case, and prints the result. Two commands:
//
//   1. `cohen`  - agreement between two annotators
//   2. `fleiss` - agreement among three or more annotators
//
// Results go to stdout; logs go to stderr.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{CohenArgs, Commands, FleissArgs};

use crate::domain::error::AgreementError;

#[derive(Parser, Debug)]
#[command(
    name = "annotator-agreement",
    version,
    about = "Inter-annotator agreement (Cohen's and Fleiss' kappa) over JSON annotation files."
)]
pub struct Cli {
    /// The agreement measure to compute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Dispatch to the selected command.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Cohen(args) => run_cohen(args),
            Commands::Fleiss(args) => run_fleiss(args),
        }
    }
}

/// Length mismatches and empty inputs are reported and end the
/// run with status 1; every other error propagates to `main`.
fn run_cohen(args: CohenArgs) -> Result<()> {
    use crate::application::pairwise_use_case::PairwiseUseCase;

    let use_case = PairwiseUseCase::new(args.into());
    match use_case.execute() {
        Ok(outcome) => {
            println!(
                "Cohen's kappa: {}, Interpretation: {}",
                outcome.kappa, outcome.interpretation
            );
            Ok(())
        }
        Err(e) => match e.downcast_ref::<AgreementError>() {
            Some(validation) if validation.is_validation() => {
                eprintln!("Error: {validation}");
                std::process::exit(1);
            }
            _ => Err(e),
        },
    }
}

fn run_fleiss(args: FleissArgs) -> Result<()> {
    use crate::application::multi_rater_use_case::MultiRaterUseCase;

    let outcome = MultiRaterUseCase::new(args.into()).execute()?;
    println!(
        "Fleiss' kappa: {}, Interpretation: {}",
        outcome.kappa, outcome.interpretation
    );
    Ok(())
}
