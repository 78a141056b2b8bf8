// ============================================================
// Layer 1 - CLI Commands and Arguments
// ============================================================
// Defines the two subcommands, `cohen` and `fleiss`, and their
// flags. Defaults reproduce the classic file layout:
//
//   cohen  : pos_1.json vs pos_2.json, spans under "pos_tags"
//   fleiss : images_1.json .. images_3.json, labels Trucks / No Trucks
//
// Reference: Rust Book §12 (Building a CLI Program)
//            clap derive documentation

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::{
    multi_rater_use_case::MultiRaterConfig, pairwise_use_case::PairwiseConfig,
};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Cohen's kappa between two token-annotation files
    Cohen(CohenArgs),

    /// Fleiss' kappa across three or more item-classification files
    Fleiss(FleissArgs),
}

/// All arguments for the `cohen` command.
#[derive(Args, Debug)]
pub struct CohenArgs {
    /// First annotator's file
    #[arg(long, default_value = "pos_1.json")]
    pub file_a: PathBuf,

    /// Second annotator's file
    #[arg(long, default_value = "pos_2.json")]
    pub file_b: PathBuf,

    /// Entry field holding the list of {text, labels} spans
    #[arg(long, default_value = "pos_tags")]
    pub field: String,

    /// Also write the result as JSON to this path
    #[arg(long)]
    pub report: Option<PathBuf>,
}

impl From<CohenArgs> for PairwiseConfig {
    fn from(a: CohenArgs) -> Self {
        PairwiseConfig {
            file_a: a.file_a,
            file_b: a.file_b,
            field:  a.field,
            report: a.report,
        }
    }
}

/// All arguments for the `fleiss` command.
#[derive(Args, Debug)]
pub struct FleissArgs {
    /// One file per annotator (comma separated or repeated)
    #[arg(
        long,
        value_delimiter = ',',
        num_args = 1..,
        default_values = ["images_1.json", "images_2.json", "images_3.json"]
    )]
    pub files: Vec<PathBuf>,

    /// Label vocabulary in column order (space separated or repeated);
    /// other labels are ignored. Labels may contain commas.
    #[arg(
        long,
        num_args = 1..,
        default_values = ["Trucks", "No Trucks"]
    )]
    pub labels: Vec<String>,

    /// Entry field holding the item identifier
    #[arg(long, default_value = "id")]
    pub id_field: String,

    /// Entry field holding the label
    #[arg(long, default_value = "label")]
    pub label_field: String,

    /// Also write the result as JSON to this path
    #[arg(long)]
    pub report: Option<PathBuf>,
}

impl From<FleissArgs> for MultiRaterConfig {
    fn from(a: FleissArgs) -> Self {
        MultiRaterConfig {
            files:       a.files,
            labels:      a.labels,
            id_field:    a.id_field,
            label_field: a.label_field,
            report:      a.report,
        }
    }
}
