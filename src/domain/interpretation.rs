// ============================================================
// Layer 3 - Kappa Interpretation
// ============================================================
// Maps a kappa score onto the six qualitative bands of
// Landis & Koch (1977):
//
//   (-inf, 0.00)   Poor
//   [0.00, 0.20]   Slight
//   (0.20, 0.40]   Fair
//   (0.40, 0.60]   Moderate
//   (0.60, 0.80]   Substantial
//   (0.80,  inf)   Almost perfect
//
// Upper bounds are inclusive. Both pipelines share this.
//
// Reference: Landis & Koch (1977), Biometrics 33(1)

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interpretation {
    Poor,
    Slight,
    Fair,
    Moderate,
    Substantial,
    AlmostPerfect,
}

impl Interpretation {
    /// Classify a kappa score. NaN fails every comparison and lands in
    /// the top band.
    pub fn classify(kappa: f64) -> Self {
        if kappa < 0.0 {
            Interpretation::Poor
        } else if kappa <= 0.20 {
            Interpretation::Slight
        } else if kappa <= 0.40 {
            Interpretation::Fair
        } else if kappa <= 0.60 {
            Interpretation::Moderate
        } else if kappa <= 0.80 {
            Interpretation::Substantial
        } else {
            Interpretation::AlmostPerfect
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Interpretation::Poor => "Poor agreement",
            Interpretation::Slight => "Slight agreement",
            Interpretation::Fair => "Fair agreement",
            Interpretation::Moderate => "Moderate agreement",
            Interpretation::Substantial => "Substantial agreement",
            Interpretation::AlmostPerfect => "Almost perfect agreement",
        }
    }
}

impl fmt::Display for Interpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
