// ============================================================
// Layer 3 - Domain Layer
// ============================================================
// Pure Rust structs, enums and traits describing annotations
// and agreement results.
//
// Rules for this layer:
//   - NO file I/O
//   - NO JSON parsing (serde derives only)
//   - NO statistics code
//
// Reference: Rust Book §5 (Structs), §6 (Enums), §10 (Traits)

// Label values, sentences and item identifiers
pub mod annotation;

// Dense item x label count matrix for Fleiss' kappa
pub mod rating_matrix;

// Qualitative bands for a kappa score
pub mod interpretation;

// Typed agreement failures
pub mod error;

// Core abstractions (traits) that the data layer implements
pub mod traits;
