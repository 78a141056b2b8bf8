// ============================================================
// Layer 6 - Infrastructure Layer
// ============================================================
// Cross-cutting output concerns that no pipeline owns:
//
//   report.rs - Agreement report persistence
//               Writes the outcome of a run (measure, kappa,
//               interpretation, input files, matrix shape) as
//               pretty JSON when `--report` is given.
//
// Reference: Rust Book §9 (Error Handling with anyhow)
//            serde_json documentation

/// JSON agreement report writer
pub mod report;
