//! Submission Executor
//!
//! Turns raw user input into reports. Every submission is evaluated from
//! scratch; nothing carries over between submissions.
//!
//! ## Pipeline Overview
//!
//! ```text
//! RawInput (array, percent, digits strings)
//!       │
//!       ▼
//! ┌─────────────┐
//! │    parse    │  Lenient parsing, NaN marks bad tokens
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │  validate   │  Field-scoped messages, ValidInput gate
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │   compute   │  Sort, trim both tails, mean, round
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │ formatting  │  Human-readable output
//! └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`submit`] - Single submission pipeline
//! - [`batch`] - Batch file parsing and parallel evaluation
//! - [`formatting`] - Human-readable output formatting

mod batch;
mod formatting;
mod submit;

// Re-export public API
pub use batch::{BatchError, parse_batch, run_batch};
pub use formatting::{format_human_batch, format_human_output};
pub use submit::submit;
