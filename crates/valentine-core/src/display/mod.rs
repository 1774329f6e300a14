//! Display formatting for answers, summaries, and operation feedback.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! wrapper types give the same data a different shape for a given context,
//! such as the compact summary on the results step or the confirmation shown
//! after an export.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrapper Types   │    │   Formatted     │
//! │ (AnswerRecord)  │───▶│ (ResultsSummary,│───▶│    Output       │
//! │                 │    │  ExportResult)  │    │ (Terminal/Email)│
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`results`]: Results-step summary and operation result wrappers
//! - [`status`]: Status messages (OperationStatus)
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use valentine_core::{display::ResultsSummary, models::AnswerRecord};
//!
//! let mut record = AnswerRecord::new();
//! record.food.insert("Pizza".to_string());
//! record.food.insert("Sushi".to_string());
//!
//! let summary = ResultsSummary(&record).to_string();
//! assert!(summary.contains("Food: Pizza, Sushi"));
//! assert!(summary.contains("Dessert: None selected"));
//! ```

pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use datetime::LocalDateTime;
pub use models::{join_selection, DATE_PLACEHOLDER, SELECTION_PLACEHOLDER, SELECTION_SEPARATOR};
pub use results::{ClearResult, ExportResult, ResultsSummary};
pub use status::{OperationStatus, StatusKind};
