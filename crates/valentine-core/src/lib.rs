//! Core library for the Valentine questionnaire.
//!
//! This crate holds everything except the terminal: the answer model, its
//! persistence, the step-by-step flow, text and JSON projections, and the
//! email relay integration.
//!
//! # Architecture
//!
//! Two components share the work:
//!
//! - **Data Store** ([`store`]): [`AnswerStore`] owns the single
//!   [`AnswerRecord`](models::AnswerRecord), persists it through a
//!   [`KeyValueStore`](storage::KeyValueStore) after every change, and
//!   exports or emails it on request.
//! - **Step Controller** ([`flow`]): [`StepController`] walks the fixed
//!   [`Step`](models::Step) sequence, capturing what the user entered on a
//!   [`StepSurface`] into the store before moving forward.
//!
//! Collaborators sit behind traits so the same logic drives the terminal
//! wizard, scripted tests, or any other front end:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   StepSurface   │◀──▶│ StepController  │───▶│   AnswerStore   │
//! │ (terminal, test)│    │ (current step)  │    │ (record, I/O)   │
//! └─────────────────┘    └─────────────────┘    └───┬─────────┬───┘
//!                                                   │         │
//!                                                   ▼         ▼
//!                                         KeyValueStore   EmailSender
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use valentine_core::{models::ValentineResponse, storage::MemoryStore, StoreBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut store = StoreBuilder::new()
//!     .with_storage(MemoryStore::new())
//!     .build()?;
//!
//! store.set_valentine_response(ValentineResponse::Yes)?;
//! store.set_activities(["Stargazing", "Picnic"])?;
//!
//! println!("{}", store.format_as_text());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod config;
pub mod db;
pub mod display;
pub mod email;
pub mod error;
pub mod flow;
pub mod models;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use config::{EmailSettings, Settings};
pub use db::Database;
pub use display::{ClearResult, ExportResult, OperationStatus, ResultsSummary, StatusKind};
pub use email::{EmailConfig, EmailJsSender, EmailSender};
pub use error::{QuestionnaireError, Result};
pub use flow::{Direction, EmailControl, Outcome, StepController, StepSurface, StepView, UiEvent};
pub use models::{AnswerRecord, Category, OptionCatalog, Step, ValentineResponse};
pub use storage::{KeyValueStore, MemoryStore};
pub use store::{AnswerStore, StoreBuilder};
