//! Data models for the questionnaire.
//!
//! The central type is [`AnswerRecord`], the single mutable record holding
//! everything the user has chosen so far. The remaining types describe the
//! questions themselves: the yes/no [`ValentineResponse`], the three
//! multi-select [`Category`] lists with their [`OptionCatalog`], and the fixed
//! [`Step`] sequence the wizard walks through.
//!
//! Display implementations for these models live in
//! [`crate::display::models`], keeping data and presentation apart.
//!
//! # Examples
//!
//! ```rust
//! use valentine_core::models::{AnswerRecord, Category, ValentineResponse};
//!
//! let mut record = AnswerRecord::new();
//! assert_eq!(record.valentine_response, ValentineResponse::Unanswered);
//!
//! record.valentine_response = ValentineResponse::Yes;
//! record.selection_mut(Category::Food).insert("Pizza".to_string());
//!
//! let json = serde_json::to_string(&record).unwrap();
//! assert!(json.contains("\"valentineResponse\":\"Yes\""));
//! assert!(json.contains("\"food\":[\"Pizza\"]"));
//! ```

pub mod answer;
pub mod category;
pub mod response;
pub mod step;

#[cfg(test)]
mod tests;

pub use answer::AnswerRecord;
pub use category::{Category, OptionCatalog};
pub use response::ValentineResponse;
pub use step::{NavigationState, Step};
