//! Tests for the store module.

use std::{
    collections::BTreeSet,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use jiff::civil::date;
use tempfile::TempDir;

use super::*;
use crate::{
    email::{EmailConfig, EmailParams, EmailReceipt, EmailSender, RelayError},
    error::{QuestionnaireError, Result},
    models::{Category, ValentineResponse},
    storage::{KeyValueStore, MemoryStore},
};

/// Storage whose writes always fail, as with a full quota.
struct FullStorage;

impl KeyValueStore for FullStorage {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
        Err(QuestionnaireError::storage_write("quota exceeded"))
    }

    fn remove(&mut self, _key: &str) -> Result<()> {
        Ok(())
    }
}

/// Storage that accepts writes but hands back something else.
struct ForgetfulStorage;

impl KeyValueStore for ForgetfulStorage {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Ok(Some("{}".to_string()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
        Ok(())
    }

    fn remove(&mut self, _key: &str) -> Result<()> {
        Ok(())
    }
}

/// Email sender recording what it was asked to send.
#[derive(Clone, Default)]
struct RecordingSender {
    sent: Arc<Mutex<Vec<EmailParams>>>,
    reject_with: Option<String>,
}

#[async_trait]
impl EmailSender for RecordingSender {
    async fn send(
        &self,
        _config: &EmailConfig,
        params: &EmailParams,
    ) -> std::result::Result<EmailReceipt, RelayError> {
        if let Some(reason) = &self.reject_with {
            return Err(RelayError::new(Some(400), reason.clone()));
        }
        self.sent.lock().unwrap().push(params.clone());
        Ok(EmailReceipt {
            status: 200,
            text: "OK".to_string(),
        })
    }
}

fn memory_store() -> AnswerStore {
    StoreBuilder::new()
        .with_storage(MemoryStore::new())
        .build()
        .expect("Failed to create store")
}

/// Helper function to create a store backed by a temporary SQLite file
fn create_test_store() -> (TempDir, AnswerStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let store = StoreBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .expect("Failed to create store");
    (temp_dir, store)
}

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn email_config() -> EmailConfig {
    EmailConfig {
        service_id: "service_abc".to_string(),
        template_id: "template_xyz".to_string(),
        public_key: "pk_123".to_string(),
        to_email: "me@example.com".to_string(),
    }
}

#[test]
fn test_fresh_store_has_blank_record() {
    let (_temp_dir, store) = create_test_store();
    let record = store.load();

    assert_eq!(record.valentine_response, ValentineResponse::Unanswered);
    assert!(record.food.is_empty());
    assert!(record.dessert.is_empty());
    assert!(record.activities.is_empty());
    assert_eq!(record.date, None);
}

#[test]
fn test_save_then_load_roundtrip() {
    let (_temp_dir, mut store) = create_test_store();

    store.set_valentine_response(ValentineResponse::Yes).unwrap();
    store.set_date(Some(date(2026, 2, 14))).unwrap();
    store.set_food(["Pizza", "Sushi"]).unwrap();
    store.set_dessert(["Tiramisu"]).unwrap();
    store.set_activities(Vec::<String>::new()).unwrap();
    store.save().unwrap();

    assert_eq!(&store.load(), store.record());
}

#[test]
fn test_record_survives_reopen() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("reopen.db");

    {
        let mut store = StoreBuilder::new()
            .with_database_path(Some(&db_path))
            .build()
            .unwrap();
        store.set_food(["Tacos"]).unwrap();
    }

    let store = StoreBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .unwrap();
    assert_eq!(store.record().food, set(&["Tacos"]));
}

#[test]
fn test_every_setter_refreshes_timestamp() {
    let mut store = memory_store();
    let before = store.record().timestamp;

    std::thread::sleep(std::time::Duration::from_millis(2));
    store.set_dessert(["Ice Cream"]).unwrap();

    assert!(store.record().timestamp > before);
}

#[test]
fn test_setters_collapse_duplicates() {
    let mut store = memory_store();
    store.set_food(["Pizza", "Pizza", "Sushi"]).unwrap();
    assert_eq!(store.record().food, set(&["Pizza", "Sushi"]));
}

#[test]
fn test_get_all_returns_latest_durable_value() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("shared.db");

    let mut first = StoreBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .unwrap();
    let mut second = StoreBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .unwrap();

    second.set_activities(["Stargazing"]).unwrap();

    assert!(first.record().activities.is_empty());
    assert_eq!(first.get_all().activities, set(&["Stargazing"]));
}

#[test]
fn test_get_all_drops_answers_cleared_elsewhere() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("shared.db");

    let mut first = StoreBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .unwrap();
    first.set_valentine_response(ValentineResponse::Yes).unwrap();
    first.set_food(["Pizza"]).unwrap();

    let mut second = StoreBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .unwrap();
    second.clear().unwrap();

    let record = first.get_all();
    assert!(record.is_blank());
    assert_eq!(record.valentine_response, ValentineResponse::Unanswered);
}

#[test]
fn test_malformed_storage_degrades_to_default() {
    let storage = MemoryStore::new().with_entry(DEFAULT_STORAGE_KEY, "{not json");
    let store = StoreBuilder::new().with_storage(storage).build().unwrap();

    assert!(store.record().is_blank());
    assert!(store.load().is_blank());
}

#[test]
fn test_custom_storage_key() {
    let storage = MemoryStore::new().with_entry(
        "other_key",
        r#"{"timestamp":"2025-02-10T18:30:00Z","valentineResponse":"Yes"}"#,
    );
    let store = StoreBuilder::new()
        .with_storage(storage)
        .with_storage_key("other_key")
        .build()
        .unwrap();

    assert_eq!(store.storage_key(), "other_key");
    assert_eq!(store.record().valentine_response, ValentineResponse::Yes);
}

#[test]
fn test_write_failure_is_reported_and_reload_follows_storage() {
    let mut store = StoreBuilder::new().with_storage(FullStorage).build().unwrap();

    let err = store.set_food(["Pizza"]).unwrap_err();
    assert!(matches!(err, QuestionnaireError::StorageWrite { .. }));
    assert_eq!(store.record().food, set(&["Pizza"]));

    // The durable value wins on reload, and nothing was persisted
    assert!(store.get_all().is_blank());
}

#[test]
fn test_unopenable_database_falls_back_to_memory() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let blocker = temp_dir.path().join("not-a-dir");
    std::fs::write(&blocker, "").unwrap();

    let (mut store, error) = StoreBuilder::new()
        .with_database_path(Some(blocker.join("answers.db")))
        .build_or_memory();

    assert!(matches!(error, Some(QuestionnaireError::FileSystem { .. })));
    store.set_valentine_response(ValentineResponse::Yes).unwrap();
    assert_eq!(store.get_all().valentine_response, ValentineResponse::Yes);
}

#[test]
fn test_build_or_memory_keeps_working_database() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("answers.db");

    let (mut store, error) = StoreBuilder::new()
        .with_database_path(Some(&db_path))
        .build_or_memory();
    assert!(error.is_none());
    store.set_food(["Tacos"]).unwrap();

    let reopened = StoreBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .unwrap();
    assert_eq!(reopened.record().food, set(&["Tacos"]));
}

#[test]
fn test_save_verifies_by_reading_back() {
    let mut store = StoreBuilder::new()
        .with_storage(ForgetfulStorage)
        .build()
        .unwrap();

    let err = store.save().unwrap_err();
    assert!(err.to_string().contains("did not match"));
}

#[test]
fn test_clear_resets_to_default() {
    let (_temp_dir, mut store) = create_test_store();
    store.set_valentine_response(ValentineResponse::No).unwrap();
    store.set_food(["Ramen"]).unwrap();

    store.clear().unwrap();
    assert!(store.record().is_blank());
    assert!(store.load().is_blank());

    // Clearing twice is harmless
    store.clear().unwrap();
    assert!(store.record().is_blank());
}

#[test]
fn test_json_projection_roundtrip() {
    let mut store = memory_store();
    store.set_valentine_response(ValentineResponse::Yes).unwrap();
    store.set_date(Some(date(2026, 2, 14))).unwrap();
    store.set_activities(["Picnic", "Dancing"]).unwrap();

    let json = store.format_as_json().unwrap();
    let parsed: crate::models::AnswerRecord = serde_json::from_str(&json).unwrap();

    assert_eq!(&parsed, store.record());
    assert!(json.contains("\n  \"valentineResponse\": \"Yes\""));
}

#[test]
fn test_text_projection() {
    let mut store = memory_store();
    store.set_food(["Pizza", "Sushi"]).unwrap();

    let text = store.format_as_text();
    assert!(text.contains("Food Preferences: Pizza, Sushi"));
    assert!(text.contains("Response: Not answered"));
}

#[test]
fn test_export_writes_json_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut store = memory_store();
    store.set_selection(Category::Dessert, ["Macarons"]).unwrap();

    let export_dir = temp_dir.path().join("exports");
    let path = store.export_as_file(&export_dir).unwrap();

    let name = path.file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("valentine-questionnaire-"));
    assert!(name.ends_with(".json"));

    let contents = std::fs::read_to_string(&path).unwrap();
    let parsed: crate::models::AnswerRecord = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed.dessert, set(&["Macarons"]));
}

#[test]
fn test_export_file_name_uses_epoch_millis() {
    let now = jiff::Timestamp::from_millisecond(1_739_491_200_123).unwrap();
    assert_eq!(
        AnswerStore::export_file_name(now),
        "valentine-questionnaire-1739491200123.json"
    );
}

#[test]
fn test_email_params_placeholders() {
    let store = memory_store();
    let params = store.email_params(&email_config());

    assert_eq!(params.to_email, "me@example.com");
    assert_eq!(params.subject, "Valentine's Questionnaire Results");
    assert_eq!(params.response, "Not answered");
    assert_eq!(params.date, "Not selected");
    assert_eq!(params.food, "None selected");
    assert!(params.message.starts_with("Valentine's Questionnaire Results"));
}

#[tokio::test]
async fn test_send_without_sender_is_unavailable() {
    let mut store = memory_store();
    store.set_food(["Pizza"]).unwrap();
    let before = store.record().clone();

    let err = store.send_by_email(&email_config()).await.unwrap_err();

    assert!(matches!(err, QuestionnaireError::EmailServiceUnavailable));
    assert_eq!(store.record(), &before);
}

#[tokio::test]
async fn test_send_delivers_params() {
    let sender = RecordingSender::default();
    let sent = sender.sent.clone();
    let mut store = StoreBuilder::new()
        .with_storage(MemoryStore::new())
        .with_email_sender(sender)
        .build()
        .unwrap();
    store.set_food(["Pizza", "Sushi"]).unwrap();

    let receipt = store.send_by_email(&email_config()).await.unwrap();
    assert_eq!(receipt.status, 200);

    let sent = sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].food, "Pizza, Sushi");
    assert_eq!(sent[0].dessert, "None selected");
}

#[tokio::test]
async fn test_send_rejection_carries_reason() {
    let sender = RecordingSender {
        reject_with: Some("The public key is invalid".to_string()),
        ..Default::default()
    };
    let store = StoreBuilder::new()
        .with_storage(MemoryStore::new())
        .with_email_sender(sender)
        .build()
        .unwrap();

    let err = store.send_by_email(&email_config()).await.unwrap_err();
    match err {
        QuestionnaireError::EmailSendFailed { reason } => {
            assert_eq!(reason, "The public key is invalid");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_send_requires_recipient() {
    let store = StoreBuilder::new()
        .with_storage(MemoryStore::new())
        .with_email_sender(RecordingSender::default())
        .build()
        .unwrap();

    let mut config = email_config();
    config.to_email = "  ".to_string();

    let err = store.send_by_email(&config).await.unwrap_err();
    assert!(matches!(err, QuestionnaireError::InvalidInput { .. }));
}
