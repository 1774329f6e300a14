use std::collections::BTreeSet;

use jiff::{civil::date, Timestamp};

use super::*;

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn create_test_record() -> AnswerRecord {
    AnswerRecord {
        timestamp: Timestamp::from_second(1_739_491_200).unwrap(), // 2025-02-14 00:00:00 UTC
        valentine_response: ValentineResponse::Yes,
        date: Some(date(2025, 2, 14)),
        food: set(&["Sushi", "Pizza"]),
        dessert: set(&["Tiramisu"]),
        activities: BTreeSet::new(),
    }
}

#[test]
fn test_new_record_is_blank() {
    let record = AnswerRecord::new();
    assert_eq!(record.valentine_response, ValentineResponse::Unanswered);
    assert_eq!(record.date, None);
    assert!(record.food.is_empty());
    assert!(record.dessert.is_empty());
    assert!(record.activities.is_empty());
    assert!(record.is_blank());
}

#[test]
fn test_record_json_field_names() {
    let json = serde_json::to_value(create_test_record()).unwrap();

    assert_eq!(json["valentineResponse"], "Yes");
    assert_eq!(json["date"], "2025-02-14");
    assert_eq!(json["food"], serde_json::json!(["Pizza", "Sushi"]));
    assert_eq!(json["activities"], serde_json::json!([]));
    assert_eq!(json["timestamp"], "2025-02-14T00:00:00Z");
}

#[test]
fn test_unanswered_serializes_as_null() {
    let json = serde_json::to_value(AnswerRecord::new()).unwrap();
    assert!(json["valentineResponse"].is_null());
    assert!(json["date"].is_null());
}

#[test]
fn test_record_reads_browser_payload() {
    let payload = r#"{
        "timestamp": "2025-02-10T18:30:00.000Z",
        "valentineResponse": null,
        "date": null,
        "food": ["Pizza", "Pizza", "Tacos"],
        "dessert": [],
        "activities": ["Picnic"]
    }"#;

    let record: AnswerRecord = serde_json::from_str(payload).unwrap();
    assert_eq!(record.valentine_response, ValentineResponse::Unanswered);
    assert_eq!(record.food, set(&["Pizza", "Tacos"]));
    assert_eq!(record.activities, set(&["Picnic"]));
}

#[test]
fn test_record_missing_fields_default() {
    let record: AnswerRecord =
        serde_json::from_str(r#"{"timestamp":"2025-02-10T18:30:00Z"}"#).unwrap();
    assert!(record.is_blank());
}

#[test]
fn test_invalid_response_is_rejected() {
    let result = serde_json::from_str::<AnswerRecord>(
        r#"{"timestamp":"2025-02-10T18:30:00Z","valentineResponse":"Maybe"}"#,
    );
    assert!(result.is_err());
}

#[test]
fn test_same_answers_ignores_timestamp() {
    let record = create_test_record();
    let mut later = record.clone();
    later.touch();

    assert!(record.same_answers(&later));

    later.dessert.clear();
    assert!(!record.same_answers(&later));
}

#[test]
fn test_selection_accessors() {
    let mut record = create_test_record();
    assert_eq!(record.selection(Category::Food), &set(&["Pizza", "Sushi"]));

    record
        .selection_mut(Category::Activities)
        .insert("Dancing".to_string());
    assert_eq!(record.activities, set(&["Dancing"]));
}

#[test]
fn test_response_parsing() {
    assert_eq!("YES".parse::<ValentineResponse>(), Ok(ValentineResponse::Yes));
    assert_eq!("n".parse::<ValentineResponse>(), Ok(ValentineResponse::No));
    assert_eq!(
        "".parse::<ValentineResponse>(),
        Ok(ValentineResponse::Unanswered)
    );
    assert!("perhaps".parse::<ValentineResponse>().is_err());
    assert_eq!(ValentineResponse::Unanswered.label(), "Not answered");
}

#[test]
fn test_step_sequence_bounds() {
    assert_eq!(Step::TOTAL, 7);
    assert_eq!(Step::Intro.previous(), None);
    assert_eq!(Step::Results.next(), None);
    assert!(Step::Results.is_terminal());

    for (index, step) in Step::ALL.iter().enumerate() {
        assert_eq!(step.index(), index);
        assert_eq!(Step::from_index(index), Some(*step));
    }
    assert_eq!(Step::from_index(7), None);
}

#[test]
fn test_step_categories() {
    assert_eq!(Step::Food.category(), Some(Category::Food));
    assert_eq!(Step::Dessert.category(), Some(Category::Dessert));
    assert_eq!(Step::Activities.category(), Some(Category::Activities));
    assert_eq!(Step::Date.category(), None);
}

#[test]
fn test_progress_percentages() {
    let progress: Vec<u8> = Step::ALL.iter().map(Step::progress_percent).collect();
    assert_eq!(progress, vec![0, 15, 32, 49, 66, 83, 100]);
}

#[test]
fn test_navigation_visibility() {
    assert_eq!(
        Step::Intro.navigation(),
        NavigationState {
            show_previous: false,
            show_next: false
        }
    );
    assert!(Step::Date.navigation().show_next);
    assert!(Step::Results.navigation().show_previous);
    assert!(!Step::Results.navigation().show_next);
}

#[test]
fn test_catalog_positions() {
    let catalog = OptionCatalog::default();
    assert_eq!(catalog.option_at(Category::Food, 1), Some("Pizza"));
    assert_eq!(catalog.option_at(Category::Food, 2), Some("Sushi"));
    assert_eq!(catalog.option_at(Category::Food, 0), None);
    assert_eq!(catalog.option_at(Category::Food, 99), None);
    assert_eq!(catalog.option_at(Category::Activities, 4), Some("Stargazing"));
}
