use docsight::domain::{AnalysisProfile, AnalysisResult, FinancialStatus, SentimentScore};

#[test]
fn given_statistical_profile_when_building_empty_result_then_every_key_is_present() {
    let result = AnalysisResult::empty(AnalysisProfile::Statistical);

    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["summary"], "");
    assert_eq!(json["persons"], serde_json::json!([]));
    assert_eq!(json["organizations"], serde_json::json!([]));
    assert_eq!(json["contact_info"]["emails"], serde_json::json!([]));
    assert_eq!(json["contact_info"]["phones"], serde_json::json!([]));
    assert_eq!(json["sentiment"]["polarity"], 0.0);
    assert_eq!(json["sentiment"]["subjectivity"], 0.0);
    assert_eq!(json["financial_status"], "unknown");
    assert_eq!(json["statistical_insights"], serde_json::json!([]));
}

#[test]
fn given_entities_profile_when_building_empty_result_then_later_keys_are_omitted() {
    let result = AnalysisResult::empty(AnalysisProfile::Entities);

    let json = serde_json::to_value(&result).unwrap();
    let object = json.as_object().unwrap();

    assert!(object.contains_key("summary"));
    assert!(object.contains_key("persons"));
    assert!(object.contains_key("sentiment"));
    assert!(!object.contains_key("organizations"));
    assert!(!object.contains_key("contact_info"));
    assert!(!object.contains_key("financial_status"));
    assert!(!object.contains_key("statistical_insights"));
}

#[test]
fn given_financial_profile_when_building_empty_result_then_insights_are_omitted() {
    let result = AnalysisResult::empty(AnalysisProfile::Financial);

    assert_eq!(result.financial_status, Some(FinancialStatus::Unknown));
    assert!(result.contact_info.is_some());
    assert!(result.statistical_insights.is_none());
}

#[test]
fn given_out_of_range_scores_when_creating_sentiment_then_values_are_clamped() {
    let score = SentimentScore::new(1.7, -0.2);

    assert_eq!(score.polarity, 1.0);
    assert_eq!(score.subjectivity, 0.0);
}

#[test]
fn given_financial_status_when_serialized_then_uses_lowercase_name() {
    let json = serde_json::to_string(&FinancialStatus::Both).unwrap();

    assert_eq!(json, "\"both\"");
    assert_eq!(FinancialStatus::Loss.to_string(), "loss");
}
