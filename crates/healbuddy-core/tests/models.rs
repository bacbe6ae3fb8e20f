use std::str::FromStr;

use healbuddy_core::error::CoreError;
use healbuddy_core::models::answer::{AnswerRecord, ScreeningState};
use healbuddy_core::models::outcome::ScreeningStep;
use healbuddy_core::models::screening::ScreeningKind;
use uuid::Uuid;

#[test]
fn canonical_kind_tokens_parse() {
    assert_eq!(
        ScreeningKind::from_str("PHQ-9").unwrap(),
        ScreeningKind::Phq9
    );
    assert_eq!(
        ScreeningKind::from_str("GAD-7").unwrap(),
        ScreeningKind::Gad7
    );
    assert_eq!(ScreeningKind::from_str("GHQ").unwrap(), ScreeningKind::Ghq);

    for kind in ScreeningKind::ALL {
        assert_eq!(ScreeningKind::from_str(kind.as_str()).unwrap(), kind);
    }
}

#[test]
fn near_miss_tokens_are_rejected() {
    for bad in ["PHQ9", "phq-9", "GAD7", "ghq", "PHQ-9 ", ""] {
        match ScreeningKind::from_str(bad) {
            Err(CoreError::UnknownScreeningKind(token)) => assert_eq!(token, bad),
            other => panic!("expected UnknownScreeningKind for {bad:?}, got {other:?}"),
        }
    }
}

#[test]
fn kind_serializes_as_canonical_token() {
    let json = serde_json::to_string(&ScreeningKind::Phq9).unwrap();
    assert_eq!(json, "\"PHQ-9\"");

    let parsed: ScreeningKind = serde_json::from_str("\"GAD-7\"").unwrap();
    assert_eq!(parsed, ScreeningKind::Gad7);
}

#[test]
fn step_serializes_with_status_tag() {
    let step = ScreeningStep::InProgress {
        question: "Trouble relaxing?".to_string(),
        next_index: 4,
    };
    let value = serde_json::to_value(&step).unwrap();
    assert_eq!(value["status"], "in_progress");
    assert_eq!(value["question"], "Trouble relaxing?");
    assert_eq!(value["next_index"], 4);

    let step = ScreeningStep::Complete {
        kind: ScreeningKind::Gad7,
        score: 3,
        severity: "Minimal anxiety".to_string(),
        summary: "Thank you.".to_string(),
        feedback: None,
    };
    let value = serde_json::to_value(&step).unwrap();
    assert_eq!(value["status"], "complete");
    assert_eq!(value["score"], 3);
    assert_eq!(value["severity"], "Minimal anxiety");
    assert!(value.get("feedback").is_none());

    let step = ScreeningStep::SafetyHalted {
        message: "reach out".to_string(),
    };
    let value = serde_json::to_value(&step).unwrap();
    assert_eq!(value["status"], "safety_halted");
}

#[test]
fn screening_state_consistency_tracks_history_length() {
    let mut state = ScreeningState {
        screening_id: Uuid::new_v4(),
        kind: ScreeningKind::Phq9,
        next_question_index: 1,
        history: vec![AnswerRecord {
            question: "Little interest or pleasure in doing things?".to_string(),
            answer: "Not at all".to_string(),
        }],
    };
    assert!(state.is_consistent());

    state.next_question_index = 3;
    assert!(!state.is_consistent());
}

#[test]
fn step_round_trips() {
    let step = ScreeningStep::Complete {
        kind: ScreeningKind::Phq9,
        score: 11,
        severity: "Moderate depression".to_string(),
        summary: "Thank you.".to_string(),
        feedback: Some("You shared a lot today.".to_string()),
    };
    let json = serde_json::to_string(&step).unwrap();
    let parsed: ScreeningStep = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, step);
}
