use serde::Serialize;
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::models::domain::ChatMessage;
use crate::models::dto::view::QuizSnapshot;

/// Success envelope used by the generation endpoints: `{ "data": ... }`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Schedule keyed by topic position, plus a fixed `review` slot.
#[derive(Debug, Serialize)]
pub struct ScheduleResponse {
    pub schedule: BTreeMap<String, String>,
}

#[derive(Debug, Serialize)]
pub struct QuizSessionResponse {
    pub session_id: Uuid,
    pub snapshot: QuizSnapshot,
}

#[derive(Debug, Serialize)]
pub struct TutorSessionResponse {
    pub session_id: Uuid,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
pub struct TutorReplyResponse {
    pub reply: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::QuizQuestion;

    #[test]
    fn api_response_wraps_payload_under_data() {
        let questions = vec![QuizQuestion {
            question: "Q?".to_string(),
            options: vec![
                "a".to_string(),
                "b".to_string(),
                "c".to_string(),
                "d".to_string(),
            ],
            correct: "a".to_string(),
        }];

        let json = serde_json::to_value(ApiResponse::new(questions)).unwrap();
        assert!(json["data"].is_array());
        assert_eq!(json["data"][0]["correct"], "a");
    }
}
