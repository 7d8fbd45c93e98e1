use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Question complexity requested from the collaborator. Closed enumeration;
/// anything else is rejected at deserialization time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

fn validate_topics(topics: &Vec<String>) -> Result<(), ValidationError> {
    if topics.iter().any(|t| t.trim().is_empty()) {
        return Err(ValidationError::new("empty_topic"));
    }
    Ok(())
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateQuizRequest {
    #[validate(range(min = 1, max = 50, message = "Number of questions must be between 1 and 50"))]
    pub no_of_questions: u32,

    pub difficulty: Difficulty,

    #[validate(
        length(min = 1, message = "Topics must be a non-empty array"),
        custom(function = "validate_topics")
    )]
    pub topics: Vec<String>,
}

/// Creates an interactive quiz session. Topics may be supplied directly or
/// seeded from the stored profile via `subject_code` + `user_id`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuizSessionRequest {
    #[validate(range(min = 1, max = 50, message = "Number of questions must be between 1 and 50"))]
    pub no_of_questions: u32,

    pub difficulty: Difficulty,

    #[validate(custom(function = "validate_topics"))]
    #[serde(default)]
    pub topics: Option<Vec<String>>,

    #[serde(default)]
    pub subject_code: Option<String>,

    #[serde(default)]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SelectOptionRequest {
    pub index: usize,
    pub option: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuestionIndexRequest {
    pub index: usize,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProcessSyllabusRequest {
    #[validate(length(min = 1, message = "Missing required field: user_id"))]
    pub user_id: String,

    #[validate(length(min = 1, max = 255))]
    pub file_name: String,

    #[validate(length(min = 1, max = 100))]
    pub mime_type: String,

    #[validate(length(min = 1, message = "Missing required field: content_base64"))]
    pub content_base64: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateScheduleRequest {
    #[validate(
        length(min = 1, message = "Topics must be a non-empty array"),
        custom(function = "validate_topics")
    )]
    pub topics: Vec<String>,

    #[validate(range(min = 1, message = "Study time must be a positive number"))]
    pub study_time: u32,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SetupProfileRequest {
    #[validate(length(min = 1, message = "Missing required field: user_id"))]
    pub user_id: String,

    #[validate(
        length(min = 1, max = 200),
        custom(function = "validate_not_blank")
    )]
    pub name: String,

    #[serde(default)]
    pub grade: Option<String>,

    #[serde(default)]
    pub tech_proficiency: Option<String>,

    #[serde(default)]
    pub learning_style: Option<String>,

    #[serde(default)]
    pub challenges: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTutorSessionRequest {
    #[validate(length(min = 1, max = 500))]
    pub topic: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TutorMessageRequest {
    #[validate(length(min = 1, max = 10000))]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz_request(count: u32, topics: Vec<String>) -> GenerateQuizRequest {
        GenerateQuizRequest {
            no_of_questions: count,
            difficulty: Difficulty::Medium,
            topics,
        }
    }

    #[test]
    fn test_valid_generate_quiz_request() {
        let request = quiz_request(10, vec!["Pointers".to_string()]);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_zero_question_count_rejected() {
        let request = quiz_request(0, vec!["Pointers".to_string()]);
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_count_above_cap_rejected() {
        let request = quiz_request(51, vec!["Pointers".to_string()]);
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_empty_topics_rejected() {
        let request = quiz_request(10, vec![]);
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_blank_topic_rejected() {
        let request = quiz_request(10, vec!["  ".to_string()]);
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_unknown_difficulty_rejected_at_parse_time() {
        let body = r#"{ "no_of_questions": 5, "difficulty": "expert", "topics": ["x"] }"#;
        assert!(serde_json::from_str::<GenerateQuizRequest>(body).is_err());
    }

    #[test]
    fn test_difficulty_display_matches_wire_format() {
        assert_eq!(Difficulty::Easy.to_string(), "easy");
        assert_eq!(Difficulty::Hard.to_string(), "hard");
    }

    #[test]
    fn test_whitespace_only_name_rejected() {
        let request = SetupProfileRequest {
            user_id: "user-1".to_string(),
            name: "   ".to_string(),
            grade: None,
            tech_proficiency: None,
            learning_style: None,
            challenges: vec![],
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_zero_study_time_rejected() {
        let request = GenerateScheduleRequest {
            topics: vec!["x".to_string()],
            study_time: 0,
        };
        assert!(request.validate().is_err());
    }
}
