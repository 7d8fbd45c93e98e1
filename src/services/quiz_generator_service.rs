use std::sync::Arc;
use validator::Validate;

use crate::{
    clients::{GenerationRequest, GenerativeClient},
    constants::prompts::QUIZ_GENERATION_PROMPT,
    errors::{AppError, AppResult},
    models::{domain::QuizQuestion, dto::request::GenerateQuizRequest},
};

/// Fetches one batch of questions from the question-generation collaborator.
///
/// Bad parameters are rejected before any network call. A batch is accepted
/// all-or-nothing: one malformed question rejects the entire response.
pub struct QuizGeneratorService {
    client: Arc<dyn GenerativeClient>,
}

impl QuizGeneratorService {
    pub fn new(client: Arc<dyn GenerativeClient>) -> Self {
        Self { client }
    }

    pub async fn generate_quiz(
        &self,
        request: GenerateQuizRequest,
    ) -> AppResult<Vec<QuizQuestion>> {
        request.validate()?;

        let prompt = format!(
            "Generate {count} {difficulty} difficulty multiple-choice questions on the following topics: {topics}.\n\n\
             Each question should have 4 options with exactly one correct answer.\n\
             Ensure the questions are appropriate for the {difficulty} difficulty level.\n\
             Return only the JSON array with the questions, options, and correct answers.",
            count = request.no_of_questions,
            difficulty = request.difficulty,
            topics = request.topics.join(", "),
        );

        let schema = serde_json::to_value(schemars::schema_for!(Vec<QuizQuestion>))
            .map_err(|e| AppError::InternalError(format!("schema generation failed: {}", e)))?;

        let generation = GenerationRequest::new(QUIZ_GENERATION_PROMPT, &prompt)
            .with_response_schema(schema)
            .with_temperature(0.7);

        let text = self.client.generate(generation).await?;

        let questions: Vec<QuizQuestion> = serde_json::from_str(&text).map_err(|e| {
            AppError::InvalidResponseShape(format!("collaborator payload is not a question array: {}", e))
        })?;

        if questions.is_empty() {
            return Err(AppError::InvalidResponseShape(
                "collaborator returned an empty question array".to_string(),
            ));
        }

        for question in &questions {
            question.validate_shape()?;
        }

        log::info!(
            "Generated {} questions ({} difficulty) for topics: {}",
            questions.len(),
            request.difficulty,
            request.topics.join(", ")
        );

        Ok(questions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::dto::request::Difficulty;
    use crate::test_utils::{fixtures, StubClient};

    fn request(count: u32, topics: &[&str]) -> GenerateQuizRequest {
        GenerateQuizRequest {
            no_of_questions: count,
            difficulty: Difficulty::Medium,
            topics: topics.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn valid_batch_is_accepted_in_order() {
        let client = StubClient::returning(Ok(fixtures::valid_batch()));
        let service = QuizGeneratorService::new(client.clone());

        let questions = service
            .generate_quiz(request(2, &["Pointers"]))
            .await
            .unwrap();

        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].question, "Q1?");
        assert_eq!(questions[1].correct, "b2");
    }

    #[tokio::test]
    async fn invalid_count_is_rejected_before_the_network_call() {
        let client = StubClient::returning(Ok(fixtures::valid_batch()));
        let service = QuizGeneratorService::new(client.clone());

        let err = service
            .generate_quiz(request(0, &["Pointers"]))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidRequest(_)));
        assert!(!client.was_called());
    }

    #[tokio::test]
    async fn empty_topics_are_rejected_before_the_network_call() {
        let client = StubClient::returning(Ok(fixtures::valid_batch()));
        let service = QuizGeneratorService::new(client.clone());

        let err = service.generate_quiz(request(5, &[])).await.unwrap_err();

        assert!(matches!(err, AppError::InvalidRequest(_)));
        assert!(!client.was_called());
    }

    #[tokio::test]
    async fn one_bad_question_rejects_the_whole_batch() {
        let batch = serde_json::json!([
            {
                "question": "Good?",
                "options": ["a", "b", "c", "d"],
                "correct": "a"
            },
            {
                "question": "Bad?",
                "options": ["a", "b", "c"],
                "correct": "a"
            }
        ])
        .to_string();
        let service = QuizGeneratorService::new(StubClient::returning(Ok(batch)));

        let err = service
            .generate_quiz(request(2, &["Pointers"]))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidResponseShape(_)));
    }

    #[tokio::test]
    async fn correct_outside_options_rejects_the_batch() {
        let batch = serde_json::json!([
            {
                "question": "Q?",
                "options": ["a", "b", "c", "d"],
                "correct": "e"
            }
        ])
        .to_string();
        let service = QuizGeneratorService::new(StubClient::returning(Ok(batch)));

        let err = service
            .generate_quiz(request(1, &["Pointers"]))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidResponseShape(_)));
    }

    #[tokio::test]
    async fn non_json_payload_is_a_shape_error() {
        let service =
            QuizGeneratorService::new(StubClient::returning(Ok("not json at all".to_string())));

        let err = service
            .generate_quiz(request(1, &["Pointers"]))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidResponseShape(_)));
    }

    #[tokio::test]
    async fn upstream_failure_passes_through_unchanged() {
        let service = QuizGeneratorService::new(StubClient::returning(Err(
            AppError::UpstreamFailure("HTTP 500".to_string()),
        )));

        let err = service
            .generate_quiz(request(1, &["Pointers"]))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::UpstreamFailure(_)));
    }
}
