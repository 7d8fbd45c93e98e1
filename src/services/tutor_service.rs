use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    clients::{ChatTurn, GenerationRequest, GenerativeClient, TurnRole},
    constants::prompts::TUTOR_PROMPT,
    errors::{AppError, AppResult},
    models::domain::{ChatMessage, ChatRole, ChatSession},
};

/// Chat tutoring over the generative collaborator. Each session is seeded
/// with an explicit topic context at construction time; the seed rides in
/// the system instruction on every call and never enters the transcript.
pub struct TutorService {
    client: Arc<dyn GenerativeClient>,
    sessions: RwLock<HashMap<Uuid, ChatSession>>,
}

impl TutorService {
    pub fn new(client: Arc<dyn GenerativeClient>) -> Self {
        Self {
            client,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub async fn create_session(&self, topic: &str) -> Uuid {
        let initial_context = format!("Explain the topic \"{}\" in detail when asked.", topic);
        let session = ChatSession::new(&initial_context);
        let id = session.id();
        self.sessions.write().await.insert(id, session);
        log::info!("Opened tutor session {} for topic '{}'", id, topic);
        id
    }

    pub async fn messages(&self, id: &Uuid) -> AppResult<Vec<ChatMessage>> {
        let sessions = self.sessions.read().await;
        let session = sessions
            .get(id)
            .ok_or_else(|| Self::session_not_found(id))?;
        Ok(session.messages().to_vec())
    }

    /// Sends one user message and returns the tutor's reply. The transcript
    /// is updated only after the collaborator answers, so a failed call
    /// leaves the conversation unchanged for a clean manual retry.
    pub async fn send_message(&self, id: &Uuid, message: &str) -> AppResult<String> {
        let (initial_context, history) = {
            let sessions = self.sessions.read().await;
            let session = sessions
                .get(id)
                .ok_or_else(|| Self::session_not_found(id))?;
            (
                session.initial_context().to_string(),
                session
                    .messages()
                    .iter()
                    .map(|m| ChatTurn {
                        role: match m.role {
                            ChatRole::User => TurnRole::User,
                            ChatRole::Assistant => TurnRole::Model,
                        },
                        text: m.content.clone(),
                    })
                    .collect::<Vec<_>>(),
            )
        };

        let system_instruction = format!("{}\n\n{}", TUTOR_PROMPT, initial_context);
        let generation =
            GenerationRequest::new(&system_instruction, message).with_history(history);

        let reply = self.client.generate(generation).await?;

        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(id)
            .ok_or_else(|| Self::session_not_found(id))?;
        session.push_user(message);
        session.push_assistant(&reply);

        Ok(reply)
    }

    pub async fn close_session(&self, id: &Uuid) -> AppResult<()> {
        self.sessions
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| Self::session_not_found(id))
    }

    fn session_not_found(id: &Uuid) -> AppError {
        AppError::NotFound(format!("Tutor session with id '{}' not found", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::StubClient;

    #[tokio::test]
    async fn seed_context_rides_in_the_system_instruction() {
        let client = StubClient::returning(Ok("A pointer is an address.".to_string()));
        let service = TutorService::new(client.clone());

        let id = service.create_session("Pointers").await;
        service.send_message(&id, "What is a pointer?").await.unwrap();

        let requests = client.seen_requests();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].system_instruction.contains("Pointers"));
        // The visible history holds only the exchanged messages.
        assert!(requests[0].history.is_empty());
        assert_eq!(requests[0].prompt, "What is a pointer?");
    }

    #[tokio::test]
    async fn transcript_grows_only_on_success() {
        let client = StubClient::returning(Err(AppError::UpstreamFailure("down".to_string())));
        let service = TutorService::new(client);

        let id = service.create_session("Pointers").await;
        let err = service.send_message(&id, "hello").await.unwrap_err();
        assert!(matches!(err, AppError::UpstreamFailure(_)));

        assert!(service.messages(&id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn history_is_replayed_on_the_second_message() {
        let client = StubClient::returning(Ok("reply".to_string()));
        let service = TutorService::new(client.clone());

        let id = service.create_session("Pointers").await;
        service.send_message(&id, "first").await.unwrap();
        service.send_message(&id, "second").await.unwrap();

        let requests = client.seen_requests();
        assert_eq!(requests[1].history.len(), 2);
        assert_eq!(requests[1].history[0].text, "first");
        assert_eq!(requests[1].history[1].text, "reply");

        assert_eq!(service.messages(&id).await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let service = TutorService::new(StubClient::returning(Ok("x".to_string())));
        let err = service.send_message(&Uuid::new_v4(), "hi").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
