use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{QuizQuestion, QuizSession},
        dto::{request::GenerateQuizRequest, view::QuizSnapshot},
    },
    services::quiz_generator_service::QuizGeneratorService,
};

/// In-memory store of live quiz attempts, one session per attempt.
///
/// Sessions exist only for the lifetime of the process; there is no
/// cross-tab sharing and no persistence of in-progress state. A restart
/// fetches the new question batch first and swaps the session contents only
/// on success, so a failed re-fetch leaves the old attempt intact.
pub struct QuizSessionService {
    generator: Arc<QuizGeneratorService>,
    sessions: RwLock<HashMap<Uuid, QuizSession>>,
}

impl QuizSessionService {
    pub fn new(generator: Arc<QuizGeneratorService>) -> Self {
        Self {
            generator,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Fetches a question batch and opens a new session around it. The
    /// session is created only once the fetch succeeds.
    pub async fn create_session(
        &self,
        request: GenerateQuizRequest,
    ) -> AppResult<(Uuid, QuizSnapshot)> {
        let questions = self.generator.generate_quiz(request).await?;
        let session = QuizSession::new(questions);
        let snapshot = QuizSnapshot::from_session(&session);

        let id = Uuid::new_v4();
        self.sessions.write().await.insert(id, session);
        log::info!("Opened quiz session {}", id);

        Ok((id, snapshot))
    }

    pub async fn snapshot(&self, id: &Uuid) -> AppResult<QuizSnapshot> {
        let sessions = self.sessions.read().await;
        let session = sessions
            .get(id)
            .ok_or_else(|| Self::session_not_found(id))?;
        Ok(QuizSnapshot::from_session(session))
    }

    /// The bounds check and the mutation share one critical section, so a
    /// concurrent restart cannot shrink the question list in between.
    pub async fn select_option(
        &self,
        id: &Uuid,
        index: usize,
        option: &str,
    ) -> AppResult<QuizSnapshot> {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(id)
            .ok_or_else(|| Self::session_not_found(id))?;
        if index >= session.questions().len() {
            return Err(AppError::InvalidRequest(format!(
                "question index {} out of range",
                index
            )));
        }
        session.select_option(index, option);
        Ok(QuizSnapshot::from_session(session))
    }

    pub async fn check_answer(&self, id: &Uuid, index: usize) -> AppResult<QuizSnapshot> {
        self.with_session(id, |session| session.check_answer(index))
            .await
    }

    pub async fn advance(&self, id: &Uuid) -> AppResult<QuizSnapshot> {
        self.with_session(id, |session| session.advance()).await
    }

    pub async fn retreat(&self, id: &Uuid) -> AppResult<QuizSnapshot> {
        self.with_session(id, |session| session.retreat()).await
    }

    pub async fn jump_to(&self, id: &Uuid, index: usize) -> AppResult<QuizSnapshot> {
        self.with_session(id, |session| session.jump_to(index)).await
    }

    /// Reattempt: fetch a brand-new batch, then replace the session
    /// contents wholesale.
    pub async fn restart(
        &self,
        id: &Uuid,
        request: GenerateQuizRequest,
    ) -> AppResult<QuizSnapshot> {
        // Fail fast if the session is already gone, before spending a
        // collaborator call.
        if !self.sessions.read().await.contains_key(id) {
            return Err(Self::session_not_found(id));
        }

        let questions: Vec<QuizQuestion> = self.generator.generate_quiz(request).await?;

        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(id)
            .ok_or_else(|| Self::session_not_found(id))?;
        session.restart(questions);
        log::info!("Restarted quiz session {}", id);
        Ok(QuizSnapshot::from_session(session))
    }

    pub async fn close_session(&self, id: &Uuid) -> AppResult<()> {
        self.sessions
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| Self::session_not_found(id))
    }

    async fn with_session<F>(&self, id: &Uuid, apply: F) -> AppResult<QuizSnapshot>
    where
        F: FnOnce(&mut QuizSession),
    {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(id)
            .ok_or_else(|| Self::session_not_found(id))?;
        apply(session);
        Ok(QuizSnapshot::from_session(session))
    }

    fn session_not_found(id: &Uuid) -> AppError {
        AppError::NotFound(format!("Quiz session with id '{}' not found", id))
    }
}
