use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::{
    clients::{GenerationRequest, GenerativeClient},
    errors::AppResult,
    models::domain::{Profile, QuizQuestion},
    repositories::ProfileRepository,
};

/// Canned collaborator: returns a fixed response and records every request
/// so tests can assert on what crossed the network boundary.
pub struct StubClient {
    response: AppResult<String>,
    seen_requests: Mutex<Vec<GenerationRequest>>,
}

impl StubClient {
    pub fn returning(response: AppResult<String>) -> Arc<Self> {
        Arc::new(Self {
            response,
            seen_requests: Mutex::new(Vec::new()),
        })
    }

    pub fn was_called(&self) -> bool {
        !self.seen_requests.lock().unwrap().is_empty()
    }

    pub fn seen_requests(&self) -> Vec<GenerationRequest> {
        self.seen_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerativeClient for StubClient {
    async fn generate(&self, request: GenerationRequest) -> AppResult<String> {
        self.seen_requests.lock().unwrap().push(request);
        self.response.clone()
    }
}

pub struct InMemoryProfileRepository {
    profiles: Mutex<HashMap<String, Profile>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            profiles: Mutex::new(HashMap::new()),
        })
    }

    pub fn with_profile(profile: Profile) -> Arc<Self> {
        let repository = Self::new();
        repository
            .profiles
            .lock()
            .unwrap()
            .insert(profile.user_id.clone(), profile);
        repository
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn find_by_user_id(&self, user_id: &str) -> AppResult<Option<Profile>> {
        Ok(self.profiles.lock().unwrap().get(user_id).cloned())
    }

    async fn upsert(&self, profile: Profile) -> AppResult<Profile> {
        self.profiles
            .lock()
            .unwrap()
            .insert(profile.user_id.clone(), profile.clone());
        Ok(profile)
    }
}

pub mod fixtures {
    use super::*;

    /// A question whose correct answer is `right {n}`.
    pub fn question(n: usize) -> QuizQuestion {
        QuizQuestion {
            question: format!("Question {}?", n),
            options: vec![
                format!("right {}", n),
                format!("wrong a {}", n),
                format!("wrong b {}", n),
                format!("wrong c {}", n),
            ],
            correct: format!("right {}", n),
        }
    }

    /// A two-question collaborator payload; Q1's answer is "a1", Q2's "b2".
    pub fn valid_batch() -> String {
        serde_json::json!([
            { "question": "Q1?", "options": ["a1", "b1", "c1", "d1"], "correct": "a1" },
            { "question": "Q2?", "options": ["a2", "b2", "c2", "d2"], "correct": "b2" }
        ])
        .to_string()
    }

    pub fn test_profile(user_id: &str) -> Profile {
        Profile::new(user_id, "Test", "User")
    }
}
