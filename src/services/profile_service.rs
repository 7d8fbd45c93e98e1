use std::sync::Arc;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{Profile, SessionContext},
        dto::request::SetupProfileRequest,
    },
    repositories::ProfileRepository,
};

pub struct ProfileService {
    repository: Arc<dyn ProfileRepository>,
}

impl ProfileService {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_profile(&self, user_id: &str) -> AppResult<Profile> {
        let profile = self
            .repository
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Profile for user '{}' not found", user_id))
            })?;

        Ok(profile)
    }

    /// Builds the explicit per-request user context. A missing profile is
    /// not an error here; callers decide whether they need one.
    pub async fn sign_in(&self, user_id: &str) -> AppResult<SessionContext> {
        let profile = self.repository.find_by_user_id(user_id).await?;
        Ok(SessionContext::sign_in(user_id, profile))
    }

    /// Account-setup upsert. Extracted syllabus data already stored for the
    /// user is preserved across setup edits.
    pub async fn setup_profile(&self, request: SetupProfileRequest) -> AppResult<Profile> {
        request.validate()?;

        let mut name_parts = request.name.split_whitespace();
        let first_name = name_parts.next().unwrap_or_default().to_string();
        let last_name = name_parts.collect::<Vec<_>>().join(" ");

        let mut profile = self
            .repository
            .find_by_user_id(&request.user_id)
            .await?
            .unwrap_or_else(|| Profile::new(&request.user_id, &first_name, &last_name));

        profile.first_name = first_name;
        profile.last_name = last_name;
        profile.grade = request.grade;
        profile.tech_proficiency = request.tech_proficiency;
        profile.learning_style = request.learning_style;
        profile.learning_challenges = request.challenges;

        let profile = self.repository.upsert(profile).await?;
        log::info!("Stored profile for user {}", profile.user_id);
        Ok(profile)
    }

    /// Topic list stored for a subject code, used to seed quiz generation
    /// when the caller supplies no explicit topics.
    pub async fn topics_for_subject(&self, user_id: &str, code: &str) -> AppResult<Vec<String>> {
        let profile = self.get_profile(user_id).await?;
        let topics = profile.topics_for(code).ok_or_else(|| {
            AppError::NotFound(format!("No topics stored for subject code '{}'", code))
        })?;
        Ok(topics.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::{SmtDetail, Subject, SubjectType};
    use crate::test_utils::InMemoryProfileRepository;

    fn setup_request(user_id: &str, name: &str) -> SetupProfileRequest {
        SetupProfileRequest {
            user_id: user_id.to_string(),
            name: name.to_string(),
            grade: Some("12".to_string()),
            tech_proficiency: Some("intermediate".to_string()),
            learning_style: None,
            challenges: vec![],
        }
    }

    #[tokio::test]
    async fn setup_splits_name_into_first_and_last() {
        let service = ProfileService::new(InMemoryProfileRepository::new());

        let profile = service
            .setup_profile(setup_request("user-1", "Ada Lovelace Byron"))
            .await
            .unwrap();

        assert_eq!(profile.first_name, "Ada");
        assert_eq!(profile.last_name, "Lovelace Byron");
        assert_eq!(profile.grade.as_deref(), Some("12"));
    }

    #[tokio::test]
    async fn setup_preserves_stored_syllabus_data() {
        let repository = InMemoryProfileRepository::new();
        let service = ProfileService::new(repository.clone());

        let mut existing = Profile::new("user-1", "Old", "Name");
        existing.subjects.push(Subject {
            subject: "Programming".to_string(),
            code: "CS101".to_string(),
            subject_type: SubjectType::Theory,
        });
        existing.smt_details.push(SmtDetail {
            code: "CS101".to_string(),
            topics: vec!["Variables".to_string()],
        });
        repository.upsert(existing).await.unwrap();

        let profile = service
            .setup_profile(setup_request("user-1", "New Name"))
            .await
            .unwrap();

        assert_eq!(profile.first_name, "New");
        assert_eq!(profile.subjects.len(), 1);
        assert_eq!(
            profile.topics_for("CS101"),
            Some(["Variables".to_string()].as_slice())
        );
    }

    #[tokio::test]
    async fn missing_profile_is_not_found() {
        let service = ProfileService::new(InMemoryProfileRepository::new());
        let err = service.get_profile("nobody").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn topics_for_unknown_subject_code_is_not_found() {
        let service = ProfileService::new(InMemoryProfileRepository::new());
        service
            .setup_profile(setup_request("user-1", "Test User"))
            .await
            .unwrap();

        let err = service
            .topics_for_subject("user-1", "CS999")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn sign_in_without_profile_yields_empty_context() {
        let service = ProfileService::new(InMemoryProfileRepository::new());
        let ctx = service.sign_in("user-1").await.unwrap();

        assert_eq!(ctx.user_id, "user-1");
        assert!(ctx.profile.is_none());
    }
}
