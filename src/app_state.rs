use std::sync::Arc;

use crate::{
    clients::GeminiClient,
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::MongoProfileRepository,
    services::{
        ProfileService, QuizGeneratorService, QuizSessionService, SyllabusService, TutorService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub profile_service: Arc<ProfileService>,
    pub quiz_generator_service: Arc<QuizGeneratorService>,
    pub quiz_session_service: Arc<QuizSessionService>,
    pub syllabus_service: Arc<SyllabusService>,
    pub tutor_service: Arc<TutorService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let profile_repository = Arc::new(MongoProfileRepository::new(&db, &config));
        profile_repository.ensure_indexes().await?;
        let profile_service = Arc::new(ProfileService::new(profile_repository.clone()));

        let client = Arc::new(GeminiClient::new(&config)?);

        let quiz_generator_service = Arc::new(QuizGeneratorService::new(client.clone()));
        let quiz_session_service =
            Arc::new(QuizSessionService::new(quiz_generator_service.clone()));
        let syllabus_service = Arc::new(SyllabusService::new(
            client.clone(),
            profile_repository.clone(),
        ));
        let tutor_service = Arc::new(TutorService::new(client));

        Ok(Self {
            profile_service,
            quiz_generator_service,
            quiz_session_service,
            syllabus_service,
            tutor_service,
            config: Arc::new(config),
        })
    }

    /// State wired over in-memory doubles, no database or network needed.
    #[cfg(test)]
    pub fn for_tests() -> Self {
        use crate::clients::GenerativeClient;
        use crate::repositories::ProfileRepository;
        use crate::test_utils::{fixtures, InMemoryProfileRepository, StubClient};

        let client: Arc<dyn GenerativeClient> =
            StubClient::returning(Ok(fixtures::valid_batch()));
        let repository: Arc<dyn ProfileRepository> = InMemoryProfileRepository::new();

        Self::for_tests_with(client, repository)
    }

    #[cfg(test)]
    pub fn for_tests_with(
        client: Arc<dyn crate::clients::GenerativeClient>,
        repository: Arc<dyn crate::repositories::ProfileRepository>,
    ) -> Self {
        let profile_service = Arc::new(ProfileService::new(repository.clone()));
        let quiz_generator_service = Arc::new(QuizGeneratorService::new(client.clone()));
        let quiz_session_service =
            Arc::new(QuizSessionService::new(quiz_generator_service.clone()));
        let syllabus_service = Arc::new(SyllabusService::new(client.clone(), repository));
        let tutor_service = Arc::new(TutorService::new(client));

        Self {
            profile_service,
            quiz_generator_service,
            quiz_session_service,
            syllabus_service,
            tutor_service,
            config: Arc::new(Config::test_config()),
        }
    }
}
