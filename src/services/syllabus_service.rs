use base64::Engine as _;
use std::sync::Arc;
use validator::Validate;

use crate::{
    clients::{DocumentPart, GenerationRequest, GenerativeClient},
    constants::prompts::SYLLABUS_EXTRACTION_PROMPT,
    errors::{AppError, AppResult},
    models::{domain::SyllabusData, dto::request::ProcessSyllabusRequest},
    repositories::ProfileRepository,
};

/// Extracts structured subject/topic data from an uploaded syllabus via the
/// collaborator and merges it into the stored profile.
pub struct SyllabusService {
    client: Arc<dyn GenerativeClient>,
    repository: Arc<dyn ProfileRepository>,
}

impl SyllabusService {
    pub fn new(client: Arc<dyn GenerativeClient>, repository: Arc<dyn ProfileRepository>) -> Self {
        Self { client, repository }
    }

    pub async fn process_syllabus(
        &self,
        request: ProcessSyllabusRequest,
    ) -> AppResult<SyllabusData> {
        request.validate()?;

        let bytes = base64::engine::general_purpose::STANDARD
            .decode(&request.content_base64)
            .map_err(|e| AppError::InvalidRequest(format!("content is not valid base64: {}", e)))?;

        let schema = serde_json::to_value(schemars::schema_for!(SyllabusData))
            .map_err(|e| AppError::InternalError(format!("schema generation failed: {}", e)))?;

        let generation = GenerationRequest::new(
            SYLLABUS_EXTRACTION_PROMPT,
            "Extract the syllabus information from this document",
        )
        .with_document(DocumentPart {
            mime_type: request.mime_type.clone(),
            data: bytes,
        })
        .with_response_schema(schema)
        .with_temperature(0.0);

        let text = self.client.generate(generation).await?;

        let extracted: SyllabusData = serde_json::from_str(&text).map_err(|e| {
            AppError::InvalidResponseShape(format!(
                "collaborator payload is not syllabus data: {}",
                e
            ))
        })?;

        let mut profile = self
            .repository
            .find_by_user_id(&request.user_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Profile for user '{}' not found", request.user_id))
            })?;

        profile.merge_syllabus(extracted.clone());
        self.repository.upsert(profile).await?;

        log::info!(
            "Processed syllabus '{}' for user {}: {} subjects extracted",
            request.file_name,
            request.user_id,
            extracted.subjects.len()
        );

        Ok(extracted)
    }
}
