use actix_web::{post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{request::ProcessSyllabusRequest, response::ApiResponse},
};

/// Uploads a syllabus document for extraction. The extracted data is merged
/// into the stored profile before being returned.
#[post("/api/process_syllabus")]
async fn process_syllabus(
    state: web::Data<AppState>,
    request: web::Json<ProcessSyllabusRequest>,
) -> Result<HttpResponse, AppError> {
    let data = state
        .syllabus_service
        .process_syllabus(request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::new(data)))
}
