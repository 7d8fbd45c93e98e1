use actix_web::{delete, get, post, web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::{CreateTutorSessionRequest, TutorMessageRequest},
        response::{TutorReplyResponse, TutorSessionResponse},
    },
};

#[post("/api/tutor/sessions")]
async fn create_tutor_session(
    state: web::Data<AppState>,
    request: web::Json<CreateTutorSessionRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let session_id = state.tutor_service.create_session(&request.topic).await;
    Ok(HttpResponse::Created().json(TutorSessionResponse {
        session_id,
        messages: vec![],
    }))
}

#[get("/api/tutor/sessions/{id}/messages")]
async fn get_tutor_messages(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let messages = state.tutor_service.messages(&id).await?;
    Ok(HttpResponse::Ok().json(TutorSessionResponse {
        session_id: *id,
        messages,
    }))
}

#[post("/api/tutor/sessions/{id}/messages")]
async fn send_tutor_message(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    request: web::Json<TutorMessageRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let reply = state.tutor_service.send_message(&id, &request.message).await?;
    Ok(HttpResponse::Ok().json(TutorReplyResponse { reply }))
}

#[delete("/api/tutor/sessions/{id}")]
async fn close_tutor_session(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    state.tutor_service.close_session(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}
