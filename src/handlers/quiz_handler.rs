use actix_web::{delete, get, post, web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::{
            CreateQuizSessionRequest, GenerateQuizRequest, QuestionIndexRequest,
            SelectOptionRequest,
        },
        response::{ApiResponse, QuizSessionResponse},
    },
};

/// One-shot generation: validate, call the collaborator, relay the batch.
#[post("/api/generate_quiz")]
async fn generate_quiz(
    state: web::Data<AppState>,
    request: web::Json<GenerateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let questions = state
        .quiz_generator_service
        .generate_quiz(request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::new(questions)))
}

#[post("/api/quiz_sessions")]
async fn create_quiz_session(
    state: web::Data<AppState>,
    request: web::Json<CreateQuizSessionRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let topics = match &request.topics {
        Some(topics) if !topics.is_empty() => topics.clone(),
        _ => {
            // No explicit topics: seed from the stored profile.
            let (user_id, code) = match (&request.user_id, &request.subject_code) {
                (Some(user_id), Some(code)) => (user_id, code),
                _ => {
                    return Err(AppError::InvalidRequest(
                        "Either topics or user_id and subject_code must be supplied".to_string(),
                    ))
                }
            };
            let context = state.profile_service.sign_in(user_id).await?;
            let profile = context.profile.ok_or_else(|| {
                AppError::NotFound(format!("Profile for user '{}' not found", user_id))
            })?;
            profile
                .topics_for(code)
                .filter(|topics| !topics.is_empty())
                .ok_or_else(|| {
                    AppError::NotFound(format!("No topics stored for subject code '{}'", code))
                })?
                .to_vec()
        }
    };

    let (session_id, snapshot) = state
        .quiz_session_service
        .create_session(GenerateQuizRequest {
            no_of_questions: request.no_of_questions,
            difficulty: request.difficulty,
            topics,
        })
        .await?;

    Ok(HttpResponse::Created().json(QuizSessionResponse {
        session_id,
        snapshot,
    }))
}

#[get("/api/quiz_sessions/{id}")]
async fn get_quiz_session(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let snapshot = state.quiz_session_service.snapshot(&id).await?;
    Ok(HttpResponse::Ok().json(snapshot))
}

#[post("/api/quiz_sessions/{id}/select")]
async fn select_option(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    request: web::Json<SelectOptionRequest>,
) -> Result<HttpResponse, AppError> {
    let snapshot = state
        .quiz_session_service
        .select_option(&id, request.index, &request.option)
        .await?;
    Ok(HttpResponse::Ok().json(snapshot))
}

#[post("/api/quiz_sessions/{id}/check")]
async fn check_answer(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    request: web::Json<QuestionIndexRequest>,
) -> Result<HttpResponse, AppError> {
    let snapshot = state
        .quiz_session_service
        .check_answer(&id, request.index)
        .await?;
    Ok(HttpResponse::Ok().json(snapshot))
}

#[post("/api/quiz_sessions/{id}/advance")]
async fn advance(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let snapshot = state.quiz_session_service.advance(&id).await?;
    Ok(HttpResponse::Ok().json(snapshot))
}

#[post("/api/quiz_sessions/{id}/retreat")]
async fn retreat(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let snapshot = state.quiz_session_service.retreat(&id).await?;
    Ok(HttpResponse::Ok().json(snapshot))
}

#[post("/api/quiz_sessions/{id}/jump")]
async fn jump_to(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    request: web::Json<QuestionIndexRequest>,
) -> Result<HttpResponse, AppError> {
    let snapshot = state
        .quiz_session_service
        .jump_to(&id, request.index)
        .await?;
    Ok(HttpResponse::Ok().json(snapshot))
}

/// Reattempt: a brand-new fetch replacing the session wholesale.
#[post("/api/quiz_sessions/{id}/restart")]
async fn restart(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    request: web::Json<GenerateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let snapshot = state
        .quiz_session_service
        .restart(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(snapshot))
}

#[delete("/api/quiz_sessions/{id}")]
async fn close_quiz_session(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    state.quiz_session_service.close_session(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}
