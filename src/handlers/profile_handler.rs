use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::SetupProfileRequest,
};

#[post("/api/profiles")]
async fn setup_profile(
    state: web::Data<AppState>,
    request: web::Json<SetupProfileRequest>,
) -> Result<HttpResponse, AppError> {
    let profile = state
        .profile_service
        .setup_profile(request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(profile))
}

#[get("/api/profiles/{user_id}")]
async fn get_profile(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let profile = state.profile_service.get_profile(&user_id).await?;
    Ok(HttpResponse::Ok().json(profile))
}

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
