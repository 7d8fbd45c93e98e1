use actix_web::{post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{request::GenerateScheduleRequest, response::ScheduleResponse},
    services::ScheduleService,
};

#[post("/api/generate_schedule")]
async fn generate_schedule(
    _state: web::Data<AppState>,
    request: web::Json<GenerateScheduleRequest>,
) -> Result<HttpResponse, AppError> {
    let schedule = ScheduleService::generate_schedule(request.into_inner())?;
    Ok(HttpResponse::Ok().json(ScheduleResponse { schedule }))
}
