use actix_web::{get, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::{request::UpdateInterestsRequest, response::InterestsResponse},
};

#[get("/interests")]
pub async fn list_interests(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(InterestsResponse {
        interests: state.user_service.list_interests(),
    })
}

#[put("/userinterests")]
pub async fn update_interests(
    state: web::Data<AppState>,
    request: web::Json<UpdateInterestsRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let user_id = auth.user_id()?;
    let response = state
        .user_service
        .update_interests(&user_id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
