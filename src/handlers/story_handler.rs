use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState, auth::AuthenticatedUser, errors::AppError,
    models::dto::request::StoryRequest,
};

#[post("/story")]
pub async fn generate_story(
    state: web::Data<AppState>,
    request: web::Json<StoryRequest>,
    _auth: AuthenticatedUser, // Require authentication
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let segment = state
        .story_service
        .generate_segment(&request.world, &request.story, &request.user_selection)
        .await?;
    Ok(HttpResponse::Ok().json(segment))
}
