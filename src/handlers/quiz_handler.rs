use actix_web::{get, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::{
        request::{HistoryFilter, SubmitQuizRequest},
        response::{HistoryResponse, QuizzesResponse},
    },
};

#[get("/quizzes")]
pub async fn list_quizzes(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let quizzes = state.quiz_service.list_quizzes(&auth.user_id()?).await?;
    Ok(HttpResponse::Ok().json(QuizzesResponse { quizzes }))
}

#[put("/quizzes")]
pub async fn submit_quiz(
    state: web::Data<AppState>,
    request: web::Json<SubmitQuizRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let response = state
        .quiz_service
        .submit_quiz(&auth.user_id()?, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/stats")]
pub async fn get_stats(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let stats = state.quiz_service.get_stats(&auth.user_id()?).await?;
    Ok(HttpResponse::Ok().json(stats))
}

#[get("/history/{filter}")]
pub async fn get_history(
    state: web::Data<AppState>,
    filter: web::Path<HistoryFilter>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let questions = state
        .quiz_service
        .get_history(&auth.user_id()?, filter.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(HistoryResponse { questions }))
}
