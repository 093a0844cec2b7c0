pub mod quiz_handler;
pub mod story_handler;
pub mod user_handler;

use actix_web::web;

use crate::auth::AuthMiddleware;

pub use quiz_handler::{get_history, get_stats, list_quizzes, submit_quiz};
pub use story_handler::generate_story;
pub use user_handler::{health_check, list_interests, update_interests};

/// Registers every route. `AppState` and `JwtService` must already be
/// registered as app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check).service(list_interests).service(
        web::scope("")
            .wrap(AuthMiddleware)
            .service(update_interests)
            .service(list_quizzes)
            .service(submit_quiz)
            .service(get_stats)
            .service(get_history)
            .service(generate_story),
    );
}
