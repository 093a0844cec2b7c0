use actix_web::{middleware::Logger, web, App, HttpServer};

use learnforge_server::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    if let Err(e) = config.validate_for_production() {
        log::warn!("{}", e);
    }

    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    let state = AppState::new(config)
        .await
        .map_err(std::io::Error::other)?;

    state
        .quiz_scheduler
        .start_worker()
        .await
        .map_err(std::io::Error::other)?;

    let scheduler = state.quiz_scheduler.clone();
    let jwt_service = web::Data::new(state.jwt_service.clone());
    let app_state = web::Data::new(state);

    log::info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .app_data(jwt_service.clone())
            .wrap(Logger::default())
            .configure(handlers::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await?;

    scheduler.stop_worker().await.map_err(std::io::Error::other)?;
    Ok(())
}
