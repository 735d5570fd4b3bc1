use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use smartstudy_server::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let state = AppState::new(config.clone());
    let bind_addr = (config.web_server_host.clone(), config.web_server_port);

    log::info!(
        "starting HTTP server on {}:{}",
        config.web_server_host,
        config.web_server_port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .service(handlers::health_check)
            .service(handlers::solve_assignment)
            .service(handlers::chat)
            .service(handlers::generate_quiz)
            .service(handlers::generate_video_script)
    })
    .bind(bind_addr)?
    .run()
    .await
}
