use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use swiftprep_server::{
    app_state::AppState, config::Config, handlers, middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    config.validate_for_production();

    let state = AppState::new(config.clone()).await.unwrap_or_else(|e| {
        log::error!("Failed to initialize application state: {}", e);
        std::process::exit(1);
    });

    let bind_address = (config.web_server_host.clone(), config.web_server_port);
    log::info!(
        "Starting HTTP server on {}:{}",
        bind_address.0,
        bind_address.1
    );

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .wrap(RequestIdMiddleware)
            .wrap(cors)
            .configure(handlers::configure_routes)
    })
    .bind(bind_address)?
    .run()
    .await
}
