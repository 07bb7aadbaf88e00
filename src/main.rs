use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use kurso_server::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        config.validate_for_production();
    }

    let state = AppState::new(config)
        .await
        .expect("failed to initialize application state");

    let host = state.config.web_server_host.clone();
    let port = state.config.web_server_port;

    log::info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .service(handlers::register)
            .service(handlers::login)
            .service(handlers::me)
            .service(handlers::register_admin)
            .service(handlers::create_course)
            .service(handlers::get_all_courses)
            .service(handlers::get_course)
            .service(handlers::update_course)
            .service(handlers::delete_course)
            .service(handlers::create_lesson)
            .service(handlers::get_lesson)
            .service(handlers::update_lesson)
            .service(handlers::delete_lesson)
            .service(handlers::get_lessons_for_course)
            .service(handlers::get_course_progress)
            .service(handlers::create_material_for_lesson)
            .service(handlers::get_materials_for_lesson)
            .service(handlers::update_material)
            .service(handlers::delete_material)
            .service(handlers::complete_lesson)
            .service(handlers::get_course_stats)
            .service(handlers::health_check)
            .service(handlers::health_check_ready)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
