use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use simbridge::api::{AppState, configure_routes};
use simbridge::{banner, config};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Print the startup banner
    banner::print_banner();

    if let Err(e) = dotenvy::dotenv() {
        eprintln!("⚠️  Warning: Could not load .env file: {}", e);
    }

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let app_config = config::AppConfig::from_env()
        .expect("Failed to load app configuration from environment");

    println!("🚀 Starting server...");
    println!(
        "🧫 Simulation executable: {}",
        app_config.executable.display()
    );
    println!(
        "📊 API available at http://{}:{}/api/v1",
        app_config.bind_address, app_config.port
    );

    let bind = (app_config.bind_address.clone(), app_config.port);
    let state = AppState::new(app_config);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .configure(configure_routes)
    })
    .bind(bind)?
    .run()
    .await
}
