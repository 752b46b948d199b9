use adops_api::api::routes::build_router;
use adops_api::api::AppState;
use adops_api::config::AppConfig;
use adops_api::infrastructure::db;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    let config = AppConfig::from_env();

    // Connect to database
    tracing::info!("Connecting to database...");
    let pool = db::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    db::init_schema(&pool)
        .await
        .expect("Failed to initialize database schema");

    tracing::info!("Database connected successfully");

    // Build router
    let state = AppState {
        pool,
        jwt_secret: config.jwt_secret.clone(),
    };
    let app = build_router(state, &config.cors);

    // Start server
    tracing::info!("Server listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server failed");
}
