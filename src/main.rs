use dotenvy::dotenv;
use sqlx::postgres::PgPoolOptions;

use keyward::cli::create_super_user;
use keyward::config::server::ServerConfig;
use keyward::logging;
use keyward::router::init_router;
use keyward::state::AppState;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let args: Vec<String> = std::env::args().collect();
    match args.get(1).map(String::as_str) {
        Some("create-superuser") => run_create_superuser(&args).await,
        _ => run_server().await,
    }
}

async fn run_server() {
    let server_config = ServerConfig::from_env();
    logging::init_tracing(server_config.environment);

    let state = AppState::init().await;

    sqlx::migrate!("./migrations")
        .run(&state.db)
        .await
        .expect("Failed to run database migrations");

    let addr = server_config.bind_addr();
    let app = init_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    println!("🚀 Server running on http://{}", addr);
    println!("📖 Scalar UI available at http://{}/scalar", addr);
    axum::serve(listener, app).await.unwrap();
}

async fn run_create_superuser(args: &[String]) {
    let [_, _, full_name, email, password] = args else {
        eprintln!("Usage: keyward create-superuser <full_name> <email> <password>");
        std::process::exit(1);
    };

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await
        .expect("Failed to connect to database");

    match create_super_user(&pool, full_name, email, password).await {
        Ok(()) => {
            println!("✅ Superuser created successfully!");
            println!("   Email: {}", email);
            println!("   Name: {}", full_name);
        }
        Err(e) => {
            eprintln!("❌ Error creating superuser: {}", e);
            std::process::exit(1);
        }
    }
}
