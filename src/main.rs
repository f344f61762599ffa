use std::sync::Arc;

use clap::Parser;
use migration::{Migrator, MigratorTrait};
use poem::{listener::TcpListener, Route, Server};
use poem_openapi::OpenApiService;
use sea_orm::{Database, DatabaseConnection};

use taskhub_backend::api::{AdminApi, AuthApi, DashboardApi, HealthApi, TaskApi, UserApi};
use taskhub_backend::cli::{self, Cli, Commands};
use taskhub_backend::config::{init_logging, BootstrapSettings};
use taskhub_backend::AppData;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging()?;

    let settings = BootstrapSettings::from_env()?;

    let db: DatabaseConnection = Database::connect(settings.database_url()).await?;
    tracing::info!("Connected to database: {}", settings.database_url());

    Migrator::up(&db, None).await?;
    tracing::info!("Database migrations completed");

    let app_data = Arc::new(AppData::init(db, &settings));

    let command = Cli::parse().command.unwrap_or(Commands::Serve);
    match command {
        Commands::Seed => cli::seed::seed_demo_data(&app_data).await?,
        Commands::Serve => serve(app_data, &settings).await?,
    }

    Ok(())
}

async fn serve(
    app_data: Arc<AppData>,
    settings: &BootstrapSettings,
) -> Result<(), Box<dyn std::error::Error>> {
    let apis = (
        HealthApi,
        AuthApi::new(&app_data),
        DashboardApi::new(&app_data),
        TaskApi::new(&app_data),
        AdminApi::new(&app_data),
        UserApi::new(&app_data),
    );

    let api_service = OpenApiService::new(apis, "TaskHub API", env!("CARGO_PKG_VERSION")).server(
        format!("http://localhost:{}/api", settings.server_port()),
    );

    let ui = api_service.swagger_ui();

    let app = Route::new().nest("/api", api_service).nest("/swagger", ui);

    let bind_address = settings.bind_address();
    tracing::info!("Starting server on http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://localhost:{}/swagger",
        settings.server_port()
    );

    Server::new(TcpListener::bind(bind_address)).run(app).await?;
    Ok(())
}
