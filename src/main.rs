use std::sync::Arc;

use anyhow::{anyhow, Result};
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};

use car_registry::clients::{CarInfoClient, CarInfoProvider, MockCarInfoClient};
use car_registry::config::EnvironmentConfig;
use car_registry::database::DatabaseConnection;
use car_registry::routes::create_app;
use car_registry::services::ServiceConfig;
use car_registry::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("🚗 Car Registry API");
    info!("==================");

    // Inicializar base de datos
    let db_connection = DatabaseConnection::connect(&config.database()).await?;
    db_connection.migrate().await?;

    let car_info = car_info_provider(&config)?;
    let state = AppState::with_postgres(
        db_connection.pool().clone(),
        car_info,
        ServiceConfig {
            lookup_concurrency: config.car_info_concurrency,
        },
    );

    let app = create_app(state, &config.cors_origins, config.http_timeout);

    info!("🌐 Servidor iniciando en http://{}", config.http_address);
    info!("🔍 Endpoints disponibles:");
    info!("   GET    /health");
    info!("   GET    /api/cars");
    info!("   POST   /api/cars");
    info!("   PATCH  /api/cars/:id");
    info!("   DELETE /api/cars/:id");

    let listener = tokio::net::TcpListener::bind(config.http_address).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

fn car_info_provider(config: &EnvironmentConfig) -> Result<Arc<dyn CarInfoProvider>> {
    if config.car_info_mock {
        info!("🧪 Usando información de vehículos simulada");
        return Ok(Arc::new(MockCarInfoClient::new()));
    }

    let url = config
        .car_info_url
        .as_deref()
        .ok_or_else(|| anyhow!("API_CAR_INFO must be set"))?;
    info!("🔗 Servicio de información de vehículos: {}", url);

    Ok(Arc::new(CarInfoClient::new(url)))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
