use anyhow::Result;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info, warn};
use dotenvy::dotenv;

use f1_stats_api::config::{DatabaseConfig, EnvironmentConfig};
use f1_stats_api::database::DatabaseConnection;
use f1_stats_api::create_app;
use f1_stats_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();
    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.tracing_level())
        .init();

    info!("🏎️  F1 Stats API");
    info!("================================================");

    if config.is_production() && config.cors_origins.is_empty() {
        warn!("⚠️  CORS_ORIGINS vacío en producción: se acepta cualquier origen");
    }

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new(&DatabaseConfig::new(&config.database_url)).await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error abriendo el dataset: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let pool = db_connection.pool().clone();
    let addr: SocketAddr = config.server_url().parse()?;

    let app = create_app(AppState::new(pool, config));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("👤 Drivers:");
    info!("   GET  /drivers - Listar pilotos");
    info!("   GET  /drivers/:driver_id - Obtener piloto");
    info!("   GET  /drivers/:driver_id/seasons/:year - Resumen de temporada");
    info!("🏁 Races:");
    info!("   GET  /races - Carreras de una temporada (por defecto la última)");
    info!("   GET  /races/:race_id - Obtener carrera con su circuito");
    info!("   GET  /races/:race_id/results - Resultados de la carrera");
    info!("🏆 Seasons:");
    info!("   GET  /seasons - Rango de temporadas");
    info!("   GET  /seasons/:year/driver-standings - Clasificación de pilotos");
    info!("   GET  /seasons/:year/constructor-standings - Clasificación de constructores");
    info!("🔧 Constructors:");
    info!("   GET  /constructors - Listar constructores");
    info!("   GET  /constructors/:constructor_id - Obtener constructor");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Servidor terminó con error: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
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
