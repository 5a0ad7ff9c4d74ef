// --- Avance de proyectos - servidor HTTP ---

use proyectos::{run_server, Config};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match Config::desde_entorno() {
        Ok(c) => c,
        Err(e) => {
            error!(error = %e, "configuración inválida");
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e));
        }
    };

    run_server(config).await
}
