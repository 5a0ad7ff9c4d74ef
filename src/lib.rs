// Biblioteca raíz del crate `proyectos`.
// Cálculo de avance, rango de plan y filas Gantt de proyectos del ERP, más el
// ciclo de vida de ventas y el servidor HTTP que los expone.
pub mod models;
pub mod avance;
pub mod gantt;
pub mod ventas;
pub mod config;
pub mod error;
pub mod server;
mod server_handlers;

pub use avance::{calcular_avance_proyecto, calcular_rango_plan};
pub use config::Config;
pub use gantt::{construir_filas_gantt, FilaGantt};
/// Ejecuta el servidor HTTP (reexport para facilitar uso desde `main`)
pub use server::run_server;
