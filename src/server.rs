use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use tracing::{info, warn};

use crate::config::Config;
use crate::error::ApiError;
use crate::server_handlers::{
    acciones_venta_handler, avance_handler, gantt_handler, help_handler, rango_plan_handler,
    resumen_handler, transicion_venta_handler,
};

/// Registra las rutas de la API. Requiere `web::Data<Config>` en la aplicación.
pub fn configurar_rutas(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        warn!(error = %err, "cuerpo JSON rechazado");
        ApiError::CuerpoInvalido(err.to_string()).into()
    }))
    .route("/proyectos/avance", web::post().to(avance_handler))
    .route("/proyectos/rango-plan", web::post().to(rango_plan_handler))
    .route("/proyectos/gantt", web::post().to(gantt_handler))
    .route("/proyectos/resumen", web::post().to(resumen_handler))
    .route("/ventas/acciones", web::get().to(acciones_venta_handler))
    .route("/ventas/transicion", web::post().to(transicion_venta_handler))
    .route("/help", web::get().to(help_handler));
}

fn cors(origen: Option<&str>) -> Cors {
    let base = match origen {
        Some(o) => Cors::default().allowed_origin(o),
        None => Cors::default().allow_any_origin(),
    };
    base.allowed_methods(vec!["GET", "POST"])
        .allow_any_header()
        .max_age(3600)
}

pub async fn run_server(config: Config) -> std::io::Result<()> {
    let bind = config.bind.clone();
    let workers = config.workers;
    info!(%bind, workers, cors = ?config.cors_origin, "iniciando servidor");

    let datos = web::Data::new(config);
    HttpServer::new(move || {
        App::new()
            .app_data(datos.clone())
            .wrap(cors(datos.cors_origin.as_deref()))
            .wrap(Logger::default())
            .configure(configurar_rutas)
    })
    .workers(workers)
    .bind(bind)?
    .run()
    .await
}
