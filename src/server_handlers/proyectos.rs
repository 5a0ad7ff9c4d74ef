use std::collections::HashMap;

use actix_web::{web, HttpResponse};
use serde_json::{json, Value};
use tracing::debug;

use crate::avance::{calcular_avance_proyecto, calcular_rango_plan};
use crate::config::Config;
use crate::error::ApiError;
use crate::gantt::{construir_filas_gantt, construir_filas_gantt_desde_valor};
use crate::models::Proyecto;

/// `?decimales=N`; si falta se usa el valor configurado.
fn leer_decimales(query: &HashMap<String, String>, config: &Config) -> Result<i32, ApiError> {
    match query.get("decimales").map(|s| s.trim()).filter(|s| !s.is_empty()) {
        None => Ok(config.decimales),
        Some(s) => s.parse::<i32>().map_err(|_| ApiError::ParametroInvalido {
            nombre: "decimales",
            valor: s.to_string(),
        }),
    }
}

/// POST /proyectos/avance
pub async fn avance_handler(
    body: web::Json<Value>,
    query: web::Query<HashMap<String, String>>,
    config: web::Data<Config>,
) -> Result<HttpResponse, ApiError> {
    let decimales = leer_decimales(&query, &config)?;
    let proyecto = Proyecto::desde_valor(body.into_inner());
    let avance = calcular_avance_proyecto(&proyecto, decimales);
    debug!(avance, decimales, "avance de proyecto calculado");
    Ok(HttpResponse::Ok().json(json!({"avance": avance})))
}

/// POST /proyectos/rango-plan
pub async fn rango_plan_handler(body: web::Json<Value>) -> HttpResponse {
    let proyecto = Proyecto::desde_valor(body.into_inner());
    let rango = calcular_rango_plan(&proyecto);
    debug!(?rango, "rango de plan calculado");
    HttpResponse::Ok().json(rango)
}

/// POST /proyectos/gantt
/// Acepta un arreglo de tareas o un proyecto (se usan sus `tareas`).
pub async fn gantt_handler(body: web::Json<Value>) -> HttpResponse {
    let filas = construir_filas_gantt_desde_valor(body.into_inner());
    debug!(filas = filas.len(), "filas gantt construidas");
    HttpResponse::Ok().json(json!({"filas": filas}))
}

/// POST /proyectos/resumen
/// Avance, rango de plan y filas Gantt de un proyecto en una sola llamada.
pub async fn resumen_handler(
    body: web::Json<Value>,
    query: web::Query<HashMap<String, String>>,
    config: web::Data<Config>,
) -> Result<HttpResponse, ApiError> {
    let decimales = leer_decimales(&query, &config)?;
    let proyecto = Proyecto::desde_valor(body.into_inner());

    let avance = calcular_avance_proyecto(&proyecto, decimales);
    let rango = calcular_rango_plan(&proyecto);
    let filas = construir_filas_gantt(&proyecto.tareas);
    debug!(avance, filas = filas.len(), "resumen de proyecto calculado");

    Ok(HttpResponse::Ok().json(json!({
        "avance": avance,
        "rango_plan": rango,
        "filas_gantt": filas
    })))
}
