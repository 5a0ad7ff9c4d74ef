use std::collections::HashMap;

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use crate::error::ApiError;
use crate::ventas::{transicionar, EstadoVenta};

#[derive(Debug, Deserialize)]
pub struct SolicitudTransicion {
    pub estado_actual: String,
    pub estado_nuevo: String,
}

fn leer_estado(nombre: &'static str, valor: &str) -> Result<EstadoVenta, ApiError> {
    EstadoVenta::desde_etiqueta(valor).ok_or_else(|| ApiError::ParametroInvalido {
        nombre,
        valor: valor.to_string(),
    })
}

/// GET /ventas/acciones?estado=COTIZACION
pub async fn acciones_venta_handler(
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, ApiError> {
    let raw = query.get("estado").ok_or(ApiError::ParametroFaltante("estado"))?;
    let estado = leer_estado("estado", raw)?;
    Ok(HttpResponse::Ok().json(json!({
        "estado": estado,
        "acciones": estado.acciones(),
        "terminal": estado.es_terminal()
    })))
}

/// POST /ventas/transicion
pub async fn transicion_venta_handler(
    body: web::Json<SolicitudTransicion>,
) -> Result<HttpResponse, ApiError> {
    let actual = leer_estado("estado_actual", &body.estado_actual)?;
    let nuevo = leer_estado("estado_nuevo", &body.estado_nuevo)?;
    let estado = transicionar(actual, nuevo).inspect_err(|e| warn!(error = %e, "transición de venta rechazada"))?;
    Ok(HttpResponse::Ok().json(json!({
        "estado": estado,
        "acciones": estado.acciones()
    })))
}
