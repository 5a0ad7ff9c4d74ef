// Errores de las capas externas (configuración, HTTP, ventas). El cálculo de
// avance y Gantt no tiene errores: degrada la entrada inválida a valores neutros.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use crate::ventas::EstadoVenta;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("valor inválido para {variable}: '{valor}'")]
    Invalida { variable: &'static str, valor: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VentaError {
    #[error("transición inválida de {desde} a {hacia}")]
    TransicionInvalida { desde: EstadoVenta, hacia: EstadoVenta },
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("cuerpo JSON inválido: {0}")]
    CuerpoInvalido(String),
    #[error("parámetro '{nombre}' inválido: '{valor}'")]
    ParametroInvalido { nombre: &'static str, valor: String },
    #[error("falta el parámetro '{0}'")]
    ParametroFaltante(&'static str),
    #[error(transparent)]
    Venta(#[from] VentaError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::CuerpoInvalido(_)
            | ApiError::ParametroInvalido { .. }
            | ApiError::ParametroFaltante(_) => StatusCode::BAD_REQUEST,
            ApiError::Venta(_) => StatusCode::CONFLICT,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({"error": self.to_string()}))
    }
}
