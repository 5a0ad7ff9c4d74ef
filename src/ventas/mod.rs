//! Ciclo de vida de una venta: COTIZACION -> ORDEN_VENTA -> FACTURADA -> PAGADA,
//! con RECHAZADA como salida desde la cotización.
//!
//! Las pantallas de ventas/cotizaciones deciden qué acciones ofrecer a partir
//! del estado; esas acciones salen de [`EstadoVenta::acciones`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::VentaError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EstadoVenta {
    Cotizacion,
    OrdenVenta,
    Facturada,
    Pagada,
    Rechazada,
}

/// Acción que la interfaz puede ofrecer sobre una venta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccionVenta {
    Editar,
    ConvertirEnOrden,
    Rechazar,
    Facturar,
    RegistrarPago,
}

impl EstadoVenta {
    pub const TODOS: [EstadoVenta; 5] = [
        EstadoVenta::Cotizacion,
        EstadoVenta::OrdenVenta,
        EstadoVenta::Facturada,
        EstadoVenta::Pagada,
        EstadoVenta::Rechazada,
    ];

    pub fn transiciones_validas(&self) -> &'static [EstadoVenta] {
        match self {
            EstadoVenta::Cotizacion => &[EstadoVenta::OrdenVenta, EstadoVenta::Rechazada],
            EstadoVenta::OrdenVenta => &[EstadoVenta::Facturada],
            EstadoVenta::Facturada => &[EstadoVenta::Pagada],
            EstadoVenta::Pagada | EstadoVenta::Rechazada => &[],
        }
    }

    pub fn puede_transicionar_a(&self, destino: EstadoVenta) -> bool {
        self.transiciones_validas().contains(&destino)
    }

    pub fn es_terminal(&self) -> bool {
        self.transiciones_validas().is_empty()
    }

    pub fn acciones(&self) -> Vec<AccionVenta> {
        match self {
            EstadoVenta::Cotizacion => vec![
                AccionVenta::Editar,
                AccionVenta::ConvertirEnOrden,
                AccionVenta::Rechazar,
            ],
            EstadoVenta::OrdenVenta => vec![AccionVenta::Facturar],
            EstadoVenta::Facturada => vec![AccionVenta::RegistrarPago],
            EstadoVenta::Pagada | EstadoVenta::Rechazada => Vec::new(),
        }
    }

    pub fn etiqueta(&self) -> &'static str {
        match self {
            EstadoVenta::Cotizacion => "COTIZACION",
            EstadoVenta::OrdenVenta => "ORDEN_VENTA",
            EstadoVenta::Facturada => "FACTURADA",
            EstadoVenta::Pagada => "PAGADA",
            EstadoVenta::Rechazada => "RECHAZADA",
        }
    }

    /// Lee una etiqueta (sin distinguir mayúsculas). `None` si no se reconoce.
    pub fn desde_etiqueta(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::TODOS.into_iter().find(|e| e.etiqueta().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for EstadoVenta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.etiqueta())
    }
}

/// Aplica una transición; falla si el destino no es sucesor legal del estado actual.
pub fn transicionar(actual: EstadoVenta, nuevo: EstadoVenta) -> Result<EstadoVenta, VentaError> {
    if !actual.puede_transicionar_a(nuevo) {
        return Err(VentaError::TransicionInvalida { desde: actual, hacia: nuevo });
    }
    Ok(nuevo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flujo_completo() {
        let mut estado = EstadoVenta::Cotizacion;
        for siguiente in [EstadoVenta::OrdenVenta, EstadoVenta::Facturada, EstadoVenta::Pagada] {
            estado = transicionar(estado, siguiente).expect("transición válida");
        }
        assert_eq!(estado, EstadoVenta::Pagada);
        assert!(estado.es_terminal());
    }

    #[test]
    fn test_rechazo_solo_desde_cotizacion() {
        assert!(EstadoVenta::Cotizacion.puede_transicionar_a(EstadoVenta::Rechazada));
        assert!(!EstadoVenta::OrdenVenta.puede_transicionar_a(EstadoVenta::Rechazada));
        assert!(!EstadoVenta::Facturada.puede_transicionar_a(EstadoVenta::Rechazada));
    }

    #[test]
    fn test_no_se_salta_estados() {
        let err = transicionar(EstadoVenta::Cotizacion, EstadoVenta::Facturada).unwrap_err();
        assert_eq!(
            err,
            VentaError::TransicionInvalida { desde: EstadoVenta::Cotizacion, hacia: EstadoVenta::Facturada }
        );
        assert!(transicionar(EstadoVenta::Pagada, EstadoVenta::Cotizacion).is_err());
    }

    #[test]
    fn test_etiquetas() {
        assert_eq!(EstadoVenta::desde_etiqueta(" orden_venta "), Some(EstadoVenta::OrdenVenta));
        assert_eq!(EstadoVenta::desde_etiqueta("ANULADA"), None);
        for e in EstadoVenta::TODOS {
            assert_eq!(EstadoVenta::desde_etiqueta(e.etiqueta()), Some(e));
            let json = serde_json::to_string(&e).unwrap();
            assert_eq!(json, format!("\"{}\"", e.etiqueta()));
        }
    }

    #[test]
    fn test_acciones() {
        assert_eq!(EstadoVenta::OrdenVenta.acciones(), vec![AccionVenta::Facturar]);
        assert!(EstadoVenta::Rechazada.acciones().is_empty());
        assert_eq!(
            serde_json::to_string(&AccionVenta::ConvertirEnOrden).unwrap(),
            "\"convertir_en_orden\""
        );
    }
}
