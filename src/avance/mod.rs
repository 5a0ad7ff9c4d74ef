//! Cálculo de avance y rango de plan de un proyecto.
//!
//! Todo es puro y síncrono: cada función depende solo de su entrada y nunca
//! falla. La entrada mal formada se degrada a 0% o a "sin fecha".

pub mod calculo;
pub mod rango;
pub mod utilidades;

pub use calculo::{avance_epica, avance_subtarea, avance_tarea, calcular_avance_proyecto};
pub use rango::calcular_rango_plan;
pub use utilidades::{clamp_porcentaje, parsear_fecha, valor_a_numero, redondear_porcentaje};
