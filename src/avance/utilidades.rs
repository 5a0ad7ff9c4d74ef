// Utilidades de porcentaje y fecha. Ninguna falla: la entrada inválida se
// degrada a 0 (porcentajes) o a `None` (fechas).

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

/// Formatos sin zona horaria aceptados; se interpretan como UTC.
const FORMATOS_FECHA_HORA: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Limita `n` al intervalo [0, 100]; valores no finitos valen 0.
pub fn clamp_porcentaje(n: f64) -> f64 {
    if !n.is_finite() {
        return 0.0;
    }
    n.clamp(0.0, 100.0)
}

/// Convierte un valor JSON a número: números y textos numéricos finitos.
/// "NaN", "inf" y similares no cuentan como número.
pub fn valor_a_numero(valor: &Value) -> Option<f64> {
    match valor {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                return None;
            }
            s.parse::<f64>().ok().filter(|n| n.is_finite())
        }
        _ => None,
    }
}

/// Limita y redondea a `decimales` dígitos; `decimales` se acota a [0, 2].
pub fn redondear_porcentaje(n: f64, decimales: i32) -> f64 {
    let factor = 10f64.powi(decimales.clamp(0, 2));
    (clamp_porcentaje(n) * factor).round() / factor
}

/// Interpreta una fecha ISO-8601. Devuelve `None` si no se puede leer.
pub fn parsear_fecha(raw: &str) -> Option<DateTime<Utc>> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for formato in FORMATOS_FECHA_HORA {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, formato) {
            return Some(ndt.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|ndt| ndt.and_utc())
}

/// Atajo para campos opcionales.
pub fn fecha(raw: Option<&str>) -> Option<DateTime<Utc>> {
    raw.and_then(parsear_fecha)
}
