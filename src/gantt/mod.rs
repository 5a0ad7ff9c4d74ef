//! Aplanado de tareas y detalles en filas numeradas para la línea de tiempo.
//!
//! El orden de salida es parte del contrato: cada tarea va seguida de todos sus
//! detalles en el orden original, y luego la tarea siguiente. No se reordena
//! por fecha.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::avance::utilidades::{clamp_porcentaje, fecha};
use crate::models::{Estado, Subtarea, Tarea, tareas_desde_valor};

/// Fila de tarea: la tarea original con las fechas de plan que se muestran.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilaTarea {
    #[serde(flatten)]
    pub tarea: Tarea,
    pub numero: String,
    #[serde(rename = "isDetalle")]
    pub is_detalle: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilaDetalle {
    pub id: Value,
    pub tarea_id: Value,
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
    pub responsable: Value,
    pub fecha_inicio_plan: Option<String>,
    pub fecha_fin_plan: Option<String>,
    pub avance: f64,
    pub estado: String,
    pub es_hito: bool,
    pub numero: String,
    #[serde(rename = "isDetalle")]
    pub is_detalle: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FilaGantt {
    Tarea(FilaTarea),
    Detalle(FilaDetalle),
}

impl FilaGantt {
    pub fn numero(&self) -> &str {
        match self {
            FilaGantt::Tarea(f) => &f.numero,
            FilaGantt::Detalle(f) => &f.numero,
        }
    }

    pub fn es_detalle(&self) -> bool {
        matches!(self, FilaGantt::Detalle(_))
    }

    pub fn fecha_inicio_plan(&self) -> Option<&str> {
        match self {
            FilaGantt::Tarea(f) => f.tarea.fecha_inicio_plan.as_deref(),
            FilaGantt::Detalle(f) => f.fecha_inicio_plan.as_deref(),
        }
    }

    pub fn fecha_fin_plan(&self) -> Option<&str> {
        match self {
            FilaGantt::Tarea(f) => f.tarea.fecha_fin_plan.as_deref(),
            FilaGantt::Detalle(f) => f.fecha_fin_plan.as_deref(),
        }
    }
}

/// Rango que abarcan los detalles con inicio legible, como los textos
/// originales que dieron el mínimo y el máximo.
fn rango_de_detalles(detalles: &[Subtarea]) -> Option<(String, String)> {
    let mut inicio: Option<(DateTime<Utc>, &str)> = None;
    let mut fin: Option<(DateTime<Utc>, &str)> = None;

    for d in detalles {
        let Some(raw_inicio) = d.fecha_inicio_plan.as_deref() else { continue };
        let Some(ini) = fecha(Some(raw_inicio)) else { continue };
        // fin ilegible o ausente -> se usa el inicio del mismo detalle
        let (f, raw_fin) = match d.fecha_fin_plan.as_deref() {
            Some(raw) => match fecha(Some(raw)) {
                Some(f) => (f, raw),
                None => (ini, raw_inicio),
            },
            None => (ini, raw_inicio),
        };

        if inicio.is_none_or(|(actual, _)| ini < actual) {
            inicio = Some((ini, raw_inicio));
        }
        if fin.is_none_or(|(actual, _)| f > actual) {
            fin = Some((f, raw_fin));
        }
    }

    match (inicio, fin) {
        (Some((_, i)), Some((_, f))) => Some((i.to_string(), f.to_string())),
        _ => None,
    }
}

/// Avance mostrado en la fila de un detalle. Usa la clasificación estricta de
/// estados (solo `completada` y `en_progreso`), distinta de la del rollup.
fn avance_fila_detalle(detalle: &Subtarea) -> f64 {
    match detalle.avance {
        Some(a) => clamp_porcentaje(a),
        None => Estado::desde_texto_estricto(detalle.estado.as_deref()).porcentaje(),
    }
}

fn fila_detalle(detalle: &Subtarea, padre: &Tarea, numero: String) -> FilaDetalle {
    let tarea_id = if detalle.tarea_id.is_null() { padre.id.clone() } else { detalle.tarea_id.clone() };
    FilaDetalle {
        id: detalle.id.clone(),
        tarea_id,
        nombre: detalle.nombre.clone().or_else(|| detalle.titulo.clone()),
        descripcion: detalle.descripcion.clone(),
        responsable: detalle.responsable.clone(),
        fecha_inicio_plan: detalle.fecha_inicio_plan.clone(),
        fecha_fin_plan: detalle.fecha_fin_plan.clone(),
        avance: avance_fila_detalle(detalle),
        estado: detalle.estado.clone().unwrap_or_else(|| "pendiente".to_string()),
        es_hito: detalle.es_hito.unwrap_or(false),
        numero,
        is_detalle: true,
    }
}

/// Construye las filas Gantt de una lista de tareas.
///
/// Tarea `i` -> fila `"{i+1}"`; su detalle `j` -> fila `"{i+1}.{j+1}"`. Si algún
/// detalle tiene inicio legible, las fechas mostradas de la tarea son las que
/// abarcan sus detalles, reemplazando las guardadas en la tarea.
pub fn construir_filas_gantt(tareas: &[Tarea]) -> Vec<FilaGantt> {
    let mut filas = Vec::with_capacity(tareas.iter().map(|t| 1 + t.detalles.len()).sum());

    for (i, tarea) in tareas.iter().enumerate() {
        let numero_tarea = format!("{}", i + 1);

        let mut mostrada = tarea.clone();
        if let Some((inicio, fin)) = rango_de_detalles(&tarea.detalles) {
            mostrada.fecha_inicio_plan = Some(inicio);
            mostrada.fecha_fin_plan = Some(fin);
        }
        // evitar claves duplicadas al serializar la fila
        mostrada.extra.remove("numero");
        mostrada.extra.remove("isDetalle");

        filas.push(FilaGantt::Tarea(FilaTarea {
            tarea: mostrada,
            numero: numero_tarea.clone(),
            is_detalle: false,
        }));

        for (j, detalle) in tarea.detalles.iter().enumerate() {
            let numero = format!("{}.{}", numero_tarea, j + 1);
            filas.push(FilaGantt::Detalle(fila_detalle(detalle, tarea, numero)));
        }
    }

    filas
}

/// Variante sobre JSON crudo: un arreglo de tareas o un proyecto (se usan sus
/// `tareas`). Cualquier otra entrada produce cero filas.
pub fn construir_filas_gantt_desde_valor(valor: Value) -> Vec<FilaGantt> {
    construir_filas_gantt(&tareas_desde_valor(valor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tareas(v: Value) -> Vec<Tarea> {
        tareas_desde_valor(v)
    }

    #[test]
    fn test_detalle_hereda_tarea_id_y_titulo() {
        let filas = construir_filas_gantt(&tareas(json!([
            {"id": 9, "detalles": [{"id": 1, "titulo": "Cimientos"}, {"id": 2, "tarea_id": 55, "nombre": "Muros", "titulo": "x"}]}
        ])));
        let FilaGantt::Detalle(d1) = &filas[1] else { panic!("se esperaba detalle") };
        assert_eq!(d1.tarea_id, json!(9));
        assert_eq!(d1.nombre.as_deref(), Some("Cimientos"));
        assert_eq!(d1.estado, "pendiente");
        assert!(!d1.es_hito);

        let FilaGantt::Detalle(d2) = &filas[2] else { panic!("se esperaba detalle") };
        assert_eq!(d2.tarea_id, json!(55));
        assert_eq!(d2.nombre.as_deref(), Some("Muros"));
    }

    #[test]
    fn test_avance_detalle_usa_mapeo_estricto() {
        let filas = construir_filas_gantt(&tareas(json!([
            {"detalles": [
                {"estado": "completada"},
                {"estado": "cerrada"},
                {"estado": "en_progreso"},
                {"avance": 20, "estado": "completada"}
            ]}
        ])));
        let avances: Vec<f64> = filas
            .iter()
            .filter_map(|f| match f {
                FilaGantt::Detalle(d) => Some(d.avance),
                _ => None,
            })
            .collect();
        assert_eq!(avances, vec![100.0, 0.0, 50.0, 20.0]);
    }

    #[test]
    fn test_detalles_sin_inicio_no_cambian_fechas() {
        let filas = construir_filas_gantt(&tareas(json!([
            {"fecha_inicio_plan": "2024-01-01", "fecha_fin_plan": "2024-01-31",
             "detalles": [{"fecha_fin_plan": "2024-06-01"}, {"fecha_inicio_plan": "??"}]}
        ])));
        assert_eq!(filas[0].fecha_inicio_plan(), Some("2024-01-01"));
        assert_eq!(filas[0].fecha_fin_plan(), Some("2024-01-31"));
    }

    #[test]
    fn test_entrada_no_lista() {
        assert!(construir_filas_gantt_desde_valor(json!(42)).is_empty());
        assert!(construir_filas_gantt_desde_valor(json!(null)).is_empty());
        assert_eq!(construir_filas_gantt_desde_valor(json!({"tareas": [{}]})).len(), 1);
    }
}
