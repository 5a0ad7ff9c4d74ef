use crate::avance::utilidades::{clamp_porcentaje, redondear_porcentaje};
use crate::models::{Epica, Estado, Jerarquia, Proyecto, Subtarea, Tarea};

/// Promedio aritmético simple; 0 si no hay elementos.
fn promedio<I: IntoIterator<Item = f64>>(valores: I) -> f64 {
    let (suma, n) = valores
        .into_iter()
        .fold((0.0, 0usize), |(suma, n), v| (suma + v, n + 1));
    if n == 0 { 0.0 } else { suma / n as f64 }
}

/// `avance` numérico si existe; si no, el porcentaje del `estado`.
fn avance_o_estado(avance: Option<f64>, estado: Option<&str>) -> f64 {
    match avance {
        Some(a) => clamp_porcentaje(a),
        None => Estado::desde_texto(estado).porcentaje(),
    }
}

pub fn avance_subtarea(subtarea: &Subtarea) -> f64 {
    avance_o_estado(subtarea.avance, subtarea.estado.as_deref())
}

/// Avance de una tarea. Con detalles, sale exclusivamente de ellos y se
/// ignoran `avance`/`estado` de la propia tarea.
pub fn avance_tarea(tarea: &Tarea) -> f64 {
    if tarea.detalles.is_empty() {
        return avance_o_estado(tarea.avance, tarea.estado.as_deref());
    }
    clamp_porcentaje(promedio(tarea.detalles.iter().map(avance_subtarea)))
}

/// Promedio de sus tareas; una épica sin tareas vale 0.
pub fn avance_epica(epica: &Epica) -> f64 {
    clamp_porcentaje(promedio(epica.tareas.iter().map(avance_tarea)))
}

/// Avance global del proyecto en [0, 100], redondeado a `decimales`
/// (acotado a 0..=2).
///
/// Si el proyecto tiene épicas se promedian las épicas y las tareas sueltas no
/// cuentan; si no, se promedian las tareas; sin ninguna de las dos vale 0.
pub fn calcular_avance_proyecto(proyecto: &Proyecto, decimales: i32) -> f64 {
    match proyecto.jerarquia() {
        Jerarquia::Epicas(epicas) => {
            redondear_porcentaje(promedio(epicas.iter().map(avance_epica)), decimales)
        }
        Jerarquia::Tareas(tareas) => {
            redondear_porcentaje(promedio(tareas.iter().map(avance_tarea)), decimales)
        }
        Jerarquia::Vacia => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tarea(v: serde_json::Value) -> Tarea {
        serde_json::from_value(v).expect("tarea de prueba")
    }

    #[test]
    fn test_promedio_vacio() {
        assert_eq!(promedio(Vec::new()), 0.0);
        assert_eq!(promedio(vec![10.0, 20.0]), 15.0);
    }

    #[test]
    fn test_subtarea_avance_sobre_estado() {
        let s: Subtarea = serde_json::from_value(json!({"avance": 30, "estado": "completada"})).unwrap();
        assert_eq!(avance_subtarea(&s), 30.0);
        let s: Subtarea = serde_json::from_value(json!({"avance": 130})).unwrap();
        assert_eq!(avance_subtarea(&s), 100.0);
        let s: Subtarea = serde_json::from_value(json!({"estado": "Cerrada"})).unwrap();
        assert_eq!(avance_subtarea(&s), 100.0);
    }

    #[test]
    fn test_tarea_ignora_sus_campos_con_detalles() {
        let t = tarea(json!({
            "avance": 100,
            "estado": "completada",
            "detalles": [{"estado": "pendiente"}, {"estado": "en curso"}]
        }));
        assert_eq!(avance_tarea(&t), 25.0);
    }

    #[test]
    fn test_epica_sin_tareas_vale_cero() {
        assert_eq!(avance_epica(&Epica::default()), 0.0);
    }

    #[test]
    fn test_decimales() {
        let p = Proyecto::desde_valor(json!({"tareas": [{"avance": 100}, {"avance": 0}, {"avance": 0}]}));
        assert_eq!(calcular_avance_proyecto(&p, 0), 33.0);
        assert_eq!(calcular_avance_proyecto(&p, 2), 33.33);
        assert_eq!(calcular_avance_proyecto(&p, 7), 33.33);
    }
}
