use chrono::{DateTime, Utc};

use crate::avance::utilidades::fecha;
use crate::models::{Proyecto, RangoPlan, Tarea};

type Par = (Option<DateTime<Utc>>, Option<DateTime<Utc>>);

/// Pares (inicio, fin) que aporta una tarea: uno por detalle si los tiene
/// (el fin del detalle cae a su inicio), o el de la propia tarea.
fn pares_de_tarea(tarea: &Tarea) -> Vec<Par> {
    if tarea.detalles.is_empty() {
        return vec![(
            fecha(tarea.fecha_inicio_plan.as_deref()),
            fecha(tarea.fecha_fin_plan.as_deref()),
        )];
    }
    tarea
        .detalles
        .iter()
        .map(|d| {
            let inicio = fecha(d.fecha_inicio_plan.as_deref());
            let fin = fecha(d.fecha_fin_plan.as_deref()).or(inicio);
            (inicio, fin)
        })
        .collect()
}

/// Rango planificado del proyecto: inicio mínimo y fin máximo de la misma
/// jerarquía que usa el cálculo de avance.
///
/// Las fechas ilegibles se descartan. Si la jerarquía no aporta ninguna fecha
/// se usan las fechas de plan del propio proyecto; si tampoco existen, el
/// rango queda vacío.
pub fn calcular_rango_plan(proyecto: &Proyecto) -> RangoPlan {
    let pares: Vec<Par> = proyecto
        .tareas_en_jerarquia()
        .into_iter()
        .flat_map(pares_de_tarea)
        .collect();

    let inicio = pares.iter().filter_map(|(i, _)| *i).min();
    let fin = pares.iter().filter_map(|(_, f)| *f).max();

    if inicio.is_none() && fin.is_none() {
        return RangoPlan {
            inicio: fecha(proyecto.fecha_inicio_plan.as_deref()),
            fin: fecha(proyecto.fecha_fin_plan.as_deref()),
        };
    }
    RangoPlan { inicio, fin }
}
