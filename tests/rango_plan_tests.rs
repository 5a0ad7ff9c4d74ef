use chrono::{TimeZone, Utc};
use proyectos::avance::calcular_rango_plan;
use proyectos::models::Proyecto;
use serde_json::json;

#[test]
fn test_min_inicio_max_fin() {
    let p = Proyecto::desde_valor(json!({
        "tareas": [
            {"fecha_inicio_plan": "2024-03-01", "fecha_fin_plan": "2024-03-15"},
            {"detalles": [
                {"fecha_inicio_plan": "2024-02-10", "fecha_fin_plan": "2024-02-12"},
                {"fecha_inicio_plan": "2024-04-01"}
            ]}
        ]
    }));
    let r = calcular_rango_plan(&p);
    assert_eq!(r.inicio, Some(Utc.with_ymd_and_hms(2024, 2, 10, 0, 0, 0).unwrap()));
    assert_eq!(r.fin, Some(Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap()));
}

#[test]
fn test_tarea_con_detalles_ignora_sus_fechas() {
    let p = Proyecto::desde_valor(json!({
        "tareas": [{
            "fecha_inicio_plan": "2023-01-01",
            "fecha_fin_plan": "2025-12-31",
            "detalles": [{"fecha_inicio_plan": "2024-06-01", "fecha_fin_plan": "2024-06-30"}]
        }]
    }));
    let r = calcular_rango_plan(&p);
    assert_eq!(r.inicio, Some(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()));
    assert_eq!(r.fin, Some(Utc.with_ymd_and_hms(2024, 6, 30, 0, 0, 0).unwrap()));
}

#[test]
fn test_mismo_recorrido_que_el_avance() {
    let p = Proyecto::desde_valor(json!({
        "epicas": [{"tareas": [{"fecha_inicio_plan": "2024-05-01", "fecha_fin_plan": "2024-05-31"}]}],
        "tareas": [{"fecha_inicio_plan": "2020-01-01", "fecha_fin_plan": "2030-01-01"}]
    }));
    let r = calcular_rango_plan(&p);
    assert_eq!(r.inicio, Some(Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap()));
    assert_eq!(r.fin, Some(Utc.with_ymd_and_hms(2024, 5, 31, 0, 0, 0).unwrap()));
}

#[test]
fn test_respaldo_en_fechas_del_proyecto() {
    let p = Proyecto::desde_valor(json!({
        "fecha_inicio_plan": "2024-01-01",
        "fecha_fin_plan": "2024-12-31",
        "tareas": [{"fecha_inicio_plan": "sin fecha"}, {"detalles": [{"fecha_fin_plan": "??"}]}]
    }));
    let r = calcular_rango_plan(&p);
    assert_eq!(r.inicio, Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()));
    assert_eq!(r.fin, Some(Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap()));

    let sin_nada = Proyecto::desde_valor(json!({"tareas": [{"fecha_inicio_plan": "x"}]}));
    let r = calcular_rango_plan(&sin_nada);
    assert_eq!(r.inicio, None);
    assert_eq!(r.fin, None);
}

#[test]
fn test_serializa_como_iso() {
    let p = Proyecto::desde_valor(json!({"tareas": [{"fecha_inicio_plan": "2024-02-01", "fecha_fin_plan": "2024-02-20"}]}));
    let v = serde_json::to_value(calcular_rango_plan(&p)).unwrap();
    assert_eq!(v, json!({"inicio": "2024-02-01T00:00:00Z", "fin": "2024-02-20T00:00:00Z"}));

    let vacio = serde_json::to_value(calcular_rango_plan(&Proyecto::default())).unwrap();
    assert_eq!(vacio, json!({"inicio": null, "fin": null}));
}
