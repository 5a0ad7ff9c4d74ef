use actix_web::{HttpResponse, Responder};
use serde_json::json;

pub async fn help_handler() -> impl Responder {
    let ejemplo = json!({
        "fecha_inicio_plan": "2024-01-01",
        "fecha_fin_plan": "2024-06-30",
        "tareas": [
            {"id": 1, "nombre": "Levantamiento", "estado": "completada"},
            {"id": 2, "nombre": "Desarrollo", "detalles": [
                {"id": 10, "nombre": "Backend", "avance": 20, "fecha_inicio_plan": "2024-02-01", "fecha_fin_plan": "2024-02-10"},
                {"id": 11, "nombre": "Frontend", "avance": 80, "fecha_inicio_plan": "2024-02-05", "fecha_fin_plan": "2024-02-20", "es_hito": true}
            ]}
        ]
    });

    let help = json!({
        "description": "API de avance de proyectos. Los endpoints /proyectos/* reciben el proyecto como JSON (ver 'post_example') y nunca fallan por datos incompletos: lo que no se pueda leer cuenta como 0% o sin fecha.",
        "post_example": ejemplo,
        "endpoints": {
            "POST /proyectos/avance?decimales=N": "avance global 0-100 (N entre 0 y 2)",
            "POST /proyectos/rango-plan": "inicio y fin planificados",
            "POST /proyectos/gantt": "filas numeradas de tareas y detalles (acepta un arreglo de tareas o un proyecto)",
            "POST /proyectos/resumen?decimales=N": "avance, rango de plan y filas gantt",
            "GET /ventas/acciones?estado=COTIZACION": "acciones disponibles para una venta",
            "POST /ventas/transicion": "{\"estado_actual\": \"COTIZACION\", \"estado_nuevo\": \"ORDEN_VENTA\"}"
        },
        "estados_venta": ["COTIZACION", "ORDEN_VENTA", "FACTURADA", "PAGADA", "RECHAZADA"]
    });

    HttpResponse::Ok().json(help)
}
