// Estructuras de datos principales: snapshot de un proyecto tal como llega
// desde el backend REST (proyecto -> épicas -> tareas -> detalles).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub mod flexible;

/// Subtarea ("detalle"): la unidad más fina con avance y fechas de plan propias.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Subtarea {
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub id: Value,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub tarea_id: Value,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "flexible::texto")]
    pub nombre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "flexible::texto")]
    pub titulo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "flexible::texto")]
    pub descripcion: Option<String>,
    /// Referencia opaca al responsable (id u objeto, según el backend)
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub responsable: Value,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "flexible::numero")]
    pub avance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "flexible::texto")]
    pub estado: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "flexible::booleano")]
    pub es_hito: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "flexible::texto")]
    pub fecha_inicio_plan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "flexible::texto")]
    pub fecha_fin_plan: Option<String>,
}

/// Tarea: unidad de trabajo, opcionalmente dividida en detalles.
///
/// Los campos que este módulo no interpreta se conservan en `extra` para que
/// la fila Gantt de la tarea pueda reemitir el objeto original completo.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tarea {
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub id: Value,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "flexible::texto")]
    pub nombre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "flexible::texto")]
    pub titulo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "flexible::texto")]
    pub descripcion: Option<String>,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub responsable: Value,
    #[serde(default, deserialize_with = "flexible::lista")]
    pub detalles: Vec<Subtarea>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "flexible::numero")]
    pub avance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "flexible::texto")]
    pub estado: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "flexible::texto")]
    pub fecha_inicio_plan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "flexible::texto")]
    pub fecha_fin_plan: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Epica {
    #[serde(default)]
    pub id: Value,
    #[serde(default, deserialize_with = "flexible::texto")]
    pub nombre: Option<String>,
    #[serde(default, deserialize_with = "flexible::lista")]
    pub tareas: Vec<Tarea>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Proyecto {
    #[serde(default)]
    pub id: Value,
    #[serde(default, deserialize_with = "flexible::texto")]
    pub nombre: Option<String>,
    #[serde(default, deserialize_with = "flexible::lista")]
    pub epicas: Vec<Epica>,
    #[serde(default, deserialize_with = "flexible::lista")]
    pub tareas: Vec<Tarea>,
    #[serde(default, deserialize_with = "flexible::texto")]
    pub fecha_inicio_plan: Option<String>,
    #[serde(default, deserialize_with = "flexible::texto")]
    pub fecha_fin_plan: Option<String>,
}

/// Rama de la jerarquía que se recorre para un proyecto.
#[derive(Debug, Clone, Copy)]
pub enum Jerarquia<'a> {
    Epicas(&'a [Epica]),
    Tareas(&'a [Tarea]),
    Vacia,
}

impl Proyecto {
    /// Construye un proyecto desde cualquier valor JSON. Lo que no sea un
    /// objeto produce un proyecto vacío.
    pub fn desde_valor(valor: Value) -> Self {
        serde_json::from_value(valor).unwrap_or_default()
    }

    /// Las épicas tienen precedencia: si existen, las tareas sueltas se ignoran.
    /// Avance y rango de plan usan este mismo recorrido.
    pub fn jerarquia(&self) -> Jerarquia<'_> {
        if !self.epicas.is_empty() {
            Jerarquia::Epicas(&self.epicas)
        } else if !self.tareas.is_empty() {
            Jerarquia::Tareas(&self.tareas)
        } else {
            Jerarquia::Vacia
        }
    }

    /// Todas las tareas que entran al cálculo, en orden.
    pub fn tareas_en_jerarquia(&self) -> Vec<&Tarea> {
        match self.jerarquia() {
            Jerarquia::Epicas(epicas) => epicas.iter().flat_map(|e| e.tareas.iter()).collect(),
            Jerarquia::Tareas(tareas) => tareas.iter().collect(),
            Jerarquia::Vacia => Vec::new(),
        }
    }
}

/// Lista de tareas a partir de un valor JSON: un arreglo de tareas, o un
/// objeto proyecto del que se toman sus `tareas`. Cualquier otra cosa es vacía.
pub fn tareas_desde_valor(valor: Value) -> Vec<Tarea> {
    match valor {
        Value::Array(_) => flexible::lista_desde_valor(valor),
        Value::Object(_) => Proyecto::desde_valor(valor).tareas,
        _ => Vec::new(),
    }
}

/// Estado de avance normalizado.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Estado {
    Pendiente,
    EnProgreso,
    Completada,
    /// Etiqueta no reconocida; cuenta como pendiente.
    Desconocido,
}

impl Estado {
    /// Clasificación del rollup: ignora mayúsculas y espacios y acepta sinónimos.
    pub fn desde_texto(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Estado::Pendiente;
        };
        match raw.trim().to_lowercase().as_str() {
            "completada" | "completa" | "finalizada" | "cerrada" => Estado::Completada,
            "en_progreso" | "en curso" => Estado::EnProgreso,
            "" | "pendiente" => Estado::Pendiente,
            _ => Estado::Desconocido,
        }
    }

    /// Clasificación de las filas Gantt: solo la etiqueta canónica de cada nivel,
    /// comparada tal cual.
    pub fn desde_texto_estricto(raw: Option<&str>) -> Self {
        match raw {
            Some("completada") => Estado::Completada,
            Some("en_progreso") => Estado::EnProgreso,
            None | Some("pendiente") => Estado::Pendiente,
            Some(_) => Estado::Desconocido,
        }
    }

    pub fn porcentaje(self) -> f64 {
        match self {
            Estado::Completada => 100.0,
            Estado::EnProgreso => 50.0,
            Estado::Pendiente | Estado::Desconocido => 0.0,
        }
    }
}

/// Rango planificado de un proyecto (inicio más temprano, fin más tardío).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangoPlan {
    pub inicio: Option<DateTime<Utc>>,
    pub fin: Option<DateTime<Utc>>,
}
