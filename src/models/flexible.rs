// Deserializadores tolerantes: un campo con la forma equivocada se trata como
// ausente (o vacío) en vez de hacer fallar todo el proyecto.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::avance::utilidades::valor_a_numero;

/// Secuencia: cualquier cosa que no sea un arreglo es una lista vacía, y los
/// elementos que no se puedan leer quedan con todos sus campos ausentes.
pub fn lista<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let valor = Value::deserialize(deserializer)?;
    Ok(lista_desde_valor(valor))
}

pub fn lista_desde_valor<T: DeserializeOwned + Default>(valor: Value) -> Vec<T> {
    match valor {
        Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).unwrap_or_default())
            .collect(),
        _ => Vec::new(),
    }
}

/// Número o texto numérico ("50.00"); el resto es ausente.
pub fn numero<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let valor = Value::deserialize(deserializer)?;
    Ok(valor_a_numero(&valor))
}

pub fn texto<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

pub fn booleano<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Bool(b) => Ok(Some(b)),
        _ => Ok(None),
    }
}
