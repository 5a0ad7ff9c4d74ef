// Configuración del servicio desde variables de entorno (con `.env` opcional).

use std::env;

use crate::error::ConfigError;

pub const BIND_POR_DEFECTO: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// PROYECTOS_BIND
    pub bind: String,
    /// PROYECTOS_WORKERS (por defecto, CPUs lógicas)
    pub workers: usize,
    /// PROYECTOS_DECIMALES: decimales del avance cuando la petición no los indica
    pub decimales: i32,
    /// PROYECTOS_CORS_ORIGIN: origen permitido; `None` permite cualquiera
    pub cors_origin: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind: BIND_POR_DEFECTO.to_string(),
            workers: num_cpus::get(),
            decimales: 0,
            cors_origin: None,
        }
    }
}

impl Config {
    /// Lee la configuración del entorno del proceso tras cargar `.env` si existe.
    pub fn desde_entorno() -> Result<Self, ConfigError> {
        let _ = dotenv::dotenv();
        Self::desde_fuente(|k| env::var(k).ok())
    }

    /// Versión parametrizable para pruebas: `leer` devuelve el valor de una variable.
    pub fn desde_fuente<F>(leer: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Config::default();
        let presente = |k: &str| leer(k).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(bind) = presente("PROYECTOS_BIND") {
            cfg.bind = bind;
        }
        if let Some(w) = presente("PROYECTOS_WORKERS") {
            cfg.workers = match w.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::Invalida { variable: "PROYECTOS_WORKERS", valor: w }),
            };
        }
        if let Some(d) = presente("PROYECTOS_DECIMALES") {
            cfg.decimales = d
                .parse::<i32>()
                .map_err(|_| ConfigError::Invalida { variable: "PROYECTOS_DECIMALES", valor: d.clone() })?;
        }
        cfg.cors_origin = presente("PROYECTOS_CORS_ORIGIN");

        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn desde(pares: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let mapa: HashMap<String, String> =
            pares.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::desde_fuente(|k| mapa.get(k).cloned())
    }

    #[test]
    fn test_valores_por_defecto() {
        let cfg = desde(&[]).unwrap();
        assert_eq!(cfg.bind, BIND_POR_DEFECTO);
        assert_eq!(cfg.decimales, 0);
        assert!(cfg.workers >= 1);
        assert_eq!(cfg.cors_origin, None);
    }

    #[test]
    fn test_lee_variables() {
        let cfg = desde(&[
            ("PROYECTOS_BIND", "0.0.0.0:9000"),
            ("PROYECTOS_WORKERS", "3"),
            ("PROYECTOS_DECIMALES", "2"),
            ("PROYECTOS_CORS_ORIGIN", "https://erp.example.com"),
        ])
        .unwrap();
        assert_eq!(cfg.bind, "0.0.0.0:9000");
        assert_eq!(cfg.workers, 3);
        assert_eq!(cfg.decimales, 2);
        assert_eq!(cfg.cors_origin.as_deref(), Some("https://erp.example.com"));
    }

    #[test]
    fn test_valores_invalidos() {
        assert_eq!(
            desde(&[("PROYECTOS_WORKERS", "0")]),
            Err(ConfigError::Invalida { variable: "PROYECTOS_WORKERS", valor: "0".to_string() })
        );
        assert!(desde(&[("PROYECTOS_DECIMALES", "dos")]).is_err());
        // vacío equivale a ausente
        assert_eq!(desde(&[("PROYECTOS_BIND", "  ")]).unwrap().bind, BIND_POR_DEFECTO);
    }
}
