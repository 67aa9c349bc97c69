//! Reglas de mantenimiento
//!
//! Este módulo define las reglas estáticas por ítem (intervalo de km,
//! intervalo de tiempo y peso de severidad) y la tabla ordenada que el
//! motor de cómputo recorre.

use std::collections::HashSet;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Regla de mantenimiento para un ítem
///
/// Invariantes: `km_interval > 0`, `time_interval_days > 0` y
/// `severity_weight` dentro de [0, 1]. Se validan al construir la tabla.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceRule {
    pub item: String,
    pub km_interval: i64,
    pub time_interval_days: i64,
    pub severity_weight: f64,
}

impl MaintenanceRule {
    pub fn new(item: &str, km_interval: i64, time_interval_days: i64, severity_weight: f64) -> Self {
        Self {
            item: item.to_string(),
            km_interval,
            time_interval_days,
            severity_weight,
        }
    }
}

/// Errores de construcción de la tabla de reglas
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("rule '{item}': km_interval must be positive (got {value})")]
    NonPositiveKmInterval { item: String, value: i64 },

    #[error("rule '{item}': time_interval_days must be positive (got {value})")]
    NonPositiveTimeInterval { item: String, value: i64 },

    #[error("rule '{item}': severity_weight must be within [0, 1] (got {value})")]
    SeverityOutOfRange { item: String, value: f64 },

    #[error("rule '{item}' is defined more than once")]
    DuplicateItem { item: String },
}

/// Tabla de reglas de sólo lectura con orden de iteración estable
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<MaintenanceRule>,
}

impl RuleTable {
    /// Construye la tabla validando cada regla. Una regla inválida
    /// rechaza la tabla completa, nunca queda una tabla parcial.
    pub fn new(rules: Vec<MaintenanceRule>) -> Result<Self, RuleError> {
        let mut seen: HashSet<&str> = HashSet::new();
        for rule in &rules {
            if rule.km_interval <= 0 {
                return Err(RuleError::NonPositiveKmInterval {
                    item: rule.item.clone(),
                    value: rule.km_interval,
                });
            }
            if rule.time_interval_days <= 0 {
                return Err(RuleError::NonPositiveTimeInterval {
                    item: rule.item.clone(),
                    value: rule.time_interval_days,
                });
            }
            if !(0.0..=1.0).contains(&rule.severity_weight) {
                return Err(RuleError::SeverityOutOfRange {
                    item: rule.item.clone(),
                    value: rule.severity_weight,
                });
            }
            if !seen.insert(rule.item.as_str()) {
                return Err(RuleError::DuplicateItem {
                    item: rule.item.clone(),
                });
            }
        }
        Ok(Self { rules })
    }

    pub fn get(&self, item: &str) -> Option<&MaintenanceRule> {
        self.rules.iter().find(|r| r.item == item)
    }

    /// Itera las reglas en el orden de definición
    pub fn iter(&self) -> std::slice::Iter<'_, MaintenanceRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

lazy_static! {
    /// Tabla por defecto. Los intervalos de tiempo se expresan en días
    /// (meses como bloques de 30 días).
    pub static ref DEFAULT_RULES: RuleTable = RuleTable::new(vec![
        MaintenanceRule::new("engine_oil", 15000, 360, 0.10),
        MaintenanceRule::new("oil_filter", 15000, 360, 0.08),
        MaintenanceRule::new("air_filter", 30000, 720, 0.05),
        MaintenanceRule::new("cabin_filter", 20000, 540, 0.05),
        MaintenanceRule::new("brake_fluid", 60000, 720, 0.12),
        MaintenanceRule::new("coolant", 80000, 1440, 0.10),
        MaintenanceRule::new("spark_plugs", 60000, 1440, 0.07),
    ])
    .expect("default rule table is structurally valid");
}
