//! Motor de cómputo de mantenimiento
//!
//! Lógica de negocio central: dado el kilometraje actual, el último
//! servicio por ítem y la tabla de reglas, decide qué ítems están
//! vencidos, con qué urgencia y cuándo toca el próximo servicio.
//!
//! Todas las funciones son puras: sin estado propio, sin efectos y con
//! el reloj inyectado vía `as_of`. El mismo input produce siempre el
//! mismo output.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use crate::models::rule::{MaintenanceRule, RuleTable};
use crate::models::service_record::ServiceRecord;
use crate::models::vehicle::LastService;
use crate::models::verdict::{ItemVerdict, VehicleVerdict};

/// Peso del eje de distancia en el score de urgencia
const KM_WEIGHT: f64 = 0.6;
/// Peso del eje de tiempo en el score de urgencia
const TIME_WEIGHT: f64 = 0.4;
/// Factor aplicado al peso de severidad del ítem
const SEVERITY_FACTOR: f64 = 0.5;
/// Ratio neutro cuando falta el dato del último servicio en un eje
const NEUTRAL_RATIO: f64 = 0.5;

/// Consulta de mantenimiento para un vehículo
#[derive(Debug, Clone)]
pub struct DueQuery {
    pub vehicle_id: String,
    pub current_km: i64,
    pub avg_monthly_km: Option<f64>,
    /// Instante tratado como "ahora"; en producción se captura una sola
    /// vez por request
    pub as_of: DateTime<Utc>,
}

fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// Computa el veredicto de un único ítem contra su regla
///
/// Política de fallback: cuando falta `last_km` el eje de distancia cae
/// al ratio neutro (0.5) con `km_remaining = None`, y simétricamente
/// para `last_date` en el eje de tiempo. Un ítem sin ningún dato se
/// considera vencido con ambos ratios en 0.5.
pub fn compute_item_due(
    rule: &MaintenanceRule,
    current_km: i64,
    last: &LastService,
    avg_monthly_km: Option<f64>,
    as_of: DateTime<Utc>,
) -> ItemVerdict {
    let never_serviced = last.last_km.is_none() && last.last_date.is_none();

    let next_due_km = last.last_km.unwrap_or(0) + rule.km_interval;
    let next_due_date = last.last_date.unwrap_or(as_of) + Duration::days(rule.time_interval_days);

    let (km_ratio, km_remaining) = match last.last_km {
        Some(last_km) => {
            // km_since nunca negativo aunque last_km > current_km
            let km_since = (current_km - last_km).max(0);
            (
                clamp01(km_since as f64 / rule.km_interval as f64),
                Some(next_due_km - current_km),
            )
        }
        None => (NEUTRAL_RATIO, None),
    };

    let (time_ratio, days_remaining) = match last.last_date {
        Some(last_date) => {
            let days_since = (as_of - last_date).num_days();
            (
                clamp01(days_since as f64 / rule.time_interval_days as f64),
                Some((next_due_date - as_of).num_days()),
            )
        }
        None => (NEUTRAL_RATIO, None),
    };

    let due_by_km = last.last_km.is_some() && km_ratio >= 1.0;
    let due_by_time = last.last_date.is_some() && time_ratio >= 1.0;
    let due = due_by_km || due_by_time || never_serviced;

    let urgency_score = clamp01(
        KM_WEIGHT * km_ratio + TIME_WEIGHT * time_ratio + SEVERITY_FACTOR * rule.severity_weight,
    );

    ItemVerdict {
        item: rule.item.clone(),
        due,
        due_by_km,
        due_by_time,
        km_remaining,
        days_remaining,
        next_due_km,
        next_due_date,
        km_ratio,
        time_ratio,
        urgency_score,
        projected_km_due_date: project_km_due_date(km_remaining, avg_monthly_km, as_of),
    }
}

/// Estima cuándo se alcanzará el umbral de km al ritmo promedio del
/// vehículo. Sólo aplica con promedio positivo y km restantes por
/// delante.
fn project_km_due_date(
    km_remaining: Option<i64>,
    avg_monthly_km: Option<f64>,
    as_of: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    let remaining = km_remaining?;
    let avg = avg_monthly_km?;
    if avg <= 0.0 || remaining <= 0 {
        return None;
    }
    let days = remaining as f64 / (avg / 30.0);
    Some(as_of + Duration::days(days.ceil() as i64))
}

/// Computa el veredicto agregado del vehículo
///
/// Evalúa todos los ítems de la tabla (la ausencia de historial también
/// cuenta) en el orden de la tabla, sin cortocircuitos.
pub fn compute_due(
    query: &DueQuery,
    last_services: &HashMap<String, LastService>,
    rules: &RuleTable,
) -> VehicleVerdict {
    let mut items = Vec::with_capacity(rules.len());
    for rule in rules.iter() {
        let last = last_services.get(&rule.item).cloned().unwrap_or_default();
        items.push(compute_item_due(
            rule,
            query.current_km,
            &last,
            query.avg_monthly_km,
            query.as_of,
        ));
    }

    let overall_urgency = items.iter().map(|i| i.urgency_score).fold(0.0, f64::max);
    let any_due = items.iter().any(|i| i.due);

    VehicleVerdict {
        vehicle_id: query.vehicle_id.clone(),
        current_km: query.current_km,
        generated_at: query.as_of,
        any_due,
        overall_urgency,
        items,
    }
}

/// `true` si `a` es estrictamente más reciente que `b`: primero por
/// fecha, empate por kilometraje; una fecha ausente ordena antes que
/// cualquier fecha presente.
fn more_recent(a: &LastService, b: &LastService) -> bool {
    match (a.last_date, b.last_date) {
        (Some(da), Some(db)) => da > db || (da == db && a.last_km > b.last_km),
        (Some(_), None) => true,
        (None, Some(_)) => false,
        (None, None) => a.last_km > b.last_km,
    }
}

/// Resuelve el último servicio por ítem combinando el mapa sembrado del
/// vehículo con el historial de registros de servicio.
///
/// Fuente canónica única: para cada ítem gana la entrada más reciente
/// según `more_recent`. Las entradas sembradas siguen valiendo para
/// historial anterior al tracking; un registro las reemplaza en cuanto
/// es más nuevo.
pub fn resolve_last_services(
    seeded: &HashMap<String, LastService>,
    records: &[ServiceRecord],
) -> HashMap<String, LastService> {
    let mut resolved = seeded.clone();
    for rec in records {
        let candidate = LastService {
            last_km: Some(rec.at_mileage),
            last_date: Some(rec.created_at),
        };
        let replaces = match resolved.get(&rec.item) {
            Some(current) => more_recent(&candidate, current),
            None => true,
        };
        if replaces {
            resolved.insert(rec.item.clone(), candidate);
        }
    }
    resolved
}
