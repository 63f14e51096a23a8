// core/src/workout.rs
use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::error::{Result, WorkoutError};
use crate::models::ActivityRecord;

pub const STEP_LENGTH_M: f64 = 0.65; // meter per aksjon (skritt/tak)
pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;

/// De tre støttede aktivitetene, med kortkode fra sensorpakken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    Running,
    Walking,
    Swimming,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 3] = [
        ActivityKind::Running,
        ActivityKind::Walking,
        ActivityKind::Swimming,
    ];

    pub fn code(self) -> &'static str {
        match self {
            ActivityKind::Running => "RUN",
            ActivityKind::Walking => "WLK",
            ActivityKind::Swimming => "SWM",
        }
    }

    /// Navnet som vises i rapportlinjen.
    pub fn display_name(self) -> &'static str {
        match self {
            ActivityKind::Running => "Running",
            ActivityKind::Walking => "SportsWalking",
            ActivityKind::Swimming => "Swimming",
        }
    }

    /// Posisjonelle parametre i den rekkefølgen konstruktøren forventer dem.
    pub fn param_names(self) -> &'static [&'static str] {
        match self {
            ActivityKind::Running => &["action_count", "duration_hours", "weight_kg"],
            ActivityKind::Walking => &["action_count", "duration_hours", "weight_kg", "height_cm"],
            ActivityKind::Swimming => &[
                "action_count",
                "duration_hours",
                "weight_kg",
                "pool_length_m",
                "pool_lengths_count",
            ],
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ActivityKind {
    type Err = WorkoutError;

    fn from_str(code: &str) -> Result<Self> {
        ActivityKind::ALL
            .into_iter()
            .find(|k| k.code() == code)
            .ok_or_else(|| WorkoutError::UnknownActivity { code: code.to_string() })
    }
}

/// Felles rådata for alle økter. Validert ved konstruksjon, aldri mutert etterpå.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkoutBase {
    action_count: u32,
    duration_hours: f64,
    weight_kg: f64,
}

impl WorkoutBase {
    /// Krav: `duration_hours > 0` (vi deler på varigheten), `weight_kg >= 0`.
    pub fn new(action_count: u32, duration_hours: f64, weight_kg: f64) -> Result<Self> {
        Ok(Self {
            action_count,
            duration_hours: positive("duration_hours", duration_hours)?,
            weight_kg: non_negative("weight_kg", weight_kg)?,
        })
    }

    /// Leser de tre første posisjonelle parametrene. Antall må være sjekket av kaller.
    pub(crate) fn from_params(params: &[f64]) -> Result<Self> {
        Self::new(
            whole_count("action_count", params[0])?,
            params[1],
            params[2],
        )
    }

    pub fn action_count(&self) -> u32 {
        self.action_count
    }

    pub fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }
}

/// Felles grensesnitt for en økt.
///
/// `calories_spent` har ingen standardimplementasjon: hver variant må levere sin egen formel.
pub trait Workout: fmt::Debug {
    fn kind(&self) -> ActivityKind;

    fn base(&self) -> &WorkoutBase;

    /// Distanse (km) = aksjoner * skrittlengde / 1000.
    fn distance_km(&self) -> f64 {
        self.base().action_count() as f64 * STEP_LENGTH_M / M_IN_KM
    }

    /// Snittfart (km/t) = distanse / varighet.
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.base().duration_hours()
    }

    fn calories_spent(&self) -> f64;

    /// Samler nøkkeltallene. Ikke-endelige verdier (overflyt) gir `NonFiniteMetric`.
    fn build_record(&self) -> Result<ActivityRecord> {
        let name = self.kind().display_name();
        let record = ActivityRecord::new(
            name,
            self.base().duration_hours(),
            finite_metric(name, "distance_km", self.distance_km())?,
            finite_metric(name, "mean_speed_kmh", self.mean_speed_kmh())?,
            finite_metric(name, "calories", self.calories_spent())?,
        );
        debug!("{} -> {:?}", self.kind().code(), record);
        Ok(record)
    }
}

fn finite_metric(activity: &'static str, metric: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(WorkoutError::NonFiniteMetric { activity, metric, value })
    }
}

/// Sjekker at parameterlisten har riktig lengde for aktiviteten.
pub(crate) fn expect_arity(kind: ActivityKind, params: &[f64]) -> Result<()> {
    let expected = kind.param_names().len();
    if params.len() != expected {
        return Err(WorkoutError::ParameterCount {
            code: kind.code().to_string(),
            expected,
            actual: params.len(),
        });
    }
    Ok(())
}

pub(crate) fn positive(name: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(WorkoutError::invalid(name, value, "must be a finite number"));
    }
    if value <= 0.0 {
        return Err(WorkoutError::invalid(name, value, "must be greater than zero"));
    }
    Ok(value)
}

pub(crate) fn non_negative(name: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(WorkoutError::invalid(name, value, "must be a finite number"));
    }
    if value < 0.0 {
        return Err(WorkoutError::invalid(name, value, "must not be negative"));
    }
    Ok(value)
}

/// Tellere (skritt, tak, bassenglengder) må være hele, ikke-negative tall.
pub(crate) fn whole_count(name: &'static str, value: f64) -> Result<u32> {
    let v = non_negative(name, value)?;
    if v.fract() != 0.0 {
        return Err(WorkoutError::invalid(name, value, "must be a whole number"));
    }
    if v > u32::MAX as f64 {
        return Err(WorkoutError::invalid(name, value, "is too large"));
    }
    Ok(v as u32)
}
