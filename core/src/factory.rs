// core/src/factory.rs
use std::collections::HashMap;

use log::{debug, warn};
use once_cell::sync::Lazy;

use crate::error::{Result, WorkoutError};
use crate::running::Running;
use crate::swimming::Swimming;
use crate::walking::Walking;
use crate::workout::{ActivityKind, Workout};

type Constructor = fn(&[f64]) -> Result<Box<dyn Workout>>;

fn build_running(params: &[f64]) -> Result<Box<dyn Workout>> {
    Ok(Box::new(Running::from_params(params)?))
}

fn build_walking(params: &[f64]) -> Result<Box<dyn Workout>> {
    Ok(Box::new(Walking::from_params(params)?))
}

fn build_swimming(params: &[f64]) -> Result<Box<dyn Workout>> {
    Ok(Box::new(Swimming::from_params(params)?))
}

/// Oppslagstabell kode -> konstruktør.
static CONSTRUCTORS: Lazy<HashMap<&'static str, Constructor>> = Lazy::new(|| {
    let mut table: HashMap<&'static str, Constructor> = HashMap::new();
    for kind in ActivityKind::ALL {
        let ctor: Constructor = match kind {
            ActivityKind::Running => build_running,
            ActivityKind::Walking => build_walking,
            ActivityKind::Swimming => build_swimming,
        };
        table.insert(kind.code(), ctor);
    }
    table
});

/// Lager riktig øktvariant fra kortkode og posisjonelle parametre.
///
/// Ukjent kode gir `UnknownActivity`; feil antall eller ugyldige verdier gir
/// `ParameterCount`/`InvalidParameter`. Aldri stille fallback.
pub fn create(code: &str, params: &[f64]) -> Result<Box<dyn Workout>> {
    let Some(ctor) = CONSTRUCTORS.get(code) else {
        warn!("rejected activity code {code:?}");
        return Err(WorkoutError::UnknownActivity { code: code.to_string() });
    };

    let workout = ctor(params).map_err(|e| {
        warn!("rejected {code} package {params:?}: {e}");
        e
    })?;
    debug!("created {:?}", workout);
    Ok(workout)
}

/// Støttede koder, sortert.
pub fn supported_codes() -> Vec<&'static str> {
    let mut codes: Vec<&'static str> = CONSTRUCTORS.keys().copied().collect();
    codes.sort_unstable();
    codes
}
