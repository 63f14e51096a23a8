use std::io::Write;

use anyhow::Context;
use log::info;

use crate::error::Result;
use crate::factory;
use crate::models::{ActivityRecord, SensorPackage};
use crate::report::format_record;

/// Innebygde eksempelpakker, i fast rekkefølge.
pub fn sample_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Pakke -> økt -> record.
pub fn evaluate(package: &SensorPackage) -> Result<ActivityRecord> {
    let workout = factory::create(&package.code, &package.data)?;
    workout.build_record()
}

/// Skriver én rapportlinje per pakke, i input-rekkefølge.
///
/// Stopper ved første feil (linjer som allerede er skrevet blir stående).
/// Returnerer antall skrevne linjer.
pub fn run<W: Write>(packages: &[SensorPackage], out: &mut W) -> anyhow::Result<usize> {
    for (i, package) in packages.iter().enumerate() {
        let record = evaluate(package)
            .with_context(|| format!("sensor package #{} ({})", i + 1, package.code))?;
        writeln!(out, "{}", format_record(&record)).context("failed to write report line")?;
    }
    out.flush().context("failed to flush report output")?;
    info!("reported {} workouts", packages.len());
    Ok(packages.len())
}
