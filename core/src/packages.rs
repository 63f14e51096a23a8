use serde_path_to_error as spte;

use crate::error::{Result, WorkoutError};
use crate::models::SensorPackage;

/// Leser en JSON-liste med sensorpakker.
///
/// Hver pakke kan være `["RUN", [15000, 1, 75]]` eller
/// `{"code": "RUN", "data": [15000, 1, 75]}`. Feilmeldingen peker på stien
/// til elementet som feilet (f.eks. `[1]`).
pub fn parse_packages(json: &str) -> Result<Vec<SensorPackage>> {
    let mut de = serde_json::Deserializer::from_str(json);
    let packages: Vec<SensorPackage> =
        spte::deserialize(&mut de).map_err(|e: spte::Error<serde_json::Error>| {
            let path = e.path().to_string();
            WorkoutError::PackageFormat(format!("{path}: {}", e.into_inner()))
        })?;
    // ingen søppel etter lista
    de.end()
        .map_err(|e| WorkoutError::PackageFormat(e.to_string()))?;
    Ok(packages)
}
