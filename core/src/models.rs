use serde::{Deserialize, Serialize};

/// Beregnede nøkkeltall for én økt. Lages én gang, leses kun av rapporten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub activity_name: String,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories: f64,
}

impl ActivityRecord {
    pub fn new(
        activity_name: impl Into<String>,
        duration_hours: f64,
        distance_km: f64,
        mean_speed_kmh: f64,
        calories: f64,
    ) -> Self {
        Self {
            activity_name: activity_name.into(),
            duration_hours,
            distance_km,
            mean_speed_kmh,
            calories,
        }
    }
}

/// Én rå sensorpakke: aktivitetskode + posisjonelle måleverdier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorPackage {
    pub code: String,
    pub data: Vec<f64>,
}

impl SensorPackage {
    pub fn new(code: impl Into<String>, data: impl Into<Vec<f64>>) -> Self {
        Self {
            code: code.into(),
            data: data.into(),
        }
    }
}

// Prøv OBJECT først, deretter TUPLE (["SWM", [720, 1, 80, 25, 40]])
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SensorPackageIn {
    Object {
        #[serde(alias = "workout_type", alias = "type")]
        code: String,
        #[serde(alias = "params")]
        data: Vec<f64>,
    },
    Tuple(String, Vec<f64>),
}

impl<'de> Deserialize<'de> for SensorPackage {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(match SensorPackageIn::deserialize(deserializer)? {
            SensorPackageIn::Object { code, data } => SensorPackage { code, data },
            SensorPackageIn::Tuple(code, data) => SensorPackage { code, data },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_accepts_tuple_and_object_form() {
        let a: SensorPackage = serde_json::from_str(r#"["RUN", [15000, 1, 75]]"#).unwrap();
        let b: SensorPackage =
            serde_json::from_str(r#"{"code": "RUN", "data": [15000, 1, 75]}"#).unwrap();
        let c: SensorPackage =
            serde_json::from_str(r#"{"workout_type": "RUN", "params": [15000, 1, 75]}"#).unwrap();
        let expected = SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]);
        assert_eq!(a, expected);
        assert_eq!(b, expected);
        assert_eq!(c, expected);
    }

    #[test]
    fn record_serializes_with_snake_case_fields() {
        let r = ActivityRecord::new("Swimming", 1.0, 0.468, 1.0, 336.0);
        let v = serde_json::to_value(&r).unwrap();
        assert_eq!(v["activity_name"], "Swimming");
        assert_eq!(v["calories"], 336.0);
        assert_eq!(v["distance_km"], 0.468);
    }
}
