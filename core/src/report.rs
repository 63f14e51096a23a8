use crate::models::ActivityRecord;

/// Fast rapportlinje, alle tall med nøyaktig 3 desimaler.
pub fn format_record(record: &ActivityRecord) -> String {
    format!(
        "Activity type: {}; Duration: {:.3} h; Distance: {:.3} km; Avg speed: {:.3} km/h; Calories: {:.3}.",
        record.activity_name,
        record.duration_hours,
        record.distance_km,
        record.mean_speed_kmh,
        record.calories,
    )
}

/// Samme record som JSON-objekt (kompakt).
pub fn to_json(record: &ActivityRecord) -> serde_json::Result<String> {
    serde_json::to_string(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_three_decimals() {
        let r = ActivityRecord::new("Running", 1.0, 10.0, 0.0, 1234567.8);
        assert_eq!(
            format_record(&r),
            "Activity type: Running; Duration: 1.000 h; Distance: 10.000 km; \
             Avg speed: 0.000 km/h; Calories: 1234567.800."
        );
    }

    #[test]
    fn rounds_to_three_places() {
        let r = ActivityRecord::new("Swimming", 0.25, 0.0004, 0.0006, 349.251_747_525);
        let line = format_record(&r);
        assert!(line.contains("Duration: 0.250 h"), "{line}");
        assert!(line.contains("Distance: 0.000 km"), "{line}");
        assert!(line.contains("Avg speed: 0.001 km/h"), "{line}");
        assert!(line.ends_with("Calories: 349.252."), "{line}");
    }

    #[test]
    fn three_decimals_at_the_f64_limit() {
        let r = ActivityRecord::new("Running", f64::MAX, f64::MIN_POSITIVE, 1e-300, f64::MAX);
        let line = format_record(&r);
        let max = format!("{:.3}", f64::MAX);
        assert!(max.ends_with(".000"));
        assert!(line.contains(&format!("Duration: {max} h")), "{line}");
        assert!(line.contains("Distance: 0.000 km"), "{line}");
        assert!(line.contains("Avg speed: 0.000 km/h"), "{line}");
        assert!(line.ends_with(&format!("Calories: {max}.")), "{line}");
    }

    #[test]
    fn json_round_trips_record() {
        let r = ActivityRecord::new("SportsWalking", 1.0, 5.85, 5.85, 349.25);
        let s = to_json(&r).unwrap();
        let back: ActivityRecord = serde_json::from_str(&s).unwrap();
        assert_eq!(back, r);
    }
}
