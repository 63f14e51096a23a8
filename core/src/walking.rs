use crate::error::Result;
use crate::workout::{expect_arity, positive, ActivityKind, Workout, WorkoutBase, MIN_IN_H};

pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
pub const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
pub const KMH_IN_MSEC: f64 = 0.278;
pub const CM_IN_M: f64 = 100.0;

/// Sportsgange. Høyde inngår i kaloriformelen.
#[derive(Debug, Clone, PartialEq)]
pub struct Walking {
    base: WorkoutBase,
    height_cm: f64,
}

impl Walking {
    /// Krav: `height_cm > 0` (vi deler på høyden).
    pub fn new(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> Result<Self> {
        Ok(Self {
            base: WorkoutBase::new(action_count, duration_hours, weight_kg)?,
            height_cm: positive("height_cm", height_cm)?,
        })
    }

    /// `[action_count, duration_hours, weight_kg, height_cm]`
    pub fn from_params(params: &[f64]) -> Result<Self> {
        expect_arity(ActivityKind::Walking, params)?;
        Ok(Self {
            base: WorkoutBase::from_params(params)?,
            height_cm: positive("height_cm", params[3])?,
        })
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }
}

impl Workout for Walking {
    fn kind(&self) -> ActivityKind {
        ActivityKind::Walking
    }

    fn base(&self) -> &WorkoutBase {
        &self.base
    }

    fn calories_spent(&self) -> f64 {
        let speed_ms = self.mean_speed_kmh() * KMH_IN_MSEC;
        let height_m = self.height_cm / CM_IN_M;
        let weight = self.base.weight_kg();

        (CALORIES_WEIGHT_MULTIPLIER * weight
            + (speed_ms.powi(2) / height_m) * CALORIES_SPEED_HEIGHT_MULTIPLIER * weight)
            * self.base.duration_hours()
            * MIN_IN_H
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WorkoutError;

    #[test]
    fn reference_session() {
        let walk = Walking::new(9000, 1.0, 75.0, 180.0).unwrap();
        assert!((walk.distance_km() - 5.85).abs() < 1e-12);
        assert!((walk.mean_speed_kmh() - 5.85).abs() < 1e-12);
        assert!((walk.calories_spent() - 349.251_747_525).abs() < 1e-6);
    }

    #[test]
    fn zero_height_is_rejected_at_construction() {
        let err = Walking::new(9000, 1.0, 75.0, 0.0).unwrap_err();
        assert!(matches!(
            err,
            WorkoutError::InvalidParameter { name: "height_cm", .. }
        ));
    }

    #[test]
    fn standing_still_burns_only_weight_term() {
        // 0 skritt => 0 fart, bare 0.035 * vekt * varighet * 60 gjenstår
        let walk = Walking::new(0, 2.0, 80.0, 175.0).unwrap();
        assert_eq!(walk.mean_speed_kmh(), 0.0);
        assert!((walk.calories_spent() - 0.035 * 80.0 * 2.0 * 60.0).abs() < 1e-9);
    }
}
