use crate::error::Result;
use crate::workout::{
    expect_arity, positive, whole_count, ActivityKind, Workout, WorkoutBase, M_IN_KM,
};

/// Lengde (m) per svømmetak.
pub const STROKE_LENGTH_M: f64 = 1.38;
pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Svømming.
///
/// Farten regnes fra bassengdata, mens distansen beholder den felles
/// aksjonsbaserte formelen (`action_count * 0.65 / 1000`). De to tallene i
/// rapporten har altså ulikt grunnlag; rapportformatet er låst til dette.
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    base: WorkoutBase,
    pool_length_m: f64,
    pool_lengths_count: u32,
}

impl Swimming {
    /// Krav: `pool_length_m > 0`.
    pub fn new(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_lengths_count: u32,
    ) -> Result<Self> {
        Ok(Self {
            base: WorkoutBase::new(action_count, duration_hours, weight_kg)?,
            pool_length_m: positive("pool_length_m", pool_length_m)?,
            pool_lengths_count,
        })
    }

    /// `[action_count, duration_hours, weight_kg, pool_length_m, pool_lengths_count]`
    pub fn from_params(params: &[f64]) -> Result<Self> {
        expect_arity(ActivityKind::Swimming, params)?;
        Ok(Self {
            base: WorkoutBase::from_params(params)?,
            pool_length_m: positive("pool_length_m", params[3])?,
            pool_lengths_count: whole_count("pool_lengths_count", params[4])?,
        })
    }

    pub fn stroke_length_m(&self) -> f64 {
        STROKE_LENGTH_M
    }

    pub fn pool_length_m(&self) -> f64 {
        self.pool_length_m
    }

    pub fn pool_lengths_count(&self) -> u32 {
        self.pool_lengths_count
    }
}

impl Workout for Swimming {
    fn kind(&self) -> ActivityKind {
        ActivityKind::Swimming
    }

    fn base(&self) -> &WorkoutBase {
        &self.base
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * self.pool_lengths_count as f64 / M_IN_KM / self.base.duration_hours()
    }

    fn calories_spent(&self) -> f64 {
        (self.mean_speed_kmh() + CALORIES_MEAN_SPEED_SHIFT)
            * CALORIES_WEIGHT_MULTIPLIER
            * self.base.weight_kg()
            * self.base.duration_hours()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_session() {
        let swim = Swimming::new(720, 1.0, 80.0, 25.0, 40).unwrap();
        assert!((swim.mean_speed_kmh() - 1.0).abs() < 1e-12);
        assert!((swim.calories_spent() - 336.0).abs() < 1e-9);
    }

    #[test]
    fn distance_stays_action_based() {
        let swim = Swimming::new(720, 1.0, 80.0, 25.0, 40).unwrap();
        // 720 * 0.65 / 1000, ikke 720 * 1.38 / 1000 og ikke 25 * 40 / 1000
        assert!((swim.distance_km() - 0.468).abs() < 1e-12);
        assert!((swim.stroke_length_m() - 1.38).abs() < f64::EPSILON);
    }

    #[test]
    fn pool_params_are_validated() {
        assert!(Swimming::from_params(&[720.0, 1.0, 80.0, 0.0, 40.0]).is_err());
        assert!(Swimming::from_params(&[720.0, 1.0, 80.0, 25.0, 40.5]).is_err());
        assert!(Swimming::from_params(&[720.0, 1.0, 80.0, 25.0]).is_err());
    }

    #[test]
    fn no_laps_means_zero_speed() {
        let swim = Swimming::new(0, 0.5, 60.0, 50.0, 0).unwrap();
        assert_eq!(swim.mean_speed_kmh(), 0.0);
        assert!((swim.calories_spent() - 1.1 * 2.0 * 60.0 * 0.5).abs() < 1e-9);
    }
}
