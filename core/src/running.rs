use crate::error::Result;
use crate::workout::{expect_arity, ActivityKind, Workout, WorkoutBase, M_IN_KM, MIN_IN_H};

pub const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

/// Løping: ingen egne felt, kun egen kaloriformel.
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    base: WorkoutBase,
}

impl Running {
    pub fn new(action_count: u32, duration_hours: f64, weight_kg: f64) -> Result<Self> {
        Ok(Self {
            base: WorkoutBase::new(action_count, duration_hours, weight_kg)?,
        })
    }

    /// `[action_count, duration_hours, weight_kg]`
    pub fn from_params(params: &[f64]) -> Result<Self> {
        expect_arity(ActivityKind::Running, params)?;
        Ok(Self {
            base: WorkoutBase::from_params(params)?,
        })
    }
}

impl Workout for Running {
    fn kind(&self) -> ActivityKind {
        ActivityKind::Running
    }

    fn base(&self) -> &WorkoutBase {
        &self.base
    }

    fn calories_spent(&self) -> f64 {
        (CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed_kmh() + CALORIES_MEAN_SPEED_SHIFT)
            * self.base.weight_kg()
            / M_IN_KM
            * self.base.duration_hours()
            * MIN_IN_H
    }
}
