//! Nøkkeltall (distanse, snittfart, kalorier) fra rå sensorpakker for
//! løping, sportsgange og svømming, pluss en fast rapportlinje per økt.

pub mod cli;
pub mod error;
pub mod factory;
pub mod models;
pub mod packages;
pub mod report;
pub mod running;
pub mod swimming;
pub mod walking;
pub mod workout;

pub use error::{Result, WorkoutError};
pub use factory::{create, supported_codes};
pub use models::{ActivityRecord, SensorPackage};
pub use packages::parse_packages;
pub use report::{format_record, to_json};
pub use running::Running;
pub use swimming::Swimming;
pub use walking::Walking;
pub use workout::{ActivityKind, Workout, WorkoutBase};
