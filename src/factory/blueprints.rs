//! Stock equipment configurations.
//!
//! Each blueprint drives the builder through a fixed sequence of steps,
//! producing a freshly identified model with all flags off.

use super::builder::EquipmentBuilder;
use super::error::BuildError;
use crate::model::EquipmentModel;

pub fn exercise_bike() -> Result<EquipmentModel, BuildError> {
    EquipmentBuilder::new()
        .type_key("bike")
        .display_name("Exercise Bike")
        .spec("max_resistance", 20)
        .spec("has_pulse_sensor", true)
        .function("Pulse-guided training")
        .function("Intervals")
        .software_title("Bike Software")
        .build()
}

pub fn treadmill() -> Result<EquipmentModel, BuildError> {
    EquipmentBuilder::new()
        .type_key("treadmill")
        .display_name("Treadmill")
        .spec("max_speed_kmh", 18)
        .spec("incline_levels", 12)
        .function("Running")
        .function("Walking")
        .function("Hill program")
        .software_title("Treadmill Software")
        .build()
}

pub fn rowing_machine() -> Result<EquipmentModel, BuildError> {
    EquipmentBuilder::new()
        .type_key("rowing")
        .display_name("Rowing Machine")
        .spec("max_power_watts", 600)
        .spec("resistance_system", "magnetic")
        .function("Rowing")
        .function("Cardio")
        .function("Intervals")
        .software_title("Rowing Software")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FeatureFlags, RunState};
    use serde_json::json;

    #[test]
    fn blueprints_build_with_flags_all_off() {
        for model in [
            exercise_bike().unwrap(),
            treadmill().unwrap(),
            rowing_machine().unwrap(),
        ] {
            assert_eq!(model.flags, FeatureFlags::default());
            assert_eq!(model.run_state, RunState::Setup);
            assert!(!model.functions.is_empty());
        }
    }

    #[test]
    fn bike_carries_its_stock_specs() {
        let bike = exercise_bike().unwrap();
        assert_eq!(bike.spec("max_resistance"), Some(&json!(20)));
        assert_eq!(bike.spec("has_pulse_sensor"), Some(&json!(true)));
        assert_eq!(bike.base_software_title, "Bike Software");
    }

    #[test]
    fn every_blueprint_mints_a_distinct_identity() {
        let a = exercise_bike().unwrap();
        let b = exercise_bike().unwrap();
        assert_ne!(a.id(), b.id());
    }
}
