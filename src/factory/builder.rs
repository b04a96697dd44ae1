//! Step-by-step assembly of equipment models.

use super::error::BuildError;
use crate::model::{EquipmentModel, SpecValue};

/// Fluent builder for [`EquipmentModel`].
///
/// Records every step in a log that is carried onto the built model, so a
/// finished model can explain how it was assembled. Built models always start
/// with all feature flags off and run state `Setup`.
///
/// # Example
///
/// ```rust
/// use trainset::factory::EquipmentBuilder;
///
/// let model = EquipmentBuilder::new()
///     .type_key("bike")
///     .display_name("Exercise Bike")
///     .spec("max_resistance", 20)
///     .function("Intervals")
///     .software_title("Bike Software")
///     .build()
///     .unwrap();
///
/// assert_eq!(model.type_key, "bike");
/// assert_eq!(model.base_software_title, "Bike Software");
/// assert!(model.build_log.last().unwrap().starts_with("build()"));
/// ```
pub struct EquipmentBuilder {
    type_key: Option<String>,
    display_name: Option<String>,
    specs: Vec<(String, SpecValue)>,
    functions: Vec<String>,
    software_title: Option<String>,
    log: Vec<String>,
}

impl EquipmentBuilder {
    pub fn new() -> Self {
        Self {
            type_key: None,
            display_name: None,
            specs: Vec::new(),
            functions: Vec::new(),
            software_title: None,
            log: vec!["reset() -> started an empty model".to_string()],
        }
    }

    /// Set the catalog type key (required).
    pub fn type_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.log.push(format!("set_type({key})"));
        self.type_key = Some(key);
        self
    }

    /// Set the human-facing label (required).
    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.log.push(format!("set_display_name({name})"));
        self.display_name = Some(name);
        self
    }

    /// Append one spec entry; entries keep their insertion order.
    pub fn spec(mut self, key: impl Into<String>, value: impl Into<SpecValue>) -> Self {
        let (key, value) = (key.into(), value.into());
        self.log.push(format!("add_spec({key}={value})"));
        self.specs.push((key, value));
        self
    }

    /// Append one workout function.
    pub fn function(mut self, function: impl Into<String>) -> Self {
        let function = function.into();
        self.log.push(format!("add_function({function})"));
        self.functions.push(function);
        self
    }

    /// Set the base software title. Defaults to "Base Software".
    pub fn software_title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        self.log.push(format!("set_software({title})"));
        self.software_title = Some(title);
        self
    }

    /// Build the model.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<EquipmentModel, BuildError> {
        let type_key = self.type_key.ok_or(BuildError::MissingTypeKey)?;
        let display_name = self.display_name.ok_or(BuildError::MissingDisplayName)?;
        let software_title = self
            .software_title
            .unwrap_or_else(|| "Base Software".to_string());

        let mut model = EquipmentModel::new(display_name, type_key, software_title);
        model.specs = self.specs;
        model.functions = self.functions;
        model.build_log = self.log;
        model.build_log.push("build() -> model ready".to_string());
        Ok(model)
    }
}

impl Default for EquipmentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builder_validates_required_fields() {
        let result = EquipmentBuilder::new().build();
        assert_eq!(result.unwrap_err(), BuildError::MissingTypeKey);

        let result = EquipmentBuilder::new().type_key("bike").build();
        assert_eq!(result.unwrap_err(), BuildError::MissingDisplayName);
    }

    #[test]
    fn software_title_defaults_when_not_set() {
        let model = EquipmentBuilder::new()
            .type_key("bike")
            .display_name("Exercise Bike")
            .build()
            .unwrap();

        assert_eq!(model.base_software_title, "Base Software");
    }

    #[test]
    fn specs_keep_their_step_order() {
        let model = EquipmentBuilder::new()
            .type_key("treadmill")
            .display_name("Treadmill")
            .spec("max_speed_kmh", 18)
            .spec("incline_levels", 12)
            .build()
            .unwrap();

        assert_eq!(
            model.specs,
            vec![
                ("max_speed_kmh".to_string(), json!(18)),
                ("incline_levels".to_string(), json!(12)),
            ]
        );
    }

    #[test]
    fn build_log_records_every_step() {
        let model = EquipmentBuilder::new()
            .type_key("bike")
            .display_name("Exercise Bike")
            .function("Intervals")
            .build()
            .unwrap();

        assert_eq!(model.build_log.first().unwrap(), "reset() -> started an empty model");
        assert!(model.build_log.contains(&"add_function(Intervals)".to_string()));
        assert_eq!(model.build_log.last().unwrap(), "build() -> model ready");
    }
}
