//! Read-only display data for the UI layer.
//!
//! The catalog tree is a tagged union of type nodes and model nodes behind
//! one labeling interface — the UI walks and labels nodes without knowing
//! which variant it holds. Everything here is a pure read; rendering never
//! operates a capability chain.

use crate::capability;
use crate::catalog::EquipmentCatalog;
use crate::model::{EquipmentModel, ModelId, RunState, SpecValue};

/// One node of the catalog display tree.
#[derive(Clone, Debug, PartialEq)]
pub enum CatalogNode {
    /// A type bucket with its model children.
    Type {
        key: String,
        children: Vec<CatalogNode>,
    },
    /// One configured model.
    Model {
        id: ModelId,
        label: String,
        software: String,
        run_state: RunState,
    },
}

impl CatalogNode {
    /// Display label, uniform across variants.
    pub fn label(&self) -> String {
        match self {
            Self::Type { key, children } => format!("{key} ({})", children.len()),
            Self::Model {
                label,
                software,
                run_state,
                ..
            } => format!("{label} ({software}) [{run_state}]"),
        }
    }
}

/// Build the display tree: one type node per non-empty bucket, in key
/// order, each holding its models in insertion order.
pub fn catalog_tree(catalog: &EquipmentCatalog) -> Vec<CatalogNode> {
    catalog
        .type_keys()
        .map(|key| CatalogNode::Type {
            key: key.to_string(),
            children: catalog
                .models_of(key)
                .iter()
                .map(|model| CatalogNode::Model {
                    id: model.id(),
                    label: model.display_name.clone(),
                    software: capability::chain_name(&model.base_software_title, &model.flags),
                    run_state: model.run_state,
                })
                .collect(),
        })
        .collect()
}

/// Render one model for display: name, derived software chain, run state,
/// specs, and functions.
pub fn model_summary(model: &EquipmentModel) -> String {
    let software = capability::chain_name(&model.base_software_title, &model.flags);

    let specs = if model.specs.is_empty() {
        "—".to_string()
    } else {
        model
            .specs
            .iter()
            .map(|(key, value)| format!("- {key}: {}", spec_value_text(value)))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let functions = if model.functions.is_empty() {
        "—".to_string()
    } else {
        model.functions.join(", ")
    };

    format!(
        "Type: {}\nSoftware: {}\nState: {}\n\nSpecs:\n{}\n\nFunctions:\n{}",
        model.display_name, software, model.run_state, specs, functions
    )
}

fn spec_value_text(value: &SpecValue) -> String {
    match value {
        SpecValue::String(text) => text.clone(),
        other => other.to_string(),
    }
}
