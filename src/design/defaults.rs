use serde::Serialize;

use crate::design::component::Component;
use crate::design::element_model::{ComponentKind, Properties};

/// Size used for types the designer does not know.
pub const FALLBACK_SIZE: (f64, f64) = (100.0, 50.0);

/// Default geometry and property bag for one component kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentDefaults {
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    pub width: f64,
    pub height: f64,
    pub properties: Properties,
}

/// Default `(width, height)` for a freshly placed component.
pub fn default_size(kind: &ComponentKind) -> (f64, f64) {
    match kind {
        ComponentKind::Button => (120.0, 40.0),
        ComponentKind::TextField => (200.0, 56.0),
        ComponentKind::Card => (300.0, 200.0),
        ComponentKind::List => (300.0, 300.0),
        ComponentKind::Icon => (24.0, 24.0),
        ComponentKind::Container => (200.0, 200.0),
        ComponentKind::Row => (300.0, 50.0),
        ComponentKind::Column => (200.0, 200.0),
        ComponentKind::Stack => (200.0, 200.0),
        ComponentKind::Switch => (60.0, 24.0),
        ComponentKind::Checkbox => (24.0, 24.0),
        ComponentKind::Radio => (24.0, 24.0),
        ComponentKind::ChatInput => (300.0, 50.0),
        ComponentKind::ChatMessage => (250.0, 80.0),
        ComponentKind::Dropdown => (200.0, 70.0),
        ComponentKind::InputWithLabel => (200.0, 70.0),
        ComponentKind::SwitchWithLabel => (200.0, 40.0),
        ComponentKind::RadioWithLabel => (200.0, 40.0),
        ComponentKind::CheckboxWithLabel => (200.0, 40.0),
        ComponentKind::DynamicTable => (350.0, 200.0),
        ComponentKind::Other(_) => FALLBACK_SIZE,
    }
}

/// Resolve the full default schema for `kind`. Total: unknown kinds get the
/// fallback rectangle and an empty bag.
pub fn resolve_defaults(kind: &ComponentKind) -> ComponentDefaults {
    let (width, height) = default_size(kind);
    ComponentDefaults {
        kind: kind.clone(),
        width,
        height,
        properties: Component::default_for(kind).to_properties(),
    }
}

/// Same as `resolve_defaults`, keyed by wire name.
pub fn resolve_defaults_by_name(name: &str) -> ComponentDefaults {
    resolve_defaults(&ComponentKind::parse(name))
}

/// Defaults for every known kind, in palette order.
pub fn all_defaults() -> Vec<ComponentDefaults> {
    ComponentKind::KNOWN.iter().map(resolve_defaults).collect()
}
