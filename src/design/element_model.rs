use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::design::component::Component;
use crate::design::defaults::default_size;

/// Property bag as exchanged with external editors.
pub type Properties = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScreenId(pub String);

impl ElementId {
    pub fn generate() -> Self {
        ElementId(format!("element-{}", uuid::Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ScreenId {
    pub fn generate() -> Self {
        ScreenId(format!("screen-{}", uuid::Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ScreenId {
    fn from(s: &str) -> Self {
        ScreenId(s.to_string())
    }
}

impl From<&str> for ElementId {
    fn from(s: &str) -> Self {
        ElementId(s.to_string())
    }
}

// ============================================================================
// Component kinds
// ============================================================================

/// The closed set of placeable components, plus a carrier for type names
/// written by newer or foreign editors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ComponentKind {
    Button,
    TextField,
    Card,
    List,
    Icon,
    Container,
    Row,
    Column,
    Stack,
    Switch,
    Checkbox,
    Radio,
    ChatInput,
    ChatMessage,
    Dropdown,
    InputWithLabel,
    SwitchWithLabel,
    RadioWithLabel,
    CheckboxWithLabel,
    DynamicTable,
    Other(String),
}

impl ComponentKind {
    /// Every known kind, in palette order.
    pub const KNOWN: [ComponentKind; 20] = [
        ComponentKind::Button,
        ComponentKind::TextField,
        ComponentKind::Card,
        ComponentKind::List,
        ComponentKind::Icon,
        ComponentKind::Container,
        ComponentKind::Row,
        ComponentKind::Column,
        ComponentKind::Stack,
        ComponentKind::Switch,
        ComponentKind::Checkbox,
        ComponentKind::Radio,
        ComponentKind::ChatInput,
        ComponentKind::ChatMessage,
        ComponentKind::Dropdown,
        ComponentKind::InputWithLabel,
        ComponentKind::SwitchWithLabel,
        ComponentKind::RadioWithLabel,
        ComponentKind::CheckboxWithLabel,
        ComponentKind::DynamicTable,
    ];

    /// Wire name used in documents (`"textField"`, `"dynamicTable"`, ...).
    pub fn name(&self) -> &str {
        match self {
            ComponentKind::Button => "button",
            ComponentKind::TextField => "textField",
            ComponentKind::Card => "card",
            ComponentKind::List => "list",
            ComponentKind::Icon => "icon",
            ComponentKind::Container => "container",
            ComponentKind::Row => "row",
            ComponentKind::Column => "column",
            ComponentKind::Stack => "stack",
            ComponentKind::Switch => "switch",
            ComponentKind::Checkbox => "checkbox",
            ComponentKind::Radio => "radio",
            ComponentKind::ChatInput => "chatInput",
            ComponentKind::ChatMessage => "chatMessage",
            ComponentKind::Dropdown => "dropdown",
            ComponentKind::InputWithLabel => "inputWithLabel",
            ComponentKind::SwitchWithLabel => "switchWithLabel",
            ComponentKind::RadioWithLabel => "radioWithLabel",
            ComponentKind::CheckboxWithLabel => "checkboxWithLabel",
            ComponentKind::DynamicTable => "dynamicTable",
            ComponentKind::Other(name) => name.as_str(),
        }
    }

    pub fn parse(name: &str) -> Self {
        Self::KNOWN
            .iter()
            .find(|kind| kind.name() == name)
            .cloned()
            .unwrap_or_else(|| ComponentKind::Other(name.to_string()))
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ComponentKind::Other(_))
    }
}

impl From<String> for ComponentKind {
    fn from(name: String) -> Self {
        ComponentKind::parse(&name)
    }
}

impl From<ComponentKind> for String {
    fn from(kind: ComponentKind) -> Self {
        kind.name().to_string()
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Element
// ============================================================================

/// One placed component. Properties are held typed; the string-keyed map only
/// exists on the wire (see `RawElement`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawElement", into = "RawElement")]
pub struct Element {
    pub id: ElementId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub component: Component,
    pub children: Vec<Element>,
}

impl Element {
    /// A fresh element of `kind` at `(x, y)` with the kind's default size and
    /// properties.
    pub fn new(kind: &ComponentKind, x: f64, y: f64) -> Self {
        let (width, height) = default_size(kind);
        Self {
            id: ElementId::generate(),
            x,
            y,
            width,
            height,
            component: Component::default_for(kind),
            children: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = ElementId(id.into());
        self
    }

    pub fn kind(&self) -> ComponentKind {
        self.component.kind()
    }

    pub fn properties(&self) -> Properties {
        self.component.to_properties()
    }

    /// Shallow merge: geometry fields replace, property keys overwrite one by
    /// one. The merged bag is re-read through the kind's schema, so default
    /// keys survive and malformed values fall back to defaults.
    pub fn apply(&mut self, patch: &ElementPatch) {
        if let Some(x) = patch.x {
            self.x = x;
        }
        if let Some(y) = patch.y {
            self.y = y;
        }
        if let Some(width) = patch.width {
            self.width = width;
        }
        if let Some(height) = patch.height {
            self.height = height;
        }
        if !patch.properties.is_empty() {
            let mut merged = self.properties();
            for (key, value) in &patch.properties {
                merged.insert(key.clone(), value.clone());
            }
            self.component = Component::from_properties(&self.kind(), &merged);
        }
    }
}

/// Partial update applied by `Element::apply`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub properties: Properties,
}

impl ElementPatch {
    pub fn position(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    pub fn size(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            ..Self::default()
        }
    }

    pub fn property(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.properties.insert(key.to_string(), value.into());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawElement {
    id: ElementId,
    #[serde(rename = "type")]
    kind: ComponentKind,
    #[serde(default)]
    x: f64,
    #[serde(default)]
    y: f64,
    #[serde(default)]
    width: f64,
    #[serde(default)]
    height: f64,
    #[serde(default)]
    properties: Properties,
    #[serde(default)]
    children: Vec<Element>,
}

impl From<RawElement> for Element {
    fn from(raw: RawElement) -> Self {
        Self {
            id: raw.id,
            x: raw.x,
            y: raw.y,
            width: raw.width,
            height: raw.height,
            component: Component::from_properties(&raw.kind, &raw.properties),
            children: raw.children,
        }
    }
}

impl From<Element> for RawElement {
    fn from(el: Element) -> Self {
        Self {
            id: el.id,
            kind: el.component.kind(),
            x: el.x,
            y: el.y,
            width: el.width,
            height: el.height,
            properties: el.component.to_properties(),
            children: el.children,
        }
    }
}

// ============================================================================
// Screens and documents
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Screen {
    pub id: ScreenId,
    pub name: String,
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl Screen {
    pub fn new(id: ScreenId, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            elements: Vec::new(),
        }
    }
}

/// Ordered screens of one design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub screens: Vec<Screen>,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            screens: vec![Screen::new(ScreenId::from("screen-1"), "Home")],
        }
    }
}

impl Document {
    pub fn screen(&self, id: &ScreenId) -> Option<&Screen> {
        self.screens.iter().find(|s| &s.id == id)
    }

    pub fn screen_mut(&mut self, id: &ScreenId) -> Option<&mut Screen> {
        self.screens.iter_mut().find(|s| &s.id == id)
    }

    pub fn contains(&self, id: &ScreenId) -> bool {
        self.screen(id).is_some()
    }
}
