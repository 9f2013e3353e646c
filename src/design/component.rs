use serde::{Deserialize, Serialize};

use crate::design::element_model::{ComponentKind, Properties};
use crate::design::properties::{PropertyReader, as_json_text, record_to_properties};

// ============================================================================
// Typed property records, one per component kind
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonProps {
    pub text: String,
    pub variant: String,
    pub rounded: bool,
    pub color: String,
    pub text_color: String,
    pub padding: f64,
    /// Target screen id, empty for none
    pub navigate_to: String,
}

impl Default for ButtonProps {
    fn default() -> Self {
        Self {
            text: "Button".into(),
            variant: "primary".into(),
            rounded: true,
            color: "#2196F3".into(),
            text_color: "#FFFFFF".into(),
            padding: 16.0,
            navigate_to: String::new(),
        }
    }
}

impl ButtonProps {
    fn read(r: &PropertyReader) -> Self {
        let d = Self::default();
        Self {
            text: r.string("text", d.text),
            variant: r.string("variant", d.variant),
            rounded: r.flag("rounded", d.rounded),
            color: r.string("color", d.color),
            text_color: r.string("textColor", d.text_color),
            padding: r.number("padding", d.padding),
            navigate_to: r.string("navigateTo", d.navigate_to),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextFieldProps {
    pub hint: String,
    pub label: String,
    pub has_icon: bool,
    pub icon: String,
    pub validation: bool,
    pub validation_message: String,
}

impl Default for TextFieldProps {
    fn default() -> Self {
        Self {
            hint: "Enter text".into(),
            label: "Label".into(),
            has_icon: false,
            icon: "search".into(),
            validation: false,
            validation_message: "Please enter a valid value".into(),
        }
    }
}

impl TextFieldProps {
    fn read(r: &PropertyReader) -> Self {
        let d = Self::default();
        Self {
            hint: r.string("hint", d.hint),
            label: r.string("label", d.label),
            has_icon: r.flag("hasIcon", d.has_icon),
            icon: r.string("icon", d.icon),
            validation: r.flag("validation", d.validation),
            validation_message: r.string("validationMessage", d.validation_message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardProps {
    pub elevation: f64,
    pub border_radius: f64,
    pub color: String,
    pub padding: f64,
}

impl Default for CardProps {
    fn default() -> Self {
        Self {
            elevation: 2.0,
            border_radius: 8.0,
            color: "#FFFFFF".into(),
            padding: 16.0,
        }
    }
}

impl CardProps {
    fn read(r: &PropertyReader) -> Self {
        let d = Self::default();
        Self {
            elevation: r.number("elevation", d.elevation),
            border_radius: r.number("borderRadius", d.border_radius),
            color: r.string("color", d.color),
            padding: r.number("padding", d.padding),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListProps {
    pub direction: String,
    pub scrollable: bool,
    pub item_count: u32,
    pub item_height: f64,
}

impl Default for ListProps {
    fn default() -> Self {
        Self {
            direction: "vertical".into(),
            scrollable: true,
            item_count: 5,
            item_height: 50.0,
        }
    }
}

impl ListProps {
    fn read(r: &PropertyReader) -> Self {
        let d = Self::default();
        Self {
            direction: r.string("direction", d.direction),
            scrollable: r.flag("scrollable", d.scrollable),
            item_count: r.count("itemCount", d.item_count),
            item_height: r.number("itemHeight", d.item_height),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IconProps {
    pub name: String,
    pub color: String,
    pub size: f64,
}

impl Default for IconProps {
    fn default() -> Self {
        Self {
            name: "star".into(),
            color: "#000000".into(),
            size: 24.0,
        }
    }
}

impl IconProps {
    fn read(r: &PropertyReader) -> Self {
        let d = Self::default();
        Self {
            name: r.string("name", d.name),
            color: r.string("color", d.color),
            size: r.number("size", d.size),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerProps {
    pub color: String,
    pub padding: f64,
    pub margin: f64,
    pub border_radius: f64,
}

impl Default for ContainerProps {
    fn default() -> Self {
        Self {
            color: "#E0E0E0".into(),
            padding: 16.0,
            margin: 8.0,
            border_radius: 0.0,
        }
    }
}

impl ContainerProps {
    fn read(r: &PropertyReader) -> Self {
        let d = Self::default();
        Self {
            color: r.string("color", d.color),
            padding: r.number("padding", d.padding),
            margin: r.number("margin", d.margin),
            border_radius: r.number("borderRadius", d.border_radius),
        }
    }
}

/// Shared by `row` and `column`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlexProps {
    pub main_axis_alignment: String,
    pub cross_axis_alignment: String,
    pub padding: f64,
}

impl Default for FlexProps {
    fn default() -> Self {
        Self {
            main_axis_alignment: "start".into(),
            cross_axis_alignment: "center".into(),
            padding: 8.0,
        }
    }
}

impl FlexProps {
    fn read(r: &PropertyReader) -> Self {
        let d = Self::default();
        Self {
            main_axis_alignment: r.string("mainAxisAlignment", d.main_axis_alignment),
            cross_axis_alignment: r.string("crossAxisAlignment", d.cross_axis_alignment),
            padding: r.number("padding", d.padding),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StackProps {
    pub alignment: String,
    pub padding: f64,
}

impl Default for StackProps {
    fn default() -> Self {
        Self {
            alignment: "center".into(),
            padding: 8.0,
        }
    }
}

impl StackProps {
    fn read(r: &PropertyReader) -> Self {
        let d = Self::default();
        Self {
            alignment: r.string("alignment", d.alignment),
            padding: r.number("padding", d.padding),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchProps {
    pub value: bool,
    pub active_color: String,
    pub inactive_color: String,
}

impl Default for SwitchProps {
    fn default() -> Self {
        Self {
            value: false,
            active_color: "#2196F3".into(),
            inactive_color: "#9E9E9E".into(),
        }
    }
}

impl SwitchProps {
    fn read(r: &PropertyReader) -> Self {
        let d = Self::default();
        Self {
            value: r.flag("value", d.value),
            active_color: r.string("activeColor", d.active_color),
            inactive_color: r.string("inactiveColor", d.inactive_color),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckboxProps {
    pub value: bool,
    pub active_color: String,
}

impl Default for CheckboxProps {
    fn default() -> Self {
        Self {
            value: false,
            active_color: "#2196F3".into(),
        }
    }
}

impl CheckboxProps {
    fn read(r: &PropertyReader) -> Self {
        let d = Self::default();
        Self {
            value: r.flag("value", d.value),
            active_color: r.string("activeColor", d.active_color),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadioProps {
    pub value: bool,
    pub active_color: String,
    pub group_value: String,
}

impl Default for RadioProps {
    fn default() -> Self {
        Self {
            value: false,
            active_color: "#2196F3".into(),
            group_value: "option1".into(),
        }
    }
}

impl RadioProps {
    fn read(r: &PropertyReader) -> Self {
        let d = Self::default();
        Self {
            value: r.flag("value", d.value),
            active_color: r.string("activeColor", d.active_color),
            group_value: r.string("groupValue", d.group_value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatInputProps {
    pub placeholder: String,
    pub button_text: String,
    pub button_color: String,
}

impl Default for ChatInputProps {
    fn default() -> Self {
        Self {
            placeholder: "Type a message...".into(),
            button_text: "Send".into(),
            button_color: "#2196F3".into(),
        }
    }
}

impl ChatInputProps {
    fn read(r: &PropertyReader) -> Self {
        let d = Self::default();
        Self {
            placeholder: r.string("placeholder", d.placeholder),
            button_text: r.string("buttonText", d.button_text),
            button_color: r.string("buttonColor", d.button_color),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessageProps {
    pub text: String,
    pub is_user: bool,
    pub avatar: bool,
    pub timestamp: bool,
}

impl Default for ChatMessageProps {
    fn default() -> Self {
        Self {
            text: "Hello! This is a sample message.".into(),
            is_user: true,
            avatar: true,
            timestamp: true,
        }
    }
}

impl ChatMessageProps {
    fn read(r: &PropertyReader) -> Self {
        let d = Self::default();
        Self {
            text: r.string("text", d.text),
            is_user: r.flag("isUser", d.is_user),
            avatar: r.flag("avatar", d.avatar),
            timestamp: r.flag("timestamp", d.timestamp),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

impl DropdownOption {
    /// Used when stored options are missing or malformed.
    pub fn fallback() -> Vec<DropdownOption> {
        (1..=3)
            .map(|i| DropdownOption {
                label: format!("Option {}", i),
                value: format!("option{}", i),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DropdownProps {
    pub label: String,
    pub placeholder: String,
    #[serde(serialize_with = "as_json_text")]
    pub options: Vec<DropdownOption>,
    pub value: String,
    pub required: bool,
    pub disabled: bool,
    pub border_color: String,
    pub background_color: String,
}

impl Default for DropdownProps {
    fn default() -> Self {
        Self {
            label: "Select an option".into(),
            placeholder: "Choose...".into(),
            options: DropdownOption::fallback(),
            value: String::new(),
            required: false,
            disabled: false,
            border_color: "#d1d5db".into(),
            background_color: "#ffffff".into(),
        }
    }
}

impl DropdownProps {
    fn read(r: &PropertyReader) -> Self {
        let d = Self::default();
        Self {
            label: r.string("label", d.label),
            placeholder: r.string("placeholder", d.placeholder),
            options: r.list("options", DropdownOption::fallback),
            value: r.string("value", d.value),
            required: r.flag("required", d.required),
            disabled: r.flag("disabled", d.disabled),
            border_color: r.string("borderColor", d.border_color),
            background_color: r.string("backgroundColor", d.background_color),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabeledInputProps {
    pub label: String,
    pub placeholder: String,
    pub value: String,
    /// Input type: text, password, email, number
    #[serde(rename = "type")]
    pub input_type: String,
    pub required: bool,
    pub disabled: bool,
    pub border_color: String,
    pub label_color: String,
}

impl Default for LabeledInputProps {
    fn default() -> Self {
        Self {
            label: "Input Label".into(),
            placeholder: "Enter text...".into(),
            value: String::new(),
            input_type: "text".into(),
            required: false,
            disabled: false,
            border_color: "#d1d5db".into(),
            label_color: "#374151".into(),
        }
    }
}

impl LabeledInputProps {
    fn read(r: &PropertyReader) -> Self {
        let d = Self::default();
        Self {
            label: r.string("label", d.label),
            placeholder: r.string("placeholder", d.placeholder),
            value: r.string("value", d.value),
            input_type: r.string("type", d.input_type),
            required: r.flag("required", d.required),
            disabled: r.flag("disabled", d.disabled),
            border_color: r.string("borderColor", d.border_color),
            label_color: r.string("labelColor", d.label_color),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabeledSwitchProps {
    pub label: String,
    pub value: bool,
    pub active_color: String,
    pub inactive_color: String,
    pub label_position: String,
    pub disabled: bool,
    pub label_color: String,
}

impl Default for LabeledSwitchProps {
    fn default() -> Self {
        Self {
            label: "Toggle Switch".into(),
            value: false,
            active_color: "#2196F3".into(),
            inactive_color: "#9E9E9E".into(),
            label_position: "right".into(),
            disabled: false,
            label_color: "#374151".into(),
        }
    }
}

impl LabeledSwitchProps {
    fn read(r: &PropertyReader) -> Self {
        let d = Self::default();
        Self {
            label: r.string("label", d.label),
            value: r.flag("value", d.value),
            active_color: r.string("activeColor", d.active_color),
            inactive_color: r.string("inactiveColor", d.inactive_color),
            label_position: r.string("labelPosition", d.label_position),
            disabled: r.flag("disabled", d.disabled),
            label_color: r.string("labelColor", d.label_color),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabeledRadioProps {
    pub label: String,
    pub value: bool,
    pub active_color: String,
    pub group_value: String,
    pub label_position: String,
    pub disabled: bool,
    pub label_color: String,
}

impl Default for LabeledRadioProps {
    fn default() -> Self {
        Self {
            label: "Radio Option".into(),
            value: false,
            active_color: "#2196F3".into(),
            group_value: "option1".into(),
            label_position: "right".into(),
            disabled: false,
            label_color: "#374151".into(),
        }
    }
}

impl LabeledRadioProps {
    fn read(r: &PropertyReader) -> Self {
        let d = Self::default();
        Self {
            label: r.string("label", d.label),
            value: r.flag("value", d.value),
            active_color: r.string("activeColor", d.active_color),
            group_value: r.string("groupValue", d.group_value),
            label_position: r.string("labelPosition", d.label_position),
            disabled: r.flag("disabled", d.disabled),
            label_color: r.string("labelColor", d.label_color),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabeledCheckboxProps {
    pub label: String,
    pub value: bool,
    pub active_color: String,
    pub label_position: String,
    pub disabled: bool,
    pub label_color: String,
}

impl Default for LabeledCheckboxProps {
    fn default() -> Self {
        Self {
            label: "Checkbox Option".into(),
            value: false,
            active_color: "#2196F3".into(),
            label_position: "right".into(),
            disabled: false,
            label_color: "#374151".into(),
        }
    }
}

impl LabeledCheckboxProps {
    fn read(r: &PropertyReader) -> Self {
        let d = Self::default();
        Self {
            label: r.string("label", d.label),
            value: r.flag("value", d.value),
            active_color: r.string("activeColor", d.active_color),
            label_position: r.string("labelPosition", d.label_position),
            disabled: r.flag("disabled", d.disabled),
            label_color: r.string("labelColor", d.label_color),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableColumn {
    pub id: String,
    pub title: String,
    #[serde(default = "default_column_width")]
    pub width: f64,
}

fn default_column_width() -> f64 {
    100.0
}

impl TableColumn {
    /// Used when stored columns are missing or malformed.
    pub fn fallback() -> Vec<TableColumn> {
        (1..=3)
            .map(|i| TableColumn {
                id: format!("col{}", i),
                title: format!("Column {}", i),
                width: 100.0,
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableProps {
    pub title: String,
    #[serde(serialize_with = "as_json_text")]
    pub columns: Vec<TableColumn>,
    pub row_count: u32,
    pub show_header: bool,
    pub show_border: bool,
    pub striped: bool,
    pub header_color: String,
    pub border_color: String,
    pub even_row_color: String,
    pub odd_row_color: String,
}

impl Default for TableProps {
    fn default() -> Self {
        Self {
            title: "Data Table".into(),
            columns: TableColumn::fallback(),
            row_count: 3,
            show_header: true,
            show_border: true,
            striped: true,
            header_color: "#f3f4f6".into(),
            border_color: "#e5e7eb".into(),
            even_row_color: "#ffffff".into(),
            odd_row_color: "#f9fafb".into(),
        }
    }
}

impl TableProps {
    fn read(r: &PropertyReader) -> Self {
        let d = Self::default();
        Self {
            title: r.string("title", d.title),
            columns: Some(r.list("columns", TableColumn::fallback))
                .filter(|columns| !columns.is_empty())
                .unwrap_or_else(TableColumn::fallback),
            row_count: r.count("rowCount", d.row_count),
            show_header: r.flag("showHeader", d.show_header),
            show_border: r.flag("showBorder", d.show_border),
            striped: r.flag("striped", d.striped),
            header_color: r.string("headerColor", d.header_color),
            border_color: r.string("borderColor", d.border_color),
            even_row_color: r.string("evenRowColor", d.even_row_color),
            odd_row_color: r.string("oddRowColor", d.odd_row_color),
        }
    }
}

// ============================================================================
// Component: tagged union over the kinds
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    Button(ButtonProps),
    TextField(TextFieldProps),
    Card(CardProps),
    List(ListProps),
    Icon(IconProps),
    Container(ContainerProps),
    Row(FlexProps),
    Column(FlexProps),
    Stack(StackProps),
    Switch(SwitchProps),
    Checkbox(CheckboxProps),
    Radio(RadioProps),
    ChatInput(ChatInputProps),
    ChatMessage(ChatMessageProps),
    Dropdown(DropdownProps),
    InputWithLabel(LabeledInputProps),
    SwitchWithLabel(LabeledSwitchProps),
    RadioWithLabel(LabeledRadioProps),
    CheckboxWithLabel(LabeledCheckboxProps),
    DynamicTable(TableProps),
    /// Unrecognized type name; its properties are carried through untouched.
    Other { kind: String, properties: Properties },
}

impl Component {
    pub fn default_for(kind: &ComponentKind) -> Self {
        Self::from_properties(kind, &Properties::new())
    }

    /// Read a property bag through the schema of `kind`. Total: absent or
    /// malformed keys take the kind's defaults.
    pub fn from_properties(kind: &ComponentKind, props: &Properties) -> Self {
        let r = PropertyReader::new(props);
        match kind {
            ComponentKind::Button => Component::Button(ButtonProps::read(&r)),
            ComponentKind::TextField => Component::TextField(TextFieldProps::read(&r)),
            ComponentKind::Card => Component::Card(CardProps::read(&r)),
            ComponentKind::List => Component::List(ListProps::read(&r)),
            ComponentKind::Icon => Component::Icon(IconProps::read(&r)),
            ComponentKind::Container => Component::Container(ContainerProps::read(&r)),
            ComponentKind::Row => Component::Row(FlexProps::read(&r)),
            ComponentKind::Column => Component::Column(FlexProps::read(&r)),
            ComponentKind::Stack => Component::Stack(StackProps::read(&r)),
            ComponentKind::Switch => Component::Switch(SwitchProps::read(&r)),
            ComponentKind::Checkbox => Component::Checkbox(CheckboxProps::read(&r)),
            ComponentKind::Radio => Component::Radio(RadioProps::read(&r)),
            ComponentKind::ChatInput => Component::ChatInput(ChatInputProps::read(&r)),
            ComponentKind::ChatMessage => Component::ChatMessage(ChatMessageProps::read(&r)),
            ComponentKind::Dropdown => Component::Dropdown(DropdownProps::read(&r)),
            ComponentKind::InputWithLabel => Component::InputWithLabel(LabeledInputProps::read(&r)),
            ComponentKind::SwitchWithLabel => {
                Component::SwitchWithLabel(LabeledSwitchProps::read(&r))
            }
            ComponentKind::RadioWithLabel => Component::RadioWithLabel(LabeledRadioProps::read(&r)),
            ComponentKind::CheckboxWithLabel => {
                Component::CheckboxWithLabel(LabeledCheckboxProps::read(&r))
            }
            ComponentKind::DynamicTable => Component::DynamicTable(TableProps::read(&r)),
            ComponentKind::Other(name) => Component::Other {
                kind: name.clone(),
                properties: props.clone(),
            },
        }
    }

    pub fn kind(&self) -> ComponentKind {
        match self {
            Component::Button(_) => ComponentKind::Button,
            Component::TextField(_) => ComponentKind::TextField,
            Component::Card(_) => ComponentKind::Card,
            Component::List(_) => ComponentKind::List,
            Component::Icon(_) => ComponentKind::Icon,
            Component::Container(_) => ComponentKind::Container,
            Component::Row(_) => ComponentKind::Row,
            Component::Column(_) => ComponentKind::Column,
            Component::Stack(_) => ComponentKind::Stack,
            Component::Switch(_) => ComponentKind::Switch,
            Component::Checkbox(_) => ComponentKind::Checkbox,
            Component::Radio(_) => ComponentKind::Radio,
            Component::ChatInput(_) => ComponentKind::ChatInput,
            Component::ChatMessage(_) => ComponentKind::ChatMessage,
            Component::Dropdown(_) => ComponentKind::Dropdown,
            Component::InputWithLabel(_) => ComponentKind::InputWithLabel,
            Component::SwitchWithLabel(_) => ComponentKind::SwitchWithLabel,
            Component::RadioWithLabel(_) => ComponentKind::RadioWithLabel,
            Component::CheckboxWithLabel(_) => ComponentKind::CheckboxWithLabel,
            Component::DynamicTable(_) => ComponentKind::DynamicTable,
            Component::Other { kind, .. } => ComponentKind::Other(kind.clone()),
        }
    }

    pub fn to_properties(&self) -> Properties {
        match self {
            Component::Button(p) => record_to_properties(p),
            Component::TextField(p) => record_to_properties(p),
            Component::Card(p) => record_to_properties(p),
            Component::List(p) => record_to_properties(p),
            Component::Icon(p) => record_to_properties(p),
            Component::Container(p) => record_to_properties(p),
            Component::Row(p) | Component::Column(p) => record_to_properties(p),
            Component::Stack(p) => record_to_properties(p),
            Component::Switch(p) => record_to_properties(p),
            Component::Checkbox(p) => record_to_properties(p),
            Component::Radio(p) => record_to_properties(p),
            Component::ChatInput(p) => record_to_properties(p),
            Component::ChatMessage(p) => record_to_properties(p),
            Component::Dropdown(p) => record_to_properties(p),
            Component::InputWithLabel(p) => record_to_properties(p),
            Component::SwitchWithLabel(p) => record_to_properties(p),
            Component::RadioWithLabel(p) => record_to_properties(p),
            Component::CheckboxWithLabel(p) => record_to_properties(p),
            Component::DynamicTable(p) => record_to_properties(p),
            Component::Other { properties, .. } => properties.clone(),
        }
    }
}
