// ============================================================================
// Enumerated property tables
// ============================================================================
//
// Each table maps an editor value to a Flutter constant. Unrecognized or
// empty values take the first entry (the start / topLeft constant).

const MAIN_AXIS: &[(&str, &str)] = &[
    ("start", "MainAxisAlignment.start"),
    ("center", "MainAxisAlignment.center"),
    ("end", "MainAxisAlignment.end"),
    ("spaceBetween", "MainAxisAlignment.spaceBetween"),
    ("spaceAround", "MainAxisAlignment.spaceAround"),
    ("spaceEvenly", "MainAxisAlignment.spaceEvenly"),
];

const CROSS_AXIS: &[(&str, &str)] = &[
    ("start", "CrossAxisAlignment.start"),
    ("center", "CrossAxisAlignment.center"),
    ("end", "CrossAxisAlignment.end"),
    ("stretch", "CrossAxisAlignment.stretch"),
];

const STACK_ALIGNMENT: &[(&str, &str)] = &[
    ("topLeft", "Alignment.topLeft"),
    ("topCenter", "Alignment.topCenter"),
    ("topRight", "Alignment.topRight"),
    ("centerLeft", "Alignment.centerLeft"),
    ("center", "Alignment.center"),
    ("centerRight", "Alignment.centerRight"),
    ("bottomLeft", "Alignment.bottomLeft"),
    ("bottomCenter", "Alignment.bottomCenter"),
    ("bottomRight", "Alignment.bottomRight"),
];

fn lookup(table: &[(&str, &'static str)], value: &str) -> &'static str {
    table
        .iter()
        .find(|(key, _)| *key == value)
        .map(|(_, constant)| *constant)
        .unwrap_or(table[0].1)
}

pub fn main_axis_alignment(value: &str) -> &'static str {
    lookup(MAIN_AXIS, value)
}

pub fn cross_axis_alignment(value: &str) -> &'static str {
    lookup(CROSS_AXIS, value)
}

pub fn stack_alignment(value: &str) -> &'static str {
    lookup(STACK_ALIGNMENT, value)
}

/// Side of the control a label sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelPosition {
    Left,
    Right,
}

pub fn label_position(value: &str) -> LabelPosition {
    match value {
        "right" => LabelPosition::Right,
        _ => LabelPosition::Left,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAxis {
    Vertical,
    Horizontal,
}

pub fn list_axis(direction: &str) -> ListAxis {
    match direction {
        "horizontal" => ListAxis::Horizontal,
        _ => ListAxis::Vertical,
    }
}

/// `keyboardType` for a labeled input's `type`, if it needs one.
pub fn keyboard_type(input_type: &str) -> Option<&'static str> {
    match input_type {
        "email" => Some("TextInputType.emailAddress"),
        "number" => Some("TextInputType.number"),
        "tel" | "phone" => Some("TextInputType.phone"),
        "url" => Some("TextInputType.url"),
        _ => None,
    }
}
