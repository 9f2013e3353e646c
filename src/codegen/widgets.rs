use crate::codegen::color::hex_to_argb;
use crate::codegen::dart::{dart_string, fixed1, icon_identifier, route_name};
use crate::codegen::mapping::{
    LabelPosition, ListAxis, cross_axis_alignment, keyboard_type, label_position, list_axis,
    main_axis_alignment, stack_alignment,
};
use crate::design::component::{
    ButtonProps, CardProps, ChatInputProps, ChatMessageProps, CheckboxProps, Component,
    ContainerProps, DropdownProps, FlexProps, IconProps, LabeledCheckboxProps, LabeledInputProps,
    LabeledRadioProps, LabeledSwitchProps, ListProps, RadioProps, StackProps, SwitchProps,
    TableProps, TextFieldProps,
};
use crate::design::element_model::ScreenId;

/// Upper bound on table rows written out cell by cell.
pub const MAX_TABLE_ROWS: u32 = 1000;

/// What a widget generator may know beyond its own properties.
#[derive(Debug, Clone, Copy, Default)]
pub struct WidgetContext<'a> {
    /// Screens reachable by named route. Empty for single-screen output.
    pub screens: &'a [ScreenId],
}

impl<'a> WidgetContext<'a> {
    pub fn with_screens(screens: &'a [ScreenId]) -> Self {
        Self { screens }
    }

    fn route_to(&self, target: &str) -> Option<String> {
        self.screens
            .iter()
            .find(|id| id.as_str() == target)
            .map(|id| route_name(id.as_str()))
    }
}

/// Flutter widget expression for one component. The first line carries no
/// indentation; later lines are indented relative to it.
pub fn widget_code(component: &Component, ctx: &WidgetContext) -> String {
    match component {
        Component::Button(p) => button(p, ctx),
        Component::TextField(p) => text_field(p),
        Component::Card(p) => card(p),
        Component::List(p) => list(p),
        Component::Icon(p) => icon(p),
        Component::Container(p) => container(p),
        Component::Row(p) => flex("Row", p),
        Component::Column(p) => flex("Column", p),
        Component::Stack(p) => stack(p),
        Component::Switch(p) => switch(p),
        Component::Checkbox(p) => checkbox(p),
        Component::Radio(p) => radio(p),
        Component::ChatInput(p) => chat_input(p),
        Component::ChatMessage(p) => chat_message(p),
        Component::Dropdown(p) => dropdown(p),
        Component::InputWithLabel(p) => labeled_input(p),
        Component::SwitchWithLabel(p) => labeled_switch(p),
        Component::RadioWithLabel(p) => labeled_radio(p),
        Component::CheckboxWithLabel(p) => labeled_checkbox(p),
        Component::DynamicTable(p) => table(p),
        Component::Other { .. } => "Container()".to_string(),
    }
}

fn color(hex: &str) -> String {
    format!("Color({})", hex_to_argb(hex))
}

fn button_shape(rounded: bool) -> &'static str {
    if rounded {
        "const StadiumBorder()"
    } else {
        "RoundedRectangleBorder(borderRadius: BorderRadius.circular(8.0))"
    }
}

// ============================================================================
// Basic components
// ============================================================================

fn button(p: &ButtonProps, ctx: &WidgetContext) -> String {
    let on_pressed = match ctx.route_to(&p.navigate_to) {
        Some(route) => format!("() => Navigator.pushNamed(context, {})", dart_string(&route)),
        None => "() {}".to_string(),
    };
    let shape = button_shape(p.rounded);
    let padding = fixed1(p.padding);

    if p.variant == "outline" {
        format!(
            r#"OutlinedButton(
  onPressed: {on_pressed},
  style: OutlinedButton.styleFrom(
    foregroundColor: {color},
    side: BorderSide(color: {color}),
    shape: {shape},
    padding: EdgeInsets.all({padding}),
  ),
  child: Text(
    {text},
    style: TextStyle(color: {color}),
  ),
)"#,
            color = color(&p.color),
            text = dart_string(&p.text),
        )
    } else {
        format!(
            r#"ElevatedButton(
  onPressed: {on_pressed},
  style: ElevatedButton.styleFrom(
    backgroundColor: {background},
    foregroundColor: {foreground},
    shape: {shape},
    padding: EdgeInsets.all({padding}),
  ),
  child: Text({text}),
)"#,
            background = color(&p.color),
            foreground = color(&p.text_color),
            text = dart_string(&p.text),
        )
    }
}

fn text_field(p: &TextFieldProps) -> String {
    let mut decoration = format!(
        "    labelText: {},\n    hintText: {},\n",
        dart_string(&p.label),
        dart_string(&p.hint)
    );
    if p.has_icon {
        let name = if p.icon.is_empty() { "search" } else { icon_identifier(&p.icon) };
        decoration.push_str(&format!("    prefixIcon: const Icon(Icons.{}),\n", name));
    }
    if p.validation {
        decoration.push_str(&format!("    errorText: {},\n", dart_string(&p.validation_message)));
    }

    format!(
        r#"TextField(
  decoration: InputDecoration(
{decoration}    border: OutlineInputBorder(
      borderRadius: BorderRadius.circular(8.0),
    ),
  ),
)"#
    )
}

fn card(p: &CardProps) -> String {
    format!(
        r#"Card(
  elevation: {elevation},
  color: {color},
  shape: RoundedRectangleBorder(
    borderRadius: BorderRadius.circular({radius}),
  ),
  child: Padding(
    padding: EdgeInsets.all({padding}),
    child: Column(
      crossAxisAlignment: CrossAxisAlignment.start,
      children: [
        Container(
          height: 20.0,
          width: 150.0,
          color: Colors.grey.shade300,
        ),
        const SizedBox(height: 8.0),
        Container(
          height: 12.0,
          width: 100.0,
          color: Colors.grey.shade300,
        ),
        const SizedBox(height: 16.0),
        Container(
          height: 100.0,
          color: Colors.grey.shade300,
        ),
      ],
    ),
  ),
)"#,
        elevation = fixed1(p.elevation),
        color = color(&p.color),
        radius = fixed1(p.border_radius),
        padding = fixed1(p.padding),
    )
}

fn list(p: &ListProps) -> String {
    let physics = if p.scrollable {
        ""
    } else {
        "\n  physics: const NeverScrollableScrollPhysics(),"
    };

    match list_axis(&p.direction) {
        ListAxis::Horizontal => format!(
            r#"SizedBox(
  height: {item_height},
  child: ListView.builder(
    scrollDirection: Axis.horizontal,{physics}
    itemCount: {count},
    itemBuilder: (context, index) {{
      return Container(
        width: 150.0,
        margin: const EdgeInsets.only(right: 8.0),
        decoration: BoxDecoration(
          color: Colors.grey.shade200,
          borderRadius: BorderRadius.circular(8.0),
        ),
        child: Row(
          children: [
            const SizedBox(width: 8.0),
            Container(
              width: 24.0,
              height: 24.0,
              decoration: const BoxDecoration(
                color: Colors.grey,
                shape: BoxShape.circle,
              ),
            ),
            const SizedBox(width: 8.0),
            Container(
              width: 80.0,
              height: 16.0,
              color: Colors.grey.shade300,
            ),
          ],
        ),
      );
    }},
  ),
)"#,
            item_height = fixed1(p.item_height),
            physics = physics.replace("\n  ", "\n    "),
            count = p.item_count,
        ),
        ListAxis::Vertical => format!(
            r#"ListView.builder({physics}
  itemCount: {count},
  itemBuilder: (context, index) {{
    return Container(
      height: {item_height},
      margin: const EdgeInsets.only(bottom: 8.0),
      decoration: BoxDecoration(
        color: Colors.grey.shade200,
        borderRadius: BorderRadius.circular(8.0),
      ),
      child: Row(
        children: [
          const SizedBox(width: 16.0),
          Container(
            width: 24.0,
            height: 24.0,
            decoration: const BoxDecoration(
              color: Colors.grey,
              shape: BoxShape.circle,
            ),
          ),
          const SizedBox(width: 16.0),
          Container(
            width: 120.0,
            height: 16.0,
            color: Colors.grey.shade300,
          ),
        ],
      ),
    );
  }},
)"#,
            count = p.item_count,
            item_height = fixed1(p.item_height),
        ),
    }
}

fn icon(p: &IconProps) -> String {
    format!(
        r#"Icon(
  Icons.{name},
  color: {color},
  size: {size},
)"#,
        name = icon_identifier(&p.name),
        color = color(&p.color),
        size = fixed1(p.size),
    )
}

fn container(p: &ContainerProps) -> String {
    format!(
        r#"Container(
  padding: EdgeInsets.all({padding}),
  margin: EdgeInsets.all({margin}),
  decoration: BoxDecoration(
    color: {color},
    borderRadius: BorderRadius.circular({radius}),
  ),
)"#,
        padding = fixed1(p.padding),
        margin = fixed1(p.margin),
        color = color(&p.color),
        radius = fixed1(p.border_radius),
    )
}

/// `Row` and `Column` share a shape: three placeholder boxes along the axis.
fn flex(widget: &str, p: &FlexProps) -> String {
    let (box_width, gap) = if widget == "Row" {
        ("30.0", "const SizedBox(width: 8.0),")
    } else {
        ("100.0", "const SizedBox(height: 8.0),")
    };
    let placeholder = format!(
        "      Container(\n        width: {},\n        height: 30.0,\n        color: Colors.grey.shade300,\n      ),\n",
        box_width
    );
    let separator = format!("      {}\n", gap);
    let children = [placeholder.as_str(); 3].join(separator.as_str());

    format!(
        r#"Padding(
  padding: EdgeInsets.all({padding}),
  child: {widget}(
    mainAxisAlignment: {main},
    crossAxisAlignment: {cross},
    children: [
{children}    ],
  ),
)"#,
        padding = fixed1(p.padding),
        main = main_axis_alignment(&p.main_axis_alignment),
        cross = cross_axis_alignment(&p.cross_axis_alignment),
    )
}

fn stack(p: &StackProps) -> String {
    format!(
        r#"Padding(
  padding: EdgeInsets.all({padding}),
  child: Stack(
    alignment: {alignment},
    children: [
      Container(
        width: 60.0,
        height: 60.0,
        color: Colors.grey.shade200,
      ),
      Container(
        width: 40.0,
        height: 40.0,
        color: Colors.grey.shade300,
      ),
    ],
  ),
)"#,
        padding = fixed1(p.padding),
        alignment = stack_alignment(&p.alignment),
    )
}

fn switch(p: &SwitchProps) -> String {
    format!(
        r#"Switch(
  value: {value},
  activeColor: {active},
  inactiveTrackColor: {inactive},
  onChanged: (value) {{}},
)"#,
        value = p.value,
        active = color(&p.active_color),
        inactive = color(&p.inactive_color),
    )
}

fn checkbox(p: &CheckboxProps) -> String {
    format!(
        r#"Checkbox(
  value: {value},
  activeColor: {active},
  onChanged: (value) {{}},
)"#,
        value = p.value,
        active = color(&p.active_color),
    )
}

fn radio_value(selected: bool) -> &'static str {
    if selected { "'option1'" } else { "'option2'" }
}

fn radio(p: &RadioProps) -> String {
    format!(
        r#"Radio<String>(
  value: {value},
  groupValue: {group},
  activeColor: {active},
  onChanged: (value) {{}},
)"#,
        value = radio_value(p.value),
        group = dart_string(&p.group_value),
        active = color(&p.active_color),
    )
}

// ============================================================================
// Chat components
// ============================================================================

fn chat_input(p: &ChatInputProps) -> String {
    format!(
        r#"Row(
  children: [
    Expanded(
      child: TextField(
        decoration: InputDecoration(
          hintText: {placeholder},
          border: OutlineInputBorder(
            borderRadius: BorderRadius.circular(8.0),
          ),
          contentPadding: const EdgeInsets.symmetric(horizontal: 12.0),
        ),
      ),
    ),
    const SizedBox(width: 8.0),
    ElevatedButton(
      onPressed: () {{}},
      style: ElevatedButton.styleFrom(
        backgroundColor: {button_color},
        foregroundColor: Colors.white,
      ),
      child: Text({button_text}),
    ),
  ],
)"#,
        placeholder = dart_string(&p.placeholder),
        button_color = color(&p.button_color),
        button_text = dart_string(&p.button_text),
    )
}

fn chat_message(p: &ChatMessageProps) -> String {
    let (alignment, column_alignment, bubble, text_color) = if p.is_user {
        ("Alignment.centerRight", "CrossAxisAlignment.end", "Colors.blue", "Colors.white")
    } else {
        ("Alignment.centerLeft", "CrossAxisAlignment.start", "Colors.grey.shade200", "Colors.black87")
    };

    let leading = if p.avatar && !p.is_user {
        "      const CircleAvatar(radius: 16.0, backgroundColor: Colors.grey),\n      const SizedBox(width: 8.0),\n"
    } else {
        ""
    };
    let trailing = if p.avatar && p.is_user {
        "      const SizedBox(width: 8.0),\n      const CircleAvatar(radius: 16.0, backgroundColor: Colors.lightBlue),\n"
    } else {
        ""
    };
    let timestamp = if p.timestamp {
        "            const SizedBox(height: 4.0),\n            const Text(\n              '12:34 PM',\n              style: TextStyle(fontSize: 10.0, color: Colors.grey),\n            ),\n"
    } else {
        ""
    };

    format!(
        r#"Align(
  alignment: {alignment},
  child: Row(
    mainAxisSize: MainAxisSize.min,
    crossAxisAlignment: CrossAxisAlignment.start,
    children: [
{leading}      Flexible(
        child: Column(
          mainAxisSize: MainAxisSize.min,
          crossAxisAlignment: {column_alignment},
          children: [
            Container(
              padding: const EdgeInsets.all(12.0),
              decoration: BoxDecoration(
                color: {bubble},
                borderRadius: BorderRadius.circular(12.0),
              ),
              child: Text(
                {text},
                style: TextStyle(color: {text_color}),
              ),
            ),
{timestamp}          ],
        ),
      ),
{trailing}    ],
  ),
)"#,
        text = dart_string(&p.text),
    )
}

// ============================================================================
// Form components
// ============================================================================

fn field_label(label: &str, required: bool) -> String {
    if required {
        format!("{} *", label)
    } else {
        label.to_string()
    }
}

fn on_changed(disabled: bool) -> &'static str {
    if disabled { "null" } else { "(value) {}" }
}

fn dropdown(p: &DropdownProps) -> String {
    let label = if p.label.is_empty() {
        String::new()
    } else {
        format!(
            "    Text(\n      {},\n      style: const TextStyle(fontSize: 14.0, fontWeight: FontWeight.w500),\n    ),\n    const SizedBox(height: 4.0),\n",
            dart_string(&field_label(&p.label, p.required))
        )
    };

    // Flutter asserts when the initial value matches no item.
    let value = if p.options.iter().any(|o| o.value == p.value && !o.value.is_empty()) {
        dart_string(&p.value)
    } else {
        "null".to_string()
    };

    let items: String = p
        .options
        .iter()
        .map(|o| {
            format!(
                "        DropdownMenuItem(value: {}, child: Text({})),\n",
                dart_string(&o.value),
                dart_string(&o.label)
            )
        })
        .collect();

    format!(
        r#"Column(
  crossAxisAlignment: CrossAxisAlignment.start,
  children: [
{label}    DropdownButtonFormField<String>(
      value: {value},
      hint: Text({placeholder}),
      decoration: InputDecoration(
        filled: true,
        fillColor: {background},
        enabledBorder: OutlineInputBorder(
          borderRadius: BorderRadius.circular(6.0),
          borderSide: BorderSide(color: {border}),
        ),
        contentPadding: const EdgeInsets.symmetric(horizontal: 12.0),
      ),
      items: const [
{items}      ],
      onChanged: {on_changed},
    ),
  ],
)"#,
        placeholder = dart_string(&p.placeholder),
        background = color(&p.background_color),
        border = color(&p.border_color),
        on_changed = on_changed(p.disabled),
    )
}

fn labeled_input(p: &LabeledInputProps) -> String {
    let mut field_options = String::new();
    if !p.value.is_empty() {
        field_options.push_str(&format!("      initialValue: {},\n", dart_string(&p.value)));
    }
    field_options.push_str(&format!("      enabled: {},\n", !p.disabled));
    if p.input_type == "password" {
        field_options.push_str("      obscureText: true,\n");
    }
    if let Some(keyboard) = keyboard_type(&p.input_type) {
        field_options.push_str(&format!("      keyboardType: {},\n", keyboard));
    }

    format!(
        r#"Column(
  crossAxisAlignment: CrossAxisAlignment.start,
  children: [
    Text(
      {label},
      style: TextStyle(
        fontSize: 14.0,
        fontWeight: FontWeight.w500,
        color: {label_color},
      ),
    ),
    const SizedBox(height: 4.0),
    TextFormField(
{field_options}      decoration: InputDecoration(
        hintText: {placeholder},
        enabledBorder: OutlineInputBorder(
          borderRadius: BorderRadius.circular(6.0),
          borderSide: BorderSide(color: {border}),
        ),
        contentPadding: const EdgeInsets.symmetric(horizontal: 12.0),
      ),
    ),
  ],
)"#,
        label = dart_string(&field_label(&p.label, p.required)),
        label_color = color(&p.label_color),
        placeholder = dart_string(&p.placeholder),
        border = color(&p.border_color),
    )
}

/// Wrap `control` (already indented for a row child) with its label on the
/// configured side.
fn labeled_row(control: &str, label: &str, label_color: &str, position: &str) -> String {
    let text = format!(
        "    Text(\n      {},\n      style: TextStyle(fontSize: 14.0, color: {}),\n    ),\n",
        dart_string(label),
        color(label_color)
    );
    let gap = "    const SizedBox(width: 12.0),\n";

    let children = match label_position(position) {
        LabelPosition::Left => format!("{text}{gap}{control}"),
        LabelPosition::Right => format!("{control}{gap}{text}"),
    };

    format!("Row(\n  children: [\n{children}  ],\n)")
}

fn labeled_switch(p: &LabeledSwitchProps) -> String {
    let control = format!(
        "    Switch(\n      value: {},\n      activeColor: {},\n      inactiveTrackColor: {},\n      onChanged: {},\n    ),\n",
        p.value,
        color(&p.active_color),
        color(&p.inactive_color),
        on_changed(p.disabled)
    );
    labeled_row(&control, &p.label, &p.label_color, &p.label_position)
}

fn labeled_radio(p: &LabeledRadioProps) -> String {
    let control = format!(
        "    Radio<String>(\n      value: {},\n      groupValue: {},\n      activeColor: {},\n      onChanged: {},\n    ),\n",
        radio_value(p.value),
        dart_string(&p.group_value),
        color(&p.active_color),
        on_changed(p.disabled)
    );
    labeled_row(&control, &p.label, &p.label_color, &p.label_position)
}

fn labeled_checkbox(p: &LabeledCheckboxProps) -> String {
    let control = format!(
        "    Checkbox(\n      value: {},\n      activeColor: {},\n      onChanged: {},\n    ),\n",
        p.value,
        color(&p.active_color),
        on_changed(p.disabled)
    );
    labeled_row(&control, &p.label, &p.label_color, &p.label_position)
}

// ============================================================================
// Data table
// ============================================================================

fn table(p: &TableProps) -> String {
    let title = if p.title.is_empty() {
        String::new()
    } else {
        format!(
            "    Padding(\n      padding: const EdgeInsets.symmetric(horizontal: 12.0, vertical: 8.0),\n      child: Text(\n        {},\n        style: const TextStyle(fontWeight: FontWeight.w500),\n      ),\n    ),\n",
            dart_string(&p.title)
        )
    };

    let heading_height = if p.show_header { "40.0" } else { "0.0" };
    let border = if p.show_border {
        format!("          border: TableBorder.all(color: {}),\n", color(&p.border_color))
    } else {
        String::new()
    };

    let columns: String = p
        .columns
        .iter()
        .map(|c| {
            format!(
                "            DataColumn(\n              label: SizedBox(\n                width: {},\n                child: Text({}),\n              ),\n            ),\n",
                fixed1(c.width),
                dart_string(&c.title)
            )
        })
        .collect();

    let mut rows = String::new();
    for row in 0..p.row_count.min(MAX_TABLE_ROWS) {
        let row_color = if p.striped && row % 2 == 1 {
            &p.odd_row_color
        } else {
            &p.even_row_color
        };
        let cells: String = (0..p.columns.len())
            .map(|col| format!("                DataCell(Text('Cell {}-{}')),\n", row + 1, col + 1))
            .collect();
        rows.push_str(&format!(
            "            DataRow(\n              color: MaterialStateProperty.all({}),\n              cells: [\n{}              ],\n            ),\n",
            color(row_color),
            cells
        ));
    }

    format!(
        r#"Column(
  crossAxisAlignment: CrossAxisAlignment.stretch,
  children: [
{title}    Expanded(
      child: SingleChildScrollView(
        scrollDirection: Axis.horizontal,
        child: DataTable(
          headingRowHeight: {heading_height},
          headingRowColor: MaterialStateProperty.all({header}),
{border}          columns: [
{columns}          ],
          rows: [
{rows}          ],
        ),
      ),
    ),
  ],
)"#,
        header = color(&p.header_color),
    )
}
