use screen_designer::codegen::color::{FALLBACK_COLOR, hex_to_argb};
use screen_designer::codegen::dart::{dart_string, fixed1, icon_identifier, indent_tail};
use screen_designer::codegen::flutter::{
    EMPTY_PLACEHOLDER, generate_document_code, generate_flutter_code,
};
use screen_designer::codegen::mapping::{
    LabelPosition, cross_axis_alignment, keyboard_type, label_position, main_axis_alignment,
    stack_alignment,
};
use screen_designer::codegen::options::GenerateOptions;
use screen_designer::codegen::widgets::MAX_TABLE_ROWS;
use screen_designer::design::element_model::{ComponentKind, Document, ElementPatch};

mod common;
use crate::common::builders::{element, element_with, go_button, screen, two_screen_document};

fn code_for(kind: ComponentKind, patch: ElementPatch) -> String {
    generate_flutter_code(&[element_with(kind, patch)], &GenerateOptions::light())
}

// ============================================================================
// Screen shell
// ============================================================================

#[test]
fn empty_screen_has_placeholder_and_no_wrappers() {
    let code = generate_flutter_code(&[], &GenerateOptions::light());
    assert!(code.contains(EMPTY_PLACEHOLDER));
    assert!(!code.contains("Positioned("));
    assert!(code.starts_with("import 'package:flutter/material.dart';"));
    assert!(code.contains("runApp(const MyApp());"));
    assert!(code.contains("class MyHomePage extends StatefulWidget"));
    assert!(code.contains("body: Stack("));
}

#[test]
fn light_theme_block() {
    let code = generate_flutter_code(&[], &GenerateOptions::light());
    assert!(code.contains("brightness: Brightness.light,"));
    assert!(code.contains("scaffoldBackgroundColor: Colors.white,"));
    assert!(!code.contains("Brightness.dark"));
}

#[test]
fn documented_button_example() {
    let code = generate_flutter_code(&[go_button()], &GenerateOptions::dark());

    assert!(code.contains("left: 10.0,"));
    assert!(code.contains("top: 20.0,"));
    assert!(code.contains("width: 120.0,"));
    assert!(code.contains("height: 40.0,"));
    assert!(code.contains("brightness: Brightness.dark,"));
    assert!(code.contains("Color(0xFF121212)"));
    assert!(code.contains("Color(0xFF1E1E1E)"));
    assert!(code.contains("backgroundColor: Color(0xFF2196f3)"));
    assert!(code.contains("foregroundColor: Color(0xFFffffff)"));
    assert!(code.contains("ElevatedButton("));
    assert!(code.contains("Text('Go')"));
    assert!(code.contains("const StadiumBorder()"));
    assert!(!code.contains(EMPTY_PLACEHOLDER));
}

#[test]
fn elements_are_emitted_in_order() {
    let elements = vec![
        element("a", ComponentKind::Icon, 1.0, 1.0),
        element("b", ComponentKind::Switch, 2.0, 2.0),
    ];
    let code = generate_flutter_code(&elements, &GenerateOptions::light());

    assert_eq!(code.matches("Positioned(").count(), 2);
    let icon = code.find("Icon(").unwrap();
    let switch = code.find("Switch(").unwrap();
    assert!(icon < switch);
}

#[test]
fn generation_is_deterministic() {
    let elements = vec![go_button(), element("t", ComponentKind::DynamicTable, 0.0, 0.0)];
    let a = generate_flutter_code(&elements, &GenerateOptions::dark());
    let b = generate_flutter_code(&elements, &GenerateOptions::dark());
    assert_eq!(a, b);
}

// ============================================================================
// Literals
// ============================================================================

#[test]
fn hex_colors_convert_to_opaque_argb() {
    assert_eq!(hex_to_argb("#2196F3"), "0xFF2196f3");
    assert_eq!(hex_to_argb("#000000"), "0xFF000000");
}

#[test]
fn invalid_colors_fall_back_to_black() {
    assert_eq!(hex_to_argb("blue"), FALLBACK_COLOR);
    assert_eq!(hex_to_argb("blue"), "0xFF000000");
    assert_eq!(hex_to_argb("#fff"), FALLBACK_COLOR);
    assert_eq!(hex_to_argb("#12345G"), FALLBACK_COLOR);
    assert_eq!(hex_to_argb(""), FALLBACK_COLOR);
}

#[test]
fn bad_color_property_does_not_break_output() {
    let code = code_for(ComponentKind::Container, ElementPatch::default().property("color", "blue"));
    assert!(code.contains("color: Color(0xFF000000)"));
}

#[test]
fn numbers_get_one_decimal() {
    assert_eq!(fixed1(10.0), "10.0");
    assert_eq!(fixed1(12.345), "12.3");
    assert_eq!(fixed1(-0.0), "0.0");
    assert_eq!(fixed1(0.25), "0.3");
    assert_eq!(fixed1(12.25), "12.3");
    assert_eq!(fixed1(10.75), "10.8");
    assert_eq!(fixed1(-0.25), "-0.3");
    assert_eq!(fixed1(0.5), "0.5");
    assert_eq!(fixed1(f64::NAN), "0.0");
    assert_eq!(fixed1(f64::INFINITY), "0.0");
}

#[test]
fn user_text_is_escaped() {
    assert_eq!(dart_string("It's $5\n"), r"'It\'s \$5\n'");

    let code = code_for(ComponentKind::Button, ElementPatch::default().property("text", "Don't"));
    assert!(code.contains(r"Text('Don\'t')"));
}

#[test]
fn icon_names_are_sanitized() {
    assert_eq!(icon_identifier("favorite"), "favorite");
    assert_eq!(icon_identifier("add_circle"), "add_circle");
    assert_eq!(icon_identifier("x); evil("), "star");
    assert_eq!(icon_identifier(""), "star");
}

#[test]
fn indent_tail_leaves_first_line() {
    assert_eq!(indent_tail("a\nb\n\nc", 2), "a\n  b\n\n  c");
}

// ============================================================================
// Enumerated properties
// ============================================================================

#[test]
fn alignment_tables_default_to_start() {
    assert_eq!(main_axis_alignment("spaceBetween"), "MainAxisAlignment.spaceBetween");
    assert_eq!(main_axis_alignment("sideways"), "MainAxisAlignment.start");
    assert_eq!(cross_axis_alignment("stretch"), "CrossAxisAlignment.stretch");
    assert_eq!(cross_axis_alignment(""), "CrossAxisAlignment.start");
    assert_eq!(stack_alignment("bottomRight"), "Alignment.bottomRight");
    assert_eq!(stack_alignment("middle"), "Alignment.topLeft");
}

#[test]
fn label_position_defaults_to_left() {
    assert_eq!(label_position("right"), LabelPosition::Right);
    assert_eq!(label_position("left"), LabelPosition::Left);
    assert_eq!(label_position("above"), LabelPosition::Left);
}

#[test]
fn row_uses_mapped_alignment() {
    let code = code_for(
        ComponentKind::Row,
        ElementPatch::default().property("mainAxisAlignment", "spaceEvenly"),
    );
    assert!(code.contains("Row("));
    assert!(code.contains("mainAxisAlignment: MainAxisAlignment.spaceEvenly,"));
    assert!(code.contains("crossAxisAlignment: CrossAxisAlignment.center,"));
}

// ============================================================================
// Component generators
// ============================================================================

#[test]
fn outline_button_variant() {
    let code = code_for(ComponentKind::Button, ElementPatch::default().property("variant", "outline"));
    assert!(code.contains("OutlinedButton("));
    assert!(!code.contains("ElevatedButton("));
}

#[test]
fn unknown_kind_renders_empty_container() {
    let code = generate_flutter_code(
        &[element("x", ComponentKind::Other("carousel".into()), 0.0, 0.0)],
        &GenerateOptions::light(),
    );
    assert!(code.contains("child: Container(),"));
}

#[test]
fn every_known_kind_generates_a_wrapper() {
    let elements: Vec<_> = ComponentKind::KNOWN
        .iter()
        .enumerate()
        .map(|(i, kind)| element(&format!("el-{}", i), kind.clone(), i as f64, 0.0))
        .collect();
    let code = generate_flutter_code(&elements, &GenerateOptions::light());

    assert_eq!(code.matches("Positioned(").count(), 20);
    for widget in [
        "TextField(",
        "Card(",
        "ListView.builder(",
        "Icons.star",
        "Column(",
        "Stack(",
        "Checkbox(",
        "Radio<String>(",
        "DropdownButtonFormField<String>(",
        "TextFormField(",
        "DataTable(",
        "'Hello! This is a sample message.'",
    ] {
        assert!(code.contains(widget), "missing {}", widget);
    }
}

#[test]
fn labeled_input_password_and_email() {
    let password = code_for(ComponentKind::InputWithLabel, ElementPatch::default().property("type", "password"));
    assert!(password.contains("obscureText: true,"));

    let email = code_for(ComponentKind::InputWithLabel, ElementPatch::default().property("type", "email"));
    assert!(email.contains("keyboardType: TextInputType.emailAddress,"));
    assert_eq!(keyboard_type("text"), None);
}

#[test]
fn labeled_switch_orders_row_by_position() {
    let right = code_for(ComponentKind::SwitchWithLabel, ElementPatch::default());
    assert!(right.find("Switch(").unwrap() < right.find("'Toggle Switch'").unwrap());

    let left = code_for(
        ComponentKind::SwitchWithLabel,
        ElementPatch::default().property("labelPosition", "left"),
    );
    assert!(left.find("'Toggle Switch'").unwrap() < left.find("Switch(").unwrap());
}

#[test]
fn dropdown_lists_parsed_options() {
    let code = code_for(
        ComponentKind::Dropdown,
        ElementPatch::default()
            .property("options", r#"[{"label":"Red","value":"r"},{"label":"Blue","value":"b"}]"#)
            .property("value", "b"),
    );
    assert_eq!(code.matches("DropdownMenuItem(").count(), 2);
    assert!(code.contains("value: 'b',\n"));
}

#[test]
fn dropdown_unmatched_value_becomes_null() {
    let code = code_for(ComponentKind::Dropdown, ElementPatch::default().property("value", "missing"));
    assert_eq!(code.matches("DropdownMenuItem(").count(), 3);
    assert!(code.contains("value: null,"));
}

#[test]
fn table_with_malformed_columns_uses_fallback() {
    let code = code_for(
        ComponentKind::DynamicTable,
        ElementPatch::default().property("columns", "[oops"),
    );
    assert_eq!(code.matches("DataColumn(").count(), 3);
    assert_eq!(code.matches("DataRow(").count(), 3);
    assert!(code.contains("'Column 1'"));
    assert!(code.contains("DataCell(Text('Cell 3-3'))"));
}

#[test]
fn table_with_empty_columns_uses_fallback() {
    let code = code_for(ComponentKind::DynamicTable, ElementPatch::default().property("columns", "[]"));
    assert_eq!(code.matches("DataColumn(").count(), 3);
    assert!(code.contains("'Column 3'"));
}

#[test]
fn table_rows_are_capped() {
    let code = code_for(
        ComponentKind::DynamicTable,
        ElementPatch::default().property("rowCount", 50_000),
    );
    assert_eq!(code.matches("DataRow(").count(), MAX_TABLE_ROWS as usize);
}

#[test]
fn table_striping_and_header() {
    let code = code_for(
        ComponentKind::DynamicTable,
        ElementPatch::default()
            .property("showHeader", false)
            .property("showBorder", false),
    );
    assert!(code.contains("headingRowHeight: 0.0,"));
    assert!(!code.contains("TableBorder.all"));
    assert!(code.contains("MaterialStateProperty.all(Color(0xFFf9fafb))"));
}

// ============================================================================
// Multi-screen documents
// ============================================================================

#[test]
fn document_uses_named_routes() {
    let code = generate_document_code(&two_screen_document(), &GenerateOptions::light());

    assert!(code.contains("initialRoute: '/screen-1',"));
    assert!(code.contains("'/screen-1': (context) => const Screen1Page(),"));
    assert!(code.contains("'/screen-2': (context) => const Screen2Page(),"));
    assert!(code.contains("class Screen2Page extends StatefulWidget"));
    assert!(code.contains("title: const Text('Details'),"));
    assert!(code.contains("Navigator.pushNamed(context, '/screen-2')"));
    assert!(code.contains(EMPTY_PLACEHOLDER));
}

#[test]
fn navigation_to_unknown_screen_is_inert() {
    let mut document = two_screen_document();
    document.screens.truncate(1);
    let code = generate_document_code(&document, &GenerateOptions::light());
    assert!(!code.contains("Navigator.pushNamed"));
    assert!(code.contains("onPressed: () {},"));

    let single = generate_flutter_code(&two_screen_document().screens[0].elements, &GenerateOptions::light());
    assert!(!single.contains("Navigator.pushNamed"));
}

#[test]
fn empty_document_falls_back_to_single_screen() {
    let code = generate_document_code(&Document { screens: vec![] }, &GenerateOptions::dark());
    assert!(code.contains("class MyHomePage"));
    assert!(code.contains(EMPTY_PLACEHOLDER));

    let one = Document {
        screens: vec![screen("only", "Only", vec![go_button()])],
    };
    let code = generate_document_code(&one, &GenerateOptions::dark());
    assert!(code.contains("initialRoute: '/only',"));
    assert!(code.contains("left: 10.0,"));
}
