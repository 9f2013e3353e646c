use tracing::debug;

use crate::codegen::dart::{dart_string, fixed1, indent_tail, route_name};
use crate::codegen::options::GenerateOptions;
use crate::codegen::widgets::{WidgetContext, widget_code};
use crate::design::element_model::{Document, Element, ScreenId};

/// Emitted in place of widgets when a screen has no elements.
pub const EMPTY_PLACEHOLDER: &str = "// No elements added yet";

const APP_TITLE: &str = "Flutter UI App";

/// Column at which `Positioned` wrappers start inside the page's `Stack`.
const WRAPPER_INDENT: usize = 10;

// ============================================================================
// Single screen
// ============================================================================

/// Generate a complete `main.dart` for one screen's elements.
///
/// Elements are emitted in array order, so later elements paint on top.
/// Never fails: malformed property values were already replaced by defaults
/// when the elements were read, and colors/enums degrade to fixed constants.
pub fn generate_flutter_code(elements: &[Element], options: &GenerateOptions) -> String {
    debug!(elements = elements.len(), dark_mode = options.dark_mode, "codegen: single screen");

    let ctx = WidgetContext::default();
    let mut out = preamble();
    out.push_str(&app_class(options, "      home: const MyHomePage(),\n"));
    out.push('\n');
    out.push_str(&page_class("MyHomePage", APP_TITLE, &positioned_children(elements, &ctx)));
    out
}

// ============================================================================
// Whole document
// ============================================================================

/// Generate a multi-screen app: one page class per screen, wired up with
/// named routes (`'/<screen id>'`). The first screen is the initial route.
/// Buttons whose `navigateTo` names a screen of this document push its route.
pub fn generate_document_code(document: &Document, options: &GenerateOptions) -> String {
    let Some(first) = document.screens.first() else {
        return generate_flutter_code(&[], options);
    };
    debug!(screens = document.screens.len(), dark_mode = options.dark_mode, "codegen: document");

    let screen_ids: Vec<ScreenId> = document.screens.iter().map(|s| s.id.clone()).collect();
    let ctx = WidgetContext::with_screens(&screen_ids);

    let mut routing = format!(
        "      initialRoute: {},\n      routes: {{\n",
        dart_string(&route_name(first.id.as_str()))
    );
    for (i, screen) in document.screens.iter().enumerate() {
        routing.push_str(&format!(
            "        {}: (context) => const {}(),\n",
            dart_string(&route_name(screen.id.as_str())),
            page_class_name(i)
        ));
    }
    routing.push_str("      },\n");

    let mut out = preamble();
    out.push_str(&app_class(options, &routing));
    for (i, screen) in document.screens.iter().enumerate() {
        out.push('\n');
        out.push_str(&page_class(
            &page_class_name(i),
            &screen.name,
            &positioned_children(&screen.elements, &ctx),
        ));
    }
    out
}

fn page_class_name(index: usize) -> String {
    format!("Screen{}Page", index + 1)
}

// ============================================================================
// Building blocks
// ============================================================================

fn preamble() -> String {
    r#"import 'package:flutter/material.dart';

void main() {
  runApp(const MyApp());
}

"#
    .to_string()
}

/// `MyApp` shell; `home` is the `home:` line or the routing table.
fn app_class(options: &GenerateOptions, home: &str) -> String {
    let theme: String = options
        .theme_lines()
        .iter()
        .map(|line| format!("        {}\n", line))
        .collect();

    format!(
        r#"class MyApp extends StatelessWidget {{
  const MyApp({{Key? key}}) : super(key: key);

  @override
  Widget build(BuildContext context) {{
    return MaterialApp(
      title: {title},
      debugShowCheckedModeBanner: false,
      theme: ThemeData(
{theme}      ),
{home}    );
  }}
}}
"#,
        title = dart_string(APP_TITLE),
    )
}

/// Stateful page with an app bar and a `Stack` body holding `children`.
fn page_class(name: &str, title: &str, children: &str) -> String {
    format!(
        r#"class {name} extends StatefulWidget {{
  const {name}({{Key? key}}) : super(key: key);

  @override
  State<{name}> createState() => _{name}State();
}}

class _{name}State extends State<{name}> {{
  @override
  Widget build(BuildContext context) {{
    return Scaffold(
      appBar: AppBar(
        title: const Text({title}),
      ),
      body: Stack(
        children: [
{children}
        ],
      ),
    );
  }}
}}
"#,
        title = dart_string(title),
    )
}

/// One `Positioned` wrapper per element, in order, or the placeholder.
pub fn positioned_children(elements: &[Element], ctx: &WidgetContext) -> String {
    let pad = " ".repeat(WRAPPER_INDENT);
    if elements.is_empty() {
        return format!("{}{}", pad, EMPTY_PLACEHOLDER);
    }

    elements
        .iter()
        .map(|el| {
            let child = indent_tail(&widget_code(&el.component, ctx), WRAPPER_INDENT + 2);
            format!(
                "{pad}Positioned(\n{pad}  left: {left},\n{pad}  top: {top},\n{pad}  width: {width},\n{pad}  height: {height},\n{pad}  child: {child},\n{pad}),",
                left = fixed1(el.x),
                top = fixed1(el.y),
                width = fixed1(el.width),
                height = fixed1(el.height),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
