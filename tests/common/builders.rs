use screen_designer::design::element_model::{
    ComponentKind, Document, Element, ElementPatch, Screen, ScreenId,
};
use serde_json::json;

/// Default element of `kind` with a stable id.
pub fn element(id: &str, kind: ComponentKind, x: f64, y: f64) -> Element {
    Element::new(&kind, x, y).with_id(id)
}

/// One-element snapshot tagged by its id, for telling timeline states apart.
pub fn marker(n: usize) -> Vec<Element> {
    vec![element(&format!("el-{}", n), ComponentKind::Container, n as f64, 0.0)]
}

pub fn marker_id(snapshot: &[Element]) -> Option<&str> {
    snapshot.first().map(|el| el.id.as_str())
}

/// The button from the documented generation example.
pub fn go_button() -> Element {
    serde_json::from_value(json!({
        "id": "btn-go",
        "type": "button",
        "x": 10,
        "y": 20,
        "width": 120,
        "height": 40,
        "properties": {
            "text": "Go",
            "variant": "primary",
            "rounded": true,
            "color": "#2196F3",
            "textColor": "#FFFFFF",
            "padding": 16
        }
    }))
    .unwrap()
}

pub fn element_with(kind: ComponentKind, patch: ElementPatch) -> Element {
    let mut el = element("el-patched", kind, 0.0, 0.0);
    el.apply(&patch);
    el
}

pub fn screen(id: &str, name: &str, elements: Vec<Element>) -> Screen {
    Screen {
        id: ScreenId::from(id),
        name: name.to_string(),
        elements,
    }
}

pub fn two_screen_document() -> Document {
    Document {
        screens: vec![
            screen(
                "screen-1",
                "Home",
                vec![element_with(
                    ComponentKind::Button,
                    ElementPatch::default()
                        .property("text", "Next")
                        .property("navigateTo", "screen-2"),
                )],
            ),
            screen("screen-2", "Details", Vec::new()),
        ],
    }
}
