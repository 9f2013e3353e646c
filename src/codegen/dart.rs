// ============================================================================
// Dart literal helpers
// ============================================================================

/// Fixed-point decimal with one fractional digit (`10` -> `10.0`, `0.25` -> `0.3`).
/// Non-finite values and negative zero come out as `0.0`.
pub fn fixed1(value: f64) -> String {
    if !value.is_finite() {
        return "0.0".to_string();
    }
    // Exact decimal ties (odd quarters: x.25, x.75) round away from zero;
    // `{:.1}` alone would round them to even.
    let quarters = value * 4.0;
    let value = if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        (value * 10.0).round() / 10.0
    } else {
        value
    };
    let text = format!("{:.1}", value);
    if text == "-0.0" { "0.0".to_string() } else { text }
}

/// Single-quoted Dart string literal.
pub fn dart_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '$' => out.push_str("\\$"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Name usable after `Icons.`; anything else becomes `star`.
pub fn icon_identifier(name: &str) -> &str {
    let valid = name
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_lowercase() || c == '_')
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid { name } else { "star" }
}

/// Indent every line after the first by `spaces`. Blank lines stay blank.
pub fn indent_tail(text: &str, spaces: usize) -> String {
    let pad = " ".repeat(spaces);
    let mut out = String::with_capacity(text.len());
    for (i, line) in text.lines().enumerate() {
        if i > 0 {
            out.push('\n');
            if !line.is_empty() {
                out.push_str(&pad);
            }
        }
        out.push_str(line);
    }
    out
}

/// Route name of a screen in multi-screen output.
pub fn route_name(screen_id: &str) -> String {
    format!("/{}", screen_id)
}
