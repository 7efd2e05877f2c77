//! Rendering [`Json`] back to indented text.

use std::fmt::Write as _;

use super::{Json, Map};

/// Indent unit used by [`Json::pretty`].
pub const DEFAULT_INDENT: &str = "  ";

impl Json {
    /// Render as indented JSON text, repeating `indent` once per nesting level.
    ///
    /// Returns `None` if the tree contains `Invalid` anywhere.
    #[must_use]
    pub fn stringify(&self, indent: &str) -> Option<String> {
        let mut out = String::new();
        write_value(&mut out, self, indent, 0)?;
        Some(out)
    }

    /// Render with the default two-space indent.
    #[must_use]
    pub fn pretty(&self) -> Option<String> {
        self.stringify(DEFAULT_INDENT)
    }
}

fn write_value(out: &mut String, value: &Json, indent: &str, depth: usize) -> Option<()> {
    match value {
        Json::String(text) => write_string(out, text),
        Json::Number(number) if number.is_finite() => {
            let _ = write!(out, "{number}");
        }
        Json::Number(_) | Json::Null => out.push_str("null"),
        Json::Bool(flag) => out.push_str(if *flag { "true" } else { "false" }),
        Json::Array(items) => return write_array(out, items, indent, depth),
        Json::Object(map) => return write_object(out, map, indent, depth),
        Json::Invalid => return None,
    }
    Some(())
}

fn write_array(out: &mut String, items: &[Json], indent: &str, depth: usize) -> Option<()> {
    if items.is_empty() {
        out.push_str("[]");
        return Some(());
    }
    out.push_str("[\n");
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            out.push_str(",\n");
        }
        push_indent(out, indent, depth + 1);
        write_value(out, item, indent, depth + 1)?;
    }
    out.push('\n');
    push_indent(out, indent, depth);
    out.push(']');
    Some(())
}

fn write_object(out: &mut String, map: &Map, indent: &str, depth: usize) -> Option<()> {
    if map.is_empty() {
        out.push_str("{}");
        return Some(());
    }
    out.push_str("{\n");
    for (index, (key, item)) in map.iter().enumerate() {
        if index > 0 {
            out.push_str(",\n");
        }
        push_indent(out, indent, depth + 1);
        write_string(out, key);
        out.push_str(" : ");
        write_value(out, item, indent, depth + 1)?;
    }
    out.push('\n');
    push_indent(out, indent, depth);
    out.push('}');
    Some(())
}

fn push_indent(out: &mut String, indent: &str, depth: usize) {
    for _ in 0..depth {
        out.push_str(indent);
    }
}

fn write_string(out: &mut String, text: &str) {
    out.push('"');
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            ch if u32::from(ch) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", u32::from(ch));
            }
            ch => out.push(ch),
        }
    }
    out.push('"');
}
