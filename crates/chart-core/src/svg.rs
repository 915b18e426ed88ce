// File: crates/chart-core/src/svg.rs
// Summary: Minimal SVG scene tree with a builder API, lookup helpers and XML serialization.

use std::fmt::Write;

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// One SVG element: attributes, inline `style` declarations, text content, children.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Element {
    pub name: String,
    pub attrs: Vec<(String, String)>,
    pub styles: Vec<(String, String)>,
    pub text: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }

    /// Set (or replace) an attribute.
    pub fn attr(mut self, key: &str, value: impl ToString) -> Self {
        self.set_attr(key, value);
        self
    }

    pub fn set_attr(&mut self, key: &str, value: impl ToString) {
        let value = value.to_string();
        match self.attrs.iter_mut().find(|(k, _)| k == key) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((key.to_string(), value)),
        }
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// Set (or replace) an inline style declaration.
    pub fn style(mut self, key: &str, value: impl ToString) -> Self {
        let value = value.to_string();
        match self.styles.iter_mut().find(|(k, _)| k == key) {
            Some(slot) => slot.1 = value,
            None => self.styles.push((key.to_string(), value)),
        }
        self
    }

    pub fn get_style(&self, key: &str) -> Option<&str> {
        self.styles.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// Style declaration if present, else the attribute of the same name.
    pub fn presentation(&self, key: &str) -> Option<&str> {
        self.get_style(key).or_else(|| self.get_attr(key))
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|c| c.split_whitespace().any(|c| c == class))
    }

    /// Append a class name.
    pub fn add_class(&mut self, class: &str) {
        let joined = match self.get_attr("class") {
            Some(existing) if !existing.is_empty() => format!("{existing} {class}"),
            _ => class.to_string(),
        };
        self.set_attr("class", joined);
    }

    /// Depth-first search by `id` attribute (self included).
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.get_attr("id") == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_by_id(id))
    }

    /// Every element in document order, self first.
    pub fn descendants(&self) -> Vec<&Element> {
        let mut out = vec![self];
        for c in &self.children {
            out.extend(c.descendants());
        }
        out
    }

    pub fn descendants_by_class(&self, class: &str) -> Vec<&Element> {
        self.descendants().into_iter().filter(|e| e.has_class(class)).collect()
    }

    pub fn descendants_by_name(&self, name: &str) -> Vec<&Element> {
        self.descendants().into_iter().filter(|e| e.name == name).collect()
    }

    /// Inline markup (no XML declaration).
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out, 0);
        out
    }

    /// Standalone SVG document; adds `xmlns` to the root when missing.
    pub fn to_document(&self) -> String {
        let mut root = self.clone();
        if root.get_attr("xmlns").is_none() {
            root.attrs.insert(0, ("xmlns".to_string(), SVG_NS.to_string()));
        }
        let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        root.write_to(&mut out, 0);
        out
    }

    fn write_to(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        let _ = write!(out, "{indent}<{}", self.name);
        for (k, v) in &self.attrs {
            let _ = write!(out, " {k}=\"{}\"", xml_escape(v));
        }
        if !self.styles.is_empty() {
            let decl = self
                .styles
                .iter()
                .map(|(k, v)| format!("{k}: {v}"))
                .collect::<Vec<_>>()
                .join("; ");
            let _ = write!(out, " style=\"{}\"", xml_escape(&decl));
        }
        if self.children.is_empty() && self.text.is_none() {
            out.push_str("/>\n");
            return;
        }
        out.push('>');
        if let Some(t) = &self.text {
            out.push_str(&xml_escape(t));
        }
        if self.children.is_empty() {
            let _ = writeln!(out, "</{}>", self.name);
            return;
        }
        out.push('\n');
        for c in &self.children {
            c.write_to(out, depth + 1);
        }
        let _ = writeln!(out, "{indent}</{}>", self.name);
    }
}

/// Escape the five XML special characters for text content and attribute values.
pub fn xml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Parsed `transform` entry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transform {
    Translate(f64, f64),
    /// Degrees, clockwise in screen space.
    Rotate(f64),
}

impl Transform {
    /// Parse `translate(x[, y])` / `rotate(a[deg])` lists; unknown entries are skipped.
    pub fn parse_list(s: &str) -> Vec<Transform> {
        let mut out = Vec::new();
        let mut rest = s.trim();
        while let Some(open) = rest.find('(') {
            let Some(close) = rest[open..].find(')').map(|c| c + open) else { break };
            let name = rest[..open].trim();
            let args = rest[open + 1..close]
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|a| !a.is_empty())
                .filter_map(|a| a.trim_end_matches("deg").parse::<f64>().ok())
                .collect::<Vec<_>>();
            match (name, args.as_slice()) {
                ("translate", [x]) => out.push(Transform::Translate(*x, 0.0)),
                ("translate", [x, y, ..]) => out.push(Transform::Translate(*x, *y)),
                ("rotate", [a, ..]) => out.push(Transform::Rotate(*a)),
                _ => {}
            }
            rest = rest[close + 1..].trim_start();
        }
        out
    }
}
