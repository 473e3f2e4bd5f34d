/* src/server/core/src/template/render.rs */

use serde_json::Value;

use super::ast::AstNode;
use super::helpers::{escape_html, is_truthy, resolve, stringify};

/// Attribute waiting to be spliced into the tag that follows its marker.
pub(super) struct AttrEntry {
  marker: String,
  attr_name: String,
  value: String,
}

pub(super) fn render(nodes: &[AstNode], data: &Value, attrs: &mut Vec<AttrEntry>) -> String {
  let mut out = String::new();

  for node in nodes {
    match node {
      AstNode::Text(value) => out.push_str(value),

      AstNode::Slot { path, raw } => {
        let text = stringify(resolve(path, data).unwrap_or(&Value::Null));
        if *raw {
          out.push_str(&text);
        } else {
          out.push_str(&escape_html(&text));
        }
      }

      AstNode::Attr { path, attr_name } => {
        if let Some(value) = resolve(path, data).filter(|v| !v.is_null()) {
          // U+0000 cannot occur in rendered text, so it delimits markers safely.
          let marker = format!("\x00ATTR_{}\x00", attrs.len());
          out.push_str(&marker);
          attrs.push(AttrEntry {
            marker,
            attr_name: attr_name.clone(),
            value: escape_html(&stringify(value)),
          });
        }
      }

      AstNode::If { path, negate, then_nodes, else_nodes } => {
        let truthy = resolve(path, data).is_some_and(is_truthy);
        let branch = if truthy != *negate { then_nodes } else { else_nodes };
        out.push_str(&render(branch, data, attrs));
      }

      AstNode::Each { path, body_nodes } => {
        let Some(Value::Array(items)) = resolve(path, data) else { continue };
        let Value::Object(map) = data else { continue };
        for item in items {
          let mut scoped = map.clone();
          if let Some(outer) = scoped.get("$").cloned() {
            scoped.insert("$$".to_string(), outer);
          }
          scoped.insert("$".to_string(), item.clone());
          out.push_str(&render(body_nodes, &Value::Object(scoped), attrs));
        }
      }
    }
  }

  out
}

fn tag_name_end(html: &str, tag_start: usize) -> usize {
  html[tag_start + 1..]
    .find(|c: char| c == '>' || c == '/' || c.is_ascii_whitespace())
    .map_or(html.len(), |rel| tag_start + 1 + rel)
}

/// Remove each marker and add its attribute to the next opening tag.
pub(super) fn inject_attributes(mut html: String, attrs: &[AttrEntry]) -> String {
  for entry in attrs.iter().rev() {
    let Some(pos) = html.find(&entry.marker) else { continue };
    html.replace_range(pos..pos + entry.marker.len(), "");
    if let Some(rel) = html[pos..].find('<') {
      let at = tag_name_end(&html, pos + rel);
      html.insert_str(at, &format!(r#" {}="{}""#, entry.attr_name, entry.value));
    }
  }
  html
}
