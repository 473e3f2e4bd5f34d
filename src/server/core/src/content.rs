/* src/server/core/src/content.rs */

//! Rich-text fields come from the CMS either as a block tree
//! (`[{type: "paragraph", children: [...]}, ...]`) or as an authored HTML string.
//! Both end up as an HTML fragment for `:html` template slots.

use serde_json::Value;

use crate::template::escape_html;

pub fn to_html(content: &Value) -> String {
  match content {
    Value::String(html) => html.clone(),
    Value::Array(blocks) => {
      let mut out = String::new();
      for block in blocks {
        render_block(block, &mut out);
      }
      out
    }
    _ => String::new(),
  }
}

/// Plain text of a rich-text field, for excerpts and meta descriptions.
pub fn to_plain_text(content: &Value) -> String {
  fn walk(node: &Value, out: &mut String) {
    match node {
      Value::Array(items) => {
        for item in items {
          walk(item, out);
        }
      }
      Value::Object(map) => {
        if let Some(Value::String(text)) = map.get("text") {
          out.push_str(text);
        }
        if let Some(children) = map.get("children") {
          walk(children, out);
          if map.get("type").and_then(Value::as_str) == Some("paragraph") {
            out.push(' ');
          }
        }
      }
      _ => {}
    }
  }

  match content {
    Value::String(s) => s.clone(),
    other => {
      let mut out = String::new();
      walk(other, &mut out);
      out.trim().to_string()
    }
  }
}

fn children(node: &Value) -> &[Value] {
  node.get("children").and_then(Value::as_array).map(Vec::as_slice).unwrap_or(&[])
}

fn render_children(node: &Value, out: &mut String) {
  for child in children(node) {
    render_inline(child, out);
  }
}

fn render_block(block: &Value, out: &mut String) {
  match block.get("type").and_then(Value::as_str) {
    Some("paragraph") => wrap(out, "p", |out| render_children(block, out)),
    Some("heading") => {
      let level = block.get("level").and_then(Value::as_u64).unwrap_or(2).clamp(1, 6);
      let tag = format!("h{level}");
      wrap(out, &tag, |out| render_children(block, out));
    }
    Some("quote") => wrap(out, "blockquote", |out| render_children(block, out)),
    Some("code") => {
      out.push_str("<pre><code>");
      for child in children(block) {
        if let Some(text) = child.get("text").and_then(Value::as_str) {
          out.push_str(&escape_html(text));
        }
      }
      out.push_str("</code></pre>");
    }
    Some("list") => {
      let tag = match block.get("format").and_then(Value::as_str) {
        Some("ordered") => "ol",
        _ => "ul",
      };
      wrap(out, tag, |out| {
        for item in children(block) {
          if item.get("type").and_then(Value::as_str) == Some("list") {
            render_block(item, out);
          } else {
            wrap(out, "li", |out| render_children(item, out));
          }
        }
      });
    }
    Some("image") => {
      if let Some(image) = block.get("image") {
        let url = image.get("url").and_then(Value::as_str).unwrap_or_default();
        let alt = image.get("alternativeText").and_then(Value::as_str).unwrap_or_default();
        out.push_str(&format!(
          r#"<img src="{}" alt="{}" loading="lazy">"#,
          escape_html(url),
          escape_html(alt)
        ));
      }
    }
    // Unknown block types still show their text.
    _ => render_children(block, out),
  }
}

fn render_inline(node: &Value, out: &mut String) {
  match node.get("type").and_then(Value::as_str) {
    Some("link") => {
      let url = node.get("url").and_then(Value::as_str).unwrap_or("#");
      out.push_str(&format!(r#"<a href="{}">"#, escape_html(url)));
      render_children(node, out);
      out.push_str("</a>");
    }
    _ => {
      let text = node.get("text").and_then(Value::as_str).unwrap_or_default();
      let mut html = escape_html(text).replace('\n', "<br>");
      let flag = |name: &str| node.get(name).and_then(Value::as_bool).unwrap_or(false);
      for (mark, tag) in [
        ("code", "code"),
        ("bold", "strong"),
        ("italic", "em"),
        ("underline", "u"),
        ("strikethrough", "s"),
      ] {
        if flag(mark) {
          html = format!("<{tag}>{html}</{tag}>");
        }
      }
      out.push_str(&html);
    }
  }
}

fn wrap(out: &mut String, tag: &str, body: impl FnOnce(&mut String)) {
  out.push('<');
  out.push_str(tag);
  out.push('>');
  body(out);
  out.push_str("</");
  out.push_str(tag);
  out.push('>');
}
