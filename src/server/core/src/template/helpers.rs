/* src/server/core/src/template/helpers.rs */

use serde_json::Value;

/// Dotted lookup; `$` names the current `each` item.
pub(super) fn resolve<'a>(path: &str, data: &'a Value) -> Option<&'a Value> {
  let mut current = data;
  for key in path.split('.') {
    current = match current {
      Value::Array(items) => items.get(key.parse::<usize>().ok()?)?,
      other => other.get(key)?,
    };
  }
  Some(current)
}

pub(super) fn is_truthy(value: &Value) -> bool {
  match value {
    Value::Null => false,
    Value::Bool(b) => *b,
    Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
    Value::String(s) => !s.is_empty(),
    Value::Array(arr) => !arr.is_empty(),
    Value::Object(_) => true,
  }
}

pub(super) fn stringify(value: &Value) -> String {
  match value {
    Value::Null => String::new(),
    Value::String(s) => s.clone(),
    other => other.to_string(),
  }
}

pub fn escape_html(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for ch in s.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#x27;"),
      c => out.push(c),
    }
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn resolve_paths() {
    let data = json!({"a": {"b": [10, {"c": "x"}]}});
    assert_eq!(resolve("a.b.0", &data), Some(&json!(10)));
    assert_eq!(resolve("a.b.1.c", &data), Some(&json!("x")));
    assert_eq!(resolve("a.missing", &data), None);
    assert_eq!(resolve("a.b.9", &data), None);
  }

  #[test]
  fn truthiness() {
    for v in [json!(true), json!(1), json!(0.5), json!("x"), json!([1]), json!({})] {
      assert!(is_truthy(&v), "{v}");
    }
    for v in [json!(false), json!(0), json!(""), json!([]), json!(null)] {
      assert!(!is_truthy(&v), "{v}");
    }
  }

  #[test]
  fn stringify_scalars() {
    assert_eq!(stringify(&json!(null)), "");
    assert_eq!(stringify(&json!(42)), "42");
    assert_eq!(stringify(&json!("s")), "s");
  }

  #[test]
  fn escapes_markup() {
    assert_eq!(
      escape_html("<a href=\"x\">'&'</a>"),
      "&lt;a href=&quot;x&quot;&gt;&#x27;&amp;&#x27;&lt;/a&gt;"
    );
  }
}
