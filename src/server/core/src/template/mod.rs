/* src/server/core/src/template/mod.rs */

//! Comment-marker templates: plain HTML files with `<!--site:...-->` directives.
//!
//! | directive | effect |
//! |---|---|
//! | `<!--site:a.b-->` | escaped text of `a.b` |
//! | `<!--site:a.b:html-->` | raw HTML |
//! | `<!--site:a.b:attr:href-->` | `href` on the next opening tag (skipped when missing) |
//! | `if:a` / `unless:a` ... `else` ... `endif:a` | conditional |
//! | `each:a` ... `endeach` | loop; `$` is the item, `$$` the outer item |
//! | `outlet` | in `layout.html`, where the page body goes |

mod ast;
mod helpers;
mod parser;
mod render;
mod set;
mod token;

use serde_json::Value;

pub use helpers::escape_html;
pub use set::{PAGE_TEMPLATES, TemplateSet};

pub const OUTLET: &str = "<!--site:outlet-->";

pub fn inject(template: &str, data: &Value) -> String {
  let ast = parser::parse(&token::tokenize(template));
  let mut attrs = Vec::new();
  let html = render::render(&ast, data, &mut attrs);
  if attrs.is_empty() { html } else { render::inject_attributes(html, &attrs) }
}
