/* src/server/core/src/template/ast.rs */

#[derive(Debug)]
pub(super) enum AstNode {
  Text(String),
  Slot { path: String, raw: bool },
  /// Sets `attr_name` on the next opening tag
  Attr { path: String, attr_name: String },
  If { path: String, negate: bool, then_nodes: Vec<AstNode>, else_nodes: Vec<AstNode> },
  Each { path: String, body_nodes: Vec<AstNode> },
}
