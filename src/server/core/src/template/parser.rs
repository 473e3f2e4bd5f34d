/* src/server/core/src/template/parser.rs */

use super::ast::AstNode;
use super::token::Token;

pub(super) fn parse(tokens: &[Token]) -> Vec<AstNode> {
  let mut pos = 0;
  parse_until(tokens, &mut pos, &|_| false)
}

fn parse_until(tokens: &[Token], pos: &mut usize, stop: &dyn Fn(&str) -> bool) -> Vec<AstNode> {
  let mut nodes = Vec::new();

  while *pos < tokens.len() {
    let directive = match &tokens[*pos] {
      Token::Text(value) => {
        nodes.push(AstNode::Text(value.clone()));
        *pos += 1;
        continue;
      }
      Token::Marker(directive) => directive,
    };
    if stop(directive) {
      return nodes;
    }
    *pos += 1;

    let conditional = directive
      .strip_prefix("if:")
      .map(|p| (p, false))
      .or_else(|| directive.strip_prefix("unless:").map(|p| (p, true)));

    if let Some((path, negate)) = conditional {
      let endif = format!("endif:{path}");
      let then_nodes = parse_until(tokens, pos, &|d| d == "else" || d == endif);
      let else_nodes = if matches!(tokens.get(*pos), Some(Token::Marker(d)) if d == "else") {
        *pos += 1;
        parse_until(tokens, pos, &|d| d == endif)
      } else {
        Vec::new()
      };
      // endif
      *pos += 1;
      nodes.push(AstNode::If { path: path.to_string(), negate, then_nodes, else_nodes });
    } else if let Some(path) = directive.strip_prefix("each:") {
      let body_nodes = parse_until(tokens, pos, &|d| d == "endeach");
      *pos += 1;
      nodes.push(AstNode::Each { path: path.to_string(), body_nodes });
    } else if let Some(idx) = directive.find(":attr:") {
      nodes.push(AstNode::Attr {
        path: directive[..idx].to_string(),
        attr_name: directive[idx + ":attr:".len()..].to_string(),
      });
    } else if let Some(path) = directive.strip_suffix(":html") {
      nodes.push(AstNode::Slot { path: path.to_string(), raw: true });
    } else {
      nodes.push(AstNode::Slot { path: directive.clone(), raw: false });
    }
  }

  nodes
}
