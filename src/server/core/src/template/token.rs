/* src/server/core/src/template/token.rs */

#[derive(Debug)]
pub(super) enum Token {
  Text(String),
  /// Directive body between `<!--site:` and `-->`
  Marker(String),
}

pub(super) const MARKER_OPEN: &str = "<!--site:";
pub(super) const MARKER_CLOSE: &str = "-->";

pub(super) fn tokenize(template: &str) -> Vec<Token> {
  let mut tokens = Vec::new();
  let mut rest = template;

  while !rest.is_empty() {
    let Some(start) = rest.find(MARKER_OPEN) else {
      tokens.push(Token::Text(rest.to_string()));
      break;
    };
    if start > 0 {
      tokens.push(Token::Text(rest[..start].to_string()));
    }
    let body = &rest[start + MARKER_OPEN.len()..];
    match body.find(MARKER_CLOSE) {
      Some(end) => {
        tokens.push(Token::Marker(body[..end].trim().to_string()));
        rest = &body[end + MARKER_CLOSE.len()..];
      }
      None => {
        // Unclosed marker is kept as text
        tokens.push(Token::Text(rest[start..].to_string()));
        break;
      }
    }
  }

  tokens
}
