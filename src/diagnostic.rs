// Copyright 2018-2024 the Deno authors. All rights reserved. MIT license.

use deno_ast::swc::common::Spanned;
use deno_ast::swc::parser::error::Error as SwcError;
use deno_ast::LineAndColumnIndex;
use deno_ast::SourceTextInfo;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Origin tag attached to every [`ParseError`], naming this crate and the
/// underlying parser.
pub const PARSE_ERROR_ORIGIN: &str = "esast_from_js:swc";

/// Trailing ` (line:column)` suffix some parser messages carry. The position
/// travels structurally on the error, so the suffix is dropped from the text.
static POSITION_SUFFIX: Lazy<Regex> =
  Lazy::new(|| Regex::new(r" \(\d+:\d+\)$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
  /// The 1-based line number.
  pub line: usize,
  /// The 1-based column number.
  pub column: usize,
  /// The 0-based byte offset.
  pub offset: usize,
}

impl Position {
  pub fn new(offset: usize, loc: LineAndColumnIndex) -> Self {
    Position {
      line: loc.line_index + 1,
      column: loc.column_index + 1,
      offset,
    }
  }
}

/// A syntax error translated from the underlying parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseError {
  pub message: String,
  pub position: Position,
  pub origin: &'static str,
}

impl ParseError {
  pub(crate) fn new(message: impl ToString, position: Position) -> Self {
    ParseError {
      message: message.to_string(),
      position,
      origin: PARSE_ERROR_ORIGIN,
    }
  }

  pub(crate) fn from_swc(err: &SwcError, text_info: &SourceTextInfo) -> Self {
    let offset = err.span().lo.0 as usize;
    let loc =
      text_info.line_and_column_index(text_info.range().start + offset);
    ParseError::new(
      strip_position_suffix(&err.kind().msg()),
      Position::new(offset, loc),
    )
  }
}

fn strip_position_suffix(message: &str) -> String {
  POSITION_SUFFIX.replace(message, "").into_owned()
}

impl std::fmt::Display for ParseError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(
      f,
      "{} at {}:{}",
      self.message, self.position.line, self.position.column
    )
  }
}

impl std::error::Error for ParseError {}
