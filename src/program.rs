// Copyright 2018-2024 the Deno authors. All rights reserved. MIT license.

use deno_ast::swc::ast;
use deno_ast::swc::common::comments::Comment;
use deno_ast::SourceTextInfo;

use crate::diagnostic::Position;

/// Outcome of a successful parse: the syntax tree together with every
/// comment encountered, in source order.
pub struct ParsedProgram {
  program: ast::Program,
  comments: Vec<Comment>,
  text_info: SourceTextInfo,
}

impl ParsedProgram {
  pub(crate) fn new(
    program: ast::Program,
    comments: Vec<Comment>,
    text_info: SourceTextInfo,
  ) -> Self {
    ParsedProgram {
      program,
      comments,
      text_info,
    }
  }

  /// The underlying syntax tree.
  pub fn program(&self) -> &ast::Program {
    &self.program
  }

  /// The comments encountered during the parse, ordered by source
  /// position. Always present, even when empty, so consumers observe a
  /// defined sequence.
  pub fn comments(&self) -> &[Comment] {
    &self.comments
  }

  /// Line index and text information for the parsed source.
  pub fn text_info(&self) -> &SourceTextInfo {
    &self.text_info
  }

  pub fn is_module(&self) -> bool {
    matches!(self.program, ast::Program::Module(_))
  }

  /// `"module"` or `"script"`.
  pub fn source_type(&self) -> &'static str {
    if self.is_module() {
      "module"
    } else {
      "script"
    }
  }

  /// The shebang line's text, without the `#!` prefix.
  pub fn shebang(&self) -> Option<&str> {
    match &self.program {
      ast::Program::Module(module) => module.shebang.as_deref(),
      ast::Program::Script(script) => script.shebang.as_deref(),
    }
  }

  /// Translates a byte offset into the source to a 1-based line/column
  /// [`Position`]. Node and comment spans are byte offsets, so this is the
  /// lookup for placing any part of the tree.
  pub fn position(&self, offset: usize) -> Position {
    let pos = self.text_info.range().start + offset;
    Position::new(offset, self.text_info.line_and_column_index(pos))
  }

  /// Consumes the wrapper, returning the raw tree.
  pub fn into_program(self) -> ast::Program {
    self.program
  }
}

impl std::fmt::Debug for ParsedProgram {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ParsedProgram")
      .field("program", &self.program)
      .field("comments", &self.comments)
      .field("text_info", &"<omitted>")
      .finish()
  }
}
