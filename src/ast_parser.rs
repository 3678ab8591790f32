// Copyright 2018-2024 the Deno authors. All rights reserved. MIT license.

use deno_ast::swc::ast;
use deno_ast::swc::common::comments::Comment;
use deno_ast::swc::common::comments::CommentKind;
use deno_ast::swc::common::comments::SingleThreadedComments;
use deno_ast::swc::common::BytePos;
use deno_ast::swc::common::Span;
use deno_ast::swc::parser::error::Error as SwcError;
use deno_ast::swc::parser::lexer::Lexer;
use deno_ast::swc::parser::Parser;
use deno_ast::swc::parser::StringInput;
use deno_ast::SourceTextInfo;
use log::debug;

use crate::diagnostic::ParseError;
use crate::diagnostic::Position;
use crate::options::Options;
use crate::options::ParserConfig;
use crate::program::ParsedProgram;

/// Parses JavaScript source text into a [`ParsedProgram`].
///
/// The parse is a single pass: the source is handed to the parser with the
/// configuration produced from `options`, comments are collected on the
/// side, and any parser failure is translated into a [`ParseError`].
pub fn from_js(
  source: &str,
  options: &Options,
) -> Result<ParsedProgram, ParseError> {
  let config = options.parser_config();
  let text_info = SourceTextInfo::from_string(source.to_string());
  debug!(
    "parsing {} byte(s) as {}",
    source.len(),
    if config.module { "module" } else { "script" }
  );

  if !options.allow_hash_bang && source.starts_with("#!") {
    return Err(ParseError::new(
      "Unexpected character '#'",
      Position {
        line: 1,
        column: 1,
        offset: 0,
      },
    ));
  }

  let (program, mut comments) = parse(source, &config)
    .map_err(|err| ParseError::from_swc(&err, &text_info))?;

  if let Some(comment) = shebang_comment(&program) {
    comments.insert(0, comment);
  }

  Ok(ParsedProgram::new(program, comments, text_info))
}

/// Parses a UTF-8 byte buffer.
///
/// Invalid sequences are replaced with U+FFFD, the way JavaScript engines
/// decode buffers, so a buffer holding the UTF-8 encoding of a string
/// parses identically to the string itself.
pub fn from_js_bytes(
  bytes: &[u8],
  options: &Options,
) -> Result<ParsedProgram, ParseError> {
  from_js(&String::from_utf8_lossy(bytes), options)
}

fn parse(
  source: &str,
  config: &ParserConfig,
) -> Result<(ast::Program, Vec<Comment>), SwcError> {
  let comments = SingleThreadedComments::default();
  let input =
    StringInput::new(source, BytePos(0), BytePos(source.len() as u32));
  let lexer = Lexer::new(config.syntax, config.target, input, Some(&comments));
  let mut parser = Parser::new_from(lexer);

  let result = if config.module {
    parser.parse_module().map(ast::Program::Module)
  } else {
    parser.parse_script().map(ast::Program::Script)
  };

  let program = result?;
  // swc recovers from some syntax errors and keeps parsing; surface the
  // first one so a failed parse never yields a tree
  if let Some(error) = parser.take_errors().into_iter().next() {
    return Err(error);
  }

  Ok((program, flatten_comments(comments)))
}

/// Flattens the leading and trailing comment maps into a single sequence
/// ordered by starting position.
fn flatten_comments(comments: SingleThreadedComments) -> Vec<Comment> {
  let (leading, trailing) = comments.take_all();
  let mut all: Vec<Comment> = Vec::new();
  all.extend(leading.borrow().values().flatten().cloned());
  all.extend(trailing.borrow().values().flatten().cloned());
  all.sort_by_key(|comment| comment.span.lo);
  all
}

/// The lexer stores a shebang on the program node rather than reporting it
/// as a comment; surface it as the leading line comment it reads as, with a
/// span covering the whole `#!` line.
fn shebang_comment(program: &ast::Program) -> Option<Comment> {
  let shebang = match program {
    ast::Program::Module(module) => module.shebang.as_ref(),
    ast::Program::Script(script) => script.shebang.as_ref(),
  }?;
  Some(Comment {
    kind: CommentKind::Line,
    span: Span::new(BytePos(0), BytePos(shebang.len() as u32 + 2)),
    text: shebang.clone(),
  })
}
