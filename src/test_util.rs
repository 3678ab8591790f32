// Copyright 2018-2024 the Deno authors. All rights reserved. MIT license.

use crate::ast_parser::from_js;
use crate::diagnostic::ParseError;
use crate::options::Options;
use crate::program::ParsedProgram;
use deno_ast::swc::ast;

/// Parses `source` in script mode with default options, panicking on
/// failure.
#[track_caller]
pub fn parse(source: &str) -> ParsedProgram {
  parse_with(source, &Options::default())
}

#[track_caller]
pub fn parse_with(source: &str, options: &Options) -> ParsedProgram {
  match from_js(source, options) {
    Ok(program) => program,
    Err(err) => panic!(
      "Failed to parse.\n[cause]\n{}\n\n[source code]\n{}",
      err, source
    ),
  }
}

/// Parses expecting failure, returning the translated error.
#[track_caller]
pub fn parse_err(source: &str, options: &Options) -> ParseError {
  match from_js(source, options) {
    Ok(program) => panic!(
      "Expected a parse error.\n\n[source code]\n{}\n\n[program]\n{:?}",
      source, program
    ),
    Err(err) => err,
  }
}

/// The statement list of a script-mode parse.
#[track_caller]
pub fn script_body(program: &ParsedProgram) -> &[ast::Stmt] {
  match program.program() {
    ast::Program::Script(script) => &script.body,
    program => panic!("expected a script, got {:?}", program),
  }
}
