// Copyright 2018-2024 the Deno authors. All rights reserved. MIT license.

//! Parses JavaScript source text into a comment-annotated syntax tree.
//!
//! The grammar work is swc's, consumed through [`deno_ast`]'s re-exports;
//! this crate normalizes configuration, collects comments during the single
//! parse, and translates parser failures into a uniform, position-annotated
//! [`ParseError`].

pub mod diagnostic;

mod ast_parser;
mod options;
mod program;

#[cfg(test)]
mod test_util;

pub use ast_parser::from_js;
pub use ast_parser::from_js_bytes;
pub use diagnostic::ParseError;
pub use diagnostic::Position;
pub use diagnostic::PARSE_ERROR_ORIGIN;
pub use options::Options;
pub use options::Plugin;
pub use options::Version;
pub use program::ParsedProgram;

// Node and comment types consumers need to traverse the returned tree.
pub use deno_ast::swc::ast;
pub use deno_ast::swc::common::comments::Comment;
pub use deno_ast::swc::common::comments::CommentKind;
