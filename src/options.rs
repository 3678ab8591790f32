// Copyright 2018-2024 the Deno authors. All rights reserved. MIT license.

use deno_ast::swc::ast::EsVersion;
use deno_ast::swc::parser::EsSyntax;
use deno_ast::swc::parser::Syntax;
use derive_more::Display;

/// JavaScript language version to parse for.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Default)]
pub enum Version {
  #[display(fmt = "2015")]
  Es2015,
  #[display(fmt = "2016")]
  Es2016,
  #[display(fmt = "2017")]
  Es2017,
  #[display(fmt = "2018")]
  Es2018,
  #[display(fmt = "2019")]
  Es2019,
  #[display(fmt = "2020")]
  Es2020,
  #[display(fmt = "2021")]
  Es2021,
  #[display(fmt = "2022")]
  Es2022,
  #[display(fmt = "2023")]
  Es2023,
  #[default]
  #[display(fmt = "latest")]
  Latest,
}

impl Version {
  /// The parser's version selector. swc does not stratify grammar past
  /// 2022, so 2023 and `latest` both select `EsNext`.
  pub(crate) fn to_es_version(self) -> EsVersion {
    match self {
      Version::Es2015 => EsVersion::Es2015,
      Version::Es2016 => EsVersion::Es2016,
      Version::Es2017 => EsVersion::Es2017,
      Version::Es2018 => EsVersion::Es2018,
      Version::Es2019 => EsVersion::Es2019,
      Version::Es2020 => EsVersion::Es2020,
      Version::Es2021 => EsVersion::Es2021,
      Version::Es2022 => EsVersion::Es2022,
      Version::Es2023 => EsVersion::EsNext,
      Version::Latest => EsVersion::EsNext,
    }
  }
}

/// Extends the parser syntax before a parse.
///
/// Plugins are folded over the base [`Syntax`] in order, so a later plugin
/// observes the effect of every earlier one.
pub type Plugin = Box<dyn Fn(Syntax) -> Syntax>;

#[derive(Default)]
pub struct Options {
  /// JavaScript version (2015 through 2023, or latest).
  pub version: Version,
  /// Whether to parse as a module (ESM) instead of a script.
  pub module: bool,
  /// Whether a `return` statement is allowed in the top scope.
  pub allow_return_outside_function: bool,
  /// Whether `import`/`export` statements are allowed in every scope.
  ///
  /// Placement is governed by the parser's module/script mode; swc exposes
  /// no separate switch for this.
  pub allow_import_export_everywhere: bool,
  /// Whether `await` is allowed in the top scope.
  ///
  /// When unset, the parser's own version- and mode-dependent default
  /// applies (swc permits top-level `await` in modules).
  pub allow_await_outside_function: Option<bool>,
  /// Whether `super` is allowed outside methods.
  pub allow_super_outside_method: bool,
  /// Whether a leading `#!` line is allowed.
  pub allow_hash_bang: bool,
  /// Syntax extensions applied, in order, before parsing.
  pub plugins: Vec<Plugin>,
}

impl std::fmt::Debug for Options {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Options")
      .field("version", &self.version)
      .field("module", &self.module)
      .field(
        "allow_return_outside_function",
        &self.allow_return_outside_function,
      )
      .field(
        "allow_import_export_everywhere",
        &self.allow_import_export_everywhere,
      )
      .field(
        "allow_await_outside_function",
        &self.allow_await_outside_function,
      )
      .field(
        "allow_super_outside_method",
        &self.allow_super_outside_method,
      )
      .field("allow_hash_bang", &self.allow_hash_bang)
      .field("plugins", &format!("<{} plugin(s)>", self.plugins.len()))
      .finish()
  }
}

/// Concrete configuration handed to the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ParserConfig {
  pub syntax: Syntax,
  pub target: EsVersion,
  pub module: bool,
}

impl Options {
  pub(crate) fn parser_config(&self) -> ParserConfig {
    let base = Syntax::Es(EsSyntax {
      allow_return_outside_function: self.allow_return_outside_function,
      allow_super_outside_method: self.allow_super_outside_method,
      ..Default::default()
    });
    let syntax = self
      .plugins
      .iter()
      .fold(base, |syntax, plugin| plugin(syntax));

    ParserConfig {
      syntax,
      target: self.version.to_es_version(),
      module: self.module,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn es_syntax(config: &ParserConfig) -> EsSyntax {
    match config.syntax {
      Syntax::Es(es) => es,
      Syntax::Typescript(_) => panic!("expected an ES syntax"),
    }
  }

  #[test]
  fn default_options_match_explicit_defaults() {
    let explicit = Options {
      version: Version::Latest,
      module: false,
      allow_return_outside_function: false,
      allow_import_export_everywhere: false,
      allow_await_outside_function: None,
      allow_super_outside_method: false,
      allow_hash_bang: false,
      plugins: vec![],
    };
    assert_eq!(Options::default().parser_config(), explicit.parser_config());
  }

  #[test]
  fn defaults_select_latest_script_mode() {
    let config = Options::default().parser_config();
    assert_eq!(config.target, EsVersion::EsNext);
    assert!(!config.module);
    let es = es_syntax(&config);
    assert!(!es.allow_return_outside_function);
    assert!(!es.allow_super_outside_method);
    assert!(!es.jsx);
  }

  #[test]
  fn permissive_flags_reach_the_syntax() {
    let options = Options {
      allow_return_outside_function: true,
      allow_super_outside_method: true,
      ..Default::default()
    };
    let es = es_syntax(&options.parser_config());
    assert!(es.allow_return_outside_function);
    assert!(es.allow_super_outside_method);
  }

  #[test]
  fn version_maps_to_es_version() {
    assert_eq!(Version::Es2015.to_es_version(), EsVersion::Es2015);
    assert_eq!(Version::Es2022.to_es_version(), EsVersion::Es2022);
    assert_eq!(Version::Es2023.to_es_version(), EsVersion::EsNext);
    assert_eq!(Version::Latest.to_es_version(), EsVersion::EsNext);
  }

  #[test]
  fn version_displays_like_the_option_value() {
    assert_eq!(Version::Es2015.to_string(), "2015");
    assert_eq!(Version::Latest.to_string(), "latest");
  }

  #[test]
  fn plugins_fold_in_order() {
    let enable_jsx: Plugin = Box::new(|syntax| match syntax {
      Syntax::Es(mut es) => {
        es.jsx = true;
        Syntax::Es(es)
      }
      other => other,
    });
    let disable_jsx: Plugin = Box::new(|syntax| match syntax {
      Syntax::Es(mut es) => {
        es.jsx = false;
        Syntax::Es(es)
      }
      other => other,
    });

    let options = Options {
      plugins: vec![enable_jsx, disable_jsx],
      ..Default::default()
    };
    // the later plugin saw, and undid, the earlier one's extension
    assert!(!es_syntax(&options.parser_config()).jsx);
  }

  #[test]
  fn debug_reports_plugin_count_only() {
    let options = Options {
      plugins: vec![Box::new(|syntax| syntax)],
      ..Default::default()
    };
    let debug = format!("{:?}", options);
    assert!(debug.contains("<1 plugin(s)>"));
  }
}
