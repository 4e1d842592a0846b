//! Rust bindings for the `tree-sitter-elle` grammar.
//!
//! This follows the standard layout used by Tree-sitter grammars so that
//! consumers can link the generated parser and obtain a
//! `tree_sitter::Language` handle for Elle.

use std::fmt;

use tree_sitter::{Language, LanguageError, Parser};

extern "C" {
    fn tree_sitter_elle() -> Language;
}

/// Returns the Tree-sitter [`Language`] for this grammar.
pub fn language() -> Language {
    unsafe { tree_sitter_elle() }
}

/// Error raised when the compiled grammar cannot be wrapped into a usable
/// language handle.
///
/// The underlying [`LanguageError`] is kept as [`source`] so the harness can
/// print which ABI version the rejected handle advertised.
///
/// [`source`]: std::error::Error::source
#[derive(Debug)]
pub struct GrammarLoadError {
    source: LanguageError,
}

impl fmt::Display for GrammarLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Error loading Elle grammar")
    }
}

impl std::error::Error for GrammarLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Checks that the linked grammar yields a handle a [`Parser`] accepts.
///
/// The accessor itself cannot fail; the handle is only rejected when the
/// compiled parser and the linked Tree-sitter runtime disagree on the
/// language ABI version.
pub fn verify_grammar_loadable() -> Result<(), GrammarLoadError> {
    let mut parser = Parser::new();
    parser
        .set_language(&language())
        .map_err(|source| GrammarLoadError { source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grammar_can_be_loaded() {
        let mut parser = Parser::new();
        parser
            .set_language(&language())
            .expect("Error loading Elle grammar");
    }

    #[test]
    fn load_check_passes() {
        verify_grammar_loadable().expect("Error loading Elle grammar");
    }

    #[test]
    fn load_check_is_idempotent() {
        // Repeated calls go through the same static descriptor.
        assert!(verify_grammar_loadable().is_ok());
        assert!(verify_grammar_loadable().is_ok());
    }

    #[test]
    fn handle_reports_supported_abi_version() {
        let version = language().version();
        assert!(
            (tree_sitter::MIN_COMPATIBLE_LANGUAGE_VERSION..=tree_sitter::LANGUAGE_VERSION)
                .contains(&version)
        );
    }
}
