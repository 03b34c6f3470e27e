//! Machine-readable syntax facts for Lua 5.1, Luau and Synapse X
//!
//! This crate is a flat table of facts about a Lua-family grammar, meant for
//! tools that reason about source code (AI assistants, linters) without
//! parsing it. Each [`SyntaxRule`] carries a name, a [`Category`], a
//! description, an optional EBNF-like grammar, an optional regex pattern,
//! dialect flags, and a [`Classification`].
//!
//! - **Lua 5.1**: rules with no dialect flag
//! - **Luau**: `luau_only` rules (`continue`, type annotations, `//`, ...)
//! - **Synapse X**: `synapse_only` exploit globals and `debug.*` extensions
//!
//! ## Not a lexer
//!
//! Patterns overlap by nature: the `identifier` rule matches every keyword,
//! `.` matches inside `..`. [`SyntaxCatalog::match_pattern`] reports every
//! match from every rule and resolves nothing. A tokenizer built on top must
//! bring its own precedence (keywords before identifiers, longest match
//! first). Bundled patterns are best-effort hints in Rust `regex` syntax.
//!
//! ## Usage
//!
//! ```rust
//! use lua_syntax_catalog::{catalog, Category, DialectFlags};
//!
//! let catalog = catalog();
//!
//! let keywords = catalog.find_by_category(Category::Keyword);
//! assert!(keywords.iter().any(|r| r.name == "keyword “local”"));
//!
//! // Standard Lua only: no Luau or Synapse X records
//! let lua51 = catalog.find_applicable(DialectFlags::lua51());
//! assert!(lua51.iter().all(|r| r.is_portable()));
//!
//! for m in catalog.match_pattern("local x = 5") {
//!     println!("{} at {:?}: {}", m.rule.name, m.span, m.text);
//! }
//! ```

mod catalog;
pub mod config;
mod error;
pub mod interchange;
mod matcher;
pub mod rules;
mod types;

pub use catalog::SyntaxCatalog;
pub use config::{CatalogConfig, DialectFlags};
pub use error::{CatalogError, Result};
pub use matcher::{RuleMatch, Span};
pub use types::{Category, Classification, Dialect, SyntaxRule};

use once_cell::sync::Lazy;

static BUILTIN: Lazy<std::result::Result<SyntaxCatalog, CatalogError>> =
    Lazy::new(SyntaxCatalog::builtin);

/// The process-wide catalog built from the bundled rules.
///
/// Built on first use and shared read-only afterwards.
///
/// # Panics
///
/// If the bundled data fails to build (an invalid pattern). That is a defect
/// in this crate, not a runtime condition; use [`try_catalog`] to handle it.
pub fn catalog() -> &'static SyntaxCatalog {
    match try_catalog() {
        Ok(catalog) => catalog,
        Err(e) => panic!("bundled syntax catalog failed to build: {e}"),
    }
}

/// The process-wide catalog, or the error that prevented building it
pub fn try_catalog() -> std::result::Result<&'static SyntaxCatalog, &'static CatalogError> {
    Lazy::force(&BUILTIN).as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_catalog_is_shared() {
        let a = catalog();
        let b = catalog();
        assert!(std::ptr::eq(a, b));
        assert!(!a.is_empty());
    }

    #[test]
    fn test_catalog_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SyntaxCatalog>();
    }

    #[test]
    fn test_concurrent_readers() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| catalog().find_applicable(DialectFlags::all()).len()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), catalog().len());
        }
    }
}
