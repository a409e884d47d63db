//! # Language Module
//!
//! Generalized handling of compiled tree-sitter grammar artifacts.
//! A `GrammarProvider` hands out a language handle, and `verify_grammar_loads`
//! performs the load check against the embedded runtime.
//! RGBASM specific providers are in the `rgbasm` submodule.

pub mod rgbasm;

use tree_sitter;
use thiserror::Error;
use log::{debug,error};

use crate::{STDRESULT,DYNERR};

#[derive(Error,Debug)]
pub enum Error {
    #[error("Error loading Game Boy assembly grammar")]
    GrammarLoad,
    #[error("grammar ABI version {found} is outside the supported range {min}..={max}")]
    AbiVersion { found: usize, min: usize, max: usize }
}

/// Hands out language handles for a compiled grammar artifact.
/// Implementations are injected at the call site; there is no process-wide
/// default loader.
pub trait GrammarProvider {
    /// Identifies the grammar in logs and diagnostics.
    fn name(&self) -> &str;
    /// Produce the language handle, or None if the artifact cannot be loaded.
    fn load(&self) -> Option<tree_sitter::Language>;
}

/// The binding loader check.  Asks the provider for a handle and verifies the
/// runtime will accept it.  Succeeds silently, fails with `Error::GrammarLoad`
/// for every corruption mode; the specific cause goes to the log.  Repeating
/// the check yields the same outcome, nothing global is mutated.
pub fn verify_grammar_loads(provider: &dyn GrammarProvider) -> STDRESULT {
    let lang = match provider.load() {
        Some(lang) => lang,
        None => {
            error!("no language handle for `{}`",provider.name());
            return Err(Box::new(Error::GrammarLoad));
        }
    };
    let found = lang.abi_version();
    let min = tree_sitter::MIN_COMPATIBLE_LANGUAGE_VERSION;
    let max = tree_sitter::LANGUAGE_VERSION;
    if found < min || found > max {
        error!("`{}`: {}",provider.name(),Error::AbiVersion { found, min, max });
        return Err(Box::new(Error::GrammarLoad));
    }
    let mut parser = tree_sitter::Parser::new();
    if let Err(e) = parser.set_language(&lang) {
        error!("runtime refused `{}`: {}",provider.name(),e);
        return Err(Box::new(Error::GrammarLoad));
    }
    debug!("grammar `{}` loaded, ABI version {}",provider.name(),found);
    Ok(())
}

/// Handle metadata as a JSON object, all of it obtained through the opaque
/// handle.  Used by the `describe` subcommand.
pub fn describe_grammar(provider: &dyn GrammarProvider) -> Result<json::JsonValue,DYNERR> {
    let lang = match provider.load() {
        Some(lang) => lang,
        None => {
            error!("no language handle for `{}`",provider.name());
            return Err(Box::new(Error::GrammarLoad));
        }
    };
    let mut obj = json::JsonValue::new_object();
    obj["name"] = provider.name().into();
    obj["abi_version"] = lang.abi_version().into();
    obj["node_kinds"] = lang.node_kind_count().into();
    obj["fields"] = lang.field_count().into();
    Ok(obj)
}
