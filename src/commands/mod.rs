//! # CLI Subcommands
//!
//! Contains modules that run the subcommands.

pub mod check;
pub mod hardware;

use std::str::FromStr;
use crate::lang::rgbasm;

#[derive(thiserror::Error,Debug)]
pub enum CommandError {
    #[error("Grammar name is unknown")]
    UnknownGrammar,
    #[error("Command could not be interpreted")]
    InvalidCommand,
    #[error("File not found")]
    FileNotFound
}

/// Grammar artifacts carried by the RGBASM distribution.
#[derive(PartialEq,Clone,Copy)]
pub enum GrammarId {
    Rgbasm,
    RgbasmIdentifier
}

impl FromStr for GrammarId {
    type Err = CommandError;
    fn from_str(s: &str) -> Result<Self,Self::Err> {
        match s {
            "rgbasm" => Ok(Self::Rgbasm),
            "identifier" | "rgbasm_identifier" => Ok(Self::RgbasmIdentifier),
            _ => Err(CommandError::UnknownGrammar)
        }
    }
}

impl GrammarId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rgbasm => rgbasm::MAIN_GRAMMAR,
            Self::RgbasmIdentifier => rgbasm::IDENTIFIER_GRAMMAR
        }
    }
}

/// Build the library provider for a subcommand, honoring an explicit
/// `--lib` path when one was given.
pub fn library_provider(grammar: GrammarId,lib: Option<&String>) -> rgbasm::LibraryProvider {
    match lib {
        Some(path) => rgbasm::LibraryProvider::with_path(grammar.as_str(),std::path::Path::new(path)),
        None => rgbasm::LibraryProvider::new(grammar.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grammar_names_round_trip() {
        for name in ["rgbasm","rgbasm_identifier"] {
            assert_eq!(GrammarId::from_str(name).unwrap().as_str(),name);
        }
    }

    #[test]
    fn unknown_grammar_is_rejected() {
        assert!(GrammarId::from_str("agbasm").is_err());
    }
}
