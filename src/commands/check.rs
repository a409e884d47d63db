//! ## Binding load check
//!
//! Runs the `check` subcommand: construct a provider for the requested
//! artifact, run the load verification, and report the outcome on stderr.

use clap::ArgMatches;
use colored::*;
use log::error;
use std::str::FromStr;

use crate::lang;
use super::GrammarId;
use crate::STDRESULT;

const RCH: &str = "unreachable was reached";

pub fn check(cmd: &ArgMatches) -> STDRESULT {
    let grammar = GrammarId::from_str(cmd.get_one::<String>("grammar").expect(RCH))?;
    let provider = super::library_provider(grammar,cmd.get_one::<String>("lib"));
    match lang::verify_grammar_loads(&provider) {
        Ok(()) => {
            eprintln!("\u{2713} {} ({})","Grammar OK".green(),grammar.as_str());
            Ok(())
        },
        Err(e) => {
            error!("{}",e);
            Err(e)
        }
    }
}
