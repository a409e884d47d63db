//! # Command Line Interface
//!
//! Simple subcommands are directly in `main.rs`.
//! More elaborate subcommands are in the `commands` module.

mod cli;

use env_logger;
use std::str::FromStr;
#[cfg(windows)]
use colored;
use log::error;
use gbkit::commands;
use gbkit::commands::{CommandError,GrammarId};
use gbkit::lang;
use gbkit::lang::rgbasm;

const RCH: &str = "unreachable was reached";

fn main() -> Result<(),Box<dyn std::error::Error>>
{
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).unwrap();

    let matches = cli::build_cli().get_matches();

    // Verify a grammar artifact loads

    if let Some(cmd) = matches.subcommand_matches("check") {
        return commands::check::check(cmd);
    }

    // Handle metadata

    if let Some(cmd) = matches.subcommand_matches("describe") {
        let grammar = GrammarId::from_str(cmd.get_one::<String>("grammar").expect(RCH))?;
        let provider = commands::library_provider(grammar,cmd.get_one::<String>("lib"));
        match lang::describe_grammar(&provider) {
            Ok(obj) => {
                println!("{}",json::stringify_pretty(obj,4));
                return Ok(());
            },
            Err(e) => {
                error!("{}",e);
                return Err(e);
            }
        }
    }

    // List grammar search paths

    if let Some(_cmd) = matches.subcommand_matches("paths") {
        for dir in rgbasm::grammar_search_paths() {
            println!("{}",dir.display());
        }
        return Ok(());
    }

    // Update hardware symbols

    if let Some(cmd) = matches.subcommand_matches("hardware") {
        return commands::hardware::update(cmd);
    }

    error!("No subcommand was found, try `gbkit --help`");
    return Err(Box::new(CommandError::InvalidCommand));
}
