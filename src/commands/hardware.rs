//! ## Hardware symbol update
//!
//! Runs the `hardware` subcommand: read `hardware.inc` text from stdin,
//! extract the register symbols, splice them into the support file named by
//! `--file`, and write the result to stdout.

use clap::ArgMatches;
use log::{error,info};
use std::io::Read;

use crate::lang::rgbasm::hardware;
use super::CommandError;
use crate::STDRESULT;

const RCH: &str = "unreachable was reached";

pub fn update(cmd: &ArgMatches) -> STDRESULT {
    if atty::is(atty::Stream::Stdin) {
        error!("line entry is not supported for `hardware`, please pipe something in");
        return Err(Box::new(CommandError::InvalidCommand));
    }
    let mut hardware_inc = String::new();
    match std::io::stdin().read_to_string(&mut hardware_inc) {
        Ok(_) => {},
        Err(e) => {
            error!("the hardware.inc data could not be interpreted as a string");
            return Err(Box::new(e));
        }
    }
    if hardware_inc.len()==0 {
        error!("hardware did not receive any data from previous node");
        return Err(Box::new(CommandError::InvalidCommand));
    }
    let target_path = cmd.get_one::<String>("file").expect(RCH);
    let target = match std::fs::read_to_string(target_path) {
        Ok(s) => s,
        Err(_) => {
            error!("could not read support file {}",target_path);
            return Err(Box::new(CommandError::FileNotFound));
        }
    };
    let symbols = hardware::parse_defs(&hardware_inc);
    info!("found {} hardware symbols",symbols.len());
    let object = hardware::inject_symbols(&target,&symbols)?;
    print!("{}",object);
    Ok(())
}
