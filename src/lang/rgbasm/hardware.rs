//! # Hardware symbol maintenance
//!
//! The grammar distribution carries the register symbols declared in gbdev's
//! `hardware.inc` (`rLCDC`, `rSTAT`, and so on).  This module extracts the
//! `def` declarations from a `hardware.inc` text and splices the sorted list
//! into a support file between script-generated markers.  Retrieval of
//! `hardware.inc` itself is left to the pipeline.

use regex::{Regex,RegexBuilder};
use thiserror::Error;

/// longest output line, including indentation
pub const LINE_LIMIT: usize = 255;

const RCH: &str = "unreachable was reached";

#[derive(Error,Debug)]
pub enum Error {
    #[error("no script-generated markers in target")]
    MissingMarkers,
    #[error("no symbols to inject")]
    NoSymbols
}

/// Collect `def NAME` declarations, keeping only names that are valid
/// hardware symbols (optional leading `r`, then caps, digits, underscores).
/// The result is sorted and deduplicated.
pub fn parse_defs(hardware_inc: &str) -> Vec<String> {
    let def_patt = RegexBuilder::new(r"^\s*def\s+([a-z\d_]+)\s")
        .multi_line(true)
        .case_insensitive(true)
        .build().expect(RCH);
    let valid_patt = Regex::new(r"^r?[A-Z_][A-Za-z\d_]*$").expect(RCH);
    let mut ans: Vec<String> = def_patt.captures_iter(hardware_inc)
        .map(|caps| caps[1].to_string())
        .filter(|name| valid_patt.is_match(name))
        .collect();
    ans.sort();
    ans.dedup();
    ans
}

/// Render the symbols as quoted names, space separated, wrapped so that no
/// line exceeds `LINE_LIMIT` characters including the indent.
pub fn format_symbols(symbols: &[String],indent: &str) -> String {
    let mut out = String::new();
    let mut current: Vec<String> = Vec::new();
    let mut current_len = 0;
    for sym in symbols {
        let quoted = format!("\"{}\"",sym);
        if current.len() > 0 && indent.len() + current_len + current.len() + quoted.len() > LINE_LIMIT {
            out += indent;
            out += &current.join(" ");
            out += "\n";
            current_len = quoted.len();
            current = vec![quoted];
        } else {
            current_len += quoted.len();
            current.push(quoted);
        }
    }
    if current.len() > 0 {
        out += indent;
        out += &current.join(" ");
        out += "\n";
    }
    out
}

/// Replace the region between `; WARN: script-generated content` and
/// `; END WARN` with the formatted symbol list, preserving the indentation
/// of the markers.  Text outside the markers is untouched, and repeating the
/// injection with the same symbols is a no-op.
pub fn inject_symbols(target: &str,symbols: &[String]) -> Result<String,Error> {
    if symbols.len()==0 {
        return Err(Error::NoSymbols);
    }
    let boundary = RegexBuilder::new(r"^([ \t]*)(; WARN: script.generated content[^\n]*\n).*?(; END WARN\n)")
        .multi_line(true)
        .case_insensitive(true)
        .dot_matches_new_line(true)
        .build().expect(RCH);
    if !boundary.is_match(target) {
        return Err(Error::MissingMarkers);
    }
    let ans = boundary.replace_all(target,|caps: &regex::Captures| {
        let indent = &caps[1];
        format!("{}{}{}{}{}",indent,&caps[2],format_symbols(symbols,indent),indent,&caps[3])
    });
    Ok(ans.into_owned())
}
