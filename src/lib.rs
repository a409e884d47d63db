//! # `gbkit` main library
//!
//! This library verifies and maintains the compiled tree-sitter grammar artifacts
//! for Game Boy assembly (RGBASM, the assembler dialect of the RGBDS toolchain).
//!
//! ## Architecture
//!
//! Grammar operations are built around one trait object:
//! * `lang::GrammarProvider` hands out an opaque language handle for a compiled
//!   grammar artifact
//!
//! Providers are injected wherever a handle is needed; nothing relies on a
//! process-wide loader.  Two providers are supplied:
//! * `lang::rgbasm::StaticProvider` wraps an artifact linked into the program
//! * `lang::rgbasm::LibraryProvider` loads an artifact from a shared library
//!
//! ## Grammar Artifacts
//!
//! The grammar itself is generated upstream by the tree-sitter toolchain, and that
//! is where the heavy lifting lives: rule precedence, conflict resolution, and the
//! external scanner that handles RGBASM's context-sensitive tokens (mixed numeric
//! literal bases, string interpolation, line continuations).  As of this writing
//! the distribution carries two artifacts:
//! * `rgbasm` parses assembly source
//! * `rgbasm_identifier` classifies identifiers
//!
//! `gbkit` treats both as black boxes.  It locates an artifact, loads it, verifies
//! the handle, and reports handle metadata.  A failed load is treated as a
//! packaging defect, there is no retry.
//!
//! ## Hardware Symbols
//!
//! The grammar distribution tracks the register names declared in gbdev's
//! `hardware.inc`.  The `lang::rgbasm::hardware` module regenerates that list from
//! a `hardware.inc` text and splices it into a support file between
//! script-generated markers.

pub mod lang;
pub mod commands;

type DYNERR = Box<dyn std::error::Error>;
type STDRESULT = Result<(),Box<dyn std::error::Error>>;
