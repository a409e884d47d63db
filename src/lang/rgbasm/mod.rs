//! # RGBASM grammar access
//!
//! The RGBASM parser is generated and compiled upstream; this module only finds
//! the compiled artifact and produces a language handle from it.  The factory
//! symbol follows the tree-sitter convention, `tree_sitter_<grammar>()`.
//!
//! Two providers are defined.  `StaticProvider` is for embedders that link the
//! artifact into their own binary and can hand us the factory directly.
//! `LibraryProvider` is for the usual distribution, a shared library
//! (`librgbasm.so` and friends) discovered on the grammar search paths.

pub mod hardware;

use std::path::{Path,PathBuf};
use thiserror::Error;
use log::{info,warn};

use super::GrammarProvider;

/// name of the main grammar artifact
pub const MAIN_GRAMMAR: &str = "rgbasm";
/// name of the identifier classification sub-grammar
pub const IDENTIFIER_GRAMMAR: &str = "rgbasm_identifier";

#[derive(Error,Debug)]
pub enum Error {
    #[error("grammar library not found: {0}")]
    NotFound(String),
    #[error("could not load grammar library: {0}")]
    Library(String),
    #[error("grammar library missing factory symbol: {0}")]
    MissingSymbol(String)
}

/// Provider for an artifact linked into the embedding program.
/// The embedder hands in the factory at construction time.
pub struct StaticProvider {
    name: String,
    artifact: tree_sitter_language::LanguageFn
}

impl StaticProvider {
    pub fn new(name: &str,artifact: tree_sitter_language::LanguageFn) -> Self {
        Self { name: name.to_string(), artifact }
    }
}

impl GrammarProvider for StaticProvider {
    fn name(&self) -> &str {
        &self.name
    }
    fn load(&self) -> Option<tree_sitter::Language> {
        Some(tree_sitter::Language::new(self.artifact))
    }
}

/// Provider that loads the factory symbol from a compiled shared library,
/// either at an explicit path or by searching the grammar search paths.
pub struct LibraryProvider {
    name: String,
    path: Option<PathBuf>
}

impl LibraryProvider {
    /// Search the grammar search paths for the library.
    pub fn new(name: &str) -> Self {
        Self { name: name.to_string(), path: None }
    }
    /// Load the library at an explicit path, skipping the search.
    pub fn with_path(name: &str,path: &Path) -> Self {
        Self { name: name.to_string(), path: Some(path.to_path_buf()) }
    }
    fn resolve(&self) -> Result<PathBuf,Error> {
        if let Some(path) = &self.path {
            return Ok(path.clone());
        }
        Self::search(&grammar_search_paths(),&self.name)
    }
    fn search(dirs: &[PathBuf],name: &str) -> Result<PathBuf,Error> {
        let lib_name = library_file_name(name);
        for dir in dirs {
            let candidate = dir.join(&lib_name);
            if candidate.exists() {
                info!("found grammar library {}",candidate.display());
                return Ok(candidate);
            }
        }
        Err(Error::NotFound(name.to_string()))
    }
    fn load_library(&self) -> Result<tree_sitter::Language,Error> {
        let path = self.resolve()?;
        let symbol_name = format!("tree_sitter_{}",self.name.replace('-',"_"));
        let library = unsafe { libloading::Library::new(&path) }
            .map_err(|e| Error::Library(format!("{}: {}",path.display(),e)))?;
        let factory = {
            let symbol: libloading::Symbol<unsafe extern "C" fn() -> *const ()> =
                unsafe { library.get(symbol_name.as_bytes()) }
                    .map_err(|_| Error::MissingSymbol(symbol_name.clone()))?;
            *symbol
        };
        // the factory result must be non-null before we wrap it in a handle
        if unsafe { factory() }.is_null() {
            return Err(Error::Library(format!("{} returned a null language",symbol_name)));
        }
        // the runtime keeps pointers into the library, it must stay loaded
        std::mem::forget(library);
        let artifact = unsafe { tree_sitter_language::LanguageFn::from_raw(factory) };
        Ok(tree_sitter::Language::new(artifact))
    }
}

impl GrammarProvider for LibraryProvider {
    fn name(&self) -> &str {
        &self.name
    }
    fn load(&self) -> Option<tree_sitter::Language> {
        match self.load_library() {
            Ok(lang) => Some(lang),
            Err(e) => {
                warn!("{}",e);
                None
            }
        }
    }
}

/// Platform-specific file name of a compiled grammar library.
pub fn library_file_name(name: &str) -> String {
    let stem = name.replace('-',"_");
    #[cfg(target_os = "macos")]
    {
        format!("lib{}.dylib",stem)
    }
    #[cfg(target_os = "windows")]
    {
        format!("{}.dll",stem)
    }
    #[cfg(not(any(target_os = "macos",target_os = "windows")))]
    {
        format!("lib{}.so",stem)
    }
}

/// Directories searched for compiled grammar libraries, in order:
/// `GBKIT_GRAMMAR_PATH` entries, `./grammars`, then the platform data
/// directory.
pub fn grammar_search_paths() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Some(var) = std::env::var_os("GBKIT_GRAMMAR_PATH") {
        for path in std::env::split_paths(&var) {
            dirs.push(path);
        }
    }
    dirs.push(PathBuf::from("grammars"));
    if let Some(data) = data_local_dir() {
        dirs.push(data.join("gbkit").join("grammars"));
    }
    dirs
}

/// Platform-specific local data directory.
fn data_local_dir() -> Option<PathBuf> {
    #[cfg(unix)]
    {
        std::env::var_os("XDG_DATA_HOME")
            .map(PathBuf::from)
            .or_else(|| {
                std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".local").join("share"))
            })
    }
    #[cfg(windows)]
    {
        std::env::var_os("LOCALAPPDATA").map(PathBuf::from)
    }
    #[cfg(not(any(unix,windows)))]
    {
        None
    }
}
