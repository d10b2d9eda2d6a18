// hyphora-cli: shared utilities for the CLI tools.

use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use hyphora_dict::registry::{INDEX_FILE, load_file};
use hyphora_dict::{HyphenDict, Registry};

/// Environment variable naming the dictionary directory.
pub const DICT_PATH_ENV: &str = "HYPHORA_DICT_PATH";

/// Install a stderr tracing subscriber filtered by `RUST_LOG` (default
/// `warn`). Safe to call more than once.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Print an error message and exit with a failure status.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "-h" || a == "--help")
}

/// Split a `-d`/`--dict-dir PATH` pair out of the argument list.
pub fn parse_dict_dir(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut dir = None;
    let mut rest = Vec::new();
    let mut i = 0;
    while i < args.len() {
        if (args[i] == "-d" || args[i] == "--dict-dir") && i + 1 < args.len() {
            dir = Some(args[i + 1].clone());
            i += 2;
        } else {
            rest.push(args[i].clone());
            i += 1;
        }
    }
    (dir, rest)
}

/// Directories searched for the registry index, in order:
/// 1. the explicit `-d` argument
/// 2. `HYPHORA_DICT_PATH`
/// 3. `~/.hyphora/dicts`
/// 4. the current working directory
fn search_paths(dir: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(d) = dir {
        paths.push(PathBuf::from(d));
    }
    if let Ok(env_dir) = std::env::var(DICT_PATH_ENV) {
        paths.push(PathBuf::from(env_dir));
    }
    if let Some(home) = home_dir() {
        paths.push(home.join(".hyphora").join("dicts"));
    }
    paths.push(PathBuf::from("."));
    paths
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Load the registry from the first search path containing an index file.
pub fn load_registry(dir: Option<&str>) -> Result<Registry, String> {
    let paths = search_paths(dir);
    for path in &paths {
        if path.join(INDEX_FILE).is_file() {
            return Registry::load(path)
                .map_err(|e| format!("failed to load registry from {}: {e}", path.display()));
        }
    }
    Err(format!(
        "could not find {} in any of the search paths:\n{}",
        INDEX_FILE,
        paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Load one dictionary: from an explicit source file, or by locale from
/// the registry.
pub fn load_dictionary(
    dict_file: Option<&str>,
    dict_dir: Option<&str>,
    locale: &str,
) -> Result<Arc<HyphenDict>, String> {
    if let Some(file) = dict_file {
        return load_file(Path::new(file))
            .map(Arc::new)
            .map_err(|e| format!("failed to load {file}: {e}"));
    }
    let registry = load_registry(dict_dir)?;
    registry
        .get(locale)
        .ok_or_else(|| format!("no dictionary registered for locale {locale:?}"))
}
