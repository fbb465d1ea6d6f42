//! File system cache for raw ESPN payloads.

use dirs;
use std::{
    fs,
    io::{Read, Write},
    path::{Path, PathBuf},
};

const CACHE_DIR_NAME: &str = "espn-fba";

/// `~/.cache/espn-fba`, falling back to `./.cache/espn-fba` without a home dir.
pub fn cache_root() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join(CACHE_DIR_NAME)
}

/// Path: ~/.cache/espn-fba/players_{season}_{league_id}.json
pub fn players_cache_path(season: u16, league_id: u32) -> PathBuf {
    cache_root().join(format!("players_{}_{}.json", season, league_id))
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file, creating parent directories
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_players_cache_path() {
        let path = players_cache_path(2020, 368749);
        let path_str = path.to_string_lossy();

        assert!(path_str.contains("espn-fba"));
        assert!(path_str.ends_with("players_2020_368749.json"));
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("payload.json");

        write_string(&path, "{\"players\":[]}").unwrap();
        assert_eq!(
            try_read_to_string(&path).as_deref(),
            Some("{\"players\":[]}")
        );
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempdir().unwrap();
        assert!(try_read_to_string(&dir.path().join("missing.json")).is_none());
    }
}
