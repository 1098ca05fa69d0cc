//! Directory API credential loading

use crate::{Error, Result};
use std::fs;
use std::path::Path;
use tracing::warn;

/// Read the API key from `path`, trimming surrounding whitespace
///
/// An empty key is returned as-is: every lookup will then fail and fall
/// back, which is logged once here.
pub fn load_api_key(path: &Path) -> Result<String> {
    let raw = fs::read_to_string(path).map_err(|e| {
        Error::io(format!("Failed to read API key from {}", path.display()), e)
    })?;

    let key = raw.trim().to_string();
    if key.is_empty() {
        warn!(
            "API key file {} is empty; legislator lookups will use the fallback message",
            path.display()
        );
    }
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_api_key_trims() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("secret.key");
        fs::write(&path, "  AIzaSyExample123\n").unwrap();

        assert_eq!(load_api_key(&path).unwrap(), "AIzaSyExample123");
    }

    #[test]
    fn test_load_empty_api_key() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("secret.key");
        fs::write(&path, "\n").unwrap();

        assert_eq!(load_api_key(&path).unwrap(), "");
    }

    #[test]
    fn test_load_missing_api_key() {
        let dir = TempDir::new().unwrap();
        let result = load_api_key(&dir.path().join("absent.key"));
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
