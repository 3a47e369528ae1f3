pub mod resources;
pub mod specification;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::LoadError;

pub use resources::{ResourceEntry, ResourceIndex};
pub use specification::{Argument, ErrorSpec, HttpMethod, MethodGroup, Operation, ResourceSpecification};

/// Read a file and parse it into a generic JSON tree.
pub fn load_json(path: &Path) -> Result<serde_json::Value, LoadError> {
    log::debug!("loading {}", path.display());
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;
    from_json(path, &content)
}

/// Parse JSON text, attributing failures to `path`.
pub fn from_json(path: &Path, content: &str) -> Result<serde_json::Value, LoadError> {
    serde_json::from_str(content).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a file and view it as a typed document.
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let value = load_json(path)?;
    serde_json::from_value(value).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_not_found() {
        let err = load_json(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }

    #[test]
    fn test_malformed_json_names_the_file() {
        let err = from_json(Path::new("broken.json"), "{ \"apis\": [").unwrap_err();
        assert!(matches!(err, LoadError::Json { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_generic_tree_keeps_key_order() {
        let value = from_json(Path::new("x.json"), r#"{"zeta": 1, "alpha": [true, null], "mid": "s"}"#)
            .unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }
}
