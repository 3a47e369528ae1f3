use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum AssembleError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("malformed input in resource #{index} ({field}): {reason}")]
    MalformedInput {
        index: usize,
        field: &'static str,
        reason: String,
    },

    #[error("no specification file for resource `{resource}` (resource #{index})")]
    MissingSpecification { resource: String, index: usize },

    #[error("unsupported HTTP method `{method}` for {path} in {}", file.display())]
    UnsupportedMethod {
        method: String,
        path: String,
        file: PathBuf,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },

    #[error("specification entries must be all `path` or all `name=path`")]
    MixedSpecifications,
}
