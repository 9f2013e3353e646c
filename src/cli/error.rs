use thiserror::Error;

#[derive(Debug, Error)]
pub enum DesignerError {
    #[error("failed to read or write '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid edit script YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("document has no screen '{0}'")]
    UnknownScreen(String),
}

impl DesignerError {
    pub fn io(path: &str, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_string(),
            source,
        }
    }
}
