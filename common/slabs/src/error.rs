use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum SlabError {
    #[error("[S101] Failed to read slab config at '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("[S102] Failed to parse slab config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A config field parsed, but holds a value the resolver can't use.
    #[error("[S103] Invalid value for slab config field '{field}': {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("[S104] Unknown placement mode '{0}', expected 'auto' or 'vanilla'.")]
    UnknownMode(String),
}
