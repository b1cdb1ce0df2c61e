use crate::Script;

/// Errors surfaced by the conversion dispatcher.
///
/// Conversion itself never fails on content: characters outside a script's
/// inventory are copied through. The only hard failure is a request the
/// dispatcher has no route for.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("unsupported script pair: {from} -> {to}")]
    UnsupportedPair { from: Script, to: Script },
}

/// Errors raised while loading or saving configuration files.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}
