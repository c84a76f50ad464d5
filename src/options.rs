//! Per-dropzone options and their resolution into validated settings.

use serde::Deserialize;
use std::fmt;

use crate::config::PageConfig;
use crate::errors::{ConfigurationError, DropzoneError};

/// Widget flavor requested at initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropzoneType {
    /// Full drag and drop handling on the bound element
    Standard,
    /// Accepted, currently inert
    Wrapper,
}

impl DropzoneType {
    /// Maps a type identifier sent by the page onto a variant.
    pub fn from_identifier(identifier: &str, config: &PageConfig) -> Result<Self, DropzoneError> {
        if identifier == config.standard_type {
            Ok(DropzoneType::Standard)
        } else if identifier == config.wrapper_type {
            Ok(DropzoneType::Wrapper)
        } else {
            Err(DropzoneError::UnsupportedType(identifier.to_string()))
        }
    }

    pub fn identifier<'a>(&self, config: &'a PageConfig) -> &'a str {
        match self {
            DropzoneType::Standard => &config.standard_type,
            DropzoneType::Wrapper => &config.wrapper_type,
        }
    }
}

impl fmt::Display for DropzoneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropzoneType::Standard => write!(f, "Standard"),
            DropzoneType::Wrapper => write!(f, "Wrapper"),
        }
    }
}

/// Options as supplied by the page. Unset fields take their defaults.
///
/// ```rust
/// use dropzone::options::DropzoneOptions;
/// let opts = DropzoneOptions::from_json(r#"{"id": "drop1", "registeredSignals": ["fileDropped"]}"#).unwrap();
/// assert_eq!(opts.id.as_deref(), Some("drop1"));
/// assert!(!opts.darkened_background);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DropzoneOptions {
    pub id: Option<String>,
    pub darkened_background: bool,
    pub registered_signals: Vec<String>,
}

impl DropzoneOptions {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn darkened_background(mut self, on: bool) -> Self {
        self.darkened_background = on;
        self
    }

    pub fn signals<I, S>(mut self, signals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.registered_signals = signals.into_iter().map(Into::into).collect();
        self
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        serde_json::from_str(json).map_err(|e| ConfigurationError::InvalidOptions(e.to_string()))
    }
}

/// Validated options of one dropzone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropzoneSettings {
    pub id: String,
    pub darkened_background: bool,
    pub registered_signals: Vec<String>,
}

/// Validates `options` and resolves `identifier`. The id is checked first,
/// so a missing id is reported whatever the type.
pub fn resolve(
    identifier: &str,
    options: DropzoneOptions,
    config: &PageConfig,
) -> Result<(DropzoneType, DropzoneSettings), DropzoneError> {
    let id = match options.id {
        None => return Err(ConfigurationError::MissingId.into()),
        Some(id) if id.is_empty() => return Err(ConfigurationError::EmptyId.into()),
        Some(id) => id,
    };
    let kind = DropzoneType::from_identifier(identifier, config)?;

    Ok((
        kind,
        DropzoneSettings {
            id,
            darkened_background: options.darkened_background,
            registered_signals: options.registered_signals,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_STANDARD_TYPE, DEFAULT_WRAPPER_TYPE};

    fn cfg() -> PageConfig {
        PageConfig::default()
    }

    #[test]
    fn identifiers_map_to_variants() {
        let c = cfg();
        assert_eq!(DropzoneType::from_identifier(DEFAULT_STANDARD_TYPE, &c).unwrap(), DropzoneType::Standard);
        assert_eq!(DropzoneType::from_identifier(DEFAULT_WRAPPER_TYPE, &c).unwrap(), DropzoneType::Wrapper);
        assert_eq!(DropzoneType::Standard.identifier(&c), DEFAULT_STANDARD_TYPE);
        assert!(DropzoneType::from_identifier("ILIAS\\UI\\Component\\Dropzone\\Standard", &c).is_err());
    }

    #[test]
    fn json_defaults_and_camel_case() {
        let o = DropzoneOptions::from_json(r#"{"id": "z", "darkenedBackground": true}"#).unwrap();
        assert_eq!(o, DropzoneOptions::new("z").darkened_background(true));

        let o = DropzoneOptions::from_json("{}").unwrap();
        assert_eq!(o.id, None);
        assert!(o.registered_signals.is_empty());
    }

    #[test]
    fn json_errors_are_configuration_errors() {
        let err = DropzoneOptions::from_json(r#"{"id": 5}"#).unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidOptions(_)));
    }

    #[test]
    fn resolve_keeps_caller_fields() {
        let opts = DropzoneOptions::new("drop1").darkened_background(true).signals(["a", "b"]);
        let (kind, settings) = resolve(DEFAULT_STANDARD_TYPE, opts, &cfg()).unwrap();
        assert_eq!(kind, DropzoneType::Standard);
        assert_eq!(settings.id, "drop1");
        assert!(settings.darkened_background);
        assert_eq!(settings.registered_signals, vec!["a", "b"]);
    }

    #[test]
    fn missing_id_wins_over_unknown_type() {
        for t in [DEFAULT_STANDARD_TYPE, DEFAULT_WRAPPER_TYPE, "bogus"] {
            let err = resolve(t, DropzoneOptions::default(), &cfg()).unwrap_err();
            assert_eq!(err, DropzoneError::Configuration(ConfigurationError::MissingId));
        }
    }

    #[test]
    fn empty_id_is_rejected() {
        let err = resolve(DEFAULT_STANDARD_TYPE, DropzoneOptions::new(""), &cfg()).unwrap_err();
        assert_eq!(err, DropzoneError::Configuration(ConfigurationError::EmptyId));
    }

    #[test]
    fn blank_id_is_passed_through() {
        let (kind, settings) = resolve(DEFAULT_WRAPPER_TYPE, DropzoneOptions::new(" "), &cfg()).unwrap();
        assert_eq!(kind, DropzoneType::Wrapper);
        assert_eq!(settings.id, " ");
    }

    #[test]
    fn unknown_type_with_id() {
        let err = resolve("bogus", DropzoneOptions::new("z"), &cfg()).unwrap_err();
        assert_eq!(err, DropzoneError::UnsupportedType("bogus".into()));
    }
}
