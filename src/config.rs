//! Generator configuration.

use crate::builder::impl_builder;

/// Default required prefix for mutator method names.
pub const DEFAULT_PREFIX: &str = "set";

/// Default suffix appended to the owner name to form the builder name.
pub const DEFAULT_BUILDER_SUFFIX: &str = "Builder";

/// Options recognized by the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct GeneratorConfig {
    /// Literal, case-sensitive prefix a mutator name must start with
    /// (default: "set"). An empty prefix matches every name.
    pub prefix: String,

    /// Suffix appended to the owner type name (default: "Builder"). Must not
    /// be empty, or the builder would share the owner's name.
    pub builder_suffix: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.into(),
            builder_suffix: DEFAULT_BUILDER_SUFFIX.into(),
        }
    }
}

impl_builder!(GeneratorConfig, GeneratorConfigBuilder {
    optional {
        prefix: String,
        builder_suffix: String,
    }
    non_empty { builder_suffix }
});

impl From<&str> for GeneratorConfig {
    fn from(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BuilderError;

    #[test]
    fn defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.prefix, "set");
        assert_eq!(config.builder_suffix, "Builder");
    }

    #[test]
    fn builder_fills_defaults() {
        let config = GeneratorConfig::builder().prefix("with").build().unwrap();
        assert_eq!(config.prefix, "with");
        assert_eq!(config.builder_suffix, "Builder");
    }

    #[test]
    fn builder_overrides_suffix() {
        let config = GeneratorConfig::builder()
            .builder_suffix("Factory")
            .build()
            .unwrap();
        assert_eq!(config.prefix, "set");
        assert_eq!(config.builder_suffix, "Factory");
    }

    #[test]
    fn builder_rejects_empty_suffix() {
        let err = GeneratorConfig::builder().builder_suffix("").build().unwrap_err();
        assert!(matches!(
            err,
            BuilderError::EmptyField {
                builder: "GeneratorConfigBuilder",
                field: "builder_suffix",
            }
        ));
    }

    #[test]
    fn builder_allows_empty_prefix() {
        let config = GeneratorConfig::builder().prefix("").build().unwrap();
        assert_eq!(config.prefix, "");
    }

    #[test]
    fn from_prefix() {
        assert_eq!(GeneratorConfig::from("put").prefix, "put");
    }
}
