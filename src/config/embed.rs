//! Public URL configuration for links and embed snippets

use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;
use crate::domain::conversation::FormLinks;

#[derive(Debug, Clone, Deserialize)]
pub struct EmbedConfig {
    /// Base URL that direct links, previews and iframes point at
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,
}

impl EmbedConfig {
    pub fn links(&self) -> FormLinks {
        FormLinks::new(self.public_base_url.clone())
    }

    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let url = self.public_base_url.as_str();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ValidationError::InvalidBaseUrl);
        }
        if *environment == Environment::Production && !url.starts_with("https://") {
            return Err(ValidationError::BaseUrlMustBeHttps);
        }
        Ok(())
    }
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            public_base_url: default_public_base_url(),
        }
    }
}

fn default_public_base_url() -> String {
    "https://forms.tid.com".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn embed(url: &str) -> EmbedConfig {
        EmbedConfig {
            public_base_url: url.to_string(),
        }
    }

    #[test]
    fn default_points_at_hosted_forms() {
        let config = EmbedConfig::default();
        assert_eq!(config.links().base_url(), "https://forms.tid.com");
        assert!(config.validate(&Environment::Production).is_ok());
    }

    #[test]
    fn rejects_non_http_urls() {
        assert!(matches!(
            embed("forms.example.com").validate(&Environment::Development),
            Err(ValidationError::InvalidBaseUrl)
        ));
    }

    #[test]
    fn plain_http_only_outside_production() {
        let config = embed("http://localhost:8080");
        assert!(config.validate(&Environment::Development).is_ok());
        assert!(matches!(
            config.validate(&Environment::Production),
            Err(ValidationError::BaseUrlMustBeHttps)
        ));
    }
}
