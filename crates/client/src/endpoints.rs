//! Endpoint resolution: intent → backend resource URL.
//!
//! Every [`Intent`] resolves through an exhaustive match over URLs built once
//! at construction. Adding an `Intent` variant without a route here is a
//! compile error, not a silent fallback onto the default chat endpoint.

use url::Url;

use vanakkam_core::Intent;

use crate::config::{ClientConfig, ConfigError};

/// The backend's resource locators, one per skill plus the liveness resource.
#[derive(Debug, Clone)]
pub struct Endpoints {
    chat: Url,
    story: Url,
    culture: Url,
    grammar: Url,
    explain: Url,
    health: Url,
}

impl Endpoints {
    /// Build all locators from the configured base URL.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the base URL cannot carry path segments.
    /// [`ClientConfig::new`] rejects such URLs up front, so this only fails
    /// for hand-built configs that bypassed validation.
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let base = &config.base_url;
        Ok(Self {
            chat: join(base, "chat")?,
            story: join(base, "story")?,
            culture: join(base, "culture")?,
            grammar: join(base, "grammar")?,
            explain: join(base, "explain")?,
            health: join(base, "health")?,
        })
    }

    /// The locator handling the given intent.
    #[must_use]
    pub const fn url_for(&self, intent: Intent) -> &Url {
        match intent {
            Intent::Generate => &self.chat,
            Intent::Story => &self.story,
            Intent::Culture => &self.culture,
            Intent::Grammar => &self.grammar,
            Intent::Explain => &self.explain,
        }
    }

    /// The liveness resource.
    #[must_use]
    pub const fn health(&self) -> &Url {
        &self.health
    }
}

/// Append one path segment to the base URL, preserving any base path.
fn join(base: &Url, segment: &str) -> Result<Url, ConfigError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| {
            ConfigError::InvalidBaseUrl(
                base.to_string(),
                "URL cannot carry path segments".to_string(),
            )
        })?
        .pop_if_empty()
        .push(segment);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints(base: &str) -> Endpoints {
        let config =
            ClientConfig::new(base.parse().expect("valid URL")).expect("valid base URL");
        Endpoints::new(&config).expect("valid base URL")
    }

    #[test]
    fn test_every_intent_resolves_distinctly() {
        let endpoints = endpoints("http://localhost:8000");
        let all = [
            Intent::Generate,
            Intent::Story,
            Intent::Culture,
            Intent::Grammar,
            Intent::Explain,
        ];
        for (i, a) in all.iter().enumerate() {
            let url = endpoints.url_for(*a);
            assert!(!url.path().is_empty());
            for b in all.iter().skip(i + 1) {
                assert_ne!(url, endpoints.url_for(*b), "{a} and {b} share a locator");
            }
        }
    }

    #[test]
    fn test_default_intent_routes_to_chat() {
        let endpoints = endpoints("http://localhost:8000");
        assert_eq!(
            endpoints.url_for(Intent::Generate).as_str(),
            "http://localhost:8000/chat"
        );
    }

    #[test]
    fn test_base_path_is_preserved() {
        let endpoints = endpoints("https://vanakkam.example.com/api/v1");
        assert_eq!(
            endpoints.url_for(Intent::Story).as_str(),
            "https://vanakkam.example.com/api/v1/story"
        );
        assert_eq!(
            endpoints.health().as_str(),
            "https://vanakkam.example.com/api/v1/health"
        );
    }

    #[test]
    fn test_trailing_slash_does_not_double() {
        let endpoints = endpoints("http://localhost:8000/");
        assert_eq!(
            endpoints.url_for(Intent::Explain).as_str(),
            "http://localhost:8000/explain"
        );
    }
}
