//! Auth provider settings handed from the server to the hydrated client.
//!
//! The server renders these into `<meta>` tags in the SSR shell; the browser
//! reads them back at startup. Keeping the values out of the WASM bundle lets
//! one build target several provider projects.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const META_PROVIDER_URL: &str = "futurepath-auth-url";
pub const META_ANON_KEY: &str = "futurepath-auth-anon-key";
pub const META_SITE_URL: &str = "futurepath-site-url";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthConfig {
    /// Base URL of the GoTrue-compatible API, without trailing slash.
    pub provider_url: String,
    /// Public anon key sent as the `apikey` header.
    pub anon_key: String,
    /// Public origin of this site, without trailing slash.
    pub site_url: String,
}

impl AuthConfig {
    pub fn new(provider_url: &str, anon_key: &str, site_url: &str) -> Self {
        Self {
            provider_url: provider_url.trim().trim_end_matches('/').to_owned(),
            anon_key: anon_key.trim().to_owned(),
            site_url: site_url.trim().trim_end_matches('/').to_owned(),
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.provider_url.is_empty() && !self.anon_key.is_empty()
    }

    /// Target for the link in the confirmation email.
    pub fn email_redirect_to(&self) -> Option<String> {
        if self.site_url.is_empty() {
            None
        } else {
            Some(format!("{}/login", self.site_url))
        }
    }

    /// `(name, content)` pairs for the shell's `<meta>` tags.
    pub fn meta_entries(&self) -> [(&'static str, String); 3] {
        [
            (META_PROVIDER_URL, self.provider_url.clone()),
            (META_ANON_KEY, self.anon_key.clone()),
            (META_SITE_URL, self.site_url.clone()),
        ]
    }

    /// Rebuild from meta tag contents. `None` when the provider URL or key
    /// is missing.
    pub fn from_meta(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let config = Self::new(
            &lookup(META_PROVIDER_URL)?,
            &lookup(META_ANON_KEY)?,
            &lookup(META_SITE_URL).unwrap_or_default(),
        );
        config.is_configured().then_some(config)
    }

    /// Read the config the server rendered into the current document.
    pub fn from_document() -> Option<Self> {
        #[cfg(feature = "hydrate")]
        {
            let document = web_sys::window()?.document()?;
            let config = Self::from_meta(|name| {
                document
                    .query_selector(&format!("meta[name=\"{name}\"]"))
                    .ok()
                    .flatten()
                    .and_then(|el| el.get_attribute("content"))
            })?;
            if config.site_url.is_empty() {
                let origin = web_sys::window()?.location().origin().ok()?;
                return Some(Self::new(&config.provider_url, &config.anon_key, &origin));
            }
            Some(config)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }
}
