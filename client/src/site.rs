//! Site identity: base-URL resolution and social-preview metadata.
//!
//! DESIGN
//! ======
//! The server resolves [`SiteUrls`] from the environment once at startup
//! and hands the derived [`SiteMeta`] to SSR rendering as context, so the
//! shell receives metadata as explicit configuration instead of reading
//! the environment from inside components.

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

/// Site name used for the document title and social tags.
pub const SITE_TITLE: &str = "Shader Studio";

/// One-line description used for meta and social tags.
pub const SITE_DESCRIPTION: &str =
    "Create, edit, and organize fragment shaders in the browser.";

/// Absolute path of the social-preview image under the assets mount.
pub const OG_IMAGE_PATH: &str = "/assets/social-card.png";

/// Declared social-preview image width, in pixels.
pub const OG_IMAGE_WIDTH: u32 = 1200;

/// Declared social-preview image height, in pixels.
pub const OG_IMAGE_HEIGHT: u32 = 630;

/// Twitter card kind for the social preview.
pub const TWITTER_CARD: &str = "summary_large_image";

/// Fallback host for local development when nothing is configured.
const DEFAULT_SITE_URL: &str = "localhost:3000";

/// Deployment URL candidates, in resolution priority order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SiteUrls {
    /// Explicit public site URL (`SITE_URL`).
    pub site_url: Option<String>,
    /// Deployment-platform production URL (`DEPLOY_URL`).
    pub deploy_url: Option<String>,
    /// Deployment-platform preview URL (`DEPLOY_PREVIEW_URL`).
    pub deploy_preview_url: Option<String>,
}

impl SiteUrls {
    /// Read the three deployment URL variables. Called once at startup;
    /// blank values count as unset.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            site_url: env_non_empty("SITE_URL"),
            deploy_url: env_non_empty("DEPLOY_URL"),
            deploy_preview_url: env_non_empty("DEPLOY_PREVIEW_URL"),
        }
    }

    /// Resolve the canonical base URL.
    ///
    /// Candidates are consulted in priority order (explicit site, production
    /// deployment, preview deployment) with a `localhost:3000` fallback. The
    /// winner gains an `https://` prefix unless it already carries an
    /// explicit scheme. No trailing slash is appended.
    #[must_use]
    pub fn base_url(&self) -> String {
        let raw = [&self.site_url, &self.deploy_url, &self.deploy_preview_url]
            .into_iter()
            .find_map(|candidate| {
                candidate
                    .as_deref()
                    .map(str::trim)
                    .filter(|value| !value.is_empty())
            })
            .unwrap_or(DEFAULT_SITE_URL);
        ensure_scheme(raw)
    }
}

/// Prefix `https://` unless the value already declares `http://` or
/// `https://`.
fn ensure_scheme(raw: &str) -> String {
    if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_owned()
    } else {
        format!("https://{raw}")
    }
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

/// Resolved metadata descriptor handed to the SSR shell via context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteMeta {
    /// Scheme-normalized base URL without a trailing slash.
    pub base_url: String,
}

impl SiteMeta {
    /// Capture the resolved base URL from a set of deployment candidates.
    #[must_use]
    pub fn from_urls(urls: &SiteUrls) -> Self {
        Self {
            base_url: urls.base_url(),
        }
    }

    /// Canonical absolute URL of the site root, with a trailing slash.
    #[must_use]
    pub fn canonical(&self) -> String {
        format!("{}/", self.base_url)
    }

    /// Join an absolute-path asset reference onto the base URL.
    #[must_use]
    pub fn asset_url(&self, path: &str) -> String {
        let trimmed = path.trim_start_matches('/');
        format!("{}/{trimmed}", self.base_url)
    }

    /// Absolute URL of the social-preview image.
    #[must_use]
    pub fn og_image_url(&self) -> String {
        self.asset_url(OG_IMAGE_PATH)
    }
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self::from_urls(&SiteUrls::default())
    }
}
