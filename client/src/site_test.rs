#![cfg(not(feature = "hydrate"))]

use super::*;

fn urls(
    site_url: Option<&str>,
    deploy_url: Option<&str>,
    deploy_preview_url: Option<&str>,
) -> SiteUrls {
    SiteUrls {
        site_url: site_url.map(str::to_owned),
        deploy_url: deploy_url.map(str::to_owned),
        deploy_preview_url: deploy_preview_url.map(str::to_owned),
    }
}

// =============================================================================
// BASE URL RESOLUTION
// =============================================================================

#[test]
fn base_url_defaults_to_localhost() {
    assert_eq!(SiteUrls::default().base_url(), "https://localhost:3000");
}

#[test]
fn base_url_prefers_explicit_site_url() {
    let candidates = urls(
        Some("studio.example"),
        Some("prod.example"),
        Some("preview.example"),
    );
    assert_eq!(candidates.base_url(), "https://studio.example");
}

#[test]
fn base_url_falls_back_to_production_deploy() {
    let candidates = urls(None, Some("prod.example"), Some("preview.example"));
    assert_eq!(candidates.base_url(), "https://prod.example");
}

#[test]
fn base_url_falls_back_to_preview_deploy() {
    let candidates = urls(None, None, Some("preview.example"));
    assert_eq!(candidates.base_url(), "https://preview.example");
}

#[test]
fn base_url_keeps_existing_https_scheme() {
    let candidates = urls(Some("https://studio.example"), None, None);
    assert_eq!(candidates.base_url(), "https://studio.example");
}

#[test]
fn base_url_keeps_existing_http_scheme() {
    let candidates = urls(Some("http://localhost:8080"), None, None);
    assert_eq!(candidates.base_url(), "http://localhost:8080");
}

#[test]
fn base_url_skips_blank_candidates() {
    let candidates = urls(Some("   "), Some("prod.example"), None);
    assert_eq!(candidates.base_url(), "https://prod.example");
}

#[test]
fn base_url_trims_surrounding_whitespace() {
    let candidates = urls(Some("  studio.example  "), None, None);
    assert_eq!(candidates.base_url(), "https://studio.example");
}

#[test]
fn base_url_has_no_trailing_slash() {
    let candidates = urls(Some("studio.example"), None, None);
    assert!(!candidates.base_url().ends_with('/'));
}

// =============================================================================
// ENVIRONMENT CAPTURE
// =============================================================================

/// Remove every deployment URL variable.
///
/// # Safety
///
/// Mutating process-wide env vars is unsafe in multi-threaded test runs.
/// Only this single test touches these variables, and it runs its phases
/// sequentially, so no other test observes the mutation.
fn clear_site_env() {
    unsafe {
        std::env::remove_var("SITE_URL");
        std::env::remove_var("DEPLOY_URL");
        std::env::remove_var("DEPLOY_PREVIEW_URL");
    }
}

#[test]
fn from_env_resolves_in_priority_order() {
    clear_site_env();
    assert_eq!(SiteUrls::from_env(), SiteUrls::default());
    assert_eq!(SiteUrls::from_env().base_url(), "https://localhost:3000");

    unsafe {
        std::env::set_var("DEPLOY_PREVIEW_URL", "preview.example");
    }
    assert_eq!(SiteUrls::from_env().base_url(), "https://preview.example");

    unsafe {
        std::env::set_var("DEPLOY_URL", "prod.example");
    }
    assert_eq!(SiteUrls::from_env().base_url(), "https://prod.example");

    unsafe {
        std::env::set_var("SITE_URL", "studio.example");
    }
    assert_eq!(SiteUrls::from_env().base_url(), "https://studio.example");

    unsafe {
        std::env::set_var("SITE_URL", "   ");
    }
    let blank_site = SiteUrls::from_env();
    assert_eq!(blank_site.site_url, None);
    assert_eq!(blank_site.base_url(), "https://prod.example");

    clear_site_env();
}

// =============================================================================
// SITE METADATA
// =============================================================================

#[test]
fn canonical_appends_trailing_slash() {
    let meta = SiteMeta::from_urls(&urls(Some("example.com"), None, None));
    assert_eq!(meta.canonical(), "https://example.com/");
}

#[test]
fn canonical_defaults_to_localhost_root() {
    assert_eq!(SiteMeta::default().canonical(), "https://localhost:3000/");
}

#[test]
fn asset_url_joins_absolute_paths() {
    let meta = SiteMeta::from_urls(&urls(Some("example.com"), None, None));
    assert_eq!(
        meta.asset_url("/assets/social-card.png"),
        "https://example.com/assets/social-card.png"
    );
    assert_eq!(
        meta.asset_url("assets/favicon.svg"),
        "https://example.com/assets/favicon.svg"
    );
}

#[test]
fn og_image_url_uses_declared_path() {
    let meta = SiteMeta::from_urls(&urls(Some("example.com"), None, None));
    assert_eq!(
        meta.og_image_url(),
        "https://example.com/assets/social-card.png"
    );
    assert_eq!(OG_IMAGE_WIDTH, 1200);
    assert_eq!(OG_IMAGE_HEIGHT, 630);
}
