//! Site configuration
//!
//! Deployment facts (banner, contact details, charity number) live in
//! `assets/site.json` and are embedded at compile time. The routing base path
//! is configured separately in `Dioxus.toml`.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::models::Glyph;
use crate::shared::errors::Result;
use crate::shared::logging;

const SITE_JSON: &str = include_str!("../assets/site.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub glyph: Glyph,
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub short_name: String,
    pub full_name: String,
    pub banner_url: String,
    pub banner_alt: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub charity_number: String,
    pub founded_year: u16,
    pub copyright_year: u16,
    pub social: Vec<SocialLink>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let social = [
            (Glyph::Facebook, "Facebook"),
            (Glyph::X, "X"),
            (Glyph::Instagram, "Instagram"),
        ]
        .into_iter()
        .map(|(glyph, label)| SocialLink {
            glyph,
            label: label.to_string(),
            href: "#".to_string(),
        })
        .collect();

        Self {
            short_name: "LAM Observers".to_string(),
            full_name: "London Advanced Motorists".to_string(),
            banner_url: "https://www.lam-iam.co.uk/index_htm_files/3819@2x.png".to_string(),
            banner_alt: "London Advanced Motorists Banner".to_string(),
            contact_email: "info@lam.org.uk".to_string(),
            contact_phone: "020 8XXX XXXX".to_string(),
            charity_number: "1043841".to_string(),
            founded_year: 1956,
            copyright_year: 2026,
            social,
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Embedded config, or defaults if it fails to parse
    pub fn load() -> Self {
        Self::from_json(SITE_JSON).unwrap_or_else(|e| {
            logging::log_config_fallback(&e.to_string());
            Self::default()
        })
    }
}

static SITE: Lazy<SiteConfig> = Lazy::new(SiteConfig::load);

pub fn site() -> &'static SiteConfig {
    &SITE
}
