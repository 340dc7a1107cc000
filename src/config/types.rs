use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub browse: BrowseConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
}

/// Remote content API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the content API (scheme + host, no trailing slash).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Resource path for the country-guide collection.
    #[serde(default = "default_countries_path")]
    pub countries_path: String,
    /// Resource path for the testimonial collection.
    #[serde(default = "default_testimonials_path")]
    pub testimonials_path: String,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            countries_path: default_countries_path(),
            testimonials_path: default_testimonials_path(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

/// Country-guide browser settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowseConfig {
    /// Records shown per page (default: 6).
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Minimum university count for the "High" facet bucket (default: 10).
    #[serde(default = "default_high_threshold")]
    pub high_threshold: u32,
    /// Minimum university count for the "Medium" facet bucket (default: 5).
    #[serde(default = "default_medium_threshold")]
    pub medium_threshold: u32,
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            high_threshold: default_high_threshold(),
            medium_threshold: default_medium_threshold(),
        }
    }
}

/// Testimonial carousel settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Seconds between automatic advances (default: 5).
    #[serde(default = "default_interval")]
    pub interval_seconds: u32,
    /// Seconds auto-rotation stays suppressed after manual navigation
    /// (default: 10).
    #[serde(default = "default_cooldown")]
    pub cooldown_seconds: u32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval_seconds: default_interval(),
            cooldown_seconds: default_cooldown(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.oecindia.com".to_string()
}

fn default_countries_path() -> String {
    "/academics/academics/countries/".to_string()
}

fn default_testimonials_path() -> String {
    "/testimonials/testimonials/".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_page_size() -> usize {
    6
}

fn default_high_threshold() -> u32 {
    10
}

fn default_medium_threshold() -> u32 {
    5
}

fn default_interval() -> u32 {
    5
}

fn default_cooldown() -> u32 {
    10
}
