//! Configuration management

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Embedded web view configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    /// Page loaded at startup
    #[serde(default = "default_url")]
    pub url: String,
    /// Hosts a clicked link may open inside the embedded view
    #[serde(default = "default_allowed_hosts")]
    pub allowed_hosts: Vec<String>,
    /// Enable the web inspector
    #[serde(default)]
    pub devtools: bool,
}

fn default_url() -> String {
    "https://www.messenger.com".to_string()
}

fn default_allowed_hosts() -> Vec<String> {
    [
        "www.messenger.com",
        "messenger.com",
        "www.facebook.com",
        "facebook.com",
        "static.xx.fbcdn.net",
        "scontent.xx.fbcdn.net",
    ]
    .iter()
    .map(|host| host.to_string())
    .collect()
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            allowed_hosts: default_allowed_hosts(),
            devtools: false,
        }
    }
}

/// Main window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_window_title")]
    pub title: String,
    /// Logical width
    #[serde(default = "default_width")]
    pub width: f64,
    /// Logical height
    #[serde(default = "default_height")]
    pub height: f64,
}

fn default_window_title() -> String {
    "Messenger".to_string()
}
fn default_width() -> f64 {
    980.0
}
fn default_height() -> f64 {
    700.0
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: default_window_title(),
            width: default_width(),
            height: default_height(),
        }
    }
}

/// Where unread counts come from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnreadSource {
    /// Injected title observer pushes updates
    #[default]
    Observer,
    /// Host polls the page title on a timer
    Poll,
}

/// Unread detection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnreadConfig {
    #[serde(default)]
    pub source: UnreadSource,
    /// Poll interval in milliseconds (poll source only)
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,
}

fn default_poll_interval() -> u64 {
    5000
}

impl Default for UnreadConfig {
    fn default() -> Self {
        Self {
            source: UnreadSource::default(),
            poll_interval_ms: default_poll_interval(),
        }
    }
}

/// Status-bar item configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusConfig {
    /// Text shown in the menu bar, followed by the count when non-zero
    #[serde(default = "default_base_icon")]
    pub base_icon: String,
}

fn default_base_icon() -> String {
    "💬".to_string()
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            base_icon: default_base_icon(),
        }
    }
}

/// Local notification configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_notification_title")]
    pub title: String,
    /// Body text; `{count}` is replaced with the unread count
    #[serde(default = "default_body_template")]
    pub body_template: String,
}

fn default_true() -> bool {
    true
}
fn default_notification_title() -> String {
    "Messenger".to_string()
}
fn default_body_template() -> String {
    "You have {count} unread messages.".to_string()
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            title: default_notification_title(),
            body_template: default_body_template(),
        }
    }
}

/// Application-level behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Keep a Dock icon; `false` runs as a menu-bar-only accessory app
    #[serde(default = "default_true")]
    pub show_in_dock: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { show_in_dock: true }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub web: WebConfig,
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub unread: UnreadConfig,
    #[serde(default)]
    pub status: StatusConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub app: AppConfig,
}

impl Config {
    /// Load configuration from the platform config directory
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, falling back to defaults when absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the rest of the app cannot work with
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.web.url)
            .with_context(|| format!("Invalid web.url: {}", self.web.url))?;
        if self.unread.poll_interval_ms == 0 {
            anyhow::bail!("unread.poll_interval_ms must be greater than zero");
        }
        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "messengerbar", "MessengerBar")
            .context("Failed to determine config directory")?;
        Ok(proj_dirs.config_dir().join("config.toml"))
    }

    /// Get the default configuration embedded in the binary
    pub fn default_config_str() -> &'static str {
        include_str!("../../config/default.toml")
    }
}
