use serde::{Deserialize, Serialize};

/// Feature flags controlling optional presentation behavior.
///
/// Loaded from `config.toml` at server startup and exposed to clients
/// via a server function. A missing or partial `[features]` table keeps
/// the defaults below.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureFlags {
    /// Staggered fade-in of the dashboard sections on mount.
    #[serde(default = "default_true")]
    pub animations: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self { animations: true }
    }
}

fn default_true() -> bool {
    true
}

/// Branding shown in the header.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortalBranding {
    #[serde(default = "default_portal_name")]
    pub name: String,
    #[serde(default = "default_tagline")]
    pub tagline: String,
    #[serde(default = "default_locale")]
    pub locale: String,
}

impl Default for PortalBranding {
    fn default() -> Self {
        Self {
            name: default_portal_name(),
            tagline: default_tagline(),
            locale: default_locale(),
        }
    }
}

fn default_portal_name() -> String {
    "SIMAUD".to_string()
}

fn default_tagline() -> String {
    "Portal de Usuario".to_string()
}

fn default_locale() -> String {
    "es".to_string()
}

/// Identity handed out by the session endpoint.
///
/// There is no account store behind the portal; the signed-in user comes
/// from configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionConfig {
    #[serde(default = "default_session_name")]
    pub name: String,
    #[serde(default = "default_session_role")]
    pub role: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            name: default_session_name(),
            role: default_session_role(),
            email: None,
        }
    }
}

fn default_session_name() -> String {
    "Usuario".to_string()
}

fn default_session_role() -> String {
    "usuario".to_string()
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PortalConfig {
    #[serde(default)]
    pub portal: PortalBranding,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub features: FeatureFlags,
}

/// Client-facing subset of [`PortalConfig`]. The session block stays on the server.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PortalSettings {
    pub branding: PortalBranding,
    pub features: FeatureFlags,
}

impl From<&PortalConfig> for PortalSettings {
    fn from(config: &PortalConfig) -> Self {
        Self {
            branding: config.portal.clone(),
            features: config.features.clone(),
        }
    }
}
