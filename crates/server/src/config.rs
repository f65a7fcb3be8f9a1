use shared_types::{AppError, PortalConfig};
use std::path::Path;
use std::sync::OnceLock;

static CONFIG: OnceLock<PortalConfig> = OnceLock::new();
static DEFAULT: OnceLock<PortalConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
/// Overridable with the `PORTAL_CONFIG` environment variable.
const CONFIG_PATH: &str = "config.toml";

/// Parse the contents of a portal config file.
pub fn parse_portal_config(contents: &str) -> Result<PortalConfig, AppError> {
    toml::from_str(contents)
        .map_err(|e| AppError::bad_request(format!("invalid portal config: {e}")))
}

/// Read a config file, falling back to defaults when it is missing or invalid.
pub fn read_portal_config(path: &Path) -> PortalConfig {
    match std::fs::read_to_string(path) {
        Ok(contents) => match parse_portal_config(&contents) {
            Ok(config) => {
                tracing::info!(
                    path = %path.display(),
                    portal = %config.portal.name,
                    features = ?config.features,
                    "loaded portal config"
                );
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "using default portal config");
                PortalConfig::default()
            }
        },
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "portal config not found, using defaults");
            PortalConfig::default()
        }
    }
}

/// Load the portal config into the global `OnceLock`.
/// Safe to call multiple times; only the first call has effect.
pub fn load_portal_config() {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();
        let path = std::env::var("PORTAL_CONFIG").unwrap_or_else(|_| CONFIG_PATH.to_string());
        read_portal_config(Path::new(&path))
    });
}

/// The loaded config, or defaults if `load_portal_config()` hasn't run.
pub fn portal_config() -> &'static PortalConfig {
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(PortalConfig::default))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::AppErrorKind;

    fn temp_config(tag: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "portal-config-{tag}-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn parse_rejects_malformed_toml() {
        let err = parse_portal_config("[portal\nname = ").unwrap_err();
        assert_eq!(err.kind, AppErrorKind::BadRequest);
        assert!(err.message.starts_with("invalid portal config"));
    }

    #[test]
    fn parse_rejects_wrong_types() {
        let err = parse_portal_config("[features]\nanimations = \"yes\"").unwrap_err();
        assert_eq!(err.kind, AppErrorKind::BadRequest);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = read_portal_config(Path::new("/definitely/not/here/config.toml"));
        assert_eq!(config, PortalConfig::default());
    }

    #[test]
    fn reads_file_from_disk() {
        let path = temp_config("ok", "[portal]\nname = \"Portal QA\"\n");
        let config = read_portal_config(&path);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.portal.name, "Portal QA");
        assert_eq!(config.portal.tagline, "Portal de Usuario");
    }

    #[test]
    fn invalid_file_falls_back_to_defaults() {
        let path = temp_config("bad", "not = [valid");
        let config = read_portal_config(&path);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config, PortalConfig::default());
    }

    #[test]
    fn unloaded_config_reads_as_defaults() {
        // Nothing in this test binary calls load_portal_config.
        assert_eq!(portal_config(), &PortalConfig::default());
    }
}
