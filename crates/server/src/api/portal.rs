use dioxus::prelude::*;
use shared_types::{PortalSettings, PortalUser};

#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;

/// Branding and feature flags for the client. No auth required.
#[server]
pub async fn get_portal_settings() -> Result<PortalSettings, ServerFnError> {
    Ok(PortalSettings::from(crate::config::portal_config()))
}

/// The signed-in user. There is no account store behind the portal; the
/// identity comes from the `[session]` block of `config.toml`.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_session_user() -> Result<PortalUser, ServerFnError> {
    session_user(crate::config::portal_config()).map_err(|e| e.into_server_fn_error())
}

/// Acknowledge a logout. Nothing is stored server-side, so this only logs it.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn end_session() -> Result<(), ServerFnError> {
    tracing::info!("portal session ended");
    Ok(())
}

/// Build the session user from configuration. A blank name means no session.
#[cfg(feature = "server")]
pub fn session_user(config: &shared_types::PortalConfig) -> Result<PortalUser, shared_types::AppError> {
    let session = &config.session;
    if session.name.trim().is_empty() {
        return Err(shared_types::AppError::unauthorized(
            "No hay una sesión activa",
        ));
    }

    Ok(PortalUser {
        name: session.name.clone(),
        role: session.role.clone(),
        email: session.email.clone(),
    })
}
