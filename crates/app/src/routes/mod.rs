pub mod not_found;
pub mod portal;
pub mod signed_out;

use crate::auth::use_auth;
use dioxus::prelude::*;
use shared_types::{AppError, PortalSettings};
use shared_ui::Skeleton;

use not_found::NotFound;
use portal::UserDashboard;
use signed_out::SignedOut;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Portal {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Session gate in front of the portal shell.
///
/// Resolves the session user on the server, keeps it in `AuthState`, and
/// hands the shell its user and logout capability as props.
#[component]
fn Portal() -> Element {
    let mut auth = use_auth();
    let settings: PortalSettings = use_context();

    // `?` propagates suspension to the SuspenseBoundary in `App`.
    let mut resource = use_server_future(move || async move { server::api::get_session_user().await })?;
    let result = resource.read().as_ref().cloned();

    // Seed the auth provider once the session resolves (and again after a
    // resume restarts the lookup).
    use_effect(move || {
        if let Some(Ok(user)) = &*resource.read() {
            auth.adopt_session(user);
        }
    });

    if auth.is_signed_out() {
        return rsx! {
            SignedOut {
                portal_name: settings.branding.name.clone(),
                on_resume: move |_| {
                    auth.resume();
                    resource.restart();
                },
            }
        };
    }

    match result {
        Some(Ok(user)) => {
            rsx! {
                UserDashboard {
                    user,
                    settings,
                    on_logout: move |_| {
                        auth.logout();
                        spawn(async move {
                            if let Err(e) = server::api::end_session().await {
                                tracing::warn!(error = %e, "end_session failed");
                            }
                        });
                    },
                }
            }
        }
        Some(Err(e)) => {
            let message = AppError::friendly_message(&e.to_string());
            tracing::warn!(error = %e, "session lookup failed");
            rsx! {
                div { class: "portal-error",
                    p { "{message}" }
                }
            }
        }
        None => rsx! { PortalLoading {} },
    }
}

/// Placeholder shown while the settings or the session are still resolving.
#[component]
pub fn PortalLoading() -> Element {
    rsx! {
        div { class: "portal-loading",
            div { class: "portal-loading-body",
                Skeleton { lines: 3 }
                p { "Cargando..." }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_placeholder_renders_skeletons() {
        let html = dioxus_ssr::render_element(rsx! { PortalLoading {} });
        assert_eq!(html.matches("class=\"skeleton-line\"").count(), 3, "{html}");
        assert!(html.contains("Cargando..."));
    }
}
