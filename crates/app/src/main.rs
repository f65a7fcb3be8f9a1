use dioxus::prelude::*;
use shared_types::PortalSettings;

mod auth;
mod routes;
use auth::AuthState;
use routes::{PortalLoading, Route};

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        server::config::load_portal_config();
        server::health::record_start_time();

        let router = dioxus::server::router(App)
            .merge(server::health::health_router())
            .layer(tower_http::trace::TraceLayer::new_for_http())
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));

        tracing::info!(
            portal = %server::config::portal_config().portal.name,
            "portal server ready"
        );
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Fetch branding and feature flags once (defaults on error)
    let settings_resource =
        use_server_future(move || async move { server::api::get_portal_settings().await })?;

    let settings = settings_resource
        .read()
        .as_ref()
        .cloned()
        .unwrap_or(Ok(PortalSettings::default()))
        .unwrap_or_default();

    use_context_provider(|| settings);
    use_context_provider(AuthState::new);

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        SuspenseBoundary {
            fallback: |_| rsx! { PortalLoading {} },
            Router::<Route> {}
        }
    }
}
