use dioxus::prelude::*;
use shared_ui::{Button, ButtonVariant, Card, CardContent};

/// Shown after "Cerrar Sesión" until the user starts a new session.
#[component]
pub fn SignedOut(portal_name: String, on_resume: EventHandler<()>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./signed_out.css") }

        div { class: "signed-out-page",
            Card { class: "signed-out-card",
                CardContent {
                    h1 { class: "signed-out-brand", "{portal_name}" }
                    p { class: "signed-out-message", "Has cerrado sesión correctamente." }
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| on_resume.call(()),
                        "Iniciar sesión de nuevo"
                    }
                }
            }
        }
    }
}
