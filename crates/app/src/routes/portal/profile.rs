use dioxus::prelude::*;
use shared_ui::{Avatar, AvatarFallback, Card, CardContent, CardHeading};

use crate::auth::use_auth;

/// Alternate portal screen mounted in place of the dashboard content.
/// Reads the session from `AuthState`; takes no props.
#[component]
pub fn UserProfile() -> Element {
    let auth = use_auth();
    let user = auth.current_user.read().clone();

    rsx! {
        div { class: "portal-profile",
            Card {
                CardHeading {
                    title: "Perfil de Usuario".to_string(),
                    description: "Información de tu cuenta en el portal".to_string(),
                }
                CardContent {
                    match user {
                        Some(user) => rsx! {
                            div { class: "portal-profile-body",
                                Avatar {
                                    AvatarFallback { "{user.initials()}" }
                                }
                                dl { class: "portal-profile-fields",
                                    dt { "Nombre" }
                                    dd { "{user.name}" }
                                    dt { "Rol" }
                                    dd { "{user.role_label()}" }
                                    if let Some(email) = user.email.as_ref() {
                                        dt { "Correo" }
                                        dd { "{email}" }
                                    }
                                }
                            }
                        },
                        None => rsx! {
                            p { class: "portal-profile-empty", "No hay una sesión activa." }
                        },
                    }
                }
            }
        }
    }
}
