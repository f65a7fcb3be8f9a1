use dioxus::prelude::*;

/// White panel with a soft border, the base surface of the portal.
///
/// With `hover` the panel lifts its shadow under the pointer, which the
/// dashboard uses for stat tiles.
#[component]
pub fn Card(
    #[props(default)] hover: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "card", None, false),
        Attribute::new("data-hover", if hover { "true" } else { "false" }, None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            {children}
        }
    }
}

/// Top strip of a Card, separated from the body by a rule.
#[component]
pub fn CardHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card-header", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

/// Panel heading, rendered as an `h3`.
#[component]
pub fn CardTitle(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card-title", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        h3 {
            ..merged,
            {children}
        }
    }
}

/// Muted line under a CardTitle.
#[component]
pub fn CardDescription(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card-description", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        p {
            ..merged,
            {children}
        }
    }
}

/// Right-aligned slot in a CardHeader, typically a button.
#[component]
pub fn CardAction(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card-action", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

/// Padded body of a Card. Tables go directly in the Card instead.
#[component]
pub fn CardContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card-content", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

/// Header with a title, an optional description and an optional action.
#[component]
pub fn CardHeading(
    title: String,
    #[props(default)] description: Option<String>,
    #[props(default)] action: Option<Element>,
) -> Element {
    rsx! {
        CardHeader {
            div {
                CardTitle { "{title}" }
                if let Some(description) = description {
                    CardDescription { "{description}" }
                }
            }
            if let Some(action) = action {
                CardAction { {action} }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_flag_is_rendered() {
        let html = dioxus_ssr::render_element(rsx! {
            Card { hover: true, "x" }
        });
        assert!(html.contains("data-hover=\"true\""), "{html}");

        let html = dioxus_ssr::render_element(rsx! {
            Card { "x" }
        });
        assert!(html.contains("data-hover=\"false\""), "{html}");
    }

    #[test]
    fn heading_renders_title_description_and_action() {
        let html = dioxus_ssr::render_element(rsx! {
            Card {
                CardHeading {
                    title: "Mis Contratos".to_string(),
                    description: "Gestiona y revisa tus contratos actuales".to_string(),
                    action: rsx! { button { "Nuevo Contrato" } },
                }
            }
        });
        let title = html.find(">Mis Contratos</h3>").unwrap();
        let description = html.find("Gestiona y revisa").unwrap();
        let action = html.find("card-action").unwrap();
        assert!(title < description && description < action, "{html}");
        assert!(html.contains("Nuevo Contrato"));
    }

    #[test]
    fn heading_without_extras_has_only_the_title() {
        let html = dioxus_ssr::render_element(rsx! {
            CardHeading { title: "Acciones Rápidas".to_string() }
        });
        assert!(html.contains(">Acciones Rápidas</h3>"), "{html}");
        assert!(!html.contains("card-description"), "{html}");
        assert!(!html.contains("card-action"), "{html}");
    }
}
