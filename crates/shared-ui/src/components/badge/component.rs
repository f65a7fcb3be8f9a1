use dioxus::prelude::*;

/// Visual variant for badges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    /// Rounded status pill; color comes from the caller's `class`.
    Pill,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "primary",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Outline => "outline",
            BadgeVariant::Pill => "pill",
        }
    }
}

/// Inline label for statuses and counts.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-style", variant.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_variant_and_children() {
        let html = dioxus_ssr::render_element(rsx! {
            Badge { variant: BadgeVariant::Pill, "Pendiente" }
        });
        assert!(html.contains("data-style=\"pill\""), "{html}");
        assert!(html.contains("Pendiente"), "{html}");
    }

    #[test]
    fn caller_class_is_merged() {
        let html = dioxus_ssr::render_element(rsx! {
            Badge { class: "text-orange-600 bg-orange-100", "x" }
        });
        assert!(html.contains("badge"), "{html}");
        assert!(html.contains("text-orange-600 bg-orange-100"), "{html}");
    }
}
