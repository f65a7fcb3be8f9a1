use dioxus::prelude::*;

/// Pulsing placeholder bars shown while portal data resolves.
///
/// Renders `lines` stacked bars; the last one is shorter so a block of
/// text reads as a paragraph.
#[component]
pub fn Skeleton(
    #[props(default = 1)] lines: u32,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "skeleton", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let lines = lines.max(1);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            for line in 0..lines {
                div {
                    key: "{line}",
                    class: "skeleton-line",
                    "data-short": if lines > 1 && line + 1 == lines { "true" } else { "false" },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_one_bar_by_default() {
        let html = dioxus_ssr::render_element(rsx! { Skeleton {} });
        assert_eq!(html.matches("class=\"skeleton-line\"").count(), 1, "{html}");
        assert!(!html.contains("data-short=\"true\""), "{html}");
    }

    #[test]
    fn last_of_several_bars_is_short() {
        let html = dioxus_ssr::render_element(rsx! { Skeleton { lines: 3 } });
        assert_eq!(html.matches("class=\"skeleton-line\"").count(), 3, "{html}");
        assert_eq!(html.matches("data-short=\"true\"").count(), 1, "{html}");
    }

    #[test]
    fn zero_lines_still_renders_a_bar() {
        let html = dioxus_ssr::render_element(rsx! { Skeleton { lines: 0 } });
        assert_eq!(html.matches("class=\"skeleton-line\"").count(), 1, "{html}");
    }
}
