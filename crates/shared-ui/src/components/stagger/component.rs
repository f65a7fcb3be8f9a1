use dioxus::prelude::*;

/// Delay between the entrance of consecutive children.
pub const STAGGER_STEP_MS: u32 = 100;

/// Container whose [`StaggerItem`] children fade and slide in on mount.
///
/// With `animate: false` the children render in place with no transition.
#[component]
pub fn Stagger(
    #[props(default = true)] animate: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "stagger", None, false),
        Attribute::new(
            "data-animate",
            if animate { "true" } else { "false" },
            None,
            false,
        ),
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

/// Child of a [`Stagger`] container. `index` sets its start offset.
#[component]
pub fn StaggerItem(
    index: u32,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let delay = index * STAGGER_STEP_MS;
    let base = vec![
        Attribute::new("class", "stagger-item", None, false),
        Attribute::new("style", format!("animation-delay: {delay}ms;"), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}
