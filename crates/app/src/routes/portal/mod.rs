pub mod content;
pub mod icons;
pub mod profile;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBell, LdUser};
use dioxus_free_icons::Icon;
use shared_types::fixtures::{my_contracts, quick_actions, upcoming_deadlines, user_stats};
use shared_types::{DashboardView, PortalSettings, PortalUser, ViewState, VIEW_TABS};
use shared_ui::{Button, ButtonVariant};

use content::DashboardContent;
use profile::UserProfile;

fn select_view(mut state: Signal<ViewState>, next: DashboardView) {
    if state.write().select(next) {
        tracing::debug!(view = next.as_str(), "portal view switched");
    }
}

/// User portal shell: header bar plus the active view.
///
/// The session is injected: `user` is the signed-in identity and
/// `on_logout` is called once per click on "Cerrar Sesión". The shell owns
/// only the view selection, which starts on `initial_view` (the dashboard
/// unless a caller asks otherwise) and resets whenever the shell remounts.
#[component]
pub fn UserDashboard(
    user: PortalUser,
    settings: PortalSettings,
    on_logout: EventHandler<()>,
    #[props(default)] initial_view: DashboardView,
) -> Element {
    let view = use_signal(move || {
        let mut state = ViewState::new();
        state.select(initial_view);
        state
    });
    let current = view.read().current();
    let role_label = user.role_label();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./portal.css") }

        div { class: "portal",
            header { class: "portal-header",
                div { class: "portal-header-inner",
                    div { class: "portal-brand",
                        div { class: "portal-brand-icon",
                            Icon::<LdUser> { icon: LdUser, width: 24, height: 24 }
                        }
                        div {
                            h1 { class: "portal-brand-name", "{settings.branding.name}" }
                            p { class: "portal-brand-tagline", "{settings.branding.tagline}" }
                        }
                    }

                    div { class: "portal-header-actions",
                        nav { class: "portal-view-tabs",
                            for tab in VIEW_TABS.iter().copied() {
                                Button {
                                    key: "{tab.as_str()}",
                                    id: "portal-tab-{tab.as_str()}",
                                    variant: ButtonVariant::Ghost,
                                    active: current == tab,
                                    onclick: move |_| select_view(view, tab),
                                    "{tab.tab_label()}"
                                }
                            }
                        }

                        // Static decoration, not tied to any notification count.
                        button {
                            class: "portal-bell",
                            r#type: "button",
                            "aria-label": "Notificaciones",
                            Icon::<LdBell> { icon: LdBell, width: 20, height: 20 }
                            span { class: "portal-bell-dot" }
                        }

                        Button {
                            id: "portal-identity",
                            variant: ButtonVariant::Ghost,
                            class: "portal-identity",
                            onclick: move |_| select_view(view, DashboardView::Profile),
                            span { class: "portal-identity-name", "{user.name}" }
                            span { class: "portal-identity-role", "{role_label}" }
                        }

                        Button {
                            id: "portal-logout",
                            variant: ButtonVariant::Ghost,
                            class: "portal-logout",
                            onclick: move |_| on_logout.call(()),
                            "Cerrar Sesión"
                        }
                    }
                }
            }

            main { class: "portal-main",
                match current {
                    DashboardView::Dashboard => rsx! {
                        DashboardContent {
                            user_name: user.name.clone(),
                            stats: user_stats(),
                            contracts: my_contracts(),
                            deadlines: upcoming_deadlines(),
                            actions: quick_actions(),
                            animate: settings.features.animations,
                        }
                    },
                    DashboardView::Profile => rsx! { UserProfile {} },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthState;
    use dioxus::dioxus_core::{AttributeValue, ElementId, Mutation};
    use dioxus_html::{PlatformEventData, SerializedHtmlEventConverter, SerializedMouseData};
    use pretty_assertions::assert_eq;
    use std::any::Any;
    use std::cell::Cell;
    use std::collections::HashMap;
    use std::rc::Rc;

    #[component]
    fn Harness(initial_view: DashboardView, logouts: Rc<Cell<u32>>) -> Element {
        let user = PortalUser::new("María González", "usuario");
        let seeded = user.clone();
        use_context_provider(move || {
            let mut auth = AuthState::new();
            auth.adopt_session(&seeded);
            auth
        });

        rsx! {
            UserDashboard {
                user,
                settings: PortalSettings::default(),
                on_logout: move |_| logouts.set(logouts.get() + 1),
                initial_view,
            }
        }
    }

    /// A mounted shell whose buttons can be clicked by their `id`.
    struct Shell {
        dom: VirtualDom,
        ids: HashMap<String, ElementId>,
        logouts: Rc<Cell<u32>>,
    }

    impl Shell {
        fn mount(initial_view: DashboardView) -> Self {
            dioxus_html::set_event_converter(Box::new(SerializedHtmlEventConverter));

            let logouts = Rc::new(Cell::new(0));
            let mut dom = VirtualDom::new_with_props(
                Harness,
                HarnessProps { initial_view, logouts: logouts.clone() },
            );
            let mutations = dom.rebuild_to_vec();
            let ids = mutations
                .edits
                .iter()
                .filter_map(|edit| match edit {
                    Mutation::SetAttribute {
                        name: "id",
                        value: AttributeValue::Text(value),
                        id,
                        ..
                    } => Some((value.clone(), *id)),
                    _ => None,
                })
                .collect();

            Self { dom, ids, logouts }
        }

        fn click(&mut self, element: &str) {
            let id = *self
                .ids
                .get(element)
                .unwrap_or_else(|| panic!("no element with id {element}"));
            let event = Event::new(
                Rc::new(PlatformEventData::new(Box::<SerializedMouseData>::default())) as Rc<dyn Any>,
                true,
            );
            self.dom.runtime().handle_event("click", event, id);
            self.dom.render_immediate_to_vec();
        }

        fn html(&self) -> String {
            dioxus_ssr::render(&self.dom)
        }
    }

    fn render(initial_view: DashboardView) -> String {
        Shell::mount(initial_view).html()
    }

    /// Whether the header tab labelled for `view` carries the active marker.
    fn tab_is_active(html: &str, view: DashboardView) -> bool {
        let label = format!(">{}</button>", view.tab_label());
        let end = html.find(&label).expect("tab rendered");
        let tag_start = html[..end].rfind("<button").unwrap();
        html[tag_start..end].contains("data-active=\"true\"")
    }

    fn shows_dashboard(html: &str) -> bool {
        html.contains("Hola, María González") && html.contains("Mis Contratos")
    }

    fn shows_profile(html: &str) -> bool {
        html.contains("portal-profile") && !html.contains("Mis Contratos")
    }

    #[test]
    fn shell_starts_on_dashboard() {
        let html = render(DashboardView::default());
        assert!(shows_dashboard(&html), "{html}");
        assert!(tab_is_active(&html, DashboardView::Dashboard));
        assert!(!tab_is_active(&html, DashboardView::Profile));
    }

    #[test]
    fn header_shows_branding_identity_and_logout() {
        let html = render(DashboardView::Dashboard);
        assert!(html.contains("SIMAUD"));
        assert!(html.contains("Portal de Usuario"));
        assert!(html.contains(">María González</span>"));
        assert!(html.contains(">Usuario</span>"));
        assert!(html.contains("Cerrar Sesión"));
        assert!(html.contains("Mi Perfil"));
    }

    #[test]
    fn notification_dot_is_always_rendered() {
        for view in VIEW_TABS.iter().copied() {
            let html = render(view);
            assert_eq!(html.matches("portal-bell-dot").count(), 1, "{html}");
        }
    }

    #[test]
    fn profile_view_replaces_dashboard_content() {
        let html = render(DashboardView::Profile);
        assert!(tab_is_active(&html, DashboardView::Profile));
        assert!(!tab_is_active(&html, DashboardView::Dashboard));
        assert!(shows_profile(&html), "{html}");
        assert!(html.contains("Perfil de Usuario"));
    }

    #[test]
    fn clicking_tabs_switches_views() {
        let mut shell = Shell::mount(DashboardView::Dashboard);

        shell.click("portal-tab-profile");
        let html = shell.html();
        assert!(tab_is_active(&html, DashboardView::Profile));
        assert!(!tab_is_active(&html, DashboardView::Dashboard));
        assert!(shows_profile(&html), "{html}");

        shell.click("portal-tab-dashboard");
        let html = shell.html();
        assert!(tab_is_active(&html, DashboardView::Dashboard));
        assert!(!tab_is_active(&html, DashboardView::Profile));
        assert!(shows_dashboard(&html), "{html}");
    }

    #[test]
    fn clicking_the_active_tab_changes_nothing() {
        let mut shell = Shell::mount(DashboardView::Dashboard);
        let before = shell.html();
        shell.click("portal-tab-dashboard");
        assert_eq!(shell.html(), before);

        shell.click("portal-tab-profile");
        let before = shell.html();
        shell.click("portal-tab-profile");
        assert_eq!(shell.html(), before);
    }

    #[test]
    fn identity_block_opens_profile() {
        let mut shell = Shell::mount(DashboardView::Dashboard);
        shell.click("portal-identity");

        let html = shell.html();
        assert!(tab_is_active(&html, DashboardView::Profile));
        assert!(shows_profile(&html), "{html}");
    }

    #[test]
    fn logout_calls_capability_once_per_click() {
        let mut shell = Shell::mount(DashboardView::Dashboard);
        let before = shell.html();

        shell.click("portal-logout");
        assert_eq!(shell.logouts.get(), 1);
        shell.click("portal-logout");
        assert_eq!(shell.logouts.get(), 2);

        // The shell itself keeps its view and markup.
        assert_eq!(shell.html(), before);
    }

    #[test]
    fn logout_from_profile_keeps_profile_view() {
        let mut shell = Shell::mount(DashboardView::Dashboard);
        shell.click("portal-tab-profile");
        let before = shell.html();

        shell.click("portal-logout");
        assert_eq!(shell.logouts.get(), 1);
        assert_eq!(shell.html(), before);
        assert!(shows_profile(&before));
    }
}
