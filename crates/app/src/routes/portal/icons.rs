use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdCalendar, LdCircleCheck, LdClock, LdDownload, LdFileText, LdTriangleAlert,
};
use dioxus_free_icons::Icon;
use shared_types::PortalIcon;

/// Render a portal icon at `size` pixels.
#[component]
pub fn PortalIconView(icon: PortalIcon, #[props(default = 24)] size: u32) -> Element {
    match icon {
        PortalIcon::FileText => rsx! { Icon::<LdFileText> { icon: LdFileText, width: size, height: size } },
        PortalIcon::Calendar => rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: size, height: size } },
        PortalIcon::CheckCircle => rsx! { Icon::<LdCircleCheck> { icon: LdCircleCheck, width: size, height: size } },
        PortalIcon::Clock => rsx! { Icon::<LdClock> { icon: LdClock, width: size, height: size } },
        PortalIcon::AlertTriangle => rsx! { Icon::<LdTriangleAlert> { icon: LdTriangleAlert, width: size, height: size } },
        PortalIcon::Download => rsx! { Icon::<LdDownload> { icon: LdDownload, width: size, height: size } },
    }
}
