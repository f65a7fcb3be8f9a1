use serde::{Deserialize, Serialize};

/// Top-level screens of the user portal. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DashboardView {
    #[default]
    Dashboard,
    Profile,
}

/// Header tabs in display order.
pub const VIEW_TABS: &[DashboardView] = &[DashboardView::Dashboard, DashboardView::Profile];

impl DashboardView {
    pub fn as_str(&self) -> &'static str {
        match self {
            DashboardView::Dashboard => "dashboard",
            DashboardView::Profile => "profile",
        }
    }

    /// Label of the header tab.
    pub fn tab_label(&self) -> &'static str {
        match self {
            DashboardView::Dashboard => "Dashboard",
            DashboardView::Profile => "Mi Perfil",
        }
    }
}

/// View selection owned by the portal shell.
///
/// Selecting is synchronous and never fails; selecting the active view is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    current: DashboardView,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> DashboardView {
        self.current
    }

    /// Switch to `view`. Returns whether the active view changed.
    pub fn select(&mut self, view: DashboardView) -> bool {
        let changed = self.current != view;
        self.current = view;
        changed
    }
}
