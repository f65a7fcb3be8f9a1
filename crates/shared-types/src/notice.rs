use serde::{Deserialize, Serialize};

use crate::stats::{Accent, PortalIcon};

/// How urgent an upcoming-deadline notice is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeSeverity {
    /// A contract is about to expire.
    Warning,
    /// Something is waiting on someone else.
    Caution,
}

impl NoticeSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeSeverity::Warning => "warning",
            NoticeSeverity::Caution => "caution",
        }
    }

    pub fn icon(&self) -> PortalIcon {
        match self {
            NoticeSeverity::Warning => PortalIcon::AlertTriangle,
            NoticeSeverity::Caution => PortalIcon::Clock,
        }
    }
}

/// Entry of the "Próximos Vencimientos" panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeadlineNotice {
    pub title: String,
    pub detail: String,
    pub severity: NoticeSeverity,
}

/// Entry of the "Acciones Rápidas" panel. Actions carry no behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickAction {
    pub label: String,
    pub icon: PortalIcon,
    pub accent: Accent,
}
