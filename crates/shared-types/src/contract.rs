use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Contract status
// ---------------------------------------------------------------------------

/// The three contract states the portal knows about.
///
/// Labels are localized here, at the data layer; the UI shows
/// [`ContractStatus::label`] verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractStatus {
    Active,
    Pending,
    InReview,
}

/// All known statuses in display order.
pub const ALL_STATUSES: &[ContractStatus] = &[
    ContractStatus::Active,
    ContractStatus::Pending,
    ContractStatus::InReview,
];

impl ContractStatus {
    /// Display label, exactly as shown in the status badge.
    pub fn label(&self) -> &'static str {
        match self {
            ContractStatus::Active => "Activo",
            ContractStatus::Pending => "Pendiente",
            ContractStatus::InReview => "En Revisión",
        }
    }

    /// Match a display label back to its status. Unknown labels give `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        ALL_STATUSES.iter().copied().find(|s| s.label() == label)
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            ContractStatus::Active => StatusTone::Green,
            ContractStatus::Pending => StatusTone::Orange,
            ContractStatus::InReview => StatusTone::Purple,
        }
    }
}

// ---------------------------------------------------------------------------
// Badge styling
// ---------------------------------------------------------------------------

/// Color family of a status badge. `Neutral` covers every unrecognized status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusTone {
    Green,
    Orange,
    Purple,
    #[default]
    Neutral,
}

/// Text/background class pair applied to a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle {
    pub text: &'static str,
    pub background: &'static str,
}

impl StatusStyle {
    /// Both classes joined for a `class` attribute.
    pub fn class(&self) -> String {
        format!("{} {}", self.text, self.background)
    }
}

impl StatusTone {
    pub fn style(&self) -> StatusStyle {
        match self {
            StatusTone::Green => StatusStyle {
                text: "text-green-600",
                background: "bg-green-100",
            },
            StatusTone::Orange => StatusStyle {
                text: "text-orange-600",
                background: "bg-orange-100",
            },
            StatusTone::Purple => StatusStyle {
                text: "text-purple-600",
                background: "bg-purple-100",
            },
            StatusTone::Neutral => StatusStyle {
                text: "text-gray-600",
                background: "bg-gray-100",
            },
        }
    }
}

/// Tone for a raw status label. Total: unknown labels get [`StatusTone::Neutral`].
pub fn status_tone(status: &str) -> StatusTone {
    ContractStatus::from_label(status)
        .map(|s| s.tone())
        .unwrap_or_default()
}

/// Badge class pair for a raw status label.
pub fn status_style(status: &str) -> StatusStyle {
    status_tone(status).style()
}

// ---------------------------------------------------------------------------
// Contract
// ---------------------------------------------------------------------------

/// A contract row as listed on the user dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub id: String,
    pub title: String,
    pub client: String,
    /// Literal status label, e.g. "Pendiente".
    pub status: String,
    pub start_date: String,
    pub end_date: String,
    /// Pre-formatted amount, e.g. "$8,500".
    pub value: String,
}

impl Contract {
    pub fn status_style(&self) -> StatusStyle {
        status_style(&self.status)
    }
}
