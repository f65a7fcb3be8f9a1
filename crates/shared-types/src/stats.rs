use serde::{Deserialize, Serialize};

/// Icons the portal can place on a tile, notice or action.
///
/// Resolved to concrete icon components by the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PortalIcon {
    FileText,
    Calendar,
    CheckCircle,
    Clock,
    AlertTriangle,
    Download,
}

/// Accent color of a tile or icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Accent {
    Blue,
    Orange,
    Green,
    Purple,
}

impl Accent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Accent::Blue => "blue",
            Accent::Orange => "orange",
            Accent::Green => "green",
            Accent::Purple => "purple",
        }
    }

    /// Gradient classes for the icon tile of a stat card.
    pub fn gradient(&self) -> &'static str {
        match self {
            Accent::Blue => "from-blue-500 to-blue-600",
            Accent::Orange => "from-orange-500 to-orange-600",
            Accent::Green => "from-green-500 to-green-600",
            Accent::Purple => "from-purple-500 to-purple-600",
        }
    }
}

/// A summary tile in the dashboard stat grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    pub description: String,
    pub icon: PortalIcon,
    pub accent: Accent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_uses_accent_family() {
        for accent in [
            Accent::Blue,
            Accent::Orange,
            Accent::Green,
            Accent::Purple,
        ] {
            let gradient = accent.gradient();
            assert!(gradient.starts_with(&format!("from-{}-500", accent.as_str())));
            assert!(gradient.ends_with(&format!("to-{}-600", accent.as_str())));
        }
    }
}
