use serde::{Deserialize, Serialize};

/// The signed-in portal user as exposed by the auth provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortalUser {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl PortalUser {
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            email: None,
        }
    }

    /// Role with its first letter upper-cased ("usuario" -> "Usuario").
    pub fn role_label(&self) -> String {
        let mut chars = self.role.chars();
        match chars.next() {
            None => String::new(),
            Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        }
    }

    /// Up to two initials for avatar fallbacks.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}
