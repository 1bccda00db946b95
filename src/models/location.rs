use serde::{Deserialize, Serialize};

/// Where a work session takes place. Serialized on the wire and in the
/// session file as the full name ("Home" / "Office").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Location {
    Home,   // H
    Office, // O
}

impl Location {
    pub fn code(&self) -> &str {
        match self {
            Location::Home => "H",
            Location::Office => "O",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Home => "Home",
            Location::Office => "Office",
        }
    }

    /// Helper: convert input code from CLI (code or full name, any case)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "H" | "HOME" => Some(Location::Home),
            "O" | "OFFICE" => Some(Location::Office),
            _ => None,
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
