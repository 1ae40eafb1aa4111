use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id!(SessionId);

define_id!(RoomCode);

impl SessionId {
    pub fn new(id: String) -> Self {
        Self(id)
    }
}

impl RoomCode {
    /// Codes are matched case-insensitively, so every code is stored trimmed
    /// and uppercased.
    pub fn normalize(raw: &str) -> Self {
        Self(raw.trim().to_ascii_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_code_normalization() {
        assert_eq!(RoomCode::normalize("  ab12cd \n").as_str(), "AB12CD");
        assert_eq!(RoomCode::normalize("AB12CD"), RoomCode::normalize("ab12cd"));
    }
}
