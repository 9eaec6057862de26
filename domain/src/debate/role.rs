//! Participant roles

use serde::{Deserialize, Serialize};

/// Role a participant plays in a debate
///
/// Fixed when the participant is constructed. Arguers take one of the two
/// advocate roles; judges take [`Role::Judge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Argues in favour of the topic
    #[serde(alias = "for")]
    Pro,
    /// Argues against the topic
    #[serde(alias = "against")]
    Con,
    /// Casts the final decision
    #[serde(alias = "decider")]
    Judge,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Pro => "pro",
            Role::Con => "con",
            Role::Judge => "judge",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Pro => "Advocate For",
            Role::Con => "Advocate Against",
            Role::Judge => "Judge",
        }
    }

    /// Whether this role decides rather than argues
    pub fn is_decider(&self) -> bool {
        matches!(self, Role::Judge)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an unknown role name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown role '{0}' (expected pro, con or judge)")]
pub struct ParseRoleError(pub String);

impl std::str::FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pro" | "for" => Ok(Role::Pro),
            "con" | "against" => Ok(Role::Con),
            "judge" | "decider" => Ok(Role::Judge),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_names() {
        assert_eq!(Role::Pro.as_str(), "pro");
        assert_eq!(Role::Con.as_str(), "con");
        assert_eq!(Role::Judge.as_str(), "judge");
        assert_eq!(Role::Con.to_string(), "con");
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!("pro".parse::<Role>(), Ok(Role::Pro));
        assert_eq!(" Against ".parse::<Role>(), Ok(Role::Con));
        assert_eq!("JUDGE".parse::<Role>(), Ok(Role::Judge));
        assert!("moderator".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_serde_lowercase() {
        let json = serde_json::to_string(&Role::Judge).unwrap();
        assert_eq!(json, "\"judge\"");
        let role: Role = serde_json::from_str("\"con\"").unwrap();
        assert_eq!(role, Role::Con);
    }

    #[test]
    fn test_role_serde_accepts_same_aliases_as_from_str() {
        for (alias, expected) in [
            ("for", Role::Pro),
            ("against", Role::Con),
            ("decider", Role::Judge),
        ] {
            let role: Role = serde_json::from_str(&format!("\"{alias}\"")).unwrap();
            assert_eq!(role, expected);
            assert_eq!(alias.parse::<Role>(), Ok(expected));
        }
        // Serialization keeps the canonical names
        assert_eq!(serde_json::to_string(&Role::Pro).unwrap(), "\"pro\"");
    }

    #[test]
    fn test_is_decider() {
        assert!(Role::Judge.is_decider());
        assert!(!Role::Pro.is_decider());
        assert!(!Role::Con.is_decider());
    }
}
