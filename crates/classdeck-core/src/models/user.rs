//! User profile and role scoping

use serde::{Deserialize, Serialize};

/// Scoped role: selects the endpoint prefix and the dashboard variant,
/// never the underlying list behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Tutor,
    Student,
}

impl Role {
    /// URL path prefix every role-scoped endpoint lives under
    #[must_use]
    pub const fn scope(self) -> &'static str {
        match self {
            Self::Admin => "/admin",
            Self::Tutor => "/tutor",
            Self::Student => "/student",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Tutor => "tutor",
            Self::Student => "student",
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "tutor" => Ok(Self::Tutor),
            "student" => Ok(Self::Student),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// The signed-in user as returned by the auth endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!("Admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!(" student ".parse::<Role>().unwrap(), Role::Student);
        assert!("teacher".parse::<Role>().is_err());
    }

    #[test]
    fn scope_prefixes_match_roles() {
        assert_eq!(Role::Tutor.scope(), "/tutor");
        assert_eq!(Role::Student.scope(), "/student");
    }
}
