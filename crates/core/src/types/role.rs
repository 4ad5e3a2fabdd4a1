//! Employee roles.

use serde::{Deserialize, Serialize};

/// Error returned when a role name is not one of the four known roles.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid role: {0}. Valid roles: Manager, Admin, Clerk, Delivery")]
pub struct RoleError(pub String);

/// Employee role. The set is closed; the backend stores the variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmployeeRole {
    Manager,
    Admin,
    Clerk,
    Delivery,
}

impl EmployeeRole {
    /// All roles, in the order the edit form lists them.
    pub const ALL: [Self; 4] = [Self::Manager, Self::Clerk, Self::Delivery, Self::Admin];

    /// Wire name of the role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Manager => "Manager",
            Self::Admin => "Admin",
            Self::Clerk => "Clerk",
            Self::Delivery => "Delivery",
        }
    }
}

impl std::fmt::Display for EmployeeRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EmployeeRole {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manager" => Ok(Self::Manager),
            "admin" => Ok(Self::Admin),
            "clerk" => Ok(Self::Clerk),
            "delivery" => Ok(Self::Delivery),
            _ => Err(RoleError(s.to_owned())),
        }
    }
}
