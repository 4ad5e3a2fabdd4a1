//! Employee records.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize, Serializer};

use super::Address;
use crate::{Email, EmployeeId, EmployeeRole, Nic, PhoneNumber};

/// An employee as returned by the backend.
///
/// The password is write-only: it is never read back from a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub employee_id: EmployeeId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub nic: Option<String>,
    #[serde(default)]
    pub role: Option<EmployeeRole>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
}

impl Employee {
    /// Display name, falling back to the username and then the ID.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .or(self.username.as_deref())
            .map_or_else(|| format!("Employee #{}", self.employee_id), str::to_owned)
    }
}

/// Payload for creating an employee.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub name: String,
    pub nic: Nic,
    pub role: EmployeeRole,
    pub phone_number: PhoneNumber,
    pub email: Email,
    pub username: String,
    #[serde(serialize_with = "expose_password")]
    pub password: SecretString,
    pub address: Address,
}

fn expose_password<S: Serializer>(password: &SecretString, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(password.expose_secret())
}
