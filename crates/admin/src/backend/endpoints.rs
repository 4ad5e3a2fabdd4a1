//! Logical field → endpoint mapping.
//!
//! | Record | Field | Path segment | Carried as |
//! |---|---|---|---|
//! | customer | `name` | `update-Customer-name` | `?name=` |
//! | customer | `nic` | `update-Customer-Nic` | `?newNic=` |
//! | customer | `email` | `update-Customer-email` | `?email=` |
//! | customer | `phone` | `update-Customer-phone` | `?phoneNumber=` |
//! | customer | `address` | `update-Customer-address` | JSON body |
//! | customer | `firstDealDate` | `update-Customer-fristdealdate` | `?fristDealDate=` |
//! | customer | `lastDealDate` | `update-Customer-lastdealdate` | `?lastDealDate=` |
//! | employee | `name` | `update-employee-Name` | `?name=` |
//! | employee | `nic` | `update-employee-Nic` | `?newNic=` |
//! | employee | `email` | `update-employee-Email` | `?email=` |
//! | employee | `phone` | `update-employee-Phone` | `?phone=` |
//! | employee | `address` | `update-employee-Address` | JSON body |
//! | employee | `password` | `update-employee-Password` | `?password=` |
//! | employee | `role` | `update-employee-Role` | `?Role=` |
//!
//! The misspelled `fristdealdate` segments are the backend's actual routes.

use chrono::NaiveDate;
use rental_admin_core::{Address, Email, EmployeeRole, Nic, PhoneNumber};
use secrecy::{ExposeSecret, SecretString};

/// How a field's new value travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Param {
    /// Single query parameter with this key.
    Query(&'static str),
    /// JSON request body.
    JsonBody,
}

/// One field-update endpoint, relative to the record type's prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub segment: &'static str,
    pub param: Param,
}

impl Endpoint {
    const fn query(segment: &'static str, key: &'static str) -> Self {
        Self {
            segment,
            param: Param::Query(key),
        }
    }

    const fn body(segment: &'static str) -> Self {
        Self {
            segment,
            param: Param::JsonBody,
        }
    }
}

/// Error for an unknown logical field name.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {record} field: {name}")]
pub struct UnknownField {
    pub record: &'static str,
    pub name: String,
}

// =============================================================================
// Customer
// =============================================================================

/// Updatable customer fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomerField {
    Name,
    Nic,
    Email,
    Phone,
    Address,
    FirstDealDate,
    LastDealDate,
}

impl CustomerField {
    pub const ALL: [Self; 7] = [
        Self::Name,
        Self::Nic,
        Self::Email,
        Self::Phone,
        Self::Address,
        Self::FirstDealDate,
        Self::LastDealDate,
    ];

    /// Logical field name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Nic => "nic",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::FirstDealDate => "firstDealDate",
            Self::LastDealDate => "lastDealDate",
        }
    }

    /// Capitalized label used in notices.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Nic => "NIC",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Address => "Address",
            Self::FirstDealDate => "First deal date",
            Self::LastDealDate => "Last deal date",
        }
    }

    #[must_use]
    pub const fn endpoint(self) -> Endpoint {
        match self {
            Self::Name => Endpoint::query("update-Customer-name", "name"),
            Self::Nic => Endpoint::query("update-Customer-Nic", "newNic"),
            Self::Email => Endpoint::query("update-Customer-email", "email"),
            Self::Phone => Endpoint::query("update-Customer-phone", "phoneNumber"),
            Self::Address => Endpoint::body("update-Customer-address"),
            Self::FirstDealDate => Endpoint::query("update-Customer-fristdealdate", "fristDealDate"),
            Self::LastDealDate => Endpoint::query("update-Customer-lastdealdate", "lastDealDate"),
        }
    }
}

impl std::fmt::Display for CustomerField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CustomerField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "nic" | "customerId" => Ok(Self::Nic),
            "email" => Ok(Self::Email),
            "phone" | "phoneNumber" => Ok(Self::Phone),
            "address" => Ok(Self::Address),
            "firstDealDate" | "firstDateDeal" => Ok(Self::FirstDealDate),
            "lastDealDate" | "lastDateDeal" => Ok(Self::LastDealDate),
            _ => Err(UnknownField {
                record: "customer",
                name: s.to_owned(),
            }),
        }
    }
}

/// New value for one customer field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomerUpdate {
    Name(String),
    Nic(Nic),
    Email(String),
    Phone(PhoneNumber),
    Address(Address),
    FirstDealDate(NaiveDate),
    LastDealDate(NaiveDate),
}

impl CustomerUpdate {
    #[must_use]
    pub const fn field(&self) -> CustomerField {
        match self {
            Self::Name(_) => CustomerField::Name,
            Self::Nic(_) => CustomerField::Nic,
            Self::Email(_) => CustomerField::Email,
            Self::Phone(_) => CustomerField::Phone,
            Self::Address(_) => CustomerField::Address,
            Self::FirstDealDate(_) => CustomerField::FirstDealDate,
            Self::LastDealDate(_) => CustomerField::LastDealDate,
        }
    }

    /// Value for the query parameter; `None` for body-carried fields.
    #[must_use]
    pub fn query_value(&self) -> Option<String> {
        match self {
            Self::Name(v) | Self::Email(v) => Some(v.clone()),
            Self::Nic(nic) => Some(nic.to_string()),
            Self::Phone(phone) => Some(phone.to_string()),
            Self::FirstDealDate(date) | Self::LastDealDate(date) => {
                Some(date.format("%Y-%m-%d").to_string())
            }
            Self::Address(_) => None,
        }
    }

    /// JSON body; `Some` only for address updates.
    #[must_use]
    pub const fn body(&self) -> Option<&Address> {
        match self {
            Self::Address(address) => Some(address),
            _ => None,
        }
    }
}

// =============================================================================
// Employee
// =============================================================================

/// Updatable employee fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmployeeField {
    Name,
    Nic,
    Email,
    Phone,
    Address,
    Password,
    Role,
}

impl EmployeeField {
    pub const ALL: [Self; 7] = [
        Self::Name,
        Self::Nic,
        Self::Email,
        Self::Phone,
        Self::Address,
        Self::Password,
        Self::Role,
    ];

    /// Logical field name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Nic => "nic",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::Password => "password",
            Self::Role => "role",
        }
    }

    /// Capitalized label used in notices.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Nic => "NIC",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Address => "Address",
            Self::Password => "Password",
            Self::Role => "Role",
        }
    }

    #[must_use]
    pub const fn endpoint(self) -> Endpoint {
        match self {
            Self::Name => Endpoint::query("update-employee-Name", "name"),
            Self::Nic => Endpoint::query("update-employee-Nic", "newNic"),
            Self::Email => Endpoint::query("update-employee-Email", "email"),
            Self::Phone => Endpoint::query("update-employee-Phone", "phone"),
            Self::Address => Endpoint::body("update-employee-Address"),
            Self::Password => Endpoint::query("update-employee-Password", "password"),
            Self::Role => Endpoint::query("update-employee-Role", "Role"),
        }
    }
}

impl std::fmt::Display for EmployeeField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EmployeeField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "nic" | "employeeId" => Ok(Self::Nic),
            "email" => Ok(Self::Email),
            "phone" | "phoneNumber" => Ok(Self::Phone),
            "address" => Ok(Self::Address),
            "password" => Ok(Self::Password),
            "role" => Ok(Self::Role),
            _ => Err(UnknownField {
                record: "employee",
                name: s.to_owned(),
            }),
        }
    }
}

/// New value for one employee field.
#[derive(Debug, Clone)]
pub enum EmployeeUpdate {
    Name(String),
    Nic(Nic),
    Email(Email),
    Phone(PhoneNumber),
    Address(Address),
    Password(SecretString),
    Role(EmployeeRole),
}

impl EmployeeUpdate {
    #[must_use]
    pub const fn field(&self) -> EmployeeField {
        match self {
            Self::Name(_) => EmployeeField::Name,
            Self::Nic(_) => EmployeeField::Nic,
            Self::Email(_) => EmployeeField::Email,
            Self::Phone(_) => EmployeeField::Phone,
            Self::Address(_) => EmployeeField::Address,
            Self::Password(_) => EmployeeField::Password,
            Self::Role(_) => EmployeeField::Role,
        }
    }

    /// Value for the query parameter; `None` for body-carried fields.
    #[must_use]
    pub fn query_value(&self) -> Option<String> {
        match self {
            Self::Name(v) => Some(v.clone()),
            Self::Nic(nic) => Some(nic.to_string()),
            Self::Email(email) => Some(email.to_string()),
            Self::Phone(phone) => Some(phone.to_string()),
            Self::Password(password) => Some(password.expose_secret().to_owned()),
            Self::Role(role) => Some(role.as_str().to_owned()),
            Self::Address(_) => None,
        }
    }

    /// JSON body; `Some` only for address updates.
    #[must_use]
    pub const fn body(&self) -> Option<&Address> {
        match self {
            Self::Address(address) => Some(address),
            _ => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_every_field_round_trips_through_its_name() {
        for field in CustomerField::ALL {
            assert_eq!(field.as_str().parse::<CustomerField>().unwrap(), field);
        }
        for field in EmployeeField::ALL {
            assert_eq!(field.as_str().parse::<EmployeeField>().unwrap(), field);
        }
    }

    #[test]
    fn test_only_address_uses_a_body() {
        for field in CustomerField::ALL {
            let is_body = field.endpoint().param == Param::JsonBody;
            assert_eq!(is_body, field == CustomerField::Address, "{field}");
        }
        for field in EmployeeField::ALL {
            let is_body = field.endpoint().param == Param::JsonBody;
            assert_eq!(is_body, field == EmployeeField::Address, "{field}");
        }
    }

    #[test]
    fn test_legacy_field_aliases() {
        assert_eq!("customerId".parse::<CustomerField>().unwrap(), CustomerField::Nic);
        assert_eq!("employeeId".parse::<EmployeeField>().unwrap(), EmployeeField::Nic);
        assert!("salary".parse::<EmployeeField>().is_err());
    }

    #[test]
    fn test_customer_query_values() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
        assert_eq!(
            CustomerUpdate::FirstDealDate(date).query_value().as_deref(),
            Some("2026-03-09")
        );
        assert_eq!(
            CustomerUpdate::Phone(PhoneNumber::parse("0712345678").unwrap())
                .query_value()
                .as_deref(),
            Some("0712345678")
        );
        let address = CustomerUpdate::Address(Address::default());
        assert!(address.query_value().is_none());
        assert!(address.body().is_some());
    }

    #[test]
    fn test_employee_role_query_value() {
        let update = EmployeeUpdate::Role(EmployeeRole::Delivery);
        assert_eq!(update.field().endpoint().param, Param::Query("Role"));
        assert_eq!(update.query_value().as_deref(), Some("Delivery"));
    }
}
