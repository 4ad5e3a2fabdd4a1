//! Postal address nested under a customer or employee.

use serde::{Deserialize, Serialize};

/// Address sub-object. Every part is optional free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub house_no: Option<String>,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

/// One part of an [`Address`], addressable as `address.<key>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressField {
    HouseNo,
    Street,
    City,
}

impl AddressField {
    /// Parse the key used after `address.` in a field path.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "houseNo" => Some(Self::HouseNo),
            "street" => Some(Self::Street),
            "city" => Some(Self::City),
            _ => None,
        }
    }
}

impl Address {
    /// Set one part, leaving the others untouched.
    pub fn set(&mut self, field: AddressField, value: impl Into<String>) {
        let slot = match field {
            AddressField::HouseNo => &mut self.house_no,
            AddressField::Street => &mut self.street,
            AddressField::City => &mut self.city,
        };
        *slot = Some(value.into());
    }

    /// Read one part.
    #[must_use]
    pub fn get(&self, field: AddressField) -> Option<&str> {
        match field {
            AddressField::HouseNo => self.house_no.as_deref(),
            AddressField::Street => self.street.as_deref(),
            AddressField::City => self.city.as_deref(),
        }
    }

    /// City, if present and not blank.
    #[must_use]
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref().map(str::trim).filter(|c| !c.is_empty())
    }

    /// Single-line rendering (`42, Palm Avenue, Colombo`), skipping blanks.
    #[must_use]
    pub fn one_line(&self) -> String {
        [&self.house_no, &self.street, &self.city]
            .into_iter()
            .filter_map(|part| part.as_deref().map(str::trim))
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
