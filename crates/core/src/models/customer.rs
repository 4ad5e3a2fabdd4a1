//! Customer records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Address;
use crate::{CustomerId, Nic, PhoneNumber};

/// A customer as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub customer_id: CustomerId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub nic: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Bare digits, no separators.
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default, rename = "firstDateDeal", alias = "firstDealDate")]
    pub first_deal_date: Option<NaiveDate>,
    #[serde(default, rename = "lastDateDeal", alias = "lastDealDate")]
    pub last_deal_date: Option<NaiveDate>,
    /// Soft-delete flag.
    #[serde(default)]
    pub deleted: bool,
}

impl Customer {
    /// Display name, falling back to the NIC and then the ID.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .or(self.nic.as_deref())
            .map_or_else(|| format!("Customer #{}", self.customer_id), str::to_owned)
    }

    /// City from the nested address, if any.
    #[must_use]
    pub fn city(&self) -> Option<&str> {
        self.address.as_ref().and_then(Address::city)
    }
}

/// Payload for creating a customer. The whole record is sent at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomer {
    pub name: String,
    pub nic: Nic,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<PhoneNumber>,
    pub address: Address,
    #[serde(rename = "firstDateDeal", skip_serializing_if = "Option::is_none")]
    pub first_deal_date: Option<NaiveDate>,
    #[serde(rename = "lastDateDeal", skip_serializing_if = "Option::is_none")]
    pub last_deal_date: Option<NaiveDate>,
}
