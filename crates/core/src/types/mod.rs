//! Core types for the rental admin client.
//!
//! This module provides validated wrappers for the record fields that carry
//! a format: NIC numbers, phone numbers, emails, passwords and roles.

pub mod email;
pub mod id;
pub mod nic;
pub mod password;
pub mod phone;
pub mod role;

pub use email::{Email, EmailError, validate_email};
pub use id::*;
pub use nic::{Nic, NicError, validate_nic};
pub use password::{MIN_PASSWORD_LENGTH, PasswordError, SPECIAL_CHARACTERS, validate_password};
pub use phone::{
    PHONE_DIGITS, PhoneError, PhoneNumber, format_phone_number, normalize_phone_input,
    unformat_phone_number, validate_phone,
};
pub use role::{EmployeeRole, RoleError};
