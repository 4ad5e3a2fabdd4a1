//! Record types exchanged with the rental backend.
//!
//! Records as returned by the backend keep loosely-typed string fields: the
//! backend does not enforce the client's formats, and a stored value that
//! fails validation must still be listable and editable. Create payloads
//! carry validated newtypes instead.

pub mod address;
pub mod customer;
pub mod employee;

pub use address::{Address, AddressField};
pub use customer::{Customer, NewCustomer};
pub use employee::{Employee, NewEmployee};
