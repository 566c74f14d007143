//! Domain value objects and types.
//!
//! Type-safe wrappers for the pieces of a contact: its name, its canonical
//! phone numbers and its birthday. Each one validates at construction time,
//! so invalid data never reaches the address book.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;
pub mod phone_set;

pub use birthday::{format_date, Birthday, DATE_FORMAT};
pub use errors::ValidationError;
pub use name::ContactName;
pub use phone::{looks_like_phone, normalize_phone, PhoneNumber};
pub use phone_set::PhoneNumberSet;
