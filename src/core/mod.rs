pub mod catalog;
pub mod client;
pub mod codec;
pub mod lint;

pub use crate::domain::ports::{Operation, Transport};
pub use crate::domain::record::{FieldValue, FieldVisitor, Record, UnknownEnumValue};
pub use crate::utils::error::Result;
