pub mod adult_validator;
pub mod arith;
pub mod division;
pub mod repository;

pub use crate::domain::model::{CustomerRecord, Order, PhoneNumber};
pub use crate::domain::ports::{Customer, CustomerValidator};
pub use crate::utils::error::Result;
