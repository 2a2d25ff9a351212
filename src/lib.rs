#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::adult_validator::AdultValidator;
pub use crate::core::arith::GenericCalculator;
pub use crate::core::division::{DivisionObserver, DivisionService, SubscriptionId};
pub use crate::core::repository::CustomerRepository;
pub use crate::domain::model::{CustomerRecord, Order, PhoneNumber};
pub use crate::domain::ports::{Customer, CustomerValidator};
pub use crate::utils::error::{DomainError, Result};
