use crate::domain::model::{Order, PhoneNumber};
use crate::utils::error::Result;

/// Minimal customer shape consumed by validators and the repository. Age is an
/// accessor rather than a field so implementations may derive it. Test doubles
/// only need `first_name`/`age`; the collection accessors default to empty.
pub trait Customer {
    fn first_name(&self) -> &str;

    fn set_first_name(&mut self, name: String);

    fn age(&self) -> i32;

    fn phone_number(&self) -> Option<&PhoneNumber> {
        None
    }

    fn orders(&self) -> &[Order] {
        &[]
    }
}

/// Admission check injected into `CustomerRepository`. An absent customer is
/// passed as `None`; implementations may fail for any reason and the error
/// travels back to the `add` caller unmodified.
pub trait CustomerValidator {
    fn validate(&self, customer: Option<&dyn Customer>) -> Result<bool>;
}
