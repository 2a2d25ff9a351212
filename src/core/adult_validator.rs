use crate::domain::ports::{Customer, CustomerValidator};
use crate::utils::error::{DomainError, Result};

const ADULT_AGE: i32 = 18;

/// Approves customers aged 18 or over. Negative ages are simply "not adult";
/// no lower-bound validation is performed.
pub struct AdultValidator;

impl AdultValidator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AdultValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomerValidator for AdultValidator {
    fn validate(&self, customer: Option<&dyn Customer>) -> Result<bool> {
        let customer = customer.ok_or(DomainError::NullArgument { name: "customer" })?;
        Ok(customer.age() >= ADULT_AGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CustomerStub {
        age: i32,
    }

    impl Customer for CustomerStub {
        fn first_name(&self) -> &str {
            ""
        }

        fn set_first_name(&mut self, _name: String) {}

        fn age(&self) -> i32 {
            self.age
        }
    }

    #[test]
    fn test_age_below_18_is_not_adult() {
        let validator = AdultValidator::new();

        for age in [17, 10, 0, -1, -30] {
            let customer = CustomerStub { age };
            assert!(!validator.validate(Some(&customer)).unwrap(), "age {}", age);
        }
    }

    #[test]
    fn test_age_18_or_above_is_adult() {
        let validator = AdultValidator::new();

        for age in [18, 30] {
            let customer = CustomerStub { age };
            assert!(validator.validate(Some(&customer)).unwrap(), "age {}", age);
        }
    }

    #[test]
    fn test_absent_customer_is_an_error() {
        let validator = AdultValidator::new();

        let result = validator.validate(None);

        assert!(matches!(
            result,
            Err(DomainError::NullArgument { name: "customer" })
        ));
    }
}
