use crate::domain::ports::{Customer, CustomerValidator};
use crate::utils::error::Result;

/// In-memory customer collection guarded by an injected validator. Insertion
/// order is preserved and duplicates are allowed; admitted customers are never
/// re-validated. There is no removal operation.
pub struct CustomerRepository<V: CustomerValidator> {
    validator: V,
    all_customers: Vec<Box<dyn Customer>>,
}

impl<V: CustomerValidator> CustomerRepository<V> {
    pub fn new(validator: V) -> Self {
        Self {
            validator,
            all_customers: Vec::new(),
        }
    }

    /// Appends `customer` when the validator approves it; a rejection discards
    /// the customer silently. A validator error propagates to the caller
    /// unmodified and nothing is stored.
    pub fn add(&mut self, customer: Box<dyn Customer>) -> Result<()> {
        if !self.validator.validate(Some(customer.as_ref()))? {
            tracing::debug!(first_name = customer.first_name(), "customer rejected");
            return Ok(());
        }

        self.all_customers.push(customer);
        Ok(())
    }

    /// Read-only view of the admitted customers in insertion order.
    pub fn all_customers(&self) -> &[Box<dyn Customer>] {
        &self.all_customers
    }

    pub fn len(&self) -> usize {
        self.all_customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_customers.is_empty()
    }
}
