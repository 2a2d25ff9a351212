use crate::domain::ports::Customer;
use serde::{Deserialize, Serialize};

/// Customer phone number, kept opaque to the domain logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhoneNumber(pub String);

impl PhoneNumber {
    pub fn new(phone: impl Into<String>) -> Self {
        Self(phone.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u64,
    pub description: String,
}

/// Plain value-struct customer. Implements the `Customer` capability so it can
/// flow through validators and the repository alongside ad-hoc test doubles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub first_name: String,
    age: i32,
    #[serde(default)]
    pub phone_number: Option<PhoneNumber>,
    #[serde(default)]
    pub orders: Vec<Order>,
}

impl CustomerRecord {
    pub fn new(first_name: impl Into<String>, age: i32) -> Self {
        Self {
            first_name: first_name.into(),
            age,
            phone_number: None,
            orders: Vec::new(),
        }
    }

    pub fn with_phone_number(mut self, phone: PhoneNumber) -> Self {
        self.phone_number = Some(phone);
        self
    }

    pub fn with_orders(mut self, orders: Vec<Order>) -> Self {
        self.orders = orders;
        self
    }
}

impl Customer for CustomerRecord {
    fn first_name(&self) -> &str {
        &self.first_name
    }

    fn set_first_name(&mut self, name: String) {
        self.first_name = name;
    }

    fn age(&self) -> i32 {
        self.age
    }

    fn phone_number(&self) -> Option<&PhoneNumber> {
        self.phone_number.as_ref()
    }

    fn orders(&self) -> &[Order] {
        &self.orders
    }
}
