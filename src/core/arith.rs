use std::marker::PhantomData;
use std::ops::Add;

/// Addition over any numeric representation with an `Add` impl. Exists to show
/// the same arithmetic contract holds across integer, float and decimal types.
pub struct GenericCalculator<T> {
    _marker: PhantomData<T>,
}

impl<T: Add<Output = T>> GenericCalculator<T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }

    pub fn add(&self, a: T, b: T) -> T {
        a + b
    }
}

impl<T: Add<Output = T>> Default for GenericCalculator<T> {
    fn default() -> Self {
        Self::new()
    }
}
