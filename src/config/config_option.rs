use serde::Serialize;

use crate::types::err::ConfigError;

/// A configurable value, bounded by some minimum and maximum.
#[derive(Clone, Debug, Serialize)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }
}

impl<T: PartialOrd> ConfigOption<T> {
    /// An error naming the option if the value of the option lies outside the bounds of the option.
    pub fn check(&self) -> Result<(), ConfigError> {
        match self.min <= self.value && self.value <= self.max {
            true => Ok(()),
            false => Err(ConfigError::OutOfBounds(self.name)),
        }
    }
}
