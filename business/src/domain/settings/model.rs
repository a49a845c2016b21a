use serde_json::{Map, Value};

use super::errors::SettingsError;

/// Free-form user preferences. The content is opaque to the application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings(Map<String, Value>);

impl Settings {
    pub fn new(values: Map<String, Value>) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_values(self) -> Map<String, Value> {
        self.0
    }
}

impl TryFrom<Value> for Settings {
    type Error = SettingsError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(values) => Ok(Self(values)),
            _ => Err(SettingsError::NotAnObject),
        }
    }
}
