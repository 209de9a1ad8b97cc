use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// User-facing notification, addressed by glossary key.
///
/// Parameters are substituted into the translated text by the presentation
/// side (e.g. `%sku%`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub value: String,
    #[serde(default)]
    pub parameters: BTreeMap<String, String>,
}

impl Message {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            parameters: BTreeMap::new(),
        }
    }

    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }
}

/// Notification sink port. Messages are collected for the current request
/// and rendered by whatever surface drives the use case.
pub trait Messenger: Send + Sync {
    fn add_success_message(&self, message: Message);
    fn add_error_message(&self, message: Message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_attach_parameters() {
        let message = Message::new("customer.account.shopping_list.item.add.failed")
            .with_parameter("%sku%", "123_456");

        assert_eq!(
            message.parameters.get("%sku%").map(String::as_str),
            Some("123_456")
        );
    }
}
