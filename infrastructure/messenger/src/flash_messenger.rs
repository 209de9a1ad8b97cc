use std::sync::{Mutex, MutexGuard, PoisonError};

use business::domain::messenger::{Message, Messenger};
use tracing::debug;

/// Collects notifications until the driving surface drains and renders them.
#[derive(Debug, Default)]
pub struct FlashMessenger {
    success_messages: Mutex<Vec<Message>>,
    error_messages: Mutex<Vec<Message>>,
}

fn lock(messages: &Mutex<Vec<Message>>) -> MutexGuard<'_, Vec<Message>> {
    messages.lock().unwrap_or_else(PoisonError::into_inner)
}

impl FlashMessenger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take_success_messages(&self) -> Vec<Message> {
        std::mem::take(&mut *lock(&self.success_messages))
    }

    pub fn take_error_messages(&self) -> Vec<Message> {
        std::mem::take(&mut *lock(&self.error_messages))
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.success_messages).is_empty() && lock(&self.error_messages).is_empty()
    }
}

impl Messenger for FlashMessenger {
    fn add_success_message(&self, message: Message) {
        debug!(key = %message.value, "success message queued");
        lock(&self.success_messages).push(message);
    }

    fn add_error_message(&self, message: Message) {
        debug!(key = %message.value, "error message queued");
        lock(&self.error_messages).push(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_success_and_error_messages_apart() {
        let messenger = FlashMessenger::new();

        messenger.add_success_message(Message::new("ok").with_parameter("%sku%", "A"));
        messenger.add_error_message(Message::new("failed"));

        let successes = messenger.take_success_messages();
        assert_eq!(successes.len(), 1);
        assert_eq!(successes[0].parameters["%sku%"], "A");
        assert_eq!(messenger.take_error_messages(), vec![Message::new("failed")]);
    }

    #[test]
    fn should_empty_buffer_when_drained() {
        let messenger = FlashMessenger::new();
        messenger.add_error_message(Message::new("failed"));

        messenger.take_error_messages();

        assert!(messenger.is_empty());
        assert!(messenger.take_error_messages().is_empty());
    }

    #[test]
    fn should_preserve_insertion_order() {
        let messenger = FlashMessenger::new();
        for value in ["a", "b", "c"] {
            messenger.add_success_message(Message::new(value));
        }

        let values: Vec<String> = messenger
            .take_success_messages()
            .into_iter()
            .map(|message| message.value)
            .collect();

        assert_eq!(values, vec!["a", "b", "c"]);
    }
}
