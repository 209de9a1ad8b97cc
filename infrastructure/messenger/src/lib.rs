pub mod flash_messenger;

pub use flash_messenger::FlashMessenger;
