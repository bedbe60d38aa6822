pub mod message;
pub mod event;
pub mod config;
pub mod error;

#[cfg(test)]
mod tests;

pub use error::ChatbotError;
pub type Result<T> = std::result::Result<T, ChatbotError>;
