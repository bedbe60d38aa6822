pub mod chat;
pub mod launcher;
pub mod markup;
