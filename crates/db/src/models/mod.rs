pub mod layout;
pub mod slot;
pub mod wine;
