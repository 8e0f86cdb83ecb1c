pub mod body;
pub mod ready;

pub use body::JsonFields;
pub use ready::ReadyStore;
