mod auth;
mod books;
pub mod client;
pub mod types;
mod users;

pub use client::*;
pub use types::*;
