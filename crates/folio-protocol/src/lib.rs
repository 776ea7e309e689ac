pub mod analytics;
pub mod channel;
pub mod chat;
pub mod contact;
pub mod process;
pub mod projects;

pub use analytics::*;
pub use channel::*;
pub use chat::*;
pub use contact::*;
pub use process::*;
pub use projects::*;
