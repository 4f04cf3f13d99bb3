pub mod derive;
pub mod discover;
pub mod exec;
pub mod hello;

pub use derive::{DeriveArgs, derive_command};
pub use discover::{DiscoverArgs, discover_command};
pub use exec::exec_command;
pub use hello::{HelloArgs, hello_command};
