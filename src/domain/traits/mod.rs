//! Domain traits - Abstractions implemented by the host

pub mod sender;

pub use sender::Sender;
