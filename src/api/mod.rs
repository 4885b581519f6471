pub mod client;

pub use client::{ApplicationApi, HttpApplicationApi, StatusAck};
