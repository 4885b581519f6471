pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{flash_banner, status_badge, Flash, FlashTone};
pub use layouts::desktop::desktop_layout;
