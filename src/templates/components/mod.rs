pub mod badge;
pub mod flash;

pub use badge::status_badge;
pub use flash::{flash_banner, Flash, FlashTone};
