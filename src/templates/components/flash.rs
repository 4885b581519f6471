use maud::{html, Markup};

/// One-shot notice carried across the post/redirect as query params,
/// standing in for the toast the admin UI would otherwise pop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub tone: FlashTone,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashTone {
    Success,
    Error,
}

impl FlashTone {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlashTone::Success => "success",
            FlashTone::Error => "error",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "success" => Some(FlashTone::Success),
            "error" => Some(FlashTone::Error),
            _ => None,
        }
    }
}

pub fn flash_banner(flash: &Flash) -> Markup {
    let style = match flash.tone {
        FlashTone::Success => {
            "background: #ecfdf5; color: #065f46; border: 1px solid #a7f3d0; padding: 10px 14px; border-radius: 6px; margin-bottom: 1rem;"
        }
        FlashTone::Error => {
            "background: #fef2f2; color: #991b1b; border: 1px solid #fecaca; padding: 10px 14px; border-radius: 6px; margin-bottom: 1rem;"
        }
    };

    html! {
        div style=(style) role="status" {
            (flash.message)
        }
    }
}
