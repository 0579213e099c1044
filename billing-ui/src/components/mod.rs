pub mod bill_panel;
pub mod price_summary;
pub mod window;

use gpui::{App, SharedString, Window};
use gpui::{ClickEvent, Styled};
use gpui::{Pixels, Size, px};
use gpui_component::Sizable;
use gpui_component::button::{Button, ButtonVariants};

pub use bill_panel::BillPanel;
pub use price_summary::PriceSummaryElement;
pub use window::AppWindow;

use crate::config::WindowConfig;

#[derive(Debug, Clone)]
pub struct WindowPreferences {
    pub title: SharedString,
    pub size: Size<Pixels>,
}

impl Default for WindowPreferences {
    fn default() -> Self {
        Self::from(&WindowConfig::default())
    }
}

impl From<&WindowConfig> for WindowPreferences {
    fn from(config: &WindowConfig) -> Self {
        Self::new(config.title.clone(), px(config.width), px(config.height))
    }
}

impl WindowPreferences {
    pub fn new(
        title: impl Into<SharedString>,
        width: impl Into<Pixels>,
        height: impl Into<Pixels>,
    ) -> Self {
        Self {
            title: title.into(),
            size: Size {
                width: width.into(),
                height: height.into(),
            },
        }
    }
}

/// Creates a small secondary button with a custom click handler.
pub fn make_button(
    id: impl Into<SharedString>,
    label: impl Into<SharedString>,
    on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
) -> Button {
    Button::new(id.into())
        .ghost()
        .small()
        .w(px(96.))
        .label(label.into())
        .on_click(on_click)
}
