use gpui::{
    AnyElement, App, Context, FontWeight, IntoElement, ParentElement, Render, SharedString, Styled,
    Subscription, Window, div,
};
use gpui_component::{ActiveTheme, v_flex};
use tracing::info;

#[cfg(not(target_os = "linux"))]
use crate::Quit;
#[cfg(not(target_os = "linux"))]
use crate::quit;

/// Billing window shell: a title heading above the bill content.
pub struct AppWindow {
    title: SharedString,
    _window_close_subscription: Subscription,
    content: Option<Box<dyn Fn() -> AnyElement>>,
}

impl AppWindow {
    pub fn new(
        title: impl Into<SharedString>,
        cx: &mut Context<Self>,
    ) -> Self {
        let title = title.into();
        let closed_title = title.clone();
        let subscription = cx.on_window_closed(move |_cx: &mut App| {
            info!(title = %closed_title, "billing window closed");
            #[cfg(not(target_os = "linux"))]
            quit(&Quit, _cx);
        });

        Self {
            title,
            _window_close_subscription: subscription,
            content: None,
        }
    }

    pub fn title(&self) -> &SharedString {
        &self.title
    }

    /// Set a factory that produces the bill content on every render.
    pub fn set_content(
        &mut self,
        content: impl Fn() -> AnyElement + 'static,
    ) {
        self.content = Some(Box::new(content));
    }
}

impl Render for AppWindow {
    fn render(
        &mut self,
        _: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let content = self.content.as_ref().map(|f| f());

        v_flex()
            .size_full()
            .p_4()
            .gap_3()
            .child(
                div()
                    .pb_2()
                    .border_b_1()
                    .border_color(cx.theme().border)
                    .text_xl()
                    .font_weight(FontWeight::SEMIBOLD)
                    .child(self.title.clone()),
            )
            .children(content)
    }
}
