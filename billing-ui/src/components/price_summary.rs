//! gpui layout for a rendered price summary.

use billing_core::summary::{SummaryRow, SummaryView};
use gpui::{
    App, Div, Entity, FontWeight, IntoElement, ParentElement, RenderOnce, SharedString, Styled, TextAlign,
    Window, div, px,
};
use gpui_component::{
    ActiveTheme, h_flex,
    input::{Input, InputState, NumberInput},
    v_flex,
};

/// Draws one [`SummaryView`].
///
/// The input states belong to the parent; this element only places them.
/// The description input is left out entirely while the view hides it.
#[derive(IntoElement)]
pub struct PriceSummaryElement {
    view: SummaryView,
    amount_input: Entity<InputState>,
    description_input: Entity<InputState>,
}

impl PriceSummaryElement {
    pub fn new(
        view: SummaryView,
        amount_input: &Entity<InputState>,
        description_input: &Entity<InputState>,
    ) -> Self {
        Self {
            view,
            amount_input: amount_input.clone(),
            description_input: description_input.clone(),
        }
    }
}

impl RenderOnce for PriceSummaryElement {
    fn render(
        self,
        _window: &mut Window,
        cx: &mut App,
    ) -> impl IntoElement {
        let extra = self.view.extra_charge;

        let description = extra.description.map(|field| {
            make_labeled_row(field.label).child(Input::new(&self.description_input).flex_grow())
        });

        v_flex()
            .gap_2()
            .p_3()
            .rounded_md()
            .border_1()
            .border_color(cx.theme().border)
            .child(make_value_row(&self.view.subtotal))
            .child(make_value_row(&self.view.gst))
            .child(
                v_flex()
                    .gap_1()
                    .child(
                        make_labeled_row(extra.amount.label)
                            .child(div().flex_grow().child(NumberInput::new(&self.amount_input))),
                    )
                    .children(description),
            )
            .child(div().h(px(1.)).bg(cx.theme().border))
            .child(make_value_row(&self.view.total))
    }
}

fn make_value_row(row: &SummaryRow) -> Div {
    let value = div().child(SharedString::from(row.value.clone()));
    let value = if row.emphasized {
        value.text_lg().font_weight(FontWeight::BOLD)
    } else {
        value
    };

    make_labeled_row(SharedString::from(format!("{}:", row.label)))
        .justify_between()
        .child(value)
}

fn make_labeled_row(label: impl Into<SharedString>) -> Div {
    h_flex().items_center().gap_4().child(
        div()
            .min_w(px(150.))
            .text_align(TextAlign::Left)
            .child(label.into()),
    )
}
