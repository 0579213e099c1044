//! The parent view that owns a bill and hosts its price summary.

use std::{cell::RefCell, rc::Rc};

use billing_core::{BillDraft, Currency, PriceSummary, StepDirection, summary_props};
use gpui::{
    App, AppContext, Context, Entity, IntoElement, ParentElement, Render, SharedString, Styled,
    Subscription, Window, div,
};
use gpui_component::{
    ActiveTheme, h_flex,
    checkbox::Checkbox,
    input::{InputEvent, InputState, NumberInputEvent, StepAction},
    v_flex,
};
use tracing::{debug, info};

use crate::components::{PriceSummaryElement, make_button};

/// Owns the bill state and the input fields of its price summary.
///
/// Every field edit is forwarded through a freshly built [`PriceSummary`],
/// whose setters write into the shared draft; the panel then re-renders.
/// Change events whose text already matches the draft are dropped.
pub struct BillPanel {
    draft: Rc<RefCell<BillDraft>>,
    currency: Currency,
    amount_input: Entity<InputState>,
    description_input: Entity<InputState>,
    _subscriptions: Vec<Subscription>,
}

impl BillPanel {
    pub fn new(
        draft: BillDraft,
        currency: Currency,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let amount = draft.extra_charge.amount.clone();
        let description = draft.extra_charge.description.clone();

        let amount_input = cx.new(|input_cx| {
            InputState::new(window, input_cx)
                .placeholder("0.00")
                .default_value(amount)
        });
        let description_input = cx.new(|input_cx| {
            InputState::new(window, input_cx)
                .placeholder(billing_core::summary::DESCRIPTION_PLACEHOLDER)
                .default_value(description)
        });

        let subscriptions = vec![
            cx.subscribe_in(&amount_input, window, Self::on_amount_input),
            cx.subscribe_in(&amount_input, window, Self::on_amount_step),
            cx.subscribe_in(&description_input, window, Self::on_description_input),
        ];

        info!(items = draft.line_items.len(), "bill panel created");
        Self {
            draft: Rc::new(RefCell::new(draft)),
            currency,
            amount_input,
            description_input,
            _subscriptions: subscriptions,
        }
    }

    /// Builds the component for the current state of the draft.
    fn summary(&self) -> PriceSummary {
        PriceSummary::new(summary_props(&self.draft), self.currency.clone())
    }

    fn on_amount_input(
        &mut self,
        state: &Entity<InputState>,
        event: &InputEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if let InputEvent::Change = event {
            let text = state.read(cx).value().to_string();
            if self.summary().sync_extra_charge(text) {
                cx.notify();
            }
        }
    }

    fn on_amount_step(
        &mut self,
        state: &Entity<InputState>,
        event: &NumberInputEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let NumberInputEvent::Step(action) = event;
        let direction = match action {
            StepAction::Increment => StepDirection::Up,
            StepAction::Decrement => StepDirection::Down,
        };

        let summary = self.summary();
        let next = summary.render().extra_charge.amount.stepped(direction);
        debug!(?direction, %next, "extra charge stepped");

        // The draft holds `next` before the field does, so the change event
        // echoed by `set_value` is a no-op in `on_amount_input`.
        summary.input_extra_charge(next.clone());
        state.update(cx, |input, input_cx| input.set_value(next, window, input_cx));
        cx.notify();
    }

    fn on_description_input(
        &mut self,
        state: &Entity<InputState>,
        event: &InputEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if let InputEvent::Change = event {
            let text = state.read(cx).value().to_string();
            if self.summary().sync_description(text) {
                cx.notify();
            }
        }
    }

    fn set_include_gst(
        &mut self,
        include_gst: bool,
        cx: &mut Context<Self>,
    ) {
        self.draft.borrow_mut().set_include_gst(include_gst);
        cx.notify();
    }

    /// Empties both extra-charge fields through the component's setters.
    fn clear_extra_charge(
        &mut self,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let props = summary_props(&self.draft);
        (props.set_extra_charge)(String::new());
        (props.set_extra_charge_description)(String::new());

        for input in [&self.amount_input, &self.description_input] {
            input.update(cx, |state, input_cx| state.set_value("", window, input_cx));
        }
        info!("extra charge cleared");
        cx.notify();
    }

    fn render_line_items(
        &self,
        cx: &App,
    ) -> impl IntoElement {
        let draft = self.draft.borrow();
        let rows = draft.line_items.iter().map(|item| {
            h_flex()
                .justify_between()
                .child(SharedString::from(format!(
                    "{} × {}",
                    item.name, item.quantity
                )))
                .child(SharedString::from(self.currency.format(item.line_total())))
        });

        v_flex()
            .gap_1()
            .text_color(cx.theme().muted_foreground)
            .children(rows)
    }
}

impl Render for BillPanel {
    fn render(
        &mut self,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let include_gst = self.draft.borrow().include_gst;
        let view = self.summary().render();
        let entity = cx.entity();

        v_flex()
            .gap_3()
            .w_full()
            .child(self.render_line_items(cx))
            .child(
                h_flex()
                    .justify_between()
                    .items_center()
                    .child(
                        Checkbox::new("include-gst")
                            .label("Charge GST")
                            .checked(include_gst)
                            .on_click(cx.listener(|this, checked: &bool, _window, cx| {
                                this.set_include_gst(*checked, cx)
                            })),
                    )
                    .child(make_button(
                        "clear-extra",
                        "Clear extra",
                        move |_, window, cx: &mut App| {
                            entity.update(cx, |this, cx| this.clear_extra_charge(window, cx));
                        },
                    )),
            )
            .child(div().child(PriceSummaryElement::new(
                view,
                &self.amount_input,
                &self.description_input,
            )))
    }
}
