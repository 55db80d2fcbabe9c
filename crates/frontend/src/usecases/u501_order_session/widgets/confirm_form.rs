use super::super::view_model::OrderPageViewModel;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::modal::Modal;
use contracts::enums::{ConfirmationState, FormField, OrderType};
use contracts::usecases::u501_order_session::OrderFormValues;
use leptos::ev;
use leptos::prelude::*;

/// Customer form shown while the confirmation flow is `FormOpen`
#[component]
pub fn ConfirmForm() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let vm = leptos::context::use_context::<OrderPageViewModel>()
        .expect("OrderPageViewModel not found");

    let is_open = move || {
        vm.read(|s| s.confirmation_state() == ConfirmationState::FormOpen)
            .unwrap_or(false)
    };
    let selected_code = move || {
        vm.read(|s| s.order_type().map(|t| t.code().to_string()))
            .flatten()
            .unwrap_or_default()
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit(ctx);
    };

    view! {
        <Show when=is_open>
            <Modal
                title="CUSTOMER FORM"
                class="confirm-order"
                on_close=Callback::new(move |_| vm.cancel_confirm())
            >
                <form class="customer-form" on:submit=on_submit novalidate=true>
                    <div class="form__group">
                        <label class="form__label" for="order-type">"Order Type:"</label>
                        <select
                            id="order-type"
                            class="form__input"
                            prop:value=selected_code
                            on:change=move |ev| vm.set_order_type(&event_target_value(&ev))
                        >
                            <option value="" disabled=true>"--- Select the Order Type ---"</option>
                            {OrderType::all()
                                .into_iter()
                                .map(|t| view! { <option value=t.code()>{t.display_name()}</option> })
                                .collect_view()}
                        </select>
                        {move || vm.issue_for(FormField::OrderType).map(|msg| view! { <div class="form__error">{msg}</div> })}
                    </div>

                    {text_field(vm, FormField::CashAmount, "number", "Enter cash amount",
                        |v| v.cash_amount.clone(), |v, x| v.cash_amount = x)}
                    {text_field(vm, FormField::CustomerName, "text", "Enter your name",
                        |v| v.customer_name.clone(), |v, x| v.customer_name = x)}
                    {text_field(vm, FormField::ContactNumber, "tel", "Enter your contact number",
                        |v| v.contact_number.clone(), |v, x| v.contact_number = x)}
                    {text_field(vm, FormField::Address, "text", "Enter your address",
                        |v| v.address.clone(), |v, x| v.address = x)}
                    {text_field(vm, FormField::Email, "email", "Enter your email",
                        |v| v.email.clone(), |v, x| v.email = x)}

                    <button
                        type="submit"
                        class="button button--primary customer-form__submit"
                        disabled=move || vm.is_submitting.get()
                    >
                        {move || if vm.is_submitting.get() { "Sending..." } else { "Confirm Details" }}
                    </button>
                </form>
            </Modal>
        </Show>
    }
}

/// One input whose visibility and required marker follow the form policy
fn text_field(
    vm: OrderPageViewModel,
    field: FormField,
    input_type: &'static str,
    placeholder: &'static str,
    get: fn(&OrderFormValues) -> String,
    set: fn(&mut OrderFormValues, String),
) -> impl IntoView {
    let policy = move || {
        vm.read(|s| s.form_policy().field(field))
            .unwrap_or_default()
    };
    let input_id = field_id(field);

    view! {
        <Show when=move || policy().visible>
            <div class="form__group">
                <label class="form__label" for=input_id.clone()>
                    {format!("{}:", field.label())}
                    {move || policy().required.then(|| view! { <span class="form__required">" *"</span> })}
                </label>
                <input
                    id=input_id.clone()
                    class="form__input"
                    type=input_type
                    placeholder=placeholder
                    min=(input_type == "number").then_some("0")
                    prop:value=move || vm.form_values.with(get)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.form_values.update(|v| set(v, value));
                    }
                />
                {move || vm.issue_for(field).map(|msg| view! { <div class="form__error">{msg}</div> })}
            </div>
        </Show>
    }
}

/// "customer-name" for `FormField::CustomerName`
fn field_id(field: FormField) -> String {
    field.label().to_lowercase().replace(' ', "-")
}
