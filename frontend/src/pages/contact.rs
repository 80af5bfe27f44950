use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::browser::scroll_to_top;
use crate::contact::form::{settle_submission, submit, ContactForm, FormType, SubmitState, ORGANIZATION_TYPES};

fn text_input(form: &UseStateHandle<ContactForm>, apply: fn(&mut ContactForm, String)) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        apply(&mut next, input.value());
        form.set(next);
    })
}

#[function_component]
pub fn Contact() -> Html {
    let product = use_search_param("product".to_string());
    let form = use_state(|| ContactForm {
        form_type: product
            .as_deref()
            .and_then(FormType::from_product)
            .unwrap_or_default(),
        ..Default::default()
    });
    let state = use_state(|| SubmitState::Idle);

    use_effect_with_deps(
        move |_| {
            scroll_to_top();
            || ()
        },
        (),
    );

    let select_type = |form_type: FormType| {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| form.set(form.with_form_type(form_type)))
    };

    let onsubmit = {
        let form = form.clone();
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if state.is_submitting() {
                return;
            }
            if let Err(err) = form.validate() {
                state.set(SubmitState::Failed(err.to_string()));
                return;
            }
            state.set(SubmitState::Submitting);
            let snapshot = (*form).clone();
            let form = form.clone();
            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = submit(&snapshot).await;
                let (next_form, next_state) = settle_submission(&snapshot, result);
                // Failures leave the live form alone.
                if next_state == SubmitState::Succeeded {
                    form.set(next_form);
                }
                state.set(next_state);
            });
        })
    };

    let on_org_type = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.organization_type = select.value();
            form.set(next);
        })
    };

    let on_additional = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.additional_info = area.value();
            form.set(next);
        })
    };

    let is_buoy = form.form_type == FormType::Buoy;
    let (price, unit, note) = form.form_type.price_range();

    html! {
        <div class="page contact-page">
            <div class="page-header">
                <h1>{"Request a Quote"}</h1>
                <p>{"Choose the solution that fits your needs and get a custom quote"}</p>
            </div>

            <div class="product-selector">
                { for [FormType::Buoy, FormType::Suam].into_iter().map(|t| html! {
                    <button
                        type="button"
                        class={classes!("selector", (form.form_type == t).then_some("selected"))}
                        onclick={select_type(t)}
                    >
                        {t.title()}
                        <div class="selector-sub">{t.audience()}</div>
                    </button>
                })}
            </div>

            {
                match &*state {
                    SubmitState::Succeeded => html! {
                        <div class="success-banner">
                            <h3>{"Thank you!"}</h3>
                            <p>{"Your request has been received. Our team will contact you within 24 hours."}</p>
                        </div>
                    },
                    SubmitState::Failed(message) => html! {
                        <div class="error-banner">{message}</div>
                    },
                    _ => html! {},
                }
            }

            <form class="card form" onsubmit={onsubmit}>
                <div class="form-row">
                    <label>
                        {"Full Name *"}
                        <input type="text" placeholder="John Doe" value={form.name.clone()}
                            oninput={text_input(&form, |f, v| f.name = v)} />
                    </label>
                    <label>
                        {"Email Address *"}
                        <input type="email" placeholder="john@example.com" value={form.email.clone()}
                            oninput={text_input(&form, |f, v| f.email = v)} />
                    </label>
                </div>
                <div class="form-row">
                    <label>
                        {"Phone Number"}
                        <input type="tel" placeholder="+1 (555) 123-4567" value={form.phone.clone()}
                            oninput={text_input(&form, |f, v| f.phone = v)} />
                    </label>
                    <label>
                        { if is_buoy { "Organization Name *" } else { "Company/Vessel Name" } }
                        <input type="text"
                            placeholder={if is_buoy { "ABC Shipping Co." } else { "My Vessel" }}
                            value={form.organization.clone()}
                            oninput={text_input(&form, |f, v| f.organization = v)} />
                    </label>
                </div>

                if is_buoy {
                    <div class="form-row">
                        <label>
                            {"Organization Type *"}
                            <select onchange={on_org_type}>
                                <option value="" selected={form.organization_type.is_empty()}>{"Select organization type..."}</option>
                                { for ORGANIZATION_TYPES.iter().map(|(value, label)| html! {
                                    <option value={*value} selected={form.organization_type == *value}>{*label}</option>
                                })}
                            </select>
                        </label>
                        <label>
                            {"Fleet Size / Coverage Area *"}
                            <input type="text" placeholder="e.g., 10 vessels, 50 sq km" value={form.fleet_size.clone()}
                                oninput={text_input(&form, |f, v| f.fleet_size = v)} />
                        </label>
                    </div>
                } else {
                    <label>
                        {"Number of Vessels"}
                        <input type="text" placeholder="e.g., 1, 3, 5" value={form.fleet_size.clone()}
                            oninput={text_input(&form, |f, v| f.fleet_size = v)} />
                    </label>
                }

                <label>
                    {"Deployment/Operating Area *"}
                    <input type="text" placeholder="e.g., Pacific Northwest, Gulf of Maine" value={form.deployment_area.clone()}
                        oninput={text_input(&form, |f, v| f.deployment_area = v)} />
                </label>
                <label>
                    {"Primary Use Case *"}
                    <input type="text" placeholder="e.g., Shipping route protection, Research, Commercial fishing" value={form.use_case.clone()}
                        oninput={text_input(&form, |f, v| f.use_case = v)} />
                </label>
                <label>
                    {"Additional Information"}
                    <textarea rows="4" placeholder="Any specific requirements or questions..."
                        value={form.additional_info.clone()} oninput={on_additional} />
                </label>

                <div class="price-estimate">
                    <h3>{"Estimated Pricing Range"}</h3>
                    <p><span class="price">{price}</span>{" "}{unit}</p>
                    <p class="note">{note}</p>
                </div>

                <button type="submit" class="btn btn-primary btn-block" disabled={state.is_submitting()}>
                    { if state.is_submitting() { "Sending..." } else { "Request Quote" } }
                </button>
            </form>

            <div class="contact-direct">
                <p>{"Have questions? Contact us directly:"}</p>
                <p class="email">{"Email: "}<a href="mailto:contact@mobylabs.com">{"contact@mobylabs.com"}</a></p>
            </div>
        </div>
    }
}
