use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlFormElement, SubmitEvent};
use yew::prelude::*;

use crate::contact::{submit_form, ContactAction, ContactFormState};

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub endpoint: String,
    pub status_hide_ms: u32,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let state = use_reducer(ContactFormState::default);
    let form_ref = use_node_ref();
    let hide_timer = use_mut_ref(|| None::<Timeout>);

    // Clear the fields after each successful submission
    {
        let form_ref = form_ref.clone();
        use_effect_with_deps(
            move |cleared| {
                if *cleared > 0 {
                    if let Some(form) = form_ref.cast::<HtmlFormElement>() {
                        form.reset();
                    }
                }
                || ()
            },
            state.cleared,
        );
    }

    let onsubmit = {
        let dispatcher = state.dispatcher();
        let form_ref = form_ref.clone();
        let hide_timer = hide_timer.clone();
        let endpoint = props.endpoint.clone();
        let hide_ms = props.status_hide_ms;
        let busy = state.busy;
        let next_submission = state.submission + 1;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if busy {
                return;
            }
            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                log::warn!("contact form missing, submission skipped");
                return;
            };

            // A new submission cancels the previous hide timer
            hide_timer.borrow_mut().take();
            dispatcher.dispatch(ContactAction::Submit);

            let dispatcher = dispatcher.clone();
            let hide_timer = hide_timer.clone();
            let endpoint = endpoint.clone();
            spawn_local(async move {
                let result = submit_form(&endpoint, &form).await;
                match &result {
                    Ok(()) => log::info!("contact request {} delivered", next_submission),
                    Err(e) => gloo_console::error!(format!("Contact request failed: {}", e)),
                }
                dispatcher.dispatch(ContactAction::Completed(result));

                let hide = dispatcher.clone();
                *hide_timer.borrow_mut() = Some(Timeout::new(hide_ms, move || {
                    hide.dispatch(ContactAction::HideStatus(next_submission));
                }));
            });
        })
    };

    let status = state.status.map(|status| {
        html! {
            <div id="form-alert" class={status.class()} role="status">
                {status.text}
            </div>
        }
    });

    html! {
        <section id="contact" class="contact-section">
            <div class="panel contact-panel">
                <h2>{"Оставить заявку"}</h2>
                <p>{"Расскажите о задаче, и мы свяжемся с вами в течение рабочего дня."}</p>
                <form id="contact-form" ref={form_ref} {onsubmit}>
                    <label>
                        {"Имя"}
                        <input type="text" name="name" autocomplete="name" required={true} />
                    </label>
                    <label>
                        {"Телефон"}
                        <input type="tel" name="phone" autocomplete="tel" required={true} />
                    </label>
                    <label>
                        {"Комментарий"}
                        <textarea name="message" rows="4"></textarea>
                    </label>
                    <button id="submit-btn" type="submit" class="hero-cta" disabled={state.busy}>
                        {state.button_label()}
                    </button>
                </form>
                {for status}
            </div>
            <style>
                {r#"
                    .contact-section {
                        padding: 6rem 2rem;
                        display: flex;
                        justify-content: center;
                    }
                    .contact-panel {
                        width: 100%;
                        max-width: 560px;
                        background: rgba(30, 30, 30, 0.8);
                        border: 1px solid rgba(30, 144, 255, 0.15);
                        border-radius: 24px;
                        padding: 2.5rem;
                    }
                    #contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    #contact-form label {
                        display: flex;
                        flex-direction: column;
                        gap: 0.4rem;
                        color: #999;
                    }
                    #contact-form input,
                    #contact-form textarea {
                        background: #111;
                        border: 1px solid #333;
                        border-radius: 12px;
                        padding: 0.8rem 1rem;
                        color: #fff;
                        font: inherit;
                    }
                    #submit-btn:disabled {
                        opacity: 0.6;
                        cursor: progress;
                    }
                    .form-alert {
                        margin-top: 1.25rem;
                        padding: 1rem 1.25rem;
                        border-radius: 12px;
                    }
                    .form-alert.success {
                        background: rgba(46, 204, 113, 0.12);
                        border: 1px solid rgba(46, 204, 113, 0.4);
                        color: #2ecc71;
                    }
                    .form-alert.error {
                        background: rgba(231, 76, 60, 0.12);
                        border: 1px solid rgba(231, 76, 60, 0.4);
                        color: #e74c3c;
                    }
                "#}
            </style>
        </section>
    }
}
