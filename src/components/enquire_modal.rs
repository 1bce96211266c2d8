use yew::prelude::*;
use web_sys::{Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, MouseEvent, SubmitEvent};
use wasm_bindgen_futures::spawn_local;
use gloo_net::http::Request;
use gloo_console::log;
use crate::config;
use crate::enquiry::{
    EnquiryForm, EnquiryPayload, SubmitResponse, SubmitStatus, BOARDS, CITIES, PROGRAMS, STANDARDS,
};

#[derive(Properties, PartialEq)]
pub struct EnquireModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

fn text_field(
    form: &UseStateHandle<EnquiryForm>,
    apply: fn(&mut EnquiryForm, String),
) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        apply(&mut next, input.value());
        form.set(next);
    })
}

fn select_field(
    form: &UseStateHandle<EnquiryForm>,
    apply: fn(&mut EnquiryForm, String),
) -> Callback<Event> {
    let form = form.clone();
    Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        apply(&mut next, select.value());
        form.set(next);
    })
}

fn area_field(
    form: &UseStateHandle<EnquiryForm>,
    apply: fn(&mut EnquiryForm, String),
) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let area: HtmlTextAreaElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        apply(&mut next, area.value());
        form.set(next);
    })
}

fn select_options(options: &'static [&'static str], current: &str) -> Html {
    html! {
        <>
            <option value="" disabled=true selected={current.is_empty()}>{"Select"}</option>
            {
                options.iter().map(|opt| html! {
                    <option value={*opt} selected={current == *opt}>{*opt}</option>
                }).collect::<Html>()
            }
        </>
    }
}

#[function_component(EnquireModal)]
pub fn enquire_modal(props: &EnquireModalProps) -> Html {
    let form = use_state(EnquiryForm::default);
    let status = use_state(|| SubmitStatus::Idle);

    // Reopening the modal drops any leftover outcome banner but keeps
    // whatever the visitor had typed. An attempt still in flight keeps its
    // state, and the submit button stays disabled until it resolves.
    {
        let status = status.clone();
        use_effect_with_deps(
            move |is_open| {
                if *is_open && status.clears_on_reopen() {
                    status.set(SubmitStatus::Idle);
                }
                || ()
            },
            props.is_open,
        );
    }

    let onsubmit = {
        let form = form.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            status.set(SubmitStatus::Idle);

            if let Err(err) = form.validate() {
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message(&err.to_string());
                }
                return;
            }

            let access_key = match config::get_access_key() {
                Some(key) => key,
                None => {
                    status.set(SubmitStatus::Failure("Form not configured".to_string()));
                    return;
                }
            };

            let payload =
                EnquiryPayload::build(&form, access_key, config::get_enquiry_recipient());
            status.set(SubmitStatus::Submitting);

            let form = form.clone();
            let status = status.clone();
            spawn_local(async move {
                match Request::post(config::get_form_endpoint())
                    .json(&payload)
                    .unwrap()
                    .send()
                    .await
                {
                    Ok(response) => {
                        if response.ok() {
                            match response.json::<SubmitResponse>().await {
                                Ok(resp) if resp.success => {
                                    form.set(EnquiryForm::default());
                                    status.set(SubmitStatus::Success(
                                        "Enquiry sent successfully".to_string(),
                                    ));
                                }
                                Ok(_) => {
                                    status.set(SubmitStatus::Failure(
                                        "Something went wrong".to_string(),
                                    ));
                                }
                                Err(e) => {
                                    log!("Failed to parse relay response: {}", e.to_string());
                                    status.set(SubmitStatus::Failure(
                                        "Something went wrong".to_string(),
                                    ));
                                }
                            }
                        } else {
                            log!("Relay rejected the enquiry, status: {}", response.status());
                            status.set(SubmitStatus::Failure(
                                "Something went wrong".to_string(),
                            ));
                        }
                    }
                    Err(_) => {
                        status.set(SubmitStatus::Failure("Network error".to_string()));
                    }
                }
            });
        })
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    if !props.is_open {
        return html! {};
    }

    html! {
        <>
            <div class="modal-backdrop" onclick={close.clone()}></div>
            <div class="modal-panel">
                <button class="modal-close" onclick={close} aria-label="Close enquiry form">
                    {"✕"}
                </button>

                <h2 class="modal-title">
                    <span>{"Enquire "}</span>{"Now"}
                </h2>

                <form onsubmit={onsubmit} class="modal-form">
                    <div class="modal-grid">
                        <div class="modal-field">
                            <label for="enquiry-name">{"Name"}</label>
                            <input
                                id="enquiry-name"
                                type="text"
                                value={form.name.clone()}
                                oninput={text_field(&form, |f, v| f.name = v)}
                            />
                        </div>
                        <div class="modal-field">
                            <label for="enquiry-email">{"Email"}</label>
                            <input
                                id="enquiry-email"
                                type="text"
                                value={form.email.clone()}
                                oninput={text_field(&form, |f, v| f.email = v)}
                            />
                        </div>
                        <div class="modal-field">
                            <label for="enquiry-phone">{"Phone"}</label>
                            <input
                                id="enquiry-phone"
                                type="tel"
                                maxlength="10"
                                value={form.phone.clone()}
                                oninput={text_field(&form, |f, v| f.phone = v)}
                            />
                        </div>
                        <div class="modal-field">
                            <label for="enquiry-program">{"Program"}</label>
                            <select
                                id="enquiry-program"
                                onchange={select_field(&form, |f, v| f.program = v)}
                            >
                                { select_options(PROGRAMS, &form.program) }
                            </select>
                        </div>
                        <div class="modal-field">
                            <label for="enquiry-board">{"Board"}</label>
                            <select
                                id="enquiry-board"
                                onchange={select_field(&form, |f, v| f.board = v)}
                            >
                                { select_options(BOARDS, &form.board) }
                            </select>
                        </div>
                        <div class="modal-field">
                            <label for="enquiry-standard">{"Standard"}</label>
                            <select
                                id="enquiry-standard"
                                onchange={select_field(&form, |f, v| f.standard = v)}
                            >
                                { select_options(STANDARDS, &form.standard) }
                            </select>
                        </div>
                        <div class="modal-field">
                            <label for="enquiry-city">{"City"}</label>
                            <select
                                id="enquiry-city"
                                onchange={select_field(&form, |f, v| f.city = v)}
                            >
                                { select_options(CITIES, &form.city) }
                            </select>
                        </div>
                    </div>

                    <div class="modal-field">
                        <label for="enquiry-message">{"Message"}</label>
                        <textarea
                            id="enquiry-message"
                            rows="4"
                            value={form.message.clone()}
                            oninput={area_field(&form, |f, v| f.message = v)}
                        />
                    </div>

                    <div class="modal-actions">
                        <button
                            type="submit"
                            class="modal-submit"
                            disabled={status.is_submitting()}
                        >
                            {
                                if status.is_submitting() {
                                    html! { <span class="modal-spinner"></span> }
                                } else {
                                    html! { {"Submit"} }
                                }
                            }
                        </button>
                        {
                            match &*status {
                                SubmitStatus::Success(msg) => html! {
                                    <p class="modal-success">{msg.clone()}</p>
                                },
                                SubmitStatus::Failure(msg) => html! {
                                    <p class="modal-error">{msg.clone()}</p>
                                },
                                _ => html! {},
                            }
                        }
                    </div>
                </form>
            </div>
            <style>
                {r#"
                .modal-backdrop {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.4);
                    z-index: 40;
                    animation: modal-fade 0.25s ease;
                }
                .modal-panel {
                    position: fixed;
                    right: 0;
                    top: 0;
                    height: 100vh;
                    width: 60vw;
                    background: #ffffff;
                    z-index: 50;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    padding: 0 2.5rem;
                    animation: modal-slide 0.3s ease;
                    overflow-y: auto;
                }
                .modal-close {
                    position: absolute;
                    left: 0;
                    top: 50%;
                    transform: translate(-100%, -50%);
                    background: #F97316;
                    color: #ffffff;
                    border: none;
                    border-radius: 9999px;
                    padding: 0.6rem 0.8rem;
                    font-size: 1rem;
                    cursor: pointer;
                }
                .modal-title {
                    text-align: center;
                    font-size: 1.9rem;
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                }
                .modal-title span {
                    color: #1B2B6B;
                }
                .modal-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .modal-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }
                .modal-field {
                    display: flex;
                    flex-direction: column;
                    gap: 0.35rem;
                }
                .modal-field label {
                    font-size: 0.85rem;
                    font-weight: 600;
                    color: #1B2B6B;
                }
                .modal-field input,
                .modal-field select,
                .modal-field textarea {
                    border: 1px solid #9CA3AF;
                    border-radius: 0.5rem;
                    padding: 0.55rem 0.75rem;
                    font: inherit;
                    font-size: 0.9rem;
                    color: #111827;
                    background: #ffffff;
                    outline: none;
                    transition: border-color 0.2s ease;
                }
                .modal-field input:focus,
                .modal-field select:focus,
                .modal-field textarea:focus {
                    border-color: #374151;
                }
                .modal-field textarea {
                    min-height: 80px;
                    resize: vertical;
                }
                .modal-actions {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.5rem;
                }
                .modal-submit {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    background: #2563EB;
                    color: #ffffff;
                    font-weight: 600;
                    padding: 0.75rem 2rem;
                    min-width: 9rem;
                    border: none;
                    border-radius: 9999px;
                    cursor: pointer;
                }
                .modal-submit:disabled {
                    opacity: 0.7;
                    cursor: wait;
                }
                .modal-spinner {
                    width: 1.1rem;
                    height: 1.1rem;
                    border: 2px solid rgba(255, 255, 255, 0.4);
                    border-top-color: #ffffff;
                    border-radius: 50%;
                    animation: modal-spin 0.7s linear infinite;
                }
                .modal-success {
                    color: #16A34A;
                    font-weight: 500;
                }
                .modal-error {
                    color: #DC2626;
                    font-weight: 500;
                }
                @keyframes modal-fade {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                @keyframes modal-slide {
                    from { transform: translateX(100%); }
                    to { transform: translateX(0); }
                }
                @keyframes modal-spin {
                    to { transform: rotate(360deg); }
                }
                @media (max-width: 768px) {
                    .modal-panel {
                        width: 100vw;
                        padding: 0 1.5rem;
                    }
                    .modal-close {
                        transform: none;
                        left: auto;
                        right: 1rem;
                        top: 1rem;
                        border-radius: 9999px;
                    }
                    .modal-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </>
    }
}
