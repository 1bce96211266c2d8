use yew::prelude::*;
use crate::config;

#[function_component(CallButton)]
pub fn call_button() -> Html {
    html! {
        <div class="call-button-wrap">
            <span class="call-label">{"Call us"}</span>
            <a
                href={format!("tel:{}", config::CONTACT_PHONE)}
                class="call-button"
                aria-label="Call Rise N Shine Coaching"
            >
                {"📞"}
            </a>
            <style>
                {r#"
                .call-button-wrap {
                    position: fixed;
                    bottom: 6rem;
                    right: 1.5rem;
                    z-index: 40;
                }
                .call-button {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    background: #F97316;
                    font-size: 1.25rem;
                    text-decoration: none;
                    box-shadow: 0 10px 24px rgba(0, 0, 0, 0.18);
                    animation: call-pop 0.4s ease;
                    transition: transform 0.2s ease;
                }
                .call-button:hover {
                    transform: scale(1.1);
                }
                .call-button:active {
                    transform: scale(0.92);
                }
                .call-label {
                    position: absolute;
                    right: 4rem;
                    bottom: 0.75rem;
                    background: #ffffff;
                    color: #1F2937;
                    font-size: 0.85rem;
                    font-weight: 700;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.12);
                    white-space: nowrap;
                    pointer-events: none;
                    opacity: 0;
                    transition: opacity 0.2s ease;
                }
                .call-button-wrap:hover .call-label {
                    opacity: 1;
                }
                @keyframes call-pop {
                    from {
                        opacity: 0;
                        transform: scale(0);
                    }
                    to {
                        opacity: 1;
                        transform: scale(1);
                    }
                }
                "#}
            </style>
        </div>
    }
}
