use yew::prelude::*;
use crate::config;

#[function_component(WhatsAppButton)]
pub fn whatsapp_button() -> Html {
    html! {
        <>
            <a
                href={format!("https://wa.me/{}", config::WHATSAPP_NUMBER)}
                target="_blank"
                rel="noopener noreferrer"
                class="whatsapp-button"
                aria-label="Chat with us on WhatsApp"
            >
                {"💬"}
            </a>
            <style>
                {r#"
                .whatsapp-button {
                    position: fixed;
                    bottom: 1.5rem;
                    right: 1.5rem;
                    z-index: 40;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    background: #25D366;
                    font-size: 1.25rem;
                    text-decoration: none;
                    box-shadow: 0 10px 24px rgba(0, 0, 0, 0.18);
                    animation: whatsapp-pop 0.4s ease;
                    transition: transform 0.2s ease;
                }
                .whatsapp-button:hover {
                    transform: scale(1.1);
                }
                .whatsapp-button:active {
                    transform: scale(0.92);
                }
                @keyframes whatsapp-pop {
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
        </>
    }
}
