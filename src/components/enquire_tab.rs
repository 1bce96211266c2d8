use yew::prelude::*;
use web_sys::MouseEvent;

#[derive(Properties, PartialEq)]
pub struct EnquireTabProps {
    pub on_click: Callback<()>,
}

// Vertical "Enquire Now" tab pinned to the right edge, sliding in after a
// short delay.
#[function_component(EnquireTab)]
pub fn enquire_tab(props: &EnquireTabProps) -> Html {
    let onclick = {
        let on_click = props.on_click.clone();
        Callback::from(move |_: MouseEvent| {
            on_click.emit(());
        })
    };

    html! {
        <>
            <button class="enquire-tab" {onclick} aria-label="Enquire Now">
                {"Enquire Now"}
            </button>
            <style>
                {r#"
                .enquire-tab {
                    position: fixed;
                    right: 0;
                    top: 50%;
                    z-index: 40;
                    background: #F97316;
                    color: #ffffff;
                    font-weight: 700;
                    font-size: 0.95rem;
                    padding: 1rem 0.75rem;
                    border: 2px solid transparent;
                    border-radius: 1rem 0 0 1rem;
                    box-shadow: 0 10px 24px rgba(0, 0, 0, 0.15);
                    cursor: pointer;
                    writing-mode: vertical-rl;
                    text-orientation: mixed;
                    transform: translateY(-50%) rotate(180deg);
                    opacity: 0;
                    animation: tab-slide-in 0.5s ease-out 1.5s forwards;
                    transition: background-color 0.25s, color 0.25s, border-color 0.25s;
                }
                .enquire-tab:hover {
                    background: #ffffff;
                    color: #F97316;
                    border-color: #F97316;
                }
                .enquire-tab:active {
                    transform: translateY(-50%) rotate(180deg) scale(0.96);
                }
                @keyframes tab-slide-in {
                    from {
                        opacity: 0;
                        transform: translateX(80px) translateY(-50%) rotate(180deg);
                    }
                    to {
                        opacity: 1;
                        transform: translateX(0) translateY(-50%) rotate(180deg);
                    }
                }
                "#}
            </style>
        </>
    }
}
