use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::call_button::CallButton;
use crate::components::enquire_modal::EnquireModal;
use crate::components::enquire_tab::EnquireTab;
use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::whatsapp_button::WhatsAppButton;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let modal_open = use_state(|| false);

    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let open_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: ()| {
            modal_open.set(true);
        })
    };

    let close_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: ()| {
            modal_open.set(false);
        })
    };

    html! {
        <div class="page">
            <Navbar on_enquire={open_modal.clone()} />
            <main class="not-found">
                <span class="not-found-code">{"404"}</span>
                <h1>{"Page Not Found"}</h1>
                <p>{"The page you are looking for does not exist or has been moved."}</p>
                <Link<Route> to={Route::Home} classes="not-found-home">
                    {"Back to Home"}
                </Link<Route>>
            </main>
            <Footer />
            <EnquireTab on_click={open_modal} />
            <EnquireModal is_open={*modal_open} on_close={close_modal} />
            <WhatsAppButton />
            <CallButton />
            <style>
                {r#"
                .not-found {
                    min-height: 70vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    text-align: center;
                    background: #F9FAFB;
                    padding: 8rem 2rem 4rem;
                }
                .not-found-code {
                    font-size: 6rem;
                    font-weight: 700;
                    color: #F97316;
                    line-height: 1;
                }
                .not-found h1 {
                    font-size: 2rem;
                    font-weight: 700;
                    color: #1B2B6B;
                }
                .not-found p {
                    color: #64748B;
                }
                .not-found-home {
                    margin-top: 1rem;
                    background: #1B2B6B;
                    color: #ffffff;
                    font-weight: 600;
                    text-decoration: none;
                    padding: 0.75rem 1.75rem;
                    border-radius: 9999px;
                    transition: transform 0.2s ease;
                }
                .not-found-home:hover {
                    transform: scale(1.05);
                }
                "#}
            </style>
        </div>
    }
}
