use yew::prelude::*;

use crate::components::call_button::CallButton;
use crate::components::enquire_modal::EnquireModal;
use crate::components::enquire_tab::EnquireTab;
use crate::components::footer::Footer;
use crate::components::map_section::MapSection;
use crate::components::navbar::Navbar;
use crate::components::offers::{CourseCard, OFFERINGS};
use crate::components::whatsapp_button::WhatsAppButton;

#[function_component(Courses)]
pub fn courses() -> Html {
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
            <main class="courses-main">
                <div class="courses-heading">
                    <span class="courses-badge">{"All Programs"}</span>
                    <h1>{"Our Courses & Programs"}</h1>
                    <p>{"Explore our comprehensive range of coaching programs for Class 1 to Class 10."}</p>
                </div>

                <div class="courses-grid">
                    {
                        OFFERINGS.iter().map(|offering| html! {
                            <CourseCard {offering} on_enquire={open_modal.clone()} />
                        }).collect::<Html>()
                    }
                </div>

                <MapSection />
            </main>
            <Footer />
            <EnquireTab on_click={open_modal} />
            <EnquireModal is_open={*modal_open} on_close={close_modal} />
            <WhatsAppButton />
            <CallButton />
            <style>
                {r#"
                .courses-main {
                    padding-top: 7rem;
                    background: #F9FAFB;
                }
                .courses-heading {
                    max-width: 80rem;
                    margin: 0 auto;
                    text-align: center;
                    padding: 2rem 1.5rem 3rem;
                }
                .courses-badge {
                    display: inline-block;
                    background: rgba(249, 115, 22, 0.1);
                    color: #F97316;
                    font-weight: 600;
                    font-size: 0.85rem;
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    margin-bottom: 1rem;
                }
                .courses-heading h1 {
                    font-size: 2.5rem;
                    font-weight: 700;
                    color: #1B2B6B;
                    margin-bottom: 0.75rem;
                }
                .courses-heading p {
                    color: #64748B;
                    max-width: 36rem;
                    margin: 0 auto;
                }
                .courses-grid {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    padding: 0 1.5rem 5rem;
                }
                @media (max-width: 992px) {
                    .courses-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                @media (max-width: 640px) {
                    .courses-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
