use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use gloo_timers::callback::Timeout;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub on_enquire: Callback<()>,
}

fn scroll_to_results() {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(section) = document.get_element_by_id("results") {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            options.set_block(web_sys::ScrollLogicalPosition::Start);
            section.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let navigator = use_navigator().unwrap();
    let route = use_route::<Route>();

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > 50);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let go_home = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            navigator.push(&Route::Home);
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
        })
    };

    // Results lives on the home page; from anywhere else we go there first
    // and scroll once the home sections have rendered.
    let go_results = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if matches!(route, Some(Route::Home)) {
                scroll_to_results();
            } else {
                navigator.push(&Route::Home);
                Timeout::new(100, scroll_to_results).forget();
            }
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let handle_enquire = {
        let on_enquire = props.on_enquire.clone();
        Callback::from(move |_: MouseEvent| {
            on_enquire.emit(());
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <header class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <nav class="nav-content">
                <div class="nav-logo" onclick={go_home.clone()}>
                    <img
                        src="/assets/images/logo-rise-n-shine.jpeg"
                        alt="Rise N Shine Coaching logo"
                        loading="lazy"
                        decoding="async"
                    />
                    <span>{"Rise N Shine Coaching"}</span>
                </div>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <div class={menu_class}>
                    <button class="nav-link" onclick={
                        let close = close_menu.clone();
                        let go_home = go_home.clone();
                        Callback::from(move |e: MouseEvent| {
                            close.emit(e.clone());
                            go_home.emit(e);
                        })
                    }>
                        {"Home"}
                    </button>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Courses} classes="nav-link">
                            {"Courses"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::About} classes="nav-link">
                            {"About Us"}
                        </Link<Route>>
                    </div>
                    <button class="nav-link" onclick={
                        let close = close_menu.clone();
                        let go_results = go_results.clone();
                        Callback::from(move |e: MouseEvent| {
                            close.emit(e.clone());
                            go_results.emit(e);
                        })
                    }>
                        {"Results"}
                    </button>
                    <button class="nav-cta" onclick={
                        let close = close_menu.clone();
                        let enquire = handle_enquire.clone();
                        Callback::from(move |e: MouseEvent| {
                            close.emit(e.clone());
                            enquire.emit(e);
                        })
                    } aria-label="Contact / Enroll">
                        {"Contact / Enroll"}
                        <span class="nav-cta-arrow">{"→"}</span>
                    </button>
                </div>
            </nav>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: transparent;
                    transition: background-color 0.3s ease, box-shadow 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(255, 255, 255, 0.97);
                    box-shadow: 0 4px 24px rgba(27, 43, 107, 0.08);
                }
                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 1rem 1.5rem;
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    cursor: pointer;
                    transition: transform 0.2s ease;
                }
                .nav-logo:hover {
                    transform: scale(1.04);
                }
                .nav-logo img {
                    height: 56px;
                    width: auto;
                    object-fit: contain;
                }
                .nav-logo span {
                    color: #1B2B6B;
                    font-weight: 700;
                    font-size: 1.05rem;
                    white-space: nowrap;
                }
                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }
                .nav-link {
                    background: none;
                    border: none;
                    padding: 0;
                    font: inherit;
                    font-size: 0.9rem;
                    font-weight: 500;
                    color: #1B2B6B;
                    cursor: pointer;
                    position: relative;
                    text-decoration: none;
                }
                .nav-link::after {
                    content: '';
                    position: absolute;
                    left: 0;
                    bottom: -4px;
                    height: 2px;
                    width: 100%;
                    background: #F97316;
                    transform: scaleX(0);
                    transform-origin: left;
                    transition: transform 0.25s ease;
                }
                .nav-link:hover::after {
                    transform: scaleX(1);
                }
                .nav-cta {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    background: #F97316;
                    color: #fff;
                    font-weight: 600;
                    font-size: 0.9rem;
                    padding: 0.65rem 1.5rem;
                    border: none;
                    border-radius: 9999px;
                    cursor: pointer;
                    transition: transform 0.2s ease;
                }
                .nav-cta:hover {
                    transform: scale(1.05);
                }
                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 4px;
                }
                .burger-menu span {
                    display: block;
                    width: 24px;
                    height: 2px;
                    background: #1B2B6B;
                    margin: 5px 0;
                    transition: transform 0.3s ease;
                }
                @media (max-width: 992px) {
                    .burger-menu {
                        display: block;
                    }
                    .nav-right {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        background: #ffffff;
                        border-top: 1px solid #E5E7EB;
                        flex-direction: column;
                        align-items: flex-start;
                        gap: 1.25rem;
                        padding: 1.5rem;
                        box-shadow: 0 12px 24px rgba(27, 43, 107, 0.08);
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                    }
                    .nav-cta {
                        width: 100%;
                        justify-content: center;
                    }
                }
                "#}
            </style>
        </header>
    }
}
