use std::cell::Cell;
use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::{HtmlElement, MouseEvent};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use gloo_timers::callback::Timeout;

use crate::components::call_button::CallButton;
use crate::components::enquire_modal::EnquireModal;
use crate::components::enquire_tab::EnquireTab;
use crate::components::footer::Footer;
use crate::components::map_section::MapSection;
use crate::components::navbar::Navbar;
use crate::components::offers::OffersSection;
use crate::components::whatsapp_button::WhatsAppButton;
use crate::Route;

const HERO_IMAGES: &[&str] = &[
    "/assets/images/hero-education.jpeg",
    "/assets/images/Interact.jpeg",
];

#[derive(Properties, PartialEq)]
struct HeroSectionProps {
    on_enroll: Callback<()>,
}

#[function_component(HeroSection)]
fn hero_section(props: &HeroSectionProps) -> Html {
    let active_image = use_state(|| 0usize);
    let navigator = use_navigator().unwrap();

    // The two classroom photos alternate every four seconds; each flip
    // schedules the next one.
    {
        let active_handle = active_image.clone();
        use_effect_with_deps(
            move |current| {
                let next = if *current == 0 { 1 } else { 0 };
                let timeout = Timeout::new(4_000, move || {
                    active_handle.set(next);
                });
                move || drop(timeout)
            },
            *active_image,
        );
    }

    let on_enroll = {
        let on_enroll = props.on_enroll.clone();
        Callback::from(move |_: MouseEvent| {
            on_enroll.emit(());
        })
    };

    let explore_courses = {
        Callback::from(move |_: MouseEvent| {
            navigator.push(&Route::Courses);
        })
    };

    html! {
        <section id="home" class="hero-section">
            <div class="hero-content">
                <div class="hero-copy">
                    <span class="hero-badge">{"✨ Trusted Coaching in Narhe"}</span>
                    <h1>
                        {"Empowering Young Minds."}
                        <span>{"Shaping Academic Excellence."}</span>
                    </h1>
                    <p class="hero-sub">
                        {"Personalized Coaching for 1st–10th Students"}
                        <br />
                        {"SSC & CBSE | English & Marathi Medium"}
                    </p>
                    <div class="hero-actions">
                        <button class="hero-enroll" onclick={on_enroll}>
                            {"Enroll Now"}
                            <span class="hero-arrow">{"→"}</span>
                        </button>
                        <button class="hero-explore" onclick={explore_courses}>
                            {"Explore Courses"}
                        </button>
                    </div>
                    <div class="hero-proof">
                        <div class="hero-avatars">
                            {
                                (1..=4).map(|i| html! {
                                    <img
                                        src={format!("https://placehold.co/32x32/E0E7FF/1B2B6B?text={}", i)}
                                        alt={format!("Student {}", i)}
                                    />
                                }).collect::<Html>()
                            }
                        </div>
                        <span>{"500+ Happy Students"}</span>
                    </div>
                </div>

                <div class="hero-visual">
                    <div class="hero-blob"></div>
                    <div class="hero-photos">
                        {
                            HERO_IMAGES.iter().enumerate().map(|(i, src)| html! {
                                <img
                                    src={*src}
                                    alt="Hero classroom"
                                    decoding="async"
                                    class={classes!(
                                        "hero-photo",
                                        (*active_image == i).then(|| "visible")
                                    )}
                                />
                            }).collect::<Html>()
                        }
                    </div>
                    <div class="hero-float hero-float-check">
                        {"✅ "}
                        <span>
                            {
                                if *active_image == 0 {
                                    "Small Batches"
                                } else {
                                    "Regular Tests & Tracking"
                                }
                            }
                        </span>
                    </div>
                    <div class="hero-float hero-float-trophy">
                        {"🏆 "}
                        <span>
                            {
                                if *active_image == 0 {
                                    "Individual Attention"
                                } else {
                                    "Friendly Environment"
                                }
                            }
                        </span>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .hero-section {
                    min-height: 100vh;
                    background: linear-gradient(135deg, #F4F5FF, #F9FAFB);
                    overflow: hidden;
                }
                .hero-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                    padding: 8rem 1.5rem 7rem;
                }
                .hero-copy {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    position: relative;
                    z-index: 10;
                }
                .hero-badge {
                    align-self: flex-start;
                    background: rgba(249, 115, 22, 0.1);
                    color: #F97316;
                    font-weight: 600;
                    font-size: 0.85rem;
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                }
                .hero-copy h1 {
                    font-size: 3rem;
                    font-weight: 500;
                    color: #1B2B6B;
                    line-height: 1.15;
                    max-width: 36rem;
                }
                .hero-copy h1 span {
                    display: block;
                    color: #16A34A;
                    margin-top: 0.5rem;
                }
                .hero-sub {
                    color: #64748B;
                    font-size: 1.1rem;
                    line-height: 1.6;
                }
                .hero-actions {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                }
                .hero-enroll {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    background: #1B2B6B;
                    color: #ffffff;
                    font-weight: 600;
                    padding: 0.75rem 1.75rem;
                    border: none;
                    border-radius: 9999px;
                    cursor: pointer;
                    transition: transform 0.2s ease;
                }
                .hero-enroll:hover {
                    transform: scale(1.05);
                }
                .hero-enroll:hover .hero-arrow {
                    transform: translateX(5px);
                }
                .hero-arrow {
                    display: inline-block;
                    transition: transform 0.2s ease;
                }
                .hero-explore {
                    background: transparent;
                    color: #1B2B6B;
                    font-weight: 600;
                    padding: 0.75rem 1.75rem;
                    border: 2px solid #1B2B6B;
                    border-radius: 9999px;
                    cursor: pointer;
                    transition: transform 0.2s ease;
                }
                .hero-explore:hover {
                    transform: scale(1.05);
                }
                .hero-proof {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-top: 0.5rem;
                }
                .hero-avatars {
                    display: flex;
                }
                .hero-avatars img {
                    width: 2rem;
                    height: 2rem;
                    border-radius: 50%;
                    border: 2px solid #ffffff;
                    object-fit: cover;
                }
                .hero-avatars img + img {
                    margin-left: -0.5rem;
                }
                .hero-proof span {
                    font-size: 0.875rem;
                    font-weight: 700;
                    color: #1B2B6B;
                }
                .hero-visual {
                    position: relative;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .hero-blob {
                    position: absolute;
                    width: 20rem;
                    height: 20rem;
                    background: #DBEAFE;
                    opacity: 0.7;
                    filter: blur(4px);
                    border-radius: 45% 55% 60% 40%;
                    animation: hero-blob-pulse 6s ease-in-out infinite;
                }
                .hero-photos {
                    position: relative;
                    width: 100%;
                    height: 480px;
                    border-radius: 1rem;
                    overflow: hidden;
                }
                .hero-photo {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    opacity: 0;
                    transition: opacity 0.6s ease;
                }
                .hero-photo.visible {
                    opacity: 1;
                }
                .hero-float {
                    position: absolute;
                    z-index: 20;
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    border-radius: 0.75rem;
                    box-shadow: 0 10px 24px rgba(0, 0, 0, 0.12);
                    padding: 0.75rem;
                    font-size: 0.875rem;
                    font-weight: 700;
                    animation: hero-float 3s ease-in-out infinite;
                }
                .hero-float-check {
                    top: 1.5rem;
                    left: -1rem;
                    background: #ffffff;
                    color: #1B2B6B;
                }
                .hero-float-trophy {
                    bottom: 2rem;
                    right: -1rem;
                    background: #F97316;
                    color: #ffffff;
                    animation-delay: 1.2s;
                }
                @keyframes hero-float {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(-8px); }
                }
                @keyframes hero-blob-pulse {
                    0%, 100% { transform: scale(1); }
                    50% { transform: scale(1.08); }
                }
                @media (max-width: 992px) {
                    .hero-content {
                        grid-template-columns: 1fr;
                        padding-top: 7rem;
                    }
                    .hero-copy h1 {
                        font-size: 2.25rem;
                    }
                    .hero-photos {
                        height: 400px;
                    }
                    .hero-float-check {
                        left: 0;
                    }
                    .hero-float-trophy {
                        right: 0;
                    }
                }
                "#}
            </style>
        </section>
    }
}

const STUDENT_TILES: &[(&str, &str)] = &[
    ("/assets/images/st1.png", "#F97316"),
    ("/assets/images/st2.png", "#7C3AED"),
    ("/assets/images/st3.png", "#16A34A"),
    ("/assets/images/st4.png", "#EF4444"),
    ("/assets/images/st5.png", "#EAB308"),
    ("/assets/images/st6.png", "#7C3AED"),
    ("/assets/images/st7.png", "#F97316"),
    ("/assets/images/st8.png", "#16A34A"),
    ("/assets/images/st9.png", "#EF4444"),
    ("/assets/images/st10.png", "#EAB308"),
    ("/assets/images/st11.png", "#7C3AED"),
    ("/assets/images/st12.png", "#F97316"),
    ("/assets/images/st13.png", "#16A34A"),
    ("/assets/images/st14.png", "#EF4444"),
    ("/assets/images/st15.png", "#EAB308"),
    ("/assets/images/st16.png", "#7C3AED"),
    ("/assets/images/st17.png", "#F97316"),
];

// Endless marquee of student portraits. The tile list is rendered twice and
// the track animates to -50%, so the loop restarts seamlessly.
#[function_component(StudentSlider)]
fn student_slider() -> Html {
    html! {
        <section class="student-slider">
            <div class="slider-track">
                {
                    STUDENT_TILES.iter().chain(STUDENT_TILES.iter()).map(|(img, bg)| html! {
                        <div class="slider-tile" style={format!("background-color: {};", bg)}>
                            <img
                                src={*img}
                                alt="Student"
                                loading="lazy"
                                decoding="async"
                            />
                        </div>
                    }).collect::<Html>()
                }
            </div>
            <style>
                {r#"
                .student-slider {
                    width: 100%;
                    padding: 3rem 0;
                    overflow: hidden;
                    background: #F8F9FF;
                }
                .slider-track {
                    display: flex;
                    gap: 1rem;
                    width: max-content;
                    padding: 32px 0 16px;
                    animation: slider-scroll 26s linear infinite;
                }
                .student-slider:hover .slider-track {
                    animation-play-state: paused;
                }
                .slider-tile {
                    position: relative;
                    flex-shrink: 0;
                    width: 170px;
                    height: 210px;
                    border-radius: 20px;
                }
                .slider-tile img {
                    position: absolute;
                    bottom: 0;
                    left: 50%;
                    transform: translateX(-50%);
                    width: 160px;
                    height: 230px;
                    object-fit: cover;
                    object-position: top center;
                    filter: grayscale(100%);
                    border-radius: 0 0 16px 16px;
                }
                @keyframes slider-scroll {
                    from { transform: translateX(0); }
                    to { transform: translateX(-50%); }
                }
                "#}
            </style>
        </section>
    }
}

const LEGACY_STATS: &[(u32, &str, &str)] = &[
    (15, "Students / Batch", ""),
    (500, "Happy Students", "+"),
    (10, "Subjects", "+"),
];

#[derive(Properties, PartialEq)]
struct StatBlockProps {
    end: u32,
    label: &'static str,
    suffix: &'static str,
}

#[function_component(StatBlock)]
fn stat_block(props: &StatBlockProps) -> Html {
    let value = use_state(|| 0u32);
    let started = use_state(|| false);
    let block_ref = use_node_ref();

    // Fire the count-up once, the first time the block scrolls into view.
    {
        let started = started.clone();
        let block_ref = block_ref.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let check_window = window.clone();
                let fired = Rc::new(Cell::new(false));

                let run_check = {
                    let fired = fired.clone();
                    move || {
                        if fired.get() {
                            return;
                        }
                        if let Some(element) = block_ref.cast::<HtmlElement>() {
                            let viewport = check_window
                                .inner_height()
                                .ok()
                                .and_then(|h| h.as_f64())
                                .unwrap_or(800.0);
                            let rect = element.get_bounding_client_rect();
                            if rect.top() < viewport - 40.0 {
                                fired.set(true);
                                started.set(true);
                            }
                        }
                    }
                };

                run_check();

                let scroll_callback = Closure::wrap(Box::new(run_check) as Box<dyn FnMut()>);
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

    // Each tick schedules the next until the target is reached.
    {
        let value_handle = value.clone();
        let end = props.end;
        use_effect_with_deps(
            move |(running, current)| {
                let mut timeout = None;
                if *running && *current < end {
                    let step = (end / 25).max(1);
                    let current = *current;
                    timeout = Some(Timeout::new(80, move || {
                        value_handle.set((current + step).min(end));
                    }));
                }
                move || drop(timeout)
            },
            (*started, *value),
        );
    }

    html! {
        <div class="stat-block" ref={block_ref}>
            <div class="stat-value">{format!("{}{}", *value, props.suffix)}</div>
            <div class="stat-label">{props.label}</div>
        </div>
    }
}

#[function_component(LegacySection)]
fn legacy_section() -> Html {
    let navigator = use_navigator().unwrap();

    let learn_more = {
        Callback::from(move |_: MouseEvent| {
            navigator.push(&Route::About);
        })
    };

    html! {
        <section id="about-us" class="legacy-section">
            <div class="legacy-card">
                <div class="legacy-grid">
                    <div class="legacy-copy">
                        <span class="legacy-badge">{"About Us"}</span>
                        <h2>
                            {"Where Every Student"}
                            <br />
                            <span>{"Gets Personal Attention"}</span>
                        </h2>
                        <p>
                            {"Located in Narhe, our coaching institute believes in quality over \
                              quantity. With a small batch size of just 15 students, we ensure \
                              every child receives individual attention, concept-based teaching, \
                              and a friendly learning environment. Our experienced teachers focus \
                              on building strong foundations and academic confidence."}
                        </p>
                        <div class="legacy-stats">
                            {
                                LEGACY_STATS.iter().map(|&(end, label, suffix)| html! {
                                    <StatBlock {end} {label} {suffix} />
                                }).collect::<Html>()
                            }
                        </div>
                        <button class="legacy-more" onclick={learn_more} aria-label="Learn More About Us">
                            {"Learn More About Us →"}
                        </button>
                    </div>
                    <div class="legacy-visual">
                        <img
                            src="/assets/images/student-class.webp"
                            alt="Students in classroom"
                            loading="lazy"
                            decoding="async"
                        />
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .legacy-section {
                    padding: 6rem 1.5rem;
                    background: #ffffff;
                }
                .legacy-card {
                    max-width: 80rem;
                    margin: 0 auto;
                    border-radius: 1.5rem;
                    background: #FBF7F0;
                    box-shadow: 0 12px 32px rgba(27, 43, 107, 0.08);
                    padding: 4rem;
                }
                .legacy-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }
                .legacy-copy {
                    display: flex;
                    flex-direction: column;
                    gap: 1.25rem;
                }
                .legacy-badge {
                    align-self: flex-start;
                    background: rgba(249, 115, 22, 0.1);
                    color: #F97316;
                    font-weight: 600;
                    font-size: 0.85rem;
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                }
                .legacy-copy h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #1B2B6B;
                    line-height: 1.2;
                }
                .legacy-copy h2 span {
                    color: #F97316;
                }
                .legacy-copy p {
                    color: #64748B;
                    line-height: 1.7;
                }
                .legacy-stats {
                    display: flex;
                    gap: 2rem;
                    margin-top: 1rem;
                }
                .stat-block {
                    text-align: center;
                }
                .stat-value {
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #1B2B6B;
                }
                .stat-label {
                    font-size: 0.875rem;
                    color: #64748B;
                    margin-top: 0.25rem;
                }
                .legacy-more {
                    align-self: flex-start;
                    margin-top: 1rem;
                    background: #1B2B6B;
                    color: #ffffff;
                    font-weight: 600;
                    padding: 0.75rem 1.75rem;
                    border: none;
                    border-radius: 9999px;
                    cursor: pointer;
                    transition: transform 0.2s ease;
                }
                .legacy-more:hover {
                    transform: scale(1.05);
                }
                .legacy-visual img {
                    width: 100%;
                    height: 400px;
                    object-fit: cover;
                    border-radius: 1rem;
                    box-shadow: 0 16px 40px rgba(27, 43, 107, 0.14);
                }
                @media (max-width: 992px) {
                    .legacy-card {
                        padding: 2.5rem;
                    }
                    .legacy-grid {
                        grid-template-columns: 1fr;
                    }
                    .legacy-visual img {
                        height: 350px;
                    }
                }
                "#}
            </style>
        </section>
    }
}

const TRUST_POINTS: &[(&str, &str)] = &[
    ("👥", "Small Batch Size (15 Students)"),
    ("🤝", "Individual Attention"),
    ("📋", "Regular Tests & Tracking"),
    ("😊", "Friendly Environment"),
    ("💡", "Concept-Based Teaching"),
];

#[function_component(TrustStrip)]
fn trust_strip() -> Html {
    html! {
        <section class="trust-strip">
            <div class="trust-row">
                {
                    TRUST_POINTS.iter().map(|(icon, label)| html! {
                        <div class="trust-pill">
                            <span class="trust-icon">{*icon}</span>
                            <span class="trust-label">{*label}</span>
                        </div>
                    }).collect::<Html>()
                }
            </div>
            <style>
                {r#"
                .trust-strip {
                    padding: 3rem 1.5rem;
                    background: #F4F5FF;
                }
                .trust-row {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1.5rem;
                }
                .trust-pill {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    background: #ffffff;
                    border-radius: 9999px;
                    padding: 0.75rem 1.25rem;
                    box-shadow: 0 8px 24px rgba(27, 43, 107, 0.06);
                }
                .trust-icon {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    background: rgba(249, 115, 22, 0.1);
                    font-size: 1.1rem;
                    flex-shrink: 0;
                }
                .trust-label {
                    font-size: 0.875rem;
                    font-weight: 600;
                    color: #1B2B6B;
                    white-space: nowrap;
                }
                "#}
            </style>
        </section>
    }
}

const TESTIMONIAL_VIDEOS: &[&str] = &["dQw4w9WgXcQ", "ysz5S6PUM-U", "tgbNymZ7vqY", "jNQXAC9IVRw"];

#[function_component(TestimonialsSection)]
fn testimonials_section() -> Html {
    let active = use_state(|| 0usize);
    let paused = use_state(|| false);

    let count = TESTIMONIAL_VIDEOS.len();
    let prev_index = (*active + count - 1) % count;
    let next_index = (*active + 1) % count;

    // Auto-advance every five seconds unless the pointer is over the slider.
    {
        let active_handle = active.clone();
        use_effect_with_deps(
            move |(current, is_paused)| {
                let mut timeout = None;
                if !*is_paused {
                    let next = (*current + 1) % TESTIMONIAL_VIDEOS.len();
                    timeout = Some(Timeout::new(5_000, move || {
                        active_handle.set(next);
                    }));
                }
                move || drop(timeout)
            },
            (*active, *paused),
        );
    }

    let go_prev = {
        let active = active.clone();
        Callback::from(move |_: MouseEvent| {
            active.set(prev_index);
        })
    };

    let go_next = {
        let active = active.clone();
        Callback::from(move |_: MouseEvent| {
            active.set(next_index);
        })
    };

    let pause = {
        let paused = paused.clone();
        Callback::from(move |_: MouseEvent| {
            paused.set(true);
        })
    };

    let resume = {
        let paused = paused.clone();
        Callback::from(move |_: MouseEvent| {
            paused.set(false);
        })
    };

    html! {
        <section class="testi-section">
            <div class="testi-content">
                <div class="testi-heading">
                    <span class="testi-badge">{"Student Stories"}</span>
                    <h2>{"What Our Students & Parents Say"}</h2>
                    <p>
                        {"Real experiences shared by our students and parents that reflect \
                          the impact of our coaching and mentorship."}
                    </p>
                </div>

                <div class="testi-slider" onmouseenter={pause} onmouseleave={resume}>
                    <button class="testi-arrow testi-arrow-left" onclick={go_prev} aria-label="Previous video">
                        {"‹"}
                    </button>

                    <div class="testi-side">
                        <iframe
                            src={format!(
                                "https://www.youtube.com/embed/{}?mute=1",
                                TESTIMONIAL_VIDEOS[prev_index]
                            )}
                            allow="autoplay; encrypted-media"
                        />
                    </div>

                    <div class="testi-main">
                        <iframe
                            src={format!(
                                "https://www.youtube.com/embed/{id}?autoplay=1&mute=1&loop=1&playlist={id}",
                                id = TESTIMONIAL_VIDEOS[*active]
                            )}
                            allow="autoplay; encrypted-media"
                            allowfullscreen=true
                        />
                    </div>

                    <div class="testi-side">
                        <iframe
                            src={format!(
                                "https://www.youtube.com/embed/{}?mute=1",
                                TESTIMONIAL_VIDEOS[next_index]
                            )}
                            allow="autoplay; encrypted-media"
                        />
                    </div>

                    <button class="testi-arrow testi-arrow-right" onclick={go_next} aria-label="Next video">
                        {"›"}
                    </button>
                </div>

                <div class="testi-dots">
                    {
                        (0..count).map(|i| {
                            let active_handle = active.clone();
                            let onclick = Callback::from(move |_: MouseEvent| {
                                active_handle.set(i);
                            });
                            html! {
                                <button
                                    class={classes!("testi-dot", (*active == i).then(|| "active"))}
                                    {onclick}
                                    aria-label={format!("Show video {}", i + 1)}
                                />
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
            <style>
                {r#"
                .testi-section {
                    padding: 6rem 1.5rem;
                    background: #F4F5FF;
                }
                .testi-content {
                    max-width: 72rem;
                    margin: 0 auto;
                }
                .testi-heading {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .testi-badge {
                    display: inline-block;
                    background: rgba(249, 115, 22, 0.1);
                    color: #F97316;
                    font-weight: 600;
                    font-size: 0.85rem;
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    margin-bottom: 1rem;
                }
                .testi-heading h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #1B2B6B;
                    margin-bottom: 0.75rem;
                }
                .testi-heading p {
                    color: #64748B;
                    max-width: 36rem;
                    margin: 0 auto;
                }
                .testi-slider {
                    position: relative;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                }
                .testi-side {
                    width: 22%;
                    opacity: 0.6;
                    transform: scale(0.9);
                }
                .testi-main {
                    width: 52%;
                    animation: testi-pop 0.25s ease;
                }
                .testi-side iframe,
                .testi-main iframe {
                    width: 100%;
                    aspect-ratio: 16 / 9;
                    border: 0;
                    border-radius: 0.75rem;
                }
                .testi-main iframe {
                    border-radius: 1rem;
                    box-shadow: 0 16px 40px rgba(27, 43, 107, 0.14);
                }
                .testi-arrow {
                    position: absolute;
                    z-index: 20;
                    background: #ffffff;
                    color: #1B2B6B;
                    border: none;
                    border-radius: 50%;
                    width: 2.5rem;
                    height: 2.5rem;
                    font-size: 1.4rem;
                    line-height: 1;
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.12);
                    cursor: pointer;
                }
                .testi-arrow-left {
                    left: 0;
                }
                .testi-arrow-right {
                    right: 0;
                }
                .testi-dots {
                    display: flex;
                    justify-content: center;
                    gap: 0.75rem;
                    margin-top: 1.5rem;
                }
                .testi-dot {
                    width: 0.75rem;
                    height: 0.75rem;
                    border-radius: 50%;
                    border: none;
                    background: rgba(27, 43, 107, 0.3);
                    cursor: pointer;
                    transition: transform 0.2s ease, background 0.2s ease;
                }
                .testi-dot.active {
                    background: #1B2B6B;
                    transform: scale(1.25);
                }
                @keyframes testi-pop {
                    from { transform: scale(0.95); }
                    to { transform: scale(1); }
                }
                @media (max-width: 768px) {
                    .testi-side {
                        display: none;
                    }
                    .testi-main {
                        width: 100%;
                    }
                }
                "#}
            </style>
        </section>
    }
}

const TOPPERS: &[(&str, &str, &str)] = &[
    ("Anushree Kumar", "7th • 96%", "/assets/images/Toppers/T1.jpeg"),
    ("Sharvil Chorghe", "7th • 95%", "/assets/images/Toppers/T2.jpeg"),
    ("Anveera Upadhye", "7th • 97%", "/assets/images/Toppers/T3.jpeg"),
    ("Samiksha Bhoite", "7th • 75%", "/assets/images/Toppers/T4.jpeg"),
    ("Soham Dhule", "9th • 95%", "/assets/images/Toppers/T5.jpeg"),
    ("Arjun Nigde", "9th • 85%", "/assets/images/Toppers/T6.jpeg"),
    ("Gauravi Khanvilkar", "8th • 80%", "/assets/images/Toppers/T7.jpeg"),
];

#[function_component(ToppersSection)]
fn toppers_section() -> Html {
    html! {
        <section id="results" class="toppers-section">
            <div class="toppers-content">
                <div class="toppers-heading">
                    <span class="toppers-badge">{"Hall of Fame"}</span>
                    <h2>{"Meet Our Toppers"}</h2>
                    <p>{"Celebrating the achievements of our students who excelled with dedication and guidance."}</p>
                </div>

                <div class="toppers-grid">
                    {
                        TOPPERS.iter().map(|(name, result, avatar)| html! {
                            <div class="topper-card">
                                <div class="topper-frame">
                                    <img
                                        src={*avatar}
                                        alt={*name}
                                        loading="lazy"
                                        decoding="async"
                                    />
                                </div>
                                <p class="topper-name">{*name}</p>
                                <p class="topper-result">{*result}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
            <style>
                {r#"
                .toppers-section {
                    padding: 6rem 1.5rem;
                    background: #ffffff;
                }
                .toppers-content {
                    max-width: 80rem;
                    margin: 0 auto;
                }
                .toppers-heading {
                    text-align: center;
                    margin-bottom: 3.5rem;
                }
                .toppers-badge {
                    display: inline-block;
                    background: rgba(249, 115, 22, 0.1);
                    color: #F97316;
                    font-weight: 600;
                    font-size: 0.85rem;
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    margin-bottom: 1rem;
                }
                .toppers-heading h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #1B2B6B;
                    margin-bottom: 0.75rem;
                }
                .toppers-heading p {
                    color: #64748B;
                    max-width: 36rem;
                    margin: 0 auto;
                }
                .toppers-grid {
                    display: grid;
                    grid-template-columns: repeat(7, 1fr);
                    gap: 1.5rem;
                }
                .topper-card {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                    background: #ffffff;
                    border-radius: 1rem;
                    box-shadow: 0 8px 20px rgba(27, 43, 107, 0.08);
                    padding: 1.5rem;
                    transition: transform 0.25s ease, box-shadow 0.25s ease;
                }
                .topper-card:hover {
                    transform: translateY(-6px) scale(1.05);
                    box-shadow: 0 20px 44px rgba(27, 43, 107, 0.16);
                }
                .topper-frame {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 8rem;
                    height: 8rem;
                    background: #F9FAFB;
                    border-radius: 0.75rem;
                    box-shadow: inset 0 2px 6px rgba(0, 0, 0, 0.06);
                }
                .topper-frame img {
                    max-width: 100%;
                    max-height: 100%;
                    object-fit: contain;
                }
                .topper-name {
                    margin-top: 1rem;
                    font-weight: 700;
                    color: #1B2B6B;
                    line-height: 1.25;
                }
                .topper-result {
                    font-size: 0.875rem;
                    font-weight: 600;
                    color: #F97316;
                }
                @media (max-width: 1200px) {
                    .toppers-grid {
                        grid-template-columns: repeat(4, 1fr);
                    }
                }
                @media (max-width: 768px) {
                    .toppers-grid {
                        grid-template-columns: repeat(3, 1fr);
                    }
                }
                @media (max-width: 560px) {
                    .toppers-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let modal_open = use_state(|| false);

    // Land at the top on mount, unless a results fragment asks for the
    // toppers grid. The short delay lets the sections render first.
    use_effect_with_deps(
        move |_| {
            let window = web_sys::window().unwrap();
            let hash = window.location().hash().unwrap_or_default();
            if hash == "#results" {
                Timeout::new(100, || {
                    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                        if let Some(section) = document.get_element_by_id("results") {
                            let options = web_sys::ScrollIntoViewOptions::new();
                            options.set_behavior(web_sys::ScrollBehavior::Smooth);
                            options.set_block(web_sys::ScrollLogicalPosition::Start);
                            section.scroll_into_view_with_scroll_into_view_options(&options);
                        }
                    }
                })
                .forget();
            } else {
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
            <main>
                <HeroSection on_enroll={open_modal.clone()} />
                <section class="classroom-section">
                    <img
                        src="/assets/images/Interact.jpeg"
                        alt="Students in classroom at Rise N Shine Coaching"
                        loading="lazy"
                        decoding="async"
                    />
                    <style>
                        {r#"
                        .classroom-section {
                            padding: 2.5rem 1.5rem;
                            background: #ffffff;
                            text-align: center;
                        }
                        .classroom-section img {
                            width: 100%;
                            max-width: 56rem;
                            aspect-ratio: 16 / 9;
                            object-fit: cover;
                            border-radius: 1rem;
                            box-shadow: 0 8px 24px rgba(27, 43, 107, 0.08);
                        }
                        "#}
                    </style>
                </section>
                <StudentSlider />
                <LegacySection />
                <OffersSection on_enquire={open_modal.clone()} />
                <TrustStrip />
                <TestimonialsSection />
                <ToppersSection />
                <MapSection />
            </main>
            <Footer />
            <EnquireTab on_click={open_modal} />
            <EnquireModal is_open={*modal_open} on_close={close_modal} />
            <WhatsAppButton />
            <CallButton />
        </div>
    }
}
