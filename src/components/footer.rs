use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::MouseEvent;
use crate::config;
use crate::Route;

const COURSE_LINKS: &[&str] = &[
    "Primary (1st–5th)",
    "Middle (6th–8th)",
    "Secondary (9th–10th)",
    "Weekend Programs",
    "Special Subjects",
];

const SOCIAL_LINKS: &[(&str, &str, &str)] = &[
    ("Instagram", "https://www.instagram.com/rise_n_shinecoaching", "📸"),
    ("Facebook", "https://www.facebook.com/share/1CZfYbWMHn/", "👍"),
    ("YouTube", "https://youtube.com/@risenshinecoaching", "▶"),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let navigator = use_navigator().unwrap();

    let go_home = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            navigator.push(&Route::Home);
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
        })
    };

    let go_courses = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            navigator.push(&Route::Courses);
        })
    };

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <div class="footer-logo" onclick={go_home.clone()}>
                            <img
                                src="/assets/images/logo-rise-n-shine.jpeg"
                                alt="Rise N Shine Coaching logo"
                                loading="lazy"
                                decoding="async"
                            />
                            <span>{"RiseNShine Coaching"}</span>
                        </div>
                        <p class="footer-tagline">
                            {"SSC & CBSE Coaching in Narhe, Pune. Personalized coaching for \
                              Class 1–10 students with small batches, strong concepts, and \
                              individual attention."}
                        </p>
                        <div class="footer-socials">
                            {
                                SOCIAL_LINKS.iter().map(|(label, url, icon)| html! {
                                    <a
                                        href={*url}
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="footer-social"
                                        aria-label={*label}
                                        title={*label}
                                    >
                                        {*icon}
                                    </a>
                                }).collect::<Html>()
                            }
                        </div>
                    </div>

                    <div class="footer-col">
                        <h4>{"Courses"}</h4>
                        <ul>
                            {
                                COURSE_LINKS.iter().map(|link| html! {
                                    <li>
                                        <span class="footer-link" onclick={go_courses.clone()}>
                                            {*link}
                                        </span>
                                    </li>
                                }).collect::<Html>()
                            }
                        </ul>
                    </div>

                    <div class="footer-col">
                        <h4>{"Quick Links"}</h4>
                        <ul>
                            <li>
                                <span class="footer-link" onclick={go_home}>
                                    {"Home"}
                                </span>
                            </li>
                            <li>
                                <Link<Route> to={Route::About} classes="footer-link">
                                    {"About"}
                                </Link<Route>>
                            </li>
                            <li>
                                <Link<Route> to={Route::Courses} classes="footer-link">
                                    {"Courses"}
                                </Link<Route>>
                            </li>
                        </ul>
                    </div>

                    <div class="footer-col">
                        <h4>{"Find Us"}</h4>
                        <ul class="footer-contact">
                            <li>{"📍 Narhe, Pune, Maharashtra"}</li>
                            <li>
                                <a href={format!("tel:{}", config::CONTACT_PHONE)} class="footer-link">
                                    {format!("📞 {}", config::CONTACT_PHONE)}
                                </a>
                            </li>
                            <li>
                                <a href={format!("mailto:{}", config::CONTACT_EMAIL)} class="footer-link">
                                    {format!("✉️ {}", config::CONTACT_EMAIL)}
                                </a>
                            </li>
                        </ul>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{"© 2026 Rise N Shine Coaching. All rights reserved."}</p>
                    <div class="footer-credit">
                        <p>{"Designed & Developed by SynergexAi"}</p>
                        <p>
                            <a href="mailto:contact@synergexai.com" class="footer-link">
                                {"contact@synergexai.com"}
                            </a>
                        </p>
                        <p>
                            <a href="tel:7385249974" class="footer-link">
                                {"7385249974"}
                            </a>
                        </p>
                    </div>
                    <div class="footer-legal">
                        <Link<Route> to={Route::NotFound} classes="footer-link">
                            {"Privacy Policy"}
                        </Link<Route>>
                        <Link<Route> to={Route::NotFound} classes="footer-link">
                            {"Terms of Use"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .site-footer {
                    background: #0F172A;
                    color: #CBD5E1;
                    padding: 4rem 1.5rem 2rem;
                }
                .footer-content {
                    max-width: 80rem;
                    margin: 0 auto;
                }
                .footer-grid {
                    display: grid;
                    grid-template-columns: 2fr 1fr 1fr 1.4fr;
                    gap: 2.5rem;
                    padding-bottom: 2.5rem;
                    border-bottom: 1px solid rgba(203, 213, 225, 0.15);
                }
                .footer-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.6rem;
                    cursor: pointer;
                    margin-bottom: 1rem;
                }
                .footer-logo img {
                    height: 48px;
                    width: auto;
                    border-radius: 8px;
                }
                .footer-logo span {
                    color: #ffffff;
                    font-weight: 700;
                }
                .footer-tagline {
                    font-size: 0.9rem;
                    line-height: 1.6;
                    max-width: 22rem;
                    margin-bottom: 1.25rem;
                }
                .footer-socials {
                    display: flex;
                    gap: 0.75rem;
                }
                .footer-social {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 38px;
                    height: 38px;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.08);
                    text-decoration: none;
                    font-size: 1rem;
                    transition: background 0.2s ease, transform 0.2s ease;
                }
                .footer-social:hover {
                    background: #F97316;
                    transform: translateY(-2px);
                }
                .footer-col h4 {
                    color: #ffffff;
                    font-size: 0.95rem;
                    margin-bottom: 1rem;
                }
                .footer-col ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.6rem;
                    font-size: 0.9rem;
                }
                .footer-link {
                    color: #CBD5E1;
                    text-decoration: none;
                    cursor: pointer;
                    transition: color 0.2s ease;
                }
                .footer-link:hover {
                    color: #F97316;
                }
                .footer-contact li {
                    line-height: 1.5;
                }
                .footer-bottom {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                    padding-top: 1.5rem;
                    font-size: 0.85rem;
                }
                .footer-legal {
                    display: flex;
                    gap: 1.5rem;
                }
                .footer-credit {
                    display: flex;
                    flex-direction: column;
                    gap: 0.25rem;
                    text-align: center;
                    color: #94A3B8;
                }
                @media (max-width: 992px) {
                    .footer-grid {
                        grid-template-columns: 1fr 1fr;
                    }
                }
                @media (max-width: 640px) {
                    .footer-grid {
                        grid-template-columns: 1fr;
                    }
                    .footer-bottom {
                        flex-direction: column;
                        align-items: flex-start;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
