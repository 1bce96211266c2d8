use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::MouseEvent;
use crate::Route;

#[derive(PartialEq)]
pub struct Offering {
    pub num: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub items: &'static [&'static str],
    pub tint: &'static str,
}

pub const OFFERINGS: &[Offering] = &[
    Offering {
        num: "01",
        icon: "📖",
        title: "Primary Classes (1–4)",
        items: &["Phonics", "Foundation Maths", "Scholarship preparation"],
        tint: "tint-lavender",
    },
    Offering {
        num: "02",
        icon: "🔬",
        title: "Middle School (5–7)",
        items: &[
            "Maths & Science",
            "English improvement",
            "Grammar development",
            "Olympiad preparation",
        ],
        tint: "tint-orange",
    },
    Offering {
        num: "03",
        icon: "🎓",
        title: "Secondary (8–10)",
        items: &[
            "Maths & Science focus",
            "Regular tests & analysis",
            "Doubt-solving sessions",
        ],
        tint: "tint-lavender",
    },
    Offering {
        num: "04",
        icon: "📅",
        title: "SSC Preparation",
        items: &[
            "Full syllabus revision",
            "Model paper practice",
            "Time management drills",
        ],
        tint: "tint-orange",
    },
    Offering {
        num: "05",
        icon: "🎓",
        title: "NEET / JEE Foundation",
        items: &[
            "Strong science fundamentals",
            "Concept-building for NEET / JEE",
            "Competitive exam mindset",
        ],
        tint: "tint-lavender",
    },
    Offering {
        num: "06",
        icon: "🔬",
        title: "Olympiad & Scholarship",
        items: &[
            "Olympiad-focused practice",
            "Logical reasoning drills",
            "Special scholarship guidance",
        ],
        tint: "tint-orange",
    },
];

#[derive(Properties, PartialEq)]
pub struct CourseCardProps {
    pub offering: &'static Offering,
    pub on_enquire: Callback<()>,
}

#[function_component(CourseCard)]
pub fn course_card(props: &CourseCardProps) -> Html {
    let offering = props.offering;

    let handle_enquire = {
        let on_enquire = props.on_enquire.clone();
        Callback::from(move |_: MouseEvent| {
            on_enquire.emit(());
        })
    };

    html! {
        <div class={classes!("course-card", offering.tint)}>
            <span class="course-sparkle">{"✨"}</span>
            <span class="course-num">{offering.num}</span>
            <div class="course-body">
                <div class="course-icon">{offering.icon}</div>
                <h3>{offering.title}</h3>
                <ul>
                    {
                        offering.items.iter().map(|item| html! {
                            <li>
                                <span class="course-bullet">{"•"}</span>
                                {*item}
                            </li>
                        }).collect::<Html>()
                    }
                </ul>
            </div>
            <div class="course-card-footer">
                <button
                    class="course-learn-more"
                    onclick={handle_enquire}
                    aria-label={format!("Learn more about {}", offering.title)}
                >
                    {"Learn More"}
                </button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct OffersSectionProps {
    pub on_enquire: Callback<()>,
}

#[function_component(OffersSection)]
pub fn offers_section(props: &OffersSectionProps) -> Html {
    let navigator = use_navigator().unwrap();

    let view_more = {
        Callback::from(move |_: MouseEvent| {
            navigator.push(&Route::Courses);
        })
    };

    html! {
        <section id="courses" class="offers-section">
            <div class="offers-content">
                <div class="offers-heading">
                    <span class="offers-badge">{"Our Programs"}</span>
                    <h2>{"What We Offer"}</h2>
                    <p>{"Comprehensive coaching programs tailored for every student from Class 1 to Class 10."}</p>
                </div>

                <div class="offers-grid">
                    {
                        OFFERINGS.iter().take(4).map(|offering| html! {
                            <CourseCard {offering} on_enquire={props.on_enquire.clone()} />
                        }).collect::<Html>()
                    }
                </div>

                <div class="offers-more">
                    <button onclick={view_more} aria-label="View More Courses">
                        {"View More →"}
                    </button>
                </div>
            </div>
            <style>
                {r#"
                .offers-section {
                    padding: 6rem 1.5rem;
                    background: #ffffff;
                }
                .offers-content {
                    max-width: 80rem;
                    margin: 0 auto;
                }
                .offers-heading {
                    text-align: center;
                    margin-bottom: 3.5rem;
                }
                .offers-badge {
                    display: inline-block;
                    background: rgba(249, 115, 22, 0.1);
                    color: #F97316;
                    font-weight: 600;
                    font-size: 0.85rem;
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    margin-bottom: 1rem;
                }
                .offers-heading h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #1B2B6B;
                    margin-bottom: 0.75rem;
                }
                .offers-heading p {
                    color: #64748B;
                    max-width: 36rem;
                    margin: 0 auto;
                }
                .offers-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                }
                .course-card {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                    border-radius: 1rem;
                    padding: 2rem;
                    border: 1px solid rgba(100, 116, 139, 0.15);
                    box-shadow: 0 8px 24px rgba(27, 43, 107, 0.06);
                    transition: transform 0.25s ease, box-shadow 0.25s ease;
                }
                .course-card:hover {
                    transform: translateY(-10px);
                    box-shadow: 0 24px 48px rgba(27, 43, 107, 0.16);
                }
                .course-card.tint-lavender {
                    background: #F4F5FF;
                }
                .course-card.tint-orange {
                    background: rgba(249, 115, 22, 0.05);
                }
                .course-sparkle {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    font-size: 0.9rem;
                    opacity: 0.4;
                    transition: opacity 0.3s ease;
                }
                .course-card:hover .course-sparkle {
                    opacity: 0.8;
                }
                .course-num {
                    font-size: 0.75rem;
                    font-weight: 700;
                    letter-spacing: 0.2em;
                    color: rgba(100, 116, 139, 0.4);
                    margin-bottom: 1rem;
                    display: block;
                }
                .course-icon {
                    width: 3.5rem;
                    height: 3.5rem;
                    border-radius: 0.75rem;
                    background: #ffffff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.5rem;
                    margin-bottom: 1.25rem;
                    box-shadow: 0 4px 12px rgba(27, 43, 107, 0.08);
                }
                .course-card h3 {
                    font-size: 1.1rem;
                    font-weight: 700;
                    color: #1B2B6B;
                    margin-bottom: 0.75rem;
                }
                .course-card ul {
                    list-style: none;
                    padding: 0;
                    margin: 0 0 1.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 0.4rem;
                }
                .course-card li {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.5rem;
                    font-size: 0.875rem;
                    color: #64748B;
                }
                .course-bullet {
                    color: #F97316;
                }
                .course-card-footer {
                    display: flex;
                    justify-content: center;
                    padding-top: 0.5rem;
                }
                .course-learn-more {
                    background: #1B2B6B;
                    color: #ffffff;
                    font-size: 0.875rem;
                    font-weight: 600;
                    padding: 0.5rem 1.25rem;
                    border: none;
                    border-radius: 9999px;
                    cursor: pointer;
                    transition: transform 0.2s ease;
                }
                .course-learn-more:hover {
                    transform: scale(1.05);
                }
                .offers-more {
                    text-align: center;
                    margin-top: 3rem;
                }
                .offers-more button {
                    background: #1B2B6B;
                    color: #ffffff;
                    font-weight: 600;
                    padding: 0.75rem 2rem;
                    border: none;
                    border-radius: 9999px;
                    cursor: pointer;
                    transition: transform 0.2s ease;
                }
                .offers-more button:hover {
                    transform: scale(1.05);
                }
                @media (max-width: 1100px) {
                    .offers-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                @media (max-width: 640px) {
                    .offers-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
