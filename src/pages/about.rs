use yew::prelude::*;

use crate::components::call_button::CallButton;
use crate::components::enquire_modal::EnquireModal;
use crate::components::enquire_tab::EnquireTab;
use crate::components::footer::Footer;
use crate::components::map_section::MapSection;
use crate::components::navbar::Navbar;
use crate::components::whatsapp_button::WhatsAppButton;

const TEACHERS: &[(&str, &str, &str, &str, &str)] = &[
    (
        "Mr. Ajay Shedage",
        "Mechanical Engineer and MA Economics",
        "Physics and Chemistry",
        "10+ years of experience delivering concept-based Physics & Chemistry teaching \
         with practical examples, exam strategies, and strong doubt-solving focus.",
        "/assets/images/teacher-1.png",
    ),
    (
        "Mrs. Sharyu Patil",
        "MA B.Ed",
        "Language Teacher",
        "Passionate language educator helping students master grammar, reading \
         comprehension, and confident written and spoken communication.",
        "/assets/images/teacher-2.png",
    ),
    (
        "Mrs. Mansi Jamgaonkar",
        "BSc B.Ed",
        "Science",
        "Simplifies complex science concepts using visual learning, activities, and \
         foundational explanations for better retention.",
        "/assets/images/teacher-3.png",
    ),
    (
        "Mrs. Shital Nerkar",
        "BSc B.Ed",
        "Primary Head",
        "Focuses on early academic development with engaging teaching methods that \
         build strong numeracy, literacy, and learning confidence.",
        "/assets/images/teacher-4.png",
    ),
    (
        "Dr. Samiksha Mohite",
        "Doctor of Medicine",
        "Biology",
        "Guides Biology students using real-life medical insights, conceptual depth, \
         and board exam preparation techniques.",
        "/assets/images/teacher-5.png",
    ),
];

#[function_component(About)]
pub fn about() -> Html {
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
            <main class="about-main">
                <section class="about-intro">
                    <span class="about-badge">{"About Us"}</span>
                    <h1>
                        {"Where Every Student Gets "}
                        <span class="about-accent">{"Personal Attention"}</span>
                    </h1>
                    <p>
                        {"Rise N Shine Coaching is a trusted institute in Narhe, Pune focused on \
                          small batches, strong concept clarity, and individual student growth \
                          from Class 1 to Class 10."}
                    </p>
                </section>

                <section class="founder-section">
                    <div class="founder-grid">
                        <div class="founder-visual">
                            <img
                                src="/assets/images/Founder.webp"
                                alt="Mrs. Swapnali More, founder of Rise N Shine Coaching"
                                loading="lazy"
                                decoding="async"
                            />
                        </div>
                        <div class="founder-copy">
                            <span class="about-badge">{"Meet Our Founder"}</span>
                            <h2>{"Mrs. Swapnali More"}</h2>
                            <p class="founder-role">{"BSc B.Ed — Founder & Academic Head"}</p>
                            <div class="founder-card">
                                <p>
                                    {"Mrs. Swapnali More, with over 12 years of academic experience, \
                                      founded Rise N Shine Coaching with a vision to create a \
                                      nurturing and student-focused learning environment where every \
                                      child feels supported and motivated."}
                                </p>
                                <p>
                                    {"Her teaching philosophy emphasizes concept clarity, patient \
                                      mentoring, and consistent practice, helping students overcome \
                                      fear of subjects and develop confidence in their academic \
                                      abilities."}
                                </p>
                                <p>
                                    {"She believes true education goes beyond marks — it builds \
                                      curiosity, discipline, and a lifelong love for learning in \
                                      every student."}
                                </p>
                            </div>
                        </div>
                    </div>
                </section>

                <section class="about-classroom">
                    <img
                        src="/assets/images/about-classroom.webp"
                        alt="Classroom at Rise N Shine Coaching"
                        loading="lazy"
                        decoding="async"
                    />
                </section>

                <section class="faculty-section">
                    <div class="faculty-heading">
                        <span class="about-badge">{"Our Faculty"}</span>
                        <h2>{"Meet Our Teachers"}</h2>
                    </div>
                    {
                        TEACHERS.iter().enumerate().map(|(i, (name, qualification, subject, description, photo))| html! {
                            <div class={classes!("faculty-row", (i % 2 == 1).then(|| "reversed"))}>
                                <div class="faculty-visual">
                                    <img
                                        src={*photo}
                                        alt={*name}
                                        loading="lazy"
                                        decoding="async"
                                    />
                                </div>
                                <div class="faculty-copy">
                                    <h3>{*name}</h3>
                                    <p class="faculty-meta">
                                        <span>{format!("({})", qualification)}</span>
                                        {" "}
                                        <span>{format!("({})", subject)}</span>
                                    </p>
                                    <p class="faculty-description">{*description}</p>
                                </div>
                            </div>
                        }).collect::<Html>()
                    }
                </section>

                <MapSection />
            </main>
            <Footer />
            <EnquireTab on_click={open_modal} />
            <EnquireModal is_open={*modal_open} on_close={close_modal} />
            <WhatsAppButton />
            <CallButton />
            <style>
                {r#"
                .about-main {
                    padding-top: 7rem;
                    background: #F9FAFB;
                }
                .about-badge {
                    display: inline-block;
                    background: rgba(249, 115, 22, 0.1);
                    color: #F97316;
                    font-weight: 600;
                    font-size: 0.85rem;
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    margin-bottom: 1rem;
                }
                .about-intro {
                    max-width: 80rem;
                    margin: 0 auto;
                    text-align: center;
                    padding: 2rem 1.5rem 3rem;
                }
                .about-intro h1 {
                    font-size: 2.5rem;
                    font-weight: 700;
                    color: #1B2B6B;
                    margin-bottom: 1rem;
                }
                .about-accent {
                    color: #F97316;
                }
                .about-intro p {
                    color: #64748B;
                    max-width: 42rem;
                    margin: 0 auto;
                    line-height: 1.7;
                }
                .founder-section {
                    padding: 3rem 1.5rem;
                    background: #ffffff;
                }
                .founder-grid {
                    max-width: 72rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 420px 1fr;
                    gap: 3rem;
                    align-items: center;
                }
                .founder-visual img {
                    width: 100%;
                    border-radius: 1rem;
                    box-shadow: 0 16px 40px rgba(27, 43, 107, 0.14);
                }
                .founder-copy h2 {
                    font-size: 2rem;
                    font-weight: 700;
                    color: #1B2B6B;
                }
                .founder-role {
                    color: #F97316;
                    font-weight: 600;
                    margin: 0.5rem 0 1.5rem;
                }
                .founder-card {
                    background: #F4F5FF;
                    border-radius: 1rem;
                    padding: 1.75rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .founder-card p {
                    color: #475569;
                    line-height: 1.7;
                }
                .about-classroom {
                    padding: 3rem 1.5rem;
                    background: #F9FAFB;
                    text-align: center;
                }
                .about-classroom img {
                    width: 100%;
                    max-width: 64rem;
                    aspect-ratio: 16 / 9;
                    object-fit: cover;
                    border-radius: 1rem;
                    box-shadow: 0 12px 32px rgba(27, 43, 107, 0.1);
                }
                .faculty-section {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 3rem 1.5rem 5rem;
                }
                .faculty-heading {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .faculty-heading h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #1B2B6B;
                }
                .faculty-row {
                    display: flex;
                    align-items: center;
                    gap: 3rem;
                    padding: 2rem 0;
                }
                .faculty-row.reversed {
                    flex-direction: row-reverse;
                }
                .faculty-visual {
                    flex-shrink: 0;
                    width: 300px;
                }
                .faculty-visual img {
                    width: 100%;
                    aspect-ratio: 3 / 4;
                    object-fit: cover;
                    border-radius: 1rem;
                    box-shadow: 0 12px 32px rgba(27, 43, 107, 0.12);
                }
                .faculty-copy h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #1B2B6B;
                }
                .faculty-meta {
                    color: #F97316;
                    font-weight: 600;
                    font-size: 0.95rem;
                    margin: 0.5rem 0 1rem;
                }
                .faculty-description {
                    color: #64748B;
                    line-height: 1.7;
                }
                @media (max-width: 992px) {
                    .founder-grid {
                        grid-template-columns: 1fr;
                    }
                    .founder-visual {
                        max-width: 420px;
                        margin: 0 auto;
                    }
                    .faculty-row,
                    .faculty-row.reversed {
                        flex-direction: column;
                        text-align: center;
                    }
                    .faculty-visual {
                        width: 260px;
                    }
                }
                "#}
            </style>
        </div>
    }
}
