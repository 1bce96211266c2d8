use yew::prelude::*;

const MAP_LINK: &str = "https://maps.app.goo.gl/mbo3GxwP3HYvn67F9";
const MAP_EMBED: &str =
    "https://www.google.com/maps?q=Rise%20N%20Shine%20Coaching%20Narhe&output=embed";

#[function_component(MapSection)]
pub fn map_section() -> Html {
    html! {
        <section class="map-section">
            <div class="map-content">
                <a
                    href={MAP_LINK}
                    target="_blank"
                    rel="noopener noreferrer"
                    class="map-frame"
                    aria-label="Open our location in Google Maps"
                >
                    <iframe
                        title="Location Map"
                        src={MAP_EMBED}
                        width="100%"
                        height="100%"
                        loading="lazy"
                        referrerpolicy="no-referrer-when-downgrade"
                    />
                </a>
            </div>
            <style>
                {r#"
                .map-section {
                    padding: 3.5rem 1.5rem;
                    background: #ffffff;
                }
                .map-content {
                    max-width: 80rem;
                    margin: 0 auto;
                }
                .map-frame {
                    display: block;
                    height: 420px;
                    border-radius: 1rem;
                    overflow: hidden;
                    box-shadow: 0 8px 24px rgba(27, 43, 107, 0.08);
                    transition: box-shadow 0.25s ease;
                }
                .map-frame:hover {
                    box-shadow: 0 16px 40px rgba(27, 43, 107, 0.16);
                }
                .map-frame iframe {
                    border: 0;
                    display: block;
                }
                @media (min-width: 1024px) {
                    .map-frame {
                        height: 450px;
                    }
                }
                "#}
            </style>
        </section>
    }
}
