use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::reveal::Reveal;
use crate::config;
use crate::content::company::HISTORY;
use crate::Route;

#[function_component(About)]
pub fn about() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let about_css = r#"
        .about-page {
            padding: 8rem 1.5rem 5rem;
            max-width: 900px;
            margin: 0 auto;
        }
        .about-page h1 {
            text-align: center;
            font-size: clamp(2rem, 4vw, 3rem);
            margin-bottom: 1rem;
        }
        .about-tagline {
            text-align: center;
            font-size: 1.25rem;
            font-weight: 500;
            margin-bottom: 3rem;
        }
        .about-history p {
            font-size: 1.1rem;
            line-height: 1.8;
            color: #404040;
            margin-bottom: 1.5rem;
        }
        .about-closing {
            font-size: 1.25rem;
            font-weight: 600;
            color: #2E177A;
            text-transform: uppercase;
            margin: 2rem 0;
        }
    "#;

    html! {
        <section class="about-page">
            <style>{about_css}</style>
            <Reveal>
                <h1 class="text-gradient">{config::COMPANY_LEGAL_NAME}</h1>
                <p class="about-tagline">{"Pioneering Excellence in Color Printing Since 1998"}</p>
            </Reveal>
            <div class="about-history">
                {
                    HISTORY.iter().enumerate().map(|(i, paragraph)| html! {
                        <Reveal delay_ms={100 * i as u32}>
                            <p>{*paragraph}</p>
                        </Reveal>
                    }).collect::<Html>()
                }
            </div>
            <Reveal>
                <p class="about-closing">{"Come, be a part of our journey, and let's bring your dreams to life"}</p>
                <Link<Route> to={Route::Contact} classes="btn btn-primary">
                    {"Start Your Project"}
                </Link<Route>>
            </Reveal>
        </section>
    }
}
