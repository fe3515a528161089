use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::components::reveal::Reveal;
use crate::content::services::{ServiceGroup, PRESS_CAPABILITIES, SERVICE_GROUPS};
use crate::Route;

#[derive(Properties, PartialEq)]
struct GroupSectionProps {
    group: ServiceGroup,
}

#[function_component(GroupSection)]
fn group_section(props: &GroupSectionProps) -> Html {
    let group = &props.group;

    html! {
        <section id={group.anchor} class="service-group">
            <Reveal class="section-header">
                <h2>{group.title}</h2>
                <p>{group.summary}</p>
            </Reveal>
            <div class="card-grid">
                {
                    group.offerings.iter().enumerate().map(|(i, offering)| html! {
                        <Reveal class="card offering-card" delay_ms={100 * i as u32}>
                            <div class="offering-head">
                                <div class="card-icon"><IconView icon={offering.icon} /></div>
                                <h3>{offering.title}</h3>
                            </div>
                            <p>{offering.description}</p>
                            <ul class="feature-list">
                                { for offering.features.iter().map(|f| html! { <li>{*f}</li> }) }
                            </ul>
                        </Reveal>
                    }).collect::<Html>()
                }
            </div>
            if !group.benefits.is_empty() {
                <Reveal class="benefits">
                    <h3>{format!("Why Choose Our {} Services?", group.title)}</h3>
                    <ul>
                        {
                            group.benefits.iter().map(|benefit| html! {
                                <li><IconView icon={Icon::CheckCircle} />{" "}{*benefit}</li>
                            }).collect::<Html>()
                        }
                    </ul>
                </Reveal>
            }
        </section>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
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

    let services_css = r#"
        .services-page {
            padding: 8rem 1.5rem 5rem;
            max-width: 1200px;
            margin: 0 auto;
        }
        .services-jump {
            display: flex;
            justify-content: center;
            flex-wrap: wrap;
            gap: 1rem;
            margin-bottom: 3rem;
        }
        .service-group {
            padding: 3rem 0;
            scroll-margin-top: 90px;
        }
        .offering-head {
            display: flex;
            align-items: center;
            gap: 1rem;
            margin-bottom: 1rem;
        }
        .benefits {
            margin-top: 2.5rem;
            padding: 2rem;
            border-radius: 1rem;
            color: #fff;
            background: linear-gradient(90deg, #2E177A, #6b3fd4);
        }
        .benefits ul,
        .capabilities ul {
            list-style: none;
            padding: 0;
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
            gap: 0.75rem;
        }
        .capabilities {
            margin-top: 2.5rem;
            text-align: center;
        }
        .capabilities li {
            padding: 1rem;
            border-radius: 0.75rem;
            background: #f3f0fb;
            font-weight: 500;
        }
    "#;

    html! {
        <div class="services-page">
            <style>{services_css}</style>
            <Reveal class="section-header">
                <h1>{"Our "}<span class="text-gradient">{"Services"}</span></h1>
                <p>
                    {"Complete printing solutions from pre-press to post-press. We handle every stage of the printing process with professional expertise and cutting-edge technology."}
                </p>
            </Reveal>
            <nav class="services-jump">
                {
                    SERVICE_GROUPS.iter().map(|group| html! {
                        <a href={format!("#{}", group.anchor)} class="btn btn-outline">{group.title}</a>
                    }).collect::<Html>()
                }
            </nav>

            { for SERVICE_GROUPS.iter().map(|group| html! { <GroupSection group={*group} /> }) }

            <Reveal class="capabilities">
                <h2>{"Our Printing Capabilities"}</h2>
                <ul>
                    { for PRESS_CAPABILITIES.iter().map(|c| html! { <li>{*c}</li> }) }
                </ul>
            </Reveal>

            <Reveal class="section-cta">
                <h3>{"Ready to Start Your Project?"}</h3>
                <Link<Route> to={Route::Contact} classes="btn btn-primary">
                    {"Get Free Quote"}
                </Link<Route>>
            </Reveal>
        </div>
    }
}
