use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::components::reveal::Reveal;
use crate::components::testimonials::Testimonials;
use crate::config;
use crate::content::company::{HERO_STATS, MACHINES, REASONS};
use crate::content::services::SERVICES;
use crate::Route;

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <header class="hero">
            <video class="hero-video" autoplay=true loop=true muted=true playsinline=true>
                <source src={config::asset_url("/hero.mp4")} type="video/mp4" />
            </video>
            <div class="hero-overlay"></div>
            <div class="hero-content container">
                <h1 class="hero-title">
                    {"Where Creativity Meets "}
                    <span class="text-gradient">{"Printing Excellence"}</span>
                </h1>
                <p class="hero-subtitle">
                    {"Experience the future of printing with cutting-edge technology and unmatched quality. From concept to creation, we bring your vision to life with precision and style."}
                </p>
                <div class="hero-cta">
                    <Link<Route> to={Route::Contact} classes="btn btn-primary">
                        {"Get Free Quote"}
                    </Link<Route>>
                    <a href="#services" class="btn btn-outline">{"View Our Services"}</a>
                </div>
                <div class="hero-stats">
                    {
                        HERO_STATS.iter().enumerate().map(|(i, stat)| html! {
                            <Reveal class="hero-stat" delay_ms={200 * i as u32}>
                                <IconView icon={stat.icon} />
                                <strong>{stat.value}</strong>
                                <span>{stat.label}</span>
                            </Reveal>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </header>
    }
}

#[function_component(WhyChooseUs)]
fn why_choose_us() -> Html {
    html! {
        <section class="section why-choose-us">
            <div class="container">
                <Reveal class="section-header">
                    <h2>{"Why Choose "}<span class="text-gradient">{"Genesis?"}</span></h2>
                    <p>
                        {"We're committed to delivering exceptional printing services that exceed your expectations. Here's what sets us apart from the competition."}
                    </p>
                </Reveal>
                <div class="card-grid">
                    {
                        REASONS.iter().enumerate().map(|(i, reason)| html! {
                            <Reveal class="card why-card" delay_ms={150 * i as u32}>
                                <div class={classes!("card-icon", reason.accent)}>
                                    <IconView icon={reason.icon} />
                                </div>
                                <h3>{reason.title}</h3>
                                <p>{reason.description}</p>
                            </Reveal>
                        }).collect::<Html>()
                    }
                </div>
                <Reveal class="section-cta">
                    <Link<Route> to={Route::Contact} classes="btn btn-primary">
                        {"Start Your Project Today"}
                    </Link<Route>>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(OurMachines)]
fn our_machines() -> Html {
    html! {
        <section id="machines" class="section section-muted">
            <div class="container">
                <Reveal class="section-header">
                    <h2>{"Our "}<span class="text-gradient">{"Machines"}</span></h2>
                    <p>{"Modern equipment across pre-press, press and finishing keeps every job precise and on schedule."}</p>
                </Reveal>
                <div class="card-grid">
                    {
                        MACHINES.iter().enumerate().map(|(i, machine)| html! {
                            <Reveal class="card machine-card" delay_ms={200 * i as u32}>
                                <img src={config::asset_url(machine.image)} alt={machine.name} loading="lazy" />
                                <div class="machine-body">
                                    <IconView icon={machine.icon} class="machine-icon" />
                                    <h3>{machine.name}</h3>
                                    <p>{machine.description}</p>
                                </div>
                            </Reveal>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}

#[function_component(ServicesOverview)]
fn services_overview() -> Html {
    html! {
        <section id="services" class="section">
            <div class="container">
                <Reveal class="section-header">
                    <h2>{"Our "}<span class="text-gradient">{"Services"}</span></h2>
                    <p>
                        {"From business essentials to promotional materials, we offer comprehensive printing solutions for all your professional and personal needs."}
                    </p>
                </Reveal>
                <div class="card-grid">
                    {
                        SERVICES.iter().enumerate().map(|(i, service)| html! {
                            <Reveal class={classes!("card", "service-card", service.accent)} delay_ms={150 * i as u32}>
                                <div class="service-top">
                                    <div class="card-icon"><IconView icon={service.icon} /></div>
                                    <span class="service-price">{service.price}</span>
                                </div>
                                <h3>{service.title}</h3>
                                <p>{service.description}</p>
                                <ul class="feature-list">
                                    { for service.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
                                </ul>
                                <Link<Route> to={Route::Contact} classes="btn btn-primary btn-block">
                                    {"Get Quote"}
                                </Link<Route>>
                            </Reveal>
                        }).collect::<Html>()
                    }
                </div>
                <Reveal class="custom-project">
                    <h3>{"Need Something Custom?"}</h3>
                    <p>
                        {"We specialize in unique printing solutions. Let's discuss your specific requirements and create something amazing together."}
                    </p>
                    <Link<Route> to={Route::Contact} classes="btn btn-light">
                        {"Start Custom Project"}
                    </Link<Route>>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(FinalCta)]
fn final_cta() -> Html {
    html! {
        <section class="final-cta">
            <Reveal class="container">
                <h2>{"Ready to Bring Your Vision to Life?"}</h2>
                <p>
                    {"Get started with your printing project today. Our team is ready to help you create something amazing that will make your business stand out."}
                </p>
                <div class="hero-cta">
                    <Link<Route> to={Route::Contact} classes="btn btn-light">
                        {"Get Free Quote"}
                    </Link<Route>>
                    <a href={config::PHONE_HREF} class="btn btn-outline">
                        <IconView icon={Icon::Phone} />{" Call Now"}
                    </a>
                </div>
            </Reveal>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
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

    let home_css = r#"
        .hero {
            position: relative;
            min-height: 100vh;
            display: flex;
            align-items: center;
            overflow: hidden;
            color: #fff;
        }
        .hero-video {
            position: absolute;
            inset: 0;
            width: 100%;
            height: 100%;
            object-fit: cover;
        }
        .hero-overlay {
            position: absolute;
            inset: 0;
            background: linear-gradient(180deg, rgba(15, 8, 40, 0.75), rgba(46, 23, 122, 0.6));
        }
        .hero-content {
            position: relative;
            z-index: 1;
            padding-top: 6rem;
        }
        .hero-title {
            font-size: clamp(2.5rem, 6vw, 4.5rem);
            line-height: 1.1;
            margin-bottom: 1.5rem;
        }
        .hero-subtitle {
            font-size: 1.25rem;
            max-width: 720px;
            color: rgba(255, 255, 255, 0.9);
        }
        .hero-cta {
            display: flex;
            flex-wrap: wrap;
            gap: 1rem;
            margin: 2rem 0;
        }
        .hero-stats {
            display: flex;
            flex-wrap: wrap;
            gap: 2rem;
        }
        .hero-stat {
            display: flex;
            flex-direction: column;
            align-items: flex-start;
        }
        .hero-stat strong {
            font-size: 2rem;
        }
        .machine-card img {
            width: 100%;
            aspect-ratio: 4 / 3;
            object-fit: cover;
            border-radius: 0.75rem;
        }
        .machine-icon {
            color: #2E177A;
        }
        .service-top {
            display: flex;
            justify-content: space-between;
            align-items: flex-start;
            margin-bottom: 1rem;
        }
        .service-price {
            font-size: 0.85rem;
            font-weight: 600;
            color: #2E177A;
            background: #fff;
            padding: 0.25rem 0.75rem;
            border-radius: 999px;
        }
        .final-cta {
            padding: 5rem 1.5rem;
            text-align: center;
            color: #fff;
            background: linear-gradient(135deg, #2E177A, #1b0e4a);
        }
        .final-cta .hero-cta {
            justify-content: center;
        }
    "#;

    html! {
        <div class="home-page">
            <style>{home_css}</style>
            <Hero />
            <WhyChooseUs />
            <OurMachines />
            <ServicesOverview />
            <Testimonials />
            <FinalCta />
        </div>
    }
}
