use chrono::Datelike;
use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::components::reveal::Reveal;
use crate::config;

#[function_component(Footer)]
pub fn footer() -> Html {
    let current_year = chrono::Local::now().year();

    let footer_css = r#"
        .footer {
            background: #2E177A;
            color: #fff;
            padding: 3rem 1.5rem;
            text-align: center;
        }
        .footer h2 {
            font-size: 1.75rem;
            margin-bottom: 1rem;
        }
        .footer-address p {
            margin: 0.25rem 0;
            color: rgba(255, 255, 255, 0.85);
        }
        .footer-contact {
            display: flex;
            justify-content: center;
            flex-wrap: wrap;
            gap: 2rem;
            margin: 1.5rem 0;
        }
        .footer-contact a {
            color: #fff;
            text-decoration: none;
            display: inline-flex;
            align-items: center;
            gap: 0.5rem;
        }
        .footer-copy {
            font-size: 0.9rem;
            color: rgba(255, 255, 255, 0.7);
        }
    "#;

    html! {
        <footer class="footer">
            <style>{footer_css}</style>
            <Reveal>
                <h2>{config::COMPANY_NAME}</h2>
                <div class="footer-address">
                    <IconView icon={Icon::MapPin} />
                    <p>{config::ADDRESS}</p>
                </div>
                <div class="footer-contact">
                    <a href={config::PHONE_HREF}>
                        <IconView icon={Icon::Phone} />
                        <span>{config::PHONE_DISPLAY}</span>
                    </a>
                    <a href={config::EMAIL_HREF}>
                        <IconView icon={Icon::Mail} />
                        <span>{config::EMAIL}</span>
                    </a>
                </div>
                <p class="footer-copy">
                    {format!("©{} {} | All Rights Reserved", current_year, config::COMPANY_NAME)}
                </p>
            </Reveal>
        </footer>
    }
}
