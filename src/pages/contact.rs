use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::components::reveal::Reveal;
use crate::config;
use crate::content::company::contact_channels;
use crate::utils::contact::{ContactForm, Field, FormErrors};

/// How long a status banner stays up.
const STATUS_RESET_MS: u32 = 5_000;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum SubmitStatus {
    Idle,
    Success,
    Error,
}

/// Stores `next` as the only pending task. Dropping the previous one
/// cancels it when it is a `Timeout`.
fn replace_pending<T>(slot: &mut Option<T>, next: T) {
    *slot = Some(next);
}

#[derive(Properties, PartialEq)]
struct FormFieldProps {
    field: Field,
    label: &'static str,
    placeholder: &'static str,
    value: String,
    error: Option<String>,
    oninput: Callback<InputEvent>,
    #[prop_or("text")]
    input_type: &'static str,
}

#[function_component(FormField)]
fn form_field(props: &FormFieldProps) -> Html {
    let id = field_id(props.field);
    let class = classes!("form-input", props.error.is_some().then_some("has-error"));

    html! {
        <div class="form-group">
            <label for={id}>{format!("{} *", props.label)}</label>
            if props.field == Field::Message {
                <textarea
                    id={id}
                    name={id}
                    rows="6"
                    class={class}
                    placeholder={props.placeholder}
                    value={props.value.clone()}
                    oninput={props.oninput.clone()}
                />
            } else {
                <input
                    type={props.input_type}
                    id={id}
                    name={id}
                    class={class}
                    placeholder={props.placeholder}
                    value={props.value.clone()}
                    oninput={props.oninput.clone()}
                />
            }
            if let Some(error) = &props.error {
                <p class="form-error">{error}</p>
            }
        </div>
    }
}

fn field_id(field: Field) -> &'static str {
    match field {
        Field::Name => "name",
        Field::Email => "email",
        Field::Subject => "subject",
        Field::Message => "message",
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_state(ContactForm::default);
    let errors = use_state(FormErrors::default);
    let status = use_state(|| SubmitStatus::Idle);
    let status_reset = use_mut_ref(|| None::<Timeout>);

    // Scroll to top on mount; cancel a pending banner reset on unmount
    {
        let status_reset = status_reset.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                move || {
                    status_reset.borrow_mut().take();
                }
            },
            (),
        );
    }

    let on_field = |field: Field| {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |e: InputEvent| {
            let value = if field == Field::Message {
                let input: HtmlTextAreaElement = e.target_unchecked_into();
                input.value()
            } else {
                let input: HtmlInputElement = e.target_unchecked_into();
                input.value()
            };
            let mut next = (*form).clone();
            next.set(field, value);
            form.set(next);

            // Typing into a field clears its error
            let mut remaining = (*errors).clone();
            if remaining.clear(field) {
                errors.set(remaining);
            }
        })
    };

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let status = status.clone();
        let status_reset = status_reset.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let message = match form.validate() {
                Ok(message) => message,
                Err(found) => {
                    log::debug!("Contact form rejected: {:?}", found);
                    errors.set(found);
                    return;
                }
            };
            errors.set(FormErrors::default());

            let url = message.whatsapp_url(config::get_whatsapp_number());
            let opened = web_sys::window()
                .map(|w| w.open_with_url_and_target(&url, "_blank"))
                .map(|result| matches!(result, Ok(Some(_))))
                .unwrap_or(false);

            if opened {
                gloo_console::log!("Contact message handed to WhatsApp");
                form.set(ContactForm::default());
                status.set(SubmitStatus::Success);
            } else {
                log::error!("Could not open WhatsApp window");
                status.set(SubmitStatus::Error);
            }

            let status = status.clone();
            let reset = Timeout::new(STATUS_RESET_MS, move || status.set(SubmitStatus::Idle));
            replace_pending(&mut *status_reset.borrow_mut(), reset);
        })
    };

    let field_error = |field: Field| errors.get(field).map(|e| e.to_string());

    let contact_css = r#"
        .contact-page {
            padding: 8rem 1.5rem 5rem;
            background: #f8f7fc;
        }
        .contact-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
            gap: 2rem;
            max-width: 1200px;
            margin: 0 auto 4rem;
        }
        .contact-info {
            background: #2E177A;
            color: #fff;
            border-radius: 1rem;
            padding: 2rem;
            height: 100%;
        }
        .contact-channel {
            display: flex;
            gap: 1rem;
            margin-top: 1.5rem;
        }
        .contact-channel .channel-icon {
            flex-shrink: 0;
            width: 48px;
            height: 48px;
            border-radius: 0.5rem;
            background: rgba(255, 255, 255, 0.2);
            display: flex;
            align-items: center;
            justify-content: center;
        }
        .contact-channel a {
            color: #fff;
            word-break: break-word;
        }
        .contact-form {
            background: #fff;
            border-radius: 1rem;
            padding: 2rem;
            box-shadow: 0 12px 32px rgba(0, 0, 0, 0.08);
        }
        .form-group {
            margin-bottom: 1.25rem;
        }
        .form-group label {
            display: block;
            font-size: 0.9rem;
            font-weight: 500;
            margin-bottom: 0.5rem;
        }
        .form-input {
            width: 100%;
            padding: 0.75rem 1rem;
            border: 1px solid #d4d4d4;
            border-radius: 0.5rem;
            font: inherit;
            resize: none;
        }
        .form-input.has-error {
            border-color: #ef4444;
        }
        .form-error {
            color: #ef4444;
            font-size: 0.85rem;
            margin-top: 0.25rem;
        }
        .form-status {
            display: flex;
            align-items: center;
            gap: 0.5rem;
            padding: 1rem;
            border-radius: 0.5rem;
            margin-bottom: 1.5rem;
        }
        .form-status.success {
            background: #ecfdf5;
            color: #047857;
        }
        .form-status.error {
            background: #fef2f2;
            color: #b91c1c;
        }
        .contact-map {
            max-width: 1200px;
            margin: 0 auto;
            background: #fff;
            border-radius: 1rem;
            padding: 1rem;
        }
        .contact-map iframe {
            width: 100%;
            height: 400px;
            border: 0;
            border-radius: 0.75rem;
        }
    "#;

    html! {
        <section class="contact-page">
            <style>{contact_css}</style>
            <Reveal class="section-header">
                <h1>{"Contact "}<span class="text-gradient">{"Us"}</span></h1>
                <p>
                    {"Ready to start your printing project? Get in touch with our team and let's bring your vision to life."}
                </p>
            </Reveal>

            <div class="contact-grid">
                <Reveal class="contact-info">
                    <h2>{"Contact Information"}</h2>
                    <p>
                        {"We offer high-quality, reliable printing and binding services. Contact us for your next project!"}
                    </p>
                    {
                        contact_channels().iter().map(|channel| html! {
                            <div class="contact-channel">
                                <div class="channel-icon"><IconView icon={channel.icon} /></div>
                                <div>
                                    <h3>{channel.title}</h3>
                                    <p>{channel.description}</p>
                                    if channel.external {
                                        <a href={channel.href} target="_blank" rel="noopener noreferrer">
                                            {channel.content}
                                        </a>
                                    } else {
                                        <a href={channel.href}>{channel.content}</a>
                                    }
                                </div>
                            </div>
                        }).collect::<Html>()
                    }
                </Reveal>

                <Reveal class="contact-form" delay_ms={200}>
                    <h2>{"Send us a Message"}</h2>
                    {
                        match *status {
                            SubmitStatus::Success => html! {
                                <div class="form-status success">
                                    <IconView icon={Icon::CheckCircle} />
                                    <span>{"Message sent successfully! We'll get back to you soon."}</span>
                                </div>
                            },
                            SubmitStatus::Error => html! {
                                <div class="form-status error">
                                    <IconView icon={Icon::AlertCircle} />
                                    <span>{"Failed to send message. Please try again."}</span>
                                </div>
                            },
                            SubmitStatus::Idle => html! {},
                        }
                    }
                    <form {onsubmit} novalidate=true>
                        <FormField
                            field={Field::Name}
                            label="Name"
                            placeholder="Your full name"
                            value={form.name.clone()}
                            error={field_error(Field::Name)}
                            oninput={on_field(Field::Name)}
                        />
                        <FormField
                            field={Field::Email}
                            label="Email"
                            placeholder="your.email@example.com"
                            input_type="email"
                            value={form.email.clone()}
                            error={field_error(Field::Email)}
                            oninput={on_field(Field::Email)}
                        />
                        <FormField
                            field={Field::Subject}
                            label="Subject"
                            placeholder="What's this about?"
                            value={form.subject.clone()}
                            error={field_error(Field::Subject)}
                            oninput={on_field(Field::Subject)}
                        />
                        <FormField
                            field={Field::Message}
                            label="Message"
                            placeholder="Tell us about your printing project..."
                            value={form.message.clone()}
                            error={field_error(Field::Message)}
                            oninput={on_field(Field::Message)}
                        />
                        <button type="submit" class="btn btn-primary btn-block">
                            <IconView icon={Icon::Send} />
                            <span>{" Send Message"}</span>
                        </button>
                    </form>
                </Reveal>
            </div>

            <Reveal class="contact-map" delay_ms={400}>
                <h3>{"Find Us Here"}</h3>
                <iframe
                    src={config::MAP_EMBED_URL}
                    loading="lazy"
                    referrerpolicy="no-referrer-when-downgrade"
                    title={config::COMPANY_LEGAL_NAME}
                    allowfullscreen=true
                ></iframe>
            </Reveal>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;
    use std::rc::Rc;

    struct DropFlag(Rc<Cell<bool>>);

    impl Drop for DropFlag {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    #[test]
    fn a_new_reset_drops_the_pending_one() {
        let first = Rc::new(Cell::new(false));
        let second = Rc::new(Cell::new(false));
        let mut slot = None;

        replace_pending(&mut slot, DropFlag(first.clone()));
        assert!(!first.get());

        replace_pending(&mut slot, DropFlag(second.clone()));
        assert!(first.get());
        assert!(!second.get());

        slot.take();
        assert!(second.get());
    }

    #[test]
    fn field_ids_are_distinct() {
        let ids = [Field::Name, Field::Email, Field::Subject, Field::Message].map(field_id);
        for (i, a) in ids.iter().enumerate() {
            assert!(ids[i + 1..].iter().all(|b| a != b));
        }
    }
}
