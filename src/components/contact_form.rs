use gloo_console::log;
use gloo_net::http::Request;
use serde::Serialize;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;

#[derive(Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Client-side check before the message leaves for the sheet endpoint.
pub fn validate_contact(name: &str, email: &str, message: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Please tell us your name");
    }
    if !is_plausible_email(email) {
        return Err("That email address does not look right");
    }
    if message.trim().is_empty() {
        return Err("Please include a message");
    }
    Ok(())
}

fn is_plausible_email(email: &str) -> bool {
    match email.trim().split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let error = use_state(|| None::<String>);
    let success = use_state(|| None::<String>);

    let oninput_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let oninput_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let oninput_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let error_setter = error.clone();
        let success_setter = success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let name_value = (*name).clone();
            let email_value = (*email).clone();
            let message_value = (*message).clone();

            if let Err(reason) = validate_contact(&name_value, &email_value, &message_value) {
                success_setter.set(None);
                error_setter.set(Some(reason.to_string()));
                return;
            }

            let name_state = name.clone();
            let email_state = email.clone();
            let message_state = message.clone();
            let error_setter = error_setter.clone();
            let success_setter = success_setter.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let payload = ContactRequest {
                    name: name_value.trim().to_string(),
                    email: email_value.trim().to_string(),
                    message: message_value.trim().to_string(),
                };

                match Request::post(config::get_contact_endpoint())
                    .json(&payload)
                    .unwrap()
                    .send()
                    .await
                {
                    Ok(response) => {
                        if response.ok() {
                            error_setter.set(None);
                            success_setter.set(Some(
                                "Your magical message has been sent to the guild! We will respond soon."
                                    .to_string(),
                            ));
                            name_state.set(String::new());
                            email_state.set(String::new());
                            message_state.set(String::new());
                        } else {
                            log!("Contact submission failed with status:", response.status());
                            success_setter.set(None);
                            error_setter.set(Some(
                                "The owls couldn't deliver your message. Try again later."
                                    .to_string(),
                            ));
                        }
                    }
                    Err(e) => {
                        log!("Contact submission request failed:", e.to_string());
                        success_setter.set(None);
                        error_setter.set(Some(
                            "The owls couldn't deliver your message. Try again later.".to_string(),
                        ));
                    }
                }
            });
        })
    };

    html! {
        <form class="contact-form" {onsubmit}>
            {
                if let Some(error_message) = (*error).as_ref() {
                    html! {
                        <div class="form-banner form-banner-error">
                            {error_message}
                        </div>
                    }
                } else if let Some(success_message) = (*success).as_ref() {
                    html! {
                        <div class="form-banner form-banner-success">
                            {success_message}
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <div class="form-field">
                <label for="contact-name">{"Your Name"}</label>
                <input
                    id="contact-name"
                    type="text"
                    placeholder="Enter your mystical name"
                    value={(*name).clone()}
                    oninput={oninput_name}
                />
            </div>
            <div class="form-field">
                <label for="contact-email">{"Your Email"}</label>
                <input
                    id="contact-email"
                    type="email"
                    placeholder="your.email@realm.com"
                    value={(*email).clone()}
                    oninput={oninput_email}
                />
            </div>
            <div class="form-field">
                <label for="contact-message">{"Your Message"}</label>
                <textarea
                    id="contact-message"
                    rows="6"
                    placeholder="Share your vision and let the magic begin..."
                    value={(*message).clone()}
                    oninput={oninput_message}
                />
            </div>
            <div class="form-submit">
                <button type="submit" class="btn-magical-transparent">
                    {"Send Message"}
                </button>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_complete_submission() {
        assert!(validate_contact("Elena", "elena@realm.com", "Rebrand our bakery").is_ok());
    }

    #[test]
    fn rejects_blank_name_and_message() {
        assert!(validate_contact("   ", "elena@realm.com", "hi").is_err());
        assert!(validate_contact("Elena", "elena@realm.com", "   ").is_err());
    }

    #[test]
    fn rejects_implausible_emails() {
        for email in ["", "elena", "elena@", "@realm.com", "elena@realm", "elena@.com", "elena@realm."] {
            assert!(
                validate_contact("Elena", email, "hi").is_err(),
                "accepted {:?}",
                email
            );
        }
    }

    #[test]
    fn trims_whitespace_before_judging_the_email() {
        assert!(validate_contact("Elena", "  elena@realm.com  ", "hi").is_ok());
    }
}
