use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use portfolio_core::{SectionId, CONTACT};

use crate::components::icons::{Github, Mail, MapPin, Phone};

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id=SectionId::Contact.dom_id() class="contact">
            <div class="container">
                <h2 class="section-title">"Get in Touch"</h2>
                <p class="section-subtitle">
                    "Have a project in mind or just want to say hi? Feel free to reach out!"
                </p>

                <div class="contact-content">
                    // Placeholder form: nothing is sent anywhere
                    <form class="contact-form" on:submit=|ev: SubmitEvent| ev.prevent_default()>
                        <div class="form-group">
                            <input type="text" placeholder="Your Name" required=true />
                        </div>
                        <div class="form-group">
                            <input type="email" placeholder="Your Email" required=true />
                        </div>
                        <div class="form-group">
                            <input type="text" placeholder="Subject" required=true />
                        </div>
                        <div class="form-group">
                            <textarea placeholder="Your Message" rows="6" required=true></textarea>
                        </div>
                        <button type="submit" class="btn btn-primary">
                            "Send Message"
                        </button>
                    </form>

                    <div class="contact-info">
                        <ContactItem title="Email" icon={|| view! { <Mail /> }.into_any()}>
                            <a href=CONTACT.mailto()>{CONTACT.email}</a>
                        </ContactItem>
                        <ContactItem title="Phone" icon={|| view! { <Phone /> }.into_any()}>
                            <a href=CONTACT.tel()>{CONTACT.phone}</a>
                        </ContactItem>
                        <ContactItem title="Location" icon={|| view! { <MapPin /> }.into_any()}>
                            <p>
                                {CONTACT.address.iter().enumerate().map(|(i, line)| view! {
                                    {(i > 0).then(|| view! { <br /> })}
                                    {*line}
                                }).collect_view()}
                            </p>
                        </ContactItem>
                        <ContactItem title="GitHub" icon={|| view! { <Github /> }.into_any()}>
                            <a href=CONTACT.github_url() target="_blank" rel="noopener noreferrer">
                                {format!("@{}", CONTACT.github_handle)}
                            </a>
                        </ContactItem>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactItem(title: &'static str, icon: fn() -> AnyView, children: Children) -> impl IntoView {
    view! {
        <div class="contact-info-item">
            <div class="contact-icon">{icon()}</div>
            <div>
                <h4>{title}</h4>
                {children()}
            </div>
        </div>
    }
}
