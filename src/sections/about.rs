use leptos::prelude::*;
use portfolio_core::content::ABOUT_PARAGRAPHS;
use portfolio_core::{SectionId, CONTACT};

use crate::components::icons::{Mail, MapPin, Phone};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=SectionId::About.dom_id() class="about">
            <div class="container">
                <h2 class="section-title">"About Me"</h2>
                <div class="about-content">
                    <div class="about-text">
                        {ABOUT_PARAGRAPHS.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
                    </div>

                    <div class="about-info">
                        <div class="info-item">
                            <Mail class="info-icon" size=20 />
                            <div>
                                <span class="info-label">"Email"</span>
                                <a href=CONTACT.mailto()>{CONTACT.email}</a>
                            </div>
                        </div>
                        <div class="info-item">
                            <Phone class="info-icon" size=20 />
                            <div>
                                <span class="info-label">"Phone"</span>
                                <a href=CONTACT.tel()>{CONTACT.phone}</a>
                            </div>
                        </div>
                        <div class="info-item">
                            <MapPin class="info-icon" size=20 />
                            <div>
                                <span class="info-label">"Address"</span>
                                <span>{CONTACT.address_line()}</span>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
