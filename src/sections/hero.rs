use leptos::prelude::*;
use portfolio_core::content::HERO_DESCRIPTION;
use portfolio_core::{Message, SectionId, CONTACT};

use crate::components::icons::{Download, Github, Mail};
use crate::page::use_page;

#[component]
pub fn Hero() -> impl IntoView {
    let page = use_page();

    view! {
        <section id=SectionId::Home.dom_id() class="hero">
            <div class="container">
                <div class="hero-content">
                    <div class="hero-text">
                        <h1 class="hero-title">
                            "Hi, I'm " <span class="highlight">{CONTACT.name}</span>
                        </h1>
                        <p class="hero-subtitle">{CONTACT.role}</p>
                        <p class="hero-description">{HERO_DESCRIPTION}</p>

                        <div class="hero-buttons">
                            <button
                                class="btn btn-primary"
                                on:click=move |_| page.navigate(SectionId::Contact)
                            >
                                "Get in Touch"
                            </button>
                            <button
                                class="btn btn-secondary"
                                on:click=move |_| page.dispatch(Message::DownloadResume)
                            >
                                <Download size=18 />
                                "Download Resume"
                            </button>
                        </div>

                        <div class="social-links">
                            <a
                                href=CONTACT.github_url()
                                target="_blank"
                                rel="noopener noreferrer"
                                class="social-link"
                            >
                                <Github size=20 />
                            </a>
                            <a href=CONTACT.mailto() class="social-link">
                                <Mail size=20 />
                            </a>
                        </div>
                    </div>

                    <div class="hero-image">
                        <div class="image-placeholder">{CONTACT.initials}</div>
                    </div>
                </div>
            </div>
        </section>
    }
}
