pub mod components;
pub mod dom;
pub mod logging;
pub mod page;
pub mod sections;

use components::footer::Footer;
use components::header::Header;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};
use portfolio_core::{Message, SiteConfig, CONTACT};
use sections::about::About;
use sections::contact::Contact;
use sections::education::Education;
use sections::hero::Hero;
use sections::projects::Projects;
use sections::skills::Skills;

use page::Page;

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    provide_meta_context();

    let page = Page::new(&config);
    provide_context(page);

    Effect::new(move || {
        page.dispatch(Message::Mounted);
    });

    let scroll = window_event_listener(leptos::ev::scroll, move |_| page.on_scroll());
    on_cleanup(move || scroll.remove());

    view! {
        <Title text=format!("{} | Portfolio", CONTACT.name) />
        <Meta name="description" content=CONTACT.role />
        <div class="portfolio">
            <Header brand=config.site.brand />
            <main>
                <Hero />
                <About />
                <Education />
                <Skills />
                <Projects />
                <Contact />
            </main>
            <Footer year=config.site.copyright_year />
        </div>
    }
}
