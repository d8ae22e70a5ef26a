use leptos::ev::MouseEvent;
use leptos::prelude::*;
use portfolio_core::{Message, SectionId};

use super::icons::{Menu, Moon, Sun, X};
use crate::page::use_page;

#[component]
pub fn Header(brand: String) -> impl IntoView {
    let page = use_page();

    view! {
        <header class=move || if page.is_menu_open() { "header menu-open" } else { "header" }>
            <div class="container">
                <div class="header-content">
                    <a
                        href=SectionId::Home.href()
                        class="logo"
                        on:click=move |ev: MouseEvent| {
                            ev.prevent_default();
                            page.navigate(SectionId::Home);
                        }
                    >
                        {brand}
                    </a>

                    <nav class=move || if page.is_menu_open() { "nav active" } else { "nav" }>
                        {SectionId::ALL
                            .into_iter()
                            .map(|section| view! { <NavLink section=section /> })
                            .collect_view()}
                    </nav>

                    <div class="header-actions">
                        <button
                            class="theme-toggle"
                            aria-label="Toggle dark mode"
                            on:click=move |_| page.dispatch(Message::ToggleTheme)
                        >
                            {move || {
                                if page.is_dark() {
                                    view! { <Sun size=20 /> }.into_any()
                                } else {
                                    view! { <Moon size=20 /> }.into_any()
                                }
                            }}
                        </button>

                        <button
                            class="menu-toggle"
                            aria-label="Toggle menu"
                            on:click=move |_| page.dispatch(Message::ToggleMenu)
                        >
                            {move || {
                                if page.is_menu_open() {
                                    view! { <X /> }.into_any()
                                } else {
                                    view! { <Menu /> }.into_any()
                                }
                            }}
                        </button>
                    </div>
                </div>
            </div>
        </header>
    }
}

#[component]
fn NavLink(section: SectionId) -> impl IntoView {
    let page = use_page();

    view! {
        <a
            href=section.href()
            class=move || if page.is_active(section) { "nav-link active" } else { "nav-link" }
            on:click=move |ev: MouseEvent| {
                ev.prevent_default();
                page.navigate(section);
            }
        >
            {section.label()}
        </a>
    }
}
