use leptos::prelude::*;
use portfolio_core::CONTACT;

#[component]
pub fn Footer(year: u16) -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <p>{format!("\u{00A9} {year} {}. All rights reserved.", CONTACT.name)}</p>
            </div>
        </footer>
    }
}
