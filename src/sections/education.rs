use leptos::prelude::*;
use portfolio_core::{education, SectionId};

#[component]
pub fn Education() -> impl IntoView {
    let entries = education();

    view! {
        <section id=SectionId::Education.dom_id() class="education">
            <div class="container">
                <h2 class="section-title">"Education"</h2>
                <div class="timeline">
                    {entries.into_iter().map(|entry| {
                        view! {
                            <div class="timeline-item">
                                <div class="timeline-marker"></div>
                                <div class="timeline-content">
                                    <h3>{entry.title}</h3>
                                    <p class="timeline-subtitle">{entry.institution}</p>
                                    <p class="timeline-date">{entry.period}</p>
                                    {(!entry.summary.is_empty()).then(|| view! { <p>{entry.summary}</p> })}
                                    {(!entry.highlights.is_empty()).then(|| view! {
                                        <ul>
                                            {entry.highlights.iter().map(|h| view! { <li>{*h}</li> }).collect_view()}
                                        </ul>
                                    })}
                                </div>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
