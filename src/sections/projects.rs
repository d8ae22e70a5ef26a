use leptos::prelude::*;
use portfolio_core::{projects, Project, SectionId};

#[component]
pub fn Projects() -> impl IntoView {
    let projects = projects();

    view! {
        <section id=SectionId::Projects.dom_id() class="projects">
            <div class="container">
                <h2 class="section-title">"Projects"</h2>
                <div class="projects-grid">
                    {projects.into_iter().enumerate().map(|(index, project)| {
                        view! {
                            <div class="project-card">
                                <div class="project-number">{Project::ordinal(index)}</div>
                                <h3 class="project-title">{project.title}</h3>
                                <p class="project-description">{project.description}</p>
                                <div class="project-technologies">
                                    {project.technologies.iter().map(|tech| view! {
                                        <span class="tech-tag">{*tech}</span>
                                    }).collect_view()}
                                </div>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
