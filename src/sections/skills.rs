use leptos::prelude::*;
use portfolio_core::{skill_categories, SectionId};

use crate::components::skill_bar::SkillBar;

#[component]
pub fn Skills() -> impl IntoView {
    let categories = skill_categories();

    view! {
        <section id=SectionId::Skills.dom_id() class="skills">
            <div class="container">
                <h2 class="section-title">"Skills & Expertise"</h2>
                <div class="skills-grid">
                    {categories.into_iter().map(|category| {
                        view! {
                            <div class="skills-category">
                                <h3 class="skills-category-title">{category.title}</h3>
                                <div class="skills-list">
                                    {category.skills.into_iter().map(|skill| view! { <SkillBar skill=skill /> }).collect_view()}
                                </div>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
