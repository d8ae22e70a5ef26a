use leptos::prelude::*;
use portfolio_core::Skill;

/// Skill name, percentage and a progress bar filled to `level%`
#[component]
pub fn SkillBar(skill: Skill) -> impl IntoView {
    view! {
        <div class="skill-item">
            <div class="skill-header">
                <span class="skill-name">{skill.name}</span>
                <span class="skill-percentage">{skill.percentage_label()}</span>
            </div>
            <div class="skill-bar">
                <div class="skill-progress" style=skill.progress_style()></div>
            </div>
        </div>
    }
}
