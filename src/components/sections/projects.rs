use leptos::prelude::*;

use super::SectionHeader;
use crate::components::project_card::ProjectCard;
use crate::content::PROJECTS;

#[component]
pub fn Projects() -> impl IntoView {
	let cards = PROJECTS
		.iter()
		.enumerate()
		.map(|(index, project)| view! { <ProjectCard project=project index=index /> })
		.collect_view();

	view! {
		<section id="projects">
			<SectionHeader badge="Selected Work" lead="Project" tail="Archive." />
			<div class="project-grid">{cards}</div>
		</section>
	}
}
