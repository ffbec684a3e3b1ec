use leptos::prelude::*;

use super::SectionHeader;
use crate::components::counter::Counter;
use crate::components::skill_pill::SkillPill;
use crate::components::spotlight_card::SpotlightCard;
use crate::components::timeline::Timeline;
use crate::content::{ACHIEVEMENTS, EDUCATION, EXPERIENCE, RESUME_URL, SKILLS, YEARS_EXPERIENCE};

/// Bio, education, experience, skills and achievements as a card grid.
#[component]
pub fn About() -> impl IntoView {
	let pills = SKILLS
		.iter()
		.enumerate()
		.map(|(index, skill)| view! { <SkillPill skill=*skill index=index /> })
		.collect_view();

	let achievements = ACHIEVEMENTS
		.iter()
		.map(|a| {
			view! {
				<li class="achievement">
					<span class="achievement-title">{a.title}</span>
					<span class="muted">{a.detail}</span>
				</li>
			}
		})
		.collect_view();

	view! {
		<section id="about">
			<SectionHeader badge="About Me" lead="CRAFTING DIGITAL" tail="EXPERIENCES." />
			<div class="bento">
				<SpotlightCard class="card card-wide">
					<p class="bio-lead">
						"I'm a Full-Stack Developer specializing in scalable systems, distributed architectures, and cloud-native applications."
					</p>
					<p class="muted">
						"Currently pursuing my Master's in Computer Science at Illinois Institute of Technology, I bring hands-on experience from Zoho Corporation and NeuralSeek - Engineering everything from secure MDM infrastructures to RAG-powered AI agents."
					</p>
					<a href=RESUME_URL target="_blank" rel="noopener noreferrer" class="cta cta-solid">
						"Download Resume"
					</a>
				</SpotlightCard>
				<SpotlightCard class="card">
					<h3 class="card-title">"Education"</h3>
					<Timeline items=EDUCATION />
				</SpotlightCard>
				<SpotlightCard class="card">
					<h3 class="card-title">"Highlights"</h3>
					<Counter
						target=YEARS_EXPERIENCE
						decimals=1
						prefix="~"
						label="years industry experience"
					/>
					<p class="muted">"Debugged and fixed issues directly in production environments"</p>
				</SpotlightCard>
				<SpotlightCard class="card card-wide">
					<h3 class="card-title">"Experience"</h3>
					<Timeline items=EXPERIENCE />
				</SpotlightCard>
				<SpotlightCard class="card">
					<h3 class="card-title">"Technical Arsenal"</h3>
					<div class="skill-pills">{pills}</div>
				</SpotlightCard>
				<SpotlightCard class="card">
					<h3 class="card-title">"Achievements"</h3>
					<ul class="achievements">{achievements}</ul>
				</SpotlightCard>
			</div>
		</section>
	}
}
