//! Bio, animated statistics and skill categories.

use leptos::html;
use leptos::prelude::*;

use crate::components::counter::use_counters;
use crate::components::icons::Icon;
use crate::components::reveal::{DEFAULT_THRESHOLD, entrance, revealed, stagger, use_reveal};
use crate::content::{SkillCategory, Stat};

/// Bio, count-up statistics and skill categories.
#[component]
pub fn About(bio: Vec<String>, stats: Vec<Stat>, skills: Vec<SkillCategory>) -> impl IntoView {
	let section_ref = NodeRef::<html::Section>::new();
	let visible = use_reveal(move || section_ref.get(), DEFAULT_THRESHOLD);
	let counters = use_counters(stats.iter().map(|s| s.value).collect(), visible);

	let paragraphs = bio
		.into_iter()
		.map(|text| view! { <p>{text}</p> })
		.collect_view();

	let stat_cards = stats
		.into_iter()
		.enumerate()
		.map(|(i, stat)| {
			view! {
				<div class="stat-card card">
					<div class="stat-value text-gradient">
						{move || counters.with(|values| values.get(i).copied().unwrap_or(0))}
						{stat.suffix}
					</div>
					<div class="stat-label">{stat.label}</div>
				</div>
			}
		})
		.collect_view();

	let categories = skills
		.into_iter()
		.enumerate()
		.map(|(i, category)| {
			let tags = category
				.skills
				.into_iter()
				.map(|skill| view! { <span class="skill-item">{skill}</span> })
				.collect_view();
			view! {
				<div
					class=move || revealed("skill-card card lift from-below", visible.get())
					style=stagger(400, 80, i)
				>
					<div class="skill-card-header">
						<div class="icon-chip">
							<Icon kind=category.icon size=16 />
						</div>
						<h3>{category.name}</h3>
					</div>
					<div class="skill-tags">{tags}</div>
				</div>
			}
		})
		.collect_view();

	view! {
		<section id="about" node_ref=section_ref class="page-section">
			<div class="section-accent accent-top-right" />

			<div class="section-padding section-body">
				<div class="section-heading">
					<div class="clip">
						<h2 class=entrance("rise-full", visible)>
							"About " <span class="text-gradient">"Me"</span>
						</h2>
					</div>
				</div>

				<div class="two-column">
					<div>
						<div
							class=entrance("bio from-below", visible)
							style="transition-delay: 150ms;"
						>
							{paragraphs}
						</div>

						<div
							class=entrance("stat-grid from-below", visible)
							style="transition-delay: 300ms;"
						>
							{stat_cards}
						</div>
					</div>

					<div
						class=entrance("skill-list from-right", visible)
						style="transition-delay: 400ms;"
					>
						{categories}
					</div>
				</div>
			</div>
		</section>
	}
}
