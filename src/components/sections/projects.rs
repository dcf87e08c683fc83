//! Project cards with a hover metrics overlay.

use leptos::html;
use leptos::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::reveal::{entrance, revealed, stagger, use_reveal};
use crate::content::Project;

const THRESHOLD: f64 = 0.1;
/// Tech tags shown before collapsing the rest into a `+N` tag.
const TECH_PREVIEW: usize = 4;

/// Grid of project cards, staggered in on first view.
#[component]
pub fn Projects(projects: Vec<Project>) -> impl IntoView {
	let section_ref = NodeRef::<html::Section>::new();
	let visible = use_reveal(move || section_ref.get(), THRESHOLD);
	let (hovered, set_hovered) = signal(None::<u32>);

	let cards = projects
		.into_iter()
		.enumerate()
		.map(|(i, project)| {
			let id = project.id;
			let (shown, hidden) = project.tech_preview(TECH_PREVIEW);
			let tags = shown
				.iter()
				.map(|tech| view! { <span class="tech-tag">{tech.clone()}</span> })
				.collect_view();
			let overflow = hidden.map(|n| view! { <span class="tech-tag">{format!("+{n}")}</span> });
			let metrics = project
				.metrics
				.iter()
				.map(|metric| view! { <span class="metric-pill">{metric.clone()}</span> })
				.collect_view();

			view! {
				<div
					class=move || revealed("project-card group from-below", visible.get())
					style=stagger(200, 100, i)
					on:mouseenter=move |_| set_hovered.set(Some(id))
					on:mouseleave=move |_| set_hovered.set(None)
				>
					<div class="project-media">
						<img src=project.image.clone() alt=project.title.clone() class="project-image" />
						<div class="project-media-shade" />
						<div class=move || {
							if hovered.get() == Some(id) { "project-metrics is-shown" } else { "project-metrics" }
						}>{metrics}</div>
					</div>

					<div class="project-body">
						<h3 class="project-title">{project.title.clone()}</h3>
						<p class="project-description">{project.description.clone()}</p>
						<div class="tech-tags">{tags}{overflow}</div>
						<div class="project-links">
							<a
								href=project.github.clone()
								target="_blank"
								rel="noopener noreferrer"
								class="project-link"
							>
								<Icon kind=IconKind::Github size=16 />
								<span>"Code"</span>
								<Icon kind=IconKind::ArrowUpRight size=12 class="nudge" />
							</a>
							{project.demo.clone().map(|demo| view! {
								<a href=demo target="_blank" rel="noopener noreferrer" class="project-link">
									<Icon kind=IconKind::ExternalLink size=16 />
									<span>"Demo"</span>
								</a>
							})}
						</div>
					</div>
				</div>
			}
		})
		.collect_view();

	view! {
		<section id="projects" node_ref=section_ref class="page-section">
			<div class="section-accent accent-bottom-left" />

			<div class="section-padding section-body">
				<div class="section-heading">
					<div class="clip">
						<h2 class=entrance("from-left", visible)>
							"Featured " <span class="text-gradient">"Projects"</span>
						</h2>
					</div>
					<p
						class=entrance("section-lede from-below", visible)
						style="transition-delay: 150ms;"
					>
						"A collection of my end-to-end AI/ML projects, from research to production-ready solutions."
					</p>
				</div>

				<div class="project-grid">{cards}</div>
			</div>
		</section>
	}
}
