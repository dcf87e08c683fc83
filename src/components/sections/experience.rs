//! Alternating experience timeline.

use leptos::html;
use leptos::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::reveal::{DEFAULT_THRESHOLD, entrance, revealed, stagger, use_reveal};
use crate::content::ExperienceEntry;

/// Timeline of positions, alternating sides on wide screens.
#[component]
pub fn Experience(entries: Vec<ExperienceEntry>) -> impl IntoView {
	let section_ref = NodeRef::<html::Section>::new();
	let visible = use_reveal(move || section_ref.get(), DEFAULT_THRESHOLD);
	let (hovered, set_hovered) = signal(None::<u32>);

	let items = entries
		.into_iter()
		.enumerate()
		.map(|(i, entry)| {
			let id = entry.id;
			let side = if i % 2 == 0 { "timeline-item" } else { "timeline-item is-reversed" };
			let is_hovered = move || hovered.get() == Some(id);
			let achievements = entry
				.achievements
				.into_iter()
				.map(|achievement| {
					view! {
						<li>
							<Icon kind=IconKind::ChevronRight size=14 class="bullet" />
							<span>{achievement}</span>
						</li>
					}
				})
				.collect_view();

			view! {
				<div
					class=move || {
						let base = if is_hovered() { format!("{side} is-hovered") } else { side.to_string() };
						revealed(&format!("{base} from-below"), visible.get())
					}
					style=stagger(400, 200, i)
					on:mouseenter=move |_| set_hovered.set(Some(id))
					on:mouseleave=move |_| set_hovered.set(None)
				>
					<div class="timeline-node" />
					<div class="timeline-card-column">
						<div class="timeline-card">
							<div class="timeline-card-header">
								<div class="icon-chip">
									<Icon kind=IconKind::Briefcase size=18 />
								</div>
								<div>
									<h3>{entry.role}</h3>
									<p class="company">{entry.company}</p>
								</div>
							</div>
							<div class="timeline-meta">
								<span>
									<Icon kind=IconKind::Calendar size=12 />
									{entry.period}
								</span>
								<span>
									<Icon kind=IconKind::MapPin size=12 />
									{entry.location}
								</span>
							</div>
							<ul class="achievements">{achievements}</ul>
						</div>
					</div>
					<div class="timeline-spacer" />
				</div>
			}
		})
		.collect_view();

	view! {
		<section id="experience" node_ref=section_ref class="page-section">
			<div class="section-accent accent-center" />

			<div class="section-padding section-body">
				<div class="section-heading centered">
					<div class="clip">
						<h2 class=entrance("drop-full", visible)>
							<span class="text-gradient">"Experience"</span>
						</h2>
					</div>
				</div>

				<div class="timeline">
					<div class=entrance("timeline-line fade", visible) style="transition-delay: 200ms;" />
					<div class="timeline-items">{items}</div>
				</div>
			</div>
		</section>
	}
}
