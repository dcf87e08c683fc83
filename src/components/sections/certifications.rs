//! Certification cards linking to the course pages.

use leptos::html;
use leptos::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::particle_field::Color;
use crate::components::reveal::{DEFAULT_THRESHOLD, entrance, revealed, stagger, use_reveal};
use crate::content::Certification;

/// Opacity of the tinted badge behind a monogram (`15` hex suffix).
const BADGE_TINT: f64 = 0x15 as f64 / 255.0;

fn badge_style(color: &str) -> String {
	match Color::parse(color) {
		Some(c) => format!(
			"background: {}; color: {};",
			c.with_alpha(BADGE_TINT).to_css(),
			c.to_css_rgb()
		),
		None => String::new(),
	}
}

/// Certification cards and the closing footnote.
#[component]
pub fn Certifications(certifications: Vec<Certification>) -> impl IntoView {
	let section_ref = NodeRef::<html::Section>::new();
	let visible = use_reveal(move || section_ref.get(), DEFAULT_THRESHOLD);

	let cards = certifications
		.into_iter()
		.enumerate()
		.map(|(i, cert)| {
			view! {
				<a
					href=cert.link
					target="_blank"
					rel="noopener noreferrer"
					class=move || revealed("cert-card group from-below", visible.get())
					style=stagger(100, 80, i)
				>
					<div class="cert-monogram" style=badge_style(&cert.color)>
						{cert.monogram}
					</div>
					<div class="cert-body">
						<h3>{cert.name}</h3>
						<p class="text-muted">{cert.provider}</p>
					</div>
					<Icon kind=IconKind::ExternalLink size=14 class="cert-link-icon" />
				</a>
			}
		})
		.collect_view();

	view! {
		<section id="certifications" node_ref=section_ref class="page-section">
			<div class="section-accent accent-top-right narrow" />

			<div class="section-padding section-body">
				<div class="section-heading">
					<div class="clip">
						<h2 class=entrance("rise-full", visible)>
							<span class="text-gradient">"Certifications"</span>
						</h2>
					</div>
					<p
						class=entrance("section-lede from-below", visible)
						style="transition-delay: 150ms;"
					>
						"Continuous learning in cutting-edge AI/ML technologies from industry leaders."
					</p>
				</div>

				<div class="cert-grid">{cards}</div>

				<div
					class=entrance("cert-footnote from-below", visible)
					style="transition-delay: 600ms;"
				>
					<Icon kind=IconKind::Award size=16 />
					<span>"Always learning, always growing"</span>
				</div>
			</div>
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_badge_is_tinted_brand_color() {
		assert_eq!(
			badge_style("#76b900"),
			format!(
				"background: rgba(118, 185, 0, {}); color: #76b900;",
				0x15 as f64 / 255.0
			)
		);
		assert_eq!(badge_style("green"), "");
	}

	#[test]
	fn test_malformed_brand_color_renders_untinted() {
		let cert: Certification = serde_json::from_str(
			r##"{ "id": 1, "name": "x", "provider": "y", "monogram": "XY", "color": "#\u20acabc", "link": "#" }"##,
		)
		.unwrap();
		assert_eq!(cert.color.len(), 7);
		assert_eq!(badge_style(&cert.color), "");
	}
}
