//! Page footer with quick links and a back-to-top control.

use leptos::ev::MouseEvent;
use leptos::html;
use leptos::prelude::*;

use super::{SocialIcons, scroll_to_top};
use crate::components::icons::{Icon, IconKind};
use crate::components::reveal::{entrance, use_reveal};
use crate::content::{NavLink, Profile, SocialLink};

const THRESHOLD: f64 = 0.2;

fn copyright(year: u16, name: &str) -> String {
	format!("\u{a9} {year} {name}. All rights reserved.")
}

/// Site footer. Its contents slide in once a fifth of it is visible.
#[component]
pub fn Footer(profile: Profile, socials: Vec<SocialLink>, links: Vec<NavLink>) -> impl IntoView {
	let footer_ref = NodeRef::<html::Footer>::new();
	let visible = use_reveal(move || footer_ref.get(), THRESHOLD);

	let quick_links = links
		.into_iter()
		.map(|link| {
			view! {
				<li>
					<a href=link.href class="footer-link">{link.name}</a>
				</li>
			}
		})
		.collect_view();

	let on_brand = move |ev: MouseEvent| {
		ev.prevent_default();
		scroll_to_top();
	};

	view! {
		<footer node_ref=footer_ref class="site-footer">
			<div class=entrance("footer-rule grow-x", visible) />

			<div class="section-padding">
				<div class="footer-grid">
					<div class=entrance("from-below", visible) style="transition-delay: 100ms;">
						<a href="#" class="logo" on:click=on_brand>
							<span class="text-gradient">{profile.initials.clone()}</span>
						</a>
						<p class="text-muted small">{profile.blurb.clone()}</p>
					</div>

					<div class=entrance("from-below", visible) style="transition-delay: 150ms;">
						<h4>"Quick Links"</h4>
						<ul class="footer-list">{quick_links}</ul>
					</div>

					<div class=entrance("from-below", visible) style="transition-delay: 200ms;">
						<h4>"Contact"</h4>
						<ul class="footer-list text-muted small">
							<li>
								<a href=profile.mailto() class="footer-link">{profile.email.clone()}</a>
							</li>
							<li>
								<a href=profile.tel() class="footer-link">{profile.phone.clone()}</a>
							</li>
							<li>{profile.location.clone()}</li>
						</ul>
					</div>

					<div class=entrance("from-below", visible) style="transition-delay: 250ms;">
						<h4>"Follow Me"</h4>
						<div class="social-row">
							<SocialIcons links=socials size=16 class="social-tile small" />
						</div>
					</div>
				</div>

				<div class=entrance("footer-bar from-below", visible) style="transition-delay: 300ms;">
					<p class="text-muted tiny">{copyright(profile.copyright_year, &profile.name)}</p>
					<button class="back-to-top group" on:click=move |_| scroll_to_top()>
						<span class="tiny">"Back to top"</span>
						<span class="back-to-top-chip">
							<Icon kind=IconKind::ArrowUp size=14 class="nudge-up" />
						</span>
					</button>
				</div>
			</div>
		</footer>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_copyright_line() {
		assert_eq!(
			copyright(2025, "Aarjun Mahule"),
			"\u{a9} 2025 Aarjun Mahule. All rights reserved."
		);
	}
}
