//! Page sections, in page order.

mod about;
mod certifications;
mod contact;
mod experience;
mod footer;
mod hero;
mod navigation;
mod projects;

use leptos::prelude::*;
use log::debug;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

pub use about::About;
pub use certifications::Certifications;
pub use contact::Contact;
pub use experience::Experience;
pub use footer::Footer;
pub use hero::Hero;
pub use navigation::Navigation;
pub use projects::Projects;

use super::icons::Icon;
use crate::content::SocialLink;

/// Smooth-scroll to the element matching `selector` (e.g. `#projects`).
fn scroll_to_section(selector: &str) {
	let Some(element) = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.query_selector(selector).ok().flatten())
	else {
		debug!("scroll: no element matches {selector}");
		return;
	};
	let options = ScrollIntoViewOptions::new();
	options.set_behavior(ScrollBehavior::Smooth);
	element.scroll_into_view_with_scroll_into_view_options(&options);
}

fn scroll_to_top() {
	let Some(window) = web_sys::window() else {
		return;
	};
	let options = ScrollToOptions::new();
	options.set_top(0.0);
	options.set_behavior(ScrollBehavior::Smooth);
	window.scroll_to_with_scroll_to_options(&options);
}

/// Row of icon links to external profiles.
#[component]
fn SocialIcons(
	links: Vec<SocialLink>,
	#[prop(default = 18)] size: u32,
	#[prop(default = "social-icon")] class: &'static str,
) -> impl IntoView {
	links
		.into_iter()
		.map(|link| {
			view! {
				<a
					href=link.href
					target="_blank"
					rel="noopener noreferrer"
					class=class
					aria-label=link.label
				>
					<Icon kind=link.icon size=size />
				</a>
			}
		})
		.collect_view()
}
