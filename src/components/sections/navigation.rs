//! Fixed top navigation with a mobile overlay menu.

use leptos::ev;
use leptos::prelude::*;

use super::{scroll_to_section, scroll_to_top};
use crate::components::icons::{Icon, IconKind};
use crate::content::NavLink;

/// Scroll offset past which the bar switches to its condensed style.
pub const SCROLL_THRESHOLD: f64 = 50.0;

fn is_scrolled(scroll_y: f64) -> bool {
	scroll_y > SCROLL_THRESHOLD
}

/// Fixed navigation bar and its mobile overlay.
#[component]
pub fn Navigation(#[prop(into)] initials: String, links: Vec<NavLink>) -> impl IntoView {
	let (scrolled, set_scrolled) = signal(false);
	let (menu_open, set_menu_open) = signal(false);

	let listener = window_event_listener(ev::scroll, move |_| {
		let y = web_sys::window()
			.and_then(|w| w.scroll_y().ok())
			.unwrap_or(0.0);
		set_scrolled.set(is_scrolled(y));
	});
	on_cleanup(move || listener.remove());

	let desktop = links
		.iter()
		.map(|link| {
			let href = link.href.clone();
			view! {
				<button class="nav-link" on:click=move |_| scroll_to_section(&href)>
					{link.name.clone()}
					<span class="nav-underline" />
				</button>
			}
		})
		.collect_view();

	let mobile = links
		.into_iter()
		.enumerate()
		.map(|(i, link)| {
			let href = link.href;
			view! {
				<button
					class="mobile-link"
					style=format!("animation-delay: {}ms;", i * 50)
					on:click=move |_| {
						scroll_to_section(&href);
						set_menu_open.set(false);
					}
				>
					{link.name}
				</button>
			}
		})
		.collect_view();

	view! {
		<nav class=move || if scrolled.get() { "site-nav is-scrolled" } else { "site-nav" }>
			<div class="section-padding nav-inner">
				<a
					href="#"
					class="logo"
					on:click=move |ev| {
						ev.prevent_default();
						scroll_to_top();
					}
				>
					<span class="text-gradient">{initials}</span>
				</a>

				<div class="nav-links">{desktop}</div>

				<button
					class="menu-toggle"
					aria-label="Toggle menu"
					on:click=move |_| set_menu_open.update(|open| *open = !*open)
				>
					{move || {
						let kind = if menu_open.get() { IconKind::Close } else { IconKind::Menu };
						view! { <Icon kind=kind size=20 /> }
					}}
				</button>
			</div>
		</nav>

		<div class=move || if menu_open.get() { "mobile-menu is-open" } else { "mobile-menu" }>
			<div class="mobile-menu-links">{mobile}</div>
		</div>
	}
}
