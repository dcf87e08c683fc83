//! Landing section with the particle backdrop.

use std::time::Duration;

use leptos::prelude::*;
use log::warn;

use super::{SocialIcons, scroll_to_section};
use crate::components::icons::{Icon, IconKind};
use crate::components::particle_field::{ParticleFieldCanvas, Theme};
use crate::components::reveal::entrance;
use crate::content::{Profile, SocialLink};

/// Delay between mount and the start of the entrance transitions.
const LOAD_DELAY: Duration = Duration::from_millis(100);

/// Corner placement and delay for each floating badge.
const BADGE_SLOTS: [(&str, u32); 2] = [("badge-bottom-left", 800), ("badge-top-right", 900)];

/// Full-height landing section over the particle backdrop.
#[component]
pub fn Hero(
	profile: Profile,
	socials: Vec<SocialLink>,
	#[prop(into)] theme: Signal<Theme>,
) -> impl IntoView {
	let (loaded, set_loaded) = signal(false);
	match set_timeout_with_handle(move || set_loaded.set(true), LOAD_DELAY) {
		Ok(handle) => on_cleanup(move || handle.clear()),
		Err(err) => {
			warn!("hero: load timer unavailable, showing content: {err:?}");
			set_loaded.set(true);
		}
	}

	let badges = profile
		.badges
		.into_iter()
		.zip(BADGE_SLOTS)
		.map(|(badge, (slot, delay))| {
			view! {
				<div
					class=entrance(slot, loaded)
					style=format!("transition-delay: {delay}ms;")
				>
					<div class="floating-badge glass">
						<div class="badge-value text-gradient">{badge.value}</div>
						<div class="badge-label">{badge.label}</div>
					</div>
				</div>
			}
		})
		.collect_view();

	view! {
		<section class="hero">
			<ParticleFieldCanvas theme=theme loaded=loaded />
			<div class=entrance("hero-glow glow-primary fade", loaded) />
			<div class=entrance("hero-glow glow-accent fade", loaded) />

			<div class="hero-content section-padding">
				<div class="hero-grid">
					<div class="hero-text">
						<div
							class=entrance("status-badge from-above", loaded)
							style="transition-delay: 200ms;"
						>
							<span class="pulse-dot" />
							<span class="text-muted">{profile.status}</span>
						</div>

						<div class="clip">
							<h1
								class=entrance("hero-title rise-full", loaded)
								style="transition-delay: 300ms;"
							>
								<span class="text-gradient">{profile.headline_accent}</span>
								" "
								{profile.headline}
							</h1>
						</div>

						<p
							class=entrance("hero-tagline from-below", loaded)
							style="transition-delay: 500ms;"
						>
							{profile.tagline}
						</p>

						<div
							class=entrance("hero-actions zoom-in", loaded)
							style="transition-delay: 600ms;"
						>
							<button class="btn-primary" on:click=move |_| scroll_to_section("#projects")>
								"View Projects"
								<Icon kind=IconKind::ExternalLink size=16 />
							</button>
							<button class="btn-secondary" on:click=move |_| scroll_to_section("#contact")>
								"Get In Touch"
							</button>
						</div>

						<div
							class=entrance("hero-socials from-below", loaded)
							style="transition-delay: 700ms;"
						>
							<SocialIcons links=socials />
						</div>
					</div>

					<div class="hero-portrait-column">
						<div
							class=entrance("hero-portrait from-right", loaded)
							style="transition-delay: 400ms;"
						>
							<div class="portrait-frame">
								<div class="portrait-glow" />
								<img src=profile.image alt=profile.name class="portrait-image" />
								<div class="portrait-border" />
							</div>
							{badges}
						</div>
					</div>
				</div>
			</div>
		</section>
	}
}
