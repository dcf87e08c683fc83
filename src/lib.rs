//! portfolio-site: single-page developer portfolio rendered client-side.
//!
//! The page is a fixed sequence of sections over an animated particle field.
//! Content comes from JSON compiled into the binary, optionally replaced by a
//! `<script id="portfolio-data">` element in the host page.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod content;

use components::color_scheme::use_color_scheme;
use components::particle_field::Theme;
use components::sections::{
	About, Certifications, Contact, Experience, Footer, Hero, Navigation, Projects,
};
pub use content::Portfolio;

#[cfg(debug_assertions)]
const LOG_LEVEL: Level = Level::Debug;
#[cfg(not(debug_assertions))]
const LOG_LEVEL: Level = Level::Info;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(LOG_LEVEL);
	console_error_panic_hook::set_once();
	info!("portfolio: logging initialized");
}

/// Read content from a script element with id="portfolio-data".
fn load_portfolio() -> Option<Portfolio> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("portfolio-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match Portfolio::from_json(&json_text) {
		Ok(portfolio) => {
			info!(
				"portfolio: loaded {} projects, {} certifications from page",
				portfolio.projects.len(),
				portfolio.certifications.len()
			);
			Some(portfolio)
		}
		Err(e) => {
			warn!("portfolio: failed to parse page content: {}", e);
			None
		}
	}
}

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let portfolio = load_portfolio().unwrap_or_else(Portfolio::embedded);
	let scheme = use_color_scheme();
	let theme = Signal::derive(move || scheme.get().theme());

	let Portfolio {
		profile,
		socials,
		nav,
		skills,
		stats,
		projects,
		experience,
		certifications,
	} = portfolio;
	let title = format!("{} | AI/ML Engineer", profile.name);

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text=title />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />
		<Meta name="description" content=profile.tagline.clone() />
		<Style>{Theme::stylesheet()}</Style>

		<div class="page">
			<Navigation initials=profile.initials.clone() links=nav.clone() />
			<main>
				<Hero profile=profile.clone() socials=socials.clone() theme=theme />
				<About bio=profile.bio.clone() stats=stats skills=skills />
				<Projects projects=projects />
				<Experience entries=experience />
				<Certifications certifications=certifications />
				<Contact profile=profile.clone() socials=socials.clone() />
			</main>
			<Footer profile=profile socials=socials links=nav />
		</div>
	}
}
