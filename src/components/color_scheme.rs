//! Tracks the system color-scheme preference.

use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{MediaQueryList, MediaQueryListEvent};

use super::particle_field::Theme;

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Active page palette.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorScheme {
	/// Also the fallback when the media query is unavailable.
	#[default]
	Dark,
	/// System prefers a light scheme.
	Light,
}

impl ColorScheme {
	/// Scheme for a `prefers-color-scheme: dark` match result.
	pub fn from_prefers_dark(prefers_dark: bool) -> Self {
		if prefers_dark {
			ColorScheme::Dark
		} else {
			ColorScheme::Light
		}
	}

	pub fn is_dark(self) -> bool {
		self == ColorScheme::Dark
	}

	/// Palette for this scheme.
	pub fn theme(self) -> Theme {
		match self {
			ColorScheme::Dark => Theme::dark(),
			ColorScheme::Light => Theme::light(),
		}
	}
}

struct SchemeListener {
	query: MediaQueryList,
	callback: Closure<dyn FnMut(MediaQueryListEvent)>,
}

fn dark_query() -> Option<MediaQueryList> {
	web_sys::window()?.match_media(DARK_QUERY).ok()?
}

fn apply_to_document(scheme: ColorScheme) {
	let Some(root) = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.document_element())
	else {
		return;
	};
	if let Err(err) = root.class_list().toggle_with_force("dark", scheme.is_dark()) {
		warn!("color scheme: failed to toggle root class: {err:?}");
	}
}

/// Follow `prefers-color-scheme`, mirroring it onto the `dark` class of the
/// document root. Defaults to dark when the media query is unavailable.
pub fn use_color_scheme() -> ReadSignal<ColorScheme> {
	let query = dark_query();
	let initial = query
		.as_ref()
		.map(|q| ColorScheme::from_prefers_dark(q.matches()))
		.unwrap_or_default();
	let (scheme, set_scheme) = signal(initial);
	let listener = StoredValue::new_local(None::<SchemeListener>);

	if let Some(query) = query {
		let callback = Closure::<dyn FnMut(MediaQueryListEvent)>::new(move |ev: MediaQueryListEvent| {
			let next = ColorScheme::from_prefers_dark(ev.matches());
			debug!("color scheme: switched to {next:?}");
			set_scheme.set(next);
		});
		match query.add_event_listener_with_callback("change", callback.as_ref().unchecked_ref()) {
			Ok(()) => listener.set_value(Some(SchemeListener { query, callback })),
			Err(err) => warn!("color scheme: cannot listen for changes: {err:?}"),
		}
	}

	Effect::new(move |_| apply_to_document(scheme.get()));

	on_cleanup(move || {
		let _ = listener.try_update_value(|slot| {
			if let Some(SchemeListener { query, callback }) = slot.take() {
				let _ = query.remove_event_listener_with_callback(
					"change",
					callback.as_ref().unchecked_ref(),
				);
			}
		});
	});

	scheme
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_scheme_from_preference() {
		assert_eq!(ColorScheme::from_prefers_dark(true), ColorScheme::Dark);
		assert_eq!(ColorScheme::from_prefers_dark(false), ColorScheme::Light);
		assert_eq!(ColorScheme::default(), ColorScheme::Dark);
	}

	#[test]
	fn test_scheme_selects_palette() {
		assert_eq!(ColorScheme::Dark.theme(), Theme::dark());
		assert_eq!(ColorScheme::Light.theme().name, "light");
		assert!(!ColorScheme::Light.is_dark());
	}
}
