//! One-shot scroll reveal for page sections.
//!
//! A section watches its own element with an `IntersectionObserver`. The first
//! intersecting notification flips a `visible` flag and disconnects the
//! observer; the flag never goes back to `false` while the section is mounted.
//! Entrance transitions are plain CSS keyed on the `is-visible` class.

use std::cell::Cell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Visible fraction that reveals most sections.
pub const DEFAULT_THRESHOLD: f64 = 0.15;

/// Latches the first intersection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
	visible: bool,
}

impl RevealLatch {
	/// Whether the section has been revealed.
	pub fn is_visible(&self) -> bool {
		self.visible
	}

	/// Feed one observer notification. Returns `true` only for the
	/// notification that reveals the section.
	pub fn observe(&mut self, intersecting: bool) -> bool {
		if self.visible || !intersecting {
			return false;
		}
		self.visible = true;
		true
	}
}

/// CSS transition delay for the `index`-th element of a staggered group.
pub fn stagger(base_ms: u32, step_ms: u32, index: usize) -> String {
	format!("transition-delay: {}ms;", base_ms as usize + step_ms as usize * index)
}

/// Class list for an element whose entrance depends on `visible`.
pub fn revealed(classes: &str, visible: bool) -> String {
	if visible {
		format!("{classes} reveal is-visible")
	} else {
		format!("{classes} reveal")
	}
}

/// Reactive class list for an element that enters once `visible` is set.
pub fn entrance(
	classes: &'static str,
	visible: ReadSignal<bool>,
) -> impl Fn() -> String + Copy + Send + Sync + 'static {
	move || revealed(classes, visible.get())
}

struct RevealObserver {
	observer: IntersectionObserver,
	_callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

/// Observe the element returned by `target` and report when it first
/// becomes `threshold` visible.
///
/// `target` is read inside an effect, so passing `move || node_ref.get()`
/// starts observing once the element mounts. If it never yields an element,
/// nothing is observed and the flag stays `false`.
pub fn use_reveal<T>(target: impl Fn() -> Option<T> + 'static, threshold: f64) -> ReadSignal<bool>
where
	T: Into<Element>,
{
	let (visible, set_visible) = signal(false);
	let slot = StoredValue::new_local(None::<RevealObserver>);

	Effect::new(move |_| {
		let Some(element) = target().map(Into::into) else {
			return;
		};
		if visible.get_untracked() || slot.with_value(Option::is_some) {
			return;
		}

		let latch = Rc::new(Cell::new(RevealLatch::default()));
		let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
			move |entries: js_sys::Array, observer: IntersectionObserver| {
				let intersecting = entries
					.iter()
					.filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
					.any(|entry| entry.is_intersecting());
				let mut state = latch.get();
				if state.observe(intersecting) {
					latch.set(state);
					set_visible.set(true);
					observer.disconnect();
				}
			},
		);

		let options = IntersectionObserverInit::new();
		options.set_threshold(&JsValue::from_f64(threshold));
		let observer =
			match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
				Ok(observer) => observer,
				Err(err) => {
					warn!("reveal: observer unavailable, showing section: {err:?}");
					set_visible.set(true);
					return;
				}
			};
		observer.observe(&element);
		slot.set_value(Some(RevealObserver {
			observer,
			_callback: callback,
		}));
	});

	on_cleanup(move || {
		let _ = slot.try_update_value(|slot| {
			if let Some(reveal) = slot.take() {
				reveal.observer.disconnect();
			}
		});
	});

	visible
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_latch_reveals_once() {
		let mut latch = RevealLatch::default();
		assert!(!latch.is_visible());
		assert!(!latch.observe(false));
		assert!(!latch.is_visible());
		assert!(latch.observe(true));
		assert!(latch.is_visible());
		assert!(!latch.observe(true), "second intersection is not a transition");
	}

	#[test]
	fn test_latch_never_hides_again() {
		let mut latch = RevealLatch::default();
		latch.observe(true);
		for intersecting in [false, true, false, false] {
			latch.observe(intersecting);
			assert!(latch.is_visible());
		}
	}

	#[test]
	fn test_stagger_delays() {
		assert_eq!(stagger(400, 80, 0), "transition-delay: 400ms;");
		assert_eq!(stagger(400, 80, 3), "transition-delay: 640ms;");
		assert_eq!(stagger(0, 0, 9), "transition-delay: 0ms;");
	}

	#[test]
	fn test_revealed_classes() {
		assert_eq!(revealed("card rise", false), "card rise reveal");
		assert_eq!(revealed("card rise", true), "card rise reveal is-visible");
	}
}
