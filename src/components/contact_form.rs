//! Local state for the simulated contact form.
//!
//! Submission never leaves the page: the form waits [`SUBMIT_DELAY`], shows a
//! success state for [`SUCCESS_DURATION`] and then unlocks again.

use std::time::Duration;

/// Simulated round-trip before the form reports success.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1200);
/// How long the success state stays up before the form resets.
pub const SUCCESS_DURATION: Duration = Duration::from_millis(3000);

/// Where the submit control is in its cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
	/// Accepting input.
	#[default]
	Idle,
	/// Waiting on the simulated round-trip.
	Submitting,
	/// Showing the success state.
	Submitted,
}

impl SubmitPhase {
	/// The submit control is disabled outside `Idle`.
	pub fn is_locked(self) -> bool {
		self != SubmitPhase::Idle
	}

	/// How long this phase lasts before the form moves on by itself.
	/// `Idle` waits for the user.
	pub fn dwell(self) -> Option<Duration> {
		match self {
			SubmitPhase::Idle => None,
			SubmitPhase::Submitting => Some(SUBMIT_DELAY),
			SubmitPhase::Submitted => Some(SUCCESS_DURATION),
		}
	}
}

/// The three required inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
	/// Sender name.
	pub name: String,
	/// Reply address; format is checked by the browser.
	pub email: String,
	/// Message body.
	pub message: String,
}

impl ContactFields {
	/// Every required field has non-blank content.
	pub fn is_complete(&self) -> bool {
		[&self.name, &self.email, &self.message]
			.iter()
			.all(|field| !field.trim().is_empty())
	}
}

/// Form fields plus the submit phase.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
	/// Current input values.
	pub fields: ContactFields,
	phase: SubmitPhase,
}

impl ContactForm {
	/// Current submit phase.
	pub fn phase(&self) -> SubmitPhase {
		self.phase
	}

	/// `Idle -> Submitting`. Refused while locked or with missing fields.
	pub fn begin_submit(&mut self) -> bool {
		if self.phase != SubmitPhase::Idle || !self.fields.is_complete() {
			return false;
		}
		self.phase = SubmitPhase::Submitting;
		true
	}

	/// `Submitting -> Submitted`, clearing the inputs.
	pub fn complete_submit(&mut self) -> bool {
		if self.phase != SubmitPhase::Submitting {
			return false;
		}
		self.phase = SubmitPhase::Submitted;
		self.fields = ContactFields::default();
		true
	}

	/// `Submitted -> Idle`.
	pub fn reset(&mut self) -> bool {
		if self.phase != SubmitPhase::Submitted {
			return false;
		}
		self.phase = SubmitPhase::Idle;
		true
	}

	/// The transition taken when the current phase's [`SubmitPhase::dwell`]
	/// runs out. Returns `false` when idle.
	pub fn elapse(&mut self) -> bool {
		match self.phase {
			SubmitPhase::Idle => false,
			SubmitPhase::Submitting => self.complete_submit(),
			SubmitPhase::Submitted => self.reset(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn filled() -> ContactForm {
		ContactForm {
			fields: ContactFields {
				name: "John Doe".into(),
				email: "john@example.com".into(),
				message: "Let's talk about a RAG pipeline.".into(),
			},
			..ContactForm::default()
		}
	}

	#[test]
	fn test_full_cycle() {
		let mut form = filled();
		assert_eq!(form.phase(), SubmitPhase::Idle);
		assert!(!form.phase().is_locked());

		assert!(form.begin_submit());
		assert_eq!(form.phase(), SubmitPhase::Submitting);
		assert!(form.phase().is_locked());
		assert_eq!(form.fields.name, "John Doe", "fields kept while submitting");

		assert!(form.complete_submit());
		assert_eq!(form.phase(), SubmitPhase::Submitted);
		assert!(form.phase().is_locked());
		assert_eq!(form.fields, ContactFields::default());

		assert!(form.reset());
		assert_eq!(form.phase(), SubmitPhase::Idle);
	}

	#[test]
	fn test_incomplete_form_is_refused() {
		let mut form = filled();
		form.fields.message = "   ".into();
		assert!(!form.begin_submit());
		assert_eq!(form.phase(), SubmitPhase::Idle);
	}

	#[test]
	fn test_out_of_order_transitions_are_ignored() {
		let mut form = filled();
		assert!(!form.complete_submit());
		assert!(!form.reset());

		assert!(form.begin_submit());
		assert!(!form.begin_submit(), "double submit while locked");
		assert!(!form.reset());

		assert!(form.complete_submit());
		form.fields = filled().fields;
		assert!(!form.begin_submit(), "locked during success state");
	}

	#[test]
	fn test_success_state_duration() {
		assert_eq!(SUCCESS_DURATION, Duration::from_secs(3));
		assert!(SUBMIT_DELAY < SUCCESS_DURATION);
	}

	#[test]
	fn test_phase_dwell() {
		assert_eq!(SubmitPhase::Idle.dwell(), None);
		assert_eq!(SubmitPhase::Submitting.dwell(), Some(SUBMIT_DELAY));
		assert_eq!(SubmitPhase::Submitted.dwell(), Some(SUCCESS_DURATION));
	}

	#[test]
	fn test_timed_cycle_follows_dwell() {
		let mut form = filled();
		assert!(!form.elapse(), "idle form has no timer");
		assert!(form.begin_submit());

		let mut elapsed = Duration::ZERO;
		let mut seen = Vec::new();
		while let Some(dwell) = form.phase().dwell() {
			seen.push((form.phase(), elapsed));
			elapsed += dwell;
			assert!(form.elapse());
		}

		assert_eq!(
			seen,
			[
				(SubmitPhase::Submitting, Duration::ZERO),
				(SubmitPhase::Submitted, SUBMIT_DELAY),
			]
		);
		assert_eq!(elapsed, Duration::from_millis(4200));
		assert_eq!(form.phase(), SubmitPhase::Idle);
		assert_eq!(form.fields, ContactFields::default());
	}
}
