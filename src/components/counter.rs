//! Eased count-up animation for the About statistics.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;
use log::warn;

/// Number of discrete updates in one count-up.
pub const COUNTER_STEPS: u32 = 40;
/// Wall-clock length of one count-up.
pub const COUNTER_DURATION: Duration = Duration::from_millis(1200);

/// Cubic ease-out value for `step` of `steps`, floored. The last step is
/// exactly `target`.
pub fn eased_value(target: u32, step: u32, steps: u32) -> u32 {
	if steps == 0 || step >= steps {
		return target;
	}
	let progress = f64::from(step) / f64::from(steps);
	let eased = 1.0 - (1.0 - progress).powi(3);
	(f64::from(target) * eased).floor() as u32
}

/// Steps a group of counters from zero to their targets.
#[derive(Clone, Debug)]
pub struct CounterAnimation {
	targets: Vec<u32>,
	steps: u32,
	step: u32,
}

impl CounterAnimation {
	/// Counters for `targets`, reaching them after `steps` ticks.
	pub fn new(targets: Vec<u32>, steps: u32) -> Self {
		Self {
			targets,
			steps,
			step: 0,
		}
	}

	/// Currently displayed values.
	pub fn values(&self) -> Vec<u32> {
		self.targets
			.iter()
			.map(|&target| eased_value(target, self.step, self.steps))
			.collect()
	}

	/// Every counter shows its target.
	pub fn is_finished(&self) -> bool {
		self.step >= self.steps
	}

	/// Advance one step. Returns `None` once the animation has finished.
	pub fn tick(&mut self) -> Option<Vec<u32>> {
		if self.is_finished() {
			return None;
		}
		self.step += 1;
		Some(self.values())
	}

	/// Delay between ticks so that all steps span `duration`.
	pub fn interval(&self, duration: Duration) -> Duration {
		duration / self.steps.max(1)
	}
}

/// Count `targets` up from zero the first time `start` becomes `true`.
///
/// Runs once per mount; the interval is cleared when the animation finishes
/// or the owner is cleaned up.
pub fn use_counters(targets: Vec<u32>, start: ReadSignal<bool>) -> ReadSignal<Vec<u32>> {
	let (values, set_values) = signal(vec![0; targets.len()]);
	let started = StoredValue::new(false);
	let interval = StoredValue::new(None::<IntervalHandle>);

	Effect::new(move |_| {
		if !start.get() || started.get_value() {
			return;
		}
		started.set_value(true);

		let animation = Rc::new(RefCell::new(CounterAnimation::new(
			targets.clone(),
			COUNTER_STEPS,
		)));
		let period = animation.borrow().interval(COUNTER_DURATION);
		let handle = set_interval_with_handle(
			move || {
				let mut animation = animation.borrow_mut();
				if let Some(step_values) = animation.tick() {
					set_values.set(step_values);
				}
				if animation.is_finished() {
					if let Some(Some(handle)) = interval.try_update_value(Option::take) {
						handle.clear();
					}
				}
			},
			period,
		);
		match handle {
			Ok(handle) => interval.set_value(Some(handle)),
			Err(err) => {
				warn!("counter: interval unavailable, showing final values: {err:?}");
				set_values.set(targets.clone());
			}
		}
	});

	on_cleanup(move || {
		if let Some(Some(handle)) = interval.try_update_value(Option::take) {
			handle.clear();
		}
	});

	values
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_eased_value_formula() {
		for &target in &[5u32, 6, 99, 500] {
			for step in 0..=COUNTER_STEPS {
				let progress = step as f64 / COUNTER_STEPS as f64;
				let expected = (target as f64 * (1.0 - (1.0 - progress).powi(3))).floor() as u32;
				assert_eq!(eased_value(target, step, COUNTER_STEPS), expected);
			}
		}
	}

	#[test]
	fn test_eased_value_is_monotonic_and_exact_at_end() {
		let mut last = 0;
		for step in 0..=COUNTER_STEPS {
			let v = eased_value(500, step, COUNTER_STEPS);
			assert!(v >= last);
			last = v;
		}
		assert_eq!(last, 500);
		assert_eq!(eased_value(7, 0, 0), 7);
	}

	#[test]
	fn test_animation_runs_to_targets_once() {
		let mut animation = CounterAnimation::new(vec![5, 6, 500, 99], COUNTER_STEPS);
		assert_eq!(animation.values(), [0, 0, 0, 0]);

		let mut ticks = 0;
		let mut last = Vec::new();
		while let Some(values) = animation.tick() {
			ticks += 1;
			last = values;
		}
		assert_eq!(ticks, COUNTER_STEPS);
		assert_eq!(last, [5, 6, 500, 99]);
		assert!(animation.is_finished());
		assert_eq!(animation.tick(), None, "not re-triggerable");
	}

	#[test]
	fn test_first_step_is_eased() {
		let mut animation = CounterAnimation::new(vec![500], COUNTER_STEPS);
		// 500 * (1 - (39/40)^3) = 36.56...
		assert_eq!(animation.tick(), Some(vec![36]));
	}

	#[test]
	fn test_interval_spans_duration() {
		let animation = CounterAnimation::new(vec![1], COUNTER_STEPS);
		assert_eq!(
			animation.interval(COUNTER_DURATION),
			Duration::from_millis(30)
		);
		assert_eq!(
			CounterAnimation::new(vec![1], 0).interval(COUNTER_DURATION),
			COUNTER_DURATION
		);
	}
}
