//! Tunable parameters for the particle backdrop.
//!
//! All distances are in canvas pixels and all speeds in pixels per rendered
//! frame. Alpha values are multipliers applied to the theme's primary color.

/// Configuration for particle density, motion and link drawing.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
	/// Viewports narrower than this use the mobile particle count.
	pub mobile_breakpoint: f64,
	/// Particles on narrow viewports.
	pub mobile_count: usize,
	/// Particles everywhere else.
	pub desktop_count: usize,
	/// Pairs closer than this are connected by a line.
	pub connection_distance: f64,
	/// Upper bound on links a particle starts per frame.
	pub max_connections: usize,
	/// Bound on each velocity component at seeding time.
	pub max_speed: f64,
	/// Smallest seeded radius.
	pub radius_min: f64,
	/// Exclusive upper bound on seeded radius.
	pub radius_max: f64,
	/// Opacity of particle dots.
	pub particle_alpha: f64,
	/// Opacity of a link between two coincident particles.
	pub link_alpha: f64,
	/// Line width of links.
	pub link_width: f64,
	/// Opacity of the background wash laid over the previous frame.
	pub trail_alpha: f64,
	/// Render on one of every `frame_stride` animation-frame callbacks.
	pub frame_stride: u32,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			mobile_breakpoint: 768.0,
			mobile_count: 20,
			desktop_count: 40,
			connection_distance: 120.0,
			max_connections: 3,
			max_speed: 0.2,
			radius_min: 0.5,
			radius_max: 2.0,
			particle_alpha: 0.6,
			link_alpha: 0.25,
			link_width: 0.5,
			trail_alpha: 16.0 / 255.0,
			frame_stride: 2,
		}
	}
}

impl FieldConfig {
	/// Two-tier density policy keyed on viewport width.
	pub fn particle_count(&self, viewport_width: f64) -> usize {
		if viewport_width < self.mobile_breakpoint {
			self.mobile_count
		} else {
			self.desktop_count
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_density_is_two_tier() {
		let config = FieldConfig::default();
		assert_eq!(config.particle_count(320.0), 20);
		assert_eq!(config.particle_count(767.9), 20);
		assert_eq!(config.particle_count(768.0), 40);
		assert_eq!(config.particle_count(2560.0), 40);
	}

	#[test]
	fn test_trail_alpha_matches_hex_suffix() {
		// `10` hex alpha suffix on the background color.
		let config = FieldConfig::default();
		assert!((config.trail_alpha * 255.0 - 16.0).abs() < 1e-9);
	}
}
