//! Particle simulation behind the hero backdrop.

use super::config::FieldConfig;

/// A single drifting point.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Horizontal position in canvas pixels.
	pub x: f64,
	/// Vertical position in canvas pixels.
	pub y: f64,
	/// Horizontal velocity per rendered frame.
	pub vx: f64,
	/// Vertical velocity per rendered frame.
	pub vy: f64,
	/// Dot radius in pixels.
	pub radius: f64,
}

/// A line to draw between two particles this frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Link {
	/// Index of the particle that started the link.
	pub from: usize,
	/// Index of the other end, always greater than `from`.
	pub to: usize,
	/// Line opacity, already scaled by distance.
	pub opacity: f64,
}

/// Opacity for a pair `distance` apart, or `None` when they are too far apart
/// to be linked. Closer pairs draw more opaque lines.
pub fn link_opacity(distance: f64, threshold: f64, peak: f64) -> Option<f64> {
	if distance >= threshold {
		return None;
	}
	Some(((1.0 - distance / threshold) * peak).max(0.0))
}

/// Owns every particle for the lifetime of one mounted canvas.
pub struct ParticleField {
	/// Particles in seeding order; link indices refer to this.
	pub particles: Vec<Particle>,
	width: f64,
	height: f64,
	frame: u64,
}

impl ParticleField {
	/// Seeds particles inside `width` x `height`.
	///
	/// `sample` must yield uniform values in `[0, 1)`; the browser passes
	/// `js_sys::Math::random`.
	pub fn seed(
		config: &FieldConfig,
		width: f64,
		height: f64,
		mut sample: impl FnMut() -> f64,
	) -> Self {
		let count = config.particle_count(width);
		let mut particles = Vec::with_capacity(count);

		for _ in 0..count {
			let x = sample() * width;
			let y = sample() * height;
			let vx = (sample() - 0.5) * 2.0 * config.max_speed;
			let vy = (sample() - 0.5) * 2.0 * config.max_speed;
			let radius = config.radius_min + sample() * (config.radius_max - config.radius_min);
			particles.push(Particle {
				x,
				y,
				vx,
				vy,
				radius,
			});
		}

		Self::from_particles(particles, width, height)
	}

	/// Field over explicit particles, with the frame counter at zero.
	pub fn from_particles(particles: Vec<Particle>, width: f64, height: f64) -> Self {
		Self {
			particles,
			width,
			height,
			frame: 0,
		}
	}

	/// Current bound on `x`.
	pub fn width(&self) -> f64 {
		self.width
	}

	/// Current bound on `y`.
	pub fn height(&self) -> f64 {
		self.height
	}

	/// Update the bounds. Particles keep their absolute positions; any left
	/// outside the new bounds are turned back by [`Self::step`].
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	/// Count an animation-frame callback. Returns whether this callback
	/// should simulate and draw.
	pub fn advance(&mut self, stride: u32) -> bool {
		self.frame += 1;
		self.frame % u64::from(stride.max(1)) == 0
	}

	/// Move every particle by its velocity and bounce off the edges.
	///
	/// Positions are never clamped, so a particle can sit just past an edge
	/// for one frame. A crossing turns the velocity back toward the interior,
	/// so each crossing flips the sign exactly once.
	pub fn step(&mut self) {
		for p in &mut self.particles {
			p.x += p.vx;
			p.y += p.vy;

			if p.x < 0.0 {
				p.vx = p.vx.abs();
			} else if p.x > self.width {
				p.vx = -p.vx.abs();
			}
			if p.y < 0.0 {
				p.vy = p.vy.abs();
			} else if p.y > self.height {
				p.vy = -p.vy.abs();
			}
		}
	}

	/// Links for the current positions.
	///
	/// Pairs are visited as `(i, j)` with `j > i`; a particle stops looking
	/// for partners once it has started `max_connections` links.
	pub fn links(&self, config: &FieldConfig) -> Vec<Link> {
		let mut links = Vec::new();

		for (i, a) in self.particles.iter().enumerate() {
			let mut connections = 0;
			for (j, b) in self.particles.iter().enumerate().skip(i + 1) {
				if connections >= config.max_connections {
					break;
				}
				let (dx, dy) = (b.x - a.x, b.y - a.y);
				let distance = (dx * dx + dy * dy).sqrt();
				if let Some(opacity) =
					link_opacity(distance, config.connection_distance, config.link_alpha)
				{
					connections += 1;
					links.push(Link {
						from: i,
						to: j,
						opacity,
					});
				}
			}
		}

		links
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	/// Deterministic xorshift sampler in `[0, 1)`.
	fn sampler(seed: u64) -> impl FnMut() -> f64 {
		let mut state = seed.max(1);
		move || {
			state ^= state << 13;
			state ^= state >> 7;
			state ^= state << 17;
			(state >> 11) as f64 / (1u64 << 53) as f64
		}
	}

	fn particle(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
		Particle {
			x,
			y,
			vx,
			vy,
			radius: 1.0,
		}
	}

	#[test]
	fn test_seed_respects_bounds_and_density() {
		let config = FieldConfig::default();
		let field = ParticleField::seed(&config, 1280.0, 720.0, sampler(7));
		assert_eq!(field.particles.len(), 40);
		for p in &field.particles {
			assert!((0.0..1280.0).contains(&p.x));
			assert!((0.0..720.0).contains(&p.y));
			assert!(p.vx.abs() <= config.max_speed);
			assert!(p.vy.abs() <= config.max_speed);
			assert!((config.radius_min..config.radius_max).contains(&p.radius));
		}

		let mobile = ParticleField::seed(&config, 375.0, 812.0, sampler(7));
		assert_eq!(mobile.particles.len(), 20);
	}

	#[test]
	fn test_step_advances_by_velocity() {
		let mut field =
			ParticleField::from_particles(vec![particle(10.0, 20.0, 0.1, -0.2)], 100.0, 100.0);
		field.step();
		let p = &field.particles[0];
		assert!((p.x - 10.1).abs() < 1e-12);
		assert!((p.y - 19.8).abs() < 1e-12);
		assert_eq!((p.vx, p.vy), (0.1, -0.2));
	}

	#[test]
	fn test_edge_crossing_flips_velocity_once() {
		let mut field =
			ParticleField::from_particles(vec![particle(99.9, 50.0, 0.2, 0.0)], 100.0, 100.0);

		field.step();
		assert!(field.particles[0].x > 100.0, "overshoots for one frame");
		assert_eq!(field.particles[0].vx, -0.2);

		field.step();
		assert!(field.particles[0].x <= 100.0);
		assert_eq!(field.particles[0].vx, -0.2, "no second flip");
	}

	#[test]
	fn test_top_left_edges_bounce() {
		let mut field =
			ParticleField::from_particles(vec![particle(0.05, 0.05, -0.1, -0.1)], 100.0, 100.0);
		field.step();
		assert_eq!((field.particles[0].vx, field.particles[0].vy), (0.1, 0.1));
		field.step();
		assert!(field.particles[0].x >= 0.0 && field.particles[0].y >= 0.0);
	}

	#[test]
	fn test_positions_stay_within_one_frame_of_bounds() {
		let config = FieldConfig::default();
		let (w, h) = (400.0, 300.0);
		let mut field = ParticleField::seed(&config, w, h, sampler(42));

		for _ in 0..20_000 {
			let before: Vec<(f64, f64)> =
				field.particles.iter().map(|p| (p.vx, p.vy)).collect();
			field.step();
			for (p, (vx, vy)) in field.particles.iter().zip(before) {
				let slack = config.max_speed + 1e-9;
				assert!(p.x >= -slack && p.x <= w + slack, "x = {}", p.x);
				assert!(p.y >= -slack && p.y <= h + slack, "y = {}", p.y);
				// Speed magnitude never changes, only its sign.
				assert_eq!(p.vx.abs(), vx.abs());
				assert_eq!(p.vy.abs(), vy.abs());
			}
		}
	}

	#[test]
	fn test_resize_keeps_positions_and_recovers_strays() {
		let mut field =
			ParticleField::from_particles(vec![particle(500.0, 50.0, 0.2, 0.0)], 800.0, 600.0);
		field.resize(300.0, 600.0);
		assert_eq!(field.particles[0].x, 500.0);
		assert_eq!((field.width(), field.height()), (300.0, 600.0));

		let mut previous = field.particles[0].x;
		for _ in 0..5 {
			field.step();
			assert_eq!(field.particles[0].vx, -0.2);
			previous = previous.min(field.particles[0].x);
		}
		assert!(previous < 500.0, "stray particle heads back inside");
	}

	#[test]
	fn test_advance_renders_alternating_frames() {
		let mut field = ParticleField::from_particles(Vec::new(), 10.0, 10.0);
		let rendered: Vec<bool> = (0..6).map(|_| field.advance(2)).collect();
		assert_eq!(rendered, [false, true, false, true, false, true]);

		let mut every = ParticleField::from_particles(Vec::new(), 10.0, 10.0);
		assert!(every.advance(0));
		assert!(every.advance(1));
	}

	#[test]
	fn test_link_opacity_scales_with_distance() {
		assert_eq!(link_opacity(0.0, 120.0, 0.25), Some(0.25));
		assert_eq!(link_opacity(60.0, 120.0, 0.25), Some(0.125));
		assert_eq!(link_opacity(120.0, 120.0, 0.25), None);
		assert_eq!(link_opacity(500.0, 120.0, 0.25), None);
		let near_edge = link_opacity(119.999, 120.0, 0.25).unwrap_or(-1.0);
		assert!(near_edge >= 0.0 && near_edge < 0.001);
	}

	#[test]
	fn test_links_match_distance_formula() {
		let config = FieldConfig::default();
		let field = ParticleField::from_particles(
			vec![
				particle(0.0, 0.0, 0.0, 0.0),
				particle(30.0, 40.0, 0.0, 0.0),
				particle(300.0, 300.0, 0.0, 0.0),
			],
			400.0,
			400.0,
		);
		let links = field.links(&config);
		assert_eq!(links.len(), 1);
		assert_eq!((links[0].from, links[0].to), (0, 1));
		let expected = (1.0 - 50.0 / 120.0) * 0.25;
		assert!((links[0].opacity - expected).abs() < 1e-12);
	}

	#[test]
	fn test_links_cap_outgoing_connections() {
		let config = FieldConfig::default();
		let cluster: Vec<Particle> = (0..8)
			.map(|i| particle(100.0 + i as f64, 100.0, 0.0, 0.0))
			.collect();
		let field = ParticleField::from_particles(cluster, 400.0, 400.0);
		let links = field.links(&config);

		for i in 0..8 {
			let outgoing = links.iter().filter(|l| l.from == i).count();
			assert!(outgoing <= config.max_connections);
		}
		// First particle links to its three nearest successors in index order.
		let first: Vec<usize> = links.iter().filter(|l| l.from == 0).map(|l| l.to).collect();
		assert_eq!(first, [1, 2, 3]);
		assert!(links.iter().all(|l| l.to > l.from));
	}

	#[test]
	fn test_seeded_field_links_never_exceed_cap() {
		let config = FieldConfig::default();
		let mut field = ParticleField::seed(&config, 200.0, 200.0, sampler(3));
		for _ in 0..200 {
			field.step();
			let links = field.links(&config);
			for i in 0..field.particles.len() {
				assert!(links.iter().filter(|l| l.from == i).count() <= 3);
			}
			assert!(links.iter().all(|l| l.opacity >= 0.0 && l.opacity <= 0.25));
		}
	}
}
