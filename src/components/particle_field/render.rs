//! Drawing for the particle backdrop.
//!
//! Each rendered frame is three passes:
//! 1. A translucent background wash that leaves short motion trails
//! 2. Particles as filled circles
//! 3. Links as thin lines, more opaque for closer pairs

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::config::FieldConfig;
use super::field::ParticleField;
use super::theme::{Color, Theme};

/// The drawing primitives the backdrop needs from a 2D context.
pub trait Surface {
	/// Fill an axis-aligned rectangle.
	fn fill_rect(&self, x: f64, y: f64, width: f64, height: f64, color: Color);
	/// Fill a circle centred on `(x, y)`.
	fn fill_circle(&self, x: f64, y: f64, radius: f64, color: Color);
	/// Stroke a straight segment `width` pixels wide.
	fn stroke_line(&self, from: (f64, f64), to: (f64, f64), width: f64, color: Color);
}

impl Surface for CanvasRenderingContext2d {
	fn fill_rect(&self, x: f64, y: f64, width: f64, height: f64, color: Color) {
		self.set_fill_style_str(&color.to_css());
		CanvasRenderingContext2d::fill_rect(self, x, y, width, height);
	}

	fn fill_circle(&self, x: f64, y: f64, radius: f64, color: Color) {
		self.set_fill_style_str(&color.to_css());
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, PI * 2.0);
		self.fill();
	}

	fn stroke_line(&self, from: (f64, f64), to: (f64, f64), width: f64, color: Color) {
		self.set_stroke_style_str(&color.to_css());
		self.set_line_width(width);
		self.begin_path();
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.stroke();
	}
}

/// Draws the current state of `field` onto `surface`.
pub fn draw_frame<S: Surface + ?Sized>(
	surface: &S,
	field: &ParticleField,
	config: &FieldConfig,
	theme: &Theme,
) {
	surface.fill_rect(
		0.0,
		0.0,
		field.width(),
		field.height(),
		theme.background.with_alpha(config.trail_alpha),
	);

	let particle_color = theme.primary.with_alpha(config.particle_alpha);
	for p in &field.particles {
		surface.fill_circle(p.x, p.y, p.radius, particle_color);
	}

	for link in field.links(config) {
		let (a, b) = (&field.particles[link.from], &field.particles[link.to]);
		surface.stroke_line(
			(a.x, a.y),
			(b.x, b.y),
			config.link_width,
			theme.primary.with_alpha(link.opacity),
		);
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;

	use super::super::field::Particle;
	use super::*;

	#[derive(Debug, PartialEq)]
	enum Op {
		Rect(f64, f64, Color),
		Circle(f64, f64, f64, Color),
		Line((f64, f64), (f64, f64), f64, Color),
	}

	#[derive(Default)]
	struct Recorder(RefCell<Vec<Op>>);

	impl Surface for Recorder {
		fn fill_rect(&self, _x: f64, _y: f64, width: f64, height: f64, color: Color) {
			self.0.borrow_mut().push(Op::Rect(width, height, color));
		}

		fn fill_circle(&self, x: f64, y: f64, radius: f64, color: Color) {
			self.0.borrow_mut().push(Op::Circle(x, y, radius, color));
		}

		fn stroke_line(&self, from: (f64, f64), to: (f64, f64), width: f64, color: Color) {
			self.0.borrow_mut().push(Op::Line(from, to, width, color));
		}
	}

	fn still(x: f64, y: f64) -> Particle {
		Particle {
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			radius: 1.5,
		}
	}

	#[test]
	fn test_frame_draws_wash_then_particles_then_links() {
		let config = FieldConfig::default();
		let theme = Theme::dark();
		let field = ParticleField::from_particles(
			vec![still(10.0, 10.0), still(70.0, 10.0), still(500.0, 500.0)],
			640.0,
			480.0,
		);
		let recorder = Recorder::default();
		draw_frame(&recorder, &field, &config, &theme);
		let ops = recorder.0.into_inner();

		assert_eq!(ops.len(), 1 + 3 + 1);
		assert_eq!(
			ops[0],
			Op::Rect(640.0, 480.0, theme.background.with_alpha(config.trail_alpha))
		);
		assert_eq!(
			ops[1],
			Op::Circle(10.0, 10.0, 1.5, theme.primary.with_alpha(0.6))
		);
		assert_eq!(
			ops[4],
			Op::Line(
				(10.0, 10.0),
				(70.0, 10.0),
				0.5,
				theme.primary.with_alpha(0.125)
			)
		);
	}

	#[test]
	fn test_empty_field_only_washes() {
		let recorder = Recorder::default();
		let field = ParticleField::from_particles(Vec::new(), 100.0, 50.0);
		draw_frame(&recorder, &field, &FieldConfig::default(), &Theme::light());
		assert_eq!(recorder.0.borrow().len(), 1);
	}
}
