//! Visual theming for the page and the particle backdrop.
//!
//! The canvas cannot resolve CSS custom properties, so the palette lives here
//! and is emitted as `:root` variables for the stylesheet as well.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Opacity in `[0, 1]`.
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with explicit opacity.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same channels with opacity `a`.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// CSS value: hex when opaque, `rgba()` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			self.to_css_rgb()
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}

	/// `#rrggbb`, ignoring opacity.
	pub fn to_css_rgb(self) -> String {
		format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
	}

	/// Parses a CSS color string.
	/// Supports hex (`#RRGGBB`) and `rgb()`/`rgba()` functional notation.
	pub fn parse(color_str: &str) -> Option<Color> {
		let color_str = color_str.trim();
		if let Some(hex) = color_str.strip_prefix('#') {
			if hex.len() != 6 || !hex.is_ascii() {
				return None;
			}
			let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
			let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
			let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
			Some(Color::rgb(r, g, b))
		} else if color_str.starts_with("rgb") {
			let nums: Vec<&str> = color_str
				.trim_start_matches("rgba(")
				.trim_start_matches("rgb(")
				.trim_end_matches(')')
				.split(',')
				.collect();
			let r = nums.first()?.trim().parse().ok()?;
			let g = nums.get(1)?.trim().parse().ok()?;
			let b = nums.get(2)?.trim().parse().ok()?;
			let a = nums
				.get(3)
				.and_then(|s| s.trim().parse().ok())
				.unwrap_or(1.0);
			Some(Color::rgba(r, g, b, a))
		} else {
			None
		}
	}
}

/// Complete page palette.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
	/// `dark` or `light`.
	pub name: &'static str,
	/// Page background, also used for the canvas trail fade.
	pub background: Color,
	/// Body text.
	pub foreground: Color,
	/// Secondary text.
	pub muted: Color,
	/// Card surfaces.
	pub card: Color,
	/// Hairline borders.
	pub border: Color,
	/// Particle and link color.
	pub primary: Color,
	/// Second gradient stop.
	pub accent: Color,
}

impl Theme {
	/// Near-black backdrop with an indigo accent.
	pub fn dark() -> Self {
		Self {
			name: "dark",
			background: Color::rgb(5, 5, 8),
			foreground: Color::rgb(244, 244, 245),
			muted: Color::rgb(161, 161, 170),
			card: Color::rgba(255, 255, 255, 0.03),
			border: Color::rgba(255, 255, 255, 0.08),
			primary: Color::rgb(99, 102, 241),
			accent: Color::rgb(168, 85, 247),
		}
	}

	/// Off-white backdrop with a deeper indigo accent.
	pub fn light() -> Self {
		Self {
			name: "light",
			background: Color::rgb(250, 250, 250),
			foreground: Color::rgb(10, 10, 15),
			muted: Color::rgb(82, 82, 91),
			card: Color::rgba(0, 0, 0, 0.02),
			border: Color::rgba(0, 0, 0, 0.08),
			primary: Color::rgb(79, 70, 229),
			accent: Color::rgb(147, 51, 234),
		}
	}

	/// Custom property declarations for this palette.
	pub fn css_variables(&self) -> String {
		format!(
			"--color-bg: {}; --color-fg: {}; --color-muted: {}; --color-card: {}; \
			 --color-border: {}; --color-primary: {}; --color-accent-purple: {};",
			self.background.to_css(),
			self.foreground.to_css(),
			self.muted.to_css(),
			self.card.to_css(),
			self.border.to_css(),
			self.primary.to_css(),
			self.accent.to_css(),
		)
	}

	/// Stylesheet binding the light palette to `:root` and the dark palette to
	/// `:root.dark`.
	pub fn stylesheet() -> String {
		format!(
			":root {{ {} }}\n:root.dark {{ {} }}\n",
			Self::light().css_variables(),
			Self::dark().css_variables()
		)
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::dark()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_opaque_color_renders_as_hex() {
		assert_eq!(Color::rgb(99, 102, 241).to_css(), "#6366f1");
	}

	#[test]
	fn test_translucent_color_renders_as_rgba() {
		let c = Color::rgb(5, 5, 8).with_alpha(0.25);
		assert_eq!(c.to_css(), "rgba(5, 5, 8, 0.25)");
		assert_eq!(c.to_css_rgb(), "#050508");
	}

	#[test]
	fn test_parse_hex() {
		assert_eq!(Color::parse("#76b900"), Some(Color::rgb(118, 185, 0)));
		assert_eq!(Color::parse("#zzzzzz"), None);
		assert_eq!(Color::parse("#fff"), None);
	}

	#[test]
	fn test_parse_hex_rejects_non_ascii() {
		// Seven bytes, but the multi-byte char straddles the channel boundaries.
		assert_eq!("#\u{20ac}abc".len(), 7);
		assert_eq!(Color::parse("#\u{20ac}abc"), None);
		assert_eq!(Color::parse("#\u{e9}\u{e9}\u{e9}"), None);
	}

	#[test]
	fn test_parse_functional_notation() {
		assert_eq!(Color::parse("rgb(1, 2, 3)"), Some(Color::rgb(1, 2, 3)));
		assert_eq!(
			Color::parse("rgba(10, 20, 30, 0.5)"),
			Some(Color::rgba(10, 20, 30, 0.5))
		);
		assert_eq!(Color::parse("rgb(1, 2)"), None);
		assert_eq!(Color::parse("indigo"), None);
	}

	#[test]
	fn test_stylesheet_binds_both_palettes() {
		let css = Theme::stylesheet();
		assert!(css.starts_with(":root {"));
		assert!(css.contains(":root.dark {"));
		assert!(css.contains("--color-primary: #4f46e5;"));
		assert!(css.contains("--color-primary: #6366f1;"));
		assert!(css.contains("--color-border: rgba(255, 255, 255, 0.08);"));
	}
}
