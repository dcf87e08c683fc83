//! Inline stroke icons (24x24 grid, `currentColor`).

use leptos::prelude::*;
use serde::Deserialize;

/// Icons referenced from the page and from portfolio content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[allow(missing_docs)]
pub enum IconKind {
	Github,
	Linkedin,
	Twitter,
	Mail,
	Phone,
	MapPin,
	ExternalLink,
	ArrowUpRight,
	ArrowRight,
	ArrowUp,
	ChevronRight,
	Menu,
	Close,
	Send,
	Briefcase,
	Calendar,
	Award,
	Code,
	Brain,
	Layers,
	Server,
	Database,
	Workflow,
}

impl IconKind {
	fn paths(self) -> &'static [&'static str] {
		match self {
			IconKind::Github => &[
				"M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
				"M9 18c-4.51 2-5-2-7-2",
			],
			IconKind::Linkedin => &[
				"M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6z",
				"M2 9h4v12H2z",
				"M4 2a2 2 0 1 0 0 4 2 2 0 0 0 0-4z",
			],
			IconKind::Twitter => &[
				"M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z",
			],
			IconKind::Mail => &[
				"M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
				"m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
			],
			IconKind::Phone => &[
				"M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
			],
			IconKind::MapPin => &[
				"M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z",
				"M12 7a3 3 0 1 0 0 6 3 3 0 0 0 0-6z",
			],
			IconKind::ExternalLink => &[
				"M15 3h6v6",
				"M10 14 21 3",
				"M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6",
			],
			IconKind::ArrowUpRight => &["M7 7h10v10", "M7 17 17 7"],
			IconKind::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
			IconKind::ArrowUp => &["m5 12 7-7 7 7", "M12 19V5"],
			IconKind::ChevronRight => &["m9 18 6-6-6-6"],
			IconKind::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
			IconKind::Close => &["M18 6 6 18", "m6 6 12 12"],
			IconKind::Send => &["m22 2-7 20-4-9-9-4Z", "M22 2 11 13"],
			IconKind::Briefcase => &[
				"M16 20V4a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16",
				"M4 6h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2z",
			],
			IconKind::Calendar => &[
				"M8 2v4",
				"M16 2v4",
				"M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
				"M3 10h18",
			],
			IconKind::Award => &[
				"M12 2a6 6 0 1 0 0 12 6 6 0 0 0 0-12z",
				"M15.48 12.89 17 22l-5-3-5 3 1.52-9.11",
			],
			IconKind::Code => &["m18 16 4-4-4-4", "m6 8-4 4 4 4", "m14.5 4-5 16"],
			IconKind::Brain => &[
				"M12 5a3 3 0 1 0-6 .13 4 4 0 0 0-2.52 5.77 4 4 0 0 0 .55 6.59A4 4 0 1 0 12 18Z",
				"M12 5a3 3 0 1 1 6 .13 4 4 0 0 1 2.52 5.77 4 4 0 0 1-.55 6.59A4 4 0 1 1 12 18Z",
			],
			IconKind::Layers => &[
				"M12.83 2.18a2 2 0 0 0-1.66 0L2.6 6.08a1 1 0 0 0 0 1.83l8.58 3.91a2 2 0 0 0 1.66 0l8.58-3.9a1 1 0 0 0 0-1.83Z",
				"m22 17.65-9.17 4.16a2 2 0 0 1-1.66 0L2 17.65",
				"m22 12.65-9.17 4.16a2 2 0 0 1-1.66 0L2 12.65",
			],
			IconKind::Server => &[
				"M4 2h16a2 2 0 0 1 2 2v4a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2z",
				"M4 14h16a2 2 0 0 1 2 2v4a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2v-4a2 2 0 0 1 2-2z",
				"M6 6h.01",
				"M6 18h.01",
			],
			IconKind::Database => &[
				"M3 5c0-1.66 4-3 9-3s9 1.34 9 3-4 3-9 3-9-1.34-9-3",
				"M3 5v14a9 3 0 0 0 18 0V5",
				"M3 12a9 3 0 0 0 18 0",
			],
			IconKind::Workflow => &[
				"M5 3h4a2 2 0 0 1 2 2v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2z",
				"M7 11v4a2 2 0 0 0 2 2h4",
				"M15 13h4a2 2 0 0 1 2 2v4a2 2 0 0 1-2 2h-4a2 2 0 0 1-2-2v-4a2 2 0 0 1 2-2z",
			],
		}
	}
}

/// Renders `kind` as an inline SVG, `size` pixels square.
#[component]
pub fn Icon(
	kind: IconKind,
	#[prop(default = 18)] size: u32,
	#[prop(optional, into)] class: String,
) -> impl IntoView {
	let size = size.to_string();
	view! {
		<svg
			class=format!("icon {class}")
			width=size.clone()
			height=size
			viewBox="0 0 24 24"
			fill="none"
			stroke="currentColor"
			stroke-width="2"
			stroke-linecap="round"
			stroke-linejoin="round"
			aria-hidden="true"
		>
			{kind.paths().iter().map(|d| view! { <path d=*d /> }).collect_view()}
		</svg>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_icon_names_deserialize_kebab_case() {
		let kinds: Vec<IconKind> =
			serde_json::from_str(r#"["github", "map-pin", "arrow-up-right", "workflow"]"#)
				.unwrap();
		assert_eq!(
			kinds,
			[
				IconKind::Github,
				IconKind::MapPin,
				IconKind::ArrowUpRight,
				IconKind::Workflow
			]
		);
		assert!(serde_json::from_str::<IconKind>(r#""lucide""#).is_err());
	}

	#[test]
	fn test_every_icon_has_paths() {
		assert!(IconKind::Menu.paths().len() == 3);
		assert!(!IconKind::Github.paths().is_empty());
	}
}
