//! Portfolio content rendered by the page sections.
//!
//! Content is plain data: it is parsed from JSON and rendered verbatim, with no
//! validation beyond the shape of the document.

use log::warn;
use serde::Deserialize;

use crate::components::icons::IconKind;

const EMBEDDED: &str = include_str!("../content/portfolio.json");

/// Owner details shown in the hero, contact section and footer.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Profile {
	/// Full name.
	pub name: String,
	/// Monogram used as the logo.
	pub initials: String,
	/// Gradient-highlighted part of the headline.
	pub headline_accent: String,
	/// Rest of the headline.
	pub headline: String,
	/// One-line pitch under the headline.
	pub tagline: String,
	/// About section paragraphs.
	pub bio: Vec<String>,
	/// Text in the hero status pill.
	pub status: String,
	/// Note under the contact details.
	pub availability: String,
	/// Portrait URL.
	pub image: String,
	/// Up to two floating badges beside the portrait.
	pub badges: Vec<Badge>,
	/// Contact address.
	pub email: String,
	/// Display form; [`Profile::tel`] strips it for the link.
	pub phone: String,
	/// City and country.
	pub location: String,
	/// Footer one-liner.
	pub blurb: String,
	/// Year in the footer copyright line.
	pub copyright_year: u16,
}

impl Profile {
	/// `mailto:` link for [`Self::email`].
	pub fn mailto(&self) -> String {
		format!("mailto:{}", self.email)
	}

	/// `tel:` link with formatting characters removed.
	pub fn tel(&self) -> String {
		let digits: String = self
			.phone
			.chars()
			.filter(|c| c.is_ascii_digit() || *c == '+')
			.collect();
		format!("tel:{digits}")
	}
}

/// Floating stat next to the profile picture.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Badge {
	/// Headline figure, e.g. `5+`.
	pub value: String,
	/// Caption.
	pub label: String,
}

/// An external profile link.
#[derive(Clone, Debug, Deserialize)]
pub struct SocialLink {
	/// Accessible name.
	pub label: String,
	/// Link target.
	pub href: String,
	/// Icon shown with the entry.
	pub icon: IconKind,
}

/// In-page anchor shown in the navigation and footer.
#[derive(Clone, Debug, Deserialize)]
pub struct NavLink {
	/// Display name.
	pub name: String,
	/// Anchor such as `#about`.
	pub href: String,
}

/// A group of related skills in the About section.
#[derive(Clone, Debug, Deserialize)]
pub struct SkillCategory {
	/// Display name.
	pub name: String,
	/// Icon shown with the entry.
	pub icon: IconKind,
	/// Individual skill tags.
	pub skills: Vec<String>,
}

/// Animated statistic in the About section.
#[derive(Clone, Debug, Deserialize)]
pub struct Stat {
	/// Target the counter animates to.
	pub value: u32,
	/// Appended after the number, e.g. `+`.
	#[serde(default)]
	pub suffix: String,
	/// Caption.
	pub label: String,
}

/// A featured project card.
#[derive(Clone, Debug, Deserialize)]
pub struct Project {
	/// Stable key for hover state.
	pub id: u32,
	/// Card heading.
	pub title: String,
	/// Card body text.
	pub description: String,
	/// Cover image URL.
	pub image: String,
	/// Stack tags, collapsed past a few.
	pub tech: Vec<String>,
	/// Results shown on hover.
	pub metrics: Vec<String>,
	/// Repository link.
	pub github: String,
	/// Live demo, when there is one.
	#[serde(default)]
	pub demo: Option<String>,
}

impl Project {
	/// The first `limit` tech tags and how many were left out.
	pub fn tech_preview(&self, limit: usize) -> (&[String], Option<usize>) {
		if self.tech.len() <= limit {
			(&self.tech, None)
		} else {
			(&self.tech[..limit], Some(self.tech.len() - limit))
		}
	}
}

/// One position on the experience timeline.
#[derive(Clone, Debug, Deserialize)]
pub struct ExperienceEntry {
	/// Stable key for hover state.
	pub id: u32,
	/// Job title.
	pub role: String,
	/// Employer.
	pub company: String,
	/// Free-form date range.
	pub period: String,
	/// City and country.
	pub location: String,
	/// Bullet points.
	pub achievements: Vec<String>,
}

/// A completed course or credential.
#[derive(Clone, Debug, Deserialize)]
pub struct Certification {
	/// Stable key.
	pub id: u32,
	/// Display name.
	pub name: String,
	/// Issuing organisation.
	pub provider: String,
	/// Short monogram drawn in the badge.
	pub monogram: String,
	/// Brand color as `#RRGGBB`.
	pub color: String,
	/// Course or credential page.
	pub link: String,
}

/// Everything the page renders.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Portfolio {
	/// Owner details.
	pub profile: Profile,
	/// External profiles, in display order.
	pub socials: Vec<SocialLink>,
	/// Section anchors for the nav bar and footer.
	pub nav: Vec<NavLink>,
	/// Individual skill tags.
	pub skills: Vec<SkillCategory>,
	/// About section statistics.
	pub stats: Vec<Stat>,
	/// Featured projects.
	pub projects: Vec<Project>,
	/// Most recent first.
	pub experience: Vec<ExperienceEntry>,
	/// Certification cards.
	pub certifications: Vec<Certification>,
}

impl Portfolio {
	/// Parse a content document.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}

	/// Content compiled into the binary.
	pub fn embedded() -> Self {
		Self::from_json(EMBEDDED).unwrap_or_else(|e| {
			warn!("portfolio: embedded content is malformed: {}", e);
			Self::default()
		})
	}
}
