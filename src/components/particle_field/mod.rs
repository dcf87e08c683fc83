//! Animated particle network used as the hero backdrop.
//!
//! Renders drifting points on an HTML canvas with:
//! - A two-tier particle density keyed on viewport width
//! - Edge bouncing without position clamping
//! - Proximity links, capped per particle, fading with distance
//! - Motion trails from a translucent background wash
//!
//! # Example
//!
//! ```ignore
//! use portfolio_site::components::particle_field::{ParticleFieldCanvas, Theme};
//!
//! let (loaded, _) = signal(true);
//! view! { <ParticleFieldCanvas theme=Signal::stored(Theme::dark()) loaded=loaded /> }
//! ```

mod component;
pub mod config;
pub mod field;
pub mod render;
pub mod theme;

pub use component::ParticleFieldCanvas;
pub use config::FieldConfig;
pub use field::{Link, Particle, ParticleField};
pub use theme::{Color, Theme};
