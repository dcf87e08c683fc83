//! UI components and the browser-facing hooks behind them.

pub mod color_scheme;
pub mod contact_form;
pub mod counter;
pub mod icons;
pub mod particle_field;
pub mod reveal;
pub mod sections;
