//! Text helpers.
//!
//! Provides:
//! - [`html`] - the small HTML fragment vocabulary interactions render with
//! - [`plain`] - turning those fragments into terminal text
//! - [`template`] - `{name}` placeholder filling
//! - [`format`] - dates, money, and other display values

pub mod format;
pub mod html;
pub mod plain;
pub mod template;
