//! View constants (layout/sizing/colours).

use iced::Color;

pub(crate) const PADDING: f32 = 16.0;
pub(crate) const SPACING: f32 = 12.0;

pub(crate) const HEADER_TEXT: f32 = 16.0;
pub(crate) const ROW_TEXT: f32 = 14.0;

pub(crate) const LIST_ROW_VPAD: f32 = 5.0;
pub(crate) const LIST_ROW_HPAD: f32 = 8.0;

pub(crate) const PROGRESS_H: f32 = 18.0;

pub(crate) const SUCCESS: Color = Color::from_rgb(0.0, 0.5, 0.0);
pub(crate) const WARNING: Color = Color::from_rgb(1.0, 0.596, 0.0);
pub(crate) const MUTED: Color = Color::from_rgb(0.4, 0.4, 0.4);
