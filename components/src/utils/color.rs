use std::fmt::{self, Display, Formatter};

/// All colors supported by CSS class names in the app.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Color {
	/// Primary accent color. This is the default.
	#[default]
	Primary,
	/// Secondary background color.
	Secondary,
	/// White color.
	White,
	/// Black color.
	Black,
	/// Grey color.
	Grey,
	/// Success green color.
	Success,
	/// Warning orange color.
	Warning,
	/// Error red color.
	Error,
	/// Disabled color.
	Disabled,
}

impl Display for Color {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_css_name())
	}
}

impl Color {
	/// Returns the CSS name of the color.
	pub const fn as_css_name(self) -> &'static str {
		match self {
			Self::Primary => "primary",
			Self::Secondary => "secondary",
			Self::White => "white",
			Self::Black => "black",
			Self::Grey => "grey",
			Self::Success => "success",
			Self::Warning => "warning",
			Self::Error => "error",
			Self::Disabled => "disabled",
		}
	}
}

/// The shade variants of the secondary background color, used by inputs and
/// modals to sit on different surfaces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum SecondaryColorVariant {
	/// The light shade. This is the default.
	#[default]
	Light,
	/// The medium shade.
	Medium,
	/// The dark shade.
	Dark,
}

impl SecondaryColorVariant {
	/// Returns the CSS name of the variant.
	pub const fn as_css_name(self) -> &'static str {
		match self {
			Self::Light => "light",
			Self::Medium => "medium",
			Self::Dark => "dark",
		}
	}
}

/// The severity of a notification, mapped onto alert colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum NotificationType {
	/// A success notification.
	Success,
	/// A warning notification.
	#[default]
	Warning,
	/// An error notification.
	Error,
}

impl NotificationType {
	/// Returns the color an alert of this severity is rendered in.
	pub const fn as_color(self) -> Color {
		match self {
			Self::Success => Color::Success,
			Self::Warning => Color::Warning,
			Self::Error => Color::Error,
		}
	}
}
