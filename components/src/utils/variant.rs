/// Whether a [`Link`][crate::link::Link] renders as an anchor or a button
/// element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Variant {
	/// Renders a `<button>`. This is the default.
	#[default]
	Button,
	/// Renders an `<a>`.
	Link,
}

/// The visual style of a [`Link`][crate::link::Link].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum LinkStyleVariant {
	/// Plain text with the link color. This is the default.
	#[default]
	Plain,
	/// A filled button.
	Contained,
	/// An outlined button.
	Outlined,
}
