mod color;
mod size;
mod variant;

pub use self::{color::*, size::*, variant::*};

pub mod consts {
	/// The feather icon sprite all [`Icon`][crate::icon::Icon]s are drawn
	/// from.
	pub const FEATHER_IMG: &str = "/public/icons/sprite/feather-sprite.svg";
}
