
use glam::IVec2;
use serde::{Deserialize, Serialize};

/// The tracked mouse buttons, also usable as a dense array index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
	Left,
	Middle,
	Right,
	Back,
	Forward,
}

impl MouseButton {
	pub const COUNT: usize = 5;
	pub const ALL: [Self; Self::COUNT] = [
		Self::Left,
		Self::Middle,
		Self::Right,
		Self::Back,
		Self::Forward,
	];

	#[inline] pub const fn index(self) -> usize {
		self as usize
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ButtonState {
	#[default]
	Released,
	Pressed,
}

impl ButtonState {
	#[inline] pub const fn is_pressed(self) -> bool {
		matches!(self, Self::Pressed)
	}
}

/// Device state captured at one instant, immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MouseSnapshot {
	pub position: IVec2,
	pub scroll: i64,
	pub buttons: [ButtonState; MouseButton::COUNT],
}

impl MouseSnapshot {
	/// Zero position, zero scroll, every button released.
	pub const NEUTRAL: Self = Self {
		position: IVec2::ZERO,
		scroll: 0,
		buttons: [ButtonState::Released; MouseButton::COUNT],
	};

	#[inline] pub const fn button(&self, button: MouseButton) -> ButtonState {
		self.buttons[button.index()]
	}

	#[inline] pub fn any_button_pressed(&self) -> bool {
		self.buttons.iter().any(|state| state.is_pressed())
	}
}

impl Default for MouseSnapshot {
	#[inline]
	fn default() -> Self {
		Self::NEUTRAL
	}
}
