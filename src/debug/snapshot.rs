
use crate::snapshot::{ButtonState, MouseButton, MouseSnapshot};

mod tests {
	use super::*;
	use glam::ivec2;

	#[test]
	fn test_neutral_snapshot() {
		let snap = MouseSnapshot::NEUTRAL;
		assert_eq!(snap.position, ivec2(0, 0));
		assert_eq!(snap.scroll, 0);
		for button in MouseButton::ALL {
			assert_eq!(snap.button(button), ButtonState::Released);
		}
		assert!(!snap.any_button_pressed());
		assert_eq!(MouseSnapshot::default(), snap);
	}

	#[test]
	fn test_button_indices_are_dense() {
		for (i, button) in MouseButton::ALL.iter().enumerate() {
			assert_eq!(button.index(), i);
		}
		assert_eq!(MouseButton::ALL.len(), MouseButton::COUNT);
	}

	#[test]
	fn test_snapshot_serde_round_trip() {
		let mut snap = MouseSnapshot::NEUTRAL;
		snap.position = ivec2(-3, 44);
		snap.scroll = -12;
		snap.buttons[MouseButton::Right.index()] = ButtonState::Pressed;

		let json = serde_json::to_string(&snap).unwrap();
		let back: MouseSnapshot = serde_json::from_str(&json).unwrap();
		assert_eq!(back, snap);
	}
}
