
use crate::snapshot::{ButtonState, MouseButton};
use crate::window::PointerState;

mod tests {
	use super::*;
	use glam::ivec2;
	use winit::dpi::PhysicalPosition;
	use winit::event::{ElementState, MouseScrollDelta};

	#[test]
	fn test_motion_truncates_to_screen_integers() {
		let mut state = PointerState::default();
		state.process_motion(PhysicalPosition::new(12.7, 8.2));
		assert_eq!(state.snapshot().position, ivec2(12, 8));
	}

	#[test]
	fn test_press_and_release_update_the_image() {
		let mut state = PointerState::default();
		state.process_button(winit::event::MouseButton::Back, ElementState::Pressed);
		assert_eq!(state.snapshot().button(MouseButton::Back), ButtonState::Pressed);
		assert_eq!(state.snapshot().button(MouseButton::Left), ButtonState::Released);

		state.process_button(winit::event::MouseButton::Back, ElementState::Released);
		assert!(!state.snapshot().any_button_pressed());
	}

	#[test]
	fn test_unknown_buttons_stay_released() {
		let mut state = PointerState::default();
		state.process_button(winit::event::MouseButton::Other(7), ElementState::Pressed);
		assert!(!state.snapshot().any_button_pressed());
	}

	#[test]
	fn test_line_and_pixel_scroll_share_the_accumulator() {
		let mut state = PointerState::default();
		state.process_scroll(&MouseScrollDelta::LineDelta(0.0, 2.0));
		assert_eq!(state.snapshot().scroll, 2);

		// 32 px at 16 px per line is two more lines
		state.process_scroll(&MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 32.0)));
		assert_eq!(state.snapshot().scroll, 4);

		state.process_scroll(&MouseScrollDelta::LineDelta(0.0, -1.0));
		assert_eq!(state.snapshot().scroll, 3);
	}

	#[test]
	fn test_poll_image_is_a_copy() {
		let mut state = PointerState::default();
		state.process_motion(PhysicalPosition::new(5.0, 5.0));
		let before = state.snapshot();

		state.process_motion(PhysicalPosition::new(9.0, 9.0));
		assert_eq!(before.position, ivec2(5, 5));
		assert_eq!(state.snapshot().position, ivec2(9, 9));
	}
}
