
use crate::device::PointerDevice;
use crate::snapshot::{ButtonState, MouseButton, MouseSnapshot};
use glam::IVec2;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::window::{CursorGrabMode, Window};

// Touchpads report PixelDelta instead of wheel lines; one line counts as
// this many pixels so both variants feed the same accumulator.
const PIXELS_PER_LINE: f64 = 16.0;

#[inline] const fn map_button(button: winit::event::MouseButton) -> Option<MouseButton> {
	match button {
		winit::event::MouseButton::Left => Some(MouseButton::Left),
		winit::event::MouseButton::Middle => Some(MouseButton::Middle),
		winit::event::MouseButton::Right => Some(MouseButton::Right),
		winit::event::MouseButton::Back => Some(MouseButton::Back),
		winit::event::MouseButton::Forward => Some(MouseButton::Forward),
		// anything outside the tracked set stays released
		winit::event::MouseButton::Other(_) => None,
	}
}

/// Running image of the pointer built up from window events; each `poll`
/// copies it out as a snapshot.
#[derive(Debug, Default)]
pub struct PointerState {
	position: IVec2,
	scroll: f64,
	buttons: [ButtonState; MouseButton::COUNT],
}

impl PointerState {
	#[inline] pub fn process_motion(&mut self, position: PhysicalPosition<f64>) {
		self.position = IVec2::new(position.x as i32, position.y as i32);
	}

	pub fn process_button(&mut self, button: winit::event::MouseButton, state: ElementState) {
		let Some(button) = map_button(button) else { return };
		self.buttons[button.index()] = match state {
			ElementState::Pressed => ButtonState::Pressed,
			ElementState::Released => ButtonState::Released,
		};
	}

	pub fn process_scroll(&mut self, delta: &MouseScrollDelta) {
		self.scroll += match delta {
			MouseScrollDelta::LineDelta(_, y) => *y as f64,
			MouseScrollDelta::PixelDelta(pos) => pos.y / PIXELS_PER_LINE,
		};
	}

	#[inline] pub fn snapshot(&self) -> MouseSnapshot {
		MouseSnapshot {
			position: self.position,
			scroll: self.scroll.round() as i64,
			buttons: self.buttons,
		}
	}
}

/// Pointer collaborator bound to a winit window: window events feed the
/// image, warping goes straight to the platform cursor.
pub struct WindowDevice<'a> {
	window: &'a Window,
	state: PointerState,
	captured: bool,
}

impl<'a> WindowDevice<'a> {
	pub fn new(window: &'a Window) -> Self {
		Self {
			window,
			state: PointerState::default(),
			captured: false,
		}
	}

	/// Feed one window event into the pointer image. Returns whether the
	/// event was a pointer event.
	pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
		match event {
			WindowEvent::CursorMoved { position, .. } => self.state.process_motion(*position),
			WindowEvent::MouseInput { button, state, .. } => self.state.process_button(*button, *state),
			WindowEvent::MouseWheel { delta, .. } => self.state.process_scroll(delta),
			_ => return false,
		}
		true
	}

	#[inline] pub const fn state(&self) -> &PointerState {
		&self.state
	}

	#[inline] pub const fn captured(&self) -> bool {
		self.captured
	}

	/// Warp to the middle of the window.
	pub fn center(&mut self) {
		let size = self.window.inner_size();
		self.warp((size.width / 2) as i32, (size.height / 2) as i32);
	}

	/// Grab and hide the cursor, or release it. Grabbing re-centers so the
	/// next motion deltas start from a known spot.
	pub fn set_captured(&mut self, captured: bool) {
		self.captured = captured;
		if captured {
			self.window.set_cursor_visible(false);
			if let Err(err) = self
				.window
				.set_cursor_grab(CursorGrabMode::Confined)
				.or_else(|_| self.window.set_cursor_grab(CursorGrabMode::Locked))
			{
				log::warn!("Cursor grab failed: {err}");
			}
			self.center();
		} else {
			self.window.set_cursor_visible(true);
			if let Err(err) = self.window.set_cursor_grab(CursorGrabMode::None) {
				log::warn!("Cursor release failed: {err}");
			}
		}
	}
}

impl PointerDevice for WindowDevice<'_> {
	#[inline]
	fn poll(&mut self) -> MouseSnapshot {
		self.state.snapshot()
	}

	fn warp(&mut self, x: i32, y: i32) {
		if let Err(err) = self
			.window
			.set_cursor_position(PhysicalPosition::new(x as f64, y as f64))
		{
			log::warn!("Cursor warp failed: {err}");
		}
		// keep the image in step until the matching CursorMoved arrives
		self.state.position = IVec2::new(x, y);
	}
}
