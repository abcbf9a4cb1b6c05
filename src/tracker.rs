
use crate::device::PointerDevice;
use crate::snapshot::{ButtonState, MouseButton, MouseSnapshot};
use glam::IVec2;

/// Double-buffered mouse state: the sample from the last `advance` call plus
/// the one before it. Every query is derived from those two samples on the
/// spot, nothing else is stored.
pub struct MouseTracker<D: PointerDevice> {
	previous: MouseSnapshot,
	current: MouseSnapshot,
	device: D,
}

impl<D: PointerDevice> MouseTracker<D> {
	/// Polls once so the first frame has a defined baseline against
	/// [`MouseSnapshot::NEUTRAL`].
	pub fn new(mut device: D) -> Self {
		let current = device.poll();
		Self {
			previous: MouseSnapshot::NEUTRAL,
			current,
			device,
		}
	}

	/// Shift the sample window forward one frame. Call exactly once per
	/// update cycle, before trusting any query for that cycle.
	pub fn advance(&mut self) {
		self.previous = self.current;
		self.current = self.device.poll();
	}

	#[inline] pub const fn position(&self) -> IVec2 {
		self.current.position
	}

	/// Warp the system pointer and reflect the new position right away
	/// instead of waiting for the next poll, so no one-frame teleport delta
	/// shows up. Buttons and scroll carry over from the last sample.
	pub fn set_position(&mut self, x: i32, y: i32) {
		self.device.warp(x, y);
		self.current = MouseSnapshot {
			position: IVec2::new(x, y),
			..self.current
		};
	}

	#[inline] pub fn position_delta(&self) -> IVec2 {
		self.current.position - self.previous.position
	}

	#[inline] pub fn x_delta(&self) -> i32 {
		self.position_delta().x
	}

	#[inline] pub fn y_delta(&self) -> i32 {
		self.position_delta().y
	}

	#[inline] pub fn was_moved(&self) -> bool {
		self.position_delta() != IVec2::ZERO
	}

	/// Cumulative scroll since the device started counting, not a delta.
	#[inline] pub const fn scroll_wheel(&self) -> i64 {
		self.current.scroll
	}

	#[inline] pub const fn scroll_wheel_delta(&self) -> i64 {
		self.current.scroll - self.previous.scroll
	}

	#[inline] pub const fn is_button_down(&self, button: MouseButton) -> bool {
		self.current.button(button).is_pressed()
	}

	#[inline] pub const fn is_button_up(&self, button: MouseButton) -> bool {
		!self.current.button(button).is_pressed()
	}

	/// Edge query over the two-sample window: true when `button` held `from`
	/// on the previous sample and holds `to` on the current one. Identical
	/// `from`/`to` is never a transition.
	pub fn transitioned(&self, button: MouseButton, from: ButtonState, to: ButtonState) -> bool {
		if from == to {
			return false;
		}
		self.previous.button(button) == from && self.current.button(button) == to
	}

	/// True for exactly one frame, the one whose `advance` saw the edge.
	#[inline] pub fn was_button_just_pressed(&self, button: MouseButton) -> bool {
		self.transitioned(button, ButtonState::Released, ButtonState::Pressed)
	}

	#[inline] pub fn was_button_just_released(&self, button: MouseButton) -> bool {
		self.transitioned(button, ButtonState::Pressed, ButtonState::Released)
	}

	#[inline] pub fn any_button_down(&self) -> bool {
		self.current.any_button_pressed()
	}

	#[inline] pub const fn snapshot(&self) -> &MouseSnapshot {
		&self.current
	}

	#[inline] pub const fn previous_snapshot(&self) -> &MouseSnapshot {
		&self.previous
	}

	#[inline] pub const fn device(&self) -> &D {
		&self.device
	}

	#[inline] pub fn device_mut(&mut self) -> &mut D {
		&mut self.device
	}
}
