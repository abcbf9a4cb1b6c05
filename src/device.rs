
use crate::snapshot::MouseSnapshot;
use glam::IVec2;
use std::collections::VecDeque;

/// Capability seam to the platform pointer device.
pub trait PointerDevice {
	/// Sample the device. Cheap, synchronous, always answers.
	fn poll(&mut self) -> MouseSnapshot;
	/// Move the system pointer; reflected by the next `poll`.
	fn warp(&mut self, x: i32, y: i32);
}

/// Deterministic device that plays back a queued series of snapshots.
/// When the script runs dry it keeps answering with the last frame served.
#[derive(Debug, Default)]
pub struct ScriptedDevice {
	frames: VecDeque<MouseSnapshot>,
	fallback: MouseSnapshot,
	warps: Vec<IVec2>,
}

impl ScriptedDevice {
	#[inline] pub fn new() -> Self {
		Self::default()
	}

	pub fn starting_at(frame: MouseSnapshot) -> Self {
		Self {
			frames: VecDeque::new(),
			fallback: frame,
			warps: Vec::new(),
		}
	}

	/// Queue the snapshot the next unserved `poll` will return.
	#[inline] pub fn push(&mut self, frame: MouseSnapshot) {
		self.frames.push_back(frame);
	}

	/// Every warp requested so far, oldest first.
	#[inline] pub fn warps(&self) -> &[IVec2] {
		&self.warps
	}
}

impl PointerDevice for ScriptedDevice {
	fn poll(&mut self) -> MouseSnapshot {
		if let Some(frame) = self.frames.pop_front() {
			self.fallback = frame;
		}
		self.fallback
	}

	fn warp(&mut self, x: i32, y: i32) {
		self.warps.push(IVec2::new(x, y));
		// queued frames are authoritative, only the fallback moves
		self.fallback.position = IVec2::new(x, y);
	}
}
