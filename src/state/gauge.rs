//! The single-node cache from the first lesson, which fills up and crashes.

use crate::config::{DATA_CHUNK_GB, LOCAL_CAPACITY_GB};

#[cfg(test)]
#[path = "gauge_test.rs"]
mod gauge_test;

/// Above this fill percentage the gauge turns to a warning.
const WARNING_PERCENT: f64 = 80.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FillLevel {
	Ok,
	Warning,
	Overflow,
}

impl FillLevel {
	pub fn css_class(self) -> &'static str {
		match self {
			FillLevel::Ok => "gauge__fill--ok",
			FillLevel::Warning => "gauge__fill--warning",
			FillLevel::Overflow => "gauge__fill--overflow",
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryGauge {
	pub used_gb: u32,
	pub capacity_gb: u32,
}

impl Default for MemoryGauge {
	fn default() -> Self {
		Self {
			used_gb: 0,
			capacity_gb: LOCAL_CAPACITY_GB,
		}
	}
}

impl MemoryGauge {
	/// More data than RAM: the node has crashed.
	pub fn is_overflowing(&self) -> bool {
		self.used_gb > self.capacity_gb
	}

	/// Fill height for the gauge, capped at 100.
	pub fn percentage(&self) -> f64 {
		if self.capacity_gb == 0 {
			return 100.0;
		}
		(f64::from(self.used_gb) / f64::from(self.capacity_gb) * 100.0).min(100.0)
	}

	pub fn level(&self) -> FillLevel {
		if self.is_overflowing() {
			FillLevel::Overflow
		} else if self.percentage() > WARNING_PERCENT {
			FillLevel::Warning
		} else {
			FillLevel::Ok
		}
	}

	/// Adding is refused once the node has crashed.
	pub fn can_add(&self) -> bool {
		!self.is_overflowing()
	}

	/// Push another chunk of data in. Returns whether anything was added.
	pub fn add_data(&mut self) -> bool {
		if !self.can_add() {
			return false;
		}
		self.used_gb += DATA_CHUNK_GB;
		true
	}

	/// Reboot: all cached data is gone.
	pub fn reset(&mut self) {
		self.used_gb = 0;
	}
}
