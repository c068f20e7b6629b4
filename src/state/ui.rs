//! Navigation between the lesson pages.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// One entry in the sidebar, in lesson order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TabId {
	#[default]
	Problem,
	Cluster,
	Modulo,
	Consistent,
	Virtual,
	Quiz,
}

impl TabId {
	/// Every tab, in the order shown.
	pub const ALL: [TabId; 6] = [
		TabId::Problem,
		TabId::Cluster,
		TabId::Modulo,
		TabId::Consistent,
		TabId::Virtual,
		TabId::Quiz,
	];

	/// Route serving this tab.
	pub fn path(self) -> &'static str {
		match self {
			TabId::Problem => "/",
			TabId::Cluster => "/cluster",
			TabId::Modulo => "/modulo",
			TabId::Consistent => "/consistent",
			TabId::Virtual => "/virtual",
			TabId::Quiz => "/quiz",
		}
	}

	/// Sidebar label.
	pub fn label(self) -> &'static str {
		match self {
			TabId::Problem => "The Problem",
			TabId::Cluster => "Cluster",
			TabId::Modulo => "Modulo Hashing",
			TabId::Consistent => "Consistent Hashing",
			TabId::Virtual => "Virtual Nodes",
			TabId::Quiz => "Quiz",
		}
	}

	/// Glyph drawn next to the label.
	pub fn icon(self) -> &'static str {
		match self {
			TabId::Problem => "\u{1f5a5}",
			TabId::Cluster => "\u{25a6}",
			TabId::Modulo => "%",
			TabId::Consistent => "\u{25ef}",
			TabId::Virtual => "\u{2726}",
			TabId::Quiz => "\u{1f3c6}",
		}
	}

	/// Tab served at `path`, ignoring a trailing slash.
	pub fn from_path(path: &str) -> Option<TabId> {
		let trimmed = path.trim_end_matches('/');
		let trimmed = if trimmed.is_empty() { "/" } else { trimmed };
		TabId::ALL.into_iter().find(|tab| tab.path() == trimmed)
	}
}
