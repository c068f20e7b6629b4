//! The closing quiz.

#[cfg(test)]
#[path = "quiz_test.rs"]
mod quiz_test;

#[derive(Debug)]
pub struct Choice {
	pub id: char,
	pub text: &'static str,
}

#[derive(Debug)]
pub struct Question {
	pub prompt: &'static str,
	pub choices: [Choice; 3],
	pub correct: char,
	pub explanation: &'static str,
}

pub static QUESTIONS: [Question; 3] = [
	Question {
		prompt: "Why is Modulo Hashing (hash % N) problematic for distributed caching?",
		choices: [
			Choice {
				id: 'a',
				text: "It is too computationally expensive.",
			},
			Choice {
				id: 'b',
				text: "Resizing the cluster (changing N) invalidates almost all cache keys.",
			},
			Choice {
				id: 'c',
				text: "It only supports integer keys.",
			},
		],
		correct: 'b',
		explanation: "When N changes, the remainder of the division changes for nearly every number, \
			causing a massive cache miss storm.",
	},
	Question {
		prompt: "In Consistent Hashing, if a node crashes, how many keys need to move?",
		choices: [
			Choice {
				id: 'a',
				text: "All keys in the cluster.",
			},
			Choice {
				id: 'b',
				text: "50% of the keys.",
			},
			Choice {
				id: 'c',
				text: "Only the keys that belonged to the crashed node.",
			},
		],
		correct: 'c',
		explanation: "That is the main benefit! Keys are redistributed only to the nearest neighbor, \
			leaving the rest of the ring untouched.",
	},
	Question {
		prompt: "What problem do 'Virtual Nodes' solve?",
		choices: [
			Choice {
				id: 'a',
				text: "Uneven data distribution (Hotspots) on the ring.",
			},
			Choice {
				id: 'b',
				text: "They make the hashing algorithm faster.",
			},
			Choice {
				id: 'c',
				text: "They allow infinite storage capacity.",
			},
		],
		correct: 'a',
		explanation: "By splitting one physical node into many points on the ring, we statistically \
			average out the gaps between nodes, ensuring even load.",
	},
];

/// How a choice should look once the answer is revealed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChoiceMark {
	/// Answer not revealed yet.
	Open,
	Correct,
	Wrong,
	Faded,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuizState {
	pub current: usize,
	pub score: usize,
	pub selected: Option<char>,
	pub finished: bool,
}

impl QuizState {
	pub fn question(&self) -> &'static Question {
		&QUESTIONS[self.current.min(QUESTIONS.len() - 1)]
	}

	pub fn total(&self) -> usize {
		QUESTIONS.len()
	}

	pub fn is_revealed(&self) -> bool {
		self.selected.is_some()
	}

	pub fn is_last(&self) -> bool {
		self.current + 1 >= QUESTIONS.len()
	}

	/// Progress bar width for the current question, in percent.
	pub fn progress(&self) -> f64 {
		(self.current + 1) as f64 / QUESTIONS.len() as f64 * 100.0
	}

	/// Lock in `choice`. Ignored once the answer is revealed.
	pub fn select(&mut self, choice: char) {
		if self.is_revealed() || self.finished {
			return;
		}
		self.selected = Some(choice);
		if choice == self.question().correct {
			self.score += 1;
		}
	}

	pub fn mark(&self, choice: char) -> ChoiceMark {
		match self.selected {
			None => ChoiceMark::Open,
			Some(_) if choice == self.question().correct => ChoiceMark::Correct,
			Some(picked) if picked == choice => ChoiceMark::Wrong,
			Some(_) => ChoiceMark::Faded,
		}
	}

	/// Move on, or finish after the last question. Needs a revealed answer.
	pub fn next(&mut self) {
		if !self.is_revealed() {
			return;
		}
		if self.is_last() {
			self.finished = true;
		} else {
			self.current += 1;
			self.selected = None;
		}
	}

	pub fn restart(&mut self) {
		*self = Self::default();
	}

	pub fn verdict(&self) -> &'static str {
		if self.score == QUESTIONS.len() {
			"Perfect! You're a System Design Expert."
		} else if self.score > 1 {
			"Great job! You understand the core concepts."
		} else {
			"Review the tabs and try again!"
		}
	}
}
