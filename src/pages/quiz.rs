use leptos::prelude::*;
use log::{debug, info};

use crate::state::quiz::{ChoiceMark, QuizState};

/// Lesson 6: three questions on what came before.
#[component]
pub fn QuizPage() -> impl IntoView {
	let quiz = RwSignal::new(QuizState::default());

	let on_next = move |_| {
		quiz.update(|q| {
			q.next();
			if q.finished {
				info!("quiz finished with {}/{}", q.score, q.total());
			}
		});
	};
	let on_restart = move |_| quiz.update(QuizState::restart);

	let choices = move || {
		let question = quiz.with(QuizState::question);
		question
			.choices
			.iter()
			.map(|choice| {
				let id = choice.id;
				let mark = quiz.with(|q| q.mark(id));
				let class = match mark {
					ChoiceMark::Open => "choice",
					ChoiceMark::Correct => "choice choice--correct",
					ChoiceMark::Wrong => "choice choice--wrong",
					ChoiceMark::Faded => "choice choice--faded",
				};
				let badge = match mark {
					ChoiceMark::Correct => "\u{2714}",
					ChoiceMark::Wrong => "\u{2716}",
					ChoiceMark::Open | ChoiceMark::Faded => "",
				};
				view! {
					<button
						class=class
						disabled={mark != ChoiceMark::Open}
						on:click=move |_| {
							quiz.update(|q| q.select(id));
							debug!("answered {id}");
						}
					>
						<span>{choice.text}</span>
						<span class="choice__badge">{badge}</span>
					</button>
				}
			})
			.collect_view()
	};

	let finished = move || {
		view! {
			<div class="quiz-result">
				<div class="quiz-result__trophy">"\u{1f3c6}"</div>
				<h2>"Quiz Complete!"</h2>
				<p>
					"You scored " <strong>{move || quiz.with(|q| q.score)}</strong>
					{move || format!(" / {}", quiz.with(QuizState::total))}
				</p>
				<div class="panel">{move || quiz.with(QuizState::verdict)}</div>
				<button class="btn btn--primary btn--pill" on:click=on_restart>
					"Restart Quiz"
				</button>
			</div>
		}
	};

	view! {
		<section class="lesson lesson--centered">
			<Show when=move || !quiz.with(|q| q.finished) fallback=finished>
				<div class="quiz">
					<div class="quiz__progress">
						<div
							class="quiz__progress-bar"
							style:width=move || format!("{}%", quiz.with(QuizState::progress))
						/>
					</div>

					<div class="quiz__header">
						<span class="quiz__counter">
							{move || quiz.with(|q| format!("Question {} of {}", q.current + 1, q.total()))}
						</span>
						<h3>{move || quiz.with(QuizState::question).prompt}</h3>
					</div>

					<div class="quiz__choices">{choices}</div>

					<Show when=move || quiz.with(QuizState::is_revealed)>
						<div class="quiz__explanation">
							<p>
								<b>"Explanation: "</b>
								{move || quiz.with(QuizState::question).explanation}
							</p>
							<button class="btn btn--light" on:click=on_next>
								{move || if quiz.with(QuizState::is_last) { "Finish" } else { "Next Question" }}
							</button>
						</div>
					</Show>
				</div>
			</Show>
		</section>
	}
}
