//! # Debounced search controller
//!
//! [`SearchMachine`] is the pure state machine driving searchable
//! listings: keystrokes arm a quiet-period timer, the timer commits the
//! final query, and the page navigates with the committed value. The
//! [`SearchBox`] component wires the machine to a [`Debouncer`] and an
//! `on_commit` callback; the page owning the listing turns commits into
//! query-parameter navigation (resetting `page` to 1).

use crate::debounce::Debouncer;
use crate::icons::FaMagnifyingGlass;
use crate::Icon;
use dioxus::prelude::*;
use std::time::Duration;

/// Quiet period between the last keystroke and the committed navigation.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    /// Input seen, quiet-period timer pending.
    Typing,
    /// Quiet period elapsed, commit imminent.
    Debouncing,
    /// Commit handed to the navigation layer.
    Navigating,
}

/// What the caller must do after feeding an event to the machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEffect {
    None,
    /// Arm the quiet-period timer for this generation, cancelling any
    /// previously armed one.
    StartTimer { generation: u64 },
    /// Navigate with the committed query.
    Commit { query: String },
}

/// Pure debounced-search state machine.
///
/// A generation counter invalidates superseded timers: every edit bumps
/// it, and a timer firing with a stale generation is ignored. That gives
/// last-write-wins semantics without coalescing intermediate states.
#[derive(Debug, Default)]
pub struct SearchMachine {
    query: String,
    phase: SearchPhase,
    generation: u64,
}

impl SearchMachine {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            query: initial.into(),
            ..Self::default()
        }
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Register an edit. An empty query commits immediately (clearing the
    /// search parameter should not wait out the quiet period); anything
    /// else arms the timer.
    pub fn input(&mut self, text: &str) -> SearchEffect {
        self.query = text.to_string();
        self.generation += 1;
        if text.is_empty() {
            self.phase = SearchPhase::Navigating;
            return SearchEffect::Commit {
                query: String::new(),
            };
        }
        self.phase = SearchPhase::Typing;
        SearchEffect::StartTimer {
            generation: self.generation,
        }
    }

    /// The quiet-period timer for `generation` elapsed. Stale generations
    /// (superseded by a later edit) are ignored.
    pub fn timer_fired(&mut self, generation: u64) -> SearchEffect {
        if generation != self.generation || self.phase != SearchPhase::Typing {
            return SearchEffect::None;
        }
        self.phase = SearchPhase::Debouncing;
        self.commit()
    }

    fn commit(&mut self) -> SearchEffect {
        self.phase = SearchPhase::Navigating;
        SearchEffect::Commit {
            query: self.query.clone(),
        }
    }

    /// Navigation completed; ready for the next interaction.
    pub fn navigated(&mut self) {
        self.phase = SearchPhase::Idle;
    }

    /// The committed query changed outside the input (history
    /// navigation, a link resetting the listing). Adopt it and
    /// invalidate any pending timer so the input matches the URL.
    pub fn sync(&mut self, committed: &str) {
        if self.query == committed {
            return;
        }
        self.query = committed.to_string();
        self.generation += 1;
        self.phase = SearchPhase::Idle;
    }
}

/// Search input driving a listing page.
///
/// Emits `on_commit` with the final query after the quiet period, or
/// immediately when the input is cleared. The page resets `page` to 1
/// and navigates.
#[component]
pub fn SearchBox(
    #[props(default = String::new())] initial: String,
    #[props(default = "Search...".to_string())] placeholder: String,
    on_commit: EventHandler<String>,
) -> Element {
    let initial_query = initial.clone();
    let mut machine = use_signal(move || SearchMachine::new(initial_query));
    let mut debouncer = use_signal(Debouncer::new);

    // The committed query lives in the URL. Back/forward navigation and
    // nav links re-render the page with a different `initial`; the input
    // follows it instead of keeping stale text.
    use_effect(use_reactive((&initial,), move |(initial,)| {
        if machine.peek().query() != initial {
            machine.write().sync(&initial);
            debouncer.write().cancel();
        }
    }));

    let oninput = move |evt: FormEvent| {
        let effect = machine.write().input(&evt.value());
        match effect {
            SearchEffect::Commit { query } => {
                debouncer.write().cancel();
                on_commit.call(query);
                machine.write().navigated();
            }
            SearchEffect::StartTimer { generation } => {
                debouncer.write().schedule(SEARCH_DEBOUNCE, move || {
                    let effect = machine.write().timer_fired(generation);
                    if let SearchEffect::Commit { query } = effect {
                        on_commit.call(query);
                        machine.write().navigated();
                    }
                });
            }
            SearchEffect::None => {}
        }
    };

    let query = machine.read().query().to_string();
    rsx! {
        div {
            class: "search-box",
            Icon { icon: FaMagnifyingGlass, width: 16, height: 16 }
            input {
                r#type: "search",
                class: "search-box-input",
                placeholder: "{placeholder}",
                value: "{query}",
                oninput: oninput,
            }
        }
    }
}
