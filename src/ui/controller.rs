//! Filter/search state machine for the interactive listing.
//!
//! All state lives here and is passed around explicitly: the current
//! FilterRequest, the view phase, a request-generation counter and the
//! pending debounced term. Time is injected (`Instant` arguments), so
//! the machine is fully deterministic under test.

use crate::models::filter::FilterRequest;
use crate::models::interaction_type::InteractionType;
use chrono::NaiveDate;
use regex::Regex;
use std::time::{Duration, Instant};

/// Quiet interval before a term edit fires a fetch.
pub const DEBOUNCE: Duration = Duration::from_millis(150);

/// Minimum number of alphabetic characters before a non-empty term is
/// allowed to fire.
pub const MIN_TERM_LETTERS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Fetching,
    Populated,
    Empty,
    Failed,
}

#[derive(Debug, Clone)]
pub enum FilterEvent {
    /// Live keystroke in the search box: debounced.
    TermEdited(String),
    /// Explicit search submit: fires immediately, bypassing the debounce.
    Submit(String),
    StartDate(Option<NaiveDate>),
    EndDate(Option<NaiveDate>),
    Type(Option<InteractionType>),
    Status(Option<String>),
    Page(u32),
    Reset,
}

/// A dispatched fetch, tagged with the generation that must still be
/// current when its response comes back.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket {
    pub generation: u64,
    pub filter: FilterRequest,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    None,
    Fetch(FetchTicket),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Items(usize),
    Failed,
}

pub struct FilterController {
    filter: FilterRequest,
    phase: Phase,
    generation: u64,
    pending_term: Option<(String, Instant)>,
    letters: Regex,
}

impl FilterController {
    pub fn new(per_page: u32) -> Self {
        Self {
            filter: FilterRequest {
                per_page,
                ..Default::default()
            },
            phase: Phase::Idle,
            generation: 0,
            pending_term: None,
            letters: Regex::new("[a-zA-Z]").unwrap(),
        }
    }

    pub fn filter(&self) -> &FilterRequest {
        &self.filter
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn has_pending_term(&self) -> bool {
        self.pending_term.is_some()
    }

    /// Initial load: one unfiltered fetch of page 1.
    pub fn initial(&mut self) -> Action {
        self.start_fetch()
    }

    pub fn apply(&mut self, event: FilterEvent, now: Instant) -> Action {
        match event {
            FilterEvent::TermEdited(term) => {
                if self.term_eligible(&term) {
                    self.pending_term = Some((term, now));
                } else {
                    // Too short to search; also cancels an earlier timer.
                    self.pending_term = None;
                }
                Action::None
            }
            FilterEvent::Submit(term) => {
                self.pending_term = None;
                let trimmed = term.trim();
                self.filter.term = if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                };
                self.filter.page = 1;
                self.start_fetch()
            }
            FilterEvent::StartDate(d) => {
                self.filter.start_date = d;
                self.filter.page = 1;
                self.start_fetch()
            }
            FilterEvent::EndDate(d) => {
                self.filter.end_date = d;
                self.filter.page = 1;
                self.start_fetch()
            }
            FilterEvent::Type(t) => {
                self.filter.interaction_type = t;
                self.filter.page = 1;
                self.start_fetch()
            }
            FilterEvent::Status(s) => {
                self.filter.lead_status = s;
                self.filter.page = 1;
                self.start_fetch()
            }
            FilterEvent::Page(p) => {
                self.filter.page = p.max(1);
                self.start_fetch()
            }
            FilterEvent::Reset => {
                let per_page = self.filter.per_page;
                self.filter = FilterRequest {
                    per_page,
                    ..Default::default()
                };
                self.pending_term = None;
                self.start_fetch()
            }
        }
    }

    /// Fire the pending term once its quiet interval has elapsed.
    pub fn poll(&mut self, now: Instant) -> Action {
        let fire = match &self.pending_term {
            Some((_, at)) => now.duration_since(*at) >= DEBOUNCE,
            None => false,
        };

        if !fire {
            return Action::None;
        }

        if let Some((term, _)) = self.pending_term.take() {
            let trimmed = term.trim();
            self.filter.term = if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            };
            self.filter.page = 1;
            return self.start_fetch();
        }
        Action::None
    }

    /// Feed back a fetch result. Returns false when the response is
    /// stale (a newer fetch was dispatched meanwhile) and must be
    /// dropped without touching the view.
    pub fn accept(&mut self, generation: u64, outcome: FetchOutcome) -> bool {
        if generation != self.generation {
            return false;
        }

        self.phase = match outcome {
            FetchOutcome::Items(0) => Phase::Empty,
            FetchOutcome::Items(_) => Phase::Populated,
            FetchOutcome::Failed => Phase::Failed,
        };
        true
    }

    /// Empty terms always search (clearing the box restores the full
    /// listing); non-empty terms need enough letters to be worth a trip.
    fn term_eligible(&self, term: &str) -> bool {
        let trimmed = term.trim();
        trimmed.is_empty() || self.letters.find_iter(trimmed).count() >= MIN_TERM_LETTERS
    }

    fn start_fetch(&mut self) -> Action {
        self.generation += 1;
        self.phase = Phase::Fetching;
        Action::Fetch(FetchTicket {
            generation: self.generation,
            filter: self.filter.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(base: Instant, ms: u64) -> Instant {
        base + Duration::from_millis(ms)
    }

    fn fetch_filter(action: Action) -> FilterRequest {
        match action {
            Action::Fetch(ticket) => ticket.filter,
            Action::None => panic!("expected a fetch"),
        }
    }

    #[test]
    fn initial_load_is_unfiltered_page_one() {
        let mut c = FilterController::new(20);
        let f = fetch_filter(c.initial());
        assert!(!f.has_predicates());
        assert_eq!(f.page, 1);
        assert_eq!(c.phase(), Phase::Fetching);
    }

    #[test]
    fn two_letter_term_never_fires() {
        let mut c = FilterController::new(20);
        let t0 = Instant::now();

        assert_eq!(c.apply(FilterEvent::TermEdited("ac".into()), t0), Action::None);
        assert!(!c.has_pending_term());
        assert_eq!(c.poll(at(t0, 500)), Action::None);
    }

    #[test]
    fn eligible_term_fires_only_after_the_quiet_interval() {
        let mut c = FilterController::new(20);
        let t0 = Instant::now();

        c.apply(FilterEvent::TermEdited("acme".into()), t0);
        assert_eq!(c.poll(at(t0, 100)), Action::None);

        let f = fetch_filter(c.poll(at(t0, 150)));
        assert_eq!(f.term.as_deref(), Some("acme"));
        assert_eq!(f.page, 1);

        // Timer is one-shot.
        assert_eq!(c.poll(at(t0, 400)), Action::None);
    }

    #[test]
    fn digits_do_not_count_as_letters() {
        let mut c = FilterController::new(20);
        let t0 = Instant::now();

        c.apply(FilterEvent::TermEdited("12345".into()), t0);
        assert_eq!(c.poll(at(t0, 300)), Action::None);

        c.apply(FilterEvent::TermEdited("ab1".into()), t0);
        assert_eq!(c.poll(at(t0, 300)), Action::None);
    }

    #[test]
    fn clearing_the_term_fires_a_full_listing() {
        let mut c = FilterController::new(20);
        let t0 = Instant::now();

        c.apply(FilterEvent::Submit("acme".into()), t0);
        c.apply(FilterEvent::TermEdited("".into()), t0);
        let f = fetch_filter(c.poll(at(t0, 200)));
        assert_eq!(f.term, None);
    }

    #[test]
    fn a_new_edit_restarts_the_timer() {
        let mut c = FilterController::new(20);
        let t0 = Instant::now();

        c.apply(FilterEvent::TermEdited("acme".into()), t0);
        c.apply(FilterEvent::TermEdited("acmec".into()), at(t0, 100));

        assert_eq!(c.poll(at(t0, 200)), Action::None);
        let f = fetch_filter(c.poll(at(t0, 250)));
        assert_eq!(f.term.as_deref(), Some("acmec"));
    }

    #[test]
    fn structured_controls_fetch_immediately_and_reset_the_page() {
        let mut c = FilterController::new(20);
        let t0 = Instant::now();

        fetch_filter(c.apply(FilterEvent::Page(3), t0));
        assert_eq!(c.filter().page, 3);

        let f = fetch_filter(c.apply(
            FilterEvent::Type(Some(InteractionType::Email)),
            t0,
        ));
        assert_eq!(f.interaction_type, Some(InteractionType::Email));
        assert_eq!(f.page, 1);
    }

    #[test]
    fn stale_responses_are_discarded() {
        let mut c = FilterController::new(20);
        let t0 = Instant::now();

        let first = match c.apply(FilterEvent::Submit("acme".into()), t0) {
            Action::Fetch(t) => t,
            Action::None => panic!("expected fetch"),
        };
        let second = match c.apply(FilterEvent::Page(2), t0) {
            Action::Fetch(t) => t,
            Action::None => panic!("expected fetch"),
        };

        // The older response arrives last; it must not win.
        assert!(c.accept(second.generation, FetchOutcome::Items(5)));
        assert_eq!(c.phase(), Phase::Populated);

        assert!(!c.accept(first.generation, FetchOutcome::Items(0)));
        assert_eq!(c.phase(), Phase::Populated);
    }

    #[test]
    fn outcomes_drive_the_phase() {
        let mut c = FilterController::new(20);
        let t0 = Instant::now();

        let t = match c.apply(FilterEvent::Submit("acme".into()), t0) {
            Action::Fetch(t) => t,
            Action::None => panic!("expected fetch"),
        };
        assert!(c.accept(t.generation, FetchOutcome::Items(0)));
        assert_eq!(c.phase(), Phase::Empty);

        let t = match c.apply(FilterEvent::Page(1), t0) {
            Action::Fetch(t) => t,
            Action::None => panic!("expected fetch"),
        };
        assert!(c.accept(t.generation, FetchOutcome::Failed));
        assert_eq!(c.phase(), Phase::Failed);
    }

    #[test]
    fn reset_clears_every_field() {
        let mut c = FilterController::new(20);
        let t0 = Instant::now();

        c.apply(FilterEvent::Submit("acme".into()), t0);
        c.apply(FilterEvent::Status(Some("qualified".into())), t0);
        c.apply(FilterEvent::Page(4), t0);

        let f = fetch_filter(c.apply(FilterEvent::Reset, t0));
        assert!(!f.has_predicates());
        assert_eq!(f.page, 1);
        assert_eq!(f.per_page, 20);
    }
}
