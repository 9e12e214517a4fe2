//! Debounced error visibility
//!
//! Validation can clear a field's errors and raise them again within one burst
//! of updates (dependent fields re-validating each other). Showing that
//! literally would flash the error panel closed and open. The types here keep
//! the last non-empty error list for a short delay after the list empties, and
//! only report a visibility change once the list has really settled.
//!
//! Nothing in this module owns a timer. Hosts feed in updates and the current
//! time, read [`ErrorVisibility::deadline`] to schedule a single wake-up, and
//! call [`ErrorVisibility::tick`] when it fires.

use std::time::Duration;
use tracing::{debug, trace};

/// Delay applied before an emptied error list is hidden
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(10);

// ============================================================================
// Debounce State Machine
// ============================================================================

/// States of the debounced error list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DebounceState<T> {
    /// Nothing to show
    Empty,
    /// Showing the latest non-empty list
    Visible(Vec<T>),
    /// The input emptied; `held` stays in place until `deadline`
    PendingHide { held: Vec<T>, deadline: Duration },
}

/// Error list that shows immediately and hides after a delay
#[derive(Debug, Clone)]
pub struct DebouncedErrors<T> {
    delay: Duration,
    state: DebounceState<T>,
    last_input: Option<Vec<T>>,
    disposed: bool,
}

impl<T: Clone + PartialEq> DebouncedErrors<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            state: DebounceState::Empty,
            last_input: None,
            disposed: false,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn state(&self) -> &DebounceState<T> {
        &self.state
    }

    /// The debounced list as currently observed
    pub fn current(&self) -> &[T] {
        match &self.state {
            DebounceState::Empty => &[],
            DebounceState::Visible(list) => list,
            DebounceState::PendingHide { held, .. } => held,
        }
    }

    /// When a pending hide falls due, if one is pending
    pub fn deadline(&self) -> Option<Duration> {
        match &self.state {
            DebounceState::PendingHide { deadline, .. } => Some(*deadline),
            _ => None,
        }
    }

    /// Feed a new input list observed at `now`.
    ///
    /// Returns `true` when the debounced list changed. An input equal to the
    /// previous one is ignored, so re-rendering with the same empty list does
    /// not push the hide deadline back.
    pub fn update(&mut self, errors: &[T], now: Duration) -> bool {
        if self.disposed || self.last_input.as_deref() == Some(errors) {
            return false;
        }
        self.last_input = Some(errors.to_vec());

        if !errors.is_empty() {
            let changed = self.current() != errors;
            self.state = DebounceState::Visible(errors.to_vec());
            return changed;
        }

        match std::mem::replace(&mut self.state, DebounceState::Empty) {
            DebounceState::Empty => false,
            DebounceState::Visible(_) | DebounceState::PendingHide { .. } if self.delay.is_zero() => {
                true
            }
            DebounceState::Visible(held) | DebounceState::PendingHide { held, .. } => {
                let deadline = now + self.delay;
                trace!("Error list emptied, hiding at {:?}", deadline);
                self.state = DebounceState::PendingHide { held, deadline };
                false
            }
        }
    }

    /// Advance time. Returns `true` when a pending hide fired.
    pub fn tick(&mut self, now: Duration) -> bool {
        if self.disposed {
            return false;
        }
        match &self.state {
            DebounceState::PendingHide { deadline, .. } if now >= *deadline => {
                self.state = DebounceState::Empty;
                true
            }
            _ => false,
        }
    }

    /// Cancel any pending hide and ignore all later input
    pub fn dispose(&mut self) {
        self.disposed = true;
        if let DebounceState::PendingHide { held, .. } =
            std::mem::replace(&mut self.state, DebounceState::Empty)
        {
            self.state = DebounceState::Visible(held);
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

// ============================================================================
// Visibility Cache
// ============================================================================

/// A flip of the visibility flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityChange {
    Shown,
    Hidden,
}

impl VisibilityChange {
    pub fn is_visible(&self) -> bool {
        matches!(self, VisibilityChange::Shown)
    }
}

/// Coarse phase of an [`ErrorVisibility`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityPhase {
    Empty,
    PendingHide(Duration),
    Visible,
}

/// Visibility flag plus the last non-empty error list.
///
/// The cached list survives the flag turning false so an exit animation can
/// keep rendering the text it is removing.
#[derive(Debug, Clone)]
pub struct ErrorVisibility<T> {
    debounced: DebouncedErrors<T>,
    cached: Vec<T>,
    visible: bool,
}

impl<T: Clone + PartialEq> ErrorVisibility<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            debounced: DebouncedErrors::new(delay),
            cached: Vec::new(),
            visible: false,
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Errors to render in the explain panel
    pub fn cached_errors(&self) -> &[T] {
        &self.cached
    }

    pub fn debounced_errors(&self) -> &[T] {
        self.debounced.current()
    }

    pub fn deadline(&self) -> Option<Duration> {
        self.debounced.deadline()
    }

    pub fn phase(&self) -> VisibilityPhase {
        match self.debounced.state() {
            DebounceState::Empty => VisibilityPhase::Empty,
            DebounceState::Visible(_) => VisibilityPhase::Visible,
            DebounceState::PendingHide { deadline, .. } => VisibilityPhase::PendingHide(*deadline),
        }
    }

    /// Feed the field's current errors. Returns a change only when the flag flips.
    pub fn update(&mut self, errors: &[T], now: Duration) -> Option<VisibilityChange> {
        if self.debounced.update(errors, now) {
            self.sync()
        } else {
            None
        }
    }

    /// Advance time to `now`, firing a due hide
    pub fn tick(&mut self, now: Duration) -> Option<VisibilityChange> {
        if self.debounced.tick(now) {
            self.sync()
        } else {
            None
        }
    }

    /// Stop reacting; the owner is going away
    pub fn dispose(&mut self) {
        self.debounced.dispose();
    }

    fn sync(&mut self) -> Option<VisibilityChange> {
        let current = self.debounced.current();
        if !current.is_empty() {
            self.cached = current.to_vec();
        }

        let visible = !current.is_empty();
        if visible == self.visible {
            return None;
        }
        self.visible = visible;

        let change = if visible {
            VisibilityChange::Shown
        } else {
            VisibilityChange::Hidden
        };
        debug!("Error panel {:?} ({} cached errors)", change, self.cached.len());
        Some(change)
    }
}

impl<T: Clone + PartialEq> Default for ErrorVisibility<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn required() -> Vec<&'static str> {
        vec!["required"]
    }

    #[test]
    fn test_errors_show_immediately() {
        let mut cache = ErrorVisibility::new(ms(10));

        assert_eq!(cache.update(&required(), ms(0)), Some(VisibilityChange::Shown));
        assert!(cache.visible());
        assert_eq!(cache.cached_errors(), &["required"]);
        assert_eq!(cache.deadline(), None);
    }

    #[test]
    fn test_flicker_inside_window_never_hides() {
        let mut cache = ErrorVisibility::new(ms(10));
        cache.update(&required(), ms(0));

        assert_eq!(cache.update(&[], ms(1)), None);
        assert_eq!(cache.phase(), VisibilityPhase::PendingHide(ms(11)));
        assert_eq!(cache.update(&required(), ms(5)), None);

        assert_eq!(cache.phase(), VisibilityPhase::Visible);
        assert_eq!(cache.tick(ms(20)), None);
        assert!(cache.visible());
        assert_eq!(cache.cached_errors(), &["required"]);
    }

    #[test]
    fn test_hide_after_window_keeps_cache() {
        let mut cache = ErrorVisibility::new(ms(10));
        cache.update(&required(), ms(0));
        cache.update(&[], ms(3));

        assert_eq!(cache.tick(ms(12)), None);
        assert!(cache.visible());
        assert_eq!(cache.tick(ms(13)), Some(VisibilityChange::Hidden));
        assert!(!cache.visible());
        assert_eq!(cache.cached_errors(), &["required"]);
        assert!(cache.debounced_errors().is_empty());

        // no second notification
        assert_eq!(cache.tick(ms(50)), None);
        assert_eq!(cache.update(&[], ms(60)), None);
    }

    #[test]
    fn test_rapid_toggle_collapses_to_one_hide() {
        let mut cache = ErrorVisibility::new(ms(10));
        let mut changes = Vec::new();

        changes.extend(cache.update(&required(), ms(0)));
        changes.extend(cache.update(&[], ms(2)));
        changes.extend(cache.update(&required(), ms(4)));
        changes.extend(cache.update(&[], ms(6)));
        changes.extend(cache.tick(ms(15)));
        assert_eq!(cache.deadline(), Some(ms(16)));
        changes.extend(cache.tick(ms(16)));

        assert_eq!(changes, vec![VisibilityChange::Shown, VisibilityChange::Hidden]);
    }

    #[test]
    fn test_repeated_empty_input_does_not_extend_window() {
        let mut cache = ErrorVisibility::new(ms(10));
        cache.update(&required(), ms(0));
        cache.update(&[], ms(0));
        cache.update(&[], ms(8));

        assert_eq!(cache.deadline(), Some(ms(10)));
        assert_eq!(cache.tick(ms(10)), Some(VisibilityChange::Hidden));
    }

    #[test]
    fn test_changed_errors_replace_cache_without_notification() {
        let mut cache = ErrorVisibility::new(ms(10));
        cache.update(&["required"], ms(0));
        assert_eq!(cache.update(&["too short"], ms(1)), None);
        assert_eq!(cache.cached_errors(), &["too short"]);
    }

    #[test]
    fn test_empty_start_stays_hidden() {
        let mut cache: ErrorVisibility<&str> = ErrorVisibility::new(ms(10));
        assert_eq!(cache.update(&[], ms(0)), None);
        assert_eq!(cache.deadline(), None);
        assert_eq!(cache.phase(), VisibilityPhase::Empty);
    }

    #[test]
    fn test_zero_delay_hides_on_update() {
        let mut cache = ErrorVisibility::new(Duration::ZERO);
        cache.update(&required(), ms(0));
        assert_eq!(cache.update(&[], ms(0)), Some(VisibilityChange::Hidden));
    }

    #[test]
    fn test_dispose_cancels_pending_hide() {
        let mut cache = ErrorVisibility::new(ms(10));
        cache.update(&required(), ms(0));
        cache.update(&[], ms(1));
        cache.dispose();

        assert_eq!(cache.deadline(), None);
        assert_eq!(cache.tick(ms(100)), None);
        assert_eq!(cache.update(&["other"], ms(101)), None);
        assert!(cache.visible());
    }

    #[test]
    fn test_random_sequences_keep_invariants() {
        let mut rng = StdRng::seed_from_u64(7);
        let pool = [vec![], vec!["required"], vec!["required", "too short"]];

        for _ in 0..200 {
            let mut cache = ErrorVisibility::new(ms(10));
            let mut now = Duration::ZERO;
            let mut visible = false;

            for _ in 0..30 {
                now += ms(rng.gen_range(0..15));
                let errors = &pool[rng.gen_range(0..pool.len())];

                let mut changes = Vec::new();
                changes.extend(cache.tick(now));
                let before = cache.debounced_errors().to_vec();
                changes.extend(cache.update(errors, now));

                if !errors.is_empty() {
                    assert_eq!(cache.debounced_errors(), errors.as_slice());
                } else if !before.is_empty() {
                    // hiding is never immediate
                    assert_eq!(cache.debounced_errors(), before.as_slice());
                }

                for change in changes {
                    assert_ne!(change.is_visible(), visible);
                    visible = change.is_visible();
                }
                assert_eq!(cache.visible(), visible);
                if cache.visible() {
                    assert!(!cache.cached_errors().is_empty());
                }
            }
        }
    }
}
