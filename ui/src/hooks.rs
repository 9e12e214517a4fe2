//! Reactive glue around the core state machines

use antform::{ErrorVisibility, FormSettings, VisibilityChange};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use std::time::Duration;

/// Wall-clock time as a duration since the Unix epoch
pub fn now() -> Duration {
    Duration::from_secs_f64(js_sys::Date::now().max(0.0) / 1000.0)
}

pub(crate) fn millis(duration: Duration) -> u32 {
    duration.as_millis().min(u32::MAX as u128) as u32
}

/// Publish settings to every form component below the current owner
pub fn provide_form_settings(settings: FormSettings) {
    provide_context(settings);
}

/// Settings from context, defaults when none were provided
pub fn use_form_settings() -> FormSettings {
    use_context::<FormSettings>().unwrap_or_default()
}

/// Debounced visibility of a field's errors.
///
/// Returns the visibility flag and the last non-empty error list. `on_change`
/// runs once per flip of the flag. The hide timer is replaced on every update
/// and cancelled when the owner is cleaned up.
pub fn use_cache_errors(
    errors: Signal<Vec<String>>,
    delay: Duration,
    on_change: Callback<bool>,
) -> (Signal<bool>, Signal<Vec<String>>) {
    let cache = StoredValue::new(ErrorVisibility::<String>::new(delay));
    let timer = StoredValue::new_local(None::<Timeout>);
    let visible = RwSignal::new(false);
    let cached = RwSignal::new(Vec::<String>::new());

    let publish = move |change: Option<VisibilityChange>| {
        let Some((now_visible, now_cached)) =
            cache.try_with_value(|c| (c.visible(), c.cached_errors().to_vec()))
        else {
            return;
        };

        if visible.get_untracked() != now_visible {
            visible.set(now_visible);
        }
        if cached.with_untracked(|c| c != &now_cached) {
            cached.set(now_cached);
        }
        if let Some(change) = change {
            on_change.run(change.is_visible());
        }
    };

    // dropping the previous Timeout cancels it
    let reschedule = move || {
        let deadline = cache.try_with_value(|c| c.deadline()).flatten();
        let next = deadline.map(|deadline| {
            let wait = deadline.saturating_sub(now());
            Timeout::new(millis(wait), move || {
                // the timer was armed for this deadline, so it is due
                let change = cache
                    .try_update_value(|c| c.tick(deadline.max(now())))
                    .flatten();
                publish(change);
            })
        });
        timer.set_value(next);
    };

    Effect::new(move |_| {
        let errors = errors.get();
        let change = cache
            .try_update_value(|c| c.update(&errors, now()))
            .flatten();
        reschedule();
        publish(change);
    });

    on_cleanup(move || {
        timer.try_update_value(|t| *t = None);
        cache.try_update_value(|c| c.dispose());
    });

    (visible.into(), cached.into())
}
