//! Enter/leave CSS motion for conditionally mounted panels
//!
//! The panel stays mounted through its leave animation and is removed once the
//! animation ends, or after a fallback timeout when no end event arrives.

use antform::ClassNames;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use std::time::Duration;

use crate::hooks::millis;

/// Where a panel is in its motion lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MotionPhase {
    #[default]
    Hidden,
    /// First show of the panel
    Appear,
    /// Any later show
    Enter,
    Visible,
    Leave,
}

impl MotionPhase {
    /// React to the visibility flag
    pub fn on_visible_change(self, visible: bool, shown_before: bool) -> Self {
        match (self, visible) {
            (MotionPhase::Hidden, true) if shown_before => MotionPhase::Enter,
            (MotionPhase::Hidden, true) => MotionPhase::Appear,
            (MotionPhase::Leave, true) => MotionPhase::Enter,
            (MotionPhase::Appear | MotionPhase::Enter | MotionPhase::Visible, false) => {
                MotionPhase::Leave
            }
            (phase, _) => phase,
        }
    }

    /// React to an animation end (or the fallback timeout)
    pub fn on_motion_end(self) -> Self {
        match self {
            MotionPhase::Appear | MotionPhase::Enter => MotionPhase::Visible,
            MotionPhase::Leave => MotionPhase::Hidden,
            phase => phase,
        }
    }

    pub fn is_mounted(self) -> bool {
        self != MotionPhase::Hidden
    }

    pub fn is_animating(self) -> bool {
        matches!(self, MotionPhase::Appear | MotionPhase::Enter | MotionPhase::Leave)
    }
}

/// Motion classes for `phase`, e.g. `show-help-leave show-help-leave-active`
pub fn motion_class(name: &str, phase: MotionPhase) -> String {
    let stage = match phase {
        MotionPhase::Appear => "appear",
        MotionPhase::Enter => "enter",
        MotionPhase::Leave => "leave",
        MotionPhase::Hidden | MotionPhase::Visible => return String::new(),
    };
    format!("{name}-{stage} {name}-{stage}-active")
}

/// Reactive motion state of one panel
#[derive(Clone, Copy)]
pub struct MotionHandle {
    pub phase: Signal<MotionPhase>,
    pub class: Signal<String>,
    pub mounted: Signal<bool>,
    /// Call from `animationend`/`transitionend` of the panel
    pub finish: Callback<()>,
}

/// Drive a panel's motion from `visible`.
///
/// `on_leave_end` runs after the panel has been unmounted.
pub fn use_motion(
    visible: Signal<bool>,
    name: String,
    fallback: Duration,
    on_leave_end: Callback<()>,
) -> MotionHandle {
    let phase = RwSignal::new(MotionPhase::Hidden);
    let shown_before = StoredValue::new(false);
    let fallback_timer = StoredValue::new_local(None::<Timeout>);

    let finish = Callback::new(move |_: ()| {
        let before = phase.get_untracked();
        let after = before.on_motion_end();
        if after == before {
            return;
        }
        phase.set(after);
        if after == MotionPhase::Hidden {
            on_leave_end.run(());
        }
    });

    Effect::new(move |_| {
        let visible = visible.get();
        let before = phase.get_untracked();
        let after = before.on_visible_change(visible, shown_before.get_value());
        if after == before {
            return;
        }
        if visible {
            shown_before.set_value(true);
        }
        phase.set(after);

        let timer = after
            .is_animating()
            .then(|| Timeout::new(millis(fallback), move || finish.run(())));
        fallback_timer.set_value(timer);
    });

    on_cleanup(move || {
        fallback_timer.try_update_value(|t| *t = None);
    });

    MotionHandle {
        phase: phase.into(),
        class: Signal::derive(move || motion_class(&name, phase.get())),
        mounted: Signal::derive(move || phase.get().is_mounted()),
        finish,
    }
}

/// Panel mounted while `visible`, kept through its leave motion
#[component]
pub fn Motion(
    #[prop(into)] visible: Signal<bool>,
    #[prop(into)] name: String,
    #[prop(optional, into)] class: Option<String>,
    #[prop(default = Duration::from_millis(300))] leave_timeout: Duration,
    #[prop(optional)] on_leave_end: Option<Callback<()>>,
    children: ChildrenFn,
) -> impl IntoView {
    let on_leave_end = on_leave_end.unwrap_or_else(|| Callback::new(|_: ()| {}));
    let motion = use_motion(visible, name, leave_timeout, on_leave_end);
    let class_name = move || {
        ClassNames::new()
            .add_opt(class.clone())
            .add(motion.class.get())
            .build()
    };

    view! {
        <Show when=move || motion.mounted.get()>
            <div
                class=class_name.clone()
                on:animationend=move |_| motion.finish.run(())
                on:transitionend=move |_| motion.finish.run(())
            >
                {children()}
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_show_appears_then_enters() {
        let phase = MotionPhase::Hidden.on_visible_change(true, false);
        assert_eq!(phase, MotionPhase::Appear);

        let phase = MotionPhase::Hidden.on_visible_change(true, true);
        assert_eq!(phase, MotionPhase::Enter);
    }

    #[test]
    fn test_leave_unmounts_after_motion_end() {
        let phase = MotionPhase::Visible.on_visible_change(false, true);
        assert_eq!(phase, MotionPhase::Leave);
        assert!(phase.is_mounted());

        let phase = phase.on_motion_end();
        assert_eq!(phase, MotionPhase::Hidden);
        assert!(!phase.is_mounted());
    }

    #[test]
    fn test_reshow_during_leave_enters_again() {
        assert_eq!(MotionPhase::Leave.on_visible_change(true, true), MotionPhase::Enter);
    }

    #[test]
    fn test_no_op_transitions() {
        assert_eq!(MotionPhase::Hidden.on_visible_change(false, true), MotionPhase::Hidden);
        assert_eq!(MotionPhase::Visible.on_visible_change(true, true), MotionPhase::Visible);
        assert_eq!(MotionPhase::Visible.on_motion_end(), MotionPhase::Visible);
    }

    #[test]
    fn test_motion_classes() {
        assert_eq!(motion_class("show-help", MotionPhase::Leave), "show-help-leave show-help-leave-active");
        assert_eq!(motion_class("show-help", MotionPhase::Appear), "show-help-appear show-help-appear-active");
        assert_eq!(motion_class("show-help", MotionPhase::Visible), "");
    }
}
