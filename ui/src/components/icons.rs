//! Feedback icons rendered as inline SVG

use antform::FeedbackIcon;
use leptos::prelude::*;

const CIRCLE: &str = "M512 64C264.6 64 64 264.6 64 512s200.6 448 448 448 448-200.6 448-448S759.4 64 512 64z";

/// SVG path data of each icon
pub fn icon_path(icon: FeedbackIcon) -> String {
    match icon {
        FeedbackIcon::CheckCircleFilled => format!(
            "{}m193.5 301.7l-210.6 292a31.8 31.8 0 01-51.7 0L318.5 484.9c-3.8-5.3 0-12.7 6.5-12.7h46.9c10.2 0 19.9 4.9 25.9 13.3l71.2 98.8 157.2-218c6-8.3 15.6-13.3 25.9-13.3H699c6.5 0 10.3 7.4 6.5 12.7z",
            CIRCLE
        ),
        FeedbackIcon::ExclamationCircleFilled => format!(
            "{}m-32 232c0-4.4 3.6-8 8-8h48c4.4 0 8 3.6 8 8v272c0 4.4-3.6 8-8 8h-48c-4.4 0-8-3.6-8-8V296zm32 440a48.01 48.01 0 010-96 48.01 48.01 0 010 96z",
            CIRCLE
        ),
        FeedbackIcon::CloseCircleFilled => format!(
            "{}m165.4 618.2l-66-.3L512 563.4l-99.3 118.4-66.1.3c-4.4 0-8-3.5-8-8 0-1.9.7-3.7 1.9-5.2l130.1-155L340.5 359a8.32 8.32 0 01-1.9-5.2c0-4.4 3.6-8 8-8l66.1.3L512 464.6l99.3-118.4 66-.3c4.4 0 8 3.5 8 8 0 1.9-.7 3.7-1.9 5.2L553.5 514l130 155c1.2 1.5 1.9 3.3 1.9 5.2 0 4.4-3.6 8-8 8z",
            CIRCLE
        ),
        FeedbackIcon::Loading => "M988 548c-19.9 0-36-16.1-36-36 0-59.4-11.6-117-34.6-171.3a440.45 440.45 0 00-94.3-139.9 437.71 437.71 0 00-139.9-94.3C629 83.6 571.4 72 512 72c-19.9 0-36-16.1-36-36s16.1-36 36-36c69.1 0 136.2 13.5 199.3 40.3C772.3 66 827 103 874 150c47 47 83.9 101.8 109.7 162.7 26.7 63.1 40.2 130.2 40.2 199.3.1 19.9-16 36-35.9 36z".to_string(),
    }
}

pub fn icon_view_box(icon: FeedbackIcon) -> &'static str {
    match icon {
        FeedbackIcon::Loading => "0 0 1024 1024",
        FeedbackIcon::CheckCircleFilled
        | FeedbackIcon::ExclamationCircleFilled
        | FeedbackIcon::CloseCircleFilled => "64 64 896 896",
    }
}

#[component]
pub fn FeedbackIconView(icon: FeedbackIcon) -> impl IntoView {
    let svg_class = if icon.spins() { "anticon-spin" } else { "" };

    view! {
        <span role="img" aria-label=icon.name() class=icon.class_name()>
            <svg
                viewBox=icon_view_box(icon)
                class=svg_class
                width="1em"
                height="1em"
                fill="currentColor"
                aria-hidden="true"
                focusable="false"
            >
                <path d=icon_path(icon)></path>
            </svg>
        </span>
    }
}
