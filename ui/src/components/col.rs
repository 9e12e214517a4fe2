use leptos::prelude::*;

/// Grid column.
///
/// `class` replaces the column's own `class_name`, the grid classes always
/// come first.
#[component]
pub fn Col(
    #[prop(optional)] col: antform::ColProps,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] prefix_cls: Option<String>,
    children: Children,
) -> impl IntoView {
    let class_name = col
        .grid_classes(prefix_cls.as_deref())
        .add_opt(class.or_else(|| col.class_name.clone()))
        .build();

    view! { <div class=class_name>{children()}</div> }
}
