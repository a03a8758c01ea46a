//! Inline list of small tag pills.

use leptos::prelude::*;

#[component]
pub fn TagList(tags: &'static [&'static str]) -> impl IntoView {
    view! {
        <ul class="tag-list">
            {tags.iter().map(|tag| view! { <li class="tag-list__tag">{*tag}</li> }).collect::<Vec<_>>()}
        </ul>
    }
}
