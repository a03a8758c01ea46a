//! Fade-in wrapper that reveals its children once scrolled into view.

use leptos::prelude::*;

/// Wraps children in a block that gains `reveal--visible` when on screen.
///
/// Visibility latches: once revealed, content stays visible.
#[component]
pub fn Reveal(#[prop(optional)] delay_ms: u32, children: Children) -> impl IntoView {
    let container_ref = NodeRef::<leptos::html::Div>::new();
    let visible = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        use crate::util::motion::should_reveal;

        let check = move || {
            if visible.get_untracked() {
                return;
            }
            let Some(el) = container_ref.get_untracked() else {
                return;
            };
            let viewport_height = window()
                .inner_height()
                .ok()
                .and_then(|h| h.as_f64())
                .unwrap_or(0.0);
            if should_reveal(el.get_bounding_client_rect().top(), viewport_height) {
                visible.set(true);
            }
        };

        Effect::new(move || {
            // Track mount so the first check runs once the node exists.
            let _ = container_ref.get();
            check();
        });
        let _ = window_event_listener(leptos::ev::scroll, move |_| check());
    }

    let class = move || if visible.get() { "reveal reveal--visible" } else { "reveal" };

    view! {
        <div class=class node_ref=container_ref style:transition-delay=format!("{delay_ms}ms")>
            {children()}
        </div>
    }
}
