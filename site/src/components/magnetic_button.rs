//! Link button that drifts toward the pointer while hovered.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::util::motion::{MAGNETIC_STRENGTH, magnetic_offset, translate_css};

const REST_TRANSFORM: &str = "translate(0px, 0px)";

/// Anchor styled as a button with a pointer-following offset.
#[component]
pub fn MagneticButton(
    href: &'static str,
    #[prop(optional)] primary: bool,
    #[prop(optional)] external: bool,
    children: Children,
) -> impl IntoView {
    let anchor_ref = NodeRef::<leptos::html::A>::new();
    let transform = RwSignal::new(REST_TRANSFORM.to_owned());

    let on_pointer_move = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::PointerEvent| {
                let Some(el) = anchor_ref.get() else {
                    return;
                };
                let rect = el.get_bounding_client_rect();
                let center = (rect.left() + rect.width() / 2.0, rect.top() + rect.height() / 2.0);
                let pointer = (f64::from(ev.client_x()), f64::from(ev.client_y()));
                transform.set(translate_css(magnetic_offset(pointer, center, MAGNETIC_STRENGTH)));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_leave = move |_ev: leptos::ev::PointerEvent| transform.set(REST_TRANSFORM.to_owned());

    let class = if primary { "magnetic-btn magnetic-btn--primary" } else { "magnetic-btn" };
    let (target, rel) = if external { (Some("_blank"), Some("noopener noreferrer")) } else { (None, None) };

    view! {
        <a
            class=class
            href=href
            target=target
            rel=rel
            node_ref=anchor_ref
            style:transform=move || transform.get()
            on:pointermove=on_pointer_move
            on:pointerleave=on_pointer_leave
        >
            {children()}
        </a>
    }
}
