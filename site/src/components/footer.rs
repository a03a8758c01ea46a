//! Page footer.

use leptos::prelude::*;

use crate::content::PROFILE;
use crate::util::experience::today;

#[component]
pub fn Footer() -> impl IntoView {
    let year = today().year();

    view! {
        <footer class="footer">
            <p>{format!("\u{00A9} {year} {}. Built with Rust and Leptos.", PROFILE.name)}</p>
        </footer>
    }
}
