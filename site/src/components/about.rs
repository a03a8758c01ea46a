//! Biography and skill tags.

use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::tag_list::TagList;
use crate::content::{PROFILE, SKILLS};
use crate::state::ui::Section;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section class="section about" id=Section::About.anchor()>
            <Reveal>
                <h2 class="section__title">"About"</h2>
                {PROFILE.bio.iter().map(|p| view! { <p class="about__paragraph">{*p}</p> }).collect::<Vec<_>>()}
                <TagList tags=SKILLS/>
            </Reveal>
        </section>
    }
}
