//! Project showcase grid.

use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::tag_list::TagList;
use crate::content::PROJECTS;
use crate::state::ui::Section;

const STAGGER_MS: u32 = 100;

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section class="section projects" id=Section::Projects.anchor()>
            <h2 class="section__title">"Projects"</h2>
            <div class="projects__grid">
                {PROJECTS
                    .iter()
                    .zip(0u32..)
                    .map(|(project, i)| {
                        view! {
                            <Reveal delay_ms=i * STAGGER_MS>
                                <a class="card projects__card" href=project.href target="_blank" rel="noopener noreferrer">
                                    <h3 class="projects__name">{project.name}</h3>
                                    <p class="projects__description">{project.description}</p>
                                    <TagList tags=project.tags/>
                                </a>
                            </Reveal>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
