//! Work history timeline.

use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::tag_list::TagList;
use crate::content::JOBS;
use crate::state::ui::Section;

/// Delay between consecutive cards fading in.
const STAGGER_MS: u32 = 80;

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section class="section experience" id=Section::Experience.anchor()>
            <h2 class="section__title">"Experience"</h2>
            <ol class="experience__list">
                {JOBS
                    .iter()
                    .zip(0u32..)
                    .map(|(job, i)| {
                        view! {
                            <li class="experience__item">
                                <Reveal delay_ms=i * STAGGER_MS>
                                    <div class="card">
                                        <span class="experience__period">{job.period}</span>
                                        <h3 class="experience__role">{job.role}</h3>
                                        <p class="experience__company">{job.company}</p>
                                        <p class="experience__summary">{job.summary}</p>
                                        <TagList tags=job.tags/>
                                    </div>
                                </Reveal>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ol>
        </section>
    }
}
