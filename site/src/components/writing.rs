//! Links to published articles.

use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::ARTICLES;
use crate::state::ui::Section;

#[component]
pub fn Writing() -> impl IntoView {
    view! {
        <section class="section writing" id=Section::Writing.anchor()>
            <Reveal>
                <h2 class="section__title">"Writing"</h2>
                <ul class="writing__list">
                    {ARTICLES
                        .iter()
                        .map(|article| {
                            view! {
                                <li class="writing__item">
                                    <a href=article.href target="_blank" rel="noopener noreferrer">
                                        <span class="writing__topic">{article.topic}</span>
                                        <span class="writing__title">{article.title}</span>
                                        <span class="writing__arrow" aria-hidden="true">"\u{2197}"</span>
                                    </a>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </Reveal>
        </section>
    }
}
