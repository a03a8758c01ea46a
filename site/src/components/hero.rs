//! Landing section with name, role, call-to-action, and experience card.

use leptos::prelude::*;

use crate::components::magnetic_button::MagneticButton;
use crate::content::{JOBS, PROFILE, PROJECTS};
use crate::util::experience::{experience_label, years_of_experience};

#[component]
pub fn Hero() -> impl IntoView {
    let years = years_of_experience();

    view! {
        <header class="hero" id="top">
            <div class="hero__intro">
                <p class="hero__eyebrow">{PROFILE.location}</p>
                <h1 class="hero__name">{PROFILE.name}</h1>
                <h2 class="hero__role">{PROFILE.role}</h2>
                <p class="hero__tagline">{PROFILE.tagline}</p>
                <div class="hero__actions">
                    <MagneticButton href="#projects" primary=true>"View projects"</MagneticButton>
                    <MagneticButton href="#contact">"Get in touch"</MagneticButton>
                </div>
            </div>
            <aside class="hero__card">
                <img class="hero__portrait" src=PROFILE.image alt=PROFILE.name/>
                <dl class="hero__stats">
                    <div class="hero__stat">
                        <dt>"Experience"</dt>
                        <dd>{experience_label(years)}</dd>
                    </div>
                    <div class="hero__stat">
                        <dt>"Companies"</dt>
                        <dd>{JOBS.len()}</dd>
                    </div>
                    <div class="hero__stat">
                        <dt>"Projects"</dt>
                        <dd>{PROJECTS.len()}</dd>
                    </div>
                </dl>
            </aside>
        </header>
    }
}
