//! Closing call-to-action with email and social links.

use leptos::prelude::*;

use crate::components::magnetic_button::MagneticButton;
use crate::components::reveal::Reveal;
use crate::content::PROFILE;
use crate::state::ui::Section;

#[component]
pub fn Contact() -> impl IntoView {
    let mailto = format!("mailto:{}", PROFILE.email);

    view! {
        <section class="section contact" id=Section::Contact.anchor()>
            <Reveal>
                <h2 class="section__title">"Let's work together"</h2>
                <p class="contact__lede">
                    "Have a project in mind or just want to say hi? My inbox is always open."
                </p>
                <a class="contact__email" href=mailto>{PROFILE.email}</a>
                <div class="contact__socials">
                    {PROFILE
                        .socials
                        .iter()
                        .map(|link| {
                            let external = link.href.starts_with("https://");
                            view! { <MagneticButton href=link.href external=external>{link.label}</MagneticButton> }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </Reveal>
        </section>
    }
}
