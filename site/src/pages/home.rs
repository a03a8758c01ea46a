//! The single portfolio page.

use leptos::prelude::*;

use crate::components::{
    about::About, contact::Contact, experience::Experience, footer::Footer, hero::Hero, nav::Nav,
    projects::Projects, writing::Writing,
};

/// Every section in reading order.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <Nav/>
            <main class="home-page__main">
                <Hero/>
                <About/>
                <Experience/>
                <Projects/>
                <Writing/>
                <Contact/>
            </main>
            <Footer/>
        </div>
    }
}
