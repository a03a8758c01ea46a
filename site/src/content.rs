//! Hand-authored page content.
//!
//! Everything here is `'static` data rendered as-is by the section
//! components. Editing the site means editing this file.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// Owner details used by the hero, about, and contact sections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SiteProfile {
    pub name: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub location: &'static str,
    pub bio: &'static [&'static str],
    pub image: &'static str,
    pub email: &'static str,
    pub socials: &'static [Link],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Job {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub summary: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Article {
    pub title: &'static str,
    pub topic: &'static str,
    pub href: &'static str,
}

pub static PROFILE: SiteProfile = SiteProfile {
    name: "Alex Rivera",
    role: "Software Engineer",
    tagline: "I build fast, reliable web products and the tooling behind them.",
    location: "Lisbon, Portugal",
    bio: &[
        "I'm a product-minded engineer who enjoys the whole stack, from database schemas to the last pixel of an interaction.",
        "Lately I've been focused on developer tooling, real-time collaboration, and making web apps feel instant.",
        "Outside of work I write about what I learn, contribute to open source, and spend too long tuning color palettes.",
    ],
    image: "/assets/profile.svg",
    email: "hello@alexrivera.dev",
    socials: &[
        Link { label: "GitHub", href: "https://github.com/alexrivera" },
        Link { label: "LinkedIn", href: "https://www.linkedin.com/in/alexrivera" },
        Link { label: "Email", href: "mailto:hello@alexrivera.dev" },
    ],
};

pub static SKILLS: &[&str] = &[
    "Rust",
    "TypeScript",
    "React",
    "Leptos",
    "PostgreSQL",
    "WebSockets",
    "Docker",
    "AWS",
    "CI/CD",
    "System Design",
];

pub static JOBS: &[Job] = &[
    Job {
        company: "Northwind Labs",
        role: "Senior Software Engineer",
        period: "2023–Present",
        summary: "Lead engineer on a real-time collaboration platform; owns the sync engine and the web client performance budget.",
        tags: &["Rust", "TypeScript", "WebSockets"],
    },
    Job {
        company: "Brightline",
        role: "Software Engineer",
        period: "2021–2023",
        summary: "Built the analytics dashboard and the internal component library used across four product teams.",
        tags: &["React", "PostgreSQL", "Design Systems"],
    },
    Job {
        company: "Parcel & Co",
        role: "Junior Developer",
        period: "2019–2021",
        summary: "Shipped logistics tooling for warehouse staff and migrated the deploy pipeline to containers.",
        tags: &["Python", "Docker", "CI/CD"],
    },
];

pub static PROJECTS: &[Project] = &[
    Project {
        name: "Tidepool",
        description: "A local-first notes app with conflict-free sync across devices.",
        tags: &["Rust", "CRDT", "WASM"],
        href: "https://github.com/alexrivera/tidepool",
    },
    Project {
        name: "Glint",
        description: "A tiny CLI that lints color contrast in design tokens against WCAG targets.",
        tags: &["Rust", "CLI", "Accessibility"],
        href: "https://github.com/alexrivera/glint",
    },
    Project {
        name: "Switchyard",
        description: "Feature-flag service with streaming updates and an audit trail.",
        tags: &["TypeScript", "PostgreSQL", "SSE"],
        href: "https://github.com/alexrivera/switchyard",
    },
];

pub static ARTICLES: &[Article] = &[
    Article {
        title: "Theming without a flash of the wrong colors",
        topic: "Frontend",
        href: "https://alexrivera.dev/writing/theming-without-flash",
    },
    Article {
        title: "What I learned rewriting a sync engine in Rust",
        topic: "Systems",
        href: "https://alexrivera.dev/writing/sync-engine-rust",
    },
    Article {
        title: "Small tools, big leverage",
        topic: "Tooling",
        href: "https://alexrivera.dev/writing/small-tools",
    },
];
