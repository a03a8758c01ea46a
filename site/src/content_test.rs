use super::*;

fn is_outbound(href: &str) -> bool {
    href.starts_with("https://") || href.starts_with("mailto:")
}

#[test]
fn profile_is_filled_in() {
    assert!(!PROFILE.name.is_empty());
    assert!(!PROFILE.bio.is_empty());
    assert!(PROFILE.image.starts_with("/assets/"));
    assert!(PROFILE.email.contains('@'));
}

#[test]
fn every_outbound_link_is_absolute() {
    let hrefs = PROFILE
        .socials
        .iter()
        .map(|l| l.href)
        .chain(PROJECTS.iter().map(|p| p.href))
        .chain(ARTICLES.iter().map(|a| a.href));
    for href in hrefs {
        assert!(is_outbound(href), "not an outbound link: {href}");
    }
}

#[test]
fn sections_have_content() {
    assert!(!JOBS.is_empty());
    assert!(!PROJECTS.is_empty());
    assert!(!ARTICLES.is_empty());
    assert!(!SKILLS.is_empty());
}

#[test]
fn jobs_and_projects_are_tagged() {
    assert!(JOBS.iter().all(|j| !j.tags.is_empty()));
    assert!(PROJECTS.iter().all(|p| !p.tags.is_empty()));
}
