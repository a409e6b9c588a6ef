use super::*;
use crate::app::{LANDING_PATH, indexed_paths};

fn all_hrefs() -> Vec<String> {
    let mut hrefs: Vec<String> = header_links().into_iter().map(|(_, href)| href).collect();
    hrefs.extend(FOOTER_LINKS.iter().map(|&(_, href)| href.to_owned()));
    hrefs
}

#[test]
fn landing_page_is_not_linked_from_header_or_footer() {
    assert!(all_hrefs().iter().all(|href| !href.contains(LANDING_PATH)));
}

#[test]
fn header_links_every_other_indexed_page() {
    let header: Vec<String> = header_links().into_iter().map(|(_, href)| href).collect();
    for path in indexed_paths().into_iter().filter(|p| p != LANDING_PATH) {
        assert!(header.contains(&path), "header is missing {path}");
    }
}

#[test]
fn footer_links_rooms_and_contact() {
    let hrefs = all_hrefs();
    assert!(hrefs.iter().any(|h| h == "/rooms"));
    assert!(hrefs.iter().any(|h| h == "/contact"));
}
