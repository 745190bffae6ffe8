use leptos::prelude::Owner;

use super::*;

#[test]
fn pushed_notices_are_listed_in_order() {
    Owner::new().with(|| {
        let notices = Notices::new();
        notices.push("Signed out.", NoticeLevel::Info);
        notices.push("authentication failed, please sign in again", NoticeLevel::Error);

        let current = notices.current();
        assert_eq!(current.len(), 2);
        assert_eq!(current[0].message, "Signed out.");
        assert_eq!(current[0].level, NoticeLevel::Info);
        assert_eq!(current[1].level, NoticeLevel::Error);
        assert_ne!(current[0].id, current[1].id);
    });
}

#[test]
fn dismiss_removes_only_that_notice() {
    Owner::new().with(|| {
        let notices = Notices::new();
        let first = notices.add("one", NoticeLevel::Info);
        let second = notices.add("two", NoticeLevel::Info);

        notices.dismiss(first);
        let current = notices.current();
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].id, second);

        notices.dismiss(first);
        assert_eq!(notices.current().len(), 1);
    });
}

#[test]
fn level_picks_css_class() {
    assert_eq!(NoticeLevel::Info.class(), "toast toast-info");
    assert_eq!(NoticeLevel::Error.class(), "toast toast-error");
}
