//! Property tests for redirect delegation.

use std::sync::Arc;

use proptest::prelude::*;

use navmenu::{Locale, LocalizedText, MenuError, MenuItem, MenuObject, MenuTree, StaticPage};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A redirect reports the target and texts of its page item,
    /// including targets set on the page after the redirect was created, and
    /// refuses to change its target.
    #[test]
    fn property_redirect_delegates_to_page(
        target in proptest::option::of("_[a-z]{1,8}"),
        fallback in "[A-Za-z ]{1,16}",
        german in "[A-Za-z ]{1,16}",
        new_target in proptest::option::of("_[a-z]{1,8}"),
        later_targets in proptest::collection::vec(proptest::option::of("_[a-z]{1,8}"), 0..4),
    ) {
        let name = LocalizedText::new(fallback).with_text("de", german);
        let mut tree = MenuTree::new();
        tree.create_root_item("home", Arc::new(StaticPage::new("home", name)))
            .unwrap()
            .set_target(target.clone())
            .unwrap();

        let redirect = tree.create_redirect("start", "home").unwrap();
        let result = redirect.set_target(new_target);
        prop_assert!(
            matches!(result, Err(MenuError::UnsupportedOperation { .. })),
            "expected UnsupportedOperation, got {:?}",
            result
        );
        prop_assert_eq!(redirect.target(), target);

        for later in later_targets {
            tree.menu_object_of_id_mut("home")
                .and_then(MenuObject::as_item_mut)
                .unwrap()
                .set_target(later.clone())
                .unwrap();
            let redirect = tree.menu_object_of_id("start").and_then(MenuObject::as_redirect).unwrap();
            let page = tree.menu_object_of_id("home").and_then(MenuObject::as_page).unwrap();
            prop_assert_eq!(redirect.target(), page.target());
            prop_assert_eq!(redirect.target(), later);
        }

        let redirect = tree.menu_object_of_id("start").and_then(MenuObject::as_redirect).unwrap();
        let page = tree.menu_object_of_id("home").and_then(MenuObject::as_page).unwrap();
        for locale in ["en", "de", "de-AT", "fr"] {
            let locale = Locale::new(locale);
            prop_assert_eq!(redirect.display_text(&locale), page.display_text(&locale));
        }
    }
}
