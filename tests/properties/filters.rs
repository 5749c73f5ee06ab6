//! Property tests for display filter composition.

use proptest::prelude::*;

use navmenu::{DisplayFilter, Locale, MenuSeparator};

fn constant(value: bool, text: &str) -> DisplayFilter {
    let filter = DisplayFilter::from_fn(move |_| value);
    if text.is_empty() {
        filter
    } else {
        filter.with_display_text(text)
    }
}

fn text() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "[a-z]{1,8}"]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: AND/OR behave like boolean conjunction/disjunction.
    #[test]
    fn property_composition_is_boolean(a in any::<bool>(), b in any::<bool>(), c in any::<bool>()) {
        let object = MenuSeparator::new("sep");
        let (fa, fb, fc) = (constant(a, ""), constant(b, ""), constant(c, ""));

        prop_assert_eq!(fa.and(&fb).matches(&object), a && b);
        prop_assert_eq!(fa.or(&fb).matches(&object), a || b);
        prop_assert_eq!(
            fa.and(&fb).and(&fc).matches(&object),
            fa.and(&fb.and(&fc)).matches(&object)
        );
        prop_assert_eq!(
            fa.or(&fb).or(&fc).matches(&object),
            fa.or(&fb.or(&fc)).matches(&object)
        );
    }

    /// PROPERTY: AND text joins non-empty texts with " + ", OR takes the first.
    #[test]
    fn property_composed_texts(ta in text(), tb in text()) {
        let locale = Locale::default();
        let fa = constant(true, &ta);
        let fb = constant(true, &tb);

        let parts: Vec<&str> = [ta.as_str(), tb.as_str()]
            .into_iter()
            .filter(|t| !t.is_empty())
            .collect();
        let and_text = (!parts.is_empty()).then(|| parts.join(" + "));
        let or_text = parts.first().map(|t| t.to_string());

        prop_assert_eq!(fa.and(&fb).display_text(&locale), and_text);
        prop_assert_eq!(fa.or(&fb).display_text(&locale), or_text);
    }
}
