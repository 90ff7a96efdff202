//! Property-based tests for the content gate

use jazz_chronicle::shared::gate::{
    render_view, truncate_preview, ContentGate, ContentItem, ContentView, ELLIPSIS,
};
use jazz_chronicle::shared::identity::{IdentityId, IdentityView, Role};
use proptest::prelude::*;

fn member() -> IdentityView {
    IdentityView {
        id: IdentityId::new("u1"),
        name: "Ann".to_string(),
        email: "ann@x.com".to_string(),
        role: Role::User,
        avatar: None,
        bio: None,
    }
}

proptest! {
    #[test]
    fn test_open_content_is_always_full(body in ".{0,800}", signed_in in any::<bool>()) {
        let viewer = member();
        let item = ContentItem { exclusive: false, body: Some(&body) };
        let view = render_view(&item, signed_in.then_some(&viewer));
        prop_assert_eq!(view, ContentView::Full { body: body.clone() });
    }

    #[test]
    fn test_members_always_get_full_body(body in ".{0,800}") {
        let viewer = member();
        let item = ContentItem { exclusive: true, body: Some(&body) };
        prop_assert_eq!(render_view(&item, Some(&viewer)), ContentView::Full { body: body.clone() });
    }

    #[test]
    fn test_preview_is_a_bounded_prefix(body in "\\PC{0,800}", limit in 1usize..600) {
        let item = ContentItem { exclusive: true, body: Some(&body) };
        let view = ContentGate::new(limit).render(&item, None);
        prop_assert!(view.is_preview());

        let preview = view.body();
        let chars = body.chars().count();
        if chars > limit {
            prop_assert!(preview.ends_with(ELLIPSIS));
            let kept = &preview[..preview.len() - ELLIPSIS.len()];
            prop_assert_eq!(kept.chars().count(), limit);
            prop_assert!(body.starts_with(kept));
        } else {
            prop_assert_eq!(preview, body.as_str());
        }
    }

    #[test]
    fn test_truncation_is_idempotent_below_limit(body in "\\PC{0,100}") {
        prop_assert_eq!(truncate_preview(&body, 100), body);
    }
}
