use approx::assert_abs_diff_eq;
use chartmotion_rs::core::Viewport;
use proptest::prelude::*;

prop_compose! {
    /// Normalized viewport: positive width and height, upward-y convention.
    fn normalized_viewport()(
        left in -1_000_000.0f64..1_000_000.0,
        bottom in -1_000_000.0f64..1_000_000.0,
        width in 0.001f64..1_000_000.0,
        height in 0.001f64..1_000_000.0
    ) -> Viewport {
        Viewport::new(left, bottom + height, left + width, bottom)
    }
}

proptest! {
    #[test]
    fn union_with_self_is_identity(viewport in normalized_viewport()) {
        let mut unioned = viewport;
        unioned.union(viewport);
        prop_assert_eq!(unioned, viewport);
    }

    #[test]
    fn intersect_with_self_is_identity(viewport in normalized_viewport()) {
        let mut intersected = viewport;
        prop_assert!(intersected.intersect(viewport));
        prop_assert_eq!(intersected, viewport);
    }

    #[test]
    fn union_with_degenerate_self_copies_other(viewport in normalized_viewport()) {
        let mut degenerate = Viewport::new(1.0, 0.0, -1.0, 2.0);
        degenerate.union(viewport);
        prop_assert_eq!(degenerate, viewport);
    }

    #[test]
    fn union_contains_both_operands(
        first in normalized_viewport(),
        second in normalized_viewport()
    ) {
        let mut unioned = first;
        unioned.union(second);
        prop_assert!(unioned.contains_rect(first));
        prop_assert!(unioned.contains_rect(second));
    }

    #[test]
    fn intersect_result_is_contained_in_both(
        first in normalized_viewport(),
        second in normalized_viewport()
    ) {
        let mut intersected = first;
        if intersected.intersect(second) {
            prop_assert!(first.contains_rect(intersected));
            prop_assert!(second.contains_rect(intersected));
        } else {
            // All-or-nothing: a miss leaves the left-hand side untouched.
            prop_assert_eq!(intersected, first);
        }
    }

    #[test]
    fn offset_preserves_dimensions(
        viewport in normalized_viewport(),
        dx in -1_000.0f64..1_000.0,
        dy in -1_000.0f64..1_000.0
    ) {
        let mut moved = viewport;
        moved.offset(dx, dy);
        assert_abs_diff_eq!(moved.width(), viewport.width(), epsilon = 1e-6);
        assert_abs_diff_eq!(moved.height(), viewport.height(), epsilon = 1e-6);
    }

    #[test]
    fn offset_to_lands_exactly(
        viewport in normalized_viewport(),
        new_left in -1_000.0f64..1_000.0,
        new_top in -1_000.0f64..1_000.0
    ) {
        let mut moved = viewport;
        moved.offset_to(new_left, new_top);
        prop_assert_eq!(moved.left, new_left);
        prop_assert_eq!(moved.top, new_top);
        assert_abs_diff_eq!(moved.width(), viewport.width(), epsilon = 1e-6);
        assert_abs_diff_eq!(moved.height(), viewport.height(), epsilon = 1e-6);
    }

    #[test]
    fn center_lies_inside_a_normalized_viewport(viewport in normalized_viewport()) {
        prop_assert!(viewport.contains(viewport.center_x(), viewport.center_y()));
    }

    #[test]
    fn byte_round_trip_is_lossless(viewport in normalized_viewport()) {
        let restored = Viewport::from_bytes(&viewport.to_bytes()).expect("decode");
        prop_assert_eq!(restored, viewport);
    }
}
