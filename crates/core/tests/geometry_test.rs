//! Tests for rectangle overlap and the plane index.

use natgrid_core::geometry::{Bounds, Plane, do_overlap, overlaps};

fn sample_rects() -> Vec<Bounds> {
    let mut rects = Vec::new();
    for &(x0, x1) in &[(0.0, 10.0), (5.0, 15.0), (10.0, 20.0), (-3.0, 0.0), (2.0, 2.0)] {
        for &(y0, y1) in &[(0.0, 10.0), (9.0, 11.0), (10.0, 30.0), (4.0, 4.0)] {
            rects.push(Bounds::new(x0, x1, y0, y1));
        }
    }
    rects
}

#[test]
fn test_overlaps_is_symmetric() {
    let rects = sample_rects();
    for a in &rects {
        for b in &rects {
            assert_eq!(overlaps(a, b), overlaps(b, a), "{a:?} {b:?}");
        }
    }
}

#[test]
fn test_degenerate_never_overlaps() {
    let rects = sample_rects();
    for a in rects.iter().filter(|r| r.is_degenerate()) {
        for b in &rects {
            assert!(!overlaps(a, b), "{a:?} {b:?}");
        }
    }
}

#[test]
fn test_overlaps_self_when_not_degenerate() {
    for r in sample_rects().iter().filter(|r| !r.is_degenerate()) {
        assert!(overlaps(r, r));
    }
}

#[test]
fn test_corner_variant_agrees_with_bounds() {
    let rects = sample_rects();
    for a in &rects {
        for b in &rects {
            let corners = do_overlap(
                (a.xmin, a.ymax),
                (a.xmax, a.ymin),
                (b.xmin, b.ymax),
                (b.xmax, b.ymin),
            );
            assert_eq!(corners, overlaps(a, b), "{a:?} {b:?}");
        }
    }
}

#[test]
fn test_corner_variant_degenerate() {
    assert!(!do_overlap((1.0, 1.0), (1.0, 1.0), (1.0, 1.0), (1.0, 1.0)));
    assert!(!do_overlap((0.0, 5.0), (0.0, 0.0), (-1.0, 6.0), (1.0, -1.0)));
}

#[test]
fn test_plane_find_matches_brute_force() {
    let rects = sample_rects();
    let plane = Plane::new(rects.clone());
    for region in &rects {
        let expected: Vec<usize> = rects
            .iter()
            .enumerate()
            .filter(|(_, r)| overlaps(r, region))
            .map(|(i, _)| i)
            .collect();
        let found: Vec<usize> = plane
            .find_with_indices(region)
            .into_iter()
            .map(|(i, _)| i)
            .collect();
        assert_eq!(found, expected, "{region:?}");
    }
}
