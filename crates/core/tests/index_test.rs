//! Tests for the square and sub-square spatial index.

use natgrid_core::geometry::{Bounds, overlaps};
use natgrid_core::gridref::{GridRef, SubSquare};
use natgrid_core::index::{SpatialIndex, get_sub_squares};
use natgrid_core::resolve;
use natgrid_core::squares;

#[test]
fn test_every_full_square_query() {
    let index = SpatialIndex::global();
    let all: Vec<u8> = (0..100).collect();
    for code in squares::codes() {
        let bounds = index.square_bounds(code).unwrap();
        let hits = index.query(&bounds);
        assert_eq!(hits.len(), 1, "{code}: {hits:?}");
        assert_eq!(hits[code.to_ascii_lowercase().as_str()], all, "{code}");
    }
}

#[test]
fn test_index_matches_resolver() {
    let index = SpatialIndex::global();
    for code in squares::codes() {
        for n in 0..100u8 {
            let gridref = GridRef::new(code).with_sub_square(SubSquare::from_number(n).unwrap());
            assert_eq!(gridref.to_string(), format!("{code}{n:02}"));
            let resolved = resolve::resolve(&gridref).unwrap().bounds;
            assert_eq!(index.sub_square_bounds(code, n), Some(resolved), "{gridref}");
        }
    }
}

#[test]
fn test_query_across_square_boundary() {
    // straddles SD (3, 4) and SE (4, 4) along x = 400000
    let region = Bounds::new(395_000.0, 405_000.0, 402_000.0, 408_000.0);
    let hits = get_sub_squares(&region);
    assert_eq!(hits.len(), 2);
    assert_eq!(hits["sd"], vec![90]);
    assert_eq!(hits["se"], vec![0]);
}

#[test]
fn test_query_on_shared_edge_only() {
    // zero-width strip along the SD/SE boundary touches but does not overlap
    let strip = Bounds::new(400_000.0, 400_000.0, 400_000.0, 500_000.0);
    assert!(get_sub_squares(&strip).is_empty());

    // region that ends exactly on a sub-square edge excludes the neighbour
    let region = Bounds::new(300_000.0, 310_000.0, 400_000.0, 410_000.0);
    let hits = get_sub_squares(&region);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits["sd"], vec![0]);
}

#[test]
fn test_query_whole_grid_hits_every_square() {
    let region = Bounds::new(0.0, 700_000.0, 0.0, 1_300_000.0);
    let hits = get_sub_squares(&region);
    assert_eq!(hits.len(), squares::codes().len());
    assert!(hits.values().all(|subs| subs.len() == 100));
    assert!(hits.keys().all(|k| k.chars().all(|c| c.is_ascii_lowercase())));
}

#[test]
fn test_sub_square_numbers_sorted_and_overlapping() {
    let index = SpatialIndex::new();
    let region = Bounds::new(512_345.0, 547_890.0, 123_456.0, 171_234.0);
    let hits = index.query(&region);
    for (code, subs) in &hits {
        assert!(subs.windows(2).all(|w| w[0] < w[1]), "{code}");
        let upper = code.to_ascii_uppercase();
        for &n in subs {
            let b = index.sub_square_bounds(&upper, n).unwrap();
            assert!(overlaps(&b, &region));
        }
        // a square in the result always has at least one sub-square
        assert!(!subs.is_empty());
    }
    assert_eq!(hits["tq"].len(), 4 * 6);
}

#[test]
fn test_index_size() {
    let index = SpatialIndex::new();
    assert_eq!(index.len(), squares::NATIONAL_GRID_SQUARES.len());
    assert!(!index.is_empty());
}
