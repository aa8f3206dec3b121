//! Tests for normalizing boundary locations.

use natgrid_core::error::{GridError, TransformError};
use natgrid_core::location::{EastNorth, LonLat, Location, LocationKind, Normalizer};

#[test]
fn test_transform_receives_lon_lat_and_height() {
    let transform = |lon: f64, lat: f64, h: f64| -> Result<(f64, f64), TransformError> {
        Ok((lon * 1000.0 + h, lat * 1000.0))
    };
    let normalizer = Normalizer::new(transform).with_height(7.0);
    let out = normalizer
        .to_east_north(&Location::Ellipsoidal(LonLat { lon: 2.0, lat: 3.0 }))
        .unwrap();
    assert_eq!(
        out,
        EastNorth {
            east: 2007.0,
            north: 3000.0
        }
    );
}

#[test]
fn test_default_height_is_zero() {
    let transform =
        |_lon: f64, _lat: f64, h: f64| -> Result<(f64, f64), TransformError> { Ok((h, h)) };
    let normalizer = Normalizer::new(transform);
    assert_eq!(normalizer.height(), 0.0);
    let out = normalizer
        .to_east_north(&Location::Ellipsoidal(LonLat { lon: 0.0, lat: 0.0 }))
        .unwrap();
    assert_eq!(out, EastNorth { east: 0.0, north: 0.0 });
}

#[test]
fn test_transform_error_passes_through() {
    let transform = |_lon: f64, lat: f64, _h: f64| -> Result<(f64, f64), TransformError> {
        Err(format!("latitude {lat} out of range").into())
    };
    let err = Normalizer::new(transform)
        .to_east_north(&Location::Ellipsoidal(LonLat { lon: 0.0, lat: 95.0 }))
        .unwrap_err();
    match err {
        GridError::ExternalTransform(source) => {
            assert_eq!(source.to_string(), "latitude 95 out of range")
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_grid_ref_centre_not_origin() {
    let normalizer = Normalizer::default();
    let cases = [
        ("SD", 350_000.0, 450_000.0),
        ("SD00", 305_000.0, 405_000.0),
        ("SD00SW", 302_500.0, 402_500.0),
    ];
    for (text, east, north) in cases {
        let out = normalizer
            .to_east_north(&Location::GridRef(text.to_string()))
            .unwrap();
        assert_eq!(out, EastNorth { east, north }, "{text}");
    }
}

#[test]
fn test_grid_ref_errors_propagate() {
    let normalizer = Normalizer::default();
    assert!(matches!(
        normalizer.to_east_north(&Location::GridRef("SD00XX".into())),
        Err(GridError::InvalidQuadrant(_))
    ));
    assert!(matches!(
        normalizer.to_east_north(&Location::GridRef("QQ".into())),
        Err(GridError::UnknownSquare(_))
    ));
}

#[test]
fn test_location_kinds() {
    assert_eq!(
        Location::Ellipsoidal(LonLat { lon: 0.0, lat: 0.0 }).kind(),
        LocationKind::Wgs84
    );
    assert_eq!(
        Location::Projected(EastNorth { east: 0.0, north: 0.0 }).kind(),
        LocationKind::Osgb36
    );
    assert_eq!(Location::GridRef("SD".into()).kind(), LocationKind::NationalGrid);
    assert_eq!(LocationKind::NationalGrid.to_string(), "NATIONALGRID");
}
