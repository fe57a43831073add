//! Tests for the integer codec

use crate::codec::errors::CodecError;
use crate::codec::integer::{
    decode_latitude, decode_longitude, decode_sortable, encode_latitude, encode_longitude, encode_sortable, pack,
    sortable_bits, unpack,
};
use crate::coordinate::{Axis, CoordinateSystem, Point};

use super::test_utils::{
    assert_close, random_point, random_subnormal, random_wide_cartesian_point, seeded_rng, SAMPLES,
};

#[test]
fn test_encoding_with_cross_axis_tolerance() {
    let mut rng = seeded_rng(0x5eed);

    for system in CoordinateSystem::ALL {
        for i in 0..SAMPLES {
            let original = random_point(system, &mut rng);
            let point = unpack(pack(&original, system).unwrap(), system);

            // Tolerance on each axis is keyed to the magnitude of the other
            assert_close(&format!("{}: Y[{}]", system, i), point.y(), original.y(),
                         system.integer_error_bound(original.x()));
            assert_close(&format!("{}: X[{}]", system, i), point.x(), original.x(),
                         system.integer_error_bound(original.y()));
        }
    }
}

#[test]
fn test_cartesian_relative_error_over_wide_magnitudes() {
    let system = CoordinateSystem::Cartesian;
    let mut rng = seeded_rng(42);

    for i in 0..100 {
        let original = random_wide_cartesian_point(&mut rng);
        let point = unpack(pack(&original, system).unwrap(), system);

        assert_close(&format!("X[{}]", i), point.x(), original.x(), system.integer_error_bound(original.x()));
        assert_close(&format!("Y[{}]", i), point.y(), original.y(), system.integer_error_bound(original.y()));
    }
}

#[test]
fn test_geographic_scenario() {
    let system = CoordinateSystem::Geographic;
    let original = Point::new(12.34567, -56.78901);

    let packed = pack(&original, system).unwrap();
    let point = unpack(packed, system);

    assert_close("lon", point.lon(), 12.34567, 1e-5);
    assert_close("lat", point.lat(), -56.78901, 1e-5);
}

#[test]
fn test_cartesian_scenario() {
    let system = CoordinateSystem::Cartesian;
    let original = Point::new(1000000.123, -0.0004567);

    let point = unpack(pack(&original, system).unwrap(), system);

    assert_close("x", point.x(), 1000000.123, 1000000.123 / 1e5);
    assert_close("y", point.y(), -0.0004567, 0.0004567 / 1e5);
}

#[test]
fn test_geographic_out_of_range() {
    let result = pack(&Point::new(200.0, 10.0), CoordinateSystem::Geographic);
    match result {
        Err(CodecError::OutOfRange { system, axis, value }) => {
            assert_eq!(system, CoordinateSystem::Geographic);
            assert_eq!(axis, Axis::X);
            assert_eq!(value, 200.0);
        },
        other => panic!("expected OutOfRange, got {:?}", other),
    }

    let result = pack(&Point::new(10.0, -90.5), CoordinateSystem::Geographic);
    assert!(matches!(result, Err(CodecError::OutOfRange { axis: Axis::Y, .. })));
}

#[test]
fn test_non_finite_coordinates_rejected() {
    for system in CoordinateSystem::ALL {
        assert!(matches!(
            pack(&Point::new(f64::NAN, 0.0), system),
            Err(CodecError::OutOfRange { axis: Axis::X, .. })
        ));
        assert!(matches!(
            pack(&Point::new(0.0, f64::INFINITY), system),
            Err(CodecError::OutOfRange { axis: Axis::Y, .. })
        ));
    }
}

#[test]
fn test_geographic_domain_corners() {
    let system = CoordinateSystem::Geographic;
    for &(lon, lat) in &[(-180.0, -90.0), (180.0, 90.0), (-180.0, 90.0), (180.0, -90.0), (0.0, 0.0)] {
        let point = unpack(pack(&Point::new(lon, lat), system).unwrap(), system);
        assert_close("lon", point.lon(), lon, 1e-5);
        assert_close("lat", point.lat(), lat, 1e-5);
        assert!(system.contains(Axis::X, point.lon()));
        assert!(system.contains(Axis::Y, point.lat()));
    }
}

#[test]
fn test_geographic_lane_layout() {
    let system = CoordinateSystem::Geographic;
    assert_eq!(pack(&Point::new(0.0, 0.0), system).unwrap(), 0);

    let packed = pack(&Point::new(-73.5, 45.25), system).unwrap();
    assert_eq!((packed >> 32) as i32, encode_latitude(45.25));
    assert_eq!(packed as i32, encode_longitude(-73.5));
}

#[test]
fn test_lanes_do_not_interfere() {
    for system in CoordinateSystem::ALL {
        let a = unpack(pack(&Point::new(-12.5, 3.0), system).unwrap(), system);
        let b = unpack(pack(&Point::new(-12.5, -77.0), system).unwrap(), system);
        assert_eq!(a.x(), b.x(), "{}: x changed with y", system);

        let c = unpack(pack(&Point::new(101.0, 3.0), system).unwrap(), system);
        assert_eq!(a.y(), c.y(), "{}: y changed with x", system);
    }
}

#[test]
fn test_geographic_quantization_is_floor() {
    for &lat in &[-89.999_999, -45.123_456_7, 0.000_000_1, 33.3, 89.999_999] {
        let decoded = decode_latitude(encode_latitude(lat));
        assert!(decoded <= lat + 1e-12);
        assert!(lat - decoded < 180.0 / 4294967296.0 + 1e-12);
    }
    for &lon in &[-179.999_999, -0.5, 0.25, 179.999_999] {
        let decoded = decode_longitude(encode_longitude(lon));
        assert!(decoded <= lon + 1e-12);
        assert!(lon - decoded < 360.0 / 4294967296.0 + 1e-12);
    }
}

#[test]
fn test_maximum_values_saturate() {
    assert_eq!(encode_latitude(90.0), i32::MAX);
    assert_eq!(encode_longitude(180.0), i32::MAX);
    assert_eq!(encode_latitude(-90.0), i32::MIN);
    assert_eq!(encode_longitude(-180.0), i32::MIN);
}

#[test]
fn test_short_significands_are_exact() {
    let system = CoordinateSystem::Cartesian;
    for &(x, y) in &[(1.0, 2.0), (-0.5, 1024.0), (0.0, -3.25), (3.0e6, -65536.0)] {
        let point = unpack(pack(&Point::new(x, y), system).unwrap(), system);
        assert_eq!(point, Point::new(x, y));
    }
}

#[test]
fn test_cartesian_extreme_magnitudes() {
    let system = CoordinateSystem::Cartesian;
    let original = Point::new(f64::MAX, f64::MIN);
    let point = unpack(pack(&original, system).unwrap(), system);

    assert!(point.x().is_finite());
    assert!(point.y().is_finite());
    assert_close("x", point.x(), original.x(), system.integer_error_bound(original.x()));
    assert_close("y", point.y(), original.y(), system.integer_error_bound(original.y()));

    let tiny = Point::new(f64::MIN_POSITIVE, -f64::MIN_POSITIVE);
    let point = unpack(pack(&tiny, system).unwrap(), system);
    assert_close("x", point.x(), tiny.x(), system.integer_error_bound(tiny.x()));
    assert_close("y", point.y(), tiny.y(), system.integer_error_bound(tiny.y()));
}

#[test]
fn test_cartesian_relative_error_for_subnormals() {
    let system = CoordinateSystem::Cartesian;
    let fixed = [
        1e-310,
        -7.5e-312,
        3e-315,
        f64::MIN_POSITIVE * 2f64.powi(-40),
        f64::MIN_POSITIVE - f64::from_bits(1),
        f64::from_bits(0x000F_FFFF_FFFF_FFFF),
        f64::from_bits(0x0000_0000_0012_3457),
        5e-324,
        -5e-324,
        0.0,
        -0.0,
    ];

    let mut rng = seeded_rng(0x5b);
    let random: Vec<f64> = (0..200).map(|_| random_subnormal(&mut rng)).collect();

    for &value in fixed.iter().chain(random.iter()) {
        let point = unpack(pack(&Point::new(value, 1.0), system).unwrap(), system);
        assert_close(&format!("x={:e}", value), point.x(), value, system.integer_error_bound(value));
        assert_eq!(point.x().is_sign_negative(), value.is_sign_negative(), "sign of {:e}", value);
        assert_eq!(point.y(), 1.0);
    }
}

#[test]
fn test_subnormals_sort_below_normals() {
    let values = [5e-324, 1e-320, 3e-315, 1e-310, f64::MIN_POSITIVE, 1e-300];
    let encoded: Vec<i32> = values.iter().map(|v| encode_sortable(*v)).collect();
    for pair in encoded.windows(2) {
        assert!(pair[0] < pair[1], "{} >= {}", pair[0], pair[1]);
    }
    assert!(encode_sortable(-5e-324) < encode_sortable(-0.0));
    assert!(encode_sortable(0.0) < encode_sortable(5e-324));
}

#[test]
fn test_sortable_encoding_preserves_order() {
    let values = [
        f64::MIN, -1e300, -123456.789, -1.0, -1e-300, -0.0, 0.0, 1e-300, 0.5, 1.0, 2.0, 123456.789, 1e300, f64::MAX,
    ];
    let encoded: Vec<i32> = values.iter().map(|v| encode_sortable(*v)).collect();

    for pair in encoded.windows(2) {
        assert!(pair[0] <= pair[1], "{} > {}", pair[0], pair[1]);
    }
    assert!(encode_sortable(-1.0) < encode_sortable(1.0));
}

#[test]
fn test_sortable_bits_is_an_involution() {
    for &bits in &[0, 1, -1, i32::MIN, i32::MAX, 0x3FF0_0000, -0x4000_0000] {
        assert_eq!(sortable_bits(sortable_bits(bits)), bits);
    }
    assert_eq!(decode_sortable(encode_sortable(-2.5)), -2.5);
    assert_eq!(decode_sortable(i32::MAX), f64::INFINITY);
    assert_eq!(decode_sortable(i32::MIN), f64::NEG_INFINITY);
}

#[test]
fn test_unpack_accepts_any_value() {
    for &value in &[0i64, -1, 1, i64::MIN, i64::MAX, 0x7FF0_0000_7FF8_0000] {
        let geo = unpack(value, CoordinateSystem::Geographic);
        assert!(CoordinateSystem::Geographic.contains(Axis::X, geo.lon()));
        assert!(CoordinateSystem::Geographic.contains(Axis::Y, geo.lat()));

        // Oversized exponents decode to infinity, never NaN
        let xy = unpack(value, CoordinateSystem::Cartesian);
        assert!(!xy.x().is_nan() && !xy.y().is_nan(), "{:#x} decoded to {}", value, xy);
    }
}

#[test]
fn test_encoding_is_deterministic() {
    let mut rng = seeded_rng(7);
    for system in CoordinateSystem::ALL {
        let point = random_point(system, &mut rng);
        let first = pack(&point, system).unwrap();
        let second = pack(&point, system).unwrap();
        assert_eq!(first, second);
        assert_eq!(unpack(first, system), unpack(second, system));
    }
}
