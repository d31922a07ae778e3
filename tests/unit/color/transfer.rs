use super::*;

fn samples() -> impl Iterator<Item = f32> {
    (0..=1000).map(|i| i as f32 / 1000.0)
}

#[test]
fn round_trip_through_linear_is_identity() {
    for x in samples() {
        let back = linear_to_srgb(srgb_to_linear(x));
        assert!((back - x).abs() <= 1e-4, "x={x} back={back}");
    }
}

#[test]
fn round_trip_through_srgb_is_identity() {
    for x in samples() {
        let back = srgb_to_linear(linear_to_srgb(x));
        assert!((back - x).abs() <= 1e-4, "x={x} back={back}");
    }
}

#[test]
fn endpoints_are_fixed() {
    assert_eq!(srgb_to_linear(0.0), 0.0);
    assert_eq!(linear_to_srgb(0.0), 0.0);
    assert!((srgb_to_linear(1.0) - 1.0).abs() <= 1e-6);
    assert!((linear_to_srgb(1.0) - 1.0).abs() <= 1e-6);
}

#[test]
fn known_values_match_reference_curve() {
    // Mid-gray in sRGB is roughly 21.4% linear light.
    assert!((srgb_to_linear(0.5) - 0.214_041).abs() <= 1e-5);
    assert!((linear_to_srgb(0.214_041) - 0.5).abs() <= 1e-5);
    // Linear segment.
    assert!((srgb_to_linear(0.04) - 0.04 / 12.92).abs() <= 1e-7);
    assert!((linear_to_srgb(0.003) - 0.003 * 12.92).abs() <= 1e-7);
}

#[test]
fn curve_is_monotonic() {
    let mut prev_lin = -1.0f32;
    let mut prev_enc = -1.0f32;
    for x in samples() {
        let lin = srgb_to_linear(x);
        let enc = linear_to_srgb(x);
        assert!(lin >= prev_lin);
        assert!(enc >= prev_enc);
        prev_lin = lin;
        prev_enc = enc;
    }
}

#[test]
fn out_of_domain_inputs_stay_finite_and_clamped() {
    for x in [
        -1.0f32,
        -0.5,
        -1e-30,
        1.5,
        1e30,
        f32::MAX,
        f32::MIN,
        f32::INFINITY,
        f32::NEG_INFINITY,
        f32::NAN,
    ] {
        for v in [srgb_to_linear(x), linear_to_srgb(x)] {
            assert!(v.is_finite(), "x={x} produced {v}");
            assert!((0.0..=1.0).contains(&v), "x={x} produced {v}");
        }
    }
}
