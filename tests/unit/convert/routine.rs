use super::*;

const EXPAND_U8: ConversionRoutine = ConversionRoutine::ExpandRgbToRgba {
    element: ElementKind::U8,
};

#[test]
fn byte_sizes_follow_element_and_channels() {
    let r = ConversionRoutine::ExpandRgbToRgba {
        element: ElementKind::F32,
    };
    assert_eq!(r.source_bytes(10), Some(120));
    assert_eq!(r.target_bytes(10), Some(160));

    let p = ConversionRoutine::PremultiplyAlpha {
        element: IntKind::U16,
        srgb: false,
    };
    assert_eq!(p.source_bytes(3), p.target_bytes(3));
    assert_eq!(p.element(), ElementKind::U16);
    assert_eq!(EXPAND_U8.target_bytes(usize::MAX), None);
}

#[test]
fn apply_in_place_expands_rgb8() {
    let mut buf = vec![1u8, 2, 3, 4, 5, 6, 0, 0];
    EXPAND_U8.apply_in_place(&mut buf, 2).unwrap();
    assert_eq!(buf, [1, 2, 3, 255, 4, 5, 6, 255]);
}

#[test]
fn apply_rejects_short_buffers() {
    let src = [0u8; 6];
    let mut dst = [0u8; 7];
    let err = EXPAND_U8.apply(&src, 2, &mut dst).unwrap_err();
    assert!(matches!(err, TexconvError::Buffer(_)));

    let mut buf = [0u8; 7];
    let err = EXPAND_U8.apply_in_place(&mut buf, 2).unwrap_err();
    assert!(err.to_string().contains("needs 8"));

    let err = EXPAND_U8.apply(&src[..5], 2, &mut [0u8; 8]).unwrap_err();
    assert!(err.to_string().contains("source"));
}

#[test]
fn unaligned_float_buffers_convert_like_aligned_ones() {
    let texels: [f32; 8] = [0.8, 0.4, 0.2, 0.5, 1.0, 1.0, 1.0, 0.25];
    let aligned: Vec<u8> = bytemuck::cast_slice(&texels).to_vec();
    let r = ConversionRoutine::PremultiplyAlphaFloat {
        element: FloatKind::F32,
    };

    let mut expected = aligned.clone();
    r.apply_in_place(&mut expected, 2).unwrap();

    // Shift the payload off a 4-byte boundary so it cannot be viewed as `f32`.
    let mut shifted = vec![0u8; aligned.len() + 4];
    let offset = if shifted.as_ptr() as usize % 4 == 0 { 1 } else { 0 };
    shifted[offset..offset + aligned.len()].copy_from_slice(&aligned);
    let window = &mut shifted[offset..offset + aligned.len()];
    r.apply_in_place(window, 2).unwrap();
    assert_eq!(window, expected.as_slice());

    let mut dst = vec![0u8; aligned.len() + 1];
    r.apply(&aligned, 2, &mut dst[1..]).unwrap();
    assert_eq!(&dst[1..], expected.as_slice());

    let out: Vec<f32> = bytemuck::allocation::pod_collect_to_vec(&expected);
    assert_eq!(out, [0.4, 0.2, 0.1, 0.5, 0.25, 0.25, 0.25, 0.25]);
}

#[test]
fn parallel_apply_matches_sequential() {
    let src: Vec<u8> = (0..4000u32).map(|i| (i * 131 % 251) as u8).collect();
    let n = src.len() / 4;
    let r = ConversionRoutine::PremultiplyAlpha {
        element: IntKind::U8,
        srgb: true,
    };

    let mut seq = vec![0u8; src.len()];
    r.apply(&src, n, &mut seq).unwrap();
    let mut par = vec![0u8; src.len()];
    r.apply_parallel(&src, n, &mut par, 64).unwrap();
    assert_eq!(par, seq);

    let mut in_place = src.clone();
    r.apply_in_place_parallel(&mut in_place, n, 10).unwrap();
    assert_eq!(in_place, seq);
}

#[test]
fn parallel_in_place_expansion_is_correct() {
    let n = 500;
    let rgb: Vec<u16> = (0..3 * n as u32).map(|i| i as u16).collect();
    let mut buf: Vec<u8> = bytemuck::cast_slice(&rgb).to_vec();
    buf.resize(n * 4 * 2, 0);
    let r = ConversionRoutine::ExpandRgbToRgba {
        element: ElementKind::U16,
    };
    r.apply_in_place_parallel(&mut buf, n, 7).unwrap();

    let out: Vec<u16> = bytemuck::allocation::pod_collect_to_vec(&buf);
    for i in 0..n {
        assert_eq!(&out[4 * i..4 * i + 3], &rgb[3 * i..3 * i + 3]);
        assert_eq!(out[4 * i + 3], u16::MAX);
    }
}

#[test]
fn signed_int_premultiply_through_bytes() {
    let texel: [i32; 4] = [1000, -1000, 0, i32::MAX / 2];
    let mut buf: Vec<u8> = bytemuck::cast_slice(&texel).to_vec();
    ConversionRoutine::PremultiplyAlpha {
        element: IntKind::I32,
        srgb: false,
    }
    .apply_in_place(&mut buf, 1)
    .unwrap();
    let out: Vec<i32> = bytemuck::allocation::pod_collect_to_vec(&buf);
    assert_eq!(out, [500, -499, 0, i32::MAX / 2]);
}

#[test]
fn routines_serialize_with_kind_tag() {
    let r = ConversionRoutine::PremultiplyAlpha {
        element: IntKind::U8,
        srgb: true,
    };
    let json = serde_json::to_value(r).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"kind": "premultiply_alpha", "element": "u8", "srgb": true})
    );
    let back: ConversionRoutine = serde_json::from_value(json).unwrap();
    assert_eq!(back, r);
}
