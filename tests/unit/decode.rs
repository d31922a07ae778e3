use std::io::Cursor;

use super::*;
use crate::TargetFormat;

fn encode_png(image: DynamicImage) -> Vec<u8> {
    let mut buf = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn png_rgb8_decodes_to_srgb_rgb() {
    let img = image::RgbImage::from_raw(2, 1, vec![10, 20, 30, 40, 50, 60]).unwrap();
    let bytes = encode_png(DynamicImage::ImageRgb8(img));

    let tex = decode_texture(&bytes, true).unwrap();
    assert_eq!(tex.format, SourceFormat::UNorm8Vec3Srgb);
    assert_eq!((tex.width, tex.height), (2, 1));
    assert_eq!(tex.texel_count(), Some(2));
    assert_eq!(tex.data, [10, 20, 30, 40, 50, 60]);

    let upload = tex.into_upload(&UploadConfig::default()).unwrap();
    assert_eq!(upload.target, TargetFormat::UNorm8Vec4Srgb);
    assert_eq!(upload.data, [10, 20, 30, 255, 40, 50, 60, 255]);
}

#[test]
fn linear_flag_selects_plain_unorm() {
    let img = image::RgbaImage::from_raw(1, 1, vec![1, 2, 3, 4]).unwrap();
    let bytes = encode_png(DynamicImage::ImageRgba8(img));
    let tex = decode_texture(&bytes, false).unwrap();
    assert_eq!(tex.format, SourceFormat::UNorm8Vec4);
}

#[test]
fn float_rgb_expands_with_unit_alpha() {
    let img = image::Rgb32FImage::from_raw(1, 1, vec![0.25, 0.5, 2.0]).unwrap();
    let tex = from_dynamic_image(DynamicImage::ImageRgb32F(img), false).unwrap();
    assert_eq!(tex.format, SourceFormat::Float32Vec3);

    let mut config = UploadConfig::default();
    config.policy.avoid_three_component_formats = true;
    let upload = tex.into_upload(&config).unwrap();
    assert_eq!(upload.target, TargetFormat::Float32Vec4);
    let texel: Vec<f32> = bytemuck::allocation::pod_collect_to_vec(&upload.data);
    assert_eq!(texel, [0.25, 0.5, 2.0, 1.0]);
}

#[test]
fn sixteen_bit_maps_to_uint16() {
    assert_eq!(
        source_format_for(ColorType::Rgba16, true),
        Some(SourceFormat::UInt16Vec4)
    );
    assert_eq!(
        source_format_for(ColorType::L16, false),
        Some(SourceFormat::UInt16)
    );
}

#[test]
fn srgb_gray_has_no_upload_path() {
    let img = image::GrayImage::from_raw(1, 1, vec![7]).unwrap();
    let tex = from_dynamic_image(DynamicImage::ImageLuma8(img), true).unwrap();
    assert_eq!(tex.format, SourceFormat::UNorm8Srgb);
    let err = tex.into_upload(&UploadConfig::default()).unwrap_err();
    assert!(matches!(err, TexconvError::Unsupported(_)));
}

#[test]
fn garbage_bytes_fail_to_decode() {
    let err = decode_texture(b"not an image", false).unwrap_err();
    assert!(matches!(err, TexconvError::Other(_)));
}

#[test]
fn decoded_textures_share_an_uploader() {
    let uploader = Uploader::new(&UploadConfig::default()).unwrap();
    for value in [0u8, 128, 255] {
        let img = image::RgbImage::from_raw(1, 1, vec![value; 3]).unwrap();
        let tex = from_dynamic_image(DynamicImage::ImageRgb8(img), false).unwrap();
        let upload = tex.upload_with(&uploader).unwrap();
        assert_eq!(upload.target, TargetFormat::UNorm8Vec4);
        assert_eq!(upload.data, [value, value, value, 255]);
    }
}
