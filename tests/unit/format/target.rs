use super::*;

#[test]
fn invalid_is_default_and_empty() {
    assert_eq!(TargetFormat::default(), TargetFormat::Invalid);
    assert!(!TargetFormat::Invalid.is_valid());
    assert_eq!(TargetFormat::Invalid.channel_count(), 0);
    assert_eq!(TargetFormat::Invalid.data_size(16, 16), Some(0));
}

#[test]
fn uncompressed_sizes() {
    assert_eq!(TargetFormat::UNorm8Vec4.bytes_per_block(), 4);
    assert_eq!(TargetFormat::UNorm8Vec4Srgb.bytes_per_block(), 4);
    assert_eq!(TargetFormat::Float16Vec3.bytes_per_block(), 6);
    assert_eq!(TargetFormat::Int32Vec4.bytes_per_block(), 16);
    assert_eq!(TargetFormat::Float32Vec4.data_size(2, 3), Some(96));
}

#[test]
fn compressed_sizes_round_up_to_whole_blocks() {
    assert!(TargetFormat::Bc6UFloatVec3.is_compressed());
    assert_eq!(TargetFormat::Bc6UFloatVec3.channel_count(), 3);
    assert_eq!(TargetFormat::Bc1UNorm8Vec4.data_size(1, 1), Some(8));
    assert_eq!(TargetFormat::Bc3UNorm8Vec4.data_size(7, 9), Some(2 * 3 * 16));
}

#[test]
fn srgb_flags() {
    assert!(TargetFormat::UNorm8Vec4Srgb.is_srgb());
    assert!(TargetFormat::Bc7UNorm8Vec4Srgb.is_srgb());
    assert!(!TargetFormat::UNorm8Vec4.is_srgb());
}
