use super::*;

#[test]
fn all_is_in_enumerant_order_and_round_trips_through_index() {
    for (i, f) in SourceFormat::ALL.iter().enumerate() {
        assert_eq!(*f as u32, i as u32 + 1);
        assert_eq!(SourceFormat::from_index(*f as u32), Some(*f));
    }
    assert_eq!(SourceFormat::COUNT as usize, SourceFormat::ALL.len() + 1);
}

#[test]
fn from_index_never_produces_the_sentinel() {
    assert_eq!(SourceFormat::from_index(0), Some(SourceFormat::Invalid));
    assert_eq!(SourceFormat::from_index(SourceFormat::COUNT), None);
    assert_eq!(SourceFormat::from_index(u32::MAX), None);
}

#[test]
fn layout_queries() {
    assert_eq!(SourceFormat::UNorm8Vec3.channel_count(), 3);
    assert_eq!(SourceFormat::UNorm8Vec3.sample_type(), SampleType::UNorm8);
    assert!(!SourceFormat::UNorm8Vec3.is_srgb());
    assert!(SourceFormat::UNorm8Vec3Srgb.is_srgb());
    assert!(SourceFormat::Bc7UNorm8Vec4Srgb.is_srgb());
    assert_eq!(SourceFormat::Double64Vec2.sample_type(), SampleType::Float64);
    assert_eq!(SourceFormat::Invalid.channel_count(), 0);
    assert!(SourceFormat::Bc1UNorm8Vec4.is_compressed());
    assert!(!SourceFormat::Float32Vec4.is_compressed());
}

#[test]
fn bytes_per_block_and_data_size() {
    assert_eq!(SourceFormat::UNorm8Vec3.bytes_per_block(), 3);
    assert_eq!(SourceFormat::Float16Vec4.bytes_per_block(), 8);
    assert_eq!(SourceFormat::Double64Vec4.bytes_per_block(), 32);
    assert_eq!(SourceFormat::Int32Vec3.bytes_per_block(), 12);
    assert_eq!(SourceFormat::Invalid.bytes_per_block(), 0);

    assert_eq!(SourceFormat::UNorm8Vec4.data_size(3, 2), Some(24));
    assert_eq!(SourceFormat::Bc1UNorm8Vec4.block_size(), (4, 4));
    assert_eq!(SourceFormat::Bc1UNorm8Vec4.data_size(4, 4), Some(8));
    assert_eq!(SourceFormat::Bc1UNorm8Vec4.data_size(5, 4), Some(16));
    assert_eq!(SourceFormat::Bc7UNorm8Vec4.data_size(1, 1), Some(16));
    assert_eq!(SourceFormat::Bc3UNorm8Vec4.data_size(8, 8), Some(64));
}

#[test]
#[should_panic(expected = "SourceFormat::Count")]
fn sentinel_metadata_panics() {
    let _ = SourceFormat::Count.channel_count();
}

#[test]
fn serde_uses_variant_names() {
    let json = serde_json::to_string(&SourceFormat::UNorm8Vec4Srgb).unwrap();
    assert_eq!(json, "\"UNorm8Vec4Srgb\"");
    let back: SourceFormat = serde_json::from_str(&json).unwrap();
    assert_eq!(back, SourceFormat::UNorm8Vec4Srgb);
    assert!(serde_json::from_str::<SourceFormat>("\"Count\"").is_err());
}

#[test]
fn data_size_reports_overflow() {
    assert_eq!(SourceFormat::Float32Vec4.data_size(u32::MAX, u32::MAX), None);
    assert_eq!(SourceFormat::UNorm8Vec4.data_size(1 << 31, 1 << 31), None);
    assert_eq!(SourceFormat::UNorm8.data_size(u32::MAX, 1), Some(u32::MAX as usize));
}
