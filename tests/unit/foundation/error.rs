use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        TexconvError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        TexconvError::unsupported("x")
            .to_string()
            .contains("unsupported format:")
    );
    assert!(
        TexconvError::buffer("x")
            .to_string()
            .contains("buffer error:")
    );
    assert!(
        TexconvError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = TexconvError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
