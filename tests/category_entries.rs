use emoji_parser::core::listing::EmojiRecord;
use emoji_parser::config::ListingConfig;
use emoji_parser::{decode_category_entry, DecodeError};

#[test]
fn grinning_face() {
    let (seq, name) = decode_category_entry("😀 grinning face").unwrap();
    assert_eq!(seq.scalars().collect::<Vec<_>>(), vec![0x1F600]);
    assert_eq!(name, "grinning_face");
}

#[test]
fn supplementary_plane_glyph_is_one_scalar() {
    let (seq, _) = decode_category_entry("🦊 Fox").unwrap();
    assert_eq!(seq.len(), 1);
    assert_eq!(seq.encode_utf16().len(), 2);
}

#[test]
fn zwj_glyph_keeps_every_scalar() {
    let (seq, name) = decode_category_entry("👩‍🔬 Woman Scientist").unwrap();
    assert_eq!(seq.scalars().collect::<Vec<_>>(), vec![0x1F469, 0x200D, 0x1F52C]);
    assert_eq!(name, "woman_scientist");
}

#[test]
fn trailing_spaces_belong_to_the_name() {
    let (seq, name) = decode_category_entry("😀 ").unwrap();
    assert_eq!(seq.scalars().collect::<Vec<_>>(), vec![0x1F600]);
    assert_eq!(name, "");
    assert_eq!(decode_category_entry("😀 a b ").unwrap().1, "a_b_");
}

#[test]
fn empty_or_unseparated_input_fails() {
    assert_eq!(decode_category_entry(""), Err(DecodeError::EmptyInput { input: String::new() }));
    assert!(matches!(decode_category_entry("🦊"), Err(DecodeError::EmptyInput { .. })));
}

#[test]
fn renders_category_line() {
    let (glyph, name) = decode_category_entry("☕ Hot Beverage").unwrap();
    let line = EmojiRecord::new(glyph, name).category_line(&ListingConfig::default());
    assert_eq!(line, "☕,hot_beverage");
}
