use emoji_parser::core::decoder::{decode_asset_path, decode_identifier_detailed};
use emoji_parser::core::token::Resolution;
use emoji_parser::{decode_identifier, DecodeError};

fn scalars(token: &str) -> Vec<u32> {
    decode_identifier(token)
        .unwrap_or_else(|e| panic!("{token}: {e}"))
        .scalars()
        .collect()
}

#[test]
fn single_segment_tokens_decode_to_one_scalar() {
    for (token, want) in [("x_1f600", 0x1F600), ("apple_2764", 0x2764), ("x_23", 0x23), ("x_a9", 0xA9)] {
        assert_eq!(scalars(token), vec![want], "{token}");
    }
}

#[test]
fn flag_sequence_keeps_order() {
    assert_eq!(scalars("x_1f1fa-1f1f8"), vec![0x1F1FA, 0x1F1F8]);
    assert_eq!(scalars("x_1f1f8-1f1fa"), vec![0x1F1F8, 0x1F1FA]);
}

#[test]
fn redundant_skin_tone_suffix_is_dropped() {
    assert_eq!(scalars("x_1f91a-1f3fb_1f3fb"), vec![0x1F91A, 0x1F3FB]);
}

#[test]
fn redundant_suffix_is_checked_against_the_segment_before_it() {
    let d = decode_identifier_detailed("x_1f600_1f91a-1f3fb_1f3fb").unwrap();
    assert_eq!(d.sequence.scalars().collect::<Vec<_>>(), vec![0x1F91A, 0x1F3FB]);
    assert_eq!(d.resolution, Resolution::RedundantSuffixDropped);
    assert_eq!(d.segment, "1f91a-1f3fb");
}

#[test]
fn non_redundant_suffix_wins_over_middle_segments() {
    let d = decode_identifier_detailed("x_1f468-1f3fb_200d_1f4bb").unwrap();
    assert_eq!(d.sequence.scalars().collect::<Vec<_>>(), vec![0x1F4BB]);
    assert_eq!(d.resolution, Resolution::TrailingSegmentKept);
}

#[test]
fn tie_break_depends_on_content_not_position() {
    // same shape, only the trailing segment's content differs
    let dup = decode_identifier_detailed("x_1f44b-1f3fd_1f3fd").unwrap();
    let new = decode_identifier_detailed("x_1f44b-1f3fd_1f3fe").unwrap();
    assert_eq!(dup.resolution, Resolution::RedundantSuffixDropped);
    assert_eq!(new.resolution, Resolution::TrailingSegmentKept);
    assert_eq!(dup.sequence.len(), 2);
    assert_eq!(new.sequence.scalars().collect::<Vec<_>>(), vec![0x1F3FE]);
}

#[test]
fn decoding_is_idempotent() {
    let token = "apple_1f469-200d-2764-fe0f-200d-1f468";
    let first = decode_identifier(token).unwrap();
    for _ in 0..10 {
        assert_eq!(decode_identifier(token).unwrap(), first);
    }
}

#[test]
fn output_length_matches_authoritative_parts() {
    for (token, parts) in [
        ("x_1f600", 1),
        ("x_1f1fa-1f1f8", 2),
        ("x_1f91a-1f3fb_1f3fb", 2),
        ("x_1f468-200d-1f469-200d-1f467-200d-1f466", 7),
    ] {
        assert_eq!(decode_identifier(token).unwrap().len(), parts, "{token}");
    }
}

#[test]
fn hex_identifier_round_trips_meaning() {
    for token in [
        "x_1f600",
        "x_1f91a-1f3fb_1f3fb",
        "apple_0023-fe0f-20e3",
        "raised-back-of-hand_medium-light-skin-tone_1f91a-1f3fc_1f3fc",
    ] {
        let seq = decode_identifier(token).unwrap();
        let again = decode_identifier(&format!("x_{}", seq.to_hex_identifier())).unwrap();
        assert_eq!(again, seq, "{token}");
    }
}

#[test]
fn surrogates_and_out_of_range_fail_as_invalid_scalar() {
    for token in ["x_d800", "x_dbff", "x_1f600-dc00", "x_110000"] {
        assert!(
            matches!(decode_identifier(token), Err(DecodeError::InvalidScalar { .. })),
            "{token}"
        );
    }
}

#[test]
fn non_hex_fails_as_invalid_hex() {
    let err = decode_identifier("x_zz").unwrap_err();
    assert_eq!(err, DecodeError::InvalidHex { token: "x_zz".into(), part: "zz".into() });
    assert!(matches!(decode_identifier("x_1f6zz"), Err(DecodeError::InvalidHex { .. })));
}

#[test]
fn asset_paths_are_reduced_to_tokens() {
    let seq = decode_asset_path("https://cdn.example.org/thumbs/72/apple/Flag-For-United-States_1F1FA-1F1F8.png").unwrap();
    assert_eq!(seq.to_string(), "\u{1F1FA}\u{1F1F8}");
}

#[test]
fn decoding_from_many_threads_agrees() {
    let tokens = [
        "x_1f600",
        "x_1f91a-1f3fb_1f3fb",
        "x_1f468-1f3fb_200d_1f4bb",
        "x_1f1fa-1f1f8",
    ];
    let expected: Vec<_> = tokens.iter().map(|t| decode_identifier(t).unwrap()).collect();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| tokens.iter().map(|t| decode_identifier(t).unwrap()).collect::<Vec<_>>()))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    });
}
