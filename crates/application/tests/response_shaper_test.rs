use chaff_dns_application::services::ResponseShaper;
use chaff_dns_domain::{DomainError, ShaperConfig};

fn shaper(record_count: u32) -> ResponseShaper {
    ResponseShaper::new(&ShaperConfig {
        record_count,
        ..ShaperConfig::default()
    })
}

#[test]
fn test_synthesize_produces_exactly_n_records() {
    let answers = shaper(145).synthesize("example.org.").unwrap();

    assert_eq!(answers.len(), 145);
    for (i, answer) in answers.iter().enumerate() {
        assert_eq!(answer.index, i as u32);
        assert_eq!(&*answer.name, "example.org.");
    }
}

#[test]
fn test_synthesize_is_deterministic() {
    let shaper = shaper(145);

    let first = shaper.synthesize("example.org.").unwrap();
    let second = shaper.synthesize("example.org.").unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_cardinality_ignores_name_content() {
    let shaper = shaper(72);

    let short = shaper.synthesize("a.b.").unwrap();
    let long = shaper
        .synthesize("some.rather.deeply.nested.subdomain.example.org.")
        .unwrap();

    assert_eq!(short.len(), 72);
    assert_eq!(long.len(), 72);
}

#[test]
fn test_reference_example_three_records() {
    // example.org. with three records gets addresses ending :0, :1, :2.
    let answers = shaper(3).synthesize("example.org.").unwrap();

    let segments: Vec<u16> = answers.iter().map(|a| a.address.segments()[7]).collect();
    assert_eq!(segments, vec![0, 1, 2]);
    for answer in &answers {
        assert_eq!(answer.address.segments()[0], 0x2003);
        assert_eq!(answer.address.segments()[6], 0x2365);
        assert_eq!(&*answer.name, "example.org.");
    }
}

#[test]
fn test_hex_index_past_nine() {
    let answers = shaper(17).synthesize("example.org.").unwrap();
    assert_eq!(answers[10].address.segments()[7], 0xa);
    assert_eq!(answers[16].address.segments()[7], 0x10);
}

#[test]
fn test_root_name_is_valid_owner() {
    let answers = shaper(3).synthesize(".").unwrap();
    assert_eq!(answers.len(), 3);
}

#[test]
fn test_name_with_space_fails_whole_set() {
    let result = shaper(145).synthesize("bad name.example.org.");
    assert!(matches!(result, Err(DomainError::InvalidQueryName(_))));
}

#[test]
fn test_name_with_control_character_fails() {
    let result = shaper(145).synthesize("bad\u{7}.example.org.");
    assert!(matches!(result, Err(DomainError::InvalidQueryName(_))));
}

#[test]
fn test_empty_name_fails() {
    assert!(shaper(145).synthesize("").is_err());
}

#[test]
fn test_empty_label_fails() {
    assert!(shaper(145).synthesize("double..dot.example.org.").is_err());
}

#[test]
fn test_oversized_label_fails() {
    let name = format!("{}.example.org.", "x".repeat(64));
    assert!(shaper(145).synthesize(&name).is_err());
}

#[test]
fn test_oversized_name_fails() {
    let name = format!("{}.", "abcdefg.".repeat(40));
    assert!(name.len() > 255);
    assert!(shaper(145).synthesize(&name).is_err());
}

#[test]
fn test_unusable_prefix_surfaces_record_construction_error() {
    let shaper = ResponseShaper::new(&ShaperConfig {
        record_count: 3,
        address_prefix: "2003:ec:970e:f439:c5fd:30b8:2365:1:".to_string(),
        ..ShaperConfig::default()
    });

    let result = shaper.synthesize("example.org.");
    assert!(matches!(result, Err(DomainError::RecordConstruction(_))));
}
