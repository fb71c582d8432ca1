use chaff_dns_domain::escape_raw_message;
use chaff_dns_infrastructure::dns::message_text::render_message;
use hickory_proto::op::Header;
use hickory_proto::rr::{DNSClass, RecordType};

fn sample_header() -> Header {
    let mut header = Header::new();
    header.set_id(4242);
    header.set_recursion_desired(true);
    header.set_query_count(1);
    header
}

#[test]
fn test_render_carries_dig_section_markers() {
    let text = render_message(&sample_header(), "example.org.", RecordType::AAAA, DNSClass::IN);

    assert!(text.starts_with(";; ->>HEADER<<- opcode: QUERY, status: NOERROR, id: 4242\n"));
    assert!(text.contains(";; flags: rd; QUERY: 1, ANSWER: 0, AUTHORITY: 0, ADDITIONAL: 0\n"));
    assert!(text.contains(";; QUESTION SECTION:\n"));
    assert!(text.ends_with(";example.org.\tIN\tAAAA"));
}

#[test]
fn test_rendered_text_survives_escaping_pipeline() {
    let text = render_message(&sample_header(), "example.org.", RecordType::AAAA, DNSClass::IN);
    let escaped = escape_raw_message(&text);

    assert!(!escaped.contains('\n'));
    assert!(!escaped.contains('\t'));
    assert!(!escaped.contains(';'));
    // The question line's single `;` must surface as `%`.
    assert!(escaped.contains("%example.org.?IN?AAAA"));
}
