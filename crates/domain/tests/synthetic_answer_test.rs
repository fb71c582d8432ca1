use chaff_dns_domain::synthetic_address;
use std::net::Ipv6Addr;

const PREFIX: &str = "2003:ec:970e:f439:c5fd:30b8:2365:";

#[test]
fn test_address_embeds_index_in_final_segment() {
    let addr = synthetic_address(PREFIX, 0).unwrap();
    assert_eq!(addr.segments()[7], 0x0);

    let addr = synthetic_address(PREFIX, 10).unwrap();
    assert_eq!(addr.segments()[7], 0xa);

    let addr = synthetic_address(PREFIX, 144).unwrap();
    assert_eq!(addr.segments()[7], 0x90);
}

#[test]
fn test_address_prefix_segments_are_preserved() {
    let addr = synthetic_address(PREFIX, 1).unwrap();
    let expected: Ipv6Addr = "2003:ec:970e:f439:c5fd:30b8:2365:1".parse().unwrap();
    assert_eq!(addr, expected);
}

#[test]
fn test_full_prefix_leaves_no_room_for_index() {
    // Eight segments already present; appending the index overflows.
    let err = synthetic_address("2003:ec:970e:f439:c5fd:30b8:2365:1:", 0);
    assert!(err.is_err());
}

#[test]
fn test_garbage_prefix_is_rejected() {
    assert!(synthetic_address("not-an-address:", 0).is_err());
}
