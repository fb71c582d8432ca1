use hickory_proto::op::{Header, OpCode, ResponseCode};
use hickory_proto::rr::{DNSClass, RecordType};
use std::fmt::Write;

/// Render the inbound message in the classic dig layout.
///
/// The audit trail stores a textual image of each query, and downstream
/// tooling expects the `;;` section markers, `;`-prefixed question lines
/// and tab separation that the original text form carried. Only the header
/// and question section exist on an inbound query, so that is all the
/// rendering covers.
pub fn render_message(header: &Header, name: &str, qtype: RecordType, qclass: DNSClass) -> String {
    let mut out = String::with_capacity(160);

    let _ = writeln!(
        out,
        ";; ->>HEADER<<- opcode: {}, status: {}, id: {}",
        opcode_str(header.op_code()),
        status_str(header.response_code()),
        header.id()
    );
    let _ = writeln!(
        out,
        ";; flags: {}; QUERY: {}, ANSWER: {}, AUTHORITY: {}, ADDITIONAL: {}",
        flags_str(header),
        header.query_count(),
        header.answer_count(),
        header.name_server_count(),
        header.additional_count()
    );
    out.push_str(";; QUESTION SECTION:\n");
    let _ = write!(out, ";{name}\t{qclass}\t{qtype}");

    out
}

fn opcode_str(op_code: OpCode) -> &'static str {
    match op_code {
        OpCode::Query => "QUERY",
        OpCode::Status => "STATUS",
        OpCode::Notify => "NOTIFY",
        OpCode::Update => "UPDATE",
        _ => "RESERVED",
    }
}

fn status_str(code: ResponseCode) -> &'static str {
    match code {
        ResponseCode::NoError => "NOERROR",
        ResponseCode::FormErr => "FORMERR",
        ResponseCode::ServFail => "SERVFAIL",
        ResponseCode::NXDomain => "NXDOMAIN",
        ResponseCode::NotImp => "NOTIMP",
        ResponseCode::Refused => "REFUSED",
        _ => "RESERVED",
    }
}

fn flags_str(header: &Header) -> String {
    let mut flags: Vec<&str> = Vec::with_capacity(4);
    if header.recursion_desired() {
        flags.push("rd");
    }
    if header.recursion_available() {
        flags.push("ra");
    }
    if header.authoritative() {
        flags.push("aa");
    }
    if header.checking_disabled() {
        flags.push("cd");
    }
    flags.join(" ")
}
