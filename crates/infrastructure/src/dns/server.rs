use crate::dns::message_text::render_message;
use crate::dns::records::answer_records;
use chaff_dns_application::use_cases::HandleQueryUseCase;
use chaff_dns_domain::{DomainError, QueryContext};
use hickory_proto::op::ResponseCode;
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Hickory-facing adapter: one `handle_request` per inbound query, invoked
/// concurrently by the server. All real work happens in the use case; this
/// layer only extracts the query context and assembles the reply.
#[derive(Clone)]
pub struct DnsServerHandler {
    use_case: Arc<HandleQueryUseCase>,
    ttl: u32,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleQueryUseCase>, ttl: u32) -> Self {
        Self { use_case, ttl }
    }
}

#[async_trait::async_trait]
impl RequestHandler for DnsServerHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        let request_info = match request.request_info() {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to parse request info");
                return send_error_response(request, &mut response_handle, ResponseCode::FormErr)
                    .await;
            }
        };

        let query = &request_info.query;
        let name = query.name().to_utf8();
        let remote = request_info.src.ip().to_string();
        let transport = format!("{:?}", request_info.protocol).to_lowercase();
        let raw_message = render_message(
            request.header(),
            &name,
            query.query_type(),
            query.query_class(),
        );

        info!(
            name = %name,
            query_type = %query.query_type(),
            client = %remote,
            transport = %transport,
            "DNS query received"
        );

        let ctx = QueryContext::new(name, remote, transport, raw_message);

        let answers = match self.use_case.execute(&ctx).await {
            Ok(answers) => answers,
            Err(e @ DomainError::AuditUnavailable(_)) => {
                error!(name = %ctx.name, error = %e, "Audit append failed");
                return send_error_response(request, &mut response_handle, ResponseCode::ServFail)
                    .await;
            }
            Err(e) => {
                error!(name = %ctx.name, error = %e, "Answer synthesis failed");
                return send_error_response(request, &mut response_handle, ResponseCode::ServFail)
                    .await;
            }
        };

        let records = match answer_records(&answers, self.ttl) {
            Ok(records) => records,
            Err(e) => {
                error!(name = %ctx.name, error = %e, "Record construction failed");
                return send_error_response(request, &mut response_handle, ResponseCode::ServFail)
                    .await;
            }
        };

        debug!(name = %ctx.name, answers = records.len(), "Sending padded response");

        let builder = MessageResponseBuilder::from_message_request(request);
        let mut header = *request.header();
        header.set_authoritative(true);
        header.set_response_code(ResponseCode::NoError);
        let response = builder.build(header, records.iter(), &[], &[], &[]);

        match response_handle.send_response(response).await {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to send response");
                ResponseInfo::from(*request.header())
            }
        }
    }
}

/// Error replies always carry an empty answer section: a reply is either
/// the full padded set or nothing.
async fn send_error_response<R: ResponseHandler>(
    request: &Request,
    response_handle: &mut R,
    code: ResponseCode,
) -> ResponseInfo {
    debug!(code = ?code, "Sending error response");
    let builder = MessageResponseBuilder::from_message_request(request);
    let mut header = *request.header();
    header.set_response_code(code);
    let response = builder.build(header, &[], &[], &[], &[]);

    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, "Failed to send error response");
            ResponseInfo::from(*request.header())
        }
    }
}
