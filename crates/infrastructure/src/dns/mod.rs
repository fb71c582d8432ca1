pub mod message_text;
pub mod records;
pub mod server;

pub use server::DnsServerHandler;
