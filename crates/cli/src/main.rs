use chaff_dns_application::services::ResponseShaper;
use chaff_dns_application::use_cases::HandleQueryUseCase;
use chaff_dns_domain::CliOverrides;
use chaff_dns_infrastructure::audit::CsvAuditSink;
use chaff_dns_infrastructure::dns::DnsServerHandler;
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

mod bootstrap;
mod server;

#[derive(Parser)]
#[command(name = "chaff-dns")]
#[command(version)]
#[command(about = "Chaff DNS - size-stable synthetic DNS responder with query audit trail")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Audit file path
    #[arg(long)]
    audit_path: Option<String>,

    /// Synthetic records per response
    #[arg(long)]
    record_count: Option<u32>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind.clone(),
        audit_path: cli.audit_path.clone(),
        record_count: cli.record_count,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Chaff DNS v{}", env!("CARGO_PKG_VERSION"));
    info!(
        record_count = config.shaper.record_count,
        audit_path = %config.audit.path,
        "Response shaping active"
    );

    let audit_sink = Arc::new(CsvAuditSink::new(&config.audit));
    let shaper = ResponseShaper::new(&config.shaper);
    let use_case = Arc::new(HandleQueryUseCase::new(audit_sink, shaper));
    let handler = DnsServerHandler::new(use_case, config.shaper.ttl);

    let dns_addr = format!("{}:{}", config.server.bind_address, config.server.dns_port);
    let tcp_timeout = Duration::from_secs(config.server.tcp_timeout_secs);

    server::start_dns_server(dns_addr, handler, tcp_timeout).await?;

    info!("Server shutdown complete");
    Ok(())
}
