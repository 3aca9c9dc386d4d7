use awsdocs_server::{AwsDocsServer, Args};
use clap::Parser;

#[tokio::main]
async fn main() {
    // stdout carries the MCP protocol, so logs go to stderr
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    if let Err(e) = run(Args::parse()).await {
        log::error!("Server error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let config = args.into_provider_config()?;
    let server = AwsDocsServer::new(config)?;
    log::info!("AWS Documentation MCP server running on stdio");
    server.serve_stdio().await
}
