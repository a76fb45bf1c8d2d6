use clap::Parser;
use person_gateway::{
    clients::ApiGatewayControlPlane,
    config::Config,
    definition::{person_api_document, publish, PublishMode},
    logging::init_tracing,
};
use tracing::{error, info};

/// Generate the OpenAPI definition of the person API and publish it to API Gateway
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Merge into the existing API of the same name instead of creating a new one
    #[arg(long, default_value_t = false)]
    update: bool,

    /// Backend the gateway proxies to; overrides BACKEND_BASE_URL
    #[arg(long)]
    backend_base_url: Option<String>,

    /// Print the definition without contacting the control plane
    #[arg(long, default_value_t = false)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = Config::load()?;
    let backend_base_url = args
        .backend_base_url
        .unwrap_or_else(|| config.backend_base_url.clone());

    let document = person_api_document(&config.api_metadata(), &backend_base_url)?;
    info!("API definition:\n{}", document.to_pretty_json()?);

    if args.dry_run {
        return Ok(());
    }

    let control_plane = ApiGatewayControlPlane::from_env(config.aws_region.clone()).await;
    let mode = PublishMode::from_update_flag(args.update);

    match publish(&control_plane, &document, mode).await {
        Ok(api_id) => {
            info!("Published {} as {}", document.api_name(), api_id);
            Ok(())
        }
        Err(e) => {
            error!("Publishing {} failed: {}", document.api_name(), e);
            Err(e.into())
        }
    }
}
