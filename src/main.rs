use anyhow::Result;
use clap::Parser;
use mandala_generator::app::App;
use mandala_generator::session::Session;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "mandala-generator")]
#[command(about = "Turn an inspiration word into black and white mandala art")]
struct CliArgs {
    /// Directory where saved mandalas are written.
    #[arg(long, value_name = "DIR", default_value = ".")]
    output_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mandala_generator=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = CliArgs::parse();
    info!("Starting mandala-generator");

    let app = App::new(args.output_dir);
    let mut session = Session::new();

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();

    match app.run(&mut session, &mut input, &mut output).await {
        Ok(()) => {
            info!("Session ended");
            Ok(())
        }
        Err(e) => {
            error!("Session failed: {}", e);
            std::process::exit(1);
        }
    }
}
