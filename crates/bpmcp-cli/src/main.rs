use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod call_cmd;
mod client;
mod list_cmd;

#[derive(Parser)]
#[command(name = "bpmcp", about = "bpmcp CLI - drive Unreal Engine Blueprint tools through a bpmcp server")]
struct Cli {
    /// bpmcp server URL
    #[arg(long, env = "BPMCP_URL", default_value = "http://localhost:9000")]
    server_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all Blueprint tools the server exposes
    ListTools,

    /// Call a tool and print the editor's raw response
    Call {
        /// Tool name (e.g. create_blueprint)
        tool: String,

        /// Tool arguments as a JSON object
        #[arg(long)]
        args: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = client::McpClient::new(&cli.server_url);

    match cli.command {
        Commands::ListTools => list_cmd::run(&client).await?,
        Commands::Call { tool, args } => call_cmd::run(&client, &tool, args.as_deref()).await?,
    }

    Ok(())
}
