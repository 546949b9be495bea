use clap::Parser;

use puissance4::init_logging;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
enum Commands {
    /// Play a two-player game in the terminal.
    Play,
    /// Serve the web variant over HTTP.
    Serve {
        #[arg(long, default_value = "0.0.0.0:8080")]
        bind: String,
        #[arg(long, default_value = "static")]
        static_dir: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play => puissance4::cli::run()?,
        Commands::Serve { bind, static_dir } => {
            puissance4::web::serve(&bind, static_dir).await?;
        }
    }
    Ok(())
}
