use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = hookrelay::cli::Cli::parse();
    if let Err(e) = hookrelay::cmd::dispatch(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
