use clap::Parser;

use fundscope::cli::{self, Cli};
use fundscope::logging::init_tracing;

#[tokio::main]
async fn main() {
    let args = Cli::parse();

    let config = match args.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };

    init_tracing(&config.logging.filter);

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = cli::run(args.command, &config, &mut stdout).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
