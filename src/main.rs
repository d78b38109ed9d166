use clap::Parser;
use liftoff_mediation::utils::logger;
use liftoff_mediation::{liftoff_banner_size_for, AdSize};

#[derive(Debug, Parser)]
#[command(name = "liftoff-mediation")]
#[command(about = "Resolves a requested banner size to its Liftoff Monetize equivalent")]
struct Cli {
    #[arg(long)]
    width: i32,

    #[arg(long)]
    height: i32,

    #[arg(long, default_value = "diagnostic")]
    placement_id: String,

    #[arg(long, help = "Enable verbose output")]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.verbose);
    if cli.verbose {
        tracing::debug!("CLI args: {:?}", cli);
    }

    let requested = AdSize::new(cli.width, cli.height);
    let resolved = liftoff_banner_size_for(requested, &cli.placement_id);

    tracing::info!("Resolved {} to {}", requested, resolved);
    println!("{}", resolved);
}
