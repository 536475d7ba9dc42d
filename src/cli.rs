// cli.rs - Command-line interface configuration
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "wirescape")]
#[command(about = "Real-time wireframe renderer", long_about = None)]
pub struct Cli {
    /// Number of cells along each side of the floor grid
    #[arg(long = "grid-size", default_value_t = 20)]
    pub grid_size: usize,
}
