//! cubespin Terminal Demo - Rotating Cube Wireframe
//!
//! Renders the same frames the HTTP service returns, locally in the terminal.
//! Controls:
//!   - +/F: Faster
//!   - -/S: Slower
//!   - Q/ESC: Quit
use clap::Parser;
use cubespin_core::VertexService;
use cubespin_terminal::{Animation, TerminalApp, DEFAULT_TEMPO_MS};
use std::io;

#[derive(Parser)]
#[command(name = "cubespin-terminal")]
#[command(about = "Rotating cube wireframe in the terminal", long_about = None)]
struct Cli {
    /// Milliseconds between frames (minimum 10)
    #[arg(short, long, default_value_t = DEFAULT_TEMPO_MS)]
    tempo: u64,

    /// Angle of the first frame in degrees
    #[arg(short = 'a', long, default_value_t = 0, allow_negative_numbers = true)]
    start_angle: i64,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let service = VertexService::new("local");
    let animation = Animation::new(cli.start_angle, cli.tempo);

    let mut app = TerminalApp::new(service, animation)?;
    app.run()?;

    println!("Thank you for using cubespin!");
    Ok(())
}
