use anyhow::Result;
use clap::Parser;

use setup::console::StdioConsole;
use setup::init;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Create a .env.local file with your Gemini API key", long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    Cli::parse();

    let root = std::env::current_dir()?;
    let mut console = StdioConsole;
    init::run(&root, &mut console)?;

    Ok(())
}
