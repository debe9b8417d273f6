//! The interactive setup flow.
//!
//! Strictly linear: existence check, optional overwrite confirmation, one
//! API-key prompt, template substitution, whole-file write, next steps.

use anyhow::{bail, Result};
use colored::*;
use std::path::{Path, PathBuf};

use crate::console::Console;
use crate::{env_file, paths};

/// How a run ended.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// `.env.local` was written at this path.
    Created(PathBuf),
    /// The operator declined the overwrite; the existing file is untouched.
    KeptExisting,
}

/// Run the setup flow against `root`, talking to the operator over `console`.
pub fn run(root: &Path, console: &mut dyn Console) -> Result<Outcome> {
    console.line("")?;
    console.line(&"Video Analyzer – setup".bright_cyan().to_string())?;
    console.line("This will create a .env.local file with your API key.")?;

    let env_local = paths::env_local(root);
    if env_local.exists() {
        console.line("")?;
        console.line("A .env.local already exists.")?;
        let answer = console.prompt("Overwrite it? (y/N): ")?;
        if !answer.trim().eq_ignore_ascii_case("y") {
            console.line("Keeping existing .env.local.")?;
            return Ok(Outcome::KeptExisting);
        }
    }

    let api_key = console
        .prompt("\nEnter your Google Gemini API key: ")?
        .trim()
        .to_string();
    if api_key.is_empty() {
        bail!("No API key provided. You can rerun setup later.");
    }

    let template = env_file::load_template(root);
    let output = env_file::render(&template, &api_key);
    env_file::write_env_local(root, &output)?;

    console.line(&format!("\nCreated {}", env_local.display()))?;

    console.line(&format!("\n{}", "✅ Setup complete! Next steps:".green()))?;
    console.line("  1) npm install       (install dependencies)")?;
    console.line("  2) npm run dev       (start the server)")?;
    console.line("  3) Open http://localhost:3000/video-analyzer")?;
    console.line("\n💡 Tip: Only the Gemini API key is required. Other services are optional.")?;
    console.line("📖 See README.md for troubleshooting and additional features.")?;

    Ok(Outcome::Created(env_local))
}
