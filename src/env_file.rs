//! Template text handling for `.env.local`.
//!
//! The template is opaque text: a single first-match substitution swaps the
//! operator's key into the `GOOGLE_API_KEY=` assignment, every other line
//! passes through verbatim. No structured key/value parsing happens here.

use anyhow::{Context, Result};
use regex::{NoExpand, Regex};
use std::fs;
use std::path::Path;

use crate::paths;

/// Built-in template used when the project ships no `.env.example`.
pub const DEFAULT_TEMPLATE: &str = r#"# =====================================================
# VIDEO ANALYZER - ENVIRONMENT VARIABLES
# =====================================================

# =====================================================
# REQUIRED - For Video Analysis
# =====================================================

# Google Gemini API key (REQUIRED)
# Get your free API key: https://aistudio.google.com/app/apikey
GOOGLE_API_KEY=your_gemini_api_key_here

# =====================================================
# OPTIONAL - Application Limits
# =====================================================

# Rate limiting (requests per minute)
RATE_LIMIT_PER_MINUTE=10

# Video upload limits
MAX_VIDEO_SIZE_MB=100
MAX_VIDEOS_PER_BATCH=50

# =====================================================
# OPTIONAL - Additional AI Services
# =====================================================
# These are for additional features (chat, transcription, etc.)
# Not required for basic video analysis

# OpenAI API (for chat/transcription features)
# OPENAI_API_KEY=your_openai_api_key_here

# Anthropic API (for chat features)
# ANTHROPIC_API_KEY=your_anthropic_api_key_here

# Deepgram API (for voice transcription)
# DEEPGRAM_API_KEY=your_deepgram_api_key_here

# Replicate API (for image generation)
# REPLICATE_API_TOKEN=your_replicate_api_key_here

# =====================================================
# OPTIONAL - Firebase (for user authentication)
# =====================================================
# NEXT_PUBLIC_FIREBASE_API_KEY=your_firebase_api_key_here
# NEXT_PUBLIC_FIREBASE_AUTH_DOMAIN=your_project_id.firebaseapp.com
# NEXT_PUBLIC_FIREBASE_PROJECT_ID=your_project_id
# NEXT_PUBLIC_FIREBASE_STORAGE_BUCKET=your_project_id.appspot.com
# NEXT_PUBLIC_FIREBASE_MESSAGING_SENDER_ID=123456789012
# NEXT_PUBLIC_FIREBASE_APP_ID=1:123456789012:web:abcdef123456
"#;

/// Load the template text for the given project root.
///
/// A `.env.example` on disk wins; a read failure degrades to an empty
/// template rather than failing the run. Without the file, the built-in
/// template is used.
pub fn load_template(root: &Path) -> String {
    let example = paths::env_example(root);
    if example.exists() {
        fs::read_to_string(&example).unwrap_or_default()
    } else {
        DEFAULT_TEMPLATE.to_string()
    }
}

/// Substitute `api_key` into the first `GOOGLE_API_KEY=` assignment.
///
/// Templates that carry no such assignment collapse to a minimal file:
/// the key plus the two default limits.
pub fn render(template: &str, api_key: &str) -> String {
    // First match only; later assignments pass through untouched.
    let assignment = Regex::new(r"GOOGLE_API_KEY=.*\n?").unwrap();

    if assignment.is_match(template) {
        let replacement = format!("GOOGLE_API_KEY={}\n", api_key);
        assignment
            .replace(template, NoExpand(&replacement))
            .into_owned()
    } else {
        format!(
            "GOOGLE_API_KEY={}\nRATE_LIMIT_PER_MINUTE=10\nMAX_VIDEO_SIZE_MB=100\n",
            api_key
        )
    }
}

/// Write the rendered text to `.env.local`, fully replacing prior content.
pub fn write_env_local(root: &Path, contents: &str) -> Result<()> {
    let env_local = paths::env_local(root);
    fs::write(&env_local, contents)
        .with_context(|| format!("Failed to write {}", env_local.display()))?;

    Ok(())
}
