//! Command-line argument parsing
//!
//! Flags mirror the backend's environment variables; the API key is
//! read strictly from `OPENAI_API_KEY` and never accepted as a flag.

use clap::Parser;

/// Adaptive Assistant - self-adjusting dialogue agent
#[derive(Parser, Debug)]
#[command(name = "adaptive-assistant")]
#[command(version)]
#[command(about = "Self-adjusting dialogue agent with a gated improvement loop", long_about = None)]
pub struct Args {
    /// Generation backend base URL
    #[arg(long, env = "OPENAI_BASE_URL", default_value = "https://api.openai.com")]
    pub base_url: String,

    /// Model identifier for the generation backend
    #[arg(long, env = "OPENAI_MODEL", default_value = "gpt-4o-mini")]
    pub model: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["adaptive-assistant"]);
        assert_eq!(args.base_url, "https://api.openai.com");
        assert_eq!(args.model, "gpt-4o-mini");
    }

    #[test]
    fn test_flag_overrides() {
        let args = Args::parse_from([
            "adaptive-assistant",
            "--base-url",
            "http://127.0.0.1:8080",
            "--model",
            "local-model",
        ]);
        assert_eq!(args.base_url, "http://127.0.0.1:8080");
        assert_eq!(args.model, "local-model");
    }
}
