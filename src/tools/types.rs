//! Tool capability trait
//!
//! Single-operation interface: a tool turns a text payload into a text
//! result. Tools never fail outward; implementations degrade to a
//! local fallback string instead of surfacing transport errors.

use async_trait::async_trait;

/// Named capability mapping a text payload to a text result
#[async_trait]
pub trait Tool: Send + Sync {
    /// Registry key for this tool
    fn name(&self) -> &str;

    /// Short human-readable description
    fn description(&self) -> &str;

    /// Execute the tool against a payload
    async fn run(&self, payload: &str) -> String;
}
