//! Tool registry
//!
//! Maintains the name -> tool mapping owned by the assistant state.
//! Lookup is by exact string key; registration replaces any previous
//! tool under the same name.

use crate::tools::types::Tool;
use std::collections::HashMap;
use std::sync::Arc;

/// Registry of named tools
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool under its own name
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Look up a tool by exact name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// Whether a tool is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.tools.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::implementations::VerificationTool;

    #[test]
    fn test_register_and_lookup() {
        let mut registry = ToolRegistry::new();
        assert!(registry.is_empty());

        registry.register(Arc::new(VerificationTool::new()));
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("verification"));

        let tool = registry.get("verification").unwrap();
        assert_eq!(tool.name(), "verification");
    }

    #[test]
    fn test_lookup_is_exact_match() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(VerificationTool::new()));

        assert!(registry.get("Verification").is_none());
        assert!(registry.get("verif").is_none());
    }

    #[test]
    fn test_reregistration_does_not_duplicate() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(VerificationTool::new()));
        registry.register(Arc::new(VerificationTool::new()));
        assert_eq!(registry.len(), 1);
    }
}
