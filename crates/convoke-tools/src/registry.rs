//! Registry for tool implementations.

use crate::tool::{Tool, ToolSpec};
use convoke_protocol::ToolError;
use log::debug;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// In-memory registry mapping tool names to implementations.
///
/// Population normally happens once at startup, but late plugin-style
/// registration is supported: mutation takes the write lock, lookups take
/// the read lock, so concurrent registration and lookup never race.
#[derive(Default, Clone)]
pub struct ToolRegistry {
    /// Map of tool name to implementation.
    tools: Arc<RwLock<HashMap<String, Arc<dyn Tool>>>>,
}

impl ToolRegistry {
    /// Create an empty tool registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool by name.
    ///
    /// Fails with [`ToolError::DuplicateTool`] when the name is taken.
    pub fn register(&self, tool: Arc<dyn Tool>) -> Result<(), ToolError> {
        let mut tools = self.tools.write();
        if tools.contains_key(tool.name()) {
            return Err(ToolError::DuplicateTool(tool.name().to_string()));
        }
        debug!("registering tool (name={})", tool.name());
        tools.insert(tool.name().to_string(), tool);
        Ok(())
    }

    /// Fetch a tool by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.read().get(name).cloned()
    }

    /// List all registered tool names.
    pub fn list(&self) -> Vec<String> {
        self.tools.read().keys().cloned().collect()
    }

    /// Return all registered tool instances.
    pub fn all(&self) -> Vec<Arc<dyn Tool>> {
        self.tools.read().values().cloned().collect()
    }

    /// Return tool specs for all registered tools.
    pub fn specs(&self) -> Vec<ToolSpec> {
        self.tools.read().values().map(|tool| tool.spec()).collect()
    }
}
