use std::collections::HashMap;
use std::fmt::Write as _;

use crate::tool::{AnyTool, Handler, Tool, ToolHandler};

/// A registered tool.
#[derive(Clone, Debug)]
pub struct ToolEntry {
    name: String,
    description: String,
    handler: Handler,
}

impl ToolEntry {
    /// Returns the name of the tool.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description of the tool.
    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the handler of the tool.
    #[inline]
    pub fn handler(&self) -> &Handler {
        &self.handler
    }
}

/// A directory of named tools.
///
/// Names are unique and matched exactly, case included. Entries are listed
/// in the order they were first registered; registering a name again
/// replaces the entry in place.
#[derive(Default, Debug)]
pub struct Registry {
    entries: Vec<ToolEntry>,
    index: HashMap<String, usize>,
}

impl Registry {
    /// Creates an empty registry.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler under `name`, replacing any previous one.
    pub fn register<N, D, H>(&mut self, name: N, description: D, handler: H)
    where
        N: Into<String>,
        D: Into<String>,
        H: ToolHandler,
    {
        let entry = ToolEntry {
            name: name.into(),
            description: description.into(),
            handler: Handler::new(handler),
        };

        if let Some(&idx) = self.index.get(&entry.name) {
            warn!("tool `{}` already exists and will be replaced", entry.name);
            self.entries[idx] = entry;
            return;
        }

        debug!("tool `{}` registered", entry.name);
        self.index.insert(entry.name.clone(), self.entries.len());
        self.entries.push(entry);
    }

    /// Registers a typed tool under its own name and description.
    pub fn add_tool<T: Tool>(&mut self, tool: T) {
        let name = tool.name().to_owned();
        let description = tool.description().to_owned();
        self.register(name, description, AnyTool(tool));
    }

    /// Looks up the handler registered under `name`.
    ///
    /// Returns `None` when there is no such tool.
    #[inline]
    pub fn get(&self, name: &str) -> Option<Handler> {
        self.entry(name).map(|entry| entry.handler.clone())
    }

    /// Looks up the whole entry registered under `name`.
    #[inline]
    pub fn entry(&self, name: &str) -> Option<&ToolEntry> {
        self.index.get(name).map(|&idx| &self.entries[idx])
    }

    /// Returns whether a tool is registered under `name`.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns the number of registered tools.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the registry is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in listing order.
    #[inline]
    pub fn entries(&self) -> impl Iterator<Item = &ToolEntry> {
        self.entries.iter()
    }

    /// Iterates over the tool names in listing order.
    #[inline]
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    /// Renders every tool as `- name: description`, one per line.
    pub fn list_descriptions(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            if !out.is_empty() {
                out.push('\n');
            }
            // Writing into a `String` never fails.
            let _ = write!(out, "- {}: {}", entry.name, entry.description);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use std::future::ready;

    use super::*;

    fn constant(text: &'static str) -> impl ToolHandler {
        move |_input: String| ready(text.to_owned())
    }

    #[test]
    fn test_register_and_list() {
        let mut registry = Registry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.list_descriptions(), "");

        registry.register("Search", "Searches the web.", constant("a"));
        registry.register("Calculator", "Evaluates math.", constant("b"));

        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.list_descriptions(),
            "- Search: Searches the web.\n- Calculator: Evaluates math."
        );
        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            vec!["Search", "Calculator"]
        );
    }

    #[tokio::test]
    async fn test_overwrite_in_place() {
        let mut registry = Registry::new();
        registry.register("Search", "Old.", constant("old"));
        registry.register("Calculator", "Evaluates math.", constant("calc"));
        registry.register("Search", "New.", constant("new"));

        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.list_descriptions(),
            "- Search: New.\n- Calculator: Evaluates math."
        );
        let handler = registry.get("Search").unwrap();
        assert_eq!(handler.call("anything").await, "new");
    }

    #[test]
    fn test_lookup_miss() {
        let mut registry = Registry::new();
        registry.register("Search", "Searches the web.", constant("a"));

        assert!(registry.get("Missing").is_none());
        assert!(registry.get("search").is_none());
        assert!(registry.get("Search ").is_none());
        assert!(registry.entry("Missing").is_none());
        assert!(!registry.contains("SEARCH"));
        assert!(registry.contains("Search"));
    }

    #[tokio::test]
    async fn test_invoke_through_lookup() {
        let mut registry = Registry::new();
        registry.register("Echo", "Repeats the input.", |input: String| {
            ready(format!("you said {input}"))
        });

        let observation = match registry.get("Echo") {
            Some(handler) => handler.call("hello").await,
            None => unreachable!("tool should be registered"),
        };
        assert_eq!(observation, "you said hello");
    }

    struct Reverse;

    impl Tool for Reverse {
        fn name(&self) -> &str {
            "Reverse"
        }

        fn description(&self) -> &str {
            "Reverses the input."
        }

        fn execute(
            &self,
            input: String,
        ) -> impl Future<Output = String> + Send + 'static {
            ready(input.chars().rev().collect())
        }
    }

    #[tokio::test]
    async fn test_add_tool() {
        let mut registry = Registry::new();
        registry.add_tool(Reverse);

        let entry = registry.entry("Reverse").unwrap();
        assert_eq!(entry.description(), "Reverses the input.");
        assert_eq!(entry.handler().call("abc").await, "cba");
    }
}
