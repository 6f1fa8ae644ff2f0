//! Requirement graph expansion
//!
//! Builds the transitive requirement closure of a root module as a directed
//! graph (dependent → dependency edges) by walking `requires` lists through
//! the registry. Every name in the closure resolves to exactly one node;
//! unresolvable names fail expansion before any further work happens.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use tracing::{debug, trace};

use sprig_core::{Module, SprigError, SprigResult};
use sprig_registry::ModuleRegistry;

/// The transitive requirement closure of one root module.
///
/// Built fresh per resolution and discarded afterwards; nothing is cached
/// across invocations.
#[derive(Debug)]
pub struct RequirementGraph {
    /// Directed graph: nodes = modules, edges = direct requirements
    pub(crate) graph: DiGraph<Module, ()>,
    /// Map from module name to node index for fast lookups
    pub(crate) node_map: HashMap<String, NodeIndex>,
    /// Node of the module the expansion started from
    pub(crate) root: NodeIndex,
}

impl RequirementGraph {
    /// Expand the requirement closure of `root_name` against the registry.
    ///
    /// Fails with [`SprigError::ModuleUnknown`] if the root is not registered,
    /// and with [`SprigError::UnresolvedRequirement`] if any `requires` entry
    /// reached during expansion names a module the registry cannot resolve.
    pub fn expand<R>(root_name: &str, registry: &R) -> SprigResult<Self>
    where
        R: ModuleRegistry,
    {
        let root_module = registry
            .module(root_name)
            .ok_or_else(|| SprigError::ModuleUnknown {
                name: root_name.to_string(),
            })?;

        let mut graph = DiGraph::new();
        let mut node_map = HashMap::new();

        let root = graph.add_node(root_module);
        node_map.insert(root_name.to_string(), root);

        // Worklist of nodes whose requirements have not been expanded yet
        let mut pending = vec![root];

        while let Some(dependent) = pending.pop() {
            let required_by = graph[dependent].name.clone();
            let requires = graph[dependent].requires.clone();

            for name in requires {
                let dependency = match node_map.get(&name) {
                    Some(&existing) => existing,
                    None => {
                        let module =
                            registry
                                .module(&name)
                                .ok_or_else(|| SprigError::UnresolvedRequirement {
                                    name: name.clone(),
                                    required_by: required_by.clone(),
                                })?;

                        trace!(module = %name, required_by = %required_by, "expanding requirement");
                        let added = graph.add_node(module);
                        node_map.insert(name.clone(), added);
                        pending.push(added);
                        added
                    },
                };

                // Duplicate entries in one requires list collapse to one edge
                graph.update_edge(dependent, dependency, ());
            }
        }

        debug!(
            root = %root_name,
            modules = graph.node_count(),
            requirements = graph.edge_count(),
            "expanded requirement closure"
        );

        Ok(Self {
            graph,
            node_map,
            root,
        })
    }

    /// Get the module the expansion started from
    pub fn root(&self) -> &Module {
        &self.graph[self.root]
    }

    /// Check if a module name is part of the closure
    pub fn contains(&self, name: &str) -> bool {
        self.node_map.contains_key(name)
    }

    /// Get a module in the closure by name
    pub fn get(&self, name: &str) -> Option<&Module> {
        self.node_map.get(name).map(|&idx| &self.graph[idx])
    }

    /// Get all modules in the closure
    pub fn modules(&self) -> impl Iterator<Item = &Module> {
        self.graph.node_weights()
    }

    /// Get number of modules in the closure (root included)
    pub fn module_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Get number of direct requirement edges in the closure
    pub fn requirement_count(&self) -> usize {
        self.graph.edge_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprig_core::ErrorKind;
    use sprig_registry::MemoryRegistry;

    fn create_test_registry() -> MemoryRegistry {
        MemoryRegistry::from_modules(vec![
            Module::new("module1".to_string()),
            Module::with_requires("module2".to_string(), vec!["module1".to_string()]),
            Module::with_requires(
                "module3".to_string(),
                vec!["module1".to_string(), "module2".to_string()],
            ),
            Module::with_requires("module4".to_string(), vec!["module3".to_string()]),
            Module::with_requires(
                "module5".to_string(),
                vec!["module3".to_string(), "module1".to_string()],
            ),
        ])
    }

    #[test]
    fn test_expand_leaf_module() {
        let registry = create_test_registry();
        let graph = RequirementGraph::expand("module1", &registry).unwrap();

        assert_eq!(graph.root().name, "module1");
        assert_eq!(graph.module_count(), 1);
        assert_eq!(graph.requirement_count(), 0);
        assert!(graph.contains("module1"));
    }

    #[test]
    fn test_expand_transitive_closure() {
        let registry = create_test_registry();
        let graph = RequirementGraph::expand("module4", &registry).unwrap();

        // module4 -> module3 -> {module1, module2}, module2 -> module1
        assert_eq!(graph.module_count(), 4);
        assert!(graph.contains("module4"));
        assert!(graph.contains("module3"));
        assert!(graph.contains("module2"));
        assert!(graph.contains("module1"));
    }

    #[test]
    fn test_expand_deduplicates_diamond() {
        let registry = create_test_registry();
        let graph = RequirementGraph::expand("module5", &registry).unwrap();

        // module1 is reachable through module5 directly, through module3, and
        // through module3 -> module2, but appears exactly once
        assert_eq!(graph.module_count(), 4);
        assert_eq!(
            graph.modules().filter(|m| m.name == "module1").count(),
            1
        );
    }

    #[test]
    fn test_expand_unknown_root() {
        let registry = create_test_registry();
        let err = RequirementGraph::expand("moduleX", &registry).unwrap_err();

        assert!(matches!(err, SprigError::ModuleUnknown { ref name } if name == "moduleX"));
        assert_eq!(err.kind(), ErrorKind::ModuleUnknown);
    }

    #[test]
    fn test_expand_unresolved_requirement() {
        let registry = create_test_registry();
        registry.insert(Module::with_requires(
            "broken".to_string(),
            vec!["module1".to_string(), "ghost".to_string()],
        ));

        let err = RequirementGraph::expand("broken", &registry).unwrap_err();
        match err {
            SprigError::UnresolvedRequirement { name, required_by } => {
                assert_eq!(name, "ghost");
                assert_eq!(required_by, "broken");
            },
            other => panic!("expected UnresolvedRequirement, got {other:?}"),
        }
    }

    #[test]
    fn test_expand_unresolved_transitive_requirement() {
        let registry = create_test_registry();
        registry.insert(Module::with_requires(
            "mid".to_string(),
            vec!["ghost".to_string()],
        ));
        registry.insert(Module::with_requires(
            "top".to_string(),
            vec!["mid".to_string()],
        ));

        let err = RequirementGraph::expand("top", &registry).unwrap_err();
        assert!(
            matches!(err, SprigError::UnresolvedRequirement { ref required_by, .. } if required_by == "mid")
        );
        assert_eq!(err.kind(), ErrorKind::DependencyResolution);
    }

    #[test]
    fn test_expand_duplicate_requires_entries() {
        let registry = create_test_registry();
        registry.insert(Module::with_requires(
            "noisy".to_string(),
            vec![
                "module1".to_string(),
                "module1".to_string(),
                "module1".to_string(),
            ],
        ));

        let graph = RequirementGraph::expand("noisy", &registry).unwrap();
        assert_eq!(graph.module_count(), 2);
        assert_eq!(graph.requirement_count(), 1);
    }

    #[test]
    fn test_get() {
        let registry = create_test_registry();
        let graph = RequirementGraph::expand("module3", &registry).unwrap();

        let module2 = graph.get("module2").unwrap();
        assert_eq!(module2.requires, vec!["module1"]);
        assert!(graph.get("module4").is_none());
    }

    #[test]
    fn test_expand_cyclic_graph_succeeds() {
        // Expansion only builds the closure; cycles are the order pass's job
        let registry = MemoryRegistry::from_modules(vec![
            Module::with_requires("module6".to_string(), vec!["module7".to_string()]),
            Module::with_requires("module7".to_string(), vec!["module6".to_string()]),
        ]);

        let graph = RequirementGraph::expand("module6", &registry).unwrap();
        assert_eq!(graph.module_count(), 2);
        assert_eq!(graph.requirement_count(), 2);
    }
}
