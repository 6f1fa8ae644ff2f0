//! Cycle detection and install ordering
//!
//! Walks the requirement graph with a white/gray/black depth-first coloring.
//! The gray set is the active expansion path: reaching a gray node means a
//! module transitively requires itself. A black node reached again is a
//! diamond (two independent paths converging on a shared requirement) and is
//! skipped without error. Appending each module after all of its requirements
//! yields the dependency-first install order in the same pass.

use std::collections::HashSet;

use petgraph::graph::NodeIndex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use sprig_core::{SprigError, SprigResult};

use crate::graph::RequirementGraph;

/// DFS node coloring: white / gray / black
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

/// An ordered sequence of module names to install, dependencies first.
///
/// Restricted to names that were absent from the installed-set snapshot the
/// plan was computed against. An empty plan means the root and its whole
/// closure are already installed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallPlan {
    /// Module the plan was computed for
    root: String,
    /// Names to install, in order
    steps: Vec<String>,
}

impl InstallPlan {
    /// Get the module this plan was computed for
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Get the ordered install steps
    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    /// Get number of install steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if there is nothing to install
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Consume the plan, yielding the ordered steps
    pub fn into_steps(self) -> Vec<String> {
        self.steps
    }
}

impl RequirementGraph {
    /// Check that no module in the closure transitively requires itself.
    ///
    /// Runs before any install call is issued so that a detected cycle never
    /// triggers partial installation.
    pub fn validate_acyclic(&self) -> SprigResult<()> {
        self.install_order().map(|_| ())
    }

    /// Compute the dependency-first order over the whole closure.
    ///
    /// Each module appears exactly once, strictly after all of its direct and
    /// transitive requirements. Order among independent siblings follows the
    /// declared `requires` order, so the result is deterministic for a given
    /// registry. Fails with [`SprigError::CircularDependency`] if the closure
    /// contains a cycle.
    pub fn install_order(&self) -> SprigResult<Vec<String>> {
        let mut marks = vec![Mark::Unvisited; self.graph.node_count()];
        let mut path = Vec::new();
        let mut order = Vec::with_capacity(self.graph.node_count());

        self.visit(self.root, &mut marks, &mut path, &mut order)?;

        Ok(order)
    }

    /// Compute the install plan: the dependency-first order restricted to
    /// names absent from `installed`.
    pub fn install_plan(&self, installed: &HashSet<String>) -> SprigResult<InstallPlan> {
        let order = self.install_order()?;
        let steps: Vec<String> = order
            .into_iter()
            .filter(|name| !installed.contains(name))
            .collect();

        debug!(
            root = %self.root().name,
            steps = steps.len(),
            "computed install plan"
        );

        Ok(InstallPlan {
            root: self.root().name.clone(),
            steps,
        })
    }

    fn visit(
        &self,
        index: NodeIndex,
        marks: &mut [Mark],
        path: &mut Vec<NodeIndex>,
        order: &mut Vec<String>,
    ) -> SprigResult<()> {
        match marks[index.index()] {
            Mark::Done => return Ok(()),
            Mark::InProgress => {
                return Err(SprigError::CircularDependency {
                    cycle: self.format_cycle(path, index),
                });
            },
            Mark::Unvisited => {},
        }

        marks[index.index()] = Mark::InProgress;
        path.push(index);

        let module = &self.graph[index];
        for name in &module.requires {
            // Expansion guarantees every requirement has a node
            let dependency = self.node_map[name];
            self.visit(dependency, marks, path, order)?;
        }

        path.pop();
        marks[index.index()] = Mark::Done;
        order.push(module.name.clone());

        Ok(())
    }

    /// Format the cycle closed at `repeat` as "a -> b -> c -> a"
    fn format_cycle(&self, path: &[NodeIndex], repeat: NodeIndex) -> String {
        let start = path.iter().position(|&index| index == repeat).unwrap_or(0);
        let mut names: Vec<&str> = path[start..]
            .iter()
            .map(|&index| self.graph[index].name.as_str())
            .collect();
        names.push(self.graph[repeat].name.as_str());
        names.join(" -> ")
    }
}
