//! DependencyGraph - the package-to-package view of a catalog.
//!
//! An edge `a -> b` means `a` requires a reference whose package name is
//! `b`. References to unknown packages have no node and no edge.

use std::collections::{BTreeSet, HashMap};

use petgraph::algo::{is_cyclic_directed, tarjan_scc};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;

use crate::core::PackageCatalog;
use crate::resolver::DependencyResolver;

/// Adjacency-list view of a catalog's resolved `requires` relation.
#[derive(Debug, Clone)]
pub struct DependencyGraph<'a> {
    catalog: &'a PackageCatalog,

    /// Package graph
    graph: DiGraph<&'a str, ()>,

    /// Map from package name to node index
    nodes: HashMap<&'a str, NodeIndex>,
}

impl<'a> DependencyGraph<'a> {
    /// Build the graph for every package in the catalog.
    pub fn new(catalog: &'a PackageCatalog) -> Self {
        let mut graph = DiGraph::new();
        let mut nodes = HashMap::new();

        for name in catalog.names() {
            nodes.insert(name, graph.add_node(name));
        }

        for (name, desc) in catalog.all_packages() {
            let from = nodes[name.as_str()];
            for dep in desc.requires() {
                if let Some(&to) = nodes.get(dep.package_name()) {
                    if !graph.contains_edge(from, to) {
                        graph.add_edge(from, to, ());
                    }
                }
            }
        }

        DependencyGraph {
            catalog,
            graph,
            nodes,
        }
    }

    /// Packages that directly require `name`, sorted.
    pub fn dependents(&self, name: &str) -> Vec<String> {
        self.neighbors(name, Direction::Incoming)
    }

    /// Packages `name` directly requires, sorted.
    pub fn dependencies(&self, name: &str) -> Vec<String> {
        self.neighbors(name, Direction::Outgoing)
    }

    /// Whether any packages require each other in a cycle.
    pub fn has_cycle(&self) -> bool {
        is_cyclic_directed(&self.graph)
    }

    /// Packages needed by `roots`, dependencies before dependents.
    ///
    /// Packages that form a cycle are emitted next to each other in name
    /// order. Unknown roots are skipped.
    pub fn install_order<I, S>(&self, roots: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let wanted = DependencyResolver::new(self.catalog).closure_of(roots);

        // Tarjan yields components in reverse topological order, which for
        // "requires" edges means dependencies first.
        let mut order = Vec::with_capacity(wanted.len());
        for component in tarjan_scc(&self.graph) {
            let members: BTreeSet<&str> = component
                .into_iter()
                .map(|node| self.graph[node])
                .filter(|name| wanted.contains(*name))
                .collect();
            order.extend(members.into_iter().map(str::to_string));
        }

        order
    }

    fn neighbors(&self, name: &str, direction: Direction) -> Vec<String> {
        let Some(&node) = self.nodes.get(name) else {
            return Vec::new();
        };

        let names: BTreeSet<&str> = self
            .graph
            .neighbors_directed(node, direction)
            .map(|n| self.graph[n])
            .collect();
        names.into_iter().map(str::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{catalog_from, cycle_catalog};

    fn position(order: &[String], name: &str) -> usize {
        order.iter().position(|n| n == name).unwrap()
    }

    #[test]
    fn test_install_order_dependencies_first() {
        let catalog = PackageCatalog::for_architecture("x86_64").unwrap();
        let graph = DependencyGraph::new(&catalog);

        let order = graph.install_order(["makefile_engine"]);

        assert_eq!(order.len(), 3);
        assert!(position(&order, "haiku") < position(&order, "haiku_devel"));
        assert!(position(&order, "haiku_devel") < position(&order, "makefile_engine"));
    }

    #[test]
    fn test_install_order_with_cycle() {
        let catalog = cycle_catalog();
        let graph = DependencyGraph::new(&catalog);

        assert!(graph.has_cycle());
        assert_eq!(graph.install_order(["A"]), vec!["A", "B"]);
    }

    #[test]
    fn test_install_order_cycle_after_its_dependency() {
        let catalog = catalog_from(vec![
            ("base", vec![]),
            ("a", vec!["b=x86_64", "base=x86_64"]),
            ("b", vec!["a=x86_64"]),
            ("app", vec!["a=x86_64"]),
        ]);
        let graph = DependencyGraph::new(&catalog);

        let order = graph.install_order(["app"]);
        assert_eq!(order, vec!["base", "a", "b", "app"]);
    }

    #[test]
    fn test_dependents() {
        let catalog = PackageCatalog::for_architecture("x86_64").unwrap();
        let graph = DependencyGraph::new(&catalog);

        let dependents = graph.dependents("userland_fs");
        assert_eq!(dependents, vec!["netfs"]);

        assert!(graph.dependents("unknown_pkg").is_empty());
        assert_eq!(graph.dependencies("netfs"), vec!["haiku", "userland_fs"]);
        assert!(!graph.has_cycle());
    }

    #[test]
    fn test_unknown_references_have_no_edges() {
        let catalog = catalog_from(vec![("app", vec!["cmd:python3", "ghost=x86_64"])]);
        let graph = DependencyGraph::new(&catalog);

        assert!(graph.dependencies("app").is_empty());
        assert_eq!(graph.install_order(["app"]), vec!["app"]);
    }
}
