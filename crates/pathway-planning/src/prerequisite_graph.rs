//! Prerequisite graph diagnostics: cycles (Tarjan SCC) and prerequisites
//! that point outside the course.

use std::collections::{HashMap, HashSet};

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use pathway_core::models::Competency;

/// Directed graph with an edge prerequisite → dependent for every
/// in-course prerequisite.
pub struct PrerequisiteGraph {
    graph: DiGraph<String, ()>,
    index: HashMap<String, NodeIndex>,
}

/// Problems found in a course's prerequisite data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphReport {
    /// Each cycle's competency ids, sorted.
    pub cycles: Vec<Vec<String>>,
    /// (competency id, prerequisite id) pairs naming a competency outside the course.
    pub external_prerequisites: Vec<(String, String)>,
}

impl GraphReport {
    pub fn is_clean(&self) -> bool {
        self.cycles.is_empty() && self.external_prerequisites.is_empty()
    }
}

impl PrerequisiteGraph {
    pub fn build(competencies: &[Competency]) -> Self {
        let mut graph = DiGraph::new();
        let mut index = HashMap::new();
        for competency in competencies {
            index
                .entry(competency.id.clone())
                .or_insert_with(|| graph.add_node(competency.id.clone()));
        }
        for competency in competencies {
            let dependent = index[&competency.id];
            for prerequisite in &competency.prerequisites {
                if let Some(&source) = index.get(prerequisite) {
                    graph.update_edge(source, dependent, ());
                }
            }
        }
        Self { graph, index }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Strongly connected components with more than one node, plus self-loops.
    pub fn cycles(&self) -> Vec<Vec<String>> {
        let mut cycles: Vec<Vec<String>> = tarjan_scc(&self.graph)
            .into_iter()
            .filter(|scc| scc.len() > 1 || self.graph.contains_edge(scc[0], scc[0]))
            .map(|scc| {
                let mut ids: Vec<String> = scc.into_iter().map(|n| self.graph[n].clone()).collect();
                ids.sort();
                ids
            })
            .collect();
        cycles.sort();
        cycles
    }

    pub fn contains(&self, competency_id: &str) -> bool {
        self.index.contains_key(competency_id)
    }
}

/// Analyze a course's competencies.
pub fn analyze(competencies: &[Competency]) -> GraphReport {
    let graph = PrerequisiteGraph::build(competencies);
    let mut seen = HashSet::new();
    let external_prerequisites = competencies
        .iter()
        .filter(|c| seen.insert(c.id.as_str()))
        .flat_map(|c| {
            c.prerequisites
                .iter()
                .filter(|p| !graph.contains(p))
                .map(|p| (c.id.clone(), p.clone()))
                .collect::<Vec<_>>()
        })
        .collect();
    GraphReport {
        cycles: graph.cycles(),
        external_prerequisites,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_two_node_cycle_and_self_loop() {
        let competencies = vec![
            Competency::new("a", "c", "A").with_prerequisites(["b"]),
            Competency::new("b", "c", "B").with_prerequisites(["a"]),
            Competency::new("s", "c", "S").with_prerequisites(["s"]),
            Competency::new("x", "c", "X"),
        ];
        let report = analyze(&competencies);
        assert_eq!(
            report.cycles,
            vec![vec!["a".to_string(), "b".to_string()], vec!["s".to_string()]]
        );
        assert!(report.external_prerequisites.is_empty());
    }

    #[test]
    fn reports_external_prerequisites() {
        let competencies = vec![
            Competency::new("a", "c", "A"),
            Competency::new("b", "c", "B").with_prerequisites(["a", "elsewhere"]),
        ];
        let report = analyze(&competencies);
        assert!(report.cycles.is_empty());
        assert_eq!(
            report.external_prerequisites,
            vec![("b".to_string(), "elsewhere".to_string())]
        );
        assert!(!report.is_clean());
    }

    #[test]
    fn acyclic_chain_is_clean() {
        let competencies = vec![
            Competency::new("a", "c", "A"),
            Competency::new("b", "c", "B").with_prerequisites(["a"]),
            Competency::new("c", "c", "C").with_prerequisites(["b"]),
        ];
        assert!(analyze(&competencies).is_clean());
        assert_eq!(PrerequisiteGraph::build(&competencies).node_count(), 3);
    }
}
