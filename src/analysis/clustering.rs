//! Connected-component discovery over the co-borrowing graph.
//!
//! Components are discovered by scanning graph nodes in enumeration order and
//! running a depth-first traversal from each unvisited node. The traversal
//! uses an explicit work stack, so recursion depth never depends on component
//! size, while still producing the same preorder a recursive descent would.

use std::collections::HashSet;

use crate::borrow_graph::BorrowGraph;

/// Partition the graph's node set into connected components.
///
/// Each component lists its ISBNs in DFS preorder from the component's seed
/// node. Components appear in the order their seeds occur in the graph's node
/// enumeration. Together they cover every graph node exactly once.
pub fn connected_components(graph: &BorrowGraph) -> Vec<Vec<String>> {
    let mut visited: HashSet<&str> = HashSet::new();
    let mut components = Vec::new();

    for node in graph.nodes() {
        if !visited.contains(node.as_str()) {
            components.push(collect_component(graph, node, &mut visited));
        }
    }
    components
}

fn collect_component<'a>(
    graph: &'a BorrowGraph,
    seed: &'a str,
    visited: &mut HashSet<&'a str>,
) -> Vec<String> {
    let mut component = Vec::new();
    let mut stack: Vec<&'a str> = vec![seed];

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        component.push(current.to_string());

        if let Some(neighbors) = graph.neighbors(current) {
            // Push in reverse so the first neighbor is processed first,
            // matching the preorder of a recursive traversal.
            let neighbors: Vec<&str> = neighbors.iter().map(String::as_str).collect();
            for neighbor in neighbors.into_iter().rev() {
                if !visited.contains(neighbor) {
                    stack.push(neighbor);
                }
            }
        }
    }
    component
}
