//! Properties every search must hold on the diagnostic graph

use risk_search_core::*;

fn ids(graph: &Graph, labels: &[&str]) -> Vec<NodeId> {
    labels.iter().map(|l| graph.node(l).unwrap()).collect()
}

fn endpoints(goal: &str) -> (&'static Graph, NodeId, NodeId) {
    let graph = risk_graph();
    (graph, graph.node(START).unwrap(), graph.node(goal).unwrap())
}

/// Returned paths start at Start, end at the goal and follow edges
fn assert_valid_path(graph: &Graph, path: &[NodeId], start: NodeId, goal: NodeId) {
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&goal));
    assert!(graph.is_path(path), "not a path: {:?}", graph.labels_of(path));
}

#[test]
fn test_high_risk_paths_are_valid() {
    let (graph, start, goal) = endpoints("High_Risk");
    let config = SearchConfig::default();

    for algorithm in Algorithm::ALL {
        let outcome = algorithm.search(graph, start, goal, &config).unwrap();

        match outcome.path {
            Some(path) => assert_valid_path(graph, &path, start, goal),
            // Only the beam may prune its way out of a reachable goal
            None => assert_eq!(algorithm, Algorithm::Beam),
        }
    }
}

#[test]
fn test_every_goal_reached_by_complete_searches() {
    let graph = risk_graph();
    let start = graph.node(START).unwrap();

    for level in RiskLevel::ALL {
        let goal = graph.node(level.label()).unwrap();
        for search in [best_first_search, a_star_search, ao_star_search] {
            let path = search(graph, start, goal).unwrap().path.unwrap();
            assert_valid_path(graph, &path, start, goal);
        }
    }
}

#[test]
fn test_best_first_low_risk() {
    let (graph, start, goal) = endpoints("Low_Risk");

    let outcome = best_first_search(graph, start, goal).unwrap();

    // Fever and Cough tie at 3; Cough sorts first
    assert_eq!(
        outcome.path.unwrap(),
        ids(graph, &["Start", "Cough", "Cold", "Low_Risk"])
    );
    assert_eq!(outcome.nodes_expanded, 7);
}

#[test]
fn test_a_star_medium_risk_costs_three() {
    let (graph, start, goal) = endpoints("Medium_Risk");

    let outcome = a_star_search(graph, start, goal).unwrap();
    let path = outcome.path.unwrap();

    let via = graph.label(path[path.len() - 2]).unwrap();
    assert!(via == "Allergies" || via == "Migraine", "reached via {}", via);
    assert_eq!(graph.path_cost(&path), Some(3.0));
    assert_eq!(outcome.cost_so_far[&goal], 3.0);
}

#[test]
fn test_ao_star_matches_a_star() {
    let graph = risk_graph();

    for start in graph.nodes() {
        for goal in graph.nodes() {
            let a = a_star_search(graph, start, goal).unwrap();
            let ao = ao_star_search(graph, start, goal).unwrap();

            assert_eq!(a.path, ao.path);
            assert_eq!(a.nodes_expanded, ao.nodes_expanded);
            assert_eq!(a.came_from, ao.came_from);
        }
    }
}

#[test]
fn test_path_matches_predecessor_chain() {
    let graph = risk_graph();
    let start = graph.node(START).unwrap();
    let config = SearchConfig::default();

    for algorithm in Algorithm::ALL {
        for level in RiskLevel::ALL {
            let goal = graph.node(level.label()).unwrap();
            let outcome = algorithm.search(graph, start, goal, &config).unwrap();
            let Some(path) = outcome.path.clone() else { continue };

            // Re-derive predecessors from consecutive path nodes
            let mut derived = CameFrom::default();
            derived.insert(path[0], None);
            for pair in path.windows(2) {
                derived.insert(pair[1], Some(pair[0]));
            }

            let restricted: CameFrom = path
                .iter()
                .map(|node| (*node, outcome.came_from[node]))
                .collect();
            assert_eq!(derived, restricted, "{} -> {}", algorithm, level);

            let rebuilt = reconstruct_path(graph, &outcome.came_from, start, goal).unwrap();
            assert_eq!(rebuilt, path);
        }
    }
}

#[test]
fn test_start_cost_is_zero() {
    let (graph, start, goal) = endpoints("High_Risk");
    let config = SearchConfig::default();

    for algorithm in Algorithm::ALL {
        let outcome = algorithm.search(graph, start, goal, &config).unwrap();
        assert_eq!(outcome.cost_so_far[&start], 0.0);
        assert_eq!(outcome.came_from[&start], None);
    }
}

#[test]
fn test_repeated_runs_are_identical() {
    let graph = risk_graph();
    let start = graph.node(START).unwrap();
    let config = SearchConfig::default();

    for algorithm in Algorithm::ALL {
        for goal in graph.nodes() {
            let first = algorithm.search(graph, start, goal, &config).unwrap();
            for _ in 0..3 {
                let again = algorithm.search(graph, start, goal, &config).unwrap();
                assert_eq!(first.path, again.path);
                assert_eq!(first.nodes_expanded, again.nodes_expanded);
            }
        }
    }
}

#[test]
fn test_searches_share_graph_across_threads() {
    let handles: Vec<_> = Algorithm::ALL
        .into_iter()
        .map(|algorithm| {
            std::thread::spawn(move || {
                run_search(risk_graph(), algorithm, RiskLevel::Low, &SearchConfig::default())
                    .unwrap()
                    .path
            })
        })
        .collect();

    for handle in handles {
        let path = handle.join().unwrap().unwrap();
        assert_eq!(path.first().map(String::as_str), Some("Start"));
        assert_eq!(path.last().map(String::as_str), Some("Low_Risk"));
    }
}

#[test]
fn test_invalid_selection_fails_before_search() {
    assert!(matches!(
        "Dijkstra".parse::<Algorithm>(),
        Err(SearchError::InvalidSelection(_))
    ));
    assert!(matches!(
        "Severe_Risk".parse::<RiskLevel>(),
        Err(SearchError::InvalidSelection(_))
    ));
    assert!(matches!(
        risk_graph().node("Rash"),
        Err(SearchError::UnknownNode(_))
    ));
}
