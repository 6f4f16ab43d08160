use std::collections::HashSet;

use crate::core::ModuleId;

/// Reduce closed walks to the distinct cycles they contain.
///
/// Each input path is expected to end on an element it already visited. The
/// same cycle discovered from different starting nodes (a rotation) is kept
/// once, as first seen and in traversal order. Cycles that merely overlap
/// are all kept.
pub fn reduce_cycles(paths: &[Vec<ModuleId>]) -> Vec<Vec<ModuleId>> {
    let mut seen_keys: HashSet<Vec<&str>> = HashSet::new();
    let mut cycles = Vec::new();

    for path in paths {
        let core = cyclic_core(path);
        if core.is_empty() {
            continue;
        }

        if seen_keys.insert(canonical_key(core)) {
            cycles.push(core.to_vec());
        }
    }

    cycles
}

/// The repeating part of a closed walk, with any lead-in trimmed.
///
/// Starts at the first element that reappears later in the walk and stops
/// before the closing element. Walks without a repeat give an empty slice.
pub fn cyclic_core(path: &[ModuleId]) -> &[ModuleId] {
    let Some(last) = path.len().checked_sub(1) else {
        return &[];
    };

    let start = path
        .iter()
        .enumerate()
        .position(|(index, module)| path[index + 1..].contains(module));

    match start {
        Some(start) if start < last => &path[start..last],
        _ => &[],
    }
}

/// Order-independent identity of a cycle; only used for deduplication.
pub fn canonical_key(core: &[ModuleId]) -> Vec<&str> {
    let mut key: Vec<&str> = core.iter().map(String::as_str).collect();
    key.sort_unstable();
    key
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn paths(raw: &[&[&str]]) -> Vec<Vec<ModuleId>> {
        raw.iter()
            .map(|path| path.iter().map(|m| m.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_two_node_rotations_collapse() {
        // a <-> b discovered from both ends
        let input = paths(&[&["a", "b", "a"], &["b", "a", "b"]]);

        assert_eq!(reduce_cycles(&input), paths(&[&["a", "b"]]));
    }

    #[test]
    fn test_three_node_rotations_collapse() {
        let input = paths(&[
            &["a", "b", "c", "a"],
            &["b", "c", "a", "b"],
            &["c", "a", "b", "c"],
        ]);

        assert_eq!(reduce_cycles(&input), paths(&[&["a", "b", "c"]]));
    }

    #[test]
    fn test_combined_cycles_stay_distinct() {
        // a -> b -> c -> a, a <-> b, b <-> c
        let input = paths(&[
            &["a", "b", "c", "a"],
            &["a", "b", "a"],
            &["b", "a", "b"],
            &["b", "c", "b"],
            &["c", "b", "c"],
            &["c", "b", "a", "b"],
        ]);

        assert_eq!(
            reduce_cycles(&input),
            paths(&[&["a", "b", "c"], &["a", "b"], &["b", "c"]])
        );
    }

    #[test]
    fn test_big_cycle_containing_small_cycle() {
        let input = paths(&[
            &["a", "b", "a"],
            &["a", "b", "c", "a"],
            &["b", "a", "b"],
            &["b", "c", "a", "b"],
        ]);

        assert_eq!(
            reduce_cycles(&input),
            paths(&[&["a", "b"], &["a", "b", "c"]])
        );
    }

    #[test]
    fn test_lead_in_is_trimmed() {
        let input = paths(&[&["x", "y", "a", "b", "a"]]);

        assert_eq!(reduce_cycles(&input), paths(&[&["a", "b"]]));
    }

    #[test]
    fn test_representative_keeps_traversal_order() {
        let input = paths(&[&["c", "a", "b", "c"], &["a", "b", "c", "a"]]);

        assert_eq!(reduce_cycles(&input), paths(&[&["c", "a", "b"]]));
    }

    #[test]
    fn test_single_element_and_empty_paths_are_excluded() {
        let input = paths(&[&["a"], &[], &["a", "b"]]);

        assert!(reduce_cycles(&input).is_empty());
    }

    #[test]
    fn test_self_loop_core() {
        let input = paths(&[&["a", "a"]]);

        assert_eq!(reduce_cycles(&input), paths(&[&["a"]]));
    }

    #[test]
    fn test_same_members_different_multiplicity_are_distinct_keys() {
        let first = paths(&[&["a", "b", "a"]]);
        let second = paths(&[&["a", "a", "b", "a"]]);

        assert_eq!(canonical_key(cyclic_core(&first[0])), vec!["a", "b"]);
        assert_eq!(canonical_key(cyclic_core(&second[0])), vec!["a", "a", "b"]);
    }

    #[test]
    fn test_cyclic_core_without_repeat_is_empty() {
        let path: Vec<ModuleId> = vec!["a".into(), "b".into(), "c".into()];

        assert!(cyclic_core(&path).is_empty());
    }
}
