//! End-to-end runs of the three strategies over the classroom
//! workload: six requests (312, 198, 80, 486, 550, 266) against six
//! blocks (100, 500, 200, 600, 600, 400), plus the degenerate inputs.

use corefit::*;
use corefit::analyze::Summary;

/// Flattens a result into `(size, original_index, owner)` triples,
/// one per result fragment, in result order.
fn fragments(res: &AllocationResult) -> Vec<(MemUnits, usize, Option<String>)> {
    res.result_partitions
        .iter()
        .map(|f| {
            (
                f.size,
                f.original_index,
                res.owner_of(f.id).map(|p| p.name.clone()),
            )
        })
        .collect()
}

fn owned(name: &str) -> Option<String> {
    Some(name.to_string())
}

#[test]
fn first_fit_demo_trace() {
    let res = Scenario::default().run(Strategy::First);

    assert!(res.waiting.is_empty());
    let picks: Vec<(&str, usize)> = res.allocations
        .iter()
        .map(|a| (a.process.name.as_str(), a.fragment.original_index))
        .collect();
    // p1 skips the 100 block and lands in the 500; p2 takes the 200
    // with 2 units left over; p3 back-fills the 100.
    assert_eq!(
        picks,
        vec![("p1", 1), ("p2", 2), ("p3", 0), ("p4", 3), ("p5", 4), ("p6", 5)]
    );

    assert_eq!(
        fragments(&res),
        vec![
            (80, 0, owned("p3")), (20, 0, None),
            (312, 1, owned("p1")), (188, 1, None),
            (198, 2, owned("p2")), (2, 2, None),
            (486, 3, owned("p4")), (114, 3, None),
            (550, 4, owned("p5")), (50, 4, None),
            (266, 5, owned("p6")), (134, 5, None),
        ]
    );
    assert_eq!(res.external_fragmentation(), 508);
}

#[test]
fn best_fit_demo_trace() {
    let res = Scenario::default().run(Strategy::Best);

    assert!(res.waiting.is_empty());
    let picks: Vec<(&str, usize)> = res.allocations
        .iter()
        .map(|a| (a.process.name.as_str(), a.fragment.original_index))
        .collect();
    // p1 takes the tightest block (400); p3 then re-splits its 88-unit
    // leftover, the only second-level split in the demo.
    assert_eq!(
        picks,
        vec![("p1", 5), ("p2", 2), ("p3", 5), ("p4", 1), ("p5", 3), ("p6", 4)]
    );
    let p3 = &res.allocations[2];
    assert_eq!(p3.fragment.original_size, Some(88));

    assert_eq!(
        fragments(&res),
        vec![
            (100, 0, None),
            (486, 1, owned("p4")), (14, 1, None),
            (198, 2, owned("p2")), (2, 2, None),
            (550, 3, owned("p5")), (50, 3, None),
            (266, 4, owned("p6")), (334, 4, None),
            (312, 5, owned("p1")), (80, 5, owned("p3")), (8, 5, None),
        ]
    );
    assert_eq!(res.external_fragmentation(), 508);
}

#[test]
fn worst_fit_demo_trace() {
    let res = Scenario::default().run(Strategy::Worst);

    // Spraying the big blocks early starves p4 and p5.
    let waiting: Vec<&str> = res.waiting.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(waiting, vec!["p4", "p5"]);

    let picks: Vec<(&str, usize)> = res.allocations
        .iter()
        .map(|a| (a.process.name.as_str(), a.fragment.original_index))
        .collect();
    assert_eq!(picks, vec![("p1", 3), ("p2", 4), ("p3", 1), ("p6", 1)]);

    assert_eq!(
        fragments(&res),
        vec![
            (100, 0, None),
            (80, 1, owned("p3")), (266, 1, owned("p6")), (154, 1, None),
            (200, 2, None),
            (312, 3, owned("p1")), (288, 3, None),
            (198, 4, owned("p2")), (402, 4, None),
            (400, 5, None),
        ]
    );
    assert_eq!(res.external_fragmentation(), 1544);
    assert!((res.allocation_rate() - 4.0 / 6.0 * 100.0).abs() < 1e-9);
}

#[test]
fn oversized_request_waits_under_every_strategy() {
    let sc = Scenario::from_sizes(&[900], &[100, 500, 200, 600, 600, 400]).unwrap();
    for res in sc.sweep() {
        assert!(res.allocations.is_empty());
        assert_eq!(res.waiting.len(), 1);
        assert_eq!(res.waiting[0].name, "p1");
        // Nothing was split: the pool survives intact.
        assert_eq!(res.result_partitions, sc.partitions);
    }
}

#[test]
fn no_partitions_means_everyone_waits() {
    let sc = Scenario::from_sizes(&[1], &[]).unwrap();
    for res in sc.sweep() {
        assert!(res.allocations.is_empty());
        assert_eq!(res.waiting, sc.processes);
        assert!(res.result_partitions.is_empty());
    }
}

#[test]
fn no_processes_leaves_partitions_untouched() {
    let sc = Scenario::from_sizes(&[], &[100, 500]).unwrap();
    for res in sc.sweep() {
        assert!(res.allocations.is_empty());
        assert!(res.waiting.is_empty());
        // Unchanged means unchanged: same ids, same everything.
        assert_eq!(res.result_partitions, sc.partitions);
        assert_eq!(res.allocation_rate(), 0.0);
        assert_eq!(Summary::of(&res).external_fragmentation, 600);
    }
}

#[test]
fn identical_inputs_give_identical_results() {
    let sc = Scenario::default();
    for s in Strategy::ALL {
        assert_eq!(sc.run(s), sc.run(s));
    }
}

#[test]
fn gatekeeper_rejects_malformed_lists() {
    // Zero-size request.
    assert!(scenario::init(vec![Process::new(1, "p1", 0)], vec![]).is_err());
    // Blank name.
    assert!(scenario::init(vec![Process::new(1, "  ", 5)], vec![]).is_err());
    // Duplicate request ids.
    assert!(scenario::init(
        vec![Process::new(1, "a", 5), Process::new(1, "b", 5)],
        vec![],
    )
    .is_err());
    // Id inside the reserved fragment range.
    assert!(scenario::init(vec![Process::new(u32::MAX, "a", 5)], vec![]).is_err());
    // Zero-size block.
    assert!(scenario::init(vec![], vec![Partition::original(1, 0, 0)]).is_err());
    // Two blocks claiming the same origin.
    assert!(scenario::init(
        vec![],
        vec![Partition::original(1, 10, 0), Partition::original(2, 20, 0)],
    )
    .is_err());
    // A block that is not original.
    let derived = Partition {
        id:             3,
        size:           10,
        original_index: 0,
        parent_id:      Some(1),
        original_size:  None,
    };
    assert!(scenario::init(vec![], vec![derived]).is_err());
}
