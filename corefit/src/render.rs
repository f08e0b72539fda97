use crate::{analyze::Summary, helpe::*};

/// Renders one strategy run as text: the terminal counterpart of the
/// hosting UI's memory map. One proportional bar per result fragment
/// (allocated fragments filled and labeled with their owner, free ones
/// hollow), then the allocated and waiting tables, then the summary
/// numbers. `width` is the bar length of the largest original block;
/// every fragment is scaled against that.
pub fn report(res: &AllocationResult, width: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== {} ===\n", res.strategy));

    let full = res.result_partitions
        .iter()
        .map(|f| f.ancestral_size())
        .max()
        .unwrap_or(0);

    let mut prev_origin: Option<usize> = None;
    for f in &res.result_partitions {
        // A blank line between ancestor families keeps split chains
        // readable.
        if prev_origin.is_some() && prev_origin != Some(f.original_index) {
            out.push('\n');
        }
        prev_origin = Some(f.original_index);

        let cells = scaled(f.size, full, width);
        let (bar, label) = match res.owner_of(f.id) {
            Some(p) => ("#".repeat(cells), p.name.clone()),
            None    => (".".repeat(cells), String::from("free")),
        };
        out.push_str(&format!(
            "{:>8} |{:<width$}| {}\n",
            f.size, bar, label,
            width = width,
        ));
    }

    out.push_str("\nAllocated:\n");
    if res.allocations.is_empty() {
        out.push_str("  (none)\n");
    }
    for a in &res.allocations {
        out.push_str(&format!(
            "  {:<12} {:>8} units, carved from a {}-unit block\n",
            a.process.name, a.process.size, a.fragment.ancestral_size(),
        ));
    }

    out.push_str("Waiting:\n");
    if res.waiting.is_empty() {
        out.push_str("  (none)\n");
    }
    for p in &res.waiting {
        out.push_str(&format!("  {:<12} {:>8} units\n", p.name, p.size));
    }

    let sum = Summary::of(res);
    out.push_str(&format!(
        "\nAllocation rate:\t{}/{} ({:.1}%)\n",
        sum.allocated,
        sum.allocated + sum.waiting,
        sum.allocation_rate,
    ));
    out.push_str(&format!("Internal fragmentation:\t{} units\n", sum.internal_fragmentation));
    out.push_str(&format!("External fragmentation:\t{} units\n", sum.external_fragmentation));

    out
}

/// Scales a fragment to bar cells. Nonzero fragments always get at
/// least one cell, so a 2-unit leftover stays visible next to a
/// 600-unit neighbor.
fn scaled(size: MemUnits, full: MemUnits, width: usize) -> usize {
    if size == 0 || full == 0 || width == 0 {
        return 0;
    }

    (size * width / full).clamp(1, width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::Scenario;

    #[test]
    fn tiny_fragments_stay_visible() {
        assert_eq!(scaled(2, 600, 48), 1);
        assert_eq!(scaled(600, 600, 48), 48);
        assert_eq!(scaled(0, 600, 48), 0);
        assert_eq!(scaled(5, 0, 48), 0);
    }

    #[test]
    fn report_mentions_every_request_once() {
        let sc = Scenario::default();
        let res = sc.run(Strategy::Worst);
        let txt = report(&res, 40);
        for p in &sc.processes {
            assert!(txt.contains(&p.name));
        }
        assert!(txt.contains("External fragmentation:\t1544 units"));
    }
}
