use crate::helpe::*;

/// The strategy-specific step: picks the index of the pool fragment
/// that should serve a request of `request` units, or `None` when no
/// fragment fits.
///
/// Tie-breaking is deliberately strict-comparison based, so that among
/// equally good candidates the one *earliest in pool order* always
/// wins. That keeps all three rules stable and makes runs reproducible
/// fragment-for-fragment.
pub(crate) fn select(
    pool:       &[Partition],
    request:    MemUnits,
    strategy:   Strategy,
) -> Option<usize> {
    match strategy {
        Strategy::First => pool.iter().position(|b| b.fits(request)),
        Strategy::Best  => {
            let mut best: Option<(usize, MemUnits)> = None;
            for (idx, b) in pool.iter().enumerate() {
                if !b.fits(request) { continue; }
                match best {
                    // Strictly smaller, or nothing picked yet.
                    Some((_, sz)) if b.size >= sz => {},
                    _ => { best = Some((idx, b.size)); },
                }
            }
            best.map(|(idx, _)| idx)
        },
        Strategy::Worst => {
            let mut worst: Option<(usize, MemUnits)> = None;
            for (idx, b) in pool.iter().enumerate() {
                if !b.fits(request) { continue; }
                match worst {
                    // Strictly larger, or nothing picked yet.
                    Some((_, sz)) if b.size <= sz => {},
                    _ => { worst = Some((idx, b.size)); },
                }
            }
            worst.map(|(idx, _)| idx)
        },
    }
}
