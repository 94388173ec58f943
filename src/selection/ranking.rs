use std::cmp::Ordering;

use crate::selection::Candidate;

/// Sort by (category priority asc, group cost desc). The sort is stable, so
/// full ties keep catalog order.
pub fn rank(candidates: &mut [Candidate<'_>]) {
    candidates.sort_by(compare);

    debug_assert!(candidates
        .windows(2)
        .all(|w| compare(&w[0], &w[1]) != Ordering::Greater));
}

fn compare(a: &Candidate<'_>, b: &Candidate<'_>) -> Ordering {
    let priority_cmp = a
        .template
        .category
        .priority()
        .cmp(&b.template.category.priority());
    if priority_cmp != Ordering::Equal {
        priority_cmp
    } else {
        // Descending group cost
        b.group_cost
            .partial_cmp(&a.group_cost)
            .unwrap_or(Ordering::Equal)
    }
}
