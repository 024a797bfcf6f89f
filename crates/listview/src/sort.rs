//! Sort stage.

use crate::query::SortDirection;
use crate::record::Listable;

/// Order `subset` by creation timestamp into a new vector.
///
/// The sort is stable: records with identical timestamps keep their input
/// order, so repeated calls on the same input give the same sequence.
pub fn sort_by_created<'a, R: Listable>(subset: &[&'a R], direction: SortDirection) -> Vec<&'a R> {
    let mut ordered = subset.to_vec();
    ordered.sort_by(|a, b| direction.apply(a.created_at().cmp(&b.created_at())));
    ordered
}
