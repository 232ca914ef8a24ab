//! Stable top-down merge sort driven by a caller-supplied ordering closure.

/// Sort `items` ascending under `less`, a strict-weak-ordering predicate.
///
/// Splits at the midpoint, sorts each half, then merges; the merge takes the
/// left element on ties, so equal elements keep their relative input order.
/// O(n log n) comparisons with O(n) auxiliary space per merge.
pub fn merge_sort_by<T, F>(items: &mut [T], less: &F)
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    if items.len() <= 1 {
        return;
    }
    let mid = items.len() / 2;
    {
        let (left, right) = items.split_at_mut(mid);
        merge_sort_by(left, less);
        merge_sort_by(right, less);
    }
    let merged = merge(&items[..mid], &items[mid..], less);
    items.clone_from_slice(&merged);
}

fn merge<T: Clone>(left: &[T], right: &[T], less: &impl Fn(&T, &T) -> bool) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        // Only strictly-lesser right elements jump ahead; ties stay left.
        if less(&right[j], &left[i]) {
            merged.push(right[j].clone());
            j += 1;
        } else {
            merged.push(left[i].clone());
            i += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}
