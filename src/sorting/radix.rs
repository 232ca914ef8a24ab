//! Stable LSD radix sort keyed by a caller-supplied `u64` extractor.
//! Base-10 passes, least-significant digit first; each pass is a counting
//! sort made stable by prefix sums and back-to-front placement.

/// Sort `items` ascending by `key`.
///
/// Equal-key items keep their relative input order. Keys are non-negative by
/// construction (`u64`); callers with fractional quantities scale them into
/// an integer domain before sorting.
pub fn radix_sort_by_key<T, F>(items: &mut [T], key: F)
where
    T: Clone,
    F: Fn(&T) -> u64,
{
    if items.len() <= 1 {
        return;
    }
    for digit in 0..max_digit_count(items, &key) {
        counting_sort_pass(items, &key, 10u64.pow(digit));
    }
}

/// Decimal digits in the largest key over all items. A key of 0 still
/// occupies one digit.
fn max_digit_count<T>(items: &[T], key: &impl Fn(&T) -> u64) -> u32 {
    items
        .iter()
        .map(|item| decimal_digits(key(item)))
        .max()
        .unwrap_or(0)
}

fn decimal_digits(mut n: u64) -> u32 {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

fn counting_sort_pass<T: Clone>(items: &mut [T], key: &impl Fn(&T) -> u64, exp: u64) {
    let mut counts = [0usize; 10];

    // Count occurrences of each digit value
    for item in items.iter() {
        counts[digit_at(key(item), exp)] += 1;
    }

    // Prefix sums turn counts into exclusive bucket end positions
    for d in 1..10 {
        counts[d] += counts[d - 1];
    }

    // Scatter back-to-front so equal digits keep their prior order
    let mut output = items.to_vec();
    for item in items.iter().rev() {
        let d = digit_at(key(item), exp);
        counts[d] -= 1;
        output[counts[d]] = item.clone();
    }

    items.clone_from_slice(&output);
}

fn digit_at(key: u64, exp: u64) -> usize {
    ((key / exp) % 10) as usize
}
