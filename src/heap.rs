//! Binary heaps laid out over plain slices.
//!
//! The root lives at index 0 and the children of `i` at `2i + 1` and `2i + 2`.
//! Nothing here allocates: every operation rearranges the caller's storage in place,
//! which is what lets the rankers reuse the input vector or a bounded window.

fn less<T: Ord>(a: &T, b: &T) -> bool {
    a < b
}

fn greater<T: Ord>(a: &T, b: &T) -> bool {
    a > b
}

/// Moves `heap[index]` down until neither child should sit above it.
///
/// `above(a, b)` answers whether `a` belongs closer to the root than `b`.
fn sift_down_by<T, F>(heap: &mut [T], mut index: usize, above: F)
where
    F: Fn(&T, &T) -> bool,
{
    let size = heap.len();
    loop {
        let child = index * 2 + 1;
        let mut chosen = index;

        if child < size && above(&heap[child], &heap[chosen]) {
            chosen = child;
        }
        if child + 1 < size && above(&heap[child + 1], &heap[chosen]) {
            chosen = child + 1;
        }

        if chosen == index {
            break;
        }
        heap.swap(index, chosen);
        index = chosen;
    }
}

fn sift_up_by<T, F>(heap: &mut [T], mut index: usize, above: F)
where
    F: Fn(&T, &T) -> bool,
{
    while index > 0 {
        let parent = (index - 1) / 2;
        if !above(&heap[index], &heap[parent]) {
            break;
        }
        heap.swap(index, parent);
        index = parent;
    }
}

fn make_heap_by<T, F>(heap: &mut [T], above: F)
where
    F: Fn(&T, &T) -> bool + Copy,
{
    for index in (0..heap.len() / 2).rev() {
        sift_down_by(heap, index, above);
    }
}

fn is_heap_by<T, F>(heap: &[T], above: F) -> bool
where
    F: Fn(&T, &T) -> bool,
{
    (1..heap.len()).all(|i| !above(&heap[i], &heap[(i - 1) / 2]))
}

/// Replaces the minimum of a min-heap with `target` and restores the heap.
///
/// `target` becomes the new root unconditionally and is sifted down to its place,
/// so the old minimum is dropped. Runs in O(log n).
///
/// # Panics
///
/// Panics if `heap` is empty. The slice must already be a valid min-heap; this is
/// only checked in debug builds.
///
/// # Examples
///
/// ```
/// # use leaderboard::heap::{is_min_heap, make_min_heap, replace_min};
/// let mut heap = vec![7, 3, 9, 1, 5];
/// make_min_heap(&mut heap);
/// replace_min(&mut heap, 8);
///
/// assert!(is_min_heap(&heap));
/// assert_eq!(heap[0], 3);
/// assert!(!heap.contains(&1));
/// ```
pub fn replace_min<T: Ord>(heap: &mut [T], target: T) {
    debug_assert!(is_min_heap(heap), "replace_min called on a range that is not a min-heap");
    heap[0] = target;
    sift_down_by(heap, 0, less::<T>);
}

/// Rearranges `heap` into a min-heap in O(n).
pub fn make_min_heap<T: Ord>(heap: &mut [T]) {
    make_heap_by(heap, less::<T>);
}

/// Rearranges `heap` into a max-heap in O(n).
pub fn make_max_heap<T: Ord>(heap: &mut [T]) {
    make_heap_by(heap, greater::<T>);
}

/// Appends `value` to a min-heap and sifts it up to its place.
pub fn push_min_heap<T: Ord>(heap: &mut Vec<T>, value: T) {
    heap.push(value);
    let last = heap.len() - 1;
    sift_up_by(heap, last, less::<T>);
}

/// Moves the maximum of a max-heap to the last slot of `heap`.
///
/// Afterwards `heap[..len - 1]` is a max-heap again, which is the step heapsort
/// repeats while shrinking its range. Does nothing on an empty slice.
///
/// # Examples
///
/// ```
/// # use leaderboard::heap::{is_max_heap, make_max_heap, pop_max};
/// let mut heap = vec![4, 10, 2, 8];
/// make_max_heap(&mut heap);
/// pop_max(&mut heap);
///
/// assert_eq!(heap[3], 10);
/// assert!(is_max_heap(&heap[..3]));
/// ```
pub fn pop_max<T: Ord>(heap: &mut [T]) {
    let len = heap.len();
    if len < 2 {
        return;
    }
    heap.swap(0, len - 1);
    sift_down_by(&mut heap[..len - 1], 0, greater::<T>);
}

pub fn is_min_heap<T: Ord>(heap: &[T]) -> bool {
    is_heap_by(heap, less::<T>)
}

pub fn is_max_heap<T: Ord>(heap: &[T]) -> bool {
    is_heap_by(heap, greater::<T>)
}
