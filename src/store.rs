// Append-only list of scratch marks with a hard size limit.
// Insertion order is draw order. Once the limit is crossed the oldest
// `evict_batch` marks go in one go, so eviction cost is paid rarely.

use crate::types::MarkSegment;

pub struct MarkStore {
    marks: Vec<MarkSegment>,
    capacity: usize,
    evict_batch: usize,
}

impl MarkStore {
    /// `evict_batch` is clamped to `1..=capacity`.
    pub fn new(capacity: usize, evict_batch: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            marks: Vec::with_capacity(capacity),
            capacity,
            evict_batch: evict_batch.clamp(1, capacity),
        }
    }

    /// Add a batch in order; returns how many old marks were evicted.
    ///
    /// Marks from this batch are never evicted by the same call. A batch
    /// larger than the whole capacity keeps only its last `capacity` marks.
    pub fn append(&mut self, batch: &[MarkSegment]) -> usize {
        let batch = &batch[batch.len().saturating_sub(self.capacity)..];
        let old = self.marks.len();
        self.marks.extend_from_slice(batch);

        if self.marks.len() <= self.capacity {
            return 0;
        }

        // whole batches of the oldest marks, but only ones that were here before
        let over = self.marks.len() - self.capacity;
        let batches = over.div_ceil(self.evict_batch);
        let evicted = (batches * self.evict_batch).min(old);
        self.marks.drain(..evicted);
        evicted
    }

    pub fn clear(&mut self) {
        self.marks.clear();
    }

    /// Everything in draw order (oldest first).
    pub fn snapshot(&self) -> &[MarkSegment] {
        &self.marks
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}
