//! Repaint queue - bounded, deduplicating changed-cell list
//!
//! Paint changes far outnumber what the presentation layer can redraw in
//! a tick, so the queue coalesces: a point already queued is not added
//! again, and once the queue is full new requests are dropped outright.
//! Missing a redraw is acceptable; a cell still changing will almost
//! certainly re-queue itself next tick. Missed simulation updates are
//! not acceptable, so the producer never blocks on the consumer.

use crate::domain::geometry::Point;

/// FIFO of changed points, deduplicated on insert, hard-capped.
pub struct RepaintQueue {
    points: Vec<Point>,
    head: usize,
    capacity: usize,
    dropped: usize,
}

impl RepaintQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            head: 0,
            capacity,
            dropped: 0,
        }
    }

    /// Queue a point for repaint. Returns false when the point was
    /// already queued this cycle or the queue is full (the request is
    /// then dropped and counted).
    pub fn request(&mut self, p: Point) -> bool {
        // Linear dedup scan over the whole cycle, including entries
        // already handed to the consumer: repaints coalesce across a
        // partial drain.
        if self.points.iter().any(|q| *q == p) {
            return false;
        }
        if self.points.len() >= self.capacity {
            self.dropped += 1;
            return false;
        }
        self.points.push(p);
        true
    }

    /// Pop the next queued point in insertion order. Once the last entry
    /// has been handed out the queue resets to empty.
    pub fn next(&mut self) -> Option<Point> {
        if self.head >= self.points.len() {
            self.reset();
            return None;
        }
        let p = self.points[self.head];
        self.head += 1;
        if self.head >= self.points.len() {
            self.reset();
        }
        Some(p)
    }

    /// Entries still waiting to be consumed.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len() - self.head
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Requests dropped at capacity since the last reset.
    #[inline]
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Discard everything, including the dropped-request counter.
    pub fn reset(&mut self) {
        self.points.clear();
        self.head = 0;
        self.dropped = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deduplicates_on_insert() {
        let mut queue = RepaintQueue::new(10);
        assert!(queue.request(Point::new(1, 1)));
        assert!(!queue.request(Point::new(1, 1)));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn holds_earliest_points_when_full() {
        let mut queue = RepaintQueue::new(5);
        for x in 0..8 {
            queue.request(Point::new(x, 0));
        }
        assert_eq!(queue.len(), 5);
        assert_eq!(queue.dropped(), 3);

        // FIFO-until-full: the first five survive, in insertion order.
        for x in 0..5 {
            assert_eq!(queue.next(), Some(Point::new(x, 0)));
        }
        assert_eq!(queue.next(), None);
    }

    #[test]
    fn resets_after_full_drain() {
        let mut queue = RepaintQueue::new(3);
        queue.request(Point::new(0, 0));
        queue.request(Point::new(1, 0));

        assert_eq!(queue.next(), Some(Point::new(0, 0)));
        // Still in the cycle: a re-request of a consumed point coalesces.
        assert!(!queue.request(Point::new(0, 0)));

        assert_eq!(queue.next(), Some(Point::new(1, 0)));
        // Cycle over; the same point queues again.
        assert!(queue.request(Point::new(0, 0)));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn empty_drain_is_a_clean_none() {
        let mut queue = RepaintQueue::new(3);
        assert_eq!(queue.next(), None);
        assert!(queue.is_empty());
    }
}
