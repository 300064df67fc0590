//! Pull-based iterators over finalized frames.

use std::iter::FusedIterator;

use credit_core::frame::Frame;

use crate::buffer::CreditBuffer;

/// Yields finalized frames oldest-first. See [`CreditBuffer::drain_finalized`].
pub struct Drain<'a, O> {
    buffer: &'a mut CreditBuffer<O>,
}

impl<'a, O> Drain<'a, O> {
    pub(crate) fn new(buffer: &'a mut CreditBuffer<O>) -> Self {
        Self { buffer }
    }
}

impl<O> Iterator for Drain<'_, O> {
    type Item = Frame<O>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buffer.pop_finalized()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.buffer.pending_unresolved_count();
        (n, Some(n))
    }
}

impl<O> ExactSizeIterator for Drain<'_, O> {}

impl<O> FusedIterator for Drain<'_, O> {}

/// End-of-episode flush. See [`CreditBuffer::flush_all`].
///
/// On drop the buffer is cleared and its pending horizon reset to zero.
pub struct FlushAll<'a, O> {
    buffer: &'a mut CreditBuffer<O>,
}

impl<'a, O> FlushAll<'a, O> {
    pub(crate) fn new(buffer: &'a mut CreditBuffer<O>) -> Self {
        Self { buffer }
    }
}

impl<O> Iterator for FlushAll<'_, O> {
    type Item = Frame<O>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buffer.pop_finalized()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.buffer.pending_unresolved_count();
        (n, Some(n))
    }
}

impl<O> ExactSizeIterator for FlushAll<'_, O> {}

impl<O> FusedIterator for FlushAll<'_, O> {}

impl<O> Drop for FlushAll<'_, O> {
    fn drop(&mut self) {
        self.buffer.clear();
    }
}
