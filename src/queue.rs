use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::Error;

/// Fixed-capacity byte FIFO between a producer (ISR, reader thread) and the
/// session that drains it.
///
/// Every operation runs inside a critical section, so the queue can sit in a
/// `static` and be shared by reference. Ordering is only guaranteed for one
/// producer and one consumer.
pub struct ByteQueue<const N: usize> {
    inner: Mutex<RefCell<Deque<u8, N>>>,
}

impl<const N: usize> ByteQueue<N> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    fn with<R>(&self, f: impl FnOnce(&mut Deque<u8, N>) -> R) -> R {
        critical_section::with(|cs| f(&mut self.inner.borrow_ref_mut(cs)))
    }

    /// Append a byte. A full queue is left untouched.
    pub fn put(&self, byte: u8) -> Result<(), Error> {
        self.with(|q| q.push_back(byte)).map_err(|_| {
            trace!("input queue full, dropping {=u8:#x}", byte);
            Error::QueueFull
        })
    }

    /// Append every byte of `text`, stopping at the first one that does not fit.
    pub fn put_str(&self, text: &str) -> Result<(), Error> {
        text.bytes().try_for_each(|b| self.put(b))
    }

    pub fn get(&self) -> Option<u8> {
        self.with(|q| q.pop_front())
    }

    pub fn peek(&self) -> Option<u8> {
        self.with(|q| q.front().copied())
    }

    pub fn is_empty(&self) -> bool {
        self.with(|q| q.is_empty())
    }

    pub fn is_full(&self) -> bool {
        self.with(|q| q.is_full())
    }

    pub fn len(&self) -> usize {
        self.with(|q| q.len())
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn clear(&self) {
        self.with(|q| q.clear())
    }
}

impl<const N: usize> Default for ByteQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}
