//! Per-thread reusable message buffer

use std::cell::RefCell;

/// Buffers holding more than this many bytes of UTF-8 after a call are
/// dropped instead of reused. The limit counts bytes, not characters.
pub const MAX_RETAINED_BUFFER: usize = 2000;

const INITIAL_CAPACITY: usize = 256;

// One scratch buffer per thread; never shared across threads.
thread_local! {
    static MESSAGE_BUFFER: RefCell<String> = RefCell::new(String::with_capacity(INITIAL_CAPACITY));
}

/// Run `f` with this thread's scratch buffer, emptied beforehand.
///
/// A nested call on the same thread (for example an argument whose `Display`
/// logs through another logger) gets a temporary buffer instead.
pub fn with_buffer<R>(f: impl FnOnce(&mut String) -> R) -> R {
    let available = MESSAGE_BUFFER
        .try_with(|cell| cell.try_borrow_mut().is_ok())
        .unwrap_or(false);
    if !available {
        return f(&mut String::with_capacity(INITIAL_CAPACITY));
    }

    MESSAGE_BUFFER.with(|cell| {
        let mut buf = cell.borrow_mut();
        buf.clear();
        let result = f(&mut *buf);
        recycle(&mut buf);
        result
    })
}

fn recycle(buf: &mut String) {
    if buf.len() > MAX_RETAINED_BUFFER {
        *buf = String::with_capacity(INITIAL_CAPACITY);
    } else {
        buf.clear();
    }
}

/// Current capacity of this thread's buffer, `None` while it is borrowed.
pub fn retained_capacity() -> Option<usize> {
    MESSAGE_BUFFER
        .try_with(|cell| cell.try_borrow().ok().map(|buf| buf.capacity()))
        .ok()
        .flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_starts_empty_each_time() {
        with_buffer(|buf| buf.push_str("first"));
        let seen = with_buffer(|buf| {
            let before = buf.clone();
            buf.push_str("second");
            before
        });
        assert_eq!(seen, "");
    }

    #[test]
    fn test_oversized_buffer_is_discarded() {
        with_buffer(|buf| buf.push_str(&"x".repeat(MAX_RETAINED_BUFFER + 1)));
        let capacity = retained_capacity().unwrap();
        assert!(capacity < MAX_RETAINED_BUFFER, "capacity was {}", capacity);
    }

    #[test]
    fn test_threshold_counts_bytes() {
        // 1000 two-byte characters sit exactly at the limit
        with_buffer(|buf| buf.push_str(&"é".repeat(MAX_RETAINED_BUFFER / 2)));
        assert!(retained_capacity().unwrap() >= MAX_RETAINED_BUFFER);

        // 1001 characters are 2002 bytes, over the limit
        with_buffer(|buf| buf.push_str(&"é".repeat(MAX_RETAINED_BUFFER / 2 + 1)));
        assert!(retained_capacity().unwrap() < MAX_RETAINED_BUFFER);
    }

    #[test]
    fn test_small_buffer_keeps_capacity() {
        with_buffer(|buf| buf.push_str(&"y".repeat(1500)));
        assert!(retained_capacity().unwrap() >= 1500);
    }

    #[test]
    fn test_nested_use_gets_private_buffer() {
        let inner = with_buffer(|outer| {
            outer.push_str("outer");
            let inner = with_buffer(|inner| {
                inner.push_str("inner");
                inner.clone()
            });
            assert_eq!(outer.as_str(), "outer");
            inner
        });
        assert_eq!(inner, "inner");
    }

    #[test]
    fn test_threads_do_not_share_buffers() {
        with_buffer(|buf| buf.push_str("main thread"));
        let other = std::thread::spawn(|| with_buffer(|buf| buf.clone()))
            .join()
            .unwrap();
        assert_eq!(other, "");
    }
}
