// Heap Meter

/*
 * FORMAT BENCH - COUNTING GLOBAL ALLOCATOR
 * =================================================================
 * Component Name: engine/src/hardware/memory_tracker.rs
 * Core Responsibility: قياس ذروة استهلاك الذاكرة لكل صيغة.
 * Design Pattern: Allocator Decorator / Atomic Counters
 * Invariant: no allocation may happen inside the allocator hooks.
 * =================================================================
 */

use serde::Serialize;
use std::alloc::{GlobalAlloc, Layout};
use std::sync::atomic::{AtomicUsize, Ordering};

/// لقطة من العدادات (Counter Snapshot)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MemorySnapshot {
    pub current_bytes: usize,
    pub peak_bytes: usize,
}

/// Wraps an allocator and keeps live-byte and high-water counters.
pub struct TrackingAllocator<A> {
    inner: A,
    current: AtomicUsize,
    peak: AtomicUsize,
}

impl<A> TrackingAllocator<A> {
    pub const fn new(inner: A) -> Self {
        Self {
            inner,
            current: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
        }
    }

    #[inline(always)]
    fn grow(&self, bytes: usize) {
        let now = self.current.fetch_add(bytes, Ordering::Relaxed) + bytes;
        self.peak.fetch_max(now, Ordering::Relaxed);
    }

    #[inline(always)]
    fn shrink(&self, bytes: usize) {
        self.current.fetch_sub(bytes, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MemorySnapshot {
        MemorySnapshot {
            current_bytes: self.current.load(Ordering::Relaxed),
            peak_bytes: self.peak.load(Ordering::Relaxed),
        }
    }

    /// يعيد الذروة إلى الاستهلاك الحالي
    pub fn reset_peak(&self) {
        self.peak.store(self.current.load(Ordering::Relaxed), Ordering::Relaxed);
    }
}

unsafe impl<A: GlobalAlloc> GlobalAlloc for TrackingAllocator<A> {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = self.inner.alloc(layout);
        if !ptr.is_null() {
            self.grow(layout.size());
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = self.inner.alloc_zeroed(layout);
        if !ptr.is_null() {
            self.grow(layout.size());
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        self.inner.dealloc(ptr, layout);
        self.shrink(layout.size());
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = self.inner.realloc(ptr, layout, new_size);
        if !new_ptr.is_null() {
            let old_size = layout.size();
            if new_size > old_size {
                self.grow(new_size - old_size);
            } else {
                self.shrink(old_size - new_size);
            }
        }
        new_ptr
    }
}

// ----------------------------------------------------------------
// نافذة القياس (Measurement Window)
// ----------------------------------------------------------------

/// Peak bytes allocated above the live total at the moment the window opened.
///
/// The counters are process-wide: allocations from other threads (the log
/// writer, the stderr layer) land in the same window as the measured code.
pub struct MemoryWindow<'a, A> {
    tracker: &'a TrackingAllocator<A>,
    baseline: usize,
}

impl<'a, A> MemoryWindow<'a, A> {
    pub fn open(tracker: &'a TrackingAllocator<A>) -> Self {
        tracker.reset_peak();
        let baseline = tracker.snapshot().current_bytes;
        Self { tracker, baseline }
    }

    pub fn baseline(&self) -> usize {
        self.baseline
    }

    pub fn peak_above_baseline(&self) -> usize {
        self.tracker.snapshot().peak_bytes.saturating_sub(self.baseline)
    }
}
