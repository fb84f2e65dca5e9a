// FORMAT BENCH - HARDWARE / ALLOCATOR LAYER
// Status: FINAL

pub mod memory_tracker;

pub use memory_tracker::{MemorySnapshot, MemoryWindow, TrackingAllocator};

#[cfg(not(target_env = "msvc"))]
pub type InnerAllocator = tikv_jemallocator::Jemalloc;
#[cfg(not(target_env = "msvc"))]
const INNER: InnerAllocator = tikv_jemallocator::Jemalloc;

#[cfg(target_env = "msvc")]
pub type InnerAllocator = std::alloc::System;
#[cfg(target_env = "msvc")]
const INNER: InnerAllocator = std::alloc::System;

/// المخصص العالمي: كل تخصيص في العملية يمر من هنا ويُحسب
#[global_allocator]
pub static ALLOCATOR: TrackingAllocator<InnerAllocator> = TrackingAllocator::new(INNER);

/// Current and peak heap usage of the whole process.
pub fn snapshot() -> MemorySnapshot {
    ALLOCATOR.snapshot()
}

/// Opens a measurement window on the process-wide allocator.
pub fn open_window() -> MemoryWindow<'static, InnerAllocator> {
    MemoryWindow::open(&ALLOCATOR)
}
