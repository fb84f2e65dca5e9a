/*
 * FORMAT BENCH - GLOBAL ALLOCATOR INTEGRITY TEST
 * =================================================================
 * Component Name: engine/tests/memory_tracking_test.rs
 * Core Responsibility: التأكد من أن المخصص العالمي يحسب الذروة فعلاً.
 * Note: single test in its own binary so no other thread allocates meanwhile.
 * =================================================================
 */

use format_bench::hardware;

#[test]
fn window_sees_a_transient_allocation() {
    const SIZE: usize = 8 * 1024 * 1024;

    let window = hardware::open_window();
    {
        let buf = vec![1u8; SIZE];
        assert_eq!(buf.len(), SIZE);
        std::hint::black_box(&buf);
    }
    let peak = window.peak_above_baseline();
    assert!(peak >= SIZE, "peak {} below the {} byte buffer", peak, SIZE);

    let after = hardware::snapshot();
    assert!(after.peak_bytes >= after.current_bytes);
    assert!(after.current_bytes < window.baseline() + SIZE, "buffer was freed");

    // A fresh window forgets the earlier spike.
    let next = hardware::open_window();
    assert!(next.peak_above_baseline() < SIZE);
}
