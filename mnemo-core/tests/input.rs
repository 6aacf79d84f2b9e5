//! Input-engine debounce and timeout behavior

use mnemo_core::input::wait_for_button;
use mnemo_core::Choice;
use mnemo_sim::SimBoard;

#[test]
fn test_press_is_captured_and_echoed() {
    let mut board = SimBoard::new();
    board.press(Choice::Green);

    let captured = wait_for_button(&mut board, 3000);

    assert_eq!(captured, Some(Choice::Green));
    // The echo tone lit green and turned back off
    assert_eq!(board.trace().lit_writes().len(), 1);
    assert_eq!(board.trace().lit_writes()[0].1, (0, 255, 0));
    assert_eq!(board.rgb(), (0, 0, 0));
}

#[test]
fn test_bouncing_key_is_captured_once() {
    let mut board = SimBoard::new();
    // NONE -> RED -> NONE -> RED within 5 ms: contact bounce
    board.press_window(Choice::Red, 1, 5, 1);
    board.press_window(Choice::Red, 3, 5, 1);

    assert_eq!(wait_for_button(&mut board, 3000), Some(Choice::Red));
    // The bounce was swallowed by the echo tone; nothing left to capture
    assert_eq!(wait_for_button(&mut board, 3000), None);
    assert_eq!(board.trace().lit_writes().len(), 1);
}

#[test]
fn test_timeout_returns_none_without_output() {
    let mut board = SimBoard::new();

    let start_us = board.now_us();
    let captured = wait_for_button(&mut board, 3000);
    let elapsed_ms = (board.now_us() - start_us) / 1000;

    assert_eq!(captured, None);
    assert!((3000..3050).contains(&elapsed_ms), "waited {elapsed_ms} ms");
    assert!(board.trace().is_empty());
}

#[test]
fn test_wait_survives_clock_wrap() {
    // The millisecond counter wraps in the middle of the wait
    let mut board = SimBoard::starting_at_ms(u32::MAX - 1500);
    let press_at = board.now_ms64() + 2500;
    board.press_at(Choice::White, press_at);

    let start_us = board.now_us();
    let captured = wait_for_button(&mut board, 3000);
    let elapsed_ms = (board.now_us() - start_us) / 1000;

    assert_eq!(captured, Some(Choice::White));
    assert!(elapsed_ms >= 2500, "captured after only {elapsed_ms} ms");
}

#[test]
fn test_timeout_is_not_cut_short_by_clock_wrap() {
    let mut board = SimBoard::starting_at_ms(u32::MAX - 1500);

    let start_us = board.now_us();
    let captured = wait_for_button(&mut board, 3000);
    let elapsed_ms = (board.now_us() - start_us) / 1000;

    assert_eq!(captured, None);
    assert!((3000..3050).contains(&elapsed_ms), "waited {elapsed_ms} ms");
}
