//! Output-engine accuracy against the simulated board

use mnemo_core::output::{raw_tone, set_color, tone};
use mnemo_core::tones::ToneSpec;
use mnemo_core::Choice;
use mnemo_sim::SimBoard;

#[test]
fn test_tone_color_bijection() {
    for choice in Choice::ALL {
        let mut board = SimBoard::new();
        let spec = ToneSpec::of(choice);

        tone(&mut board, choice, 20);
        let end = board.now_us();

        // The wave toggles at exactly the color's half-period
        let intervals = board.trace().buzzer_intervals_between(0, end);
        assert!(!intervals.is_empty(), "{choice:?} emitted no wave");
        for interval in intervals {
            assert_eq!(interval, u64::from(spec.half_period_us), "{choice:?}");
        }

        // Exactly this color's triple is lit while the wave runs
        assert_eq!(board.trace().rgb_at(spec.half_period_us.into()), spec.rgb);
        assert_eq!(board.trace().lit_writes().len(), 1);

        // LED is off on exit
        assert_eq!(board.rgb(), (0, 0, 0));
    }
}

#[test]
fn test_blue_tone_cycle_count() {
    let mut board = SimBoard::new();

    tone(&mut board, Choice::Blue, 851);

    // 851 ms / 1.702 ms per period = 500; the engine stops once the
    // remaining budget no longer covers a full period
    let pulses = board.trace().buzzer_pulses();
    assert!((499..=501).contains(&pulses), "got {pulses} cycles");
}

#[test]
fn test_tone_duration_budget_is_not_exceeded() {
    for choice in Choice::ALL {
        let mut board = SimBoard::new();
        tone(&mut board, choice, 150);
        assert!(board.now_us() <= 150_000, "{choice:?} overran its budget");
    }
}

#[test]
fn test_raw_tone_leaves_led_alone() {
    let mut board = SimBoard::new();
    set_color(&mut board, (255, 255, 0));

    raw_tone(&mut board, 255, 1500);

    // 255000 us / 3000 us per period = 85 periods, one short of budget
    assert_eq!(board.trace().buzzer_pulses(), 84);
    assert_eq!(board.rgb(), (255, 255, 0));
    assert_eq!(board.trace().lit_writes().len(), 1);
}

#[test]
fn test_off_is_all_zero() {
    let mut board = SimBoard::new();
    set_color(&mut board, (1, 2, 3));
    set_color(&mut board, (0, 0, 0));
    assert_eq!(board.rgb(), (0, 0, 0));
}
