mod tests {
    use retroclock_engine::glyph::make_colon;
    use retroclock_engine::morph::draw_static;
    use retroclock_engine::{
        ClockComposer, ClockFormat, ComposerConfig, FrameBuffer, GlyphSet, MorphStyle,
    };

    type Fb = FrameBuffer<64, 32>;

    // HH:MM:SS layout on a 64-wide matrix: row width 63, centred origin 0.
    const DIGIT_X: [i32; 6] = [0, 10, 22, 32, 44, 54];
    const COLON_X: [i32; 2] = [19, 41];

    fn config() -> ComposerConfig {
        ComposerConfig::default()
    }

    fn expected_face(digits: [u8; 6], colons: bool) -> Fb {
        let glyphs = GlyphSet::build();
        let mut fb = Fb::new();
        for (digit, x) in digits.iter().zip(DIGIT_X) {
            draw_static(&mut fb, glyphs.digit(*digit), x, 0, 255);
        }
        if colons {
            for x in COLON_X {
                draw_static(&mut fb, &make_colon(), x, 0, 255);
            }
        }
        fb
    }

    fn render(composer: &mut ClockComposer) -> Fb {
        let mut fb = Fb::new();
        composer.tick(&mut fb);
        fb
    }

    fn region_values(fb: &Fb, x0: i32) -> std::collections::BTreeSet<u8> {
        let mut values = std::collections::BTreeSet::new();
        for y in 0..32 {
            for x in x0..x0 + 9 {
                values.insert(fb.get(x, y));
            }
        }
        values
    }

    #[test]
    fn test_settles_to_static_after_full_transition() {
        let mut composer = ClockComposer::new(config());
        composer.set_time(12, 59, 59);
        let mut fb = Fb::new();
        for _ in 0..20 {
            fb = render(&mut composer);
        }
        // Second 59 is odd, so blinking colons are hidden.
        assert_eq!(fb.rows(), expected_face([1, 2, 5, 9, 5, 9], false).rows());
    }

    #[test]
    fn test_rollover_animates_only_changed_positions() {
        let mut composer = ClockComposer::new(config());
        composer.set_time(12, 59, 59);
        for _ in 0..20 {
            render(&mut composer);
        }

        composer.set_time(13, 0, 0);
        let mut fb = Fb::new();
        for _ in 0..10 {
            fb = render(&mut composer);
        }

        // The leading hour digit is the only unchanged position; it stays
        // fully settled while every other digit is mid-spawn at half
        // opacity.
        let stable = region_values(&fb, DIGIT_X[0]);
        assert!(stable.contains(&255));
        assert!(!stable.contains(&127));
        for x in &DIGIT_X[1..] {
            let values = region_values(&fb, *x);
            assert!(values.contains(&127), "position at {x} not mid-morph");
            assert!(!values.contains(&255));
        }

        for _ in 0..10 {
            fb = render(&mut composer);
        }
        // Second 0 is even, so the colons are visible again.
        assert_eq!(fb.rows(), expected_face([1, 3, 0, 0, 0, 0], true).rows());
    }

    #[test]
    fn test_retarget_does_not_reset_unrelated_transitions() {
        let mut composer = ClockComposer::new(config());
        composer.set_time(0, 0, 1);
        for _ in 0..5 {
            render(&mut composer);
        }
        assert_eq!(composer.positions()[5].step(), 5);

        // Feeding the same digits again must not restart the animation.
        composer.set_time(0, 0, 1);
        assert_eq!(composer.positions()[5].step(), 5);

        // A new digit in one position leaves the others running.
        composer.set_time(0, 1, 1);
        assert_eq!(composer.positions()[3].step(), 0);
        assert_eq!(composer.positions()[5].step(), 5);
    }

    #[test]
    fn test_colon_blink_follows_second_parity() {
        let mut composer = ClockComposer::new(config());
        composer.set_time(10, 20, 30);
        let fb = render(&mut composer);
        assert_eq!(fb.get(COLON_X[0], 10), 255);

        composer.set_time(10, 20, 31);
        let fb = render(&mut composer);
        assert_eq!(fb.get(COLON_X[0], 10), 0);
        assert_eq!(fb.get(COLON_X[1], 10), 0);
    }

    #[test]
    fn test_steady_colons_when_blink_disabled() {
        let mut composer = ClockComposer::new(ComposerConfig {
            blink_colons: false,
            ..config()
        });
        composer.set_time(10, 20, 31);
        let fb = render(&mut composer);
        assert_eq!(fb.get(COLON_X[0], 10), 255);
        assert_eq!(fb.get(COLON_X[1], 21), 255);
    }

    #[test]
    fn test_twelve_hour_formatting() {
        let mut composer = ClockComposer::new(ComposerConfig {
            use_24h: false,
            ..config()
        });
        composer.set_time(13, 5, 9);
        for _ in 0..20 {
            render(&mut composer);
        }
        let fb = render(&mut composer);
        // 13:05:09 displays as 01:05:09 (second 9 is odd, colons hidden).
        assert_eq!(fb.rows(), expected_face([0, 1, 0, 5, 0, 9], false).rows());
    }

    #[test]
    fn test_midnight_is_twelve_in_twelve_hour_mode() {
        let mut composer = ClockComposer::new(ComposerConfig {
            use_24h: false,
            ..config()
        });
        composer.set_time(0, 0, 0);
        assert_eq!(composer.positions()[0].current(), 1);
        assert_eq!(composer.positions()[1].current(), 2);
    }

    #[test]
    fn test_format_switch_rederives_digits() {
        let mut composer = ClockComposer::new(config());
        composer.set_time(13, 0, 0);
        for _ in 0..20 {
            render(&mut composer);
        }
        composer.set_use_24h(false);
        assert_eq!(composer.positions()[0].current(), 0);
        assert_eq!(composer.positions()[1].current(), 1);
        assert_eq!(composer.positions()[0].step(), 0, "format change retargets");
    }

    #[test]
    fn test_hour_minute_format_ignores_seconds() {
        let mut composer = ClockComposer::new(ComposerConfig {
            format: ClockFormat::HourMinute,
            ..config()
        });
        composer.set_time(12, 34, 56);
        for _ in 0..20 {
            render(&mut composer);
        }
        let fb = render(&mut composer);

        // Four digits and one colon: row width 41, centred at x=11.
        let glyphs = GlyphSet::build();
        let mut expected = Fb::new();
        for (digit, x) in [1u8, 2, 3, 4].iter().zip([11, 21, 33, 43]) {
            draw_static(&mut expected, glyphs.digit(*digit), x, 0, 255);
        }
        draw_static(&mut expected, &make_colon(), 30, 0, 255);
        assert_eq!(fb.rows(), expected.rows());
    }

    #[test]
    fn test_row_wider_than_matrix_truncates_without_panic() {
        let mut composer = ClockComposer::new(config());
        composer.set_time(8, 8, 8);
        let mut fb: FrameBuffer<32, 32> = FrameBuffer::new();
        for _ in 0..21 {
            fb.clear(0);
            composer.tick(&mut fb);
        }
        assert!(fb.get(0, 2) > 0, "row starts at the left edge");
        assert_eq!(fb.get(30, 2), 255, "cells near the edge are drawn");
    }

    #[test]
    fn test_crossfade_style_holds_shared_cells_stable() {
        let mut composer = ClockComposer::new(ComposerConfig {
            morph: MorphStyle::Crossfade,
            ..config()
        });
        composer.set_time(0, 0, 0);
        for _ in 0..20 {
            render(&mut composer);
        }
        composer.set_time(0, 0, 2);
        let fb = render(&mut composer);
        // 0 -> 2 after one step: the shared top-bar cell stays at 255.
        assert_eq!(fb.get(DIGIT_X[5] + 4, 2), 255);
    }
}
