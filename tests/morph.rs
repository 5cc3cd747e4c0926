mod tests {
    use retroclock_engine::glyph::make_digit;
    use retroclock_engine::morph::{
        MatchList, MorphStyle, Point, PointList, collect_points, draw_static, greedy_match,
    };
    use retroclock_engine::FrameBuffer;

    const STEPS: u16 = 20;

    type Fb = FrameBuffer<16, 32>;

    fn static_render(digit: u8) -> Fb {
        let mut fb = Fb::new();
        draw_static(&mut fb, &make_digit(digit), 0, 0, 255);
        fb
    }

    #[test]
    fn test_crossfade_of_identical_glyphs_is_static() {
        let glyph = make_digit(4);
        for step in [0, 1, 10, STEPS] {
            let mut fb = Fb::new();
            MorphStyle::Crossfade.render(&mut fb, &glyph, &glyph, step, STEPS, 0, 0);
            assert_eq!(fb.rows(), static_render(4).rows(), "step {step}");
        }
    }

    #[test]
    fn test_crossfade_endpoints_are_opposites() {
        // Digit 2 lights segment b (right, upper half) which digit 5 does
        // not; digit 5 lights segment f (left, upper half) which digit 2
        // does not; both light segment a.
        let from = make_digit(2);
        let to = make_digit(5);

        let mut start = Fb::new();
        MorphStyle::Crossfade.render(&mut start, &from, &to, 0, STEPS, 0, 0);
        assert_eq!(start.get(8, 5), 255, "from-only cell at full opacity");
        assert_eq!(start.get(0, 5), 0, "to-only cell not drawn yet");
        assert_eq!(start.get(4, 2), 255, "shared cell stable");

        let mut end = Fb::new();
        MorphStyle::Crossfade.render(&mut end, &from, &to, STEPS, STEPS, 0, 0);
        assert_eq!(end.get(8, 5), 0, "from-only cell faded out");
        assert_eq!(end.get(0, 5), 255, "to-only cell at full opacity");
        assert_eq!(end.get(4, 2), 255, "shared cell stable");
    }

    #[test]
    fn test_crossfade_midpoint_is_intermediate() {
        let from = make_digit(2);
        let to = make_digit(5);
        let mut fb = Fb::new();
        MorphStyle::Crossfade.render(&mut fb, &from, &to, 10, STEPS, 0, 0);
        assert_eq!(fb.get(8, 5), 127);
        assert_eq!(fb.get(0, 5), 127);
        assert_eq!(fb.get(4, 2), 255);
    }

    #[test]
    fn test_greedy_match_conserves_points() {
        let mut from = PointList::new();
        let mut to = PointList::new();
        collect_points(&make_digit(1), &mut from);
        collect_points(&make_digit(8), &mut to);
        assert!(from.len() < to.len());

        let mut matches = MatchList::new();
        greedy_match(&from, &to, &mut matches);

        // Every source point is matched, every destination index at most
        // once; the leftovers are exactly the fade-in surplus.
        assert_eq!(matches.len(), from.len());
        let mut seen = std::vec::Vec::from(&matches[..]);
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), from.len(), "destination matched twice");
        assert_eq!(to.len() - matches.len(), to.len() - from.len());
    }

    #[test]
    fn test_greedy_match_tie_break_prefers_scan_order() {
        let from = [Point { x: 0, y: 0 }];
        let to = [Point { x: 1, y: 0 }, Point { x: 0, y: 1 }];
        let mut matches = MatchList::new();
        greedy_match(&from, &to, &mut matches);
        assert_eq!(&matches[..], &[0]);

        let to = [Point { x: 5, y: 5 }, Point { x: 0, y: 0 }];
        greedy_match(&from, &to, &mut matches);
        assert_eq!(&matches[..], &[1]);
    }

    #[test]
    fn test_particle_endpoints_land_on_the_glyphs() {
        let from = make_digit(1);
        let to = make_digit(8);

        let mut start = Fb::new();
        MorphStyle::Particle.render(&mut start, &from, &to, 0, STEPS, 0, 0);
        assert_eq!(start.rows(), static_render(1).rows());

        let mut end = Fb::new();
        MorphStyle::Particle.render(&mut end, &from, &to, STEPS, STEPS, 0, 0);
        assert_eq!(end.rows(), static_render(8).rows());
    }

    #[test]
    fn test_particle_midpoint_mixes_full_and_faded_cells() {
        let mut fb = Fb::new();
        MorphStyle::Particle.render(&mut fb, &make_digit(1), &make_digit(8), 10, STEPS, 0, 0);

        let mut gliding = 0;
        let mut fading = 0;
        for y in 0..32 {
            for x in 0..16 {
                match fb.get(x, y) {
                    255 => gliding += 1,
                    127 => fading += 1,
                    0 => {}
                    other => panic!("unexpected intensity {other}"),
                }
            }
        }
        assert!(gliding > 0, "matched particles draw at full intensity");
        assert!(fading > 0, "surplus destination cells fade in");
    }

    #[test]
    fn test_spawn_starts_invisible_and_ends_static() {
        let to = make_digit(7);

        let mut start = Fb::new();
        MorphStyle::Spawn.render(&mut start, &make_digit(1), &to, 0, STEPS, 0, 0);
        assert_eq!(start.rows(), Fb::new().rows());

        let mut end = Fb::new();
        MorphStyle::Spawn.render(&mut end, &make_digit(1), &to, STEPS, STEPS, 0, 0);
        assert_eq!(end.rows(), static_render(7).rows());
    }

    #[test]
    fn test_spawn_midstep_fades_in_around_the_centre() {
        let to = make_digit(7);
        let mut fb = Fb::new();
        MorphStyle::Spawn.render(&mut fb, &make_digit(1), &to, 10, STEPS, 0, 0);

        let mut lit = 0;
        for y in 0..32 {
            for x in 0..16 {
                let value = fb.get(x, y);
                assert!(value == 0 || value == 127, "spawn opacity is uniform");
                if value > 0 {
                    assert!(x < 9, "cells stay inside the glyph box");
                    lit += 1;
                }
            }
        }
        assert!(lit > 0);
    }

    #[test]
    fn test_morph_style_names_round_trip() {
        for style in [MorphStyle::Crossfade, MorphStyle::Particle, MorphStyle::Spawn] {
            assert_eq!(MorphStyle::parse_from_str(style.as_str()), Some(style));
            assert_eq!(MorphStyle::from_raw(style as u8), Some(style));
        }
        assert_eq!(MorphStyle::parse_from_str("wobble"), None);
        assert_eq!(MorphStyle::from_raw(9), None);
    }
}
