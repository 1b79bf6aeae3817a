//! Property-based invariants for the codec, decoder, rasterizer and playback.

use proptest::prelude::*;
use rip_raster::base36;
use rip_raster::{decode, decode_with_stats, Command, FloodFill, RenderingBuffer, Scheduler, Step};

fn coord() -> impl Strategy<Value = i32> {
    0i32..=1295
}

fn shape_strategy() -> impl Strategy<Value = Command> {
    prop_oneof![
        (coord(), coord(), coord(), coord(), 0u8..36).prop_map(|(x0, y0, x1, y1, color)| {
            Command::Line {
                x0,
                y0,
                x1,
                y1,
                color,
            }
        }),
        (coord(), coord(), coord(), coord(), 0u8..36).prop_map(|(x0, y0, x1, y1, color)| {
            Command::FillRect {
                x0,
                y0,
                x1,
                y1,
                color,
            }
        }),
        (coord(), coord(), coord(), 0u8..16)
            .prop_map(|(cx, cy, r, color)| Command::Circle { cx, cy, r, color }),
        (coord(), coord(), 0i32..200, 0i32..200, 0u8..16).prop_map(|(cx, cy, rx, ry, color)| {
            Command::Ellipse {
                cx,
                cy,
                start_angle: 0,
                end_angle: 360,
                rx,
                ry,
                color,
            }
        }),
        (coord(), coord(), 0u8..16).prop_map(|(x, y, fill_color)| Command::FloodFill {
            x,
            y,
            border: 0,
            fill_color,
        }),
        Just(Command::Reset),
    ]
}

proptest! {
    #[test]
    fn coordinate_tokens_round_trip(n in 0u32..=base36::MAX_COORD) {
        let token = base36::encode_coord(n).unwrap();
        prop_assert_eq!(token.len(), 2);
        prop_assert_eq!(base36::decode_str(&token), n);
    }
}

proptest! {
    #[test]
    fn decoder_never_panics(text in "[|!*cLRBCOXmlPSFw0-9A-Za-z \n#/]{0,200}") {
        let (cmds, stats) = decode_with_stats(&text);
        prop_assert_eq!(cmds.len(), stats.emitted);
    }
}

proptest! {
    #[test]
    fn decoding_is_deterministic(text in "[|cLXml0-9A-F]{0,80}") {
        prop_assert_eq!(decode(&text), decode(&text));
    }
}

proptest! {
    #[test]
    fn shapes_clip_to_small_surface(cmds in prop::collection::vec(shape_strategy(), 1..8)) {
        let n = cmds.len();
        let mut pb = Scheduler::new().start(cmds, 48, 32).unwrap();
        let mut progress = Vec::new();
        let last = pb.run(|_| {}, |p| progress.push(p));
        prop_assert_eq!(last, Step::Finished { progress: 100 });
        prop_assert_eq!(progress.len(), n);
        prop_assert!(progress.windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(pb.surface().as_bytes().len(), 48 * 32 * 4);
    }
}

proptest! {
    #[test]
    fn flood_fill_writes_within_surface(x in -4i32..20, y in -4i32..20) {
        let mut buf = RenderingBuffer::new(16, 16).unwrap();
        let stats = FloodFill::default().fill(&mut buf, x, y, rip_raster::Rgba8::WHITE);
        let inside = (0..16).contains(&x) && (0..16).contains(&y);
        prop_assert_eq!(stats.written, if inside { 256 } else { 0 });
        prop_assert!(!stats.truncated);
    }
}
