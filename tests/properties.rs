use northern_lights::fx::sine::{sine, SIN_TABLE};
use northern_lights::fx::{Channels, Effect, Plasma, PlasmaParams, SolidFill};
use northern_lights::Color565;
use proptest::prelude::*;

fn params() -> impl Strategy<Value = PlasmaParams> {
    (any::<[u32; 3]>(), 0u32..64, 0u32..64, 0u32..64).prop_map(|(start, rs, gs, bs)| PlasmaParams {
        start: Channels::new(start[0], start[1], start[2]),
        scale: Channels::new(rs, gs, bs),
        ..PlasmaParams::NORTHERN_LIGHTS
    })
}

proptest! {
    #[test]
    fn sine_is_periodic(phase in any::<i32>()) {
        let p = i64::from(phase);
        prop_assert_eq!(sine(p), sine(p + 256));
        prop_assert_eq!(sine(p), sine(p - 256));
    }

    #[test]
    fn sine_is_antisymmetric(i in 0i64..128) {
        prop_assert_eq!(sine(i + 128), -sine(i));
    }

    #[test]
    fn sine_stays_in_range(phase in any::<i64>()) {
        let v = sine(phase);
        prop_assert!((-127..=127).contains(&v));
        prop_assert_eq!(v, SIN_TABLE[phase.rem_euclid(256) as usize]);
    }

    #[test]
    fn plasma_fields_do_not_bleed(params in params(), x in 0u32..1024, y in 0u32..1024) {
        let plasma = Plasma::new(params);
        let c = plasma.color_at(x, y);
        let (r, g, b) = (c.r() as u16, c.g() as u16, c.b() as u16);
        prop_assert!(r < 32 && g < 64 && b < 32);
        prop_assert_eq!(Color565::pack(r, g, b), c);

        // each field equals the masked channel result on its own
        let Channels { red, green, blue } = params.scale;
        prop_assert_eq!(r, plasma.channel(params.start.red, red, x, y) as u16 & 0x1F);
        prop_assert_eq!(g, plasma.channel(params.start.green, green, x, y) as u16 & 0x3F);
        prop_assert_eq!(b, plasma.channel(params.start.blue, blue, x, y) as u16 & 0x1F);
    }

    #[test]
    fn plasma_is_deterministic(params in params(), x in 0u32..64, y in 0u32..64) {
        let a = Plasma::new(params);
        let b = Plasma::new(params);
        prop_assert_eq!(a.pixel(x, y), b.pixel(x, y));
        prop_assert_eq!(a.pixel(x, y), a.pixel(x, y));
    }

    #[test]
    fn phase_advance_is_exact(params in params(), frames in 1u32..500) {
        let mut plasma = Plasma::new(params);
        for _ in 0..frames {
            plasma.advance();
        }
        let phase = plasma.phase();
        prop_assert_eq!(phase.red, params.start.red.wrapping_add(11u32.wrapping_mul(frames)));
        prop_assert_eq!(phase.green, params.start.green.wrapping_add(7u32.wrapping_mul(frames)));
        prop_assert_eq!(phase.blue, params.start.blue.wrapping_add(5u32.wrapping_mul(frames)));
    }

    #[test]
    fn solid_fill_follows_the_counter(frames in 0usize..64) {
        let mut fill = SolidFill::rainbow();
        for _ in 0..frames {
            fill.advance();
        }
        prop_assert_eq!(fill.pixel(3, 7), Color565::RAINBOW[frames % 8]);
    }
}
