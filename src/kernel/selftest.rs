//! # Boot Self-Test
//!
//! Checks the effect core on the real machine before the frame loop starts.
//!
//! - `test_sine_table()`: quadrant values, antisymmetry, libm regeneration
//! - `test_plasma_golden()`: first two frames of the plasma at pixel (0,0)
//! - `test_rainbow_cycle()`: palette order of the solid fill
//!
//! Each test prints `✓` / `✗` lines over serial and returns whether it
//! passed; a failure is reported but does not stop the boot.

use core::sync::atomic::{AtomicUsize, Ordering};

use northern_lights::fx::{sine, Effect, Plasma, SineTable, SolidFill};
use northern_lights::Color565;

use crate::println;

static TEST_FAILURES: AtomicUsize = AtomicUsize::new(0);

fn check(name: &str, ok: bool) -> bool {
    if ok {
        println!("    ✓ {}", name);
    } else {
        TEST_FAILURES.fetch_add(1, Ordering::Relaxed);
        println!("    ✗ {}", name);
    }
    ok
}

pub fn test_sine_table() -> bool {
    println!("TEST_SINE: fixed-point table");
    let table = SineTable::builtin();
    let quadrants = sine(0) == 0 && sine(64) == 127 && sine(128) == 0 && sine(192) == -127;
    check("quadrant values", quadrants)
        & check("antisymmetric about 128", table.is_antisymmetric())
        & check("zero mean", table.sum() == 0)
        & check("matches libm", SineTable::computed() == table)
}

pub fn test_plasma_golden() -> bool {
    println!("TEST_PLASMA: golden pixels");
    let mut plasma = Plasma::default();
    let first = plasma.pixel(0, 0);
    plasma.advance();
    let second = plasma.pixel(0, 0);
    check("frame 0 pixel (0,0) == 0x2B2A", first == Color565::from_raw(0x2B2A))
        & check("frame 1 pixel (0,0) == 0x436A", second == Color565::from_raw(0x436A))
}

pub fn test_rainbow_cycle() -> bool {
    println!("TEST_RAINBOW: palette order");
    let mut fill = SolidFill::rainbow();
    let mut in_order = true;
    for k in 0..16 {
        in_order &= fill.pixel(0, 0) == Color565::RAINBOW[k % Color565::RAINBOW.len()];
        fill.advance();
    }
    check("frame k shows palette[k mod 8]", in_order)
}

/// Run everything; returns the number of failed checks
pub fn test_all() -> usize {
    println!("=== RUNNING SELF-TEST ===");
    test_sine_table();
    test_plasma_golden();
    test_rainbow_cycle();
    let failures = TEST_FAILURES.load(Ordering::Relaxed);
    println!("=== SELF-TEST COMPLETE ({} failed) ===\n", failures);
    failures
}
