//! Fixed-point sine lookup.
//!
//! One period of `127 * sin(2π·i/256)` truncated toward zero, so the table is
//! exactly antisymmetric about index 128 and sums to zero. Index 64 holds the
//! only 127; every other positive entry is at most 126.

/// Table length; lookups wrap modulo this.
pub const PERIOD: usize = 256;

/// Peak amplitude of the table.
pub const AMPLITUDE: i8 = 127;

#[rustfmt::skip]
pub const SIN_TABLE: [i8; PERIOD] = [
       0,    3,    6,    9,   12,   15,   18,   21,
      24,   27,   30,   33,   36,   39,   42,   45,
      48,   51,   54,   57,   59,   62,   65,   67,
      70,   73,   75,   78,   80,   82,   85,   87,
      89,   91,   94,   96,   98,  100,  102,  103,
     105,  107,  108,  110,  112,  113,  114,  116,
     117,  118,  119,  120,  121,  122,  123,  123,
     124,  125,  125,  126,  126,  126,  126,  126,
     127,  126,  126,  126,  126,  126,  125,  125,
     124,  123,  123,  122,  121,  120,  119,  118,
     117,  116,  114,  113,  112,  110,  108,  107,
     105,  103,  102,  100,   98,   96,   94,   91,
      89,   87,   85,   82,   80,   78,   75,   73,
      70,   67,   65,   62,   59,   57,   54,   51,
      48,   45,   42,   39,   36,   33,   30,   27,
      24,   21,   18,   15,   12,    9,    6,    3,
       0,   -3,   -6,   -9,  -12,  -15,  -18,  -21,
     -24,  -27,  -30,  -33,  -36,  -39,  -42,  -45,
     -48,  -51,  -54,  -57,  -59,  -62,  -65,  -67,
     -70,  -73,  -75,  -78,  -80,  -82,  -85,  -87,
     -89,  -91,  -94,  -96,  -98, -100, -102, -103,
    -105, -107, -108, -110, -112, -113, -114, -116,
    -117, -118, -119, -120, -121, -122, -123, -123,
    -124, -125, -125, -126, -126, -126, -126, -126,
    -127, -126, -126, -126, -126, -126, -125, -125,
    -124, -123, -123, -122, -121, -120, -119, -118,
    -117, -116, -114, -113, -112, -110, -108, -107,
    -105, -103, -102, -100,  -98,  -96,  -94,  -91,
     -89,  -87,  -85,  -82,  -80,  -78,  -75,  -73,
     -70,  -67,  -65,  -62,  -59,  -57,  -54,  -51,
     -48,  -45,  -42,  -39,  -36,  -33,  -30,  -27,
     -24,  -21,  -18,  -15,  -12,   -9,   -6,   -3,
];

/// Sine of `phase` in table units (256 per turn).
///
/// Only the low 8 bits of the two's-complement phase are used, so negative
/// phases wrap to the same place as their positive counterparts.
#[inline]
pub const fn sine(phase: i64) -> i8 {
    SIN_TABLE[(phase & 0xff) as usize]
}

/// A sine table held by value, for callers that want to check or swap it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SineTable {
    entries: [i8; PERIOD],
}

impl SineTable {
    pub const fn builtin() -> Self {
        Self { entries: SIN_TABLE }
    }

    /// Recompute the table with `libm`, truncating toward zero.
    pub fn computed() -> Self {
        let mut entries = [0i8; PERIOD];
        for (i, entry) in entries.iter_mut().enumerate() {
            let angle = i as f64 * core::f64::consts::PI / (PERIOD as f64 / 2.0);
            *entry = (libm::sin(angle) * AMPLITUDE as f64) as i8;
        }
        Self { entries }
    }

    #[inline]
    pub const fn lookup(&self, phase: i64) -> i8 {
        self.entries[(phase & 0xff) as usize]
    }

    pub fn entries(&self) -> &[i8; PERIOD] {
        &self.entries
    }

    /// `t[i + 128] == -t[i]` for the whole first half.
    pub fn is_antisymmetric(&self) -> bool {
        let (rising, falling) = self.entries.split_at(PERIOD / 2);
        rising.iter().zip(falling).all(|(a, b)| *b == -*a)
    }

    pub fn sum(&self) -> i32 {
        self.entries.iter().map(|&v| v as i32).sum()
    }
}

impl Default for SineTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quadrant_values() {
        assert_eq!(sine(0), 0);
        assert_eq!(sine(64), 127);
        assert_eq!(sine(128), 0);
        assert_eq!(sine(192), -127);
    }

    #[test]
    fn peak_is_unique() {
        let peaks = SIN_TABLE.iter().filter(|&&v| v == AMPLITUDE).count();
        assert_eq!(peaks, 1);
        assert!(SIN_TABLE.iter().all(|&v| v >= -AMPLITUDE));
    }

    #[test]
    fn negative_phases_wrap() {
        assert_eq!(sine(-1), SIN_TABLE[255]);
        assert_eq!(sine(-1), -3);
        assert_eq!(sine(-64), -127);
        assert_eq!(sine(-256), 0);
        assert_eq!(sine(i64::MIN), 0);
    }

    #[test]
    fn builtin_is_antisymmetric_with_zero_mean() {
        let table = SineTable::builtin();
        assert!(table.is_antisymmetric());
        assert_eq!(table.sum(), 0);
    }

    #[test]
    fn libm_regenerates_the_builtin_table() {
        let computed = SineTable::computed();
        assert_eq!(computed, SineTable::builtin());
        assert_eq!(computed.entries()[64], AMPLITUDE);
        assert_eq!(computed.entries(), &SIN_TABLE);
    }

    #[test]
    fn lookup_matches_free_function() {
        let table = SineTable::default();
        for phase in -600..600 {
            assert_eq!(table.lookup(phase), sine(phase));
        }
    }
}
