use bevy::prelude::*;
use rand::Rng;

/// Label shared by every physics body in the playfield: cannon, walls,
/// floor, targets, projectiles, and particles. The loss detector counts
/// these without distinguishing debris from anything else.
#[derive(Component)]
pub struct SimBody;

/// Immutable prize value assigned to a target at spawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prize {
    pub symbol: char,
    pub color: Color,
}

impl Prize {
    /// The fixed prize catalog targets draw from.
    pub fn catalog() -> [Prize; 4] {
        [
            Prize {
                symbol: '🌟',
                color: Color::srgb_u8(0xfb, 0xbf, 0x24),
            },
            Prize {
                symbol: '💎',
                color: Color::srgb_u8(0x60, 0xa5, 0xfa),
            },
            Prize {
                symbol: '🎈',
                color: Color::srgb_u8(0xef, 0x44, 0x44),
            },
            Prize {
                symbol: '🎯',
                color: Color::srgb_u8(0x10, 0xb9, 0x81),
            },
        ]
    }

    /// Uniform draw from the catalog.
    pub fn random<R: Rng>(rng: &mut R) -> Prize {
        let catalog = Self::catalog();
        catalog[rng.gen_range(0..catalog.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn catalog_symbols_are_distinct() {
        let catalog = Prize::catalog();
        for (i, a) in catalog.iter().enumerate() {
            for b in catalog.iter().skip(i + 1) {
                assert_ne!(a.symbol, b.symbol);
            }
        }
    }

    #[test]
    fn random_draw_stays_in_catalog() {
        let mut rng = Pcg32::seed_from_u64(11);
        let catalog = Prize::catalog();
        for _ in 0..64 {
            let p = Prize::random(&mut rng);
            assert!(catalog.iter().any(|c| c.symbol == p.symbol));
        }
    }
}
