use am_core::config::RoundingMode;

use crate::palette::CharacterPalette;

/// Pick one of the candidate keys bracketing `value` according to `mode`.
///
/// `None` only when both candidates are absent.
///
/// # Example
/// ```
/// use am_ascii::rounding::select;
/// use am_core::config::RoundingMode;
/// let keys = (Some(0.2), Some(0.8));
/// assert_eq!(select(RoundingMode::Floor, keys, 0.7), Some(0.2));
/// assert_eq!(select(RoundingMode::Ceiling, keys, 0.3), Some(0.8));
/// assert_eq!(select(RoundingMode::Nearest, keys, 0.7), Some(0.8));
/// ```
#[must_use]
pub fn select(mode: RoundingMode, keys: (Option<f64>, Option<f64>), value: f64) -> Option<f64> {
    match (mode, keys) {
        (RoundingMode::Floor, (lower, upper)) => lower.or(upper),
        (RoundingMode::Ceiling, (lower, upper)) => upper.or(lower),
        (RoundingMode::Nearest, (Some(lo), Some(hi))) => {
            // égalité : la clé basse l'emporte
            if value - lo <= hi - value {
                Some(lo)
            } else {
                Some(hi)
            }
        }
        (RoundingMode::Nearest, (lower, upper)) => lower.or(upper),
    }
}

/// Character matching `value` in `palette` under `mode`.
///
/// # Example
/// ```
/// use am_ascii::palette::CharacterPalette;
/// use am_ascii::rounding::char_for_brightness;
/// use am_core::config::RoundingMode;
/// let palette = CharacterPalette::new([' ', '@']);
/// assert_eq!(char_for_brightness(&palette, RoundingMode::Floor, 0.9), Some(' '));
/// assert_eq!(char_for_brightness(&palette, RoundingMode::Ceiling, 0.1), Some('@'));
/// ```
#[must_use]
pub fn char_for_brightness(
    palette: &CharacterPalette,
    mode: RoundingMode,
    value: f64,
) -> Option<char> {
    select(mode, palette.closest_keys(value), value).and_then(|key| palette.character_for(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [RoundingMode; 3] = [
        RoundingMode::Floor,
        RoundingMode::Ceiling,
        RoundingMode::Nearest,
    ];

    #[test]
    fn exact_match_wins_everywhere() {
        for mode in ALL {
            assert_eq!(select(mode, (Some(0.5), Some(0.5)), 0.5), Some(0.5));
        }
    }

    #[test]
    fn one_sided_falls_back() {
        for mode in ALL {
            assert_eq!(select(mode, (Some(0.4), None), 0.9), Some(0.4));
            assert_eq!(select(mode, (None, Some(0.6)), 0.1), Some(0.6));
            assert_eq!(select(mode, (None, None), 0.5), None);
        }
    }

    #[test]
    fn nearest_tie_goes_low() {
        assert_eq!(
            select(RoundingMode::Nearest, (Some(0.2), Some(0.8)), 0.5),
            Some(0.2)
        );
        assert_eq!(
            select(RoundingMode::Nearest, (Some(0.0), Some(1.0)), 0.5),
            Some(0.0)
        );
    }

    #[test]
    fn nearest_is_deterministic_on_float_ties() {
        let first = select(RoundingMode::Nearest, (Some(0.3), Some(0.5)), 0.4);
        for _ in 0..10 {
            assert_eq!(select(RoundingMode::Nearest, (Some(0.3), Some(0.5)), 0.4), first);
        }
        assert!(first == Some(0.3) || first == Some(0.5));
    }

    #[test]
    fn nearest_prefers_closer_key() {
        assert_eq!(
            select(RoundingMode::Nearest, (Some(0.2), Some(0.8)), 0.3),
            Some(0.2)
        );
        assert_eq!(
            select(RoundingMode::Nearest, (Some(0.2), Some(0.8)), 0.6),
            Some(0.8)
        );
    }

    #[test]
    fn empty_palette_yields_no_character() {
        let palette = CharacterPalette::default();
        for mode in ALL {
            assert_eq!(char_for_brightness(&palette, mode, 0.5), None);
        }
    }
}
