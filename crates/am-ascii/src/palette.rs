//! Character palette: raw glyph brightness buckets plus a derived index of
//! brightness normalized to [0, 1] over the palette's current extremes.
//!
//! The raw buckets are authoritative. The normalized index is always
//! rebuildable from them; any mutation that moves or may move the
//! `(min, max)` bounds rebuilds it before the next query.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use crate::glyph;

/// Totally ordered brightness, usable as a `BTreeMap` key.
#[derive(Clone, Copy, Debug)]
pub struct BrightnessKey(pub f64);

impl BrightnessKey {
    /// Underlying value.
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl PartialEq for BrightnessKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BrightnessKey {}

impl PartialOrd for BrightnessKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BrightnessKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

type Buckets = BTreeMap<BrightnessKey, BTreeSet<char>>;

/// `(raw - min) / (max - min)`, or 0 when the palette has one distinct value.
#[inline]
fn normalize(raw: f64, min: f64, max: f64) -> f64 {
    if max > min {
        (raw - min) / (max - min)
    } else {
        0.0
    }
}

fn insert_into(buckets: &mut Buckets, key: f64, c: char) {
    buckets.entry(BrightnessKey(key)).or_default().insert(c);
}

fn remove_from(buckets: &mut Buckets, key: f64, c: char) {
    let key = BrightnessKey(key);
    if let Some(chars) = buckets.get_mut(&key) {
        chars.remove(&c);
        if chars.is_empty() {
            buckets.remove(&key);
        }
    }
}

/// The matching engine: active characters and their brightness indexes.
///
/// # Example
/// ```
/// use am_ascii::palette::CharacterPalette;
/// let palette = CharacterPalette::new([' ', '@']);
/// assert_eq!(palette.character_for(0.0), Some(' '));
/// assert_eq!(palette.character_for(1.0), Some('@'));
/// assert_eq!(palette.closest_keys(0.3), (Some(0.0), Some(1.0)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct CharacterPalette {
    members: BTreeSet<char>,
    /// Raw glyph brightness → characters. Source of truth.
    raw: Buckets,
    /// Normalized brightness → characters. Derived from `raw` and `bounds`.
    normalized: Buckets,
    /// (min, max) raw brightness; `None` while empty.
    bounds: Option<(f64, f64)>,
}

impl CharacterPalette {
    /// Build a palette from `initial`, then normalize once.
    ///
    /// Duplicates are ignored. An empty input yields an empty palette whose
    /// queries return `None`.
    #[must_use]
    pub fn new(initial: impl IntoIterator<Item = char>) -> Self {
        let mut palette = Self::default();
        for c in initial {
            if palette.members.insert(c) {
                insert_into(&mut palette.raw, glyph::brightness(c), c);
            }
        }
        palette.rebuild();
        palette
    }

    /// Add `c`. Returns `false` (no-op) if it is already present.
    ///
    /// A brightness inside the current bounds inserts a single normalized
    /// key; one outside them triggers a full rebuild.
    ///
    /// # Example
    /// ```
    /// use am_ascii::palette::CharacterPalette;
    /// let mut palette = CharacterPalette::new(['.']);
    /// assert!(palette.add('#'));
    /// assert!(!palette.add('#'));
    /// assert_eq!(palette.snapshot(), vec!['#', '.']);
    /// ```
    pub fn add(&mut self, c: char) -> bool {
        if !self.members.insert(c) {
            return false;
        }
        let raw = glyph::brightness(c);
        insert_into(&mut self.raw, raw, c);
        match self.bounds {
            Some((min, max)) if min <= raw && raw <= max => {
                insert_into(&mut self.normalized, normalize(raw, min, max), c);
                log::debug!("Ajout {c:?} (brut {raw:.4}) dans les bornes");
            }
            _ => {
                log::debug!("Ajout {c:?} (brut {raw:.4}) hors bornes → reconstruction");
                self.rebuild();
            }
        }
        true
    }

    /// Remove `c`. Returns `false` (no-op) if it is absent.
    ///
    /// A brightness strictly inside the bounds prunes a single normalized
    /// key; one on a bound triggers a full rebuild with recomputed bounds.
    ///
    /// # Example
    /// ```
    /// use am_ascii::palette::CharacterPalette;
    /// let mut palette = CharacterPalette::new(['.', '#']);
    /// assert!(palette.remove('#'));
    /// assert!(!palette.remove('#'));
    /// assert_eq!(palette.snapshot(), vec!['.']);
    /// ```
    pub fn remove(&mut self, c: char) -> bool {
        if !self.members.remove(&c) {
            return false;
        }
        let raw = glyph::brightness(c);
        remove_from(&mut self.raw, raw, c);
        match self.bounds {
            Some((min, max)) if min < raw && raw < max => {
                remove_from(&mut self.normalized, normalize(raw, min, max), c);
                log::debug!("Retrait {c:?} (brut {raw:.4}) intérieur");
            }
            _ => {
                log::debug!("Retrait {c:?} (brut {raw:.4}) sur une borne → reconstruction");
                self.rebuild();
            }
        }
        true
    }

    /// Recompute bounds and every normalized key from the raw buckets.
    fn rebuild(&mut self) {
        self.normalized.clear();
        self.bounds = match (self.raw.first_key_value(), self.raw.last_key_value()) {
            (Some((min, _)), Some((max, _))) => Some((min.value(), max.value())),
            _ => None,
        };
        let Some((min, max)) = self.bounds else {
            return;
        };
        for (raw, chars) in &self.raw {
            self.normalized
                .entry(BrightnessKey(normalize(raw.value(), min, max)))
                .or_default()
                .extend(chars.iter().copied());
        }
    }

    /// Greatest key ≤ `value` and smallest key ≥ `value`, independently.
    ///
    /// Both are `None` on an empty palette; one side is `None` when `value`
    /// lies beyond every key on that side.
    ///
    /// # Example
    /// ```
    /// use am_ascii::palette::CharacterPalette;
    /// let palette = CharacterPalette::new([' ', '@']);
    /// assert_eq!(palette.closest_keys(1.0), (Some(1.0), Some(1.0)));
    /// assert_eq!(palette.closest_keys(1.5), (Some(1.0), None));
    /// assert_eq!(CharacterPalette::default().closest_keys(0.5), (None, None));
    /// ```
    #[must_use]
    pub fn closest_keys(&self, value: f64) -> (Option<f64>, Option<f64>) {
        let probe = BrightnessKey(value);
        let lower = self.normalized.range(..=probe).next_back();
        let upper = self.normalized.range(probe..).next();
        (lower.map(|(k, _)| k.value()), upper.map(|(k, _)| k.value()))
    }

    /// Smallest-codepoint character registered under exactly `key`.
    #[must_use]
    pub fn character_for(&self, key: f64) -> Option<char> {
        self.normalized
            .get(&BrightnessKey(key))
            .and_then(|chars| chars.first().copied())
    }

    /// Current members, ascending codepoint order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<char> {
        self.members.iter().copied().collect()
    }

    /// Current (min, max) raw brightness, `None` while empty.
    #[must_use]
    pub fn bounds(&self) -> Option<(f64, f64)> {
        self.bounds
    }

    /// Normalized keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = f64> + '_ {
        self.normalized.keys().map(|k| k.value())
    }

    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.members.contains(&c)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
