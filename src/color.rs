#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Blue,
    Black,
    Red,
    Green,
}

impl Color {
    pub const ALL: [Color; 5] = [
        Color::White,
        Color::Blue,
        Color::Black,
        Color::Red,
        Color::Green,
    ];

    /// The letter used in WUBRG notation.
    pub const fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Blue => 'U',
            Color::Black => 'B',
            Color::Red => 'R',
            Color::Green => 'G',
        }
    }

    /// Parses a single WUBRG letter, case-insensitive.
    pub const fn from_letter(letter: char) -> Option<Color> {
        match letter {
            'W' | 'w' => Some(Color::White),
            'U' | 'u' => Some(Color::Blue),
            'B' | 'b' => Some(Color::Black),
            'R' | 'r' => Some(Color::Red),
            'G' | 'g' => Some(Color::Green),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Blue => "Blue",
            Color::Black => "Black",
            Color::Red => "Red",
            Color::Green => "Green",
        }
    }
}

/// A set of colors represented as bitflags for efficient operations.
///
/// Color identity text like `"WUB"` canonicalizes through this type:
/// parsing ignores unknown characters and collapses duplicates, and
/// [`ColorSet::wubrg`] always emits uppercase letters in WUBRG order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorSet(u8);

impl ColorSet {
    pub const COLORLESS: Self = Self(0);
    pub const WHITE: Self = Self(1 << 0);
    pub const BLUE: Self = Self(1 << 1);
    pub const BLACK: Self = Self(1 << 2);
    pub const RED: Self = Self(1 << 3);
    pub const GREEN: Self = Self(1 << 4);
    pub const ALL: Self = Self(0b1_1111);

    /// Creates a new empty ColorSet.
    pub const fn new() -> Self {
        Self(0)
    }

    /// Creates a ColorSet from a single color.
    pub const fn from_color(color: Color) -> Self {
        match color {
            Color::White => Self::WHITE,
            Color::Blue => Self::BLUE,
            Color::Black => Self::BLACK,
            Color::Red => Self::RED,
            Color::Green => Self::GREEN,
        }
    }

    /// Parses WUBRG notation. Characters outside `WUBRGwubrg` are ignored
    /// and repeated letters collapse, so any user-typed color string
    /// canonicalizes to a set.
    pub fn parse(text: &str) -> Self {
        text.chars()
            .filter_map(Color::from_letter)
            .fold(Self::COLORLESS, |set, color| set.with(color))
    }

    /// The canonical WUBRG string for this set, uppercase, in WUBRG order.
    pub fn wubrg(self) -> String {
        Color::ALL
            .iter()
            .filter(|&&color| self.contains(color))
            .map(|&color| color.letter())
            .collect()
    }

    /// User-facing name: "Colorless", a single color name, "All Colors",
    /// or "Multicolor (XY)".
    pub fn display_name(self) -> String {
        if self.is_empty() {
            return "Colorless".to_string();
        }
        if self == Self::ALL {
            return "All Colors".to_string();
        }
        if self.count() == 1 {
            for color in Color::ALL {
                if self.contains(color) {
                    return color.name().to_string();
                }
            }
        }
        format!("Multicolor ({})", self.wubrg())
    }

    /// Returns true if this set contains no colors.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns true if this set contains the given color.
    pub const fn contains(self, color: Color) -> bool {
        self.0 & Self::from_color(color).0 != 0
    }

    /// Returns true if this set contains all colors in the other set.
    pub const fn contains_all(self, other: ColorSet) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns the union of two color sets.
    pub const fn union(self, other: ColorSet) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns the intersection of two color sets.
    pub const fn intersection(self, other: ColorSet) -> Self {
        Self(self.0 & other.0)
    }

    /// Returns the number of colors in this set.
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Adds a color to this set, returning the new set.
    pub const fn with(self, color: Color) -> Self {
        self.union(Self::from_color(color))
    }

    /// Removes a color from this set, returning the new set.
    pub const fn without(self, color: Color) -> Self {
        Self(self.0 & !Self::from_color(color).0)
    }
}

impl From<Color> for ColorSet {
    fn from(color: Color) -> Self {
        Self::from_color(color)
    }
}

impl FromIterator<Color> for ColorSet {
    fn from_iter<T: IntoIterator<Item = Color>>(iter: T) -> Self {
        iter.into_iter()
            .fold(ColorSet::COLORLESS, |set, color| set.with(color))
    }
}

impl std::fmt::Display for ColorSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.wubrg())
    }
}

// Color identity serializes as its canonical WUBRG string so persisted
// state and catalog files stay readable.
#[cfg(feature = "serialization")]
impl serde::Serialize for ColorSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.wubrg())
    }
}

#[cfg(feature = "serialization")]
impl<'de> serde::Deserialize<'de> for ColorSet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(ColorSet::parse(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_set_empty() {
        let set = ColorSet::new();
        assert!(set.is_empty());
        assert_eq!(set.count(), 0);
        assert_eq!(set.wubrg(), "");
    }

    #[test]
    fn test_parse_canonicalizes_case_and_order() {
        let set = ColorSet::parse("gbw");
        assert_eq!(set.wubrg(), "WBG");
        assert!(set.contains(Color::White));
        assert!(set.contains(Color::Black));
        assert!(set.contains(Color::Green));
        assert!(!set.contains(Color::Blue));
    }

    #[test]
    fn test_parse_ignores_junk_and_duplicates() {
        let set = ColorSet::parse("W/W, u!!u");
        assert_eq!(set.wubrg(), "WU");
        assert_eq!(set.count(), 2);
    }

    #[test]
    fn test_parse_round_trips_canonical_form() {
        let set = ColorSet::parse("WUBRG");
        assert_eq!(set, ColorSet::ALL);
        assert_eq!(ColorSet::parse(&set.wubrg()), set);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(ColorSet::COLORLESS.display_name(), "Colorless");
        assert_eq!(ColorSet::BLUE.display_name(), "Blue");
        assert_eq!(ColorSet::ALL.display_name(), "All Colors");
        assert_eq!(
            ColorSet::WHITE.union(ColorSet::RED).display_name(),
            "Multicolor (WR)"
        );
    }

    #[test]
    fn test_color_set_union_intersection() {
        let azorius = ColorSet::WHITE.union(ColorSet::BLUE);
        let boros = ColorSet::WHITE.union(ColorSet::RED);
        assert_eq!(azorius.intersection(boros), ColorSet::WHITE);
        assert!(azorius.contains_all(ColorSet::WHITE));
        assert!(!azorius.contains_all(boros));
    }

    #[test]
    fn test_color_set_with_without() {
        let set = ColorSet::new().with(Color::Green).with(Color::White);
        assert_eq!(set.count(), 2);

        let set = set.without(Color::Green);
        assert!(set.contains(Color::White));
        assert!(!set.contains(Color::Green));
    }

    #[test]
    fn test_color_set_from_iter() {
        let set: ColorSet = [Color::White, Color::Blue, Color::Black]
            .into_iter()
            .collect();
        assert_eq!(set.wubrg(), "WUB");
    }
}
