//! Static catalog of every asset a run produces
//!
//! 52 faces (suit-major, rank-ascending), then the card back and the table.
//! File names are part of the contract with the game that loads them.

use crate::constants::*;
use image::Rgb;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Single-letter code used in file names
    pub fn code(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
            Suit::Spades => "Spades",
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    }

    pub fn color(self) -> Rgb<u8> {
        match self {
            Suit::Hearts => HEARTS_COLOR,
            Suit::Diamonds => DIAMONDS_COLOR,
            Suit::Clubs => CLUBS_COLOR,
            Suit::Spades => SPADES_COLOR,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Text drawn on the card and used in file names
    pub fn code(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Rank::Two => "Two",
            Rank::Three => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        }
    }
}

/// One output image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetDescriptor {
    Face { suit: Suit, rank: Rank },
    Back,
    Table,
}

impl AssetDescriptor {
    /// File name inside the output directory, e.g. `H10.png`
    pub fn file_name(&self) -> String {
        match self {
            AssetDescriptor::Face { suit, rank } => format!("{}{}.png", suit.code(), rank.code()),
            AssetDescriptor::Back => CARD_BACK_FILE.to_string(),
            AssetDescriptor::Table => TABLE_FILE.to_string(),
        }
    }

    /// Pixel dimensions (width, height) of the rendered image
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            AssetDescriptor::Face { .. } | AssetDescriptor::Back => (CARD_WIDTH, CARD_HEIGHT),
            AssetDescriptor::Table => (TABLE_WIDTH, TABLE_HEIGHT),
        }
    }

    pub fn is_face(&self) -> bool {
        matches!(self, AssetDescriptor::Face { .. })
    }

    /// Suit of a face; `None` for the back and the table
    pub fn suit(&self) -> Option<Suit> {
        match self {
            AssetDescriptor::Face { suit, .. } => Some(*suit),
            AssetDescriptor::Back | AssetDescriptor::Table => None,
        }
    }
}

impl fmt::Display for AssetDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetDescriptor::Face { suit, rank } => write!(f, "{} of {}", rank.name(), suit.name()),
            AssetDescriptor::Back => write!(f, "card back"),
            AssetDescriptor::Table => write!(f, "table background"),
        }
    }
}

/// Faces of one suit in rank order
pub fn suit_faces(suit: Suit) -> impl Iterator<Item = AssetDescriptor> {
    Rank::ALL
        .into_iter()
        .map(move |rank| AssetDescriptor::Face { suit, rank })
}

/// All 52 faces, suit-major then rank-ascending
pub fn faces() -> impl Iterator<Item = AssetDescriptor> {
    Suit::ALL.into_iter().flat_map(suit_faces)
}

/// Full catalog: faces, then back, then table
pub fn all() -> Vec<AssetDescriptor> {
    faces()
        .chain([AssetDescriptor::Back, AssetDescriptor::Table])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_54_entries_in_order() {
        let all = all();
        assert_eq!(all.len(), 54);
        assert_eq!(
            all[0],
            AssetDescriptor::Face {
                suit: Suit::Hearts,
                rank: Rank::Two
            }
        );
        assert_eq!(
            all[12],
            AssetDescriptor::Face {
                suit: Suit::Hearts,
                rank: Rank::Ace
            }
        );
        assert_eq!(
            all[13],
            AssetDescriptor::Face {
                suit: Suit::Diamonds,
                rank: Rank::Two
            }
        );
        assert_eq!(all[52], AssetDescriptor::Back);
        assert_eq!(all[53], AssetDescriptor::Table);
    }

    #[test]
    fn file_names_are_unique() {
        let names: HashSet<String> = all().iter().map(|a| a.file_name()).collect();
        assert_eq!(names.len(), 54);
    }

    #[test]
    fn file_names_follow_naming_scheme() {
        let ten_of_hearts = AssetDescriptor::Face {
            suit: Suit::Hearts,
            rank: Rank::Ten,
        };
        assert_eq!(ten_of_hearts.file_name(), "H10.png");

        let ace_of_spades = AssetDescriptor::Face {
            suit: Suit::Spades,
            rank: Rank::Ace,
        };
        assert_eq!(ace_of_spades.file_name(), "SA.png");
        assert_eq!(AssetDescriptor::Back.file_name(), "card_back.png");
        assert_eq!(AssetDescriptor::Table.file_name(), "table.png");

        for face in faces() {
            let name = face.file_name();
            let stem = name.strip_suffix(".png").expect("png suffix");
            assert!(matches!(&stem[..1], "H" | "D" | "C" | "S"), "{}", name);
            assert!(
                Rank::ALL.iter().any(|r| r.code() == &stem[1..]),
                "bad rank in {}",
                name
            );
        }
    }

    #[test]
    fn dimensions_per_asset_class() {
        assert_eq!(AssetDescriptor::Back.dimensions(), (80, 120));
        assert_eq!(AssetDescriptor::Table.dimensions(), (1024, 768));
        assert!(faces().all(|f| f.dimensions() == (80, 120)));
    }

    #[test]
    fn display_names_faces() {
        let face = AssetDescriptor::Face {
            suit: Suit::Clubs,
            rank: Rank::Queen,
        };
        assert_eq!(face.to_string(), "Queen of Clubs");
    }

    #[test]
    fn only_faces_carry_a_suit() {
        assert!(faces().all(|f| f.is_face() && f.suit().is_some()));
        assert_eq!(AssetDescriptor::Back.suit(), None);
        assert!(!AssetDescriptor::Table.is_face());
        let spades = suit_faces(Suit::Spades).filter(|f| f.suit() == Some(Suit::Spades));
        assert_eq!(spades.count(), 13);
    }
}
