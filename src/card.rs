//! Card types for the Hero and Thanos decks.

use core::fmt;

/// Highest value printed on any card (the Thanos card).
pub const MAX_CARD_VALUE: u8 = 7;

/// One of the six Infinity Stones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stone {
    /// Mind Stone (1).
    Mind,
    /// Soul Stone (2).
    Soul,
    /// Space Stone (3).
    Space,
    /// Power Stone (4).
    Power,
    /// Reality Stone (5).
    Reality,
    /// Time Stone (6).
    Time,
}

impl Stone {
    /// Every stone, in value order.
    pub const ALL: [Self; 6] = [
        Self::Mind,
        Self::Soul,
        Self::Space,
        Self::Power,
        Self::Reality,
        Self::Time,
    ];

    /// Returns the printed name of the stone card.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mind => "Mind Stone",
            Self::Soul => "Soul Stone",
            Self::Space => "Space Stone",
            Self::Power => "Power Stone",
            Self::Reality => "Reality Stone",
            Self::Time => "Time Stone",
        }
    }

    /// Returns the value of the stone card.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Mind => 1,
            Self::Soul => 2,
            Self::Space => 3,
            Self::Power => 4,
            Self::Reality => 5,
            Self::Time => 6,
        }
    }

    /// Returns the effect printed on the stone card.
    #[must_use]
    pub const fn effect(self) -> Effect {
        match self {
            Self::Mind => Effect::MindStone,
            Self::Soul => Effect::SoulStone,
            Self::Space => Effect::SpaceStone,
            Self::Power => Effect::PowerStone,
            Self::Reality => Effect::RealityStone,
            Self::Time => Effect::TimeStone,
        }
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The effect printed on a card.
///
/// The set is closed: effect resolution matches on every variant, so a new
/// effect cannot be added without deciding how it resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Effect {
    /// Guess a number. If Thanos has it, defeat one.
    GuessThanosHand,
    /// Let another Hero peek at Thanos's hand.
    PeekAtThanosHand,
    /// You may fight Thanos.
    MayFightThanos,
    /// Take 1 Power Token.
    TakePowerToken,
    /// Look at the top 3 Hero cards and rearrange them.
    RearrangeHeroDeck,
    /// Force a Hero (or yourself) to fight Thanos.
    CompelFight,
    /// Guess a number. Defeat all opponents with that number.
    MindStone,
    /// Choose an opponent. Defeat their card if it is 3 or higher.
    SoulStone,
    /// Fight up to 2 different opponents.
    SpaceStone,
    /// Take 3 Power Tokens.
    PowerStone,
    /// Draw 2 cards, then place 2 from hand on the bottom of the deck.
    RealityStone,
    /// Copy the effect of another Thanos card in the discard pile.
    TimeStone,
    /// Choose an opponent and guess a number. If they have it, defeat it.
    Outrider,
    /// Choose an opponent. Defeat their card if it is 3 or lower.
    CorvusGlaive,
    /// You may fight an opponent.
    BlackDwarf,
    /// Take 1 Power Token.
    ProximaMidnight,
    /// Draw 1 card, then place 1 from hand on the bottom of the deck.
    EbonyMaw,
    /// Cannot be played.
    Thanos,
}

impl Effect {
    /// Returns the human-readable rules text for the effect.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::GuessThanosHand => "Guess a number. If Thanos has it, defeat one.",
            Self::PeekAtThanosHand => "Let another Hero peek at Thanos's hand.",
            Self::MayFightThanos => "You may fight Thanos.",
            Self::TakePowerToken | Self::ProximaMidnight => "Take 1 Power Token.",
            Self::RearrangeHeroDeck => "Look at top 3 Hero cards, rearrange them.",
            Self::CompelFight => "Force a Hero (or yourself) to fight Thanos.",
            Self::MindStone => "Guess a number. Defeat all opponents with that number.",
            Self::SoulStone => "Choose opponent. Defeat their card if it's 3 or higher.",
            Self::SpaceStone => "Fight up to 2 different opponents.",
            Self::PowerStone => "Take 3 Power Tokens.",
            Self::RealityStone => "Draw 2 cards, then place 2 from hand on bottom of deck.",
            Self::TimeStone => "Copy effect of another Thanos card in discard.",
            Self::Outrider => "Choose opponent and guess a number. If they have it, defeat it.",
            Self::CorvusGlaive => "Choose opponent. Defeat their card if it's 3 or lower.",
            Self::BlackDwarf => "You may fight an opponent.",
            Self::EbonyMaw => "Draw 1 card, then place 1 from hand on bottom of deck.",
            Self::Thanos => "Cannot be played.",
        }
    }
}

/// A card in the Hero or Thanos deck.
///
/// Cards are plain values. Two physical copies of the same catalog entry
/// (the two Outriders) differ only by `id`, which is unique within a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Card {
    /// Identifier, unique within the card's deck.
    pub id: u8,
    /// Printed name.
    pub name: &'static str,
    /// Printed value (1..=7).
    pub value: u8,
    /// Printed effect.
    pub effect: Effect,
    /// Whether the card is one of the six Infinity Stones.
    pub is_infinity_stone: bool,
    /// Whether the card goes to the bottom of its deck when defeated.
    pub returns_to_deck_on_defeat: bool,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the value. The catalog only
    /// builds cards with values in `1..=MAX_CARD_VALUE`.
    #[must_use]
    pub const fn new(
        id: u8,
        name: &'static str,
        value: u8,
        effect: Effect,
        is_infinity_stone: bool,
        returns_to_deck_on_defeat: bool,
    ) -> Self {
        Self {
            id,
            name,
            value,
            effect,
            is_infinity_stone,
            returns_to_deck_on_defeat,
        }
    }

    /// Returns the stone this card represents, if it is an Infinity Stone.
    #[must_use]
    pub const fn stone(&self) -> Option<Stone> {
        if !self.is_infinity_stone {
            return None;
        }
        match self.effect {
            Effect::MindStone => Some(Stone::Mind),
            Effect::SoulStone => Some(Stone::Soul),
            Effect::SpaceStone => Some(Stone::Space),
            Effect::PowerStone => Some(Stone::Power),
            Effect::RealityStone => Some(Stone::Reality),
            Effect::TimeStone => Some(Stone::Time),
            _ => None,
        }
    }

    /// Returns whether the card may be played from hand.
    ///
    /// Only the Thanos card is unplayable; it leaves a hand only by defeat.
    #[must_use]
    pub const fn is_playable(&self) -> bool {
        !matches!(self.effect, Effect::Thanos)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.value)
    }
}
