//! Game configuration options.

/// Hero starting life for player counts missing from the table.
pub const HERO_LIFE_FALLBACK: u32 = 20;

/// Returns the Heroes' starting life for a table of `player_count` players
/// (Thanos included).
///
/// Two to six players start at 20, 24, 28, 32, and 36. Any other count
/// starts at [`HERO_LIFE_FALLBACK`].
///
/// ```
/// use gauntlet::hero_starting_life;
///
/// assert_eq!(hero_starting_life(4), 28);
/// assert_eq!(hero_starting_life(7), 20);
/// ```
#[must_use]
pub const fn hero_starting_life(player_count: usize) -> u32 {
    match player_count {
        2 => 20,
        3 => 24,
        4 => 28,
        5 => 32,
        6 => 36,
        _ => HERO_LIFE_FALLBACK,
    }
}

/// Configuration options for a game.
///
/// The defaults are the standard rules. Use the builder pattern to customize
/// options:
///
/// ```
/// use gauntlet::GameOptions;
///
/// let options = GameOptions::default()
///     .with_thanos_life(25)
///     .with_power_tokens(10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Thanos's starting life.
    pub thanos_life: u32,
    /// Power tokens in the shared pool at the start.
    pub power_tokens: u32,
    /// Cards dealt to Thanos at the start.
    pub thanos_opening_hand: usize,
    /// Cards dealt to each Hero at the start.
    pub hero_opening_hand: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            thanos_life: 20,
            power_tokens: 20,
            thanos_opening_hand: 2,
            hero_opening_hand: 1,
        }
    }
}

impl GameOptions {
    /// Sets Thanos's starting life.
    ///
    /// # Example
    ///
    /// ```
    /// use gauntlet::GameOptions;
    ///
    /// let options = GameOptions::default().with_thanos_life(30);
    /// assert_eq!(options.thanos_life, 30);
    /// ```
    #[must_use]
    pub const fn with_thanos_life(mut self, life: u32) -> Self {
        self.thanos_life = life;
        self
    }

    /// Sets the size of the power token pool.
    ///
    /// # Example
    ///
    /// ```
    /// use gauntlet::GameOptions;
    ///
    /// let options = GameOptions::default().with_power_tokens(5);
    /// assert_eq!(options.power_tokens, 5);
    /// ```
    #[must_use]
    pub const fn with_power_tokens(mut self, tokens: u32) -> Self {
        self.power_tokens = tokens;
        self
    }

    /// Sets how many cards Thanos is dealt at the start.
    ///
    /// # Example
    ///
    /// ```
    /// use gauntlet::GameOptions;
    ///
    /// let options = GameOptions::default().with_thanos_opening_hand(3);
    /// assert_eq!(options.thanos_opening_hand, 3);
    /// ```
    #[must_use]
    pub const fn with_thanos_opening_hand(mut self, cards: usize) -> Self {
        self.thanos_opening_hand = cards;
        self
    }

    /// Sets how many cards each Hero is dealt at the start.
    ///
    /// # Example
    ///
    /// ```
    /// use gauntlet::GameOptions;
    ///
    /// let options = GameOptions::default().with_hero_opening_hand(2);
    /// assert_eq!(options.hero_opening_hand, 2);
    /// ```
    #[must_use]
    pub const fn with_hero_opening_hand(mut self, cards: usize) -> Self {
        self.hero_opening_hand = cards;
        self
    }
}
