//! Game engine and state management.

use core::sync::atomic::{AtomicU32, Ordering};

use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::string::String;
use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::card::Stone;
use crate::log::{LogCategory, LogEntry};
use crate::options::GameOptions;
use crate::player::PlayerId;
use crate::result::WinResult;
use crate::snapshot::GameSnapshot;

mod actions;
mod effects;
mod fight;
mod setup;
pub mod state;

pub use state::{GameState, Phase};

/// Handle for a log listener registered with [`Game::on_log_entry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u32);

type Listener = Box<dyn FnMut(&LogEntry) + Send>;

/// Log listeners and the entries waiting to reach them.
///
/// While entries are being delivered the listeners are moved out of the
/// registry, so a listener may call back into the game. Entries produced by
/// such calls join `queue` and are delivered by the outer dispatch, in order.
#[derive(Default)]
struct Listeners {
    entries: Vec<(SubscriptionId, Listener)>,
    /// Ids that are still subscribed, including listeners out for dispatch.
    registered: Vec<SubscriptionId>,
    queue: VecDeque<LogEntry>,
    dispatching: bool,
}

/// The Infinity Gauntlet rules engine.
///
/// The game owns both decks, every player, the power token pool, and the log.
/// All changes go through its methods. Each action either applies completely
/// or, when rejected, leaves the state and log exactly as they were.
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Current table state.
    pub state: Mutex<GameState>,
    /// Random number generator used for every shuffle.
    rng: Mutex<ChaCha8Rng>,
    /// Log listeners in registration order.
    listeners: Mutex<Listeners>,
    /// Next subscription id to hand out.
    next_subscription: AtomicU32,
}

impl Game {
    /// Creates a game in the setup phase with the given seed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use gauntlet::{Game, GameOptions, Phase};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.phase(), Phase::Setup);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let state = GameState::new(&options);

        Self {
            options,
            state: Mutex::new(state),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
            listeners: Mutex::new(Listeners::default()),
            next_subscription: AtomicU32::new(0),
        }
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.state.lock().phase
    }

    /// Returns the result of the game once it is over.
    pub fn winner(&self) -> Option<WinResult> {
        self.state.lock().winner
    }

    /// Returns the player ID whose turn it is.
    ///
    /// Returns `None` before the game is initialized.
    pub fn current_player(&self) -> Option<PlayerId> {
        self.state.lock().current_player().map(crate::Player::id)
    }

    /// Returns the turn number.
    pub fn turn_number(&self) -> u32 {
        self.state.lock().turn_number
    }

    /// Returns the Hero team's life.
    pub fn hero_life(&self) -> u32 {
        self.state.lock().hero_life
    }

    /// Returns Thanos's life.
    pub fn thanos_life(&self) -> u32 {
        self.state.lock().thanos_life
    }

    /// Returns the number of tokens left in the pool.
    pub fn power_token_pool(&self) -> u32 {
        self.state.lock().power_token_pool
    }

    /// Returns the stones Thanos has collected, in value order.
    pub fn collected_stones(&self) -> Vec<Stone> {
        let mut stones: Vec<Stone> = self.state.lock().collected_stones.iter().copied().collect();
        stones.sort_unstable();
        stones
    }

    /// Evaluates the win conditions without changing anything.
    ///
    /// See [`GameState::check_win_conditions`] for the precedence.
    pub fn check_win_conditions(&self) -> Option<WinResult> {
        self.state.lock().check_win_conditions()
    }

    /// Returns a serializable view of the table.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(&*self.state.lock())
    }

    /// Returns every log entry.
    pub fn log(&self) -> Vec<LogEntry> {
        self.state.lock().log.clone()
    }

    /// Returns log entries with a sequence number of at least `sequence`.
    pub fn log_since(&self, sequence: u64) -> Vec<LogEntry> {
        let state = self.state.lock();
        let start = usize::try_from(sequence)
            .unwrap_or(usize::MAX)
            .min(state.log.len());
        state.log[start..].to_vec()
    }

    /// Appends an entry to the log.
    ///
    /// The game logs its own actions; this is for entries the presentation
    /// layer wants in the same stream, such as rejected actions.
    pub fn add_log(&self, message: impl Into<String>, category: LogCategory) {
        let mut state = self.state.lock();
        state.add_log(message.into(), category);
        let entry = state.log.last().cloned();
        drop(state);

        if let Some(entry) = entry {
            self.publish(core::slice::from_ref(&entry));
        }
    }

    /// Registers a listener that receives each new log entry.
    ///
    /// Entries are delivered after the action that produced them has been
    /// committed and the state is unlocked, so a listener may query the game
    /// or drive it further. Entries caused by a listener are delivered to
    /// every listener once the current entry has been handed to all of them.
    pub fn on_log_entry(
        &self,
        listener: impl FnMut(&LogEntry) + Send + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::SeqCst));
        let mut listeners = self.listeners.lock();
        listeners.registered.push(id);
        listeners.entries.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.lock();
        let before = listeners.registered.len();
        listeners.registered.retain(|registered| *registered != id);
        listeners.entries.retain(|(registered, _)| *registered != id);
        listeners.registered.len() != before
    }

    fn publish(&self, entries: &[LogEntry]) {
        let mut active = {
            let mut listeners = self.listeners.lock();
            listeners.queue.extend(entries.iter().cloned());
            if listeners.dispatching || listeners.queue.is_empty() {
                return;
            }
            listeners.dispatching = true;
            core::mem::take(&mut listeners.entries)
        };

        loop {
            let entry = {
                let mut listeners = self.listeners.lock();
                let Some(entry) = listeners.queue.pop_front() else {
                    let added = core::mem::take(&mut listeners.entries);
                    active.extend(added);
                    let registered = core::mem::take(&mut listeners.registered);
                    active.retain(|(id, _)| registered.contains(id));
                    listeners.registered = registered;
                    listeners.entries = active;
                    listeners.dispatching = false;
                    return;
                };
                entry
            };

            for (id, listener) in &mut active {
                if self.listeners.lock().registered.contains(id) {
                    listener(&entry);
                }
            }
        }
    }

    /// Runs `action` against a copy of the state and commits it only if the
    /// action succeeds. New log entries are published after the commit.
    fn transact<T, E>(
        &self,
        action: impl FnOnce(&mut GameState, &mut ChaCha8Rng) -> Result<T, E>,
    ) -> Result<T, E> {
        let mut state = self.state.lock();
        let mut rng = self.rng.lock();

        let mut working = state.clone();
        let mut working_rng = rng.clone();
        let logged = working.log.len();

        let value = action(&mut working, &mut working_rng)?;

        let fresh = working.log[logged..].to_vec();
        *state = working;
        *rng = working_rng;
        drop(rng);
        drop(state);

        self.publish(&fresh);
        Ok(value)
    }
}
