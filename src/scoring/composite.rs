//! Rule aggregation and the game-over notification.

use tracing::{debug, info};

use super::{GameOutcome, ScoreOutcome, ScoreRule};
use crate::board::GameQuery;
use crate::core::CellState;
use crate::events::{EventChannel, GameOver, SubscriptionId};

/// Runs an ordered list of rules and decides when the game ends.
///
/// Every call to [`evaluate`](Self::evaluate) runs *all* rules, then
/// combines their verdicts: the first winner in rule order wins; failing
/// that, any draw makes the game a draw; otherwise the game goes on.
///
/// The first terminal verdict is cached and announced through the
/// game-over channel. From then on the composite is inert: `evaluate`
/// returns the cached outcome without running rules or notifying again.
pub struct ScoreComposite<K, S> {
    rules: Vec<Box<dyn ScoreRule<K, S>>>,
    outcome: Option<GameOutcome<S>>,
    game_over: EventChannel<GameOver<S>>,
}

impl<K, S: CellState> ScoreComposite<K, S> {
    /// Create a composite with no rules.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            outcome: None,
            game_over: EventChannel::new(),
        }
    }

    /// Append a rule (builder pattern).
    #[must_use]
    pub fn with_rule(mut self, rule: impl ScoreRule<K, S> + 'static) -> Self {
        self.add_rule(rule);
        self
    }

    /// Append a rule. Rules run in insertion order.
    pub fn add_rule(&mut self, rule: impl ScoreRule<K, S> + 'static) {
        self.rules.push(Box::new(rule));
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule names in evaluation order.
    pub fn rule_names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|rule| rule.name())
    }

    /// Observe the end of the game. Fires at most once.
    pub fn on_game_over(&mut self, observer: impl FnMut(&GameOver<S>) + 'static) -> SubscriptionId {
        self.game_over.subscribe(observer)
    }

    /// Stop observing the end of the game.
    pub fn unsubscribe_game_over(&mut self, id: SubscriptionId) -> bool {
        self.game_over.unsubscribe(id)
    }

    /// The final outcome, once reached.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome<S>> {
        self.outcome
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Run every rule against `query` and combine the verdicts.
    ///
    /// Returns `None` while the game continues.
    pub fn evaluate(&mut self, query: &dyn GameQuery<K, S>) -> Option<GameOutcome<S>> {
        if let Some(outcome) = self.outcome {
            return Some(outcome);
        }

        let mut winner = None;
        let mut draw = false;
        for rule in &mut self.rules {
            let verdict = rule.evaluate(query);
            debug!(rule = rule.name(), ?verdict, "rule evaluated");
            match verdict {
                ScoreOutcome::Winner(state) if winner.is_none() => winner = Some(state),
                ScoreOutcome::Draw => draw = true,
                _ => {}
            }
        }

        let outcome = match (winner, draw) {
            (Some(state), _) => GameOutcome::Winner(state),
            (None, true) => GameOutcome::Draw,
            (None, false) => return None,
        };

        info!(%outcome, "game over");
        self.outcome = Some(outcome);
        self.game_over.emit(&GameOver { outcome });
        Some(outcome)
    }
}

impl<K, S: CellState> Default for ScoreComposite<K, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, S: std::fmt::Debug> std::fmt::Debug for ScoreComposite<K, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoreComposite")
            .field("rules", &self.rules.len())
            .field("outcome", &self.outcome)
            .field("game_over", &self.game_over)
            .finish()
    }
}
