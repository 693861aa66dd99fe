//! The round/game state machine.

use std::sync::Arc;

use im::Vector;

use super::state::{GameSnapshot, GameState, GameSummary, Phase, RoundRecord, RoundSummary};
use crate::board::{Board, LineDefinition, DEFAULT_MAX_CARDS};
use crate::core::{ActionRecord, DataLoadError, EngineError, GameConfig, GameRng, LineId, PlayerAction, StationId};
use crate::network::Line;
use crate::rules::{junction_bonus, score_line, Validator};

/// A single-player game on a shared, read-only board.
///
/// Every operation takes `&mut self` and runs to completion, so there is
/// exactly one writer. Rejected actions return an `EngineError` and leave
/// the network untouched.
///
/// ## Example
///
/// ```
/// use rust_metro::core::GameConfig;
/// use rust_metro::game::{MetroGame, Phase};
///
/// let mut game = MetroGame::bundled(GameConfig::default().with_seed(1)).unwrap();
/// assert_eq!(game.draw_card().unwrap(), Phase::AwaitingStationSelection);
///
/// let terminal = game.snapshot().terminal.unwrap();
/// assert_eq!(game.select_station(terminal).unwrap(), Phase::AwaitingConnectionTarget);
/// ```
#[derive(Clone, Debug)]
pub struct MetroGame {
    board: Arc<Board>,
    config: GameConfig,
    state: GameState,
    history: Vector<ActionRecord>,
}

impl MetroGame {
    /// Start a game on an already validated board.
    ///
    /// The first line is seeded with its start station and the deck is
    /// shuffled from `config.seed`.
    #[must_use]
    pub fn new(board: Arc<Board>, config: GameConfig) -> Self {
        let mut state = GameState::new(GameRng::new(config.seed));
        if let Some(first) = board.lines().first() {
            state.network.seed_line(first.id, first.start_station);
        }
        log::info!(
            "new game: {} lines, {} stations, seed {}",
            board.lines().len(),
            board.station_count(),
            config.seed
        );

        Self {
            board,
            config,
            state,
            history: Vector::new(),
        }
    }

    /// Start a game on the bundled board.
    pub fn bundled(config: GameConfig) -> Result<Self, DataLoadError> {
        Ok(Self::new(Arc::new(Board::bundled()?), config))
    }

    /// Start a game from station and line JSON.
    pub fn from_json(stations_json: &str, lines_json: &str, config: GameConfig) -> Result<Self, DataLoadError> {
        Ok(Self::new(Arc::new(Board::from_json(stations_json, lines_json)?), config))
    }

    /// Rebuild a game by applying `actions` in order from a fresh start.
    ///
    /// With the same board and seed this reproduces the original game.
    pub fn replay(
        board: Arc<Board>,
        config: GameConfig,
        actions: impl IntoIterator<Item = PlayerAction>,
    ) -> Result<Self, EngineError> {
        let mut game = Self::new(board, config);
        for action in actions {
            game.apply(action)?;
        }
        Ok(game)
    }

    // === Accessors ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Accepted actions in order.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Definition of the line being built; `None` once the game is over.
    #[must_use]
    pub fn current_definition(&self) -> Option<&LineDefinition> {
        if self.state.phase.is_over() {
            return None;
        }
        self.board.lines().get(self.state.current_line_index)
    }

    /// The line being built; `None` once the game is over.
    #[must_use]
    pub fn current_line(&self) -> Option<&Line> {
        let definition = self.current_definition()?;
        self.state.network.line(definition.id)
    }

    /// Stations the current card can reach from the line's terminal.
    #[must_use]
    pub fn legal_targets(&self) -> Vec<StationId> {
        match (self.state.current_card, self.current_line()) {
            (Some(card), Some(line)) => Validator::new(&self.board, &self.state.network).legal_targets(line, card),
            _ => Vec::new(),
        }
    }

    // === Player Actions ===

    /// Draw the next card.
    pub fn draw_card(&mut self) -> Result<Phase, EngineError> {
        self.apply(PlayerAction::Draw)
    }

    /// Select the current line's terminal station.
    pub fn select_station(&mut self, station: StationId) -> Result<Phase, EngineError> {
        self.apply(PlayerAction::Select(station))
    }

    /// Try to extend the line from the selected terminal to `target`.
    pub fn attempt_connection(&mut self, target: StationId) -> Result<Phase, EngineError> {
        self.apply(PlayerAction::Connect(target))
    }

    /// Discard the current card without placing it.
    pub fn skip_card(&mut self) -> Result<Phase, EngineError> {
        self.apply(PlayerAction::Skip)
    }

    /// Drop the pending selection. The network is not touched.
    pub fn cancel_selection(&mut self) -> Result<Phase, EngineError> {
        self.apply(PlayerAction::Cancel)
    }

    /// Apply one action, recording it in the history if accepted.
    pub fn apply(&mut self, action: PlayerAction) -> Result<Phase, EngineError> {
        let Some(line) = self.current_definition().map(|definition| definition.id) else {
            return Err(EngineError::GameOver);
        };
        let cards_drawn = self.state.cards_drawn_in_round;

        let result = match action {
            PlayerAction::Draw => self.draw(),
            PlayerAction::Select(station) => self.select(station),
            PlayerAction::Connect(target) => self.connect(line, target),
            PlayerAction::Skip => self.skip(),
            PlayerAction::Cancel => self.cancel(),
        };

        match &result {
            Ok(_) => {
                let sequence = self.history.len() as u32;
                self.history
                    .push_back(ActionRecord::new(action, line, cards_drawn, sequence));
            }
            Err(err) => log::debug!("rejected {:?}: {}", action, err),
        }
        result
    }

    fn draw(&mut self) -> Result<Phase, EngineError> {
        if self.state.current_card.is_some() {
            return Err(EngineError::CardPending);
        }

        let card = self.state.deck.draw();
        self.state.current_card = Some(card);
        self.state.cards_drawn_in_round += 1;
        self.state.phase = Phase::AwaitingStationSelection;

        log::debug!("drew {} ({}/{})", card, self.state.cards_drawn_in_round, self.max_cards());
        Ok(self.state.phase)
    }

    fn select(&mut self, station: StationId) -> Result<Phase, EngineError> {
        if self.state.current_card.is_none() {
            return Err(EngineError::NoActiveCard);
        }
        if !self.board.contains(station) {
            return Err(EngineError::UnknownStation(station));
        }

        let terminal = self.current_line().map(Line::terminal).ok_or(EngineError::GameOver)?;
        if station != terminal {
            return Err(EngineError::InvalidSelection { station, terminal });
        }

        self.state.selected_station = Some(station);
        self.state.phase = Phase::AwaitingConnectionTarget;
        Ok(self.state.phase)
    }

    fn connect(&mut self, line_id: LineId, target: StationId) -> Result<Phase, EngineError> {
        let card = self.state.current_card.ok_or(EngineError::NoActiveCard)?;
        let from_id = self.state.selected_station.ok_or(EngineError::NoSelection)?;

        let board = Arc::clone(&self.board);
        let to = board.station(target).ok_or(EngineError::UnknownStation(target))?;
        let from = board.station(from_id).ok_or(EngineError::UnknownStation(from_id))?;
        let line = self.state.network.line(line_id).ok_or(EngineError::GameOver)?;

        match Validator::new(&board, &self.state.network).check(line, card, from, to) {
            Ok(()) => {
                self.state.network.connect(line_id, from.id, to.id);
                log::debug!("{}: connected {} -> {} with {}", line_id, from.id, to.id, card);
                Ok(self.finish_card())
            }
            Err(rule) => {
                // the card stays in hand; the terminal must be selected again
                self.state.selected_station = None;
                self.state.phase = Phase::AwaitingStationSelection;
                Err(EngineError::RuleViolation { rule })
            }
        }
    }

    fn skip(&mut self) -> Result<Phase, EngineError> {
        let card = self.state.current_card.ok_or(EngineError::NoActiveCard)?;
        log::debug!("skipped {}", card);
        Ok(self.finish_card())
    }

    fn cancel(&mut self) -> Result<Phase, EngineError> {
        if self.state.current_card.is_none() {
            return Err(EngineError::NoActiveCard);
        }
        self.state.selected_station = None;
        self.state.phase = Phase::AwaitingStationSelection;
        Ok(self.state.phase)
    }

    // === Round Transitions ===

    fn max_cards(&self) -> u32 {
        self.current_definition()
            .map_or(DEFAULT_MAX_CARDS, |definition| definition.max_cards)
    }

    /// Discard the resolved card and end the round if its budget is spent.
    fn finish_card(&mut self) -> Phase {
        self.state.current_card = None;
        self.state.selected_station = None;

        if self.state.cards_drawn_in_round >= self.max_cards() {
            self.end_round();
        } else {
            self.state.phase = Phase::AwaitingCard;
        }
        self.state.phase
    }

    fn end_round(&mut self) {
        let board = Arc::clone(&self.board);
        let Some(definition) = board.lines().get(self.state.current_line_index) else {
            return;
        };

        let breakdown = self
            .state
            .network
            .line(definition.id)
            .map(|line| score_line(&board, line))
            .unwrap_or_default();
        let record = RoundRecord {
            line: definition.id,
            score: breakdown.total(),
            breakdown,
        };
        self.state.round_records.push_back(record);
        self.state.total_score += record.score;
        log::info!(
            "round {} ({}) complete: {} districts x {} + {} crossings = {}",
            self.state.current_line_index + 1,
            definition.name,
            breakdown.districts,
            breakdown.max_in_district,
            breakdown.crossings,
            record.score
        );

        self.state.current_line_index += 1;
        self.state.cards_drawn_in_round = 0;

        match board.lines().get(self.state.current_line_index) {
            Some(next) => {
                self.state.network.seed_line(next.id, next.start_station);
                self.state.phase = Phase::AwaitingCard;
            }
            None => self.end_game(),
        }
    }

    fn end_game(&mut self) {
        let bonus = junction_bonus(&self.state.network, &self.config);
        self.state.junction_bonus = Some(bonus);
        self.state.total_score += bonus;
        self.state.phase = Phase::GameComplete;
        log::info!("game complete: junction bonus {}, total {}", bonus, self.state.total_score);
    }

    // === Views ===

    /// Current state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        let definition = self.current_definition();

        GameSnapshot {
            phase: self.state.phase,
            line: definition.map(|d| d.id),
            line_name: definition.map(|d| d.name.clone()),
            line_color: definition.map(|d| d.color.clone()),
            terminal: self.current_line().map(Line::terminal),
            cards_drawn: self.state.cards_drawn_in_round,
            max_cards: definition.map_or(0, |d| d.max_cards),
            current_card: self.state.current_card,
            selected_station: self.state.selected_station,
            deck_remaining: self.state.deck.remaining(),
            round_records: self.state.round_records.iter().copied().collect(),
            total_score: self.state.total_score,
            junction_bonus: self.state.junction_bonus,
        }
    }

    /// End-of-game report; `None` while the game is still running.
    #[must_use]
    pub fn summary(&self) -> Option<GameSummary> {
        let junction_bonus = self.state.junction_bonus?;
        let rounds = self
            .state
            .round_records
            .iter()
            .map(|record| RoundSummary {
                line: record.line,
                name: self
                    .board
                    .line(record.line)
                    .map(|d| d.name.clone())
                    .unwrap_or_default(),
                score: record.score,
            })
            .collect();

        Some(GameSummary {
            rounds,
            junction_bonus,
            total: self.state.total_score,
        })
    }

    /// Independent copy for lookahead.
    ///
    /// Shares the board, copies the network in O(1), and forks the deck RNG
    /// so the copy draws a different but deterministic sequence.
    /// Takes `&mut self` because forking advances the fork counter.
    #[must_use]
    pub fn clone_state(&mut self) -> Self {
        let mut state = self.state.clone();
        state.deck = self.state.deck.fork();
        Self {
            board: Arc::clone(&self.board),
            config: self.config.clone(),
            state,
            history: self.history.clone(),
        }
    }
}
