use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::{GameError, IllegalAction};
use crate::hand::{evaluate_best, rank_name, HandStrength};
use crate::logger::ActionLog;
use crate::player::{Player, PlayerAction, Seat, Seats};
use crate::policy::{DecisionPolicy, PolicyView};
use crate::rules::{to_call, validate_raise, TableConfig, BOARD_SIZE, ROUNDS_PER_HAND};

/// Lifecycle of a session: `Welcome → DiceRoll → Playing → Result → DiceRoll → …`
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    Welcome,
    DiceRoll,
    Playing,
    Result,
}

/// Last die roll. `ready` is set once a roll has been settled; equal values
/// are a tie and decide nothing.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Dice {
    pub human: u8,
    pub computer: u8,
    pub ready: bool,
    pub animating: bool,
}

impl Dice {
    pub fn decided(&self) -> bool {
        self.ready && self.human != self.computer
    }
}

/// How a hand ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandOutcome {
    /// `None` on a draw
    pub winner: Option<Seat>,
    pub winner_name: Option<String>,
    pub message: String,
    /// Pot minus the winner's own contribution; 0 on a draw
    pub net_gain: u32,
    pub pot: u32,
    pub human_rank: String,
    pub computer_rank: String,
    pub by_fold: bool,
}

/// One heads-up duel between the human seat and a [`DecisionPolicy`].
///
/// Human commands (`check`, `call`, `raise`, `fold`) run to completion,
/// including the computer's reply and any round advance or resolution. A
/// command that returns `Err` has not changed any state.
///
/// # Examples
///
/// ```
/// use rand::RngCore;
/// use texasduel_engine::player::PlayerAction;
/// use texasduel_engine::policy::{Decision, DecisionPolicy, PolicyView};
/// use texasduel_engine::rules::TableConfig;
/// use texasduel_engine::session::{Phase, Session};
///
/// struct Passive;
/// impl DecisionPolicy for Passive {
///     fn decide(&self, _: &PolicyView, _: &mut dyn RngCore) -> Decision {
///         Decision::new(PlayerAction::Check, "Computer checks")
///     }
///     fn name(&self) -> &str { "Passive" }
/// }
///
/// let mut session = Session::new(TableConfig::with_seed(7), Box::new(Passive));
/// session.start_dice_roll().unwrap();
/// while !session.roll_dice().unwrap() {}
/// session.new_hand().unwrap();
/// assert_eq!(session.phase(), Phase::Playing);
/// assert_eq!(session.revealed(), 1);
/// ```
pub struct Session {
    table: TableConfig,
    rng: ChaCha20Rng,
    policy: Box<dyn DecisionPolicy>,
    phase: Phase,
    deck: Deck,
    players: Seats,
    board: Vec<Card>,
    // cached 7-card strengths for this hand, [human, computer]
    showdown: Option<[HandStrength; 2]>,
    revealed: usize,
    round: u8,
    pot: u32,
    current_bet: u32,
    first_player: Seat,
    dice: Dice,
    log: ActionLog,
    outcome: Option<HandOutcome>,
}

impl Session {
    pub fn new(table: TableConfig, policy: Box<dyn DecisionPolicy>) -> Self {
        let seed = table.seed.unwrap_or_else(rand::random);
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let deck = Deck::shuffled(&mut rng);
        let players = Seats::new(
            Player::new("Player 1", true, table.starting_chips),
            Player::new("Computer", false, table.starting_chips),
        );
        let log = ActionLog::with_capacity(table.log_capacity);
        Self {
            table,
            rng,
            policy,
            phase: Phase::Welcome,
            deck,
            players,
            board: Vec::with_capacity(BOARD_SIZE),
            showdown: None,
            revealed: 0,
            round: 1,
            pot: 0,
            current_bet: 0,
            first_player: Seat::Human,
            dice: Dice::default(),
            log,
            outcome: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn table(&self) -> &TableConfig {
        &self.table
    }
    pub fn policy_name(&self) -> &str {
        self.policy.name()
    }
    pub fn pot(&self) -> u32 {
        self.pot
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn round(&self) -> u8 {
        self.round
    }
    pub fn revealed(&self) -> usize {
        self.revealed
    }
    pub fn first_player(&self) -> Seat {
        self.first_player
    }
    pub fn dice(&self) -> Dice {
        self.dice
    }
    pub fn log(&self) -> &ActionLog {
        &self.log
    }
    pub fn outcome(&self) -> Option<&HandOutcome> {
        self.outcome.as_ref()
    }
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat]
    }
    pub fn players(&self) -> &Seats {
        &self.players
    }
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// All five community cards of the current hand, revealed or not.
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    pub fn visible_board(&self) -> &[Card] {
        &self.board[..self.revealed.min(self.board.len())]
    }

    /// Hole cards a viewer at the human seat may see: always their own, the
    /// computer's only once the hand is resolved.
    pub fn shown_hole_cards(&self, seat: Seat) -> Option<[Card; 2]> {
        match seat {
            Seat::Human => self.players[seat].hole_cards(),
            Seat::Computer if self.phase == Phase::Result => self.players[seat].hole_cards(),
            Seat::Computer => None,
        }
    }

    pub fn winner_msg(&self) -> Option<&str> {
        self.outcome.as_ref().map(|o| o.message.as_str())
    }

    /// True while the human holds the very first action of the hand with
    /// nothing wagered; `call` is disabled in that spot.
    pub fn is_opening_turn(&self) -> bool {
        self.round == 1 && self.first_player == Seat::Human && self.current_bet == 0
    }

    fn require_phase(&self, expected: Phase) -> Result<(), GameError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(IllegalAction::WrongPhase { phase: self.phase }.into())
        }
    }

    /// Leaves the welcome screen (if still there) and starts a dice roll.
    pub fn start_dice_roll(&mut self) -> Result<(), GameError> {
        match self.phase {
            Phase::Welcome => self.phase = Phase::DiceRoll,
            Phase::DiceRoll => {}
            phase => return Err(IllegalAction::WrongPhase { phase }.into()),
        }
        self.dice = Dice {
            animating: true,
            ..Dice::default()
        };
        Ok(())
    }

    /// Rolls both dice. Returns `false` on a tie; the caller rolls again.
    pub fn roll_dice(&mut self) -> Result<bool, GameError> {
        self.require_phase(Phase::DiceRoll)?;
        let human = self.rng.random_range(1..=6u8);
        let computer = self.rng.random_range(1..=6u8);
        self.settle_dice(human, computer)
    }

    /// Applies a given roll. A tie leaves the first player unchanged and
    /// returns `false`; otherwise the higher roller acts first.
    pub fn settle_dice(&mut self, human: u8, computer: u8) -> Result<bool, GameError> {
        self.require_phase(Phase::DiceRoll)?;
        for die in [human, computer] {
            if !(1..=6).contains(&die) {
                return Err(IllegalAction::InvalidDie(die).into());
            }
        }
        self.dice = Dice {
            human,
            computer,
            ready: true,
            animating: false,
        };
        if human == computer {
            debug!(human, computer, "dice tie");
            return Ok(false);
        }
        self.first_player = if human > computer {
            Seat::Human
        } else {
            Seat::Computer
        };
        debug!(human, computer, first = ?self.first_player, "dice settled");
        Ok(true)
    }

    /// Shuffles a fresh deck and deals the next hand.
    pub fn new_hand(&mut self) -> Result<(), GameError> {
        self.require_dice_settled()?;
        let deck = Deck::shuffled(&mut self.rng);
        self.deal_from(deck)
    }

    /// Deals the next hand from a prepared deck: two cards to the human, two
    /// to the computer, then five to the board.
    pub fn new_hand_with_deck(&mut self, deck: Deck) -> Result<(), GameError> {
        self.require_dice_settled()?;
        self.deal_from(deck)
    }

    fn require_dice_settled(&self) -> Result<(), GameError> {
        self.require_phase(Phase::DiceRoll)?;
        if !self.dice.decided() {
            return Err(IllegalAction::DiceNotSettled.into());
        }
        Ok(())
    }

    fn deal_from(&mut self, mut deck: Deck) -> Result<(), GameError> {
        let human = deck.draw(2)?;
        let computer = deck.draw(2)?;
        let board = deck.draw(BOARD_SIZE)?;
        let human_hole = [human[0], human[1]];
        let computer_hole = [computer[0], computer[1]];
        let strength = |hole: [Card; 2]| {
            let mut seven = board.clone();
            seven.extend_from_slice(&hole);
            evaluate_best(&seven)
        };
        let showdown = [strength(human_hole)?, strength(computer_hole)?];

        self.deck = deck;
        self.players[Seat::Human].start_hand(human_hole);
        self.players[Seat::Computer].start_hand(computer_hole);
        self.board = board;
        self.showdown = Some(showdown);
        self.revealed = 1;
        self.round = 1;
        self.pot = 0;
        self.current_bet = 0;
        self.outcome = None;
        self.dice.ready = false;
        self.phase = Phase::Playing;
        self.log.clear();

        let starter = self.players[self.first_player].name().to_string();
        info!(first = ?self.first_player, "new hand");
        self.log.push(format!("{starter} starts first"));

        if self.first_player == Seat::Computer {
            self.computer_turn();
            if self.players[Seat::Computer].folded() {
                self.resolve_fold();
            }
        }
        Ok(())
    }

    pub fn check(&mut self) -> Result<(), GameError> {
        self.require_phase(Phase::Playing)?;
        if self.current_bet != 0 {
            let owed = to_call(self.current_bet, self.players[Seat::Human].bet());
            return Err(IllegalAction::CheckFacingBet { to_call: owed }.into());
        }
        self.human_checks();
        Ok(())
    }

    /// Matches the outstanding bet; with nothing owed this is a check.
    pub fn call(&mut self) -> Result<(), GameError> {
        self.require_phase(Phase::Playing)?;
        if self.is_opening_turn() {
            return Err(IllegalAction::CallOnOpeningTurn.into());
        }
        let human = &self.players[Seat::Human];
        let need = to_call(self.current_bet, human.bet());
        if need == 0 {
            self.human_checks();
            return Ok(());
        }
        if human.chips() < need {
            return Err(IllegalAction::CannotAffordCall {
                need,
                chips: human.chips(),
            }
            .into());
        }
        self.contribute(Seat::Human, need)?;
        debug!(amount = need, pot = self.pot, "human calls");
        self.log_action(Seat::Human, &format!("calls {need}"));
        self.finish_human_turn();
        Ok(())
    }

    /// Puts `amount` in and raises the current bet by that much.
    pub fn raise(&mut self, amount: u32) -> Result<(), GameError> {
        self.require_phase(Phase::Playing)?;
        let chips = self.players[Seat::Human].chips();
        validate_raise(&self.table, amount, chips)?;
        self.contribute(Seat::Human, amount)?;
        self.current_bet += amount;
        debug!(amount, pot = self.pot, current_bet = self.current_bet, "human raises");
        self.log_action(Seat::Human, &format!("raises {amount}"));
        self.finish_human_turn();
        Ok(())
    }

    pub fn fold(&mut self) -> Result<(), GameError> {
        self.require_phase(Phase::Playing)?;
        self.players[Seat::Human].fold();
        debug!("human folds");
        self.log_action(Seat::Human, "folds");
        self.resolve_fold();
        Ok(())
    }

    /// Leaves the result screen for the next dice roll. When either stack is
    /// below the rebuy threshold both stacks are reset and `true` is returned.
    pub fn continue_to_next_hand(&mut self) -> Result<bool, GameError> {
        self.require_phase(Phase::Result)?;
        let rebuy = self
            .players
            .iter()
            .any(|p| p.chips() < self.table.rebuy_threshold);
        if rebuy {
            let chips = self.table.starting_chips;
            for p in self.players.iter_mut() {
                p.set_chips(chips);
            }
            info!(chips, "stacks reset");
        }
        self.dice = Dice::default();
        self.phase = Phase::DiceRoll;
        Ok(rebuy)
    }

    fn human_checks(&mut self) {
        debug!("human checks");
        self.log_action(Seat::Human, "checks");
        self.finish_human_turn();
    }

    fn log_action(&mut self, seat: Seat, what: &str) {
        let line = format!("{} {}", self.players[seat].name(), what);
        self.log.push(line);
    }

    fn contribute(&mut self, seat: Seat, amount: u32) -> Result<(), GameError> {
        self.players[seat].commit(amount)?;
        self.pot += amount;
        Ok(())
    }

    /// The computer replies; the round then advances unless it folded.
    fn finish_human_turn(&mut self) {
        self.computer_turn();
        if self.players[Seat::Computer].folded() {
            self.resolve_fold();
        } else {
            self.next_round();
        }
    }

    fn policy_view(&self) -> Option<PolicyView> {
        let cpu = &self.players[Seat::Computer];
        Some(PolicyView {
            hole: cpu.hole_cards()?,
            board: self.visible_board().to_vec(),
            current_bet: self.current_bet,
            own_bet: cpu.bet(),
            own_chips: cpu.chips(),
        })
    }

    fn computer_turn(&mut self) {
        let view = self.policy_view();
        debug_assert!(view.is_some(), "computer turn without dealt hole cards");
        let Some(view) = view else {
            warn!(phase = ?self.phase, "computer turn without dealt hole cards, skipping");
            return;
        };
        let decision = self.policy.decide(&view, &mut self.rng);
        let rationale = match self.apply_computer_action(decision.action) {
            Ok(()) => decision.rationale,
            Err(e) => {
                warn!(action = ?decision.action, error = %e, "policy action rejected, checking instead");
                format!("{} checks", self.players[Seat::Computer].name())
            }
        };
        self.log.push(rationale);
    }

    fn apply_computer_action(&mut self, action: PlayerAction) -> Result<(), GameError> {
        match action {
            PlayerAction::Check => {}
            PlayerAction::Call(amount) => self.contribute(Seat::Computer, amount)?,
            PlayerAction::Raise(amount) => {
                self.contribute(Seat::Computer, amount)?;
                // the computer's raise sets the bet to at least its amount
                self.current_bet = self.current_bet.max(amount);
            }
            PlayerAction::Fold => self.players[Seat::Computer].fold(),
        }
        debug!(?action, pot = self.pot, current_bet = self.current_bet, "computer acts");
        Ok(())
    }

    fn next_round(&mut self) {
        self.round += 1;
        self.current_bet = 0;
        for p in self.players.iter_mut() {
            p.reset_round();
        }
        if self.revealed < BOARD_SIZE {
            self.revealed += 1;
        }
        debug!(round = self.round, revealed = self.revealed, "next round");
        if self.round > ROUNDS_PER_HAND || self.revealed >= BOARD_SIZE {
            self.resolve_showdown();
        }
    }

    fn rank_names(&self) -> (String, String) {
        match &self.showdown {
            Some([human, computer]) => (rank_name(human), rank_name(computer)),
            None => (String::new(), String::new()),
        }
    }

    /// Pays the pot to `winner` and records the outcome.
    fn award(&mut self, winner: Seat, message: String, by_fold: bool) {
        let pot = self.pot;
        let net_gain = pot.saturating_sub(self.players[winner].total_bet_hand());
        self.players[winner].add_chips(pot);
        let (human_rank, computer_rank) = self.rank_names();
        info!(winner = ?winner, pot, net_gain, by_fold, "hand resolved");
        self.finish(HandOutcome {
            winner: Some(winner),
            winner_name: Some(self.players[winner].name().to_string()),
            message,
            net_gain,
            pot,
            human_rank,
            computer_rank,
            by_fold,
        });
    }

    fn finish(&mut self, outcome: HandOutcome) {
        self.revealed = BOARD_SIZE;
        self.phase = Phase::Result;
        self.log.push(outcome.message.clone());
        self.outcome = Some(outcome);
    }

    fn resolve_fold(&mut self) {
        let winner = if self.players[Seat::Human].folded() {
            Seat::Computer
        } else {
            Seat::Human
        };
        let message = format!("{} wins by fold!", self.players[winner].name());
        self.award(winner, message, true);
    }

    fn resolve_showdown(&mut self) {
        debug_assert!(self.showdown.is_some(), "showdown without dealt hands");
        let winner = match &self.showdown {
            Some([human, computer]) => match human.cmp(computer) {
                std::cmp::Ordering::Greater => Some(Seat::Human),
                std::cmp::Ordering::Less => Some(Seat::Computer),
                std::cmp::Ordering::Equal => None,
            },
            None => {
                warn!(pot = self.pot, "showdown without dealt hands, splitting the pot");
                None
            }
        };
        match winner {
            Some(seat) => {
                let message = format!("{} WINS!", self.players[seat].name());
                self.award(seat, message, false);
            }
            None => {
                // odd remainder stays out of both stacks
                let share = self.pot / 2;
                for p in self.players.iter_mut() {
                    p.add_chips(share);
                }
                info!(pot = self.pot, share, "hand drawn");
                let (human_rank, computer_rank) = self.rank_names();
                self.finish(HandOutcome {
                    winner: None,
                    winner_name: None,
                    message: "DRAW!".to_string(),
                    net_gain: 0,
                    pot: self.pot,
                    human_rank,
                    computer_rank,
                    by_fold: false,
                });
            }
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("policy", &self.policy.name())
            .field("phase", &self.phase)
            .field("players", &self.players)
            .field("board", &self.board)
            .field("revealed", &self.revealed)
            .field("round", &self.round)
            .field("pot", &self.pot)
            .field("current_bet", &self.current_bet)
            .field("first_player", &self.first_player)
            .field("outcome", &self.outcome)
            .finish()
    }
}
