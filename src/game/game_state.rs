//! Betting rules of a no-limit hold'em round.
//!
//! Amounts follow the "street total" convention: a call or raise names the
//! total a player will have committed on the current street, not the extra
//! chips. Big blind is twice the small blind; heads-up the button posts the
//! small blind and acts first preflop.

use crate::game::action::{ActionContext, PlayerAction, PlayerDecision, RaiseRange, ValidActions};
use crate::game::card::Card;
use crate::game::deck::Deck;
use crate::game::round_state::{RoundState, SeatView, Street};
use crate::game::seat::{Seat, SeatStatus};
use crate::game::GameError;
use crate::scoring::hand_rank::{best_hand, HandRank};
use log::debug;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    pub initial_stack: u32,
    pub small_blind: u32,
    pub max_rounds: u32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            initial_stack: 200,
            small_blind: 5,
            max_rounds: 20,
        }
    }
}

/// Full state of a table, hidden cards included.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    seats: Vec<Seat>,
    community: Vec<Card>,
    deck: Deck,
    street: Street,
    dealer_btn: usize,
    next_player: Option<usize>,
    small_blind: u32,
    round_count: u32,
    current_bet: u32,
    last_raise: u32,
}

impl GameState {
    /// A table between rounds. The first call to [`start_round`] puts the
    /// button on seat 0.
    ///
    /// [`start_round`]: GameState::start_round
    pub fn new(seats: Vec<Seat>, small_blind: u32) -> Result<Self, GameError> {
        if seats.len() < 2 {
            return Err(GameError::NotEnoughPlayers(seats.len()));
        }
        let dealer_btn = seats.len() - 1;
        Ok(Self {
            seats,
            community: Vec::new(),
            deck: Deck::new(),
            street: Street::Finished,
            dealer_btn,
            next_player: None,
            small_blind,
            round_count: 0,
            current_bet: 0,
            last_raise: 0,
        })
    }

    /// Seats `(uuid, name)` pairs with the configured starting stack.
    pub fn from_config(players: &[(String, String)], config: &TableConfig) -> Result<Self, GameError> {
        let seats = players
            .iter()
            .map(|(uuid, name)| Seat::new(uuid.clone(), name.clone(), config.initial_stack))
            .collect();
        Self::new(seats, config.small_blind)
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn seat(&self, uuid: &str) -> Option<&Seat> {
        self.seats.iter().find(|s| s.uuid == uuid)
    }

    pub fn community_cards(&self) -> &[Card] {
        &self.community
    }

    pub fn street(&self) -> Street {
        self.street
    }

    pub fn round_count(&self) -> u32 {
        self.round_count
    }

    pub fn dealer_btn(&self) -> usize {
        self.dealer_btn
    }

    pub fn next_player(&self) -> Option<usize> {
        self.next_player
    }

    pub fn big_blind(&self) -> u32 {
        self.small_blind * 2
    }

    pub fn pot(&self) -> u32 {
        self.seats.iter().map(|s| s.round_bet).sum()
    }

    pub fn is_round_finished(&self) -> bool {
        self.street == Street::Finished
    }

    pub fn stack_of(&self, uuid: &str) -> Option<u32> {
        self.seat(uuid).map(|s| s.stack)
    }

    pub fn players_with_chips(&self) -> usize {
        self.seats.iter().filter(|s| s.stack > 0).count()
    }

    /// No further round can be played.
    pub fn is_game_over(&self, max_rounds: u32) -> bool {
        self.is_round_finished() && (self.players_with_chips() < 2 || self.round_count >= max_rounds)
    }

    pub fn contenders(&self) -> usize {
        self.seats.iter().filter(|s| s.is_contender()).count()
    }

    /// Resets the seats, moves the button, posts the blinds and deals.
    pub fn start_round<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        if !self.is_round_finished() {
            return Err(GameError::RoundInProgress);
        }

        for seat in &mut self.seats {
            seat.reset_for_round();
        }
        let in_game = self
            .seats
            .iter()
            .filter(|s| s.status != SeatStatus::Eliminated)
            .count();
        if in_game < 2 {
            return Err(GameError::NotEnoughPlayers(in_game));
        }

        let seated = |s: &Seat| s.status != SeatStatus::Eliminated;
        self.round_count += 1;
        self.dealer_btn = self
            .next_seat_after(self.dealer_btn, seated)
            .ok_or(GameError::NotEnoughPlayers(in_game))?;

        let sb_seat = if in_game == 2 {
            self.dealer_btn
        } else {
            self.next_seat_after(self.dealer_btn, seated)
                .ok_or(GameError::NotEnoughPlayers(in_game))?
        };
        let bb_seat = self
            .next_seat_after(sb_seat, seated)
            .ok_or(GameError::NotEnoughPlayers(in_game))?;

        self.community.clear();
        self.deck = Deck::new();
        self.deck.shuffle(rng);
        self.street = Street::Preflop;

        let big_blind = self.big_blind();
        self.seats[sb_seat].commit(self.small_blind);
        self.seats[bb_seat].commit(big_blind);
        self.current_bet = big_blind;
        self.last_raise = big_blind;

        for idx in 0..self.seats.len() {
            if self.seats[idx].status != SeatStatus::Eliminated {
                self.seats[idx].hole_cards = self.deck.draw_many(2)?;
            }
        }

        debug!(
            "round {} started: button seat {}, blinds {}/{}",
            self.round_count, self.dealer_btn, self.small_blind, big_blind
        );

        let bet = self.current_bet;
        self.next_player = self.next_seat_after(bb_seat, |s| needs_action(s, bet));
        if self.next_player.is_none() {
            self.close_street()?;
        }
        Ok(())
    }

    fn valid_actions_for(&self, idx: usize) -> ValidActions {
        let seat = &self.seats[idx];
        let total = seat.street_bet + seat.stack;
        let call_amount = self.current_bet.min(total);
        let raise = (total > self.current_bet).then(|| {
            let min = self.current_bet + self.last_raise.max(self.big_blind());
            RaiseRange {
                min: min.min(total),
                max: total,
            }
        });
        ValidActions { call_amount, raise }
    }

    /// Legal moves of the player to act, `None` once the round is over.
    pub fn valid_actions(&self) -> Option<ValidActions> {
        self.next_player.map(|idx| self.valid_actions_for(idx))
    }

    pub fn round_state(&self) -> RoundState {
        RoundState {
            round_count: self.round_count,
            street: self.street,
            community_cards: self.community.clone(),
            pot: self.pot(),
            dealer_btn: self.dealer_btn,
            next_player: self.next_player,
            small_blind: self.small_blind,
            seats: self
                .seats
                .iter()
                .map(|s| SeatView {
                    uuid: s.uuid.clone(),
                    name: s.name.clone(),
                    stack: s.stack,
                    status: s.status,
                    street_bet: s.street_bet,
                    round_bet: s.round_bet,
                })
                .collect(),
        }
    }

    /// What the player to act gets to see.
    pub fn action_context(&self) -> Option<ActionContext> {
        self.next_player.map(|idx| {
            let seat = &self.seats[idx];
            ActionContext {
                player_uuid: seat.uuid.clone(),
                valid_actions: self.valid_actions_for(idx),
                hole_cards: seat.hole_cards.clone(),
                round_state: self.round_state(),
            }
        })
    }

    /// Applies the decision of the player to act and moves the round on.
    pub fn apply_action(&mut self, decision: PlayerDecision) -> Result<(), GameError> {
        let idx = self.next_player.ok_or(GameError::RoundFinished)?;
        let valid = self.valid_actions_for(idx);
        if !valid.is_legal(&decision) {
            return Err(GameError::IllegalAction {
                player: self.seats[idx].uuid.clone(),
                decision,
            });
        }

        match decision.action {
            PlayerAction::Fold => self.seats[idx].status = SeatStatus::Folded,
            PlayerAction::Call => {
                let seat = &mut self.seats[idx];
                let owed = decision.amount.saturating_sub(seat.street_bet);
                seat.commit(owed);
            }
            PlayerAction::Raise => {
                let seat = &mut self.seats[idx];
                let extra = decision.amount - seat.street_bet;
                seat.commit(extra);
                self.last_raise = self.last_raise.max(decision.amount - self.current_bet);
                self.current_bet = decision.amount;
                for (other, seat) in self.seats.iter_mut().enumerate() {
                    if other != idx {
                        seat.has_acted = false;
                    }
                }
            }
        }
        self.seats[idx].has_acted = true;

        if self.contenders() <= 1 {
            return self.finish_uncontested();
        }

        let bet = self.current_bet;
        self.next_player = self.next_seat_after(idx, |s| needs_action(s, bet));
        if self.next_player.is_none() {
            self.close_street()?;
        }
        Ok(())
    }

    /// Re-deals every card the agent cannot see: the opponents' hole cards and
    /// the undealt deck.
    pub fn determinize<R: Rng + ?Sized>(&self, agent: &str, rng: &mut R) -> GameState {
        let mut state = self.clone();
        let mut unseen = state.deck.cards.clone();
        for seat in state.seats.iter().filter(|s| s.uuid != agent) {
            unseen.extend(seat.hole_cards.iter().copied());
        }
        unseen.shuffle(rng);

        for seat in state.seats.iter_mut().filter(|s| s.uuid != agent) {
            let count = seat.hole_cards.len();
            seat.hole_cards = unseen.split_off(unseen.len() - count);
        }
        state.deck = Deck::from_cards(unseen);
        state
    }

    fn next_seat_after(&self, from: usize, predicate: impl Fn(&Seat) -> bool) -> Option<usize> {
        let n = self.seats.len();
        (1..=n)
            .map(|offset| (from + offset) % n)
            .find(|&idx| predicate(&self.seats[idx]))
    }

    fn deal_community(&mut self, count: usize) -> Result<(), GameError> {
        let cards = self.deck.draw_many(count)?;
        self.community.extend(cards);
        Ok(())
    }

    /// Ends the current street and deals the next ones until somebody has to
    /// act or the showdown is reached.
    fn close_street(&mut self) -> Result<(), GameError> {
        self.next_player = None;
        loop {
            for seat in &mut self.seats {
                seat.street_bet = 0;
                seat.has_acted = false;
            }
            self.current_bet = 0;
            self.last_raise = self.big_blind();

            let street = self.street;
            self.street = match street {
                Street::Preflop => {
                    self.deal_community(3)?;
                    Street::Flop
                }
                Street::Flop => {
                    self.deal_community(1)?;
                    Street::Turn
                }
                Street::Turn => {
                    self.deal_community(1)?;
                    Street::River
                }
                Street::River | Street::Showdown => return self.showdown(),
                Street::Finished => return Err(GameError::RoundFinished),
            };

            let can_act = self.seats.iter().filter(|s| s.can_act()).count();
            if can_act >= 2 {
                self.next_player = self.next_seat_after(self.dealer_btn, Seat::can_act);
                if self.next_player.is_some() {
                    return Ok(());
                }
            }
        }
    }

    fn finish_uncontested(&mut self) -> Result<(), GameError> {
        let pot = self.pot();
        let winner = self
            .seats
            .iter_mut()
            .find(|s| s.is_contender())
            .ok_or(GameError::NotEnoughPlayers(0))?;
        winner.stack += pot;
        debug!("{} wins uncontested pot of {}", winner.name, pot);
        self.finish_round();
        Ok(())
    }

    /// Splits the pot into side pots by contribution level and awards each
    /// one to the best eligible hand.
    fn showdown(&mut self) -> Result<(), GameError> {
        self.street = Street::Showdown;

        let mut hands: Vec<Option<HandRank>> = Vec::with_capacity(self.seats.len());
        for seat in &self.seats {
            if seat.is_contender() {
                let mut cards = seat.hole_cards.clone();
                cards.extend_from_slice(&self.community);
                hands.push(Some(best_hand(&cards)?));
            } else {
                hands.push(None);
            }
        }

        let mut remaining: Vec<u32> = self.seats.iter().map(|s| s.round_bet).collect();
        loop {
            let eligible: Vec<usize> = (0..self.seats.len())
                .filter(|&i| self.seats[i].is_contender() && remaining[i] > 0)
                .collect();
            let Some(level) = eligible.iter().map(|&i| remaining[i]).min() else {
                break;
            };

            let mut pot = 0;
            for chips in remaining.iter_mut() {
                let taken = (*chips).min(level);
                *chips -= taken;
                pot += taken;
            }
            self.award(pot, &eligible, &hands);
        }

        // chips of folded players above every contender's level
        let leftover: u32 = remaining.iter().sum();
        if leftover > 0 {
            let contenders: Vec<usize> = (0..self.seats.len())
                .filter(|&i| self.seats[i].is_contender())
                .collect();
            self.award(leftover, &contenders, &hands);
        }

        self.finish_round();
        Ok(())
    }

    fn award(&mut self, pot: u32, eligible: &[usize], hands: &[Option<HandRank>]) {
        let Some(best) = eligible.iter().filter_map(|&i| hands[i]).max() else {
            return;
        };

        let n = self.seats.len();
        let btn = self.dealer_btn;
        let mut winners: Vec<usize> = eligible
            .iter()
            .copied()
            .filter(|&i| hands[i] == Some(best))
            .collect();
        winners.sort_by_key(|&i| (i + n - btn - 1) % n);

        let share = pot / winners.len() as u32;
        let odd_chips = (pot % winners.len() as u32) as usize;
        for (position, &idx) in winners.iter().enumerate() {
            let bonus = u32::from(position < odd_chips);
            self.seats[idx].stack += share + bonus;
            debug!("{} wins {} with {:?}", self.seats[idx].name, share + bonus, best.category);
        }
    }

    fn finish_round(&mut self) {
        self.street = Street::Finished;
        self.next_player = None;
        for seat in &mut self.seats {
            if seat.stack == 0 {
                seat.status = SeatStatus::Eliminated;
            }
        }
    }
}

fn needs_action(seat: &Seat, current_bet: u32) -> bool {
    seat.can_act() && (!seat.has_acted || seat.street_bet < current_bet)
}
