//! Match orchestration: combatants, the turn protocol and the win state
//! machine.

use rand::rngs::SmallRng;

use crate::board::Board;
use crate::player::MoveSource;

/// One of the two sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

/// State of the match state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    /// Waiting for the given side to take its turn.
    AwaitingTurn(Side),
    /// Terminal: the given side sank the whole opposing fleet.
    Finished(Side),
}

/// One side's pairing of its own board with its target-selection capability.
/// Shots land on this board only via the opponent's turns, mediated by
/// [`Match`].
pub struct Combatant {
    board: Board,
    source: Box<dyn MoveSource>,
}

impl Combatant {
    pub fn new(board: Board, source: Box<dyn MoveSource>) -> Self {
        Self { board, source }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
}

/// Run one combatant's turn against the opponent board. Rejected shots are
/// fed back to the move source and a fresh candidate requested; the loop
/// only ends on a resolved shot. Returns whether the shooter goes again.
fn take_turn(source: &mut dyn MoveSource, opponent: &mut Board, rng: &mut SmallRng) -> bool {
    loop {
        let target = source.select_target(rng, opponent.size());
        match opponent.shoot(target) {
            Ok(outcome) => {
                source.notify_outcome(target, outcome);
                return outcome.grants_extra_shot();
            }
            Err(reason) => source.notify_rejected(target, &reason),
        }
    }
}

/// Alternates turns between two combatants until one fleet is gone.
///
/// A hit or sink keeps the active side shooting; the win check takes
/// precedence, so the shot that sinks the last ship ends the match
/// immediately. With two fully placed fleets the match always ends in a
/// win, never a draw.
pub struct Match {
    combatants: [Combatant; 2],
    state: MatchState,
}

impl Match {
    pub fn new(first: Combatant, second: Combatant) -> Self {
        Self {
            combatants: [first, second],
            state: MatchState::AwaitingTurn(Side::First),
        }
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        &self.combatants[side.index()]
    }

    /// The winning side, once the match is finished.
    pub fn winner(&self) -> Option<Side> {
        match self.state {
            MatchState::Finished(side) => Some(side),
            MatchState::AwaitingTurn(_) => None,
        }
    }

    /// Execute one turn of the active side and advance the state machine.
    /// A no-op once the match is finished.
    pub fn step(&mut self, rng: &mut SmallRng) -> MatchState {
        let active = match self.state {
            MatchState::AwaitingTurn(side) => side,
            MatchState::Finished(_) => return self.state,
        };
        let (left, right) = self.combatants.split_at_mut(1);
        let (shooter, opponent) = match active {
            Side::First => (&mut left[0], &mut right[0]),
            Side::Second => (&mut right[0], &mut left[0]),
        };
        let again = take_turn(shooter.source.as_mut(), &mut opponent.board, rng);
        self.state = if opponent.board.is_match_won() {
            log::info!("{:?} side wins", active);
            MatchState::Finished(active)
        } else if again {
            MatchState::AwaitingTurn(active)
        } else {
            MatchState::AwaitingTurn(active.other())
        };
        self.state
    }

    /// Drive the match to completion and return the winner.
    pub fn run(&mut self, rng: &mut SmallRng) -> Side {
        loop {
            if let MatchState::Finished(winner) = self.step(rng) {
                return winner;
            }
        }
    }
}
