use thiserror::Error;

/// Errors raised by bracket generation, match advancement, and registration.
///
/// Every variant is terminal for the request that produced it. Nothing is written when one of
/// these is returned; open transactions roll back when dropped.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BracketError {
    /// No registration of the tournament has a weight category, so there is nothing to seed.
    #[error("Tournament {tournament_id} has no registrations eligible for bracket generation")]
    NoEligibleRegistrations { tournament_id: i32 },

    #[error("winner_id: player {winner_id} is not a participant of match {match_id}")]
    WinnerNotInMatch { match_id: i32, winner_id: i32 },

    #[error("registrations: player {player_id} is not eligible for any age category")]
    PlayerNotEligible { player_id: i32 },

    #[error("Tournament {tournament_id} is completed, its matches can no longer be changed")]
    TournamentCompleted { tournament_id: i32 },

    /// The next-round match fed by this match already has a result, changing the winner would
    /// leave it inconsistent.
    #[error(
        "Match {match_id} cannot change winner, the next-round match {next_match_id} already has a result"
    )]
    DownstreamMatchDecided { match_id: i32, next_match_id: i32 },

    #[error("Tournament {0} not found")]
    TournamentNotFound(i32),

    #[error("Match {match_id} not found in tournament {tournament_id}")]
    MatchNotFound { tournament_id: i32, match_id: i32 },

    #[error("Player {0} not found")]
    PlayerNotFound(i32),
}
