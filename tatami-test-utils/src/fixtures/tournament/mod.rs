use crate::TestContext;

pub mod data;

/// Clubs assigned round-robin to players created by [`TournamentFixtures::insert_mock_cohort`].
pub const CLUBS: [&str; 3] = ["Kodokan", "Shinbukan", "Ryusei"];

impl TestContext {
    pub fn tournament<'a>(&'a self) -> TournamentFixtures<'a> {
        TournamentFixtures { setup: self }
    }
}

pub struct TournamentFixtures<'a> {
    pub setup: &'a TestContext,
}
