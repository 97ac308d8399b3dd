use dioxus_logger::tracing;
use rand::{rngs::StdRng, Rng, SeedableRng};
use sea_orm::TransactionTrait;

use crate::{
    bracket::{
        cohort::{group_cohorts, Registrant},
        plan::{plan_bracket, BracketPlan},
    },
    data::{
        bracket::BracketRepository, registration::RegistrationRepository,
        tournament::TournamentRepository, tournament_match::TournamentMatchRepository,
    },
    error::{BracketError, Error},
    model::bracket::GenerationSummary,
    service::bracket::BracketService,
};

impl<'a> BracketService<'a> {
    /// Regenerates every bracket of a tournament, seeding elimination brackets from OS entropy.
    ///
    /// See [`generate_brackets_with_rng`](Self::generate_brackets_with_rng).
    pub async fn generate_brackets(&self, tournament_id: i32) -> Result<GenerationSummary, Error> {
        let mut rng = StdRng::from_os_rng();

        self.generate_brackets_with_rng(tournament_id, &mut rng)
            .await
    }

    /// Regenerates every bracket of a tournament using the provided randomness source.
    ///
    /// Eligible registrations (those with a weight category) are grouped into cohorts by gender,
    /// age category, and weight category. Each cohort of two or more gets one bracket, played as
    /// a round-robin up to five participants and as single elimination above that. All existing
    /// brackets and matches of the tournament are deleted and the new ones inserted in a single
    /// transaction.
    ///
    /// # Arguments
    /// - `tournament_id` - ID of the tournament to generate brackets for
    /// - `rng` - Randomness source for elimination seeding, pass a seeded generator for
    ///   reproducible brackets
    ///
    /// # Returns
    /// - `Ok(GenerationSummary)` - Number of brackets and matches created
    /// - `Err(BracketError::TournamentNotFound)` - Tournament does not exist
    /// - `Err(BracketError::NoEligibleRegistrations)` - No registration has a weight category,
    ///   nothing was changed
    /// - `Err(Error::DbErr)` - Database operation failed, the transaction was rolled back
    pub async fn generate_brackets_with_rng<R: Rng + ?Sized>(
        &self,
        tournament_id: i32,
        rng: &mut R,
    ) -> Result<GenerationSummary, Error> {
        let tournament_repo = TournamentRepository::new(self.db);
        let registration_repo = RegistrationRepository::new(self.db);

        if tournament_repo.get_by_id(tournament_id).await?.is_none() {
            return Err(BracketError::TournamentNotFound(tournament_id).into());
        }

        let registrations = registration_repo
            .get_eligible_by_tournament_id(tournament_id)
            .await?;

        if registrations.is_empty() {
            return Err(BracketError::NoEligibleRegistrations { tournament_id }.into());
        }

        let mut registrants = Vec::with_capacity(registrations.len());
        for (registration, player) in registrations {
            let Some(player) = player else {
                tracing::warn!(
                    tournament_id,
                    registration_id = registration.id,
                    player_id = registration.player_id,
                    "Registration references a missing player; skipping registration"
                );
                continue;
            };

            registrants.push(Registrant {
                player_id: player.id,
                gender: player.gender,
                club: player.club.unwrap_or_default(),
                age_category_id: registration.age_category_id,
                weight_category_id: registration.weight_category_id,
            });
        }

        // Plan everything up front so the transaction only performs writes
        let plans: Vec<BracketPlan> = group_cohorts(registrants)
            .into_iter()
            .map(|cohort| plan_bracket(cohort, &mut *rng))
            .collect();

        let txn = self.db.begin().await?;

        let bracket_repo = BracketRepository::new(&txn);
        let match_repo = TournamentMatchRepository::new(&txn);

        let deleted = bracket_repo.delete_by_tournament_id(tournament_id).await?;

        let mut matches_created = 0;
        for plan in &plans {
            let bracket = bracket_repo.create(tournament_id, plan).await?;
            let created = match_repo.create_many(bracket.id, &plan.matches).await?;

            tracing::debug!(
                tournament_id,
                bracket_id = bracket.id,
                gender = %plan.key.gender,
                age_category_id = plan.key.age_category_id,
                weight_category_id = plan.key.weight_category_id,
                format = ?plan.format,
                rounds = plan.rounds,
                matches = created,
                "Created bracket"
            );

            matches_created += created;
        }

        txn.commit().await?;

        tracing::info!(
            tournament_id,
            replaced = deleted,
            brackets = plans.len(),
            matches = matches_created,
            "Generated tournament brackets"
        );

        Ok(GenerationSummary {
            tournament_id,
            brackets_created: plans.len(),
            matches_created,
        })
    }
}
