use std::collections::{hash_map::Entry, BTreeMap, HashMap};

use sea_orm::ActiveEnum;

use crate::{
    bracket::placement::{entrant_count, resolve_placements},
    data::{
        bracket::BracketRepository, category::CategoryRepository, player::PlayerRepository,
        registration::RegistrationRepository, tournament::TournamentRepository,
        tournament_match::TournamentMatchRepository,
    },
    error::{BracketError, Error},
    model::bracket::{AwardsDto, BracketDto, CategoryParticipantsDto, MatchDto, PlayerDto},
    service::bracket::BracketService,
};

/// Shown in place of a category name that cannot be resolved
const UNKNOWN_CATEGORY: &str = "-";

impl<'a> BracketService<'a> {
    /// Builds the read view of every bracket in a tournament.
    ///
    /// Brackets are ordered by gender, age category, and weight category; matches within a
    /// bracket by round and match number. Placements and entrant counts are derived from the
    /// current state of the matches and are never stored.
    ///
    /// # Returns
    /// - `Ok(Vec<BracketDto>)` - One entry per bracket, empty if none were generated
    /// - `Err(BracketError::TournamentNotFound)` - Tournament does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_tournament_brackets(
        &self,
        tournament_id: i32,
    ) -> Result<Vec<BracketDto>, Error> {
        self.require_tournament(tournament_id).await?;

        let bracket_repo = BracketRepository::new(self.db);
        let match_repo = TournamentMatchRepository::new(self.db);
        let player_repo = PlayerRepository::new(self.db);

        let brackets = bracket_repo.get_by_tournament_id(tournament_id).await?;
        let bracket_ids: Vec<i32> = brackets.iter().map(|bracket| bracket.id).collect();

        let mut matches_by_bracket: HashMap<i32, Vec<entity::tournament_match::Model>> =
            HashMap::new();
        for tournament_match in match_repo.get_by_bracket_ids(&bracket_ids).await? {
            matches_by_bracket
                .entry(tournament_match.bracket_id)
                .or_default()
                .push(tournament_match);
        }

        let mut player_ids: Vec<i32> = matches_by_bracket
            .values()
            .flatten()
            .flat_map(|m| [m.player_one_id, m.player_two_id])
            .flatten()
            .collect();
        player_ids.sort_unstable();
        player_ids.dedup();

        let players: HashMap<i32, PlayerDto> = player_repo
            .get_many(&player_ids)
            .await?
            .iter()
            .map(|player| (player.id, PlayerDto::from(player)))
            .collect();
        let player = |id: Option<i32>| id.and_then(|id| players.get(&id).cloned());

        let (age_names, weight_names) = self.category_names().await?;

        let mut views = Vec::with_capacity(brackets.len());
        for bracket in brackets {
            let matches = matches_by_bracket.remove(&bracket.id).unwrap_or_default();
            let placements = resolve_placements(bracket.format, bracket.rounds, &matches);

            let awards = AwardsDto {
                gold: player(placements.gold),
                silver: player(placements.silver),
                bronze: placements
                    .bronze
                    .iter()
                    .filter_map(|id| player(Some(*id)))
                    .collect(),
            };

            views.push(BracketDto {
                id: bracket.id,
                gender: bracket.gender,
                age_category: category_name(&age_names, bracket.age_category_id),
                weight_category: category_name(&weight_names, bracket.weight_category_id),
                format: bracket.format.to_value(),
                rounds: bracket.rounds,
                entrant_count: entrant_count(&matches),
                champion: awards.gold.clone(),
                awards,
                matches: matches
                    .iter()
                    .map(|m| MatchDto {
                        id: m.id,
                        round_number: m.round_number,
                        match_number: m.match_number,
                        player_one: player(m.player_one_id),
                        player_two: player(m.player_two_id),
                        winner_id: m.winner_id,
                        status: m.status.to_value(),
                    })
                    .collect(),
            });
        }

        Ok(views)
    }

    /// Counts eligible registrants per gender, age category name, and weight category name.
    ///
    /// Unlike generation this includes cohorts too small to get a bracket, so operators can see
    /// who would be left out before generating. Categories sharing a name are counted together.
    ///
    /// # Returns
    /// - `Ok(Vec<CategoryParticipantsDto>)` - Counts ordered by gender, then by the first age
    ///   and weight category ID carrying each name
    /// - `Err(BracketError::TournamentNotFound)` - Tournament does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_category_participants(
        &self,
        tournament_id: i32,
    ) -> Result<Vec<CategoryParticipantsDto>, Error> {
        self.require_tournament(tournament_id).await?;

        let registration_repo = RegistrationRepository::new(self.db);
        let registrations = registration_repo
            .get_eligible_by_tournament_id(tournament_id)
            .await?;

        let mut counts: BTreeMap<(String, i32, i32), usize> = BTreeMap::new();
        for (registration, player) in registrations {
            let Some(weight_category_id) = registration.weight_category_id else {
                continue;
            };
            let gender = player
                .map(|player| player.gender)
                .unwrap_or_else(|| "unknown".to_string());

            *counts
                .entry((gender, registration.age_category_id, weight_category_id))
                .or_insert(0) += 1;
        }

        let (age_names, weight_names) = self.category_names().await?;

        let mut participants: Vec<CategoryParticipantsDto> = Vec::with_capacity(counts.len());
        let mut index: HashMap<(String, String, String), usize> = HashMap::new();

        for ((gender, age_category_id, weight_category_id), count) in counts {
            let age_category = category_name(&age_names, age_category_id);
            let weight_category = category_name(&weight_names, weight_category_id);

            match index.entry((gender.clone(), age_category.clone(), weight_category.clone())) {
                Entry::Occupied(entry) => participants[*entry.get()].participants += count,
                Entry::Vacant(entry) => {
                    entry.insert(participants.len());
                    participants.push(CategoryParticipantsDto {
                        gender,
                        age_category,
                        weight_category,
                        participants: count,
                    });
                }
            }
        }

        Ok(participants)
    }

    async fn require_tournament(&self, tournament_id: i32) -> Result<(), Error> {
        let tournament_repo = TournamentRepository::new(self.db);

        match tournament_repo.get_by_id(tournament_id).await? {
            Some(_) => Ok(()),
            None => Err(BracketError::TournamentNotFound(tournament_id).into()),
        }
    }

    async fn category_names(
        &self,
    ) -> Result<(HashMap<i32, String>, HashMap<i32, String>), Error> {
        let category_repo = CategoryRepository::new(self.db);

        let age_names = category_repo
            .get_age_categories()
            .await?
            .into_iter()
            .map(|category| (category.id, category.name))
            .collect();
        let weight_names = category_repo
            .get_all_weight_categories()
            .await?
            .into_iter()
            .map(|category| (category.id, category.name))
            .collect();

        Ok((age_names, weight_names))
    }
}

fn category_name(names: &HashMap<i32, String>, id: i32) -> String {
    names
        .get(&id)
        .cloned()
        .unwrap_or_else(|| UNKNOWN_CATEGORY.to_string())
}
