pub use super::age_category::Entity as AgeCategory;
pub use super::bracket::Entity as Bracket;
pub use super::player::Entity as Player;
pub use super::tournament::Entity as Tournament;
pub use super::tournament_match::Entity as TournamentMatch;
pub use super::tournament_registration::Entity as TournamentRegistration;
pub use super::weight_category::Entity as WeightCategory;
