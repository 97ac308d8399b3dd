//! Database model type aliases for test utilities.

/// Type alias for player database model.
pub type PlayerModel = entity::player::Model;

/// Type alias for tournament database model.
pub type TournamentModel = entity::tournament::Model;

/// Type alias for age category database model.
pub type AgeCategoryModel = entity::age_category::Model;

/// Type alias for weight category database model.
pub type WeightCategoryModel = entity::weight_category::Model;

/// Type alias for tournament registration database model.
pub type RegistrationModel = entity::tournament_registration::Model;

/// Type alias for bracket database model.
pub type BracketModel = entity::bracket::Model;

/// Type alias for tournament match database model.
pub type MatchModel = entity::tournament_match::Model;
