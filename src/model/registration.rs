use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegistrationDto {
    pub id: i32,
    pub tournament_id: i32,
    pub player_id: i32,
    pub age_category_id: i32,
    /// None when the weigh-in did not fall into any weight category
    pub weight_category_id: Option<i32>,
    pub weigh_in_weight: Option<f64>,
}

impl From<entity::tournament_registration::Model> for RegistrationDto {
    fn from(registration: entity::tournament_registration::Model) -> Self {
        Self {
            id: registration.id,
            tournament_id: registration.tournament_id,
            player_id: registration.player_id,
            age_category_id: registration.age_category_id,
            weight_category_id: registration.weight_category_id,
            weigh_in_weight: registration.weigh_in_weight,
        }
    }
}
