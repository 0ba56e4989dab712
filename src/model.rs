// Car records exchanged with the service. They live only for the duration
// of one request; nothing is cached client-side.

use serde::{Deserialize, Serialize};

/// Full record as listed by the service and as submitted on create.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Car {
    pub id: i64,
    pub brand: String,
    pub model: String,
    pub production_year: i32,
    pub convertible: bool,
}

/// Record body without the identifier, used for updates where the id
/// travels in the path only.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CarFields {
    pub brand: String,
    pub model: String,
    pub production_year: i32,
    pub convertible: bool,
}

impl CarFields {
    pub fn with_id(self, id: i64) -> Car {
        Car {
            id,
            brand: self.brand,
            model: self.model,
            production_year: self.production_year,
            convertible: self.convertible,
        }
    }
}
