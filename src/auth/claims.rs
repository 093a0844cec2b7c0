use chrono::{Duration, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // User ObjectId as hex
    pub exp: usize,
    pub iat: usize,
}

impl Claims {
    pub fn new(user_id: &ObjectId, expiration_hours: i64) -> Self {
        let now = Utc::now();
        let exp = now + Duration::hours(expiration_hours);

        Self {
            sub: user_id.to_hex(),
            iat: now.timestamp() as usize,
            exp: exp.timestamp() as usize,
        }
    }
}
