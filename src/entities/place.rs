use chrono::{DateTime, Utc};
use oso::PolarClass;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::validation::ValidPlace;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, PolarClass, sqlx::FromRow)]
pub struct Place {
    #[polar(attribute)]
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    #[polar(attribute)]
    pub category: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: Option<String>,
    pub image_url: Option<String>,
    #[polar(attribute)]
    pub is_famous: bool,
    pub source: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaceRecord {
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: Option<String>,
    pub image_url: Option<String>,
    pub is_famous: bool,
    pub source: Option<String>,
}

impl PlaceRecord {
    pub fn new(place: ValidPlace, is_famous: bool) -> Self {
        Self {
            name: place.name,
            description: place.description,
            category: place.category,
            latitude: place.latitude,
            longitude: place.longitude,
            address: place.address,
            image_url: place.image_url,
            is_famous,
            source: place.source,
        }
    }
}

impl Place {
    pub fn new(record: PlaceRecord) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: record.name,
            description: record.description,
            category: record.category,
            latitude: record.latitude,
            longitude: record.longitude,
            address: record.address,
            image_url: record.image_url,
            is_famous: record.is_famous,
            source: record.source,
            created_at: Utc::now(),
        }
    }

    pub fn apply(&mut self, record: PlaceRecord) {
        self.name = record.name;
        self.description = record.description;
        self.category = record.category;
        self.latitude = record.latitude;
        self.longitude = record.longitude;
        self.address = record.address;
        self.image_url = record.image_url;
        self.is_famous = record.is_famous;
        self.source = record.source;
    }
}
