use serde::{Deserialize, Serialize};

use crate::entities::{Category, Place, PlaceRecord};
use crate::error::Error;
use crate::validation::{parse_coordinate, validate_place, PlaceInput};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaceForm {
    pub name: String,
    pub description: String,
    pub category: String,
    pub latitude: String,
    pub longitude: String,
    pub address: String,
    pub image_url: String,
    pub is_famous: bool,
    pub source: String,
}

impl Default for PlaceForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            category: Category::default().name().into(),
            latitude: String::new(),
            longitude: String::new(),
            address: String::new(),
            image_url: String::new(),
            is_famous: false,
            source: String::new(),
        }
    }
}

impl PlaceForm {
    pub fn from_place(place: &Place) -> Self {
        Self {
            name: place.name.clone(),
            description: place.description.clone().unwrap_or_default(),
            category: place.category.clone(),
            latitude: place.latitude.to_string(),
            longitude: place.longitude.to_string(),
            address: place.address.clone().unwrap_or_default(),
            image_url: place.image_url.clone().unwrap_or_default(),
            is_famous: place.is_famous,
            source: place.source.clone().unwrap_or_default(),
        }
    }

    pub fn to_input(&self) -> PlaceInput {
        PlaceInput {
            name: self.name.clone(),
            description: Some(self.description.clone()),
            category: self.category.clone(),
            latitude: parse_coordinate(&self.latitude),
            longitude: parse_coordinate(&self.longitude),
            address: Some(self.address.clone()),
            image_url: self.image_url.clone(),
            source: Some(self.source.clone()),
        }
    }

    pub fn to_record(&self) -> Result<PlaceRecord, Error> {
        let place = validate_place(self.to_input())?;

        Ok(PlaceRecord::new(place, self.is_famous))
    }
}
