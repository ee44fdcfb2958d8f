use serde::{Deserialize, Serialize};

use crate::Collection;

/// A non-exclusive surveyor who can be authorized to inspect vessels.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Collection)]
#[serde(default)]
#[collection(key = "maj_surveyors_db")]
pub struct Surveyor {
    pub id: String,
    pub name: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub company: String,
}

/// Fields supplied when adding a surveyor. Name and location are required.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewSurveyor {
    pub name: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub company: String,
}

impl NewSurveyor {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            ..Default::default()
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.company = company.into();
        self
    }
}
