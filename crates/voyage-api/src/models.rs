//! Request and response bodies exchanged with the API

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ApiError;

/// Body of `POST /auth/login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// What the signup screen collects
///
/// `confirm_password` is checked locally and never sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    /// Checks the form and produces the request body
    pub fn to_request(&self) -> Result<SignupRequest, ApiError> {
        if self.password != self.confirm_password {
            return Err(ApiError::PasswordMismatch);
        }

        Ok(SignupRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

/// Body of `POST /auth/signup`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Response of both auth endpoints
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthToken {
    pub token: String,
}

/// Error body the API sends with non-2xx responses
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub name: String,
}

/// A travel plan as listed by `GET /itineraries`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(with = "calendar_date")]
    pub start_date: NaiveDate,
    #[serde(with = "calendar_date")]
    pub end_date: NaiveDate,
    pub budget: f64,
    #[serde(default)]
    pub destinations: Vec<Destination>,
}

impl Itinerary {
    /// Destination names joined for display, e.g. `Florence, Siena, Pisa`
    pub fn destination_names(&self) -> String {
        self.destinations
            .iter()
            .map(|d| d.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Number of calendar days covered, both ends included
    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

/// Dates arrive either as `2024-12-01` or as full RFC 3339 timestamps
mod calendar_date {
    use chrono::{DateTime, NaiveDate, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;

        NaiveDate::parse_from_str(&raw, FORMAT)
            .or_else(|_| DateTime::parse_from_rfc3339(&raw).map(|dt| dt.with_timezone(&Utc).date_naive()))
            .map_err(|_| de::Error::custom(format!("invalid date `{raw}`")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_itinerary_from_api_json() {
        let json = r#"{
            "_id": "65f0c2",
            "title": "Road trip in Tuscany",
            "startDate": "2024-11-15T00:00:00.000Z",
            "endDate": "2024-11-22",
            "budget": 1200,
            "destinations": [{"name": "Florence"}, {"name": "Siena"}, {"name": "Pisa"}]
        }"#;

        let itinerary: Itinerary = serde_json::from_str(json).unwrap();
        assert_eq!(itinerary.id, "65f0c2");
        assert_eq!(itinerary.start_date, NaiveDate::from_ymd_opt(2024, 11, 15).unwrap());
        assert_eq!(itinerary.end_date, NaiveDate::from_ymd_opt(2024, 11, 22).unwrap());
        assert_eq!(itinerary.budget, 1200.0);
        assert_eq!(itinerary.destination_names(), "Florence, Siena, Pisa");
        assert_eq!(itinerary.days(), 8);
    }

    #[test]
    fn test_itinerary_without_destinations() {
        let json = r#"{"_id": "1", "title": "Paris", "startDate": "2024-12-01",
                       "endDate": "2024-12-07", "budget": 800.5}"#;
        let itinerary: Itinerary = serde_json::from_str(json).unwrap();
        assert!(itinerary.destinations.is_empty());
        assert_eq!(itinerary.destination_names(), "");
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        let json = r#"{"_id": "1", "title": "x", "startDate": "next week",
                       "endDate": "2024-12-07", "budget": 1}"#;
        let err = serde_json::from_str::<Itinerary>(json).unwrap_err();
        assert!(err.to_string().contains("invalid date `next week`"));
    }

    #[test]
    fn test_itinerary_serializes_api_field_names() {
        let itinerary = Itinerary {
            id: "1".into(),
            title: "Bali beaches".into(),
            start_date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 1, 20).unwrap(),
            budget: 1500.0,
            destinations: vec![Destination { name: "Ubud".into() }],
        };

        let value = serde_json::to_value(&itinerary).unwrap();
        assert_eq!(value["_id"], "1");
        assert_eq!(value["startDate"], "2025-01-10");
        assert_eq!(value["endDate"], "2025-01-20");
    }

    #[test]
    fn test_signup_form_checks_confirmation() {
        let mut form = SignupForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            password: "s3cret".into(),
            confirm_password: "s3cret".into(),
        };
        let request = form.to_request().unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"name": "Ada", "email": "ada@example.com", "password": "s3cret"})
        );

        form.confirm_password = "typo".into();
        assert!(matches!(form.to_request(), Err(ApiError::PasswordMismatch)));
    }
}
