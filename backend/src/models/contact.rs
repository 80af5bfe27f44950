use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormType {
    #[default]
    Buoy,
    Suam,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// Quote request as posted by the contact page. Absent fields read as empty.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactRequest {
    pub form_type: FormType,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub organization: String,
    pub organization_type: String,
    pub fleet_size: String,
    pub deployment_area: String,
    pub use_case: String,
    pub additional_info: String,
}

impl ContactRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut required = vec![("name", &self.name), ("email", &self.email)];
        if self.form_type == FormType::Buoy {
            required.extend([
                ("organization", &self.organization),
                ("organizationType", &self.organization_type),
                ("fleetSize", &self.fleet_size),
            ]);
        }
        required.extend([
            ("deploymentArea", &self.deployment_area),
            ("useCase", &self.use_case),
        ]);

        if let Some((field, _)) = required.into_iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(ValidationError::MissingField(field));
        }
        if !self.email.contains('@') {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }

    /// Rate-limit key. Case and surrounding space don't make a new sender.
    pub fn sender_key(&self) -> String {
        self.email.trim().to_lowercase()
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct ContactInquiry {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
    #[serde(flatten)]
    pub request: ContactRequest,
}

impl ContactInquiry {
    pub fn new(request: ContactRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
            request,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContactResponse {
    pub id: Uuid,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suam() -> ContactRequest {
        ContactRequest {
            form_type: FormType::Suam,
            name: "Ada".into(),
            email: "ada@sea.org".into(),
            deployment_area: "Gulf of Maine".into(),
            use_case: "Fishing".into(),
            ..Default::default()
        }
    }

    #[test]
    fn suam_needs_no_organization() {
        assert_eq!(suam().validate(), Ok(()));
    }

    #[test]
    fn buoy_requires_organization_fields_in_order() {
        let mut req = ContactRequest {
            form_type: FormType::Buoy,
            ..suam()
        };
        assert_eq!(req.validate(), Err(ValidationError::MissingField("organization")));
        req.organization = "Harbor Co".into();
        assert_eq!(req.validate(), Err(ValidationError::MissingField("organizationType")));
        req.organization_type = "shipping".into();
        assert_eq!(req.validate(), Err(ValidationError::MissingField("fleetSize")));
        req.fleet_size = "10 vessels".into();
        assert_eq!(req.validate(), Ok(()));
    }

    #[test]
    fn whitespace_counts_as_missing() {
        let req = ContactRequest {
            name: "   ".into(),
            ..suam()
        };
        assert_eq!(
            req.validate().unwrap_err().to_string(),
            "name is required"
        );
    }

    #[test]
    fn email_needs_at_sign() {
        let req = ContactRequest {
            email: "ada.sea.org".into(),
            ..suam()
        };
        assert_eq!(req.validate(), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn deserializes_camel_case_with_missing_fields() {
        let req: ContactRequest = serde_json::from_str(
            r#"{"formType":"suam","name":"Ada","email":"ada@sea.org","useCase":"Fishing"}"#,
        )
        .unwrap();
        assert_eq!(req.form_type, FormType::Suam);
        assert_eq!(req.use_case, "Fishing");
        assert_eq!(req.deployment_area, "");
        assert_eq!(req.validate(), Err(ValidationError::MissingField("deploymentArea")));
    }

    #[test]
    fn sender_key_normalizes_email() {
        let req = ContactRequest {
            email: "  Ada@Sea.ORG ".into(),
            ..suam()
        };
        assert_eq!(req.sender_key(), "ada@sea.org");
    }
}
