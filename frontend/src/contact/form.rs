use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormType {
    #[default]
    Buoy,
    Suam,
}

impl FormType {
    pub fn title(&self) -> &'static str {
        match self {
            FormType::Buoy => "Buoy Network",
            FormType::Suam => "SUAM System",
        }
    }

    pub fn audience(&self) -> &'static str {
        match self {
            FormType::Buoy => "For Organizations",
            FormType::Suam => "For Individual Vessels",
        }
    }

    pub fn price_range(&self) -> (&'static str, &'static str, &'static str) {
        match self {
            FormType::Buoy => (
                "$150 - $250",
                "per buoy unit",
                "Volume discounts available for orders of 10+ units",
            ),
            FormType::Suam => (
                "$800 - $1,200",
                "per SUAM system",
                "Installation and training included",
            ),
        }
    }

    pub fn from_product(product: &str) -> Option<Self> {
        match product {
            "network" | "buoy" => Some(FormType::Buoy),
            "suam" => Some(FormType::Suam),
            _ => None,
        }
    }
}

pub const ORGANIZATION_TYPES: [(&str, &str); 6] = [
    ("shipping", "Shipping Company"),
    ("coastal", "Coastal Management"),
    ("research", "Research Institution"),
    ("government", "Government Agency"),
    ("conservation", "Conservation Organization"),
    ("other", "Other"),
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Request failed: {0}")]
    Network(String),
    #[error("{0}")]
    Rejected(String),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
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

impl ContactForm {
    /// Required fields, keyed by their wire name, in form order.
    fn required(&self) -> Vec<(&'static str, &str)> {
        let mut fields = vec![("name", self.name.as_str()), ("email", self.email.as_str())];
        if self.form_type == FormType::Buoy {
            fields.push(("organization", self.organization.as_str()));
            fields.push(("organizationType", self.organization_type.as_str()));
            fields.push(("fleetSize", self.fleet_size.as_str()));
        }
        fields.push(("deploymentArea", self.deployment_area.as_str()));
        fields.push(("useCase", self.use_case.as_str()));
        fields
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        for (field, value) in self.required() {
            if value.trim().is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        if !self.email.contains('@') {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }

    /// Switching product keeps what was typed.
    pub fn with_form_type(&self, form_type: FormType) -> Self {
        Self {
            form_type,
            ..self.clone()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

impl SubmitState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitState::Submitting)
    }
}

#[derive(Deserialize)]
pub struct ContactResponse {
    pub id: String,
    pub message: String,
}

/// Form and state after the server answers. A success clears the fields but
/// keeps the product; a failure leaves everything typed in place.
pub fn settle_submission(
    form: &ContactForm,
    result: Result<ContactResponse, ContactError>,
) -> (ContactForm, SubmitState) {
    match result {
        Ok(resp) => {
            log::info!("Contact inquiry {} accepted", resp.id);
            let cleared = ContactForm {
                form_type: form.form_type,
                ..Default::default()
            };
            (cleared, SubmitState::Succeeded)
        }
        Err(err) => {
            log::warn!("Contact submission failed: {}", err);
            (form.clone(), SubmitState::Failed(err.to_string()))
        }
    }
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

pub async fn submit(form: &ContactForm) -> Result<ContactResponse, ContactError> {
    form.validate()?;
    let url = format!("{}/api/contact", config::get_backend_url());
    let response = Request::post(&url)
        .json(form)
        .map_err(|e| ContactError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ContactError::Network(e.to_string()))?;

    if response.ok() {
        response
            .json::<ContactResponse>()
            .await
            .map_err(|e| ContactError::Network(e.to_string()))
    } else {
        let status = response.status();
        gloo_console::log!("Contact request failed with status:", status);
        match response.json::<ErrorResponse>().await {
            Ok(body) => Err(ContactError::Rejected(body.error)),
            Err(_) => Err(ContactError::Rejected(format!(
                "Submission failed ({})",
                status
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suam() -> ContactForm {
        ContactForm {
            form_type: FormType::Suam,
            name: "Ishmael".into(),
            email: "ish@pequod.com".into(),
            deployment_area: "Gulf of Maine".into(),
            use_case: "Route protection".into(),
            ..Default::default()
        }
    }

    #[test]
    fn suam_needs_only_common_fields() {
        assert_eq!(suam().validate(), Ok(()));
    }

    #[test]
    fn buoy_needs_organization_fields() {
        let buoy = suam().with_form_type(FormType::Buoy);
        assert_eq!(
            buoy.validate(),
            Err(ContactError::MissingField("organization"))
        );
        let mut buoy = buoy;
        buoy.organization = "Pequod Shipping".into();
        buoy.organization_type = "shipping".into();
        assert_eq!(buoy.validate(), Err(ContactError::MissingField("fleetSize")));
        buoy.fleet_size = "10 vessels".into();
        assert_eq!(buoy.validate(), Ok(()));
    }

    #[test]
    fn first_missing_field_is_reported() {
        let mut form = suam();
        form.name = " ".into();
        form.use_case.clear();
        assert_eq!(form.validate(), Err(ContactError::MissingField("name")));
        assert_eq!(form.validate().unwrap_err().to_string(), "name is required");
    }

    fn accepted() -> ContactResponse {
        ContactResponse {
            id: "3f1c".into(),
            message: "Thank you!".into(),
        }
    }

    #[test]
    fn accepted_submission_succeeds_and_clears_form() {
        let (form, state) = settle_submission(&suam(), Ok(accepted()));
        assert_eq!(state, SubmitState::Succeeded);
        assert_eq!(form.form_type, FormType::Suam);
        assert!(form.name.is_empty());
        assert!(form.use_case.is_empty());
    }

    #[test]
    fn failed_submission_keeps_form_editable() {
        let rejected = Err(ContactError::Rejected("Too many requests".into()));
        let (form, state) = settle_submission(&suam(), rejected);
        assert_eq!(state, SubmitState::Failed("Too many requests".into()));
        assert!(!state.is_submitting());
        assert_eq!(form, suam());
    }

    #[test]
    fn email_needs_at_sign() {
        let mut form = suam();
        form.email = "ish.pequod.com".into();
        assert_eq!(form.validate(), Err(ContactError::InvalidEmail));
    }

    #[test]
    fn serializes_camel_case_with_lowercase_form_type() {
        let json = serde_json::to_value(suam()).unwrap();
        assert_eq!(json["formType"], "suam");
        assert_eq!(json["deploymentArea"], "Gulf of Maine");
        assert!(json.get("organizationType").is_some());
        assert!(json.get("deployment_area").is_none());
    }

    #[test]
    fn product_query_maps_to_form_type() {
        assert_eq!(FormType::from_product("network"), Some(FormType::Buoy));
        assert_eq!(FormType::from_product("suam"), Some(FormType::Suam));
        assert_eq!(FormType::from_product(""), None);
    }
}
