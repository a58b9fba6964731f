use serde::{Deserialize, Serialize};

/// Raw fields posted from the new-application form. Every field arrives as a
/// string, possibly empty; axum's `Form` extractor fills the gaps with
/// defaults so partially completed forms still deserialize.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip_code: String,
    #[serde(default)]
    pub description: String,
}

/// Validation errors raised while opening an application. The display text is
/// what the form page shows next to the offending field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("Name can't be blank")]
    BlankName,
}

/// Normalize and validate a posted application form.
///
/// Only the applicant name is required; address, city, state, zip code, and
/// description may stay blank until submission. Whitespace-only values count
/// as blank.
pub fn screen_form(form: ApplicationForm) -> Result<ApplicationForm, IntakeError> {
    let form = ApplicationForm {
        name: form.name.trim().to_string(),
        address: form.address.trim().to_string(),
        city: form.city.trim().to_string(),
        state: form.state.trim().to_string(),
        zip_code: form.zip_code.trim().to_string(),
        description: form.description.trim().to_string(),
    };

    if form.name.is_empty() {
        return Err(IntakeError::BlankName);
    }

    Ok(form)
}
