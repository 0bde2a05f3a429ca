use crate::modules::cases::core::areas::AreaCatalog;
use crate::modules::cases::core::process_templates::ProcessCatalog;
use crate::modules::cases::core::session::Session;
use crate::modules::cases::use_cases::create_case::command::CreateCase;
use crate::modules::cases::use_cases::errors::{ValidationError, require};

/// Stands in for the creator's area when the session has none.
pub const CREATOR_AREA_FALLBACK: &str = "Área del creador";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationPlan {
    /// Origin of the initial movement.
    pub creator_area: String,
    /// Prefix of the case code.
    pub prefix: String,
}

pub fn decide_create(
    session: &Session,
    command: &CreateCase,
    areas: &AreaCatalog,
    processes: &ProcessCatalog,
) -> Result<CreationPlan, ValidationError> {
    require(&command.title, "title")?;
    require(&command.sender_name, "sender_name")?;
    require(&command.first_area, "first_area")?;
    require(&command.final_area, "final_area")?;

    for area in [&command.first_area, &command.final_area] {
        if !areas.contains(area) {
            return Err(ValidationError::UnknownArea(area.clone()));
        }
    }
    if let Some(template) = &command.process_template {
        if processes.get(template).is_none() {
            return Err(ValidationError::UnknownProcessTemplate(template.clone()));
        }
    }

    let creator_area = session
        .area
        .as_deref()
        .map(str::trim)
        .filter(|area| !area.is_empty())
        .unwrap_or(CREATOR_AREA_FALLBACK)
        .to_string();
    let prefix = areas.code_for(&creator_area).to_string();
    Ok(CreationPlan { creator_area, prefix })
}
