//! Resource Form

use crate::api::{self, ApiClient, Transport};
use crate::error::{SubmitError, ValidationError};
use crate::models::{Resource, ResourceCategory, ResourcePayload};
use super::{is_blank, optional_text};

pub const RESOURCE_CREATED: &str = "Resource added successfully.";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResourceDraft {
    pub title: String,
    pub description: String,
    pub link: String,
    pub category: ResourceCategory,
}

impl ResourceDraft {
    pub fn validate(&self) -> Result<ResourcePayload, ValidationError> {
        if is_blank(&self.title) || is_blank(&self.link) {
            return Err(ValidationError::MissingRequired);
        }
        let link = self.link.trim();
        if !(link.starts_with("http://") || link.starts_with("https://")) {
            return Err(ValidationError::InvalidLink);
        }

        Ok(ResourcePayload {
            title: self.title.trim().to_string(),
            description: optional_text(&self.description),
            link: link.to_string(),
            category: self.category,
        })
    }
}

pub async fn submit_resource<T: Transport>(
    api: &ApiClient<T>,
    draft: &ResourceDraft,
) -> Result<Resource, SubmitError> {
    let payload = draft.validate()?;
    let resource = api::create_resource(api, &payload).await?;
    log::info!("created resource {}", resource.id);
    Ok(resource)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{client, RecordingTransport};
    use futures::executor::block_on;

    #[test]
    fn test_requires_title_and_link() {
        let draft = ResourceDraft { title: "Breathing".into(), ..Default::default() };
        let transport = RecordingTransport::new();
        let err = block_on(submit_resource(&client(transport.clone()), &draft)).unwrap_err();

        assert_eq!(err, SubmitError::Invalid(ValidationError::MissingRequired));
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn test_link_scheme() {
        let draft = ResourceDraft {
            title: "Breathing".into(),
            link: "example.org/breathe".into(),
            ..Default::default()
        };
        assert_eq!(draft.validate(), Err(ValidationError::InvalidLink));
    }

    #[test]
    fn test_payload() {
        let draft = ResourceDraft {
            title: " Breathing ".into(),
            description: "Box breathing guide".into(),
            link: "https://example.org/breathe".into(),
            category: ResourceCategory::Mental,
        };
        let payload = draft.validate().unwrap();
        assert_eq!(payload.title, "Breathing");
        assert_eq!(payload.description.as_deref(), Some("Box breathing guide"));
        assert_eq!(payload.category, ResourceCategory::Mental);
    }
}
