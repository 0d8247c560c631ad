//! Boundary validation for compliance requests
//!
//! The engine assumes a well-formed request; callers reject anything that
//! fails [`ComplianceRequest::validate`] before invoking it.

use thiserror::Error;

use crate::types::{CanvasObject, ComplianceRequest, ObjectKind};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Canvas dimensions must be positive and finite (got {width}x{height})")]
    InvalidCanvasSize { width: f64, height: f64 },

    #[error("Background color is empty")]
    EmptyBackground,

    #[error("Object at index {0} has an empty id")]
    EmptyObjectId(usize),

    #[error("Object '{id}' has invalid geometry: {reason}")]
    InvalidGeometry { id: String, reason: String },

    #[error("Object '{id}' is an image but carries text field '{field}'")]
    TextFieldOnImage { id: String, field: &'static str },

    #[error("Object '{id}' is text but carries image field '{field}'")]
    ImageFieldOnText { id: String, field: &'static str },

    #[error("Object '{id}' has invalid font size {size}")]
    InvalidFontSize { id: String, size: f64 },
}

impl ComplianceRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let canvas = &self.canvas_data;

        if !(canvas.width.is_finite() && canvas.width > 0.0)
            || !(canvas.height.is_finite() && canvas.height > 0.0)
        {
            return Err(ValidationError::InvalidCanvasSize {
                width: canvas.width,
                height: canvas.height,
            });
        }

        if canvas.background_color.trim().is_empty() {
            return Err(ValidationError::EmptyBackground);
        }

        for (index, object) in canvas.objects.iter().enumerate() {
            validate_object(index, object)?;
        }

        Ok(())
    }
}

fn validate_object(index: usize, object: &CanvasObject) -> Result<(), ValidationError> {
    if object.id.trim().is_empty() {
        return Err(ValidationError::EmptyObjectId(index));
    }

    let geometry = [
        ("x", object.x),
        ("y", object.y),
        ("width", object.width),
        ("height", object.height),
    ];
    for (field, value) in geometry {
        if !value.is_finite() {
            return Err(ValidationError::InvalidGeometry {
                id: object.id.clone(),
                reason: format!("{} is not finite", field),
            });
        }
    }
    if object.width < 0.0 || object.height < 0.0 {
        return Err(ValidationError::InvalidGeometry {
            id: object.id.clone(),
            reason: "negative size".to_string(),
        });
    }

    match object.kind {
        ObjectKind::Image => {
            let text_fields = [
                ("text", object.text.is_some()),
                ("fontSize", object.font_size.is_some()),
                ("fontFamily", object.font_family.is_some()),
            ];
            if let Some((field, _)) = text_fields.iter().find(|(_, present)| *present) {
                return Err(ValidationError::TextFieldOnImage {
                    id: object.id.clone(),
                    field: *field,
                });
            }
        }
        ObjectKind::Text => {
            if object.image_name.is_some() {
                return Err(ValidationError::ImageFieldOnText {
                    id: object.id.clone(),
                    field: "imageName",
                });
            }
            if let Some(size) = object.font_size {
                if !size.is_finite() || size < 0.0 {
                    return Err(ValidationError::InvalidFontSize {
                        id: object.id.clone(),
                        size,
                    });
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CanvasFormat, CanvasSnapshot};

    fn request_with(object: CanvasObject) -> ComplianceRequest {
        ComplianceRequest::new(CanvasSnapshot::new(CanvasFormat::Square).with_object(object))
    }

    #[test]
    fn test_accepts_well_formed_request() {
        let request = request_with(
            CanvasObject::text("headline", "Fresh", 32.0).at(10.0, 10.0, 200.0, 40.0),
        );
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_height_canvas() {
        let mut request = request_with(CanvasObject::text("t", "x", 24.0));
        request.canvas_data.height = 0.0;
        assert!(matches!(
            request.validate(),
            Err(ValidationError::InvalidCanvasSize { .. })
        ));
    }

    #[test]
    fn test_rejects_non_finite_geometry() {
        let request = request_with(CanvasObject::image("img", "a.png").at(f64::NAN, 0.0, 1.0, 1.0));
        assert!(matches!(
            request.validate(),
            Err(ValidationError::InvalidGeometry { .. })
        ));
    }

    #[test]
    fn test_rejects_text_fields_on_image() {
        let mut image = CanvasObject::image("img", "a.png");
        image.font_size = Some(12.0);
        let err = request_with(image).validate().unwrap_err();
        assert_eq!(
            err,
            ValidationError::TextFieldOnImage {
                id: "img".to_string(),
                field: "fontSize"
            }
        );
    }

    #[test]
    fn test_rejects_image_name_on_text() {
        let mut text = CanvasObject::text("t", "hello", 24.0);
        text.image_name = Some("logo.png".to_string());
        assert!(matches!(
            request_with(text).validate(),
            Err(ValidationError::ImageFieldOnText { .. })
        ));
    }

    #[test]
    fn test_rejects_empty_id() {
        let request = request_with(CanvasObject::text(" ", "hello", 24.0));
        assert_eq!(request.validate(), Err(ValidationError::EmptyObjectId(0)));
    }
}
