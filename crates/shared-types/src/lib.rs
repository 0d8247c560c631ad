pub mod report;
pub mod types;
pub mod validation;

pub use report::{ComplianceReport, RuleName, RuleStatus, RuleVerdict};
pub use types::{
    Bounds, CanvasFormat, CanvasObject, CanvasSnapshot, ComplianceRequest, ObjectKind,
    ProductType, SafeZone,
};
pub use validation::ValidationError;
