mod classify_foot;
mod locale;
mod recommend;

pub use classify_foot::{ArchType, ClassifyFoot, FootRatios, FootType, FootTypeClassification};
pub use locale::Locale;
pub use recommend::Recommend;
