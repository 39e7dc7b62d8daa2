//! Service layer: observation building, scoring, window search and the
//! orchestration that ties them into one evaluation.

pub mod cloud_cover;
pub mod conditions;
pub mod go_window;
pub mod observation;
pub mod scoring;
pub mod summary;

pub use cloud_cover::{CloudCoverSource, FixedCloudCover, NoCloudCover, OpenMeteoClient};
pub use conditions::{ConditionsReport, ConditionsService};
pub use go_window::{find_next_go_window, scan_for_window};
pub use observation::ObservationAdapter;
pub use scoring::SuitabilityScorer;
