//! Low-layer wind shear groups
//!
//! Wind shear in the lower layers is reported as a multi-token sequence
//! seeded by a bare `WS` token: either `WS ALL RWY` for all runways or
//! `WS R22` / `WS RWY22` for one. The follow-up tokens are plain text as
//! far as the dispatcher is concerned, so the combiner inspects their raw
//! content. A sequence that never completes stays invalid.

use serde::Serialize;

use super::Group;
use crate::app::models::{ReportPart, Runway};

/// Accumulation state of the multi-token sequence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
enum WindShearStatus {
    Complete,
    #[default]
    IncompleteWs,
    IncompleteWsAll,
}

/// Wind shear in the lower layers of one or all runways
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WindShearLowLayerGroup {
    runway: Runway,
    status: WindShearStatus,
}

impl WindShearLowLayerGroup {
    pub fn parse(token: &str, report_part: ReportPart) -> Option<Self> {
        if report_part != ReportPart::Metar {
            return None;
        }
        if token == "WS" {
            return Some(Self::default());
        }
        None
    }

    /// Fold the next plain-text token into the sequence
    ///
    /// `ALL` moves the bare `WS` to an intermediate state that only `RWY`
    /// completes; a runway designation completes the bare `WS` directly.
    /// Anything else leaves the group incomplete and therefore invalid.
    pub fn combine(&self, next: &Group) -> Option<Group> {
        let Group::PlainText(text) = next else {
            return None;
        };
        let mut combined = *self;
        match self.status {
            WindShearStatus::Complete => None,
            WindShearStatus::IncompleteWs => {
                if text.text() == "ALL" {
                    combined.status = WindShearStatus::IncompleteWsAll;
                    return Some(Group::WindShearLowLayer(combined));
                }
                if let Some(runway) = Runway::from_str(text.text(), true) {
                    combined.status = WindShearStatus::Complete;
                    combined.runway = runway;
                    return Some(Group::WindShearLowLayer(combined));
                }
                None
            }
            WindShearStatus::IncompleteWsAll => {
                if text.text() == "RWY" {
                    combined.status = WindShearStatus::Complete;
                    combined.runway = Runway::all_runways();
                    return Some(Group::WindShearLowLayer(combined));
                }
                None
            }
        }
    }

    pub fn runway(&self) -> Runway {
        self.runway
    }

    pub fn is_valid(&self) -> bool {
        self.runway.is_valid() && self.status == WindShearStatus::Complete
    }
}
