//! Cloud groups
//!
//! Cloud layer tokens name an amount, a height in hundreds of feet and an
//! optional convective type (`BKN020`, `SCT030CB`), with `VV` marking an
//! obscured sky where the height is a vertical visibility instead. The
//! fixed tokens `NCD`, `NSC`, `CLR` and `SKC` report the absence of clouds.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::app::models::{Distance, DistanceUnit, ReportPart};

static CLOUD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([BFOSV][CEKV][CNTW]?|///)(\d\d\d|///)([CT][BC]U?|///)?$").unwrap());

/// Cloud amount in oktas, or one of the no-cloud markers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CloudAmount {
    NotReported,
    /// No cloud detected by an automated station
    Ncd,
    /// No significant clouds
    Nsc,
    /// No clouds below the station's ceiling limit
    NoneClr,
    /// Sky clear
    NoneSkc,
    /// 1-2 oktas
    Few,
    /// 3-4 oktas
    Scattered,
    /// 5-7 oktas
    Broken,
    /// 8 oktas
    Overcast,
    /// Sky obscured; the height is a vertical visibility
    Obscured,
}

/// Convective cloud type annotation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum CloudType {
    NotReported,
    #[default]
    None,
    ToweringCumulus,
    Cumulonimbus,
}

/// One cloud layer, a vertical visibility, or a no-clouds marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CloudGroup {
    amount: CloudAmount,
    height_or_vert_vis: Distance,
    cloud_type: CloudType,
}

impl CloudGroup {
    pub fn parse(token: &str, report_part: ReportPart) -> Option<Self> {
        if !matches!(report_part, ReportPart::Metar | ReportPart::Taf) {
            return None;
        }
        match token {
            "NCD" => return Some(Self::no_clouds(CloudAmount::Ncd)),
            "NSC" => return Some(Self::no_clouds(CloudAmount::Nsc)),
            "CLR" => return Some(Self::no_clouds(CloudAmount::NoneClr)),
            "SKC" => return Some(Self::no_clouds(CloudAmount::NoneSkc)),
            _ => {}
        }
        let caps = CLOUD.captures(token)?;
        let amount = Self::amount_from_str(caps.get(1).map_or("", |m| m.as_str()))?;
        let height = Distance::from_height_str(caps.get(2).map_or("", |m| m.as_str()))?;
        let cloud_type = Self::type_from_str(caps.get(3).map_or("", |m| m.as_str()))?;
        // A vertical visibility has no convective type
        if amount == CloudAmount::Obscured && cloud_type != CloudType::None {
            return None;
        }
        Some(Self {
            amount,
            height_or_vert_vis: height,
            cloud_type,
        })
    }

    pub fn amount(&self) -> CloudAmount {
        self.amount
    }

    pub fn cloud_type(&self) -> CloudType {
        self.cloud_type
    }

    /// Base height of the layer; not reported for obscured sky and no-cloud
    /// markers
    pub fn height(&self) -> Distance {
        match self.amount {
            CloudAmount::NotReported
            | CloudAmount::Few
            | CloudAmount::Scattered
            | CloudAmount::Broken
            | CloudAmount::Overcast => self.height_or_vert_vis,
            _ => Distance::not_reported(DistanceUnit::Feet),
        }
    }

    /// Vertical visibility; reported only for an obscured sky
    pub fn vertical_visibility(&self) -> Distance {
        if self.amount != CloudAmount::Obscured {
            return Distance::not_reported(DistanceUnit::Feet);
        }
        self.height_or_vert_vis
    }

    pub fn is_vertical_visibility(&self) -> bool {
        self.amount == CloudAmount::Obscured
    }

    pub fn is_no_clouds(&self) -> bool {
        matches!(
            self.amount,
            CloudAmount::Ncd | CloudAmount::Nsc | CloudAmount::NoneClr | CloudAmount::NoneSkc
        )
    }

    pub fn is_cloud_layer(&self) -> bool {
        matches!(
            self.amount,
            CloudAmount::Few | CloudAmount::Scattered | CloudAmount::Broken | CloudAmount::Overcast
        )
    }

    pub fn is_valid(&self) -> bool {
        self.height_or_vert_vis.is_valid()
    }

    fn no_clouds(amount: CloudAmount) -> Self {
        Self {
            amount,
            height_or_vert_vis: Distance::not_reported(DistanceUnit::Feet),
            cloud_type: CloudType::None,
        }
    }

    fn amount_from_str(s: &str) -> Option<CloudAmount> {
        match s {
            "FEW" => Some(CloudAmount::Few),
            "SCT" => Some(CloudAmount::Scattered),
            "BKN" => Some(CloudAmount::Broken),
            "OVC" => Some(CloudAmount::Overcast),
            "VV" => Some(CloudAmount::Obscured),
            "///" => Some(CloudAmount::NotReported),
            _ => None,
        }
    }

    fn type_from_str(s: &str) -> Option<CloudType> {
        match s {
            "" => Some(CloudType::None),
            "TCU" => Some(CloudType::ToweringCumulus),
            "CB" => Some(CloudType::Cumulonimbus),
            "///" => Some(CloudType::NotReported),
            _ => None,
        }
    }
}
