//! Trend groups
//!
//! Trends describe an expected change of conditions: a trend type
//! (`BECMG`, `TEMPO`, `INTER`, `NOSIG` or a `FMDDHHMM` transition), an
//! optional `PROB30`/`PROB40` probability prefix, and up to three time
//! slots (from, till, at). The atoms arrive as separate tokens and are
//! folded together by the combiner, so a trend group doubles as the state
//! of that accumulation: an atom that never completes stays `TrendType::None`
//! and reports itself invalid.

use serde::Serialize;

use super::Group;
use crate::app::models::{DayTime, ReportPart};

/// The kind of change a trend announces
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum TrendType {
    /// Incomplete atom or combination; never valid
    #[default]
    None,
    /// No significant change expected
    Nosig,
    /// Conditions becoming
    Becmg,
    /// Temporary fluctuations
    Tempo,
    /// Intermittent fluctuations
    Inter,
    /// Rapid transition at the given time
    From,
    /// A plain validity period
    TimeSpan,
}

/// Optional probability prefix of a trend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum TrendProbability {
    #[default]
    None,
    Prob30,
    Prob40,
}

/// A trend of changing conditions, built up from one or more tokens
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TrendGroup {
    trend_type: TrendType,
    probability: TrendProbability,
    time_from: Option<DayTime>,
    time_till: Option<DayTime>,
    time_at: Option<DayTime>,
}

impl TrendGroup {
    pub fn parse(token: &str, report_part: ReportPart) -> Option<Self> {
        if matches!(report_part, ReportPart::Metar | ReportPart::Taf) {
            match token {
                "BECMG" => return Some(Self::of_type(TrendType::Becmg)),
                "TEMPO" => return Some(Self::of_type(TrendType::Tempo)),
                "INTER" => return Some(Self::of_type(TrendType::Inter)),
                _ => {}
            }
        }
        if report_part == ReportPart::Taf {
            match token {
                "PROB30" => return Some(Self::of_probability(TrendProbability::Prob30)),
                "PROB40" => return Some(Self::of_probability(TrendProbability::Prob40)),
                _ => {}
            }
            if let Some(span) = Self::from_time_span(token) {
                return Some(span);
            }
            if let Some(from) = Self::from_fm(token) {
                return Some(from);
            }
        }
        if report_part == ReportPart::Metar {
            if token == "NOSIG" {
                return Some(Self::of_type(TrendType::Nosig));
            }
            if let Some(partial) = Self::from_trend_time(token) {
                return Some(partial);
            }
        }
        if matches!(report_part, ReportPart::Header | ReportPart::Taf) {
            if let Some(span) = Self::from_time_span(token) {
                return Some(span);
            }
        }
        None
    }

    /// Fold the next token's group into this trend
    ///
    /// Tried in order: probability + trend type, trend type + time,
    /// probability + time span, partial time + partial time. The first rule
    /// that applies wins; incompatible time slots block the merge.
    pub fn combine(&self, next: &Group) -> Option<Group> {
        let Group::Trend(next) = next else {
            return None;
        };
        let mut combined = *self;
        if combined.combine_probability_and_trend_type(next)
            || combined.combine_trend_type_and_time(next)
            || combined.combine_probability_and_time_span(next)
            || combined.combine_partial_times(next)
        {
            return Some(Group::Trend(combined));
        }
        None
    }

    pub fn trend_type(&self) -> TrendType {
        self.trend_type
    }

    pub fn probability(&self) -> TrendProbability {
        self.probability
    }

    pub fn time_from(&self) -> Option<DayTime> {
        self.time_from
    }

    pub fn time_till(&self) -> Option<DayTime> {
        self.time_till
    }

    pub fn time_at(&self) -> Option<DayTime> {
        self.time_at
    }

    /// Incomplete combinations (still `TrendType::None`) are invalid
    pub fn is_valid(&self) -> bool {
        if let Some(time) = self.time_from {
            if !time.is_valid() {
                return false;
            }
        }
        if let Some(time) = self.time_till {
            if !time.is_valid() {
                return false;
            }
        }
        if let Some(time) = self.time_at {
            if !time.is_valid() {
                return false;
            }
        }
        self.trend_type != TrendType::None
    }

    /// A complete `DDHH/DDHH` validity period with no probability
    pub fn is_time_span(&self) -> bool {
        self.trend_type == TrendType::TimeSpan
            && self.probability == TrendProbability::None
            && self.time_from.is_some()
            && self.time_till.is_some()
            && self.time_at.is_none()
    }

    fn of_type(trend_type: TrendType) -> Self {
        Self {
            trend_type,
            ..Self::default()
        }
    }

    fn of_probability(probability: TrendProbability) -> Self {
        Self {
            probability,
            ..Self::default()
        }
    }

    /// `DDHH/DDHH` validity period
    fn from_time_span(token: &str) -> Option<Self> {
        if token.len() != 9 || token.as_bytes()[4] != b'/' {
            return None;
        }
        let from = DayTime::from_ddhh(&token[..4])?;
        let till = DayTime::from_ddhh(&token[5..])?;
        Some(Self {
            trend_type: TrendType::TimeSpan,
            time_from: Some(from),
            time_till: Some(till),
            ..Self::default()
        })
    }

    /// `FMDDHHMM` rapid transition time
    fn from_fm(token: &str) -> Option<Self> {
        if token.len() != 8 || !token.starts_with("FM") {
            return None;
        }
        let time = DayTime::from_ddhhmm(&token[2..])?;
        time.day()?;
        Some(Self {
            trend_type: TrendType::From,
            time_from: Some(time),
            ..Self::default()
        })
    }

    /// `FMHHMM` / `TLHHMM` / `ATHHMM` partial times with no trend type
    fn from_trend_time(token: &str) -> Option<Self> {
        if token.len() != 6 {
            return None;
        }
        let time = DayTime::from_ddhhmm(token.get(2..)?)?;
        let mut partial = Self::default();
        match token.get(..2)? {
            "FM" => partial.time_from = Some(time),
            "TL" => partial.time_till = Some(time),
            "AT" => partial.time_at = Some(time),
            _ => return None,
        }
        Some(partial)
    }

    fn combine_probability_and_trend_type(&mut self, next: &TrendGroup) -> bool {
        if !self.is_probability_atom() || !next.is_trend_type_atom() {
            return false;
        }
        // A probability prefix only applies to temporary fluctuations
        if next.trend_type != TrendType::Tempo && next.trend_type != TrendType::Inter {
            return false;
        }
        self.trend_type = next.trend_type;
        true
    }

    fn combine_trend_type_and_time(&mut self, next: &TrendGroup) -> bool {
        if !matches!(
            self.trend_type,
            TrendType::Becmg | TrendType::Tempo | TrendType::Inter
        ) {
            return false;
        }
        if !next.is_time_span() && !next.is_partial_time_atom() {
            return false;
        }
        if !Self::can_combine_time(self, next) {
            return false;
        }
        self.merge_time(next);
        true
    }

    fn combine_probability_and_time_span(&mut self, next: &TrendGroup) -> bool {
        if !self.is_probability_atom() || !next.is_time_span() {
            return false;
        }
        self.merge_time(next);
        self.trend_type = TrendType::TimeSpan;
        true
    }

    fn combine_partial_times(&mut self, next: &TrendGroup) -> bool {
        if self.trend_type != TrendType::None || self.probability != TrendProbability::None {
            return false;
        }
        if !next.is_partial_time_atom() {
            return false;
        }
        if !Self::can_combine_time(self, next) {
            return false;
        }
        self.merge_time(next);
        true
    }

    /// A bare `PROB30`/`PROB40` token: probability set, nothing else
    fn is_probability_atom(&self) -> bool {
        self.trend_type == TrendType::None
            && self.probability != TrendProbability::None
            && self.time_from.is_none()
            && self.time_till.is_none()
            && self.time_at.is_none()
    }

    /// A bare `BECMG`/`TEMPO`/`INTER` token: type set, nothing else
    fn is_trend_type_atom(&self) -> bool {
        matches!(
            self.trend_type,
            TrendType::Becmg | TrendType::Tempo | TrendType::Inter
        ) && self.probability == TrendProbability::None
            && self.time_from.is_none()
            && self.time_till.is_none()
            && self.time_at.is_none()
    }

    /// A partial time token or their merge: exactly one slot class filled,
    /// no type or probability
    fn is_partial_time_atom(&self) -> bool {
        if self.trend_type != TrendType::None || self.probability != TrendProbability::None {
            return false;
        }
        let slots = [&self.time_from, &self.time_till, &self.time_at];
        if slots.iter().all(|slot| slot.is_none()) {
            return false;
        }
        if self.time_from.is_some() && self.time_till.is_some() {
            return false;
        }
        if self.time_from.is_some() && self.time_at.is_some() {
            return false;
        }
        if self.time_till.is_some() && self.time_at.is_some() {
            return false;
        }
        true
    }

    /// Slots merge when they never name the same slot twice and never mix
    /// an `AT` time with a `FROM`/`TILL` time
    fn can_combine_time(a: &TrendGroup, b: &TrendGroup) -> bool {
        if a.time_from.is_some() && b.time_from.is_some() {
            return false;
        }
        if a.time_till.is_some() && b.time_till.is_some() {
            return false;
        }
        if a.time_at.is_some() && b.time_at.is_some() {
            return false;
        }
        if a.time_at.is_some() && (b.time_from.is_some() || b.time_till.is_some()) {
            return false;
        }
        if b.time_at.is_some() && (a.time_from.is_some() || a.time_till.is_some()) {
            return false;
        }
        true
    }

    fn merge_time(&mut self, next: &TrendGroup) {
        if self.time_from.is_none() {
            self.time_from = next.time_from;
        }
        if self.time_till.is_none() {
            self.time_till = next.time_till;
        }
        if self.time_at.is_none() {
            self.time_at = next.time_at;
        }
    }
}
