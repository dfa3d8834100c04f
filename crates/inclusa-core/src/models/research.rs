use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A closed set of answers to one research-participation question.
///
/// Ordinals line up with the matching localized option list, so the
/// rendered label for a variant is `options[variant.index()]`.
pub trait ResearchChoice: Copy + PartialEq + 'static {
    fn all() -> &'static [Self];

    /// Canonical stored value.
    fn as_str(&self) -> &'static str;

    fn index(&self) -> usize {
        Self::all().iter().position(|c| c == self).unwrap_or(0)
    }

    fn from_index(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum FutureContact {
    #[default]
    Yes,
    No,
    Maybe,
}

impl ResearchChoice for FutureContact {
    fn all() -> &'static [Self] {
        &[FutureContact::Yes, FutureContact::No, FutureContact::Maybe]
    }

    fn as_str(&self) -> &'static str {
        match self {
            FutureContact::Yes => "Yes",
            FutureContact::No => "No",
            FutureContact::Maybe => "Maybe",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum SampleCollection {
    #[default]
    Yes,
    No,
    #[serde(rename = "Need more information")]
    NeedMoreInformation,
}

impl ResearchChoice for SampleCollection {
    fn all() -> &'static [Self] {
        &[
            SampleCollection::Yes,
            SampleCollection::No,
            SampleCollection::NeedMoreInformation,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            SampleCollection::Yes => "Yes",
            SampleCollection::No => "No",
            SampleCollection::NeedMoreInformation => "Need more information",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum DataSharing {
    #[default]
    #[serde(rename = "Yes, fully anonymized")]
    FullyAnonymized,
    #[serde(rename = "Yes, with restrictions")]
    WithRestrictions,
    No,
}

impl ResearchChoice for DataSharing {
    fn all() -> &'static [Self] {
        &[
            DataSharing::FullyAnonymized,
            DataSharing::WithRestrictions,
            DataSharing::No,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            DataSharing::FullyAnonymized => "Yes, fully anonymized",
            DataSharing::WithRestrictions => "Yes, with restrictions",
            DataSharing::No => "No",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum FollowUp {
    #[default]
    Yes,
    No,
    #[serde(rename = "Depends on timing")]
    DependsOnTiming,
}

impl ResearchChoice for FollowUp {
    fn all() -> &'static [Self] {
        &[FollowUp::Yes, FollowUp::No, FollowUp::DependsOnTiming]
    }

    fn as_str(&self) -> &'static str {
        match self {
            FollowUp::Yes => "Yes",
            FollowUp::No => "No",
            FollowUp::DependsOnTiming => "Depends on timing",
        }
    }
}

/// Research-participation preferences. The same record is both the posted
/// answer and the stored section: every field is a closed choice or text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Research {
    pub future_contact: FutureContact,
    pub sample_collection: SampleCollection,
    pub data_sharing: DataSharing,
    pub follow_up: FollowUp,
    pub suggestions: String,
}
