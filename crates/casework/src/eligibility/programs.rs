use serde::{Deserialize, Serialize};

/// Assistance programs known to the engine. Discriminants are the stable
/// numeric identifiers exchanged with callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum ProgramId {
    Uplift = 1,
    Adsa = 2,
    CalFresh = 3,
    CalWorks = 4,
    Capi = 5,
    Care = 6,
    Fera = 7,
    VaDisabilityCompensation = 8,
    Fss = 9,
    GeneralAssistance = 10,
    HudVash = 11,
    NoFeeId = 12,
    ReducedFeeId = 13,
    Ihss = 14,
    LifeLine = 15,
    Liheap = 16,
    VtaParatransit = 17,
    Section8InterestList = 18,
    Ssdi = 19,
    Ssi = 20,
    VaPension = 21,
    Wic = 22,
}

/// Display names indexed by `id - 1`.
pub const PROGRAM_NAMES: [&str; 22] = [
    "UPLIFT",
    "ADSA",
    "CalFresh",
    "CalWORKs",
    "CAPI",
    "CARE",
    "FERA",
    "VA Disability Compensation",
    "FSS",
    "General Assistance",
    "HUD-VASH",
    "No-fee ID",
    "Reduced-fee ID",
    "IHSS",
    "LifeLine",
    "LIHEAP",
    "VTA Paratransit",
    "Section 8 Interest List",
    "SSDI",
    "SSI",
    "VA Pension",
    "WIC",
];

impl ProgramId {
    /// Every program in ascending id order.
    pub const ALL: [ProgramId; 22] = [
        ProgramId::Uplift,
        ProgramId::Adsa,
        ProgramId::CalFresh,
        ProgramId::CalWorks,
        ProgramId::Capi,
        ProgramId::Care,
        ProgramId::Fera,
        ProgramId::VaDisabilityCompensation,
        ProgramId::Fss,
        ProgramId::GeneralAssistance,
        ProgramId::HudVash,
        ProgramId::NoFeeId,
        ProgramId::ReducedFeeId,
        ProgramId::Ihss,
        ProgramId::LifeLine,
        ProgramId::Liheap,
        ProgramId::VtaParatransit,
        ProgramId::Section8InterestList,
        ProgramId::Ssdi,
        ProgramId::Ssi,
        ProgramId::VaPension,
        ProgramId::Wic,
    ];

    pub const fn id(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        PROGRAM_NAMES[self as usize - 1]
    }
}

/// Raised when a numeric id does not name a known program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown program id {0}")]
pub struct UnknownProgram(pub u8);

impl TryFrom<u8> for ProgramId {
    type Error = UnknownProgram;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1..=22 => Ok(ProgramId::ALL[usize::from(value) - 1]),
            other => Err(UnknownProgram(other)),
        }
    }
}

impl From<ProgramId> for u8 {
    fn from(value: ProgramId) -> Self {
        value.id()
    }
}

/// Look up a display name by numeric id.
pub fn program_name(id: u8) -> Option<&'static str> {
    ProgramId::try_from(id).ok().map(ProgramId::name)
}

/// Entry of the public program listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramListing {
    pub program_id: ProgramId,
    pub program_name: &'static str,
}

pub fn program_catalog() -> Vec<ProgramListing> {
    ProgramId::ALL
        .iter()
        .map(|&program| ProgramListing {
            program_id: program,
            program_name: program.name(),
        })
        .collect()
}
