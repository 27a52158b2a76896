use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Platform regions accepted by the search backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum Region {
    Br,
    Eune,
    Euw,
    Jp,
    Kr,
    Lan,
    Las,
    Na,
    Oce,
    Tr,
    Ru,
    Ph,
    Sg,
    Th,
    Tw,
    Vn,
}

impl Region {
    pub const ALL: [Region; 16] = [
        Region::Br,
        Region::Eune,
        Region::Euw,
        Region::Jp,
        Region::Kr,
        Region::Lan,
        Region::Las,
        Region::Na,
        Region::Oce,
        Region::Tr,
        Region::Ru,
        Region::Ph,
        Region::Sg,
        Region::Th,
        Region::Tw,
        Region::Vn,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Region::Br => "BR",
            Region::Eune => "EUNE",
            Region::Euw => "EUW",
            Region::Jp => "JP",
            Region::Kr => "KR",
            Region::Lan => "LAN",
            Region::Las => "LAS",
            Region::Na => "NA",
            Region::Oce => "OCE",
            Region::Tr => "TR",
            Region::Ru => "RU",
            Region::Ph => "PH",
            Region::Sg => "SG",
            Region::Th => "TH",
            Region::Tw => "TW",
            Region::Vn => "VN",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Region {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Region::ALL
            .into_iter()
            .find(|region| region.code().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| AppError::ConfigError(format!("Unknown region: {}", wanted)))
    }
}
