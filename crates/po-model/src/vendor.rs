//! Vendor and output sub-format selectors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormatError;

/// Ordering portals the engine can encode for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Vendor {
    HorizonHobbyFastServe,
    Stephens,
    Hrp,
    Amain,
    Traxxas,
}

impl Vendor {
    /// All vendors in presentation order.
    pub const fn all() -> &'static [Vendor] {
        &[
            Self::HorizonHobbyFastServe,
            Self::Stephens,
            Self::Hrp,
            Self::Amain,
            Self::Traxxas,
        ]
    }

    /// Name as shown to users.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::HorizonHobbyFastServe => "HorizonHobby/FastServe",
            Self::Stephens => "Stephens",
            Self::Hrp => "HRP",
            Self::Amain => "AMAIN",
            Self::Traxxas => "Traxxas",
        }
    }

    /// Sub-formats the vendor offers; empty for single-format vendors.
    pub const fn subformats(&self) -> &'static [Subformat] {
        match self {
            Self::HorizonHobbyFastServe | Self::Stephens => &[],
            Self::Hrp => &[Subformat::Csv, Subformat::Tab],
            Self::Amain => &[Subformat::Host, Subformat::Csv, Subformat::Tab],
            Self::Traxxas => &[Subformat::Standard, Subformat::Inv, Subformat::Template],
        }
    }

    /// Sub-format used when the caller does not choose one.
    pub const fn default_subformat(&self) -> Option<Subformat> {
        match self {
            Self::HorizonHobbyFastServe | Self::Stephens => None,
            Self::Hrp => Some(Subformat::Csv),
            Self::Amain => Some(Subformat::Host),
            Self::Traxxas => Some(Subformat::Standard),
        }
    }

    pub fn supports(&self, subformat: Subformat) -> bool {
        self.subformats().contains(&subformat)
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Vendor {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "horizonhobby/fastserve" | "horizonhobby" | "horizon" | "fastserve" => {
                Ok(Self::HorizonHobbyFastServe)
            }
            "stephens" => Ok(Self::Stephens),
            "hrp" => Ok(Self::Hrp),
            "amain" => Ok(Self::Amain),
            "traxxas" => Ok(Self::Traxxas),
            _ => Err(FormatError::UnknownVendor(s.to_string())),
        }
    }
}

/// Output variant for vendors that offer more than one layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Subformat {
    /// Comma-delimited.
    Csv,
    /// Tab-delimited.
    Tab,
    /// AMAIN annotated line-oriented format.
    Host,
    /// Traxxas `SKU,QTY` sheet saved as `.csv`.
    Standard,
    /// Traxxas `SKU,QTY` sheet saved as `.inv`.
    Inv,
    /// Traxxas `sku,qty,variant,comment` template.
    Template,
}

impl Subformat {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Tab => "tab",
            Self::Host => "host",
            Self::Standard => "standard",
            Self::Inv => "inv",
            Self::Template => "template",
        }
    }

    /// Parse a text selector and check the vendor offers it.
    pub fn parse_for(vendor: Vendor, value: &str) -> Result<Self, FormatError> {
        let unknown = || FormatError::UnknownSubformat {
            vendor,
            value: value.to_string(),
        };
        let subformat = match value.trim().to_lowercase().as_str() {
            "csv" => Self::Csv,
            "tab" | "tsv" | "tab-delimited" => Self::Tab,
            "host" => Self::Host,
            "standard" => Self::Standard,
            "inv" => Self::Inv,
            "template" => Self::Template,
            _ => return Err(unknown()),
        };
        if vendor.supports(subformat) {
            Ok(subformat)
        } else {
            Err(unknown())
        }
    }
}

impl fmt::Display for Subformat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
