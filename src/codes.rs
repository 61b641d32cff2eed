//! Classification codes for the single-character columns of the station
//! table. Each column maps onto a closed enum; two sentinels make the
//! mapping total: `Empty` when the source cell is blank, `Unknown` when it
//! holds something outside the documented letter set.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Shared resolution algorithm for the single-character code columns.
///
/// Resolution is total: blank input yields `EMPTY`, a recognized letter
/// (case-insensitive, surrounding whitespace ignored) yields its variant,
/// anything else yields `UNKNOWN`.
pub trait StationCode: Sized {
    const EMPTY: Self;
    const UNKNOWN: Self;

    /// Maps a single uppercase letter to a recognized variant.
    fn from_letter(letter: char) -> Option<Self>;

    fn resolve(raw: &str) -> Self {
        let clean = raw.trim();
        if clean.is_empty() {
            return Self::EMPTY;
        }
        let mut letters = clean.chars();
        match (letters.next(), letters.next()) {
            (Some(letter), None) => {
                Self::from_letter(letter.to_ascii_uppercase()).unwrap_or(Self::UNKNOWN)
            }
            _ => Self::UNKNOWN,
        }
    }
}

/// METAR reporting status. `X` marks an active reporting site, `Z` an
/// obsolete one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
pub enum Metar {
    #[strum(to_string = "Active")]
    X,
    #[strum(to_string = "Obsolete")]
    Z,
    Empty,
    Unknown,
}

impl StationCode for Metar {
    const EMPTY: Self = Metar::Empty;
    const UNKNOWN: Self = Metar::Unknown;

    fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'X' => Some(Metar::X),
            'Z' => Some(Metar::Z),
            _ => None,
        }
    }
}

/// NEXRAD (WSR-88D) radar site flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
pub enum Radar {
    #[strum(to_string = "NEXRAD")]
    X,
    Empty,
    Unknown,
}

impl StationCode for Radar {
    const EMPTY: Self = Radar::Empty;
    const UNKNOWN: Self = Radar::Unknown;

    fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'X' => Some(Radar::X),
            _ => None,
        }
    }
}

/// Aviation-specific flag: `V` AIRMET/SIGMET boundary point, `A` ARTCC,
/// `T` issues TAFs, `U` both T and V.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
pub enum AviationFlag {
    #[strum(to_string = "AIRMET/SIGMET")]
    V,
    #[strum(to_string = "ARTCC")]
    A,
    #[strum(to_string = "TAF")]
    T,
    #[strum(to_string = "AIRMET/SIGMET and TAF")]
    U,
    Empty,
    Unknown,
}

impl StationCode for AviationFlag {
    const EMPTY: Self = AviationFlag::Empty;
    const UNKNOWN: Self = AviationFlag::Unknown;

    fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'V' => Some(AviationFlag::V),
            'A' => Some(AviationFlag::A),
            'T' => Some(AviationFlag::T),
            'U' => Some(AviationFlag::U),
            _ => None,
        }
    }
}

/// Upper-air observation type: `X` rawinsonde site, `W` wind profiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
pub enum UpperAir {
    #[strum(to_string = "Rawinsonde")]
    X,
    #[strum(to_string = "Wind Profiler")]
    W,
    Empty,
    Unknown,
}

impl StationCode for UpperAir {
    const EMPTY: Self = UpperAir::Empty;
    const UNKNOWN: Self = UpperAir::Unknown;

    fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'X' => Some(UpperAir::X),
            'W' => Some(UpperAir::W),
            _ => None,
        }
    }
}

/// How observations are taken at the site: `A` ASOS, `W` AWOS,
/// `M` mesonet, `H` human observer, `G` augmented human.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
pub enum ObservationSystem {
    #[strum(to_string = "ASOS")]
    A,
    #[strum(to_string = "AWOS")]
    W,
    #[strum(to_string = "Mesonet")]
    M,
    #[strum(to_string = "Human")]
    H,
    #[strum(to_string = "Augmented")]
    G,
    Empty,
    Unknown,
}

impl StationCode for ObservationSystem {
    const EMPTY: Self = ObservationSystem::Empty;
    const UNKNOWN: Self = ObservationSystem::Unknown;

    fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'A' => Some(ObservationSystem::A),
            'W' => Some(ObservationSystem::W),
            'M' => Some(ObservationSystem::M),
            'H' => Some(ObservationSystem::H),
            'G' => Some(ObservationSystem::G),
            _ => None,
        }
    }
}

/// Forecast office type: `F` Weather Forecast Office, `R` River Forecast
/// Center, `C` national center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
pub enum OfficeType {
    #[strum(to_string = "WFO")]
    F,
    #[strum(to_string = "RFC")]
    R,
    #[strum(to_string = "NCEP")]
    C,
    Empty,
    Unknown,
}

impl StationCode for OfficeType {
    const EMPTY: Self = OfficeType::Empty;
    const UNKNOWN: Self = OfficeType::Unknown;

    fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'F' => Some(OfficeType::F),
            'R' => Some(OfficeType::R),
            'C' => Some(OfficeType::C),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn assert_sentinels<C>()
    where
        C: StationCode + PartialEq + std::fmt::Debug,
    {
        assert_eq!(C::resolve(""), C::EMPTY);
        assert_eq!(C::resolve("   "), C::EMPTY);
        assert_eq!(C::resolve("\t"), C::EMPTY);
        assert_eq!(C::resolve("~"), C::UNKNOWN);
        assert_eq!(C::resolve("XX"), C::UNKNOWN);
    }

    fn assert_letters_cover_variants<C>()
    where
        C: StationCode + IntoEnumIterator + PartialEq + std::fmt::Debug + Copy,
    {
        for variant in C::iter() {
            if variant == C::EMPTY || variant == C::UNKNOWN {
                continue;
            }
            let reachable = ('A'..='Z').any(|letter| C::from_letter(letter) == Some(variant));
            assert!(reachable, "variant {:?} has no letter mapping", variant);
        }
    }

    #[test]
    fn test_sentinels_for_all_categories() {
        assert_sentinels::<Metar>();
        assert_sentinels::<Radar>();
        assert_sentinels::<AviationFlag>();
        assert_sentinels::<UpperAir>();
        assert_sentinels::<ObservationSystem>();
        assert_sentinels::<OfficeType>();
    }

    #[test]
    fn test_every_variant_reachable_from_a_letter() {
        assert_letters_cover_variants::<Metar>();
        assert_letters_cover_variants::<Radar>();
        assert_letters_cover_variants::<AviationFlag>();
        assert_letters_cover_variants::<UpperAir>();
        assert_letters_cover_variants::<ObservationSystem>();
        assert_letters_cover_variants::<OfficeType>();
    }

    #[test]
    fn test_recognized_letters() {
        assert_eq!(Metar::resolve("X"), Metar::X);
        assert_eq!(Metar::resolve("Z"), Metar::Z);
        assert_eq!(Radar::resolve("X"), Radar::X);
        assert_eq!(AviationFlag::resolve("V"), AviationFlag::V);
        assert_eq!(AviationFlag::resolve("A"), AviationFlag::A);
        assert_eq!(AviationFlag::resolve("T"), AviationFlag::T);
        assert_eq!(AviationFlag::resolve("U"), AviationFlag::U);
        assert_eq!(UpperAir::resolve("X"), UpperAir::X);
        assert_eq!(UpperAir::resolve("W"), UpperAir::W);
        assert_eq!(ObservationSystem::resolve("A"), ObservationSystem::A);
        assert_eq!(ObservationSystem::resolve("W"), ObservationSystem::W);
        assert_eq!(ObservationSystem::resolve("M"), ObservationSystem::M);
        assert_eq!(ObservationSystem::resolve("H"), ObservationSystem::H);
        assert_eq!(ObservationSystem::resolve("G"), ObservationSystem::G);
        assert_eq!(OfficeType::resolve("F"), OfficeType::F);
        assert_eq!(OfficeType::resolve("R"), OfficeType::R);
        assert_eq!(OfficeType::resolve("C"), OfficeType::C);
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        assert_eq!(Metar::resolve("x"), Metar::X);
        assert_eq!(Metar::resolve(" z "), Metar::Z);
        assert_eq!(AviationFlag::resolve("\tv"), AviationFlag::V);
        assert_eq!(OfficeType::resolve("f "), OfficeType::F);
    }

    #[test]
    fn test_unrecognized_letters_resolve_to_unknown() {
        assert_eq!(Metar::resolve("Q"), Metar::Unknown);
        assert_eq!(Radar::resolve("Z"), Radar::Unknown);
        assert_eq!(AviationFlag::resolve("X"), AviationFlag::Unknown);
        assert_eq!(UpperAir::resolve("A"), UpperAir::Unknown);
        assert_eq!(ObservationSystem::resolve("X"), ObservationSystem::Unknown);
        assert_eq!(OfficeType::resolve("W"), OfficeType::Unknown);
        assert_eq!(OfficeType::resolve("9"), OfficeType::Unknown);
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(Metar::X.to_string(), "Active");
        assert_eq!(Radar::X.to_string(), "NEXRAD");
        assert_eq!(UpperAir::W.to_string(), "Wind Profiler");
        assert_eq!(ObservationSystem::A.to_string(), "ASOS");
        assert_eq!(OfficeType::C.to_string(), "NCEP");
        assert_eq!(Metar::Empty.to_string(), "Empty");
        assert_eq!(Metar::Unknown.to_string(), "Unknown");
    }
}
