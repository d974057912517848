//! Workplace catalog: locations and the jobs worked at each.
//!
//! External records identify a workplace by a location/job pair, either as
//! names or as small numeric codes. Every mapping here is total and
//! explicit: an unknown code or name is an error, never a silent default
//! to some arbitrary variant.

use crate::error::{TrackerError, TrackerResult};

/// A dining location where shifts are worked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    /// The Cantina and Grille (code 1, name `"CG"`).
    CantinaGrille,
    /// The Market (code 2, name `"MARKET"`).
    Market,
}

impl Location {
    /// Resolves a numeric location code.
    pub fn from_code(code: i32) -> TrackerResult<Location> {
        match code {
            1 => Ok(Location::CantinaGrille),
            2 => Ok(Location::Market),
            _ => Err(TrackerError::UnknownLocation {
                token: code.to_string(),
            }),
        }
    }

    /// Resolves a location name, case-insensitively.
    pub fn from_name(name: &str) -> TrackerResult<Location> {
        if name.eq_ignore_ascii_case("CG") || name.eq_ignore_ascii_case("Cantina and Grille") {
            Ok(Location::CantinaGrille)
        } else if name.eq_ignore_ascii_case("MARKET") {
            Ok(Location::Market)
        } else {
            Err(TrackerError::UnknownLocation {
                token: name.to_string(),
            })
        }
    }

    /// Returns the canonical short name used in persisted records.
    pub fn name(self) -> &'static str {
        match self {
            Location::CantinaGrille => "CG",
            Location::Market => "MARKET",
        }
    }

    /// Returns the numeric code of the location.
    pub fn code(self) -> i32 {
        match self {
            Location::CantinaGrille => 1,
            Location::Market => 2,
        }
    }
}

/// Jobs available at the Cantina and Grille, coded 1 through 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum CgJob {
    Cashier = 1,
    Dining = 2,
    Flex = 3,
    Fryer = 4,
    Grille = 5,
    Kds = 6,
    Prep = 7,
    Salsaritas = 8,
    Utility = 9,
}

impl CgJob {
    const ALL: [CgJob; 9] = [
        CgJob::Cashier,
        CgJob::Dining,
        CgJob::Flex,
        CgJob::Fryer,
        CgJob::Grille,
        CgJob::Kds,
        CgJob::Prep,
        CgJob::Salsaritas,
        CgJob::Utility,
    ];

    /// Resolves a numeric job code in `1..=9`.
    pub fn from_code(code: i32) -> TrackerResult<CgJob> {
        CgJob::ALL
            .into_iter()
            .find(|job| job.code() == code)
            .ok_or_else(|| TrackerError::UnknownJob {
                location: Location::CantinaGrille.name().to_string(),
                token: code.to_string(),
            })
    }

    /// Resolves a job name, case-insensitively.
    pub fn from_name(name: &str) -> TrackerResult<CgJob> {
        CgJob::ALL
            .into_iter()
            .find(|job| job.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| TrackerError::UnknownJob {
                location: Location::CantinaGrille.name().to_string(),
                token: name.to_string(),
            })
    }

    /// Returns the canonical upper-case name used in persisted records.
    pub fn name(self) -> &'static str {
        match self {
            CgJob::Cashier => "CASHIER",
            CgJob::Dining => "DINING",
            CgJob::Flex => "FLEX",
            CgJob::Fryer => "FRYER",
            CgJob::Grille => "GRILLE",
            CgJob::Kds => "KDS",
            CgJob::Prep => "PREP",
            CgJob::Salsaritas => "SALSARITAS",
            CgJob::Utility => "UTILITY",
        }
    }

    /// Returns the numeric code of the job.
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Jobs available at the Market, coded 1 through 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum MarketJob {
    Cashier = 1,
    Stocker = 2,
    Utility = 3,
}

impl MarketJob {
    const ALL: [MarketJob; 3] = [MarketJob::Cashier, MarketJob::Stocker, MarketJob::Utility];

    /// Resolves a numeric job code in `1..=3`.
    pub fn from_code(code: i32) -> TrackerResult<MarketJob> {
        MarketJob::ALL
            .into_iter()
            .find(|job| job.code() == code)
            .ok_or_else(|| TrackerError::UnknownJob {
                location: Location::Market.name().to_string(),
                token: code.to_string(),
            })
    }

    /// Resolves a job name, case-insensitively.
    pub fn from_name(name: &str) -> TrackerResult<MarketJob> {
        MarketJob::ALL
            .into_iter()
            .find(|job| job.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| TrackerError::UnknownJob {
                location: Location::Market.name().to_string(),
                token: name.to_string(),
            })
    }

    /// Returns the canonical upper-case name used in persisted records.
    pub fn name(self) -> &'static str {
        match self {
            MarketJob::Cashier => "CASHIER",
            MarketJob::Stocker => "STOCKER",
            MarketJob::Utility => "UTILITY",
        }
    }

    /// Returns the numeric code of the job.
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// A location/job pair identifying where and as what a shift was worked.
///
/// The variant carries the job for its location, so a Market shift can
/// never hold a Cantina and Grille job.
///
/// # Examples
///
/// ```
/// use shift_tracker::models::{MarketJob, Position};
///
/// let position = Position::from_names("MARKET", "STOCKER").unwrap();
/// assert_eq!(position, Position::Market(MarketJob::Stocker));
/// assert_eq!(position.location_name(), "MARKET");
/// assert_eq!(position.job_name(), "STOCKER");
/// assert!(Position::from_names("MARKET", "FRYER").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// A job at the Cantina and Grille.
    CantinaGrille(CgJob),
    /// A job at the Market.
    Market(MarketJob),
}

impl Position {
    /// Resolves a location name and job name pair.
    pub fn from_names(location: &str, job: &str) -> TrackerResult<Position> {
        match Location::from_name(location)? {
            Location::CantinaGrille => Ok(Position::CantinaGrille(CgJob::from_name(job)?)),
            Location::Market => Ok(Position::Market(MarketJob::from_name(job)?)),
        }
    }

    /// Resolves a location code and job code pair.
    pub fn from_codes(location_code: i32, job_code: i32) -> TrackerResult<Position> {
        match Location::from_code(location_code)? {
            Location::CantinaGrille => Ok(Position::CantinaGrille(CgJob::from_code(job_code)?)),
            Location::Market => Ok(Position::Market(MarketJob::from_code(job_code)?)),
        }
    }

    /// Returns the location of this position.
    pub fn location(self) -> Location {
        match self {
            Position::CantinaGrille(_) => Location::CantinaGrille,
            Position::Market(_) => Location::Market,
        }
    }

    /// Returns the canonical location name.
    pub fn location_name(self) -> &'static str {
        self.location().name()
    }

    /// Returns the canonical job name.
    pub fn job_name(self) -> &'static str {
        match self {
            Position::CantinaGrille(job) => job.name(),
            Position::Market(job) => job.name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_from_code() {
        assert_eq!(Location::from_code(1).unwrap(), Location::CantinaGrille);
        assert_eq!(Location::from_code(2).unwrap(), Location::Market);
    }

    #[test]
    fn test_location_from_code_rejects_unknown() {
        assert!(matches!(
            Location::from_code(3),
            Err(TrackerError::UnknownLocation { .. })
        ));
        assert!(Location::from_code(0).is_err());
    }

    #[test]
    fn test_location_from_name_accepts_long_and_short_forms() {
        assert_eq!(Location::from_name("CG").unwrap(), Location::CantinaGrille);
        assert_eq!(
            Location::from_name("Cantina and Grille").unwrap(),
            Location::CantinaGrille
        );
        assert_eq!(Location::from_name("market").unwrap(), Location::Market);
    }

    #[test]
    fn test_location_from_name_rejects_unknown() {
        assert!(matches!(
            Location::from_name("Bakery"),
            Err(TrackerError::UnknownLocation { .. })
        ));
    }

    #[test]
    fn test_cg_job_codes_cover_one_through_nine() {
        for code in 1..=9 {
            assert_eq!(CgJob::from_code(code).unwrap().code(), code);
        }
        assert!(CgJob::from_code(10).is_err());
        assert!(CgJob::from_code(0).is_err());
    }

    #[test]
    fn test_market_job_codes_cover_one_through_three() {
        for code in 1..=3 {
            assert_eq!(MarketJob::from_code(code).unwrap().code(), code);
        }
        assert!(MarketJob::from_code(4).is_err());
    }

    #[test]
    fn test_job_names_round_trip() {
        for code in 1..=9 {
            let job = CgJob::from_code(code).unwrap();
            assert_eq!(CgJob::from_name(job.name()).unwrap(), job);
        }
        for code in 1..=3 {
            let job = MarketJob::from_code(code).unwrap();
            assert_eq!(MarketJob::from_name(job.name()).unwrap(), job);
        }
    }

    #[test]
    fn test_position_from_names() {
        assert_eq!(
            Position::from_names("CG", "salsaritas").unwrap(),
            Position::CantinaGrille(CgJob::Salsaritas)
        );
        assert_eq!(
            Position::from_names("MARKET", "CASHIER").unwrap(),
            Position::Market(MarketJob::Cashier)
        );
    }

    #[test]
    fn test_position_from_codes() {
        assert_eq!(
            Position::from_codes(1, 6).unwrap(),
            Position::CantinaGrille(CgJob::Kds)
        );
        assert_eq!(
            Position::from_codes(2, 2).unwrap(),
            Position::Market(MarketJob::Stocker)
        );
    }

    #[test]
    fn test_position_rejects_job_from_wrong_location() {
        // STOCKER only exists at the Market.
        assert!(matches!(
            Position::from_names("CG", "STOCKER"),
            Err(TrackerError::UnknownJob { .. })
        ));
        assert!(Position::from_codes(2, 9).is_err());
    }

    #[test]
    fn test_position_accessors() {
        let position = Position::CantinaGrille(CgJob::Fryer);
        assert_eq!(position.location(), Location::CantinaGrille);
        assert_eq!(position.location_name(), "CG");
        assert_eq!(position.job_name(), "FRYER");
    }
}
