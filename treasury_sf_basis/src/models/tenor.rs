use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The five benchmark maturities the pipeline covers.
///
/// The set is fixed; every stage iterates [`Tenor::ALL`] in this declaration
/// order, which is also the row-group order of the output table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tenor {
    Y2,
    Y5,
    Y10,
    Y20,
    Y30,
}

/// A tenor code that is not one of `2Y`, `5Y`, `10Y`, `20Y`, `30Y`.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown tenor code: {0}")]
pub struct ParseTenorError(pub String);

impl Tenor {
    /// All supported tenors, shortest first.
    pub const ALL: [Tenor; 5] = [Tenor::Y2, Tenor::Y5, Tenor::Y10, Tenor::Y20, Tenor::Y30];

    /// Canonical short code, e.g. `"10Y"`. This is the string stored in the
    /// output table's `tenor` column.
    pub fn code(&self) -> &'static str {
        match self {
            Tenor::Y2 => "2Y",
            Tenor::Y5 => "5Y",
            Tenor::Y10 => "10Y",
            Tenor::Y20 => "20Y",
            Tenor::Y30 => "30Y",
        }
    }

    /// Maturity in years.
    pub fn years(&self) -> u32 {
        match self {
            Tenor::Y2 => 2,
            Tenor::Y5 => 5,
            Tenor::Y10 => 10,
            Tenor::Y20 => 20,
            Tenor::Y30 => 30,
        }
    }
}

impl fmt::Display for Tenor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Tenor {
    type Err = ParseTenorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2Y" => Ok(Tenor::Y2),
            "5Y" => Ok(Tenor::Y5),
            "10Y" => Ok(Tenor::Y10),
            "20Y" => Ok(Tenor::Y20),
            "30Y" => Ok(Tenor::Y30),
            other => Err(ParseTenorError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_ordered_shortest_first() {
        let years: Vec<u32> = Tenor::ALL.iter().map(Tenor::years).collect();
        assert_eq!(years, vec![2, 5, 10, 20, 30]);
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for tenor in Tenor::ALL {
            let code = tenor.to_string();
            assert_eq!(code.parse::<Tenor>().unwrap(), tenor);
        }
    }

    #[test]
    fn rejects_unknown_codes() {
        assert_eq!(
            "7Y".parse::<Tenor>().unwrap_err(),
            ParseTenorError("7Y".to_string())
        );
        // Codes are case-sensitive and unpadded.
        assert!("2y".parse::<Tenor>().is_err());
        assert!(" 2Y".parse::<Tenor>().is_err());
    }
}
