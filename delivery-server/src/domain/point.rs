//! Point names.

use std::borrow::Borrow;
use std::fmt;

/// Error returned when a point name fails validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid point name: {reason}")]
pub struct InvalidPoint {
    reason: &'static str,
}

/// A named location in the delivery network.
///
/// A point is identified solely by its name. Names are trimmed of surrounding
/// whitespace, must not be empty, and must not contain `/` (names travel as
/// URL path segments).
///
/// # Examples
///
/// ```
/// use delivery_server::domain::Point;
///
/// let a = Point::parse(" A ").unwrap();
/// assert_eq!(a.as_str(), "A");
///
/// assert!(Point::parse("").is_err());
/// assert!(Point::parse("A/B").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point(String);

impl Point {
    /// Parse a point name.
    pub fn parse(name: &str) -> Result<Self, InvalidPoint> {
        let name = name.trim();

        if name.is_empty() {
            return Err(InvalidPoint {
                reason: "must not be empty",
            });
        }

        if name.contains('/') {
            return Err(InvalidPoint {
                reason: "must not contain '/'",
            });
        }

        Ok(Point(name.to_string()))
    }

    /// Returns the point name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Hashes the same as the underlying `str`, so sets of points can be
// queried by name.
impl Borrow<str> for Point {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({})", self.0)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
