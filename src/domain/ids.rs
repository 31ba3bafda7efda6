//! Domain identifier types with validation
//!
//! This module provides newtype wrappers for the source-store identifiers.
//! Each type ensures type safety and rejects blank identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order identifier newtype wrapper
///
/// Represents the source-store identifier of a commercial Order record.
///
/// # Examples
///
/// ```
/// use meridian::domain::ids::OrderId;
/// use std::str::FromStr;
///
/// let order_id = OrderId::from_str("8014K000001Qab2QAC").unwrap();
/// assert_eq!(order_id.as_str(), "8014K000001Qab2QAC");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(String);

impl OrderId {
    /// Creates a new OrderId from a string
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is blank.
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Order ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the order ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for OrderId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for OrderId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Milestone identifier newtype wrapper
///
/// Represents the source-store identifier of a payment-milestone record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MilestoneId(String);

impl MilestoneId {
    /// Creates a new MilestoneId from a string
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is blank.
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Milestone ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the milestone ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for MilestoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MilestoneId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for MilestoneId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Line-item identifier newtype wrapper
///
/// Represents the source-store identifier of a milestone line item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineItemId(String);

impl LineItemId {
    /// Creates a new LineItemId from a string
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is blank.
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Line item ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the line-item ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for LineItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LineItemId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for LineItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id_valid() {
        let id = OrderId::new("ORD-001").unwrap();
        assert_eq!(id.as_str(), "ORD-001");
        assert_eq!(id.to_string(), "ORD-001");
    }

    #[test]
    fn test_order_id_empty() {
        assert!(OrderId::new("").is_err());
        assert!(OrderId::new("   ").is_err());
    }

    #[test]
    fn test_order_id_from_str() {
        let id: OrderId = "ORD-002".parse().unwrap();
        assert_eq!(id.as_str(), "ORD-002");
    }

    #[test]
    fn test_milestone_id_valid() {
        let id = MilestoneId::new("MS-001").unwrap();
        assert_eq!(id.as_str(), "MS-001");
    }

    #[test]
    fn test_milestone_id_empty() {
        assert!(MilestoneId::new("").is_err());
    }

    #[test]
    fn test_line_item_id_valid() {
        let id = LineItemId::new("LI-001").unwrap();
        assert_eq!(id.as_str(), "LI-001");
        assert_eq!(id.clone().into_inner(), "LI-001");
    }

    #[test]
    fn test_line_item_id_empty() {
        assert!(LineItemId::new(" ").is_err());
    }

    #[test]
    fn test_ids_are_distinct_types() {
        // The newtype pattern prevents mixing identifier kinds at compile
        // time; this test only checks equality semantics within one kind.
        let a = OrderId::new("X").unwrap();
        let b = OrderId::new("X").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_id_serde_round_trip() {
        let id = OrderId::new("ORD-003").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"ORD-003\"");
        let back: OrderId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
