//! Help-request categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of assistance being requested.
///
/// Stored as the display string in the database so that listings render
/// without a lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// General, uncategorized help.
    #[serde(rename = "General Help")]
    GeneralHelp,
    /// Groceries and shopping errands.
    #[serde(rename = "Groceries & Shopping")]
    GroceriesShopping,
    /// Medical appointments, pharmacy runs, care support.
    #[serde(rename = "Medical Assistance")]
    MedicalAssistance,
    /// Rides and transport.
    #[serde(rename = "Transportation")]
    Transportation,
    /// Housework and cleaning.
    #[serde(rename = "Housework & Cleaning")]
    HouseworkCleaning,
    /// Pet sitting, walking, feeding.
    #[serde(rename = "Pet Care")]
    PetCare,
    /// Babysitting and childcare.
    #[serde(rename = "Childcare")]
    Childcare,
    /// Device setup, troubleshooting, digital literacy.
    #[serde(rename = "Technology Help")]
    TechnologyHelp,
    /// Gardening, mowing, snow removal.
    #[serde(rename = "Yard Work")]
    YardWork,
    /// Moving boxes, furniture, deliveries.
    #[serde(rename = "Moving & Delivery")]
    MovingDelivery,
    /// Visits and social company.
    #[serde(rename = "Companionship")]
    Companionship,
    /// Anything else.
    #[serde(rename = "Other")]
    Other,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 12] = [
        Self::GeneralHelp,
        Self::GroceriesShopping,
        Self::MedicalAssistance,
        Self::Transportation,
        Self::HouseworkCleaning,
        Self::PetCare,
        Self::Childcare,
        Self::TechnologyHelp,
        Self::YardWork,
        Self::MovingDelivery,
        Self::Companionship,
        Self::Other,
    ];

    /// Return the display string for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GeneralHelp => "General Help",
            Self::GroceriesShopping => "Groceries & Shopping",
            Self::MedicalAssistance => "Medical Assistance",
            Self::Transportation => "Transportation",
            Self::HouseworkCleaning => "Housework & Cleaning",
            Self::PetCare => "Pet Care",
            Self::Childcare => "Childcare",
            Self::TechnologyHelp => "Technology Help",
            Self::YardWork => "Yard Work",
            Self::MovingDelivery => "Moving & Delivery",
            Self::Companionship => "Companionship",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}

impl sqlx::Type<sqlx::Postgres> for Category {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }
}

impl<'q> sqlx::Encode<'q, sqlx::Postgres> for Category {
    fn encode_by_ref(
        &self,
        buf: &mut <sqlx::Postgres as sqlx::Database>::ArgumentBuffer<'q>,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <&str as sqlx::Encode<'q, sqlx::Postgres>>::encode_by_ref(&self.as_str(), buf)
    }
}

impl<'r> sqlx::Decode<'r, sqlx::Postgres> for Category {
    fn decode(
        value: <sqlx::Postgres as sqlx::Database>::ValueRef<'r>,
    ) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <&str as sqlx::Decode<'r, sqlx::Postgres>>::decode(value)?;
        s.parse().map_err(Into::into)
    }
}
