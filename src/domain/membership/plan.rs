//! Membership plan product.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Amount, PlanId, ValidationError};

/// Training sessions per week offered by a plan. The gym only sells
/// 2, 3, and 5 day schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklyFrequency(u8);

impl WeeklyFrequency {
    const ALLOWED: [u8; 3] = [2, 3, 5];

    /// Validates a weekly frequency.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` unless the value is 2, 3, or 5.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if !Self::ALLOWED.contains(&value) {
            return Err(ValidationError::invalid_format(
                "weekly_frequency",
                "must be 2, 3, or 5 sessions per week",
            ));
        }
        Ok(Self(value))
    }

    /// Sessions per week.
    pub fn sessions(&self) -> u8 {
        self.0
    }
}

/// A membership product: weekly frequency plus a price.
///
/// # Invariants
///
/// - `price > 0`
/// - `weekly_frequency ∈ {2, 3, 5}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub id: PlanId,
    pub name: String,
    pub weekly_frequency: WeeklyFrequency,
    /// Price in integer cents.
    pub price: Amount,
    pub description: String,
    pub active: bool,
}

impl Plan {
    /// Creates a new active plan.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty name, non-positive price, or
    /// an unsupported weekly frequency.
    pub fn create(
        id: PlanId,
        name: String,
        weekly_frequency: u8,
        price_cents: i64,
        description: String,
    ) -> Result<Self, ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(Self {
            id,
            name,
            weekly_frequency: WeeklyFrequency::try_new(weekly_frequency)?,
            price: Amount::positive("price", price_cents)?,
            description,
            active: true,
        })
    }

    /// Updates the plan's product fields, revalidating the invariants.
    pub fn update(
        &mut self,
        name: String,
        weekly_frequency: u8,
        price_cents: i64,
        description: String,
    ) -> Result<(), ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        self.weekly_frequency = WeeklyFrequency::try_new(weekly_frequency)?;
        self.price = Amount::positive("price", price_cents)?;
        self.name = name;
        self.description = description;
        Ok(())
    }

    /// Takes the plan off sale. Existing memberships are unaffected.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Puts the plan back on sale.
    pub fn activate(&mut self) {
        self.active = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_only_sold_frequencies() {
        for freq in [2u8, 3, 5] {
            assert!(WeeklyFrequency::try_new(freq).is_ok());
        }
        for freq in [0u8, 1, 4, 6, 7] {
            assert!(WeeklyFrequency::try_new(freq).is_err());
        }
    }

    #[test]
    fn zero_price_rejected_one_cent_accepted() {
        assert!(Plan::create(PlanId::new(), "Basic".into(), 3, 0, String::new()).is_err());
        let plan = Plan::create(PlanId::new(), "Basic".into(), 3, 1, String::new()).unwrap();
        assert_eq!(plan.price.as_cents(), 1);
        assert!(plan.active);
    }

    #[test]
    fn update_revalidates_invariants() {
        let mut plan =
            Plan::create(PlanId::new(), "Basic".into(), 3, 150_000, String::new()).unwrap();
        assert!(plan
            .update("Basic".into(), 4, 150_000, String::new())
            .is_err());
        assert!(plan
            .update("Full".into(), 5, 200_000, "all week".into())
            .is_ok());
        assert_eq!(plan.weekly_frequency.sessions(), 5);
    }
}
