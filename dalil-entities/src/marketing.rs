use crate::{id::Id, percent::Percent, time::Timestamp};

/// A user earning commission on subscriptions referred by a code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Affiliate {
    pub id: Id,
    pub user_id: Id,
    pub code: String,
    pub commission_percent: Percent,
    /// Discount granted to referred customers.
    pub discount_percent: Percent,
    pub usage_count: u32,
    pub is_active: bool,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscountCode {
    pub id: Id,
    pub code: String,
    pub percent: Percent,
    pub max_uses: Option<u32>,
    pub usage_count: u32,
    pub is_active: bool,
    pub expires_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl DiscountCode {
    pub fn is_exhausted(&self) -> bool {
        self.max_uses.is_some_and(|max| self.usage_count >= max)
    }

    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }

    pub fn is_redeemable(&self, now: Timestamp) -> bool {
        self.is_active && !self.is_exhausted() && !self.is_expired(now)
    }

    pub fn toggled(self) -> Self {
        Self {
            is_active: !self.is_active,
            ..self
        }
    }
}
