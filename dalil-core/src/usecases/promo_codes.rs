use super::prelude::*;
use crate::util::validate::normalize_code;

/// A code that grants a discount on a subscription.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromoCode {
    Discount(DiscountCode),
    Affiliate(Affiliate),
}

impl PromoCode {
    pub fn code(&self) -> &str {
        match self {
            Self::Discount(d) => &d.code,
            Self::Affiliate(a) => &a.code,
        }
    }

    pub fn percent(&self) -> Percent {
        match self {
            Self::Discount(d) => d.percent,
            Self::Affiliate(a) => a.discount_percent,
        }
    }
}

/// Look up a redeemable code.
///
/// Discount codes take precedence over affiliate codes.
pub fn resolve_promo_code<R>(repo: &R, code: &str, now: Timestamp) -> Result<PromoCode>
where
    R: DiscountCodeRepo + AffiliateRepo + ?Sized,
{
    let code = normalize_code(code);
    if let Some(discount) = repo.try_get_discount_code_by_code(&code)? {
        if discount.is_redeemable(now) {
            return Ok(PromoCode::Discount(discount));
        }
        log::debug!("Discount code {code} is not redeemable");
        return Err(Error::InvalidPromoCode);
    }
    match repo.try_get_affiliate_by_code(&code)? {
        Some(affiliate) if affiliate.is_active => Ok(PromoCode::Affiliate(affiliate)),
        _ => Err(Error::InvalidPromoCode),
    }
}

/// Count a usage of the code.
pub fn redeem_promo_code<R>(repo: &R, promo: PromoCode) -> Result<()>
where
    R: DiscountCodeRepo + AffiliateRepo + ?Sized,
{
    match promo {
        PromoCode::Discount(mut d) => {
            d.usage_count += 1;
            repo.update_discount_code(&d)?;
        }
        PromoCode::Affiliate(mut a) => {
            a.usage_count += 1;
            repo.update_affiliate(&a)?;
        }
    }
    Ok(())
}

/// Subtract the percentage from the price, rounding the discount down.
pub fn apply_percent(price: Price, percent: Percent) -> Price {
    price.discounted(percent)
}
