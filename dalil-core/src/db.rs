use crate::repositories::*;

/// Access to all repositories at once.
pub trait Db:
    UserRepo
    + PlaceRepo
    + ProductRepo
    + MessageRepo
    + AffiliateRepo
    + DiscountCodeRepo
    + PackageRepo
    + SubscriptionRepo
    + EmployeeRepo
{
}

impl<T> Db for T where
    T: UserRepo
        + PlaceRepo
        + ProductRepo
        + MessageRepo
        + AffiliateRepo
        + DiscountCodeRepo
        + PackageRepo
        + SubscriptionRepo
        + EmployeeRepo
{
}
