use super::prelude::*;
use std::{cell::RefCell, result};

type RepoResult<T> = result::Result<T, RepoError>;

trait Key {
    fn key(&self) -> &str;
}

macro_rules! impl_key {
    ($($t:ty),*) => {
        $(
            impl Key for $t {
                fn key(&self) -> &str {
                    self.id.as_str()
                }
            }
        )*
    };
}

impl_key!(
    UserProfile,
    Place,
    Product,
    ProductMedia,
    ProductVariant,
    Message,
    Affiliate,
    DiscountCode,
    Package,
    Subscription,
    EmployeeRequest,
    PlaceEmployee
);

#[derive(Default)]
pub struct MockDb {
    pub users: RefCell<Vec<UserProfile>>,
    pub places: RefCell<Vec<Place>>,
    pub products: RefCell<Vec<Product>>,
    pub images: RefCell<Vec<ProductImage>>,
    pub videos: RefCell<Vec<ProductVideo>>,
    pub variants: RefCell<Vec<ProductVariant>>,
    pub messages: RefCell<Vec<Message>>,
    pub affiliates: RefCell<Vec<Affiliate>>,
    pub discount_codes: RefCell<Vec<DiscountCode>>,
    pub packages: RefCell<Vec<Package>>,
    pub subscriptions: RefCell<Vec<Subscription>>,
    pub employee_requests: RefCell<Vec<EmployeeRequest>>,
    pub employees: RefCell<Vec<PlaceEmployee>>,
}

impl MockDb {
    fn media(&self, kind: MediaKind) -> &RefCell<Vec<ProductMedia>> {
        match kind {
            MediaKind::Image => &self.images,
            MediaKind::Video => &self.videos,
        }
    }
}

fn get<T: Clone + Key>(objects: &[T], id: &str) -> RepoResult<T> {
    match objects.iter().find(|x| x.key() == id) {
        Some(x) => Ok(x.clone()),
        None => Err(RepoError::NotFound),
    }
}

fn create<T: Clone + Key>(objects: &mut Vec<T>, e: T) -> RepoResult<()> {
    if objects.iter().any(|x| x.key() == e.key()) {
        return Err(RepoError::AlreadyExists);
    }
    objects.push(e);
    Ok(())
}

fn update<T: Clone + Key>(objects: &mut [T], e: &T) -> RepoResult<()> {
    if let Some(pos) = objects.iter().position(|x| x.key() == e.key()) {
        objects[pos] = e.clone();
    } else {
        return Err(RepoError::NotFound);
    }
    Ok(())
}

fn delete<T: Clone + Key>(objects: &mut Vec<T>, id: &str) -> RepoResult<()> {
    if let Some(pos) = objects.iter().position(|x| x.key() == id) {
        objects.remove(pos);
    } else {
        return Err(RepoError::NotFound);
    }
    Ok(())
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

impl UserRepo for MockDb {
    fn create_user(&self, user: &UserProfile) -> RepoResult<()> {
        create(&mut self.users.borrow_mut(), user.clone())
    }
    fn update_user(&self, user: &UserProfile) -> RepoResult<()> {
        update(&mut self.users.borrow_mut(), user)
    }
    fn get_user(&self, id: &str) -> RepoResult<UserProfile> {
        get(&self.users.borrow(), id)
    }
    fn get_user_by_email(&self, email: &EmailAddress) -> RepoResult<UserProfile> {
        self.try_get_user_by_email(email)?
            .ok_or(RepoError::NotFound)
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> RepoResult<Option<UserProfile>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| &u.email == email)
            .cloned())
    }
    fn all_users(&self, pagination: &Pagination) -> RepoResult<Vec<UserProfile>> {
        Ok(pagination.apply(self.users.borrow().iter().cloned()))
    }
    fn count_users(&self) -> RepoResult<usize> {
        Ok(self.users.borrow().len())
    }
    fn find_admin_with_video_tokens(&self) -> RepoResult<Option<UserProfile>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| u.is_admin && u.video_tokens.is_some())
            .cloned())
    }
}

impl PlaceRepo for MockDb {
    fn create_place(&self, place: &Place) -> RepoResult<()> {
        create(&mut self.places.borrow_mut(), place.clone())
    }
    fn update_place(&self, place: &Place) -> RepoResult<()> {
        update(&mut self.places.borrow_mut(), place)
    }
    fn get_place(&self, id: &str) -> RepoResult<Place> {
        get(&self.places.borrow(), id)
    }
    fn all_places(&self) -> RepoResult<Vec<Place>> {
        Ok(self.places.borrow().clone())
    }
    fn places_of_owner(&self, owner_id: &str) -> RepoResult<Vec<Place>> {
        Ok(self
            .places
            .borrow()
            .iter()
            .filter(|p| p.owner_id.as_str() == owner_id)
            .cloned()
            .collect())
    }
    fn count_places_of_owner(&self, owner_id: &str) -> RepoResult<usize> {
        Ok(self.places_of_owner(owner_id)?.len())
    }
    fn count_places(&self, only_active: bool) -> RepoResult<usize> {
        Ok(self
            .places
            .borrow()
            .iter()
            .filter(|p| !only_active || p.is_active)
            .count())
    }
    fn search_places(&self, query: &PlaceQuery) -> RepoResult<Vec<Place>> {
        let places = self.places.borrow();
        let iter = places
            .iter()
            .filter(|p| query.include_inactive || p.is_active)
            .filter(|p| {
                query.text.as_deref().map_or(true, |t| {
                    contains_ignore_case(&p.name, t)
                        || p.description
                            .as_deref()
                            .is_some_and(|d| contains_ignore_case(d, t))
                })
            })
            .filter(|p| query.category.as_ref().map_or(true, |c| &p.category == c))
            .filter(|p| query.city.is_none() || p.city == query.city)
            .cloned();
        Ok(iter.take(query.limit.unwrap_or(usize::MAX)).collect())
    }
    fn record_place_view(&self, id: &str, now: Timestamp) -> RepoResult<PlaceViews> {
        let mut places = self.places.borrow_mut();
        let place = places
            .iter_mut()
            .find(|p| p.id.as_str() == id)
            .ok_or(RepoError::NotFound)?;
        place.views = place.views.record(now);
        Ok(place.views)
    }
    fn set_place_active(&self, id: &str, active: bool) -> RepoResult<()> {
        let mut places = self.places.borrow_mut();
        let place = places
            .iter_mut()
            .find(|p| p.id.as_str() == id)
            .ok_or(RepoError::NotFound)?;
        place.is_active = active;
        Ok(())
    }
}

impl ProductRepo for MockDb {
    fn create_product(&self, product: &Product) -> RepoResult<()> {
        create(&mut self.products.borrow_mut(), product.clone())
    }
    fn update_product(&self, product: &Product) -> RepoResult<()> {
        update(&mut self.products.borrow_mut(), product)
    }
    fn delete_product(&self, id: &str) -> RepoResult<()> {
        delete(&mut self.products.borrow_mut(), id)?;
        self.images
            .borrow_mut()
            .retain(|m| m.product_id.as_str() != id);
        self.videos
            .borrow_mut()
            .retain(|m| m.product_id.as_str() != id);
        self.variants
            .borrow_mut()
            .retain(|v| v.product_id.as_str() != id);
        Ok(())
    }
    fn get_product(&self, id: &str) -> RepoResult<Product> {
        get(&self.products.borrow(), id)
    }
    fn products_of_place(&self, place_id: &str) -> RepoResult<Vec<Product>> {
        Ok(self
            .products
            .borrow()
            .iter()
            .filter(|p| p.place_id.as_str() == place_id)
            .cloned()
            .collect())
    }
    fn count_products_of_place(&self, place_id: &str) -> RepoResult<usize> {
        Ok(self.products_of_place(place_id)?.len())
    }
    fn count_products(&self) -> RepoResult<usize> {
        Ok(self.products.borrow().len())
    }
    fn search_products(&self, query: &ProductQuery) -> RepoResult<Vec<Product>> {
        let places = self.places.borrow();
        let products = self.products.borrow();
        let iter = products
            .iter()
            .filter(|p| p.is_active)
            .filter(|p| {
                places
                    .iter()
                    .any(|place| place.id == p.place_id && place.is_active)
            })
            .filter(|p| query.place_id.as_ref().map_or(true, |id| &p.place_id == id))
            .filter(|p| {
                query.text.as_deref().map_or(true, |t| {
                    contains_ignore_case(&p.name, t)
                        || p.description
                            .as_deref()
                            .is_some_and(|d| contains_ignore_case(d, t))
                })
            })
            .cloned();
        Ok(iter.take(query.limit.unwrap_or(usize::MAX)).collect())
    }
    fn add_product_media(&self, kind: MediaKind, media: &ProductMedia) -> RepoResult<()> {
        create(&mut self.media(kind).borrow_mut(), media.clone())
    }
    fn delete_product_media(&self, kind: MediaKind, id: &str) -> RepoResult<()> {
        delete(&mut self.media(kind).borrow_mut(), id)
    }
    fn get_product_media(&self, kind: MediaKind, id: &str) -> RepoResult<ProductMedia> {
        get(&self.media(kind).borrow(), id)
    }
    fn product_media(&self, kind: MediaKind, product_id: &str) -> RepoResult<Vec<ProductMedia>> {
        let mut media: Vec<_> = self
            .media(kind)
            .borrow()
            .iter()
            .filter(|m| m.product_id.as_str() == product_id)
            .cloned()
            .collect();
        media.sort_by_key(|m| m.position);
        Ok(media)
    }
    fn count_product_media(&self, kind: MediaKind, product_id: &str) -> RepoResult<usize> {
        Ok(self.product_media(kind, product_id)?.len())
    }
    fn add_product_variant(&self, variant: &ProductVariant) -> RepoResult<()> {
        create(&mut self.variants.borrow_mut(), variant.clone())
    }
    fn delete_product_variant(&self, id: &str) -> RepoResult<()> {
        delete(&mut self.variants.borrow_mut(), id)
    }
    fn get_product_variant(&self, id: &str) -> RepoResult<ProductVariant> {
        get(&self.variants.borrow(), id)
    }
    fn product_variants(&self, product_id: &str) -> RepoResult<Vec<ProductVariant>> {
        Ok(self
            .variants
            .borrow()
            .iter()
            .filter(|v| v.product_id.as_str() == product_id)
            .cloned()
            .collect())
    }
}

impl MessageRepo for MockDb {
    fn create_message(&self, message: &Message) -> RepoResult<()> {
        create(&mut self.messages.borrow_mut(), message.clone())
    }
    fn get_message(&self, id: &str) -> RepoResult<Message> {
        get(&self.messages.borrow(), id)
    }
    fn messages_of_user(&self, user_id: &str) -> RepoResult<Vec<Message>> {
        let user_id = Id::from(user_id);
        Ok(self
            .messages
            .borrow()
            .iter()
            .filter(|m| m.involves(&user_id))
            .cloned()
            .collect())
    }
    fn messages_of_place(&self, place_id: &str) -> RepoResult<Vec<Message>> {
        Ok(self
            .messages
            .borrow()
            .iter()
            .filter(|m| m.place_id.as_str() == place_id)
            .cloned()
            .collect())
    }
    fn mark_messages_read(
        &self,
        recipient_id: &str,
        sender_id: &str,
        place_id: &str,
    ) -> RepoResult<usize> {
        let mut count = 0;
        for m in self.messages.borrow_mut().iter_mut().filter(|m| {
            !m.is_read
                && m.recipient_id.as_str() == recipient_id
                && m.sender_id.as_str() == sender_id
                && m.place_id.as_str() == place_id
        }) {
            m.is_read = true;
            count += 1;
        }
        Ok(count)
    }
}

impl AffiliateRepo for MockDb {
    fn create_affiliate(&self, affiliate: &Affiliate) -> RepoResult<()> {
        create(&mut self.affiliates.borrow_mut(), affiliate.clone())
    }
    fn update_affiliate(&self, affiliate: &Affiliate) -> RepoResult<()> {
        update(&mut self.affiliates.borrow_mut(), affiliate)
    }
    fn get_affiliate(&self, id: &str) -> RepoResult<Affiliate> {
        get(&self.affiliates.borrow(), id)
    }
    fn try_get_affiliate_by_code(&self, code: &str) -> RepoResult<Option<Affiliate>> {
        Ok(self
            .affiliates
            .borrow()
            .iter()
            .find(|a| a.code == code)
            .cloned())
    }
    fn all_affiliates(&self) -> RepoResult<Vec<Affiliate>> {
        Ok(self.affiliates.borrow().clone())
    }
}

impl DiscountCodeRepo for MockDb {
    fn create_discount_code(&self, code: &DiscountCode) -> RepoResult<()> {
        create(&mut self.discount_codes.borrow_mut(), code.clone())
    }
    fn update_discount_code(&self, code: &DiscountCode) -> RepoResult<()> {
        update(&mut self.discount_codes.borrow_mut(), code)
    }
    fn get_discount_code(&self, id: &str) -> RepoResult<DiscountCode> {
        get(&self.discount_codes.borrow(), id)
    }
    fn try_get_discount_code_by_code(&self, code: &str) -> RepoResult<Option<DiscountCode>> {
        Ok(self
            .discount_codes
            .borrow()
            .iter()
            .find(|d| d.code == code)
            .cloned())
    }
    fn all_discount_codes(&self) -> RepoResult<Vec<DiscountCode>> {
        Ok(self.discount_codes.borrow().clone())
    }
}

impl PackageRepo for MockDb {
    fn create_package(&self, package: &Package) -> RepoResult<()> {
        create(&mut self.packages.borrow_mut(), package.clone())
    }
    fn update_package(&self, package: &Package) -> RepoResult<()> {
        update(&mut self.packages.borrow_mut(), package)
    }
    fn get_package(&self, id: &str) -> RepoResult<Package> {
        get(&self.packages.borrow(), id)
    }
    fn all_packages(&self) -> RepoResult<Vec<Package>> {
        Ok(self.packages.borrow().clone())
    }
}

impl SubscriptionRepo for MockDb {
    fn create_subscription(&self, subscription: &Subscription) -> RepoResult<()> {
        create(&mut self.subscriptions.borrow_mut(), subscription.clone())
    }
    fn update_subscription(&self, subscription: &Subscription) -> RepoResult<()> {
        update(&mut self.subscriptions.borrow_mut(), subscription)
    }
    fn get_subscription(&self, id: &str) -> RepoResult<Subscription> {
        get(&self.subscriptions.borrow(), id)
    }
    fn subscriptions_of_user(&self, user_id: &str) -> RepoResult<Vec<Subscription>> {
        let mut subscriptions: Vec<_> = self
            .subscriptions
            .borrow()
            .iter()
            .filter(|s| s.user_id.as_str() == user_id)
            .cloned()
            .collect();
        subscriptions.sort_by(|a, b| b.started_at.cmp(&a.started_at));
        Ok(subscriptions)
    }
    fn count_active_subscriptions(&self, now: Timestamp) -> RepoResult<usize> {
        Ok(self
            .subscriptions
            .borrow()
            .iter()
            .filter(|s| s.is_valid_at(now))
            .count())
    }
    fn expire_subscriptions(&self, now: Timestamp) -> RepoResult<usize> {
        let mut count = 0;
        for s in self
            .subscriptions
            .borrow_mut()
            .iter_mut()
            .filter(|s| s.is_active && s.expires_at <= now)
        {
            s.is_active = false;
            count += 1;
        }
        Ok(count)
    }
}

impl EmployeeRepo for MockDb {
    fn create_employee_request(&self, request: &EmployeeRequest) -> RepoResult<()> {
        create(&mut self.employee_requests.borrow_mut(), request.clone())
    }
    fn update_employee_request(&self, request: &EmployeeRequest) -> RepoResult<()> {
        update(&mut self.employee_requests.borrow_mut(), request)
    }
    fn get_employee_request(&self, id: &str) -> RepoResult<EmployeeRequest> {
        get(&self.employee_requests.borrow(), id)
    }
    fn employee_requests_of_place(&self, place_id: &str) -> RepoResult<Vec<EmployeeRequest>> {
        Ok(self
            .employee_requests
            .borrow()
            .iter()
            .filter(|r| r.place_id.as_str() == place_id)
            .cloned()
            .collect())
    }
    fn employee_requests_of_user(&self, user_id: &str) -> RepoResult<Vec<EmployeeRequest>> {
        Ok(self
            .employee_requests
            .borrow()
            .iter()
            .filter(|r| r.user_id.as_str() == user_id)
            .cloned()
            .collect())
    }
    fn create_employee(&self, employee: &PlaceEmployee) -> RepoResult<()> {
        create(&mut self.employees.borrow_mut(), employee.clone())
    }
    fn update_employee(&self, employee: &PlaceEmployee) -> RepoResult<()> {
        update(&mut self.employees.borrow_mut(), employee)
    }
    fn delete_employee(&self, id: &str) -> RepoResult<()> {
        delete(&mut self.employees.borrow_mut(), id)
    }
    fn get_employee(&self, id: &str) -> RepoResult<PlaceEmployee> {
        get(&self.employees.borrow(), id)
    }
    fn employees_of_place(&self, place_id: &str) -> RepoResult<Vec<PlaceEmployee>> {
        Ok(self
            .employees
            .borrow()
            .iter()
            .filter(|e| e.place_id.as_str() == place_id)
            .cloned()
            .collect())
    }
    fn employments_of_user(&self, user_id: &str) -> RepoResult<Vec<PlaceEmployee>> {
        Ok(self
            .employees
            .borrow()
            .iter()
            .filter(|e| e.user_id.as_str() == user_id)
            .cloned()
            .collect())
    }
    fn try_get_employee(&self, place_id: &str, user_id: &str) -> RepoResult<Option<PlaceEmployee>> {
        Ok(self
            .employees
            .borrow()
            .iter()
            .find(|e| e.place_id.as_str() == place_id && e.user_id.as_str() == user_id)
            .cloned())
    }
}
