//! Read-only collections only the BiOS view consumes

use shared::models::{Bill, Booking, FitnessClass, Member, MembershipPlan, Product};

use crate::{ClientResult, HttpClient};

pub const MEMBERS: &str = "/api/members";
pub const BILLS: &str = "/api/bills";
pub const BOOKINGS: &str = "/api/bookings";
pub const CLASSES: &str = "/api/classes";
pub const PRODUCTS: &str = "/api/products";
pub const MEMBERSHIP_PLANS: &str = "/api/membership-plans";

pub struct DirectoryApi<'a, H> {
    pub(crate) http: &'a H,
}

impl<H: HttpClient> DirectoryApi<'_, H> {
    pub async fn members(&self) -> ClientResult<Vec<Member>> {
        self.http.get_list(MEMBERS).await
    }

    pub async fn bills(&self) -> ClientResult<Vec<Bill>> {
        self.http.get_list(BILLS).await
    }

    pub async fn bookings(&self) -> ClientResult<Vec<Booking>> {
        self.http.get_list(BOOKINGS).await
    }

    pub async fn classes(&self) -> ClientResult<Vec<FitnessClass>> {
        self.http.get_list(CLASSES).await
    }

    pub async fn products(&self) -> ClientResult<Vec<Product>> {
        self.http.get_list(PRODUCTS).await
    }

    pub async fn membership_plans(&self) -> ClientResult<Vec<MembershipPlan>> {
        self.http.get_list(MEMBERSHIP_PLANS).await
    }
}
