//! Resource accessors over one HTTP client

use crate::api::{
    AssetsApi, DirectoryApi, ExperienceApi, FacilitiesApi, FollowUpsApi, LeadsApi,
    PaymentVouchersApi, PayrollApi, ProductionApi, ReceiptVouchersApi, StaffApi, TransactionsApi,
    WorkflowsApi,
};
use crate::session::SessionHandle;
use crate::{ClientConfig, ClientResult, HttpClient, NetworkHttpClient};

/// Entry point: `client.leads().list().await`
#[derive(Debug, Clone)]
pub struct GymClient<H = NetworkHttpClient> {
    http: H,
}

impl GymClient<NetworkHttpClient> {
    /// Network client using the session derived from the config token
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::new(NetworkHttpClient::new(config)?))
    }

    /// Network client sharing an externally managed session
    pub fn with_session(config: &ClientConfig, session: SessionHandle) -> ClientResult<Self> {
        Ok(Self::new(NetworkHttpClient::with_session(config, session)?))
    }
}

impl<H: HttpClient> GymClient<H> {
    pub fn new(http: H) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &H {
        &self.http
    }

    pub fn assets(&self) -> AssetsApi<'_, H> {
        AssetsApi { http: &self.http }
    }

    pub fn transactions(&self) -> TransactionsApi<'_, H> {
        TransactionsApi { http: &self.http }
    }

    pub fn followups(&self) -> FollowUpsApi<'_, H> {
        FollowUpsApi { http: &self.http }
    }

    pub fn workflows(&self) -> WorkflowsApi<'_, H> {
        WorkflowsApi { http: &self.http }
    }

    pub fn leads(&self) -> LeadsApi<'_, H> {
        LeadsApi { http: &self.http }
    }

    pub fn experience(&self) -> ExperienceApi<'_, H> {
        ExperienceApi { http: &self.http }
    }

    pub fn payment_vouchers(&self) -> PaymentVouchersApi<'_, H> {
        PaymentVouchersApi { http: &self.http }
    }

    pub fn receipt_vouchers(&self) -> ReceiptVouchersApi<'_, H> {
        ReceiptVouchersApi { http: &self.http }
    }

    pub fn staff(&self) -> StaffApi<'_, H> {
        StaffApi { http: &self.http }
    }

    pub fn payroll(&self) -> PayrollApi<'_, H> {
        PayrollApi { http: &self.http }
    }

    pub fn production(&self) -> ProductionApi<'_, H> {
        ProductionApi { http: &self.http }
    }

    pub fn facilities(&self) -> FacilitiesApi<'_, H> {
        FacilitiesApi { http: &self.http }
    }

    pub fn directory(&self) -> DirectoryApi<'_, H> {
        DirectoryApi { http: &self.http }
    }
}
