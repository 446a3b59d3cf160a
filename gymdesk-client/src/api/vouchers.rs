//! `/api/payment-vouchers` and `/receipt-vouchers`
//!
//! Both resources share the voucher shape; only payment vouchers accept
//! partial payments.

use serde_json::Value;
use shared::models::{Voucher, VoucherPayload, VoucherPaymentCreate};

use super::item_path;
use crate::{ClientResult, HttpClient};

pub const PAYMENT_VOUCHERS: &str = "/api/payment-vouchers";
pub const RECEIPT_VOUCHERS: &str = "/receipt-vouchers";

async fn list<H: HttpClient>(http: &H, base: &str) -> ClientResult<Vec<Voucher>> {
    http.get_list(base).await
}

async fn get<H: HttpClient>(http: &H, base: &str, id: &str) -> ClientResult<Voucher> {
    http.get_item(&item_path(base, id)).await
}

async fn create<H: HttpClient>(http: &H, base: &str, payload: &VoucherPayload) -> ClientResult<Voucher> {
    http.post_item(base, payload).await
}

async fn update<H: HttpClient>(
    http: &H,
    base: &str,
    id: &str,
    payload: &VoucherPayload,
) -> ClientResult<Voucher> {
    http.put_item(&item_path(base, id), payload).await
}

async fn delete<H: HttpClient>(http: &H, base: &str, id: &str) -> ClientResult<()> {
    http.delete::<Value>(&item_path(base, id)).await?;
    Ok(())
}

pub struct PaymentVouchersApi<'a, H> {
    pub(crate) http: &'a H,
}

impl<H: HttpClient> PaymentVouchersApi<'_, H> {
    pub async fn list(&self) -> ClientResult<Vec<Voucher>> {
        list(self.http, PAYMENT_VOUCHERS).await
    }

    pub async fn get(&self, id: &str) -> ClientResult<Voucher> {
        get(self.http, PAYMENT_VOUCHERS, id).await
    }

    pub async fn create(&self, payload: &VoucherPayload) -> ClientResult<Voucher> {
        create(self.http, PAYMENT_VOUCHERS, payload).await
    }

    pub async fn update(&self, id: &str, payload: &VoucherPayload) -> ClientResult<Voucher> {
        update(self.http, PAYMENT_VOUCHERS, id, payload).await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        delete(self.http, PAYMENT_VOUCHERS, id).await
    }

    /// `POST /api/payment-vouchers/:id/payments`
    ///
    /// The server accumulates `paidAmount`; overpayment is not rejected.
    pub async fn add_payment(
        &self,
        id: &str,
        payment: &VoucherPaymentCreate,
    ) -> ClientResult<Voucher> {
        let path = format!("{}/payments", item_path(PAYMENT_VOUCHERS, id));
        tracing::info!(voucher = id, amount = payment.amount, "Recording voucher payment");
        self.http.post_item(&path, payment).await
    }
}

pub struct ReceiptVouchersApi<'a, H> {
    pub(crate) http: &'a H,
}

impl<H: HttpClient> ReceiptVouchersApi<'_, H> {
    pub async fn list(&self) -> ClientResult<Vec<Voucher>> {
        list(self.http, RECEIPT_VOUCHERS).await
    }

    pub async fn get(&self, id: &str) -> ClientResult<Voucher> {
        get(self.http, RECEIPT_VOUCHERS, id).await
    }

    pub async fn create(&self, payload: &VoucherPayload) -> ClientResult<Voucher> {
        create(self.http, RECEIPT_VOUCHERS, payload).await
    }

    pub async fn update(&self, id: &str, payload: &VoucherPayload) -> ClientResult<Voucher> {
        update(self.http, RECEIPT_VOUCHERS, id, payload).await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        delete(self.http, RECEIPT_VOUCHERS, id).await
    }
}
