// Merchant endpoints: QR generation and transaction-history printing.

use tracing::debug;

use crate::error::Error;
use crate::request::Request;
use crate::transport::Transport;
use crate::types::{
    MerchantCreateQrRequest, MerchantCreateQrResponse, MerchantTransactionHistoryPrintParams,
    MerchantTransactionHistoryPrintResponse,
};

pub const MERCHANT_CREATE_QR_PATH: &str = "/merchant/cashout/inquiry";
pub const MERCHANT_TRANSACTION_HISTORY_PRINT_PATH: &str = "/merchant/transaction-history/print";

/// `POST /merchant/cashout/inquiry` with `{ amount, merchantCode }`
pub fn merchant_create_qr_request(
    base_url: &str,
    payload: &MerchantCreateQrRequest,
) -> Result<Request, Error> {
    Request::post(base_url, MERCHANT_CREATE_QR_PATH, payload)
}

/// Generate a merchant QR for `payload.amount`.
pub async fn merchant_create_qr<T: Transport>(
    transport: &T,
    base_url: &str,
    payload: &MerchantCreateQrRequest,
) -> Result<MerchantCreateQrResponse, Error> {
    debug!(
        amount = payload.amount,
        merchant_code = %payload.merchant_code,
        "creating merchant qr"
    );
    transport
        .execute(merchant_create_qr_request(base_url, payload)?)
        .await
}

/// `GET /merchant/transaction-history/print?id={id}`
pub fn merchant_transaction_history_print_request(
    base_url: &str,
    params: &MerchantTransactionHistoryPrintParams,
) -> Request {
    Request::get(base_url, MERCHANT_TRANSACTION_HISTORY_PRINT_PATH).query("id", &params.id)
}

/// Ask the service to render a transaction-history document and return its URL.
pub async fn merchant_transaction_history_print<T: Transport>(
    transport: &T,
    base_url: &str,
    params: &MerchantTransactionHistoryPrintParams,
) -> Result<MerchantTransactionHistoryPrintResponse, Error> {
    debug!(id = %params.id, "printing transaction history");
    transport
        .execute(merchant_transaction_history_print_request(base_url, params))
        .await
}
