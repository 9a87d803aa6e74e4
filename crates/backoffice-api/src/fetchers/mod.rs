// Fetcher functions
//
// One async function per endpoint. Each builds a `Request` against a fixed
// path template and hands it to a `Transport`; nothing is cached and errors
// come back exactly as the transport produced them. The pure `*_request`
// builders expose the request a fetcher would send.

pub mod merchant;
pub mod qr;

pub use merchant::{
    MERCHANT_CREATE_QR_PATH, MERCHANT_TRANSACTION_HISTORY_PRINT_PATH, merchant_create_qr,
    merchant_create_qr_request, merchant_transaction_history_print,
    merchant_transaction_history_print_request,
};
pub use qr::{
    QR_LOCATION_TYPE_PATH, QR_TYPE_PATH, fetch_qr_location_type_list, fetch_qr_type_list,
    qr_location_type_list_request, qr_type_list_request,
};

use crate::error::Error;
use crate::transport::Transport;
use crate::types::{
    MerchantCreateQrRequest, MerchantCreateQrResponse, MerchantTransactionHistoryPrintParams,
    MerchantTransactionHistoryPrintResponse, QrLocationTypeListParams, QrLocationTypeListResponse,
    QrTypeListParams, QrTypeListResponse,
};

/// A transport bound to one dashboard's base URL.
///
/// Convenience for callers that talk to a single service; every method is a
/// direct call to the matching free fetcher.
#[derive(Debug, Clone)]
pub struct ServiceClient<T> {
    transport: T,
    base_url: String,
}

impl<T: Transport> ServiceClient<T> {
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn qr_location_type_list(
        &self,
        params: &QrLocationTypeListParams,
    ) -> Result<QrLocationTypeListResponse, Error> {
        fetch_qr_location_type_list(&self.transport, &self.base_url, params).await
    }

    pub async fn qr_type_list(&self, params: &QrTypeListParams) -> Result<QrTypeListResponse, Error> {
        fetch_qr_type_list(&self.transport, &self.base_url, params).await
    }

    pub async fn create_qr(
        &self,
        payload: &MerchantCreateQrRequest,
    ) -> Result<MerchantCreateQrResponse, Error> {
        merchant_create_qr(&self.transport, &self.base_url, payload).await
    }

    pub async fn transaction_history_print(
        &self,
        params: &MerchantTransactionHistoryPrintParams,
    ) -> Result<MerchantTransactionHistoryPrintResponse, Error> {
        merchant_transaction_history_print(&self.transport, &self.base_url, params).await
    }
}
