// QR catalogue endpoints: location types and QR types.

use tracing::debug;

use crate::error::Error;
use crate::request::Request;
use crate::transport::Transport;
use crate::types::{
    QrLocationTypeListParams, QrLocationTypeListResponse, QrTypeListParams, QrTypeListResponse,
};

pub const QR_LOCATION_TYPE_PATH: &str = "/qr-location-type";
pub const QR_TYPE_PATH: &str = "/qr-type";

/// `GET /qr-location-type?page=&size=&id=&name=`
///
/// Only filters that are set end up in the query string.
pub fn qr_location_type_list_request(base_url: &str, params: &QrLocationTypeListParams) -> Request {
    Request::get(base_url, QR_LOCATION_TYPE_PATH)
        .query_opt("page", params.page)
        .query_opt("size", params.size)
        .query_opt("id", params.id.as_deref())
        .query_opt("name", params.name.as_deref())
}

/// List QR location types along with the merchant locations using them.
pub async fn fetch_qr_location_type_list<T: Transport>(
    transport: &T,
    base_url: &str,
    params: &QrLocationTypeListParams,
) -> Result<QrLocationTypeListResponse, Error> {
    debug!(?params, "listing qr location types");
    transport
        .execute(qr_location_type_list_request(base_url, params))
        .await
}

/// `GET /qr-type?page=&size=&qrType=`
pub fn qr_type_list_request(base_url: &str, params: &QrTypeListParams) -> Request {
    Request::get(base_url, QR_TYPE_PATH)
        .query_opt("page", params.page)
        .query_opt("size", params.size)
        .query_opt("qrType", params.qr_type.as_deref())
}

/// List the QR type codes known to the service.
pub async fn fetch_qr_type_list<T: Transport>(
    transport: &T,
    base_url: &str,
    params: &QrTypeListParams,
) -> Result<QrTypeListResponse, Error> {
    debug!(?params, "listing qr types");
    transport.execute(qr_type_list_request(base_url, params)).await
}
