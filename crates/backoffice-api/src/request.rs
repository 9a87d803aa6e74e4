// Endpoint descriptor
//
// A `Request` is plain data: which base URL, which fixed path template,
// which verb, which query pairs and which JSON payload. Fetchers build one
// per call; a `Transport` turns it into exactly one network round-trip.

use std::fmt;

use serde::Serialize;
use strum::Display;
use url::Url;

use crate::error::Error;

/// HTTP verb used by the dashboard service endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
}

/// Parse a service base URL into a form endpoint paths can be joined onto.
///
/// Only `http`/`https` bases without a query or fragment are accepted; the
/// returned URL always ends in `/`, so `Url::join` keeps any path prefix.
pub fn normalize_base_url(raw: &str) -> Result<Url, Error> {
    let mut url = Url::parse(raw)?;
    let reject = |reason: String| Error::InvalidBaseUrl {
        url: raw.to_owned(),
        reason,
    };

    match url.scheme() {
        "http" | "https" => {}
        other => return Err(reject(format!("unsupported scheme '{other}'"))),
    }
    if url.query().is_some() {
        return Err(reject("query strings are not allowed".into()));
    }
    if url.fragment().is_some() {
        return Err(reject("fragments are not allowed".into()));
    }

    let path = url.path().trim_end_matches('/').to_owned();
    url.set_path(&format!("{path}/"));
    Ok(url)
}

/// Outbound call against one fixed endpoint path.
///
/// `payload` is only ever set by [`Request::post`]; GET requests carry their
/// inputs in `query`.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    base_url: String,
    path: &'static str,
    method: Method,
    query: Vec<(&'static str, String)>,
    payload: Option<serde_json::Value>,
}

impl Request {
    /// Describe a GET against `base_url` + `path`.
    pub fn get(base_url: &str, path: &'static str) -> Self {
        Self {
            base_url: base_url.to_owned(),
            path,
            method: Method::Get,
            query: Vec::new(),
            payload: None,
        }
    }

    /// Describe a POST carrying `payload` as its JSON body.
    pub fn post<B: Serialize + ?Sized>(
        base_url: &str,
        path: &'static str,
        payload: &B,
    ) -> Result<Self, Error> {
        let payload = serde_json::to_value(payload).map_err(Error::Encode)?;
        Ok(Self {
            base_url: base_url.to_owned(),
            path,
            method: Method::Post,
            query: Vec::new(),
            payload: Some(payload),
        })
    }

    /// Append a query parameter. Pairs keep insertion order.
    pub fn query(mut self, name: &'static str, value: impl fmt::Display) -> Self {
        self.query.push((name, value.to_string()));
        self
    }

    /// Append a query parameter only when a value is present.
    pub fn query_opt<V: fmt::Display>(self, name: &'static str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.query(name, v),
            None => self,
        }
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn query_pairs(&self) -> &[(&'static str, String)] {
        &self.query
    }

    pub fn payload(&self) -> Option<&serde_json::Value> {
        self.payload.as_ref()
    }

    /// Endpoint URL without the query: the normalized base joined with the
    /// path template.
    pub fn endpoint(&self) -> Result<Url, Error> {
        let base = normalize_base_url(&self.base_url)?;
        Ok(base.join(self.path.trim_start_matches('/'))?)
    }

    /// Full URL including form-urlencoded query pairs.
    ///
    /// Plain identifiers come out verbatim (`?id=42`); reserved characters
    /// are escaped.
    pub fn url(&self) -> Result<Url, Error> {
        let mut url = self.endpoint()?;
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }
        Ok(url)
    }
}
