//! Request composer - snapshots the panels into a `RequestDescriptor`

use std::collections::BTreeMap;

use crate::app::method::MethodSelector;
use crate::constants::FORM_CONTENT_TYPE;
use crate::models::{HttpMethod, RequestDescriptor};
use crate::params::ParamTable;

/// Read-only view over the panels that make up a request
pub struct RequestComposer<'a> {
    pub url: &'a str,
    pub query: &'a ParamTable,
    pub method: &'a MethodSelector,
    pub body: &'a ParamTable,
}

impl RequestComposer<'_> {
    pub fn compose(&self) -> RequestDescriptor {
        let method = self.method.value().to_string();
        let mut headers = BTreeMap::new();
        if method != HttpMethod::GET.as_str() {
            headers.insert("Content-Type".to_string(), FORM_CONTENT_TYPE.to_string());
        }

        RequestDescriptor {
            url: format!("{}{}", self.url, self.query.to_query_string()),
            body: self.body.to_body_params(),
            method,
            headers,
        }
    }
}
