//! REST client for the record store and the profile service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against the host
//! site's `_api` endpoints. Everything here is gated behind
//! `#[cfg(feature = "hydrate")]` since it requires a browser environment;
//! native builds exercise the pipeline through the trait mocks instead.

#[cfg(feature = "hydrate")]
use crate::config::FieldSelection;
#[cfg(feature = "hydrate")]
use crate::net::store::{FetchError, ProfileError, ProfileService, RecordStore};
#[cfg(feature = "hydrate")]
use crate::net::types::{ListResponse, ProfileProperties, RawRow};

/// HTTP client for one site. An empty base URL means same-origin.
#[cfg(feature = "hydrate")]
#[derive(Clone, Debug, Default)]
pub struct SiteClient {
    base_url: String,
}

#[cfg(feature = "hydrate")]
impl SiteClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<Result<T, String>, (u16, String)> {
        let resp = gloo_net::http::Request::get(url)
            .header("Accept", "application/json;odata=nometadata")
            .send()
            .await
            .map_err(|e| (0, e.to_string()))?;
        if !resp.ok() {
            return Err((resp.status(), resp.status_text()));
        }
        Ok(resp.json::<T>().await.map_err(|e| e.to_string()))
    }
}

#[cfg(feature = "hydrate")]
impl RecordStore for SiteClient {
    async fn fetch_rows(
        &self,
        list_name: &str,
        fields: &FieldSelection,
    ) -> Result<Vec<RawRow>, FetchError> {
        let user = &fields.user;
        let select = format!(
            "ID,{user}/Title,{user}/EMail,{user}/JobTitle,{user}/Id,{},{}",
            fields.description, fields.certification
        );
        let url = format!(
            "{}/_api/web/lists/getbytitle('{}')/items?$select={}&$expand={user}",
            self.base_url,
            encode_component(list_name),
            encode_component(&select),
        );

        match self.get_json::<ListResponse>(&url).await {
            Ok(Ok(body)) => Ok(body.value),
            Ok(Err(decode)) => Err(FetchError::Malformed(decode)),
            Err((404, _)) => Err(FetchError::ListNotFound(list_name.to_owned())),
            Err((401 | 403, _)) => Err(FetchError::PermissionDenied(list_name.to_owned())),
            Err((status, text)) => Err(FetchError::Request(format!("{status} {text}"))),
        }
    }
}

#[cfg(feature = "hydrate")]
impl ProfileService for SiteClient {
    async fn picture_url(&self, claim: &str) -> Result<Option<String>, ProfileError> {
        let url = format!(
            "{}/_api/sp.userprofiles.peoplemanager/getpropertiesfor(@v)?@v='{}'",
            self.base_url,
            encode_component(claim),
        );

        match self.get_json::<ProfileProperties>(&url).await {
            Ok(Ok(props)) => Ok(props.picture_url),
            Ok(Err(decode)) => Err(ProfileError::Malformed(decode)),
            Err((status, text)) => Err(ProfileError::Request(format!("{status} {text}"))),
        }
    }
}

#[cfg(feature = "hydrate")]
fn encode_component(raw: &str) -> String {
    js_sys::encode_uri_component(raw).into()
}
