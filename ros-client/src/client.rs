use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::{debug, instrument};

use crate::{
    config::ClientConfig,
    context::RequestContext,
    error::{DecodeError, EncodeError, Error, Result},
    id::RecordId,
    transport::{HttpTransport, Transport},
};

/// A RouterOS 7 REST client.
///
/// The typed `<menu>_list` and `<menu>_patch` operations are generated on top
/// of the generic [`Client::list`] and [`Client::patch`]. Operations share no
/// state beyond the transport and may run concurrently.
#[derive(Debug, Clone)]
pub struct Client<T = HttpTransport> {
    transport: T,
}

impl Client<HttpTransport> {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self::with_transport(HttpTransport::new(config)?))
    }

    /// Build a client from `ROS7API_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(&ClientConfig::from_env()?)
    }
}

impl<T: Transport> Client<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch every record under `path`, in the order the device returns them.
    #[instrument(skip_all, fields(path = path), err)]
    pub async fn list<R: DeserializeOwned>(
        &self,
        ctx: &RequestContext,
        path: &str,
    ) -> Result<Vec<R>> {
        let body = self.transport.get(ctx, path).await?;
        let records: Vec<R> = serde_json::from_slice(&body).map_err(DecodeError::from)?;
        debug!(count = records.len(), "records decoded");
        Ok(records)
    }

    /// Apply `update` to the record `id` under `path` and return the record as
    /// stored by the device.
    ///
    /// Only the fields present in `update` are sent.
    #[instrument(skip_all, fields(path = path, id = %id), err)]
    pub async fn patch<U, R>(
        &self,
        ctx: &RequestContext,
        path: &str,
        id: &RecordId,
        update: &U,
    ) -> Result<R>
    where
        U: Serialize + Sync,
        R: DeserializeOwned,
    {
        let body = serde_json::to_vec(update).map_err(EncodeError::from)?;
        let response = self
            .transport
            .patch(ctx, &format!("{path}/{id}"), body)
            .await?;
        decode_patch_response(&response)
    }
}

/// Error fields RouterOS merges into a patch response.
#[derive(Debug, Default, Deserialize)]
struct PatchStatus {
    #[serde(default)]
    error: i64,
    #[serde(default)]
    message: String,
    #[serde(default)]
    detail: String,
}

fn decode_patch_response<R: DeserializeOwned>(body: &[u8]) -> Result<R> {
    let value: serde_json::Value = serde_json::from_slice(body).map_err(DecodeError::from)?;
    let status = PatchStatus::deserialize(&value).map_err(DecodeError::from)?;
    if status.error != 0 {
        return Err(Error::Server {
            code: status.error,
            message: status.message,
            detail: status.detail,
        });
    }
    Ok(R::deserialize(value).map_err(DecodeError::from)?)
}
