use async_trait::async_trait;
use tracing::{info, warn};

use crate::error::IconError;
use crate::fetch::IconFetcher;
use crate::resolve::{IconRequest, ResolvedIcon, classify};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IconPayload {
    Unicode(String),
    Image(Vec<u8>),
}

/// The single side effect of an invocation: edit one role's icon.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleIconUpdate {
    pub role_id: u64,
    pub payload: IconPayload,
}

#[async_trait]
pub trait RoleIconEditor: Send + Sync {
    async fn edit_role_icon(&self, update: RoleIconUpdate) -> Result<(), IconError>;
}

/// What ended up on the role.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppliedIcon {
    Unicode(String),
    Image { source_url: String },
}

/// Resolve `request` and apply the result to its role.
pub async fn set_role_icon<F, E>(
    fetcher: &F,
    editor: &E,
    request: &IconRequest,
) -> Result<AppliedIcon, IconError>
where
    F: IconFetcher + ?Sized,
    E: RoleIconEditor + ?Sized,
{
    let classified = classify(request)?;
    info!(
        role_id = request.role_id,
        input = classified.class.as_str(),
        "resolved role icon input"
    );

    apply_icon(fetcher, editor, request.role_id, classified.icon).await
}

/// Apply an already resolved icon.
///
/// A unicode payload the API turns down is retried exactly once as an image
/// URL built from the same string. Image payloads are only forwarded after a
/// 2xx download; otherwise the role is left untouched.
pub async fn apply_icon<F, E>(
    fetcher: &F,
    editor: &E,
    role_id: u64,
    icon: ResolvedIcon,
) -> Result<AppliedIcon, IconError>
where
    F: IconFetcher + ?Sized,
    E: RoleIconEditor + ?Sized,
{
    match icon {
        ResolvedIcon::Unicode(emoji) => {
            let update = RoleIconUpdate {
                role_id,
                payload: IconPayload::Unicode(emoji.clone()),
            };

            match editor.edit_role_icon(update).await {
                Ok(()) => Ok(AppliedIcon::Unicode(emoji)),
                Err(source) if source.is_remote_rejection() => {
                    info!(?source, role_id, "unicode icon rejected, retrying as image url");
                    apply_image(fetcher, editor, role_id, emoji).await
                }
                Err(source) => Err(source),
            }
        }
        ResolvedIcon::Binary(url) => apply_image(fetcher, editor, role_id, url).await,
    }
}

async fn apply_image<F, E>(
    fetcher: &F,
    editor: &E,
    role_id: u64,
    url: String,
) -> Result<AppliedIcon, IconError>
where
    F: IconFetcher + ?Sized,
    E: RoleIconEditor + ?Sized,
{
    let fetched = fetcher.fetch(&url).await?;
    if !fetched.is_success() {
        warn!(status = fetched.status, url = %url, "icon image download returned non-success status");
        return Err(IconError::FetchFailed {
            url,
            status: Some(fetched.status),
        });
    }

    editor
        .edit_role_icon(RoleIconUpdate {
            role_id,
            payload: IconPayload::Image(fetched.bytes),
        })
        .await?;

    Ok(AppliedIcon::Image { source_url: url })
}
