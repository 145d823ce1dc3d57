/// Applying a resolved icon to a role through the remote API.
pub mod apply;
pub mod error;
/// HTTP collaborator used to download icon images.
pub mod fetch;
/// Input classification: attachment, custom emoji, unicode emoji or URL.
pub mod resolve;
pub mod tier;

pub use apply::{AppliedIcon, IconPayload, RoleIconEditor, RoleIconUpdate, apply_icon, set_role_icon};
pub use error::IconError;
pub use fetch::{FetchedImage, HttpIconFetcher, IconFetcher};
pub use resolve::{Classified, IconRequest, InputClass, ResolvedIcon, classify};
