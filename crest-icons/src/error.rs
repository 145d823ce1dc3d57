/// Failure kinds of a single role icon invocation.
///
/// Every variant is turned into a user-facing message by the command layer;
/// none of them are meant to escape to the framework error hook.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IconError {
    #[error("no attachment, emoji or URL was provided")]
    MissingInput,

    #[error("could not download icon image from {url}")]
    FetchFailed { url: String, status: Option<u16> },

    #[error("the role edit was refused")]
    PermissionDenied,

    #[error("{0}")]
    RemoteApi(String),

    #[error("{0}")]
    Unexpected(String),
}

impl IconError {
    /// Whether the remote role API itself turned the edit down.
    pub fn is_remote_rejection(&self) -> bool {
        matches!(self, Self::PermissionDenied | Self::RemoteApi(_))
    }
}

#[cfg(test)]
mod tests {
    use super::IconError;

    #[test]
    fn only_api_refusals_count_as_remote_rejections() {
        assert!(IconError::PermissionDenied.is_remote_rejection());
        assert!(IconError::RemoteApi("Invalid Form Body".to_owned()).is_remote_rejection());
        assert!(!IconError::MissingInput.is_remote_rejection());
        assert!(!IconError::Unexpected("boom".to_owned()).is_remote_rejection());
        assert!(
            !IconError::FetchFailed {
                url: "https://example.com/x.png".to_owned(),
                status: Some(404),
            }
            .is_remote_rejection()
        );
    }

    #[test]
    fn remote_api_message_is_displayed_verbatim() {
        let error = IconError::RemoteApi("Invalid Form Body".to_owned());
        assert_eq!(error.to_string(), "Invalid Form Body");
    }
}
