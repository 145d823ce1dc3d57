use std::sync::LazyLock;

use regex::Regex;

use crate::error::IconError;

/// Base of the emoji asset CDN. Custom emoji icons are downloaded from here.
pub const EMOJI_CDN_BASE: &str = "https://cdn.discordapp.com/emojis";
/// Render size requested from the CDN for custom emoji icons.
pub const EMOJI_RENDER_SIZE: u32 = 256;

static CUSTOM_EMOJI_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<(a)?:(\w+):(\d+)>").expect("custom emoji pattern must compile")
});

/// One role icon invocation as handed over by the command layer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IconRequest {
    pub role_id: u64,
    pub text: Option<String>,
    pub attachment_url: Option<String>,
}

impl IconRequest {
    pub fn new(role_id: u64) -> Self {
        Self {
            role_id,
            ..Self::default()
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_attachment(mut self, url: impl Into<String>) -> Self {
        self.attachment_url = Some(url.into());
        self
    }

    /// Free-form argument, trimmed. Blank input counts as absent.
    fn text(&self) -> Option<&str> {
        self.text
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }
}

/// What the role icon should become.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolvedIcon {
    /// Unicode emoji set directly, no download.
    Unicode(String),
    /// Image that has to be downloaded from this URL first.
    Binary(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputClass {
    Attachment,
    CustomEmoji,
    UnicodeEmoji,
    Url,
}

impl InputClass {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Attachment => "attachment",
            Self::CustomEmoji => "custom_emoji",
            Self::UnicodeEmoji => "unicode_emoji",
            Self::Url => "url",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classified {
    pub class: InputClass,
    pub icon: ResolvedIcon,
}

type Rule = fn(&IconRequest) -> Option<ResolvedIcon>;

/// Evaluated top to bottom; the first rule that yields an icon wins.
const RULES: &[(InputClass, Rule)] = &[
    (InputClass::Attachment, attachment_rule),
    (InputClass::CustomEmoji, custom_emoji_rule),
    (InputClass::UnicodeEmoji, unicode_emoji_rule),
    (InputClass::Url, url_rule),
];

/// Classify a request and resolve it to an icon payload.
///
/// Pure: no network access happens here. The only failure is a request
/// carrying neither an attachment nor any text.
pub fn classify(request: &IconRequest) -> Result<Classified, IconError> {
    RULES
        .iter()
        .find_map(|(class, rule)| {
            rule(request).map(|icon| Classified {
                class: *class,
                icon,
            })
        })
        .ok_or(IconError::MissingInput)
}

/// Build the CDN URL of a custom emoji asset.
pub fn custom_emoji_url(emoji_id: &str, animated: bool) -> String {
    let ext = if animated { "gif" } else { "png" };
    format!("{EMOJI_CDN_BASE}/{emoji_id}.{ext}?size={EMOJI_RENDER_SIZE}")
}

/// Heuristic only: anything that is neither a link nor a custom emoji tag.
pub fn looks_like_unicode_emoji(text: &str) -> bool {
    !has_http_scheme(text) && !CUSTOM_EMOJI_PATTERN.is_match(text)
}

fn has_http_scheme(text: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        text.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

fn attachment_rule(request: &IconRequest) -> Option<ResolvedIcon> {
    request
        .attachment_url
        .as_ref()
        .map(|url| ResolvedIcon::Binary(url.clone()))
}

fn custom_emoji_rule(request: &IconRequest) -> Option<ResolvedIcon> {
    let captures = CUSTOM_EMOJI_PATTERN.captures(request.text()?)?;
    let animated = captures.get(1).is_some();
    let emoji_id = captures.get(3)?.as_str();

    Some(ResolvedIcon::Binary(custom_emoji_url(emoji_id, animated)))
}

fn unicode_emoji_rule(request: &IconRequest) -> Option<ResolvedIcon> {
    let text = request.text()?;
    looks_like_unicode_emoji(text).then(|| ResolvedIcon::Unicode(text.to_owned()))
}

fn url_rule(request: &IconRequest) -> Option<ResolvedIcon> {
    request
        .text()
        .map(|text| ResolvedIcon::Binary(text.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::{
        IconRequest, InputClass, ResolvedIcon, classify, custom_emoji_url,
        looks_like_unicode_emoji,
    };
    use crate::error::IconError;

    const ROLE_ID: u64 = 42;

    fn resolve_icon(request: &IconRequest) -> Result<ResolvedIcon, IconError> {
        classify(request).map(|classified| classified.icon)
    }

    #[test]
    fn attachment_wins_over_any_text() {
        let attachment = "https://cdn.discordapp.com/attachments/1/2/crown.png";
        for text in ["👑", "<:crown:123456>", "https://example.com/x.png", ""] {
            let request = IconRequest::new(ROLE_ID)
                .with_text(text)
                .with_attachment(attachment);
            let classified = classify(&request).unwrap();
            assert_eq!(classified.class, InputClass::Attachment);
            assert_eq!(classified.icon, ResolvedIcon::Binary(attachment.to_owned()));
        }
    }

    #[test]
    fn missing_text_and_attachment_is_an_error() {
        assert_eq!(
            resolve_icon(&IconRequest::new(ROLE_ID)),
            Err(IconError::MissingInput)
        );
        assert_eq!(
            resolve_icon(&IconRequest::new(ROLE_ID).with_text("   ")),
            Err(IconError::MissingInput)
        );
    }

    #[test]
    fn static_custom_emoji_resolves_to_png_asset() {
        let request = IconRequest::new(ROLE_ID).with_text("<:name:123456>");
        let classified = classify(&request).unwrap();
        assert_eq!(classified.class, InputClass::CustomEmoji);
        assert_eq!(
            classified.icon,
            ResolvedIcon::Binary("https://cdn.discordapp.com/emojis/123456.png?size=256".to_owned())
        );
    }

    #[test]
    fn animated_custom_emoji_resolves_to_gif_asset() {
        let request = IconRequest::new(ROLE_ID).with_text("<a:party:9999>");
        assert_eq!(
            resolve_icon(&request),
            Ok(ResolvedIcon::Binary(
                "https://cdn.discordapp.com/emojis/9999.gif?size=256".to_owned()
            ))
        );
    }

    #[test]
    fn custom_emoji_tag_is_found_inside_surrounding_text() {
        let request = IconRequest::new(ROLE_ID).with_text("use <:blob:77> please");
        assert_eq!(
            resolve_icon(&request),
            Ok(ResolvedIcon::Binary(custom_emoji_url("77", false)))
        );
    }

    #[test]
    fn plain_emoji_resolves_to_unicode() {
        let request = IconRequest::new(ROLE_ID).with_text("👑");
        let classified = classify(&request).unwrap();
        assert_eq!(classified.class, InputClass::UnicodeEmoji);
        assert_eq!(classified.icon, ResolvedIcon::Unicode("👑".to_owned()));
    }

    #[test]
    fn http_links_resolve_to_binary_url() {
        for url in [
            "https://example.com/x.png",
            "http://example.com/x.png",
            "HTTPS://EXAMPLE.COM/X.PNG",
        ] {
            let classified = classify(&IconRequest::new(ROLE_ID).with_text(url)).unwrap();
            assert_eq!(classified.class, InputClass::Url);
            assert_eq!(classified.icon, ResolvedIcon::Binary(url.to_owned()));
        }
    }

    #[test]
    fn malformed_emoji_tag_falls_through_to_unicode_attempt() {
        let request = IconRequest::new(ROLE_ID).with_text("<:broken:abc>");
        assert_eq!(
            resolve_icon(&request),
            Ok(ResolvedIcon::Unicode("<:broken:abc>".to_owned()))
        );
    }

    #[test]
    fn unicode_heuristic_rejects_links_and_tags() {
        assert!(looks_like_unicode_emoji("🔥"));
        assert!(looks_like_unicode_emoji("not an emoji"));
        assert!(looks_like_unicode_emoji("httpish"));
        assert!(!looks_like_unicode_emoji("https://example.com/x.png"));
        assert!(!looks_like_unicode_emoji("<a:party:9999>"));
    }

    #[test]
    fn resolution_is_repeatable() {
        let request = IconRequest::new(ROLE_ID).with_text("<a:party:9999>");
        assert_eq!(resolve_icon(&request), resolve_icon(&request));

        let request = IconRequest::new(ROLE_ID).with_text("👑");
        assert_eq!(classify(&request), classify(&request));
    }
}
