//! Exclusive Content Gate
//!
//! Decides how much of a post body a reader gets. Posts flagged exclusive
//! are shown in full to any signed-in member; anonymous readers get the
//! first `preview_length` characters followed by `...` and a banner marker
//! telling the page to render the sign-up prompt.
//!
//! Truncation is on a raw character boundary. Markdown that gets cut in the
//! middle of a construct renders however the markdown renderer handles it.

use serde::{Deserialize, Serialize};

use crate::shared::content::Post;
use crate::shared::identity::IdentityView;

/// Characters of an exclusive post shown to anonymous readers
pub const DEFAULT_PREVIEW_LENGTH: usize = 500;

/// Appended to a truncated preview
pub const ELLIPSIS: &str = "...";

/// Anything the gate can decide on
pub trait GatedContent {
    fn is_exclusive(&self) -> bool;
    /// `None` is treated as an empty body
    fn body(&self) -> Option<&str>;
}

impl GatedContent for Post {
    fn is_exclusive(&self) -> bool {
        self.metadata.exclusive
    }

    fn body(&self) -> Option<&str> {
        Some(&self.metadata.content)
    }
}

/// A bare flag + body pair
#[derive(Debug, Clone, Copy)]
pub struct ContentItem<'a> {
    pub exclusive: bool,
    pub body: Option<&'a str>,
}

impl GatedContent for ContentItem<'_> {
    fn is_exclusive(&self) -> bool {
        self.exclusive
    }

    fn body(&self) -> Option<&str> {
        self.body
    }
}

/// What the reader is allowed to see
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ContentView {
    Full { body: String },
    Preview { body: String, banner: bool },
}

impl ContentView {
    pub fn body(&self) -> &str {
        match self {
            Self::Full { body } | Self::Preview { body, .. } => body,
        }
    }

    pub fn is_preview(&self) -> bool {
        matches!(self, Self::Preview { .. })
    }
}

/// Gate with a configured preview budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentGate {
    preview_length: usize,
}

impl Default for ContentGate {
    fn default() -> Self {
        Self::new(DEFAULT_PREVIEW_LENGTH)
    }
}

impl ContentGate {
    pub fn new(preview_length: usize) -> Self {
        Self { preview_length }
    }

    pub fn preview_length(&self) -> usize {
        self.preview_length
    }

    /// Full body for open posts and members, preview otherwise
    pub fn render<C: GatedContent + ?Sized>(
        &self,
        item: &C,
        viewer: Option<&IdentityView>,
    ) -> ContentView {
        let body = item.body().unwrap_or_default();

        if !item.is_exclusive() || viewer.is_some() {
            return ContentView::Full {
                body: body.to_string(),
            };
        }

        ContentView::Preview {
            body: truncate_preview(body, self.preview_length),
            banner: true,
        }
    }
}

/// [`ContentGate::render`] with the default preview length
pub fn render_view<C: GatedContent + ?Sized>(
    item: &C,
    viewer: Option<&IdentityView>,
) -> ContentView {
    ContentGate::default().render(item, viewer)
}

/// First `limit` characters, plus `...` if anything was cut
pub fn truncate_preview(body: &str, limit: usize) -> String {
    match body.char_indices().nth(limit) {
        Some((cut, _)) => {
            let mut preview = String::with_capacity(cut + ELLIPSIS.len());
            preview.push_str(&body[..cut]);
            preview.push_str(ELLIPSIS);
            preview
        }
        None => body.to_string(),
    }
}
