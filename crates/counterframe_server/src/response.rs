//! Frame response documents.
//!
//! A frame is an HTML page whose `<meta>` tags tell the embedding client
//! what to draw, which controls to offer, where to post the next
//! interaction, and which opaque state to send back.

use axum::http::header;
use axum::response::{IntoResponse, Response};
use counterframe_protocol::{Action, State, DECREMENT_BUTTON_INDEX};

/// Title declared in the `og:title` tag.
pub const FRAME_TITLE: &str = "Stateful Counter";

/// Frame protocol version declared in the `fc:frame` tag.
pub const FRAME_VERSION: &str = "vNext";

/// A control rendered in the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameButton {
    /// 1-based position reported back by the client when pressed.
    pub index: u32,
    /// Action the resolver picks for this position.
    pub action: Action,
}

impl FrameButton {
    /// Label shown on the control.
    pub fn label(&self) -> &'static str {
        self.action.label()
    }
}

/// Returns the controls to offer for `state`.
///
/// Only "+" at the floor. Above it, "-" sits at
/// [`DECREMENT_BUTTON_INDEX`] and "+" fills the other slot.
pub fn buttons_for(state: &State) -> Vec<FrameButton> {
    if state.is_at_floor() {
        return vec![FrameButton {
            index: 1,
            action: Action::Increment,
        }];
    }
    (1..=2)
        .map(|index| FrameButton {
            index,
            action: if index == DECREMENT_BUTTON_INDEX {
                Action::Decrement
            } else {
                Action::Increment
            },
        })
        .collect()
}

/// Everything needed to render the next frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameResponse {
    /// State after this request's transition.
    pub state: State,
    /// Signed token carrying `state`.
    pub token: String,
    /// Image URL parameterized by `state`.
    pub image_url: String,
    /// Callback URL for the next interaction.
    pub post_url: String,
    /// Controls offered for `state`.
    pub buttons: Vec<FrameButton>,
}

impl FrameResponse {
    /// Creates a response, deriving the controls from `state`.
    pub fn new(state: State, token: String, image_url: String, post_url: String) -> Self {
        Self {
            buttons: buttons_for(&state),
            state,
            token,
            image_url,
            post_url,
        }
    }

    /// Renders the HTML document.
    pub fn render_html(&self) -> String {
        let mut meta = String::new();
        push_meta(&mut meta, "property", "og:title", FRAME_TITLE);
        push_meta(&mut meta, "property", "og:image", &self.image_url);
        push_meta(&mut meta, "name", "fc:frame", FRAME_VERSION);
        push_meta(&mut meta, "name", "fc:frame:image", &self.image_url);
        push_meta(&mut meta, "name", "fc:frame:post_url", &self.post_url);
        push_meta(&mut meta, "name", "fc:frame:state", &self.token);
        for button in &self.buttons {
            let key = format!("fc:frame:button:{}", button.index);
            push_meta(&mut meta, "name", &key, button.label());
        }

        format!(
            "<!DOCTYPE html>\n<html>\n  <head>\n{meta}  </head>\n  <body></body>\n</html>\n"
        )
    }
}

impl IntoResponse for FrameResponse {
    fn into_response(self) -> Response {
        (
            [(header::CONTENT_TYPE, "text/html")],
            self.render_html(),
        )
            .into_response()
    }
}

fn push_meta(out: &mut String, attr: &str, key: &str, content: &str) {
    out.push_str(&format!(
        "    <meta {attr}=\"{key}\" content=\"{}\" />\n",
        escape_attr(content)
    ));
}

fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
