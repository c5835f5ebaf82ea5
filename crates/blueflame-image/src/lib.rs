//! Placeholder image generation.
//!
//! Renders a fixed neon-flame SVG titled with the prompt and returns it as
//! a base64 `data:` URI. Works without any model or network access.

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use tracing::debug;

use blueflame_core::store::{insert_record, DocumentStore};
use blueflame_core::types::ImageRequestRecord;

/// Titles are cut to this many characters.
pub const MAX_TITLE_CHARS: usize = 80;

/// Title used when the prompt is empty.
pub const FALLBACK_TITLE: &str = "Shahbaz AI";

/// Media type prefix of every returned URI.
pub const DATA_URI_PREFIX: &str = "data:image/svg+xml;base64,";

/// Generates placeholder images and audit-logs each request.
pub struct ImagePlaceholderGenerator {
    store: Arc<dyn DocumentStore>,
}

impl ImagePlaceholderGenerator {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Render the placeholder for `prompt` and record the request.
    ///
    /// Never fails. A failed audit insert is logged at debug and dropped.
    pub fn make_image(&self, prompt: &str, style: Option<&str>) -> String {
        let uri = placeholder_data_uri(prompt);

        let record = ImageRequestRecord {
            prompt: prompt.to_string(),
            style: style.map(str::to_string),
        };
        if let Err(e) = insert_record(self.store.as_ref(), &record) {
            debug!(error = %e, "Image request audit skipped");
        }

        uri
    }
}

/// Title shown on the image: fallback for empty prompts, trimmed, truncated.
pub fn image_title(prompt: &str) -> String {
    let source = if prompt.is_empty() { FALLBACK_TITLE } else { prompt };
    source.trim().chars().take(MAX_TITLE_CHARS).collect()
}

/// Pure rendering: prompt to `data:` URI.
pub fn placeholder_data_uri(prompt: &str) -> String {
    let svg = render_svg(&image_title(prompt));
    format!("{}{}", DATA_URI_PREFIX, STANDARD.encode(svg.as_bytes()))
}

/// SVG markup with `title` as the main label.
pub fn render_svg(title: &str) -> String {
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="1024" height="1024" viewBox="0 0 1024 1024">
    <defs>
      <linearGradient id="g" x1="0" x2="1" y1="0" y2="1">
        <stop offset="0%" stop-color="#00A8FF"/>
        <stop offset="50%" stop-color="#00EFFF"/>
        <stop offset="100%" stop-color="#64FFFF"/>
      </linearGradient>
      <filter id="glow" x="-40%" y="-40%" width="180%" height="180%">
        <feGaussianBlur stdDeviation="12" result="coloredBlur"/>
        <feMerge>
          <feMergeNode in="coloredBlur"/>
          <feMergeNode in="SourceGraphic"/>
        </feMerge>
      </filter>
    </defs>
    <rect width="1024" height="1024" fill="#000814"/>
    <circle cx="512" cy="512" r="360" fill="url(#g)" opacity="0.15" filter="url(#glow)"/>
    <path d="M512 240 C600 260 700 340 720 460 C700 520 620 560 560 640 C520 700 520 760 512 784 C504 760 504 700 464 640 C404 560 324 520 304 460 C324 340 424 260 512 240 Z" fill="url(#g)" opacity="0.9" filter="url(#glow)"/>
    <text x="50%" y="82%" dominant-baseline="middle" text-anchor="middle" font-family="Inter, Arial" font-size="44" fill="#E6F7FF" opacity="0.95">{}</text>
    <text x="50%" y="90%" dominant-baseline="middle" text-anchor="middle" font-family="Inter, Arial" font-size="24" fill="#8AD8FF" opacity="0.85">Shahbaz AI · BlueFlame</text>
  </svg>"##,
        escape_xml(title)
    )
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
