//! The drawing seam streaming panels paint onto.

use std::sync::{Arc, Mutex};

use base64::prelude::*;
use serde_json::Value;

/// A canvas-backed image surface. One per streaming panel.
pub trait Canvas: Send {
    /// Paint one decoded image frame.
    fn draw_frame(&mut self, image: &[u8]);

    /// Blank the surface (stream stopped or errored).
    fn clear(&mut self);
}

/// Canvases are shared between the panel and the dispatch callback.
pub type SharedCanvas = Arc<Mutex<dyn Canvas>>;

pub(crate) fn lock_canvas(canvas: &SharedCanvas) -> std::sync::MutexGuard<'_, dyn Canvas + 'static> {
    canvas.lock().unwrap_or_else(|e| e.into_inner())
}

/// Decode a streaming task's `response` (a base64 image string).
///
/// Anything else is dropped with a low-severity log: a missed frame must
/// not destabilize the dashboard.
pub fn decode_image(response: &Value) -> Option<Vec<u8>> {
    let text = response.as_str()?;
    match BASE64_STANDARD.decode(text) {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            tracing::warn!(error = %e, "image frame failed base64 decode");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_base64_string() {
        let bytes = decode_image(&json!("aGVsbG8=")).unwrap();
        assert_eq!(bytes, b"hello");
    }

    #[test]
    fn non_string_response_is_dropped() {
        assert!(decode_image(&json!(null)).is_none());
        assert!(decode_image(&json!({"image": "aGVsbG8="})).is_none());
        assert!(decode_image(&json!(42)).is_none());
    }

    #[test]
    fn invalid_base64_is_dropped() {
        assert!(decode_image(&json!("not base64!!!")).is_none());
    }
}
