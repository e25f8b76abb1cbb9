//! Identifier generation for custom templates and text layers

use chrono::Utc;
use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::canvas::TextLayer;

const CUSTOM_PREFIX: &str = "custom-";
const SUFFIX_LEN: usize = 6;

/// Generate a custom template id: `custom-<millis>-<random suffix>`
///
/// The random suffix keeps ids distinct when several templates are saved
/// within the same millisecond.
pub fn custom_template_id() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SUFFIX_LEN)
        .map(|b| char::from(b).to_ascii_lowercase())
        .collect();
    format!(
        "{}{}-{}",
        CUSTOM_PREFIX,
        Utc::now().timestamp_millis(),
        suffix
    )
}

/// Id for a new text layer: wall-clock millis, raised above every existing id
pub fn next_text_layer_id(existing: &[TextLayer]) -> u64 {
    let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
    let floor = existing
        .iter()
        .map(|layer| layer.id)
        .max()
        .map_or(0, |max| max.saturating_add(1));
    now.max(floor)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::canvas::TextStyle;

    fn layer(id: u64) -> TextLayer {
        TextLayer {
            id,
            content: "x".to_string(),
            style: TextStyle::default(),
        }
    }

    #[test]
    fn test_custom_id_shape() {
        let id = custom_template_id();
        assert!(id.starts_with(CUSTOM_PREFIX));
        let suffix = id.rsplit('-').next().unwrap();
        assert_eq!(suffix.len(), SUFFIX_LEN);
    }

    #[test]
    fn test_rapid_custom_ids_are_distinct() {
        let ids: HashSet<String> = (0..500).map(|_| custom_template_id()).collect();
        assert_eq!(ids.len(), 500);
    }

    #[test]
    fn test_layer_id_above_existing() {
        let far_future = u64::MAX / 2;
        let id = next_text_layer_id(&[layer(3), layer(far_future)]);
        assert_eq!(id, far_future + 1);
    }

    #[test]
    fn test_layer_id_uses_clock_when_empty() {
        let before = Utc::now().timestamp_millis() as u64;
        let id = next_text_layer_id(&[]);
        assert!(id >= before);
    }
}
