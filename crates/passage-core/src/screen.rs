//! Screen adapters: optional page-level structure around route content.

use crate::descriptor::PropsMap;

/// External wrapper that provides page-level structure around route content.
///
/// Invoked by `RouteBinding::render` when the route's `screen` option is
/// set; `props` are the route's screen props, forwarded verbatim. Wrapping
/// is a pure structural decision with no effect on visibility or animation
/// state.
pub trait ScreenAdapter<V> {
    /// Wrap the produced content.
    fn wrap(&self, props: &PropsMap, content: V) -> V;
}

/// Adapter that passes content through unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoScreen;

impl<V> ScreenAdapter<V> for NoScreen {
    fn wrap(&self, _props: &PropsMap, content: V) -> V {
        content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct TagScreen;

    impl ScreenAdapter<String> for TagScreen {
        fn wrap(&self, props: &PropsMap, content: String) -> String {
            let id = props.get("id").cloned().unwrap_or(json!(null));
            format!("screen[{}]({})", id, content)
        }
    }

    #[test]
    fn test_no_screen_is_identity() {
        let props = PropsMap::new();
        assert_eq!(NoScreen.wrap(&props, "page".to_string()), "page");
    }

    #[test]
    fn test_adapter_receives_props() {
        let mut props = PropsMap::new();
        props.insert("id".to_string(), json!(1));
        assert_eq!(
            TagScreen.wrap(&props, "page".to_string()),
            "screen[1](page)"
        );
    }
}
