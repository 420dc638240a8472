use std::time::Duration;

use async_trait::async_trait;
use console_core::Delay;
use gloo_timers::future::TimeoutFuture;

/// Browser timer backing delayed status changes.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserDelay;

#[async_trait(?Send)]
impl Delay for BrowserDelay {
    async fn sleep(&self, duration: Duration) {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        TimeoutFuture::new(millis).await;
    }
}

/// Scrolls the element with `element_id` into view, if it is mounted.
pub fn scroll_into_view(element_id: &str) {
    if let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(element_id))
    {
        element.scroll_into_view();
    }
}
