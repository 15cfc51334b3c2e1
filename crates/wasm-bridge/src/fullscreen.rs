//! Fullscreen toggling for the widget container

use price_chart_shared::{ChartError, ChartResult};
use web_sys::{Document, Element};

pub trait FullscreenApi {
    fn is_fullscreen(&self) -> bool;
    fn request(&self) -> ChartResult<()>;
    fn exit(&self) -> ChartResult<()>;
}

/// Enter fullscreen if nothing is fullscreen, otherwise leave it.
///
/// Returns the state that was requested. The browser confirms the change
/// later through `fullscreenchange`.
pub fn toggle_fullscreen(api: &dyn FullscreenApi) -> ChartResult<bool> {
    if api.is_fullscreen() {
        log::debug!("Exiting fullscreen");
        api.exit()?;
        Ok(false)
    } else {
        log::debug!("Requesting fullscreen");
        api.request()?;
        Ok(true)
    }
}

/// Browser Fullscreen API bound to one container element.
pub struct WebFullscreen {
    document: Document,
    target: Element,
}

impl WebFullscreen {
    pub fn new(document: Document, target: Element) -> Self {
        Self { document, target }
    }
}

impl FullscreenApi for WebFullscreen {
    fn is_fullscreen(&self) -> bool {
        self.document.fullscreen_element().is_some()
    }

    fn request(&self) -> ChartResult<()> {
        self.target
            .request_fullscreen()
            .map_err(|e| ChartError::Dom {
                message: format!("requestFullscreen failed: {e:?}"),
            })
    }

    fn exit(&self) -> ChartResult<()> {
        self.document.exit_fullscreen();
        Ok(())
    }
}
