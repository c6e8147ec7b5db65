use folio_core::platform::Platform;
use web_sys as web;

use crate::dom;

pub fn init(window: &web::Window, document: &web::Document) -> anyhow::Result<Platform> {
    let ua = window
        .navigator()
        .user_agent()
        .map_err(|e| anyhow::anyhow!("userAgent: {:?}", e))?;
    let platform = Platform::from_user_agent(&ua);
    let root = dom::root_element(document).ok_or_else(|| anyhow::anyhow!("no <html> element"))?;
    for class in platform.css_classes() {
        dom::set_class(&root, &class, true);
    }
    log::info!(
        "[platform] {}{}",
        platform.browser.slug(),
        if platform.mobile { " (mobile)" } else { "" }
    );
    Ok(platform)
}
