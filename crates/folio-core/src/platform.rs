//! User-agent brand sniffing used to hang per-browser CSS fixes off `<html>`.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Browser {
    Chrome,
    Edge,
    Firefox,
    Safari,
    Opera,
    Other,
}

impl Browser {
    pub fn slug(self) -> &'static str {
        match self {
            Browser::Chrome => "chrome",
            Browser::Edge => "edge",
            Browser::Firefox => "firefox",
            Browser::Safari => "safari",
            Browser::Opera => "opera",
            Browser::Other => "other",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Platform {
    pub browser: Browser,
    pub mobile: bool,
}

impl Platform {
    pub fn from_user_agent(ua: &str) -> Self {
        // Order matters: Edge and Opera also advertise Chrome and Safari.
        let browser = if ua.contains("Edg/") || ua.contains("EdgA/") || ua.contains("EdgiOS/") {
            Browser::Edge
        } else if ua.contains("OPR/") || ua.contains("Opera") {
            Browser::Opera
        } else if ua.contains("Firefox/") || ua.contains("FxiOS/") {
            Browser::Firefox
        } else if ua.contains("Chrome/") || ua.contains("CriOS/") || ua.contains("Chromium/") {
            Browser::Chrome
        } else if ua.contains("Safari/") {
            Browser::Safari
        } else {
            Browser::Other
        };
        let mobile = ["Mobi", "Android", "iPhone", "iPad", "iPod"]
            .iter()
            .any(|m| ua.contains(m));
        Self { browser, mobile }
    }

    pub fn css_classes(&self) -> Vec<String> {
        let mut out = vec![format!("is-{}", self.browser.slug())];
        if self.mobile {
            out.push("is-mobile".to_string());
        }
        out
    }
}
