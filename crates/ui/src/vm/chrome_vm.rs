use quiz_core::Chrome;

/// Rendered attributes of the help and navigation regions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChromeVm {
    pub help_class: Option<String>,
    pub navigation_class: Option<String>,
}

#[must_use]
pub fn map_chrome(chrome: &Chrome) -> ChromeVm {
    ChromeVm {
        help_class: chrome.help().to_attribute(),
        navigation_class: chrome.navigation().to_attribute(),
    }
}
