use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

/// Reserved selector value signaling manual SSID entry.
///
/// Never produced by the device; a network literally named `__other__` would
/// be misrouted to manual-entry mode.
pub const OTHER_SSID_VALUE: &str = "__other__";

/// Label of the manual-entry sentinel option.
pub const OTHER_SSID_LABEL: &str = "Other...";

/// One entry of the network selector
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SsidOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

impl SsidOption {
    /// Option for a scanned network; value and label are both the SSID.
    pub fn network(ssid: &str) -> Self {
        Self {
            value: ssid.to_string(),
            label: ssid.to_string(),
            disabled: false,
        }
    }

    /// The trailing sentinel option that switches the form to manual entry.
    pub fn other() -> Self {
        Self {
            value: OTHER_SSID_VALUE.to_string(),
            label: OTHER_SSID_LABEL.to_string(),
            disabled: false,
        }
    }

    /// Disabled placeholder with an empty value (e.g. after a failed scan).
    pub fn placeholder(label: &str) -> Self {
        Self {
            value: String::new(),
            label: label.to_string(),
            disabled: true,
        }
    }
}

/// Build the selector contents for a successful scan: one option per
/// returned SSID followed by the manual-entry sentinel.
pub fn ssid_options(ssids: &[String]) -> Vec<SsidOption> {
    let mut options: Vec<SsidOption> = ssids.iter().map(|s| SsidOption::network(s)).collect();
    options.push(SsidOption::other());
    options
}

/// Characters kept verbatim in form values (the RFC 3986 unreserved set).
/// Everything else is percent-encoded, so a space becomes `%20`.
const FORM_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Credential pair sent to the setup endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    pub ssid: String,
    pub password: String,
}

impl Credentials {
    /// Render the `application/x-www-form-urlencoded` request body.
    ///
    /// Always exactly two fields, in this order, both values encoded.
    pub fn to_form_body(&self) -> String {
        format!(
            "ssid={}&password={}",
            utf8_percent_encode(&self.ssid, FORM_VALUE),
            utf8_percent_encode(&self.password, FORM_VALUE)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod options {
        use super::*;

        #[test]
        fn network_option_uses_ssid_for_value_and_label() {
            let opt = SsidOption::network("Home");
            assert_eq!(opt.value, "Home");
            assert_eq!(opt.label, "Home");
            assert!(!opt.disabled);
        }

        #[test]
        fn scan_list_ends_with_manual_entry_sentinel() {
            let options = ssid_options(&["Home".to_string(), "Office".to_string()]);
            assert_eq!(options.len(), 3);
            assert_eq!(options[0], SsidOption::network("Home"));
            assert_eq!(options[1], SsidOption::network("Office"));
            assert_eq!(options[2].value, OTHER_SSID_VALUE);
            assert_eq!(options[2].label, OTHER_SSID_LABEL);
        }

        #[test]
        fn empty_scan_list_still_offers_manual_entry() {
            let options = ssid_options(&[]);
            assert_eq!(options.len(), 1);
            assert_eq!(options[0].value, OTHER_SSID_VALUE);
        }

        #[test]
        fn placeholder_is_disabled_with_empty_value() {
            let opt = SsidOption::placeholder("Scan failed");
            assert_eq!(opt.value, "");
            assert_eq!(opt.label, "Scan failed");
            assert!(opt.disabled);
        }
    }

    mod form_encoding {
        use super::*;

        #[test]
        fn plain_values_pass_through() {
            let body = Credentials {
                ssid: "Home".to_string(),
                password: "secret".to_string(),
            }
            .to_form_body();
            assert_eq!(body, "ssid=Home&password=secret");
        }

        #[test]
        fn spaces_encode_as_percent_20() {
            let body = Credentials {
                ssid: "Guest Net".to_string(),
                password: String::new(),
            }
            .to_form_body();
            assert_eq!(body, "ssid=Guest%20Net&password=");
        }

        #[test]
        fn reserved_characters_are_encoded() {
            let body = Credentials {
                ssid: "a&b=c".to_string(),
                password: "p@ss+wörd".to_string(),
            }
            .to_form_body();
            assert_eq!(body, "ssid=a%26b%3Dc&password=p%40ss%2Bw%C3%B6rd");
        }

        #[test]
        fn unreserved_characters_pass_through() {
            let body = Credentials {
                ssid: "net-2.4_GHz~".to_string(),
                password: "x".to_string(),
            }
            .to_form_body();
            assert_eq!(body, "ssid=net-2.4_GHz~&password=x");
        }
    }
}
