use log::debug;
use percent_encoding::percent_decode_str;
use std::collections::BTreeSet;
use url::Host;

/// One way of respelling a URL. `apply` returns `None` when the rule does not
/// apply to the input.
#[derive(Debug, Clone, Copy)]
pub struct VariantRule {
    pub name: &'static str,
    pub apply: fn(&str) -> Option<String>,
}

pub const RULES: &[VariantRule] = &[
    VariantRule {
        name: "https-to-http",
        apply: https_to_http,
    },
    VariantRule {
        name: "http-to-https",
        apply: http_to_https,
    },
    VariantRule {
        name: "encoded-space-to-space",
        apply: encoded_space_to_space,
    },
    VariantRule {
        name: "space-to-encoded-space",
        apply: space_to_encoded_space,
    },
    VariantRule {
        name: "percent-decoded",
        apply: percent_decoded,
    },
    VariantRule {
        name: "idna-host",
        apply: idna_host,
    },
    VariantRule {
        name: "idna-host-percent-decoded",
        apply: idna_host_percent_decoded,
    },
];

/// `url` plus every spelling produced by [`RULES`]. Rules see only the
/// original `url`, never each other's output.
pub fn expand_variants(url: &str) -> BTreeSet<String> {
    let mut variants = BTreeSet::new();
    variants.insert(url.to_string());
    variants.extend(RULES.iter().filter_map(|rule| (rule.apply)(url)));
    variants
}

fn https_to_http(url: &str) -> Option<String> {
    url.contains("https://").then(|| url.replace("https://", "http://"))
}

fn http_to_https(url: &str) -> Option<String> {
    url.contains("http://").then(|| url.replace("http://", "https://"))
}

fn encoded_space_to_space(url: &str) -> Option<String> {
    url.contains("%20").then(|| url.replace("%20", " "))
}

fn space_to_encoded_space(url: &str) -> Option<String> {
    url.contains(' ').then(|| url.replace(' ', "%20"))
}

fn percent_decoded(url: &str) -> Option<String> {
    Some(percent_decode_str(url).decode_utf8_lossy().into_owned())
}

fn idna_host(url: &str) -> Option<String> {
    let (start, end) = host_span(url)?;
    let host = &url[start..end];

    match Host::parse(host) {
        Ok(ascii) => Some(format!("{}{}{}", &url[..start], ascii, &url[end..])),
        Err(e) => {
            debug!("Skipping IDNA variant of {}: {}", url, e);
            None
        }
    }
}

fn idna_host_percent_decoded(url: &str) -> Option<String> {
    idna_host(url).and_then(|idna| percent_decoded(&idna))
}

/// Byte range of the host inside `url`, without userinfo or port.
fn host_span(url: &str) -> Option<(usize, usize)> {
    let authority_start = url.find("://")? + 3;
    let rest = &url[authority_start..];
    let authority_len = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let authority = &rest[..authority_len];

    let host_offset = authority.rfind('@').map_or(0, |at| at + 1);
    let host_port = &authority[host_offset..];

    let host_len = match host_port.rsplit_once(':') {
        Some((host, port)) if port.chars().all(|c| c.is_ascii_digit()) => host.len(),
        _ => host_port.len(),
    };

    if host_len == 0 {
        return None;
    }

    let start = authority_start + host_offset;
    Some((start, start + host_len))
}
