//! Canonical zone names.
//!
//! Operators write zones loosely (`Example.ORG`, `dns://example.org:53`,
//! `10.0.0.0/8`); everything downstream compares the canonical form:
//! lower-case, fully qualified, trailing dot.

use crate::config::ConfigError;
use ipnetwork::IpNetwork;
use std::str::FromStr;

const MAX_LABEL_LEN: usize = 63;
const MAX_NAME_LEN: usize = 255;

/// Normalizes one operator-supplied zone into canonical form.
///
/// CIDR notation yields the covering reverse zone(s); a prefix that does not
/// fall on an octet (IPv4) or nibble (IPv6) boundary expands into every zone
/// at the next boundary.
pub fn normalize_zone(raw: &str) -> Result<Vec<String>, ConfigError> {
    let trimmed = raw.trim();
    let without_scheme = strip_scheme(trimmed);

    if without_scheme.contains('/') {
        let network = IpNetwork::from_str(without_scheme).map_err(|e| {
            ConfigError::Validation(format!("Invalid zone '{}': {}", raw, e))
        })?;
        return Ok(reverse_zones(&network));
    }

    let host = strip_port(without_scheme);
    Ok(vec![canonical_name(host).map_err(|reason| {
        ConfigError::Validation(format!("Invalid zone '{}': {}", raw, reason))
    })?])
}

/// Normalizes a list of zones, preserving order and dropping repeats.
pub fn normalize_zones<S: AsRef<str>>(raw: &[S]) -> Result<Vec<String>, ConfigError> {
    let mut zones: Vec<String> = Vec::with_capacity(raw.len());
    for zone in raw {
        for normalized in normalize_zone(zone.as_ref())? {
            if !zones.contains(&normalized) {
                zones.push(normalized);
            }
        }
    }
    Ok(zones)
}

/// Lower-cases `name` and makes it fully qualified.
pub fn canonical_name(name: &str) -> Result<String, String> {
    if name.is_empty() {
        return Err("empty name".to_string());
    }
    if name == "." {
        return Ok(".".to_string());
    }

    let mut canonical = name.to_ascii_lowercase();
    if !canonical.ends_with('.') {
        canonical.push('.');
    }
    if canonical.len() > MAX_NAME_LEN {
        return Err(format!("name exceeds {} octets", MAX_NAME_LEN));
    }

    for label in canonical[..canonical.len() - 1].split('.') {
        if label.is_empty() {
            return Err("empty label".to_string());
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(format!("label '{}' exceeds {} octets", label, MAX_LABEL_LEN));
        }
    }

    Ok(canonical)
}

fn strip_scheme(zone: &str) -> &str {
    match zone.get(..6) {
        Some(scheme) if scheme.eq_ignore_ascii_case("dns://") => &zone[6..],
        _ => zone,
    }
}

fn strip_port(zone: &str) -> &str {
    match zone.rsplit_once(':') {
        Some((host, port))
            if !host.contains(':') && !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) =>
        {
            host
        }
        _ => zone,
    }
}

fn reverse_zones(network: &IpNetwork) -> Vec<String> {
    match network {
        IpNetwork::V4(net) => {
            let digits: Vec<u8> = net.network().octets().to_vec();
            expand(&digits, net.prefix() as usize, 8, "in-addr.arpa.", |d| {
                d.to_string()
            })
        }
        IpNetwork::V6(net) => {
            let digits: Vec<u8> = net
                .network()
                .octets()
                .iter()
                .flat_map(|b| [b >> 4, b & 0x0f])
                .collect();
            expand(&digits, net.prefix() as usize, 4, "ip6.arpa.", |d| {
                format!("{:x}", d)
            })
        }
    }
}

/// Builds reverse zones from address `digits` (octets or nibbles of
/// `width` bits each) for a prefix of `prefix` bits.
fn expand(
    digits: &[u8],
    prefix: usize,
    width: usize,
    suffix: &str,
    render: impl Fn(u8) -> String,
) -> Vec<String> {
    let used = prefix.div_ceil(width);
    let spare_bits = used * width - prefix;
    let count = 1usize << spare_bits;

    (0..count)
        .map(|offset| {
            let mut labels: Vec<String> = Vec::with_capacity(used + 1);
            for (index, digit) in digits[..used].iter().enumerate() {
                let value = if index + 1 == used {
                    digit + offset as u8
                } else {
                    *digit
                };
                labels.push(render(value));
            }
            labels.reverse();
            labels.push(suffix.to_string());
            labels.join(".")
        })
        .collect()
}
