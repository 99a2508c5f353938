//! E-mail address shape check, as used by the client form.

/// Check an e-mail address against `local@domain.tld`, case-insensitive:
/// local part of `A-Z 0-9 . _ % + -`, domain of `A-Z 0-9 . -`, and a final
/// label of at least two letters.
///
/// This is a form-level plausibility check, not RFC 5322.
pub fn validate_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };

    let local_ok = !local.is_empty()
        && local
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b"._%+-".contains(&b));
    let host_ok = !host.is_empty()
        && host
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'.' || b == b'-');
    let tld_ok = tld.len() >= 2 && tld.bytes().all(|b| b.is_ascii_alphabetic());

    local_ok && host_ok && tld_ok
}
