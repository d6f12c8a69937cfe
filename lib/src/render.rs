use crate::section::Section;
use crate::unit::Service;
use std::fmt;

/// The `Key=Value` pairs a section contributes, in catalog order. Unset
/// fields and fields whose text is empty are left out.
pub fn entries<S: Section>(section: &S) -> Vec<(&'static str, String)> {
    S::FIELDS
        .iter()
        .filter_map(|field| {
            (field.value)(section)
                .filter(|v| !v.is_empty())
                .map(|v| (field.key, v))
        })
        .collect()
}

fn push_section<S: Section>(out: &mut String, section: &S) {
    if !out.is_empty() {
        out.push('\n');
    }
    out.push('[');
    out.push_str(S::HEADER);
    out.push_str("]\n");
    for (key, value) in entries(section) {
        out.push_str(key);
        out.push('=');
        out.push_str(&value);
        out.push('\n');
    }
}

/// Render the service as `.service` unit file text.
///
/// Always emits `[Unit]`, `[Service]` and `[Install]` in that order, with a
/// blank line between sections. Values are written verbatim; callers that
/// accept untrusted input should run [`crate::validate::validate`] first.
pub fn render(service: &Service) -> String {
    let mut out = String::new();
    push_section(&mut out, &service.unit);
    push_section(&mut out, &service.service);
    push_section(&mut out, &service.install);
    log::debug!("Rendered {} ({} bytes)", service.file_name(), out.len());
    out
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}
