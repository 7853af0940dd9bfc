//! Fragment helpers shared by all layout variants. Every helper silently
//! omits its fragment when the relevant fields are empty.

/// Escapes text for HTML element content and attribute values.
pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Percent-encodes a string for use in a URL query component.
pub(crate) fn encode_query(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}

/// Resolves the map URL for a location. Priority: explicit custom link,
/// then a latitude/longitude pair, then the address text, then empty
/// (caller renders plain text). Pure function of its inputs.
pub fn generate_map_link(
    custom_map_link: &str,
    latitude: Option<f64>,
    longitude: Option<f64>,
    address: &str,
) -> String {
    if !custom_map_link.is_empty() {
        return custom_map_link.to_string();
    }
    if let (Some(lat), Some(lng)) = (latitude, longitude) {
        return format!(
            "https://www.google.com/maps/search/?api=1&query={}",
            encode_query(&format!("{},{}", lat, lng))
        );
    }
    if !address.is_empty() {
        return format!(
            "https://www.google.com/maps/search/?api=1&query={}",
            encode_query(address)
        );
    }
    String::new()
}

/// Strips non-dial characters for a `tel:` href. Returns an empty string
/// when nothing dialable remains.
pub(crate) fn tel_href(phone: &str) -> String {
    let digits: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    if digits.is_empty() {
        String::new()
    } else {
        format!("tel:{}", digits)
    }
}

/// Address (linked to its resolved map URL when one exists) and phone
/// (as a `tel:` link). Omitted entirely when both fields are empty.
pub(crate) fn push_contact_block(
    out: &mut String,
    address: &str,
    phone: &str,
    map_link: &str,
) {
    if address.is_empty() && phone.is_empty() {
        return;
    }
    out.push_str("<div class=\"dealer-contact\">");
    if !address.is_empty() {
        let address_html = escape_html(address).replace('\n', "<br>");
        out.push_str("<div class=\"dealer-address\">");
        if map_link.is_empty() {
            out.push_str(&format!("<span>{}</span>", address_html));
        } else {
            out.push_str(&format!(
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
                escape_html(map_link),
                address_html
            ));
        }
        out.push_str("</div>");
    }
    if !phone.is_empty() {
        let href = tel_href(phone);
        out.push_str("<div class=\"dealer-phone\">");
        if href.is_empty() {
            out.push_str(&format!("<span>{}</span>", escape_html(phone)));
        } else {
            out.push_str(&format!(
                "<a href=\"{}\">{}</a>",
                escape_html(&href),
                escape_html(phone)
            ));
        }
        out.push_str("</div>");
    }
    out.push_str("</div>");
}

/// External website link; omitted when the website field is empty.
pub(crate) fn push_website_button(out: &mut String, website: &str) {
    if website.is_empty() {
        return;
    }
    out.push_str(&format!(
        "<a class=\"dealer-website-button\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">Visit Website</a>",
        escape_html(website)
    ));
}

/// Service offerings. Icon mode emits one indicator per service type with
/// an `active` class for set flags; list mode emits only the active names.
/// When no flag is set, both modes emit the placeholder message.
pub(crate) fn push_services_block(
    out: &mut String,
    services: &[(&'static str, bool)],
    use_icons: bool,
) {
    let any_active = services.iter().any(|(_, set)| *set);
    if !any_active {
        out.push_str("<p class=\"dealer-no-services\">No services specified.</p>");
        return;
    }
    if use_icons {
        out.push_str("<div class=\"dealer-services\">");
        for (label, set) in services {
            let state = if *set { " active" } else { "" };
            out.push_str(&format!(
                "<span class=\"dealer-service-icon{}\" title=\"{}\" aria-label=\"{}\">{}</span>",
                state,
                label,
                label,
                &label[..1]
            ));
        }
        out.push_str("</div>");
    } else {
        out.push_str("<ul class=\"dealer-services-list\">");
        for (label, set) in services {
            if *set {
                out.push_str(&format!("<li>{}</li>", label));
            }
        }
        out.push_str("</ul>");
    }
}

/// Sub-locations in stored order; each entry reuses the contact, website,
/// and services helpers with its own fields. Omitted when the sequence is
/// empty.
pub(crate) fn push_sub_locations_block(
    out: &mut String,
    sub_locations: &[crate::dealer::SubLocation],
    use_icons: bool,
) {
    if sub_locations.is_empty() {
        return;
    }
    out.push_str("<div class=\"dealer-sub-locations\">");
    out.push_str("<h4>Additional Locations</h4>");
    for sub in sub_locations {
        out.push_str("<div class=\"dealer-sub-location\">");
        if !sub.name.is_empty() {
            out.push_str(&format!("<h5>{}</h5>", escape_html(&sub.name)));
        }
        let map_link = generate_map_link("", None, None, &sub.address);
        push_contact_block(out, &sub.address, &sub.phone, &map_link);
        push_website_button(out, &sub.website);
        push_services_block(out, &sub.services(), use_icons);
        out.push_str("</div>");
    }
    out.push_str("</div>");
}
