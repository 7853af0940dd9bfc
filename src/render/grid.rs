use crate::dealer::DealerRecord;
use crate::settings::LayoutSettings;

use super::helpers::*;
use super::LayoutRenderer;

/// Card-per-dealer vertical grid: header with the company name, body with
/// contact, website, services, and sub-locations.
pub(crate) struct GridRenderer;

impl LayoutRenderer for GridRenderer {
    fn slug(&self) -> &'static str {
        "grid"
    }

    fn push_dealer(&self, out: &mut String, dealer: &DealerRecord, settings: &LayoutSettings) {
        out.push_str("<div class=\"dealer-card\">");

        out.push_str("<div class=\"dealer-card-header\">");
        out.push_str(&format!("<h3>{}</h3>", escape_html(&dealer.company_name)));
        out.push_str("</div>");

        out.push_str("<div class=\"dealer-card-body\">");
        let map_link = generate_map_link(
            &dealer.custom_map_link,
            dealer.latitude,
            dealer.longitude,
            &dealer.company_address,
        );
        push_contact_block(
            out,
            &dealer.company_address,
            &dealer.company_phone,
            &map_link,
        );
        push_website_button(out, &dealer.website);
        push_services_block(out, &dealer.services(), settings.use_icons);
        push_sub_locations_block(out, &dealer.sub_locations, settings.use_icons);
        out.push_str("</div>");

        out.push_str("</div>");
    }
}
