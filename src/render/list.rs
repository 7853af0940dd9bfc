use crate::dealer::DealerRecord;
use crate::settings::LayoutSettings;

use super::helpers::*;
use super::LayoutRenderer;

/// Four-column horizontal row per dealer: identity, contact, services,
/// actions (website button plus sub-locations).
pub(crate) struct ListRenderer;

impl LayoutRenderer for ListRenderer {
    fn slug(&self) -> &'static str {
        "list"
    }

    fn push_dealer(&self, out: &mut String, dealer: &DealerRecord, settings: &LayoutSettings) {
        out.push_str("<div class=\"dealer-card dealer-row\">");

        out.push_str("<div class=\"dealer-row-col dealer-row-identity\">");
        out.push_str(&format!("<h3>{}</h3>", escape_html(&dealer.company_name)));
        out.push_str("</div>");

        out.push_str("<div class=\"dealer-row-col dealer-row-contact\">");
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
        out.push_str("</div>");

        out.push_str("<div class=\"dealer-row-col dealer-row-services\">");
        push_services_block(out, &dealer.services(), settings.use_icons);
        out.push_str("</div>");

        out.push_str("<div class=\"dealer-row-col dealer-row-actions\">");
        push_website_button(out, &dealer.website);
        push_sub_locations_block(out, &dealer.sub_locations, settings.use_icons);
        out.push_str("</div>");

        out.push_str("</div>");
    }
}
