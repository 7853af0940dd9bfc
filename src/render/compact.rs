use crate::dealer::DealerRecord;
use crate::settings::LayoutSettings;

use super::helpers::*;
use super::LayoutRenderer;

/// Dense single-column entry: name and service indicators on one line,
/// condensed contact underneath, then website and sub-locations.
pub(crate) struct CompactRenderer;

impl LayoutRenderer for CompactRenderer {
    fn slug(&self) -> &'static str {
        "compact"
    }

    fn push_dealer(&self, out: &mut String, dealer: &DealerRecord, settings: &LayoutSettings) {
        out.push_str("<div class=\"dealer-card dealer-compact-item\">");

        out.push_str("<div class=\"dealer-compact-main\">");
        out.push_str(&format!("<h3>{}</h3>", escape_html(&dealer.company_name)));
        push_services_block(out, &dealer.services(), settings.use_icons);
        out.push_str("</div>");

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
        push_sub_locations_block(out, &dealer.sub_locations, settings.use_icons);

        out.push_str("</div>");
    }
}
