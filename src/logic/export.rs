//! Group sheet export: flat CSV and a printable HTML page.

use crate::models::{CheckInStatus, Gender, Group, Participant, ParticipantId};

fn find_participant(participants: &[Participant], id: ParticipantId) -> Option<&Participant> {
    participants.iter().find(|p| p.id == id)
}

fn handicap_cell(p: &Participant) -> String {
    match p.handicap {
        Some(h) => h.to_string(),
        None => String::new(),
    }
}

/// Render group assignments as CSV: one row per participant, groups in
/// order, members in display order.
pub fn groups_to_csv(
    participants: &[Participant],
    groups: &[Group],
) -> Result<String, csv::Error> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record([
        "group_code",
        "display_order",
        "registration_number",
        "member_number",
        "name",
        "handicap",
        "pre_group_code",
        "gender",
        "check_in_status",
    ])?;
    for group in groups {
        for (pos, &id) in group.members.iter().enumerate() {
            let Some(p) = find_participant(participants, id) else {
                continue;
            };
            let status = match p.check_in_status {
                CheckInStatus::NotCheckedIn => "not_checked_in",
                CheckInStatus::CheckedIn => "checked_in",
                CheckInStatus::Cancelled => "cancelled",
            };
            let gender = match p.gender {
                Gender::Male => "M",
                Gender::Female => "F",
            };
            let order = (pos + 1).to_string();
            let handicap = handicap_cell(p);
            wtr.write_record([
                group.code.as_str(),
                order.as_str(),
                p.registration_number.as_str(),
                p.member_number.as_str(),
                p.name.as_str(),
                handicap.as_str(),
                p.pre_group_code.as_deref().unwrap_or(""),
                gender,
                status,
            ])?;
        }
    }
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Render group assignments as a printable HTML page: one card per group,
/// female participants highlighted.
pub fn groups_to_html(
    tournament_name: &str,
    participants: &[Participant],
    groups: &[Group],
) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n");
    html.push_str(&format!(
        "<title>{} - Groups</title>\n",
        escape_html(tournament_name)
    ));
    html.push_str(
        "<style>\n\
         body { font-family: Arial, sans-serif; padding: 20px; background: #f5f5f5; }\n\
         .groups { display: flex; flex-wrap: wrap; gap: 20px; }\n\
         .card { background: white; border-radius: 8px; padding: 16px; width: 300px;\n\
                 box-shadow: 0 2px 4px rgba(0,0,0,0.1); }\n\
         .card h2 { margin: 0 0 12px; color: #1976d2; font-size: 1.1em; }\n\
         .member { display: flex; justify-content: space-between; padding: 6px 0;\n\
                   border-bottom: 1px solid #eee; }\n\
         .member:last-child { border-bottom: none; }\n\
         .member.female { background: #ffb6c1; }\n\
         .handicap { color: #666; }\n\
         </style>\n</head>\n<body>\n",
    );
    html.push_str(&format!("<h1>{}</h1>\n", escape_html(tournament_name)));
    html.push_str("<div class=\"groups\">\n");
    for group in groups {
        html.push_str(&format!(
            "<div class=\"card\">\n<h2>Group {} ({} players)</h2>\n",
            escape_html(&group.code),
            group.members.len()
        ));
        for &id in &group.members {
            let Some(p) = find_participant(participants, id) else {
                continue;
            };
            let class = match p.gender {
                Gender::Female => "member female",
                Gender::Male => "member",
            };
            let handicap = match p.handicap {
                Some(h) => format!("{}", h),
                None => "-".to_string(),
            };
            html.push_str(&format!(
                "<div class=\"{}\"><span>{}</span><span class=\"handicap\">HCP {}</span></div>\n",
                class,
                escape_html(&p.name),
                handicap
            ));
        }
        html.push_str("</div>\n");
    }
    html.push_str("</div>\n</body>\n</html>\n");
    html
}
