//! Console tables for the grouped members.
//!
//! Both functions return the text so the caller decides where it goes.

use prettytable::{format, Cell, Row, Table};
use std::fmt::Write;

use crate::models::{Ban, Member, MemberField};
use crate::transform::BanRegistry;

/// Columns of the single-ban table.
const BAN_COLUMNS: [MemberField; 8] = [
    MemberField::FirstName,
    MemberField::LastName,
    MemberField::Email,
    MemberField::Phone,
    MemberField::Street,
    MemberField::HouseNumber,
    MemberField::Place,
    MemberField::BirthDate,
];

/// Every ban with its member count and a full 10-column table.
pub fn render_all(registry: &BanRegistry) -> String {
    let mut out = String::new();
    for (ban, members) in registry.iter() {
        let _ = writeln!(out, "\nBan: {} ({} members)\n", ban, members.len());
        if members.is_empty() {
            let _ = writeln!(out, "  No members in this ban.");
        } else {
            out.push_str(&member_table(members, &MemberField::ALL).to_string());
        }
    }
    out
}

/// One ban as an 8-column table.
pub fn render_ban(registry: &BanRegistry, ban: Ban) -> String {
    let members = registry.members(ban);
    if members.is_empty() {
        return format!("No members in the {ban} category.\n");
    }

    format!(
        "\n=== Members in Ban: {ban} ===\n{}",
        member_table(members, &BAN_COLUMNS)
    )
}

fn member_table(members: &[Member], columns: &[MemberField]) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_DEFAULT);
    table.set_titles(Row::new(columns.iter().map(|f| Cell::new(f.label())).collect()));
    for member in members {
        table.add_row(Row::new(
            columns.iter().map(|f| Cell::new(member.field(*f))).collect(),
        ));
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> BanRegistry {
        BanRegistry::from_members([
            Member {
                first_name: "Zoe".into(),
                last_name: "Aerts".into(),
                email: "zoe@example.org".into(),
                extra_phone: "0470 11 22 33".into(),
                ban: "Knapen".into(),
                ..Default::default()
            },
            Member {
                first_name: "Anna".into(),
                last_name: "Bosmans".into(),
                ban: "Knapen".into(),
                ..Default::default()
            },
        ])
    }

    #[test]
    fn test_render_all_lists_every_ban() {
        let out = render_all(&registry());

        for ban in Ban::ALL {
            assert!(out.contains(&format!("Ban: {ban} (")), "missing {ban}");
        }
        assert!(out.contains("Ban: Knapen (2 members)"));
        assert!(out.contains("Ban: Leiding (0 members)"));
        assert!(out.contains("No members in this ban."));
        assert!(out.contains("Extra Telefoon"));
        assert!(out.contains("0470 11 22 33"));
        assert!(out.find("Anna").unwrap() < out.find("Zoe").unwrap());
    }

    #[test]
    fn test_render_ban() {
        let out = render_ban(&registry(), Ban::Knapen);
        assert!(out.contains("=== Members in Ban: Knapen ==="));
        assert!(out.contains("zoe@example.org"));
        assert!(out.contains("Geboortedatum"));
        assert!(!out.contains("Extra Telefoon"));
    }

    #[test]
    fn test_render_empty_ban() {
        assert_eq!(
            render_ban(&registry(), Ban::Leiding),
            "No members in the Leiding category.\n"
        );
    }
}
