use crate::cli::commands::with_store;
use crate::cli::parser::ResidentAction;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::{FamilyMemberInput, Resident, ResidentInput};
use crate::ui::messages::{header, info, success};
use crate::utils::colors::{GREY, RESET, color_for_optional_field, colorize};
use crate::utils::input::{ask_confirmation, parse_member};
use crate::utils::table::Table;
use crate::utils::time::format_local;

fn parse_members(specs: &[String]) -> AppResult<Vec<FamilyMemberInput>> {
    specs.iter().map(|s| parse_member(s)).collect()
}

pub fn handle(action: &ResidentAction, cfg: &Config) -> AppResult<()> {
    match action {
        ResidentAction::Add {
            flat,
            owner,
            age,
            total_members,
            members,
        } => {
            let members = parse_members(members)?;
            let input = ResidentInput {
                id: None,
                flat_no: flat.clone(),
                owner_name: owner.clone(),
                age: *age,
                total_members: total_members.unwrap_or(members.len() as u32 + 1),
                members,
            };

            let resident = with_store(cfg, |store| store.upsert_resident(input))?;
            success(format!(
                "Resident {} registered for flat {} (id: {})",
                resident.owner_name, resident.flat_no, resident.id
            ));
        }

        ResidentAction::Edit {
            id,
            flat,
            owner,
            age,
            total_members,
            members,
            clear_members,
        } => {
            let new_members = parse_members(members)?;

            let resident = with_store(cfg, |store| {
                let current = store.get_resident(id)?;
                let mut input = ResidentInput::from(&current);

                if let Some(f) = flat {
                    input.flat_no = f.clone();
                }
                if let Some(o) = owner {
                    input.owner_name = o.clone();
                }
                if let Some(a) = age {
                    input.age = *a;
                }
                if let Some(t) = total_members {
                    input.total_members = *t;
                }
                if *clear_members {
                    input.members.clear();
                }
                input.members.extend(new_members);

                store.upsert_resident(input)
            })?;

            success(format!(
                "Resident {} (flat {}) updated",
                resident.owner_name, resident.flat_no
            ));
        }

        ResidentAction::List => {
            let residents = with_store(cfg, |store| Ok(store.list_residents()))?;
            print_residents(&residents, cfg);
        }

        ResidentAction::Show { id } => {
            let resident = with_store(cfg, |store| store.get_resident(id))?;
            print_resident(&resident, cfg);
        }

        ResidentAction::Del { id, yes } => {
            let resident = with_store(cfg, |store| store.get_resident(id))?;

            let prompt = format!(
                "Delete resident {} (flat {})? This action is irreversible.",
                resident.owner_name, resident.flat_no
            );
            if !*yes && !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }

            with_store(cfg, |store| store.delete_resident(id))?;
            success(format!("Resident {} has been deleted.", resident.owner_name));
        }
    }

    Ok(())
}

fn print_residents(residents: &[Resident], cfg: &Config) {
    if residents.is_empty() {
        println!("No residents registered.");
        return;
    }

    header(format!("🏠 Residents ({})", residents.len()), &cfg.separator_char);

    let mut table = Table::with_headers(&["ID", "FLAT", "OWNER", "AGE", "MEMBERS", "FAMILY"]);
    for r in residents {
        let family = r.members_summary();
        let shown = if family.is_empty() { "--" } else { family.as_str() };
        let family_cell = colorize(shown, color_for_optional_field(&family));
        table.add_row(vec![
            r.id.clone(),
            r.flat_no.clone(),
            r.owner_name.clone(),
            r.age.to_string(),
            r.total_members.to_string(),
            family_cell,
        ]);
    }
    print!("{}", table.render());
}

fn print_resident(r: &Resident, cfg: &Config) {
    header(format!("🏠 Flat {} · {}", r.flat_no, r.owner_name), &cfg.separator_char);
    println!("ID:            {}", r.id);
    println!("Age:           {}", r.age);
    println!("Total members: {}", r.total_members);
    println!("Created:       {}", format_local(&r.created_at));
    println!("Updated:       {}", format_local(&r.updated_at));

    if r.members.is_empty() {
        println!("{GREY}No family members listed.{RESET}");
        return;
    }

    println!();
    let mut table = Table::with_headers(&["NAME", "AGE", "RELATION"]);
    for m in &r.members {
        table.add_row(vec![m.name.clone(), m.age.to_string(), m.relation.clone()]);
    }
    print!("{}", table.render());
}
