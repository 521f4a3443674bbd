use crate::cli::commands::with_store;
use crate::cli::parser::VisitorAction;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::{Visitor, VisitorInput};
use crate::ui::messages::{header, success};
use crate::utils::colors::{color_for_status, colorize};
use crate::utils::input::parse_visitor_type;
use crate::utils::table::Table;
use crate::utils::time::{format_local, format_optional, stay_duration};

pub fn handle(action: &VisitorAction, cfg: &Config) -> AppResult<()> {
    match action {
        VisitorAction::Checkin {
            name,
            mobile,
            kind,
            flat,
            purpose,
        } => {
            let input = VisitorInput {
                name: name.clone(),
                mobile_number: mobile.clone(),
                kind: parse_visitor_type(kind)?,
                flat_no: flat.clone(),
                purpose: purpose.clone(),
            };

            let visitor = with_store(cfg, |store| store.check_in_visitor(input))?;
            success(format!(
                "{} {} checked in to flat {} at {} (id: {})",
                visitor.kind.icon(),
                visitor.name,
                visitor.flat_no,
                format_local(&visitor.in_time),
                visitor.id
            ));
        }

        VisitorAction::Edit {
            id,
            name,
            mobile,
            kind,
            flat,
            purpose,
        } => {
            let kind = kind.as_deref().map(parse_visitor_type).transpose()?;

            let visitor = with_store(cfg, |store| {
                let mut patch = VisitorInput::from(&store.get_visitor(id)?);
                if let Some(n) = name {
                    patch.name = n.clone();
                }
                if let Some(m) = mobile {
                    patch.mobile_number = m.clone();
                }
                if let Some(k) = kind {
                    patch.kind = k;
                }
                if let Some(f) = flat {
                    patch.flat_no = f.clone();
                }
                if let Some(p) = purpose {
                    patch.purpose = p.clone();
                }
                store.update_visitor(id, patch)
            })?;

            success(format!("Visitor {} updated", visitor.name));
        }

        VisitorAction::Checkout { id } => {
            let visitor = with_store(cfg, |store| store.check_out_visitor(id))?;
            success(format!(
                "{} checked out at {} (stayed {})",
                visitor.name,
                format_optional(visitor.out_time.as_ref()),
                stay_duration(&visitor.in_time, visitor.out_time.as_ref())
            ));
        }

        VisitorAction::List { active, flat } => {
            let visitors: Vec<Visitor> = with_store(cfg, |store| Ok(store.list_visitors()))?
                .into_iter()
                .filter(|v| !*active || v.is_active())
                .filter(|v| flat.as_ref().is_none_or(|f| v.flat_no.eq_ignore_ascii_case(f)))
                .collect();

            let title = if *active { "🚶 Active visitors" } else { "🚶 Visitors" };
            print_visitors(title, &visitors, &cfg.separator_char);
        }

        VisitorAction::Show { id } => {
            let v = with_store(cfg, |store| store.get_visitor(id))?;
            header(format!("{} {}", v.kind.icon(), v.name), &cfg.separator_char);
            println!("ID:      {}", v.id);
            println!("Mobile:  {}", v.mobile_number);
            println!("Type:    {}", v.kind);
            println!("Flat:    {}", v.flat_no);
            println!("Purpose: {}", v.purpose);
            println!("In:      {}", format_local(&v.in_time));
            println!("Out:     {}", format_optional(v.out_time.as_ref()));
            println!("Stay:    {}", stay_duration(&v.in_time, v.out_time.as_ref()));
        }
    }

    Ok(())
}

/// Render visitors as a table; shared with `watch`.
pub(crate) fn print_visitors(title: &str, visitors: &[Visitor], separator: &str) {
    if visitors.is_empty() {
        println!("No visitors to show.");
        return;
    }

    header(format!("{title} ({})", visitors.len()), separator);

    let mut table = Table::with_headers(&[
        "ID", "NAME", "MOBILE", "TYPE", "FLAT", "PURPOSE", "IN", "OUT", "STATUS",
    ]);
    for v in visitors {
        let status = if v.is_active() { "inside" } else { "left" };
        table.add_row(vec![
            v.id.clone(),
            v.name.clone(),
            v.mobile_number.clone(),
            v.kind.to_string(),
            v.flat_no.clone(),
            v.purpose.clone(),
            format_local(&v.in_time),
            format_optional(v.out_time.as_ref()),
            colorize(status, color_for_status(v.is_active())),
        ]);
    }
    print!("{}", table.render());
}
