use billtracker::notify::{Notice, Notifier, Severity};
use billtracker::prelude::*;
use billtracker::{clipboard, default_storage_dir, seed_from_query, TemplateOverrides};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Filter, sort, and draft comments on tracked legislative bills
#[derive(Parser, Debug)]
#[command(name = "billtracker")]
#[command(about = "Filter, sort, and draft comments on tracked legislative bills")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List tracked bills with filters and sorting
    List {
        /// Path to the bills.json data file
        #[arg(long, default_value = "_data/bills.json")]
        data: PathBuf,

        /// Free-text search over bill number, title, and description
        #[arg(short, long)]
        search: Option<String>,

        /// Chamber filter (substring match, e.g. house)
        #[arg(long)]
        chamber: Option<String>,

        /// Status filter (substring match)
        #[arg(long)]
        status: Option<String>,

        /// Threat level filter (exact: critical, high, moderate, low, beneficial, unknown)
        #[arg(long)]
        threat: Option<String>,

        /// Seed filters from a shareable URL query string
        /// (e.g. "search=tax&chamber=house"); explicit flags take precedence
        #[arg(long)]
        query: Option<String>,

        /// Sort order: recency, number, title, or threat
        #[arg(long)]
        sort: Option<String>,

        /// Limit number of results
        #[arg(long)]
        limit: Option<usize>,

        /// Emit JSON lines instead of the text listing
        #[arg(long)]
        json: bool,
    },

    /// Generate a public comment for a bill
    Comment {
        /// Bill number (e.g. "HB 1234")
        bill_number: String,

        /// Stance: support, oppose, or neutral
        #[arg(long, default_value = "neutral")]
        stance: String,

        /// Your own words, substituted into the template's reason token
        #[arg(long)]
        reason: Option<String>,

        /// Copy the comment to the clipboard
        #[arg(long)]
        copy: bool,

        /// Storage directory (default: $HOME/.billtracker, or BILLTRACKER_DIR env var)
        #[arg(long = "storage-dir")]
        storage_dir: Option<String>,
    },

    /// Show, save, or clear the quick-fill contact record
    Contact {
        #[command(subcommand)]
        action: ContactAction,
    },

    /// Show or override the stance comment templates
    Template {
        #[command(subcommand)]
        action: TemplateAction,
    },
}

#[derive(Subcommand, Debug)]
enum ContactAction {
    /// Print the saved contact record
    Show {
        #[arg(long = "storage-dir")]
        storage_dir: Option<String>,
    },

    /// Save contact fields (unset fields keep their current value)
    Save {
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        zip: Option<String>,
        #[arg(long)]
        district: Option<String>,
        #[arg(long = "storage-dir")]
        storage_dir: Option<String>,
    },

    /// Delete the saved contact record (irreversible)
    Clear {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
        #[arg(long = "storage-dir")]
        storage_dir: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
enum TemplateAction {
    /// Print the effective templates (overrides merged over defaults)
    Show {
        #[arg(long = "storage-dir")]
        storage_dir: Option<String>,
    },

    /// Override the template for one stance
    Set {
        /// Stance: support, oppose, or neutral
        stance: String,
        /// Template text; may contain [YOUR REASON], [YOUR CONCERN], or [YOUR COMMENTS]
        template: String,
        #[arg(long = "storage-dir")]
        storage_dir: Option<String>,
    },
}

fn print_available_commands() {
    println!("Available commands:");
    println!("  list      List tracked bills with filters and sorting");
    println!("  comment   Generate a public comment for a bill");
    println!("  contact   Show, save, or clear the quick-fill contact record");
    println!("  template  Show or override the stance comment templates");
}

fn get_storage_dir(storage_dir: Option<String>) -> anyhow::Result<PathBuf> {
    // Check flag first, then environment variable, then default
    if let Some(dir) = storage_dir {
        Ok(PathBuf::from(dir))
    } else if let Ok(dir) = std::env::var("BILLTRACKER_DIR") {
        Ok(PathBuf::from(dir))
    } else {
        default_storage_dir().map_err(|e| anyhow::anyhow!("{}", e))
    }
}

fn open_store(storage_dir: Option<String>) -> anyhow::Result<ProfileStore<FileStorage>> {
    let dir = get_storage_dir(storage_dir)?;
    Ok(ProfileStore::new(FileStorage::new(dir)))
}

fn render_notice(notice: &Notice) {
    match notice.severity {
        Severity::Success => eprintln!("✓ {}", notice.message),
        Severity::Error => eprintln!("✗ {}", notice.message),
        Severity::Info => eprintln!("{}", notice.message),
    }
}

fn run_list_command(cmd: Command) -> anyhow::Result<()> {
    let Command::List {
        data,
        search,
        chamber,
        status,
        threat,
        query,
        sort,
        limit,
        json,
    } = cmd
    else {
        unreachable!()
    };

    // Query-string seeding happens once; explicit flags override it
    let seeded = query.as_deref().map(seed_from_query).unwrap_or_default();
    let mut filters = seeded.filters;
    if let Some(search) = search {
        filters.search = search;
    }
    if let Some(chamber) = chamber {
        filters.chamber = chamber;
    }
    if let Some(status) = status {
        filters.status = status;
    }
    if let Some(threat) = threat {
        filters.threat = threat;
    }
    let sort_key = sort.map(|s| SortKey::from(s.as_str())).unwrap_or(seeded.sort);

    let storage_dir = get_storage_dir(None)?;
    let mut builder = ConfigBuilder::new(data, storage_dir).sort_key(sort_key);
    if let Some(limit) = limit {
        builder = builder.limit(limit);
    }
    let config = builder.build()?;

    let mut cards = load_bills(&config.data_file)?;
    sort_cards(&mut cards, config.sort_key);
    let outcome = apply_filters(&cards, &filters);

    let visible = match config.limit {
        Some(limit) => &outcome.visible[..outcome.visible.len().min(limit)],
        None => &outcome.visible[..],
    };

    if json {
        for &idx in visible {
            println!("{}", serde_json::to_string(&cards[idx])?);
        }
    } else {
        for &idx in visible {
            let card = &cards[idx];
            println!(
                "{:<10} [{}] {} - {} ({}, {})",
                card.bill_number,
                card.threat.as_str(),
                card.title,
                card.status,
                card.chamber.as_str(),
                card.date
            );
        }
        if outcome.show_empty_state {
            println!("No bills match the current filters.");
        }
    }
    eprintln!("{}", outcome.results_label);

    Ok(())
}

fn run_comment_command(cmd: Command) -> anyhow::Result<()> {
    let Command::Comment {
        bill_number,
        stance,
        reason,
        copy,
        storage_dir,
    } = cmd
    else {
        unreachable!()
    };

    let store = open_store(storage_dir)?;
    let contact = store.load_contact();
    let templates = store.load_templates();
    let stance = Stance::from(stance.as_str());

    let comment = generate_comment(
        &bill_number,
        stance,
        reason.as_deref().unwrap_or(""),
        &contact,
        &templates,
    );
    println!("{}", comment);

    if copy {
        let mut notifier = Notifier::default();
        match clipboard::copy_to_clipboard(&comment) {
            Ok(method) => {
                tracing::debug!(?method, "comment copied");
                notifier.emit(Notice::copy_ack());
            }
            Err(e) => notifier.emit(Notice::error(format!("Copy failed: {}", e))),
        }
        if let Some(notice) = notifier.current() {
            render_notice(notice);
        }
    }

    Ok(())
}

fn run_contact_command(action: ContactAction) -> anyhow::Result<()> {
    let mut notifier = Notifier::default();
    match action {
        ContactAction::Show { storage_dir } => {
            let store = open_store(storage_dir)?;
            let info = store.load_contact();
            if info.is_empty() {
                println!("No contact info saved.");
                return Ok(());
            }
            println!("Name:     {}", info.full_name());
            println!("Email:    {}", info.email);
            println!("Phone:    {}", info.phone);
            println!("Address:  {}", info.address);
            println!("City/Zip: {} {}", info.city, info.zip);
            println!("District: {}", info.district);
        }
        ContactAction::Save {
            first_name,
            last_name,
            email,
            phone,
            address,
            city,
            zip,
            district,
            storage_dir,
        } => {
            let mut store = open_store(storage_dir)?;
            // Merge happens in memory; the storage write is a full replace
            let mut info = store.load_contact();
            if let Some(v) = first_name {
                info.first_name = v;
            }
            if let Some(v) = last_name {
                info.last_name = v;
            }
            if let Some(v) = email {
                info.email = v;
            }
            if let Some(v) = phone {
                info.phone = v;
            }
            if let Some(v) = address {
                info.address = v;
            }
            if let Some(v) = city {
                info.city = v;
            }
            if let Some(v) = zip {
                info.zip = v;
            }
            if let Some(v) = district {
                info.district = v;
            }
            match store.save_contact(&info) {
                Ok(()) => notifier.emit(Notice::success("Contact info saved.")),
                Err(e) => notifier.emit(Notice::error(format!("Failed to save contact info: {}", e))),
            }
        }
        ContactAction::Clear { yes, storage_dir } => {
            if !yes {
                eprintln!("This permanently deletes your saved contact info.");
                eprintln!("Re-run with --yes to confirm.");
                return Ok(());
            }
            let mut store = open_store(storage_dir)?;
            match store.clear_contact() {
                Ok(()) => notifier.emit(Notice::success("Contact info cleared.")),
                Err(e) => notifier.emit(Notice::error(format!("Failed to clear contact info: {}", e))),
            }
        }
    }
    if let Some(notice) = notifier.current() {
        render_notice(notice);
    }
    Ok(())
}

fn run_template_command(action: TemplateAction) -> anyhow::Result<()> {
    match action {
        TemplateAction::Show { storage_dir } => {
            let store = open_store(storage_dir)?;
            let templates = store.load_templates();
            for (stance, template) in [
                (Stance::Support, &templates.support),
                (Stance::Oppose, &templates.oppose),
                (Stance::Neutral, &templates.neutral),
            ] {
                println!("--- {} ---", stance.as_str());
                println!("{}\n", template);
            }
        }
        TemplateAction::Set {
            stance,
            template,
            storage_dir,
        } => {
            let mut store = open_store(storage_dir)?;
            let stance = Stance::from(stance.as_str());
            let mut overrides = TemplateOverrides::default();
            overrides.set(stance, template);
            let mut notifier = Notifier::default();
            match store.save_templates(&overrides) {
                Ok(()) => notifier.emit(Notice::success(format!(
                    "Template for {} saved.",
                    stance.as_str()
                ))),
                Err(e) => notifier.emit(Notice::error(format!("Failed to save template: {}", e))),
            }
            if let Some(notice) = notifier.current() {
                render_notice(notice);
            }
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match args.command {
        Some(cmd @ Command::List { .. }) => run_list_command(cmd),
        Some(cmd @ Command::Comment { .. }) => run_comment_command(cmd),
        Some(Command::Contact { action }) => run_contact_command(action),
        Some(Command::Template { action }) => run_template_command(action),
        None => {
            print_available_commands();
            Ok(())
        }
    }
}
